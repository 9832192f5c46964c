use sea_orm::prelude::*;

use crate::entities::v1::people::{Column, Entity, Model};

impl Model {
    /// Exact, case-sensitive lookup
    pub async fn find_by_email<C, T>(db: &C, email: T) -> Result<Option<Self>, DbErr>
    where
        C: ConnectionTrait,
        T: ToString,
    {
        Entity::find()
            .filter(Column::Email.eq(email.to_string()))
            .one(db)
            .await
    }
}
