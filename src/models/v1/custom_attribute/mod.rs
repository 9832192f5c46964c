use chrono::Utc;
use sea_orm::prelude::*;
use sea_orm::{QueryOrder, Set};

use crate::entities::v1::{custom_attribute_definitions, custom_attribute_values, people};

impl custom_attribute_definitions::Model {
    /// Definitions attached to one kind of object, ordered by title
    pub async fn for_definition_type<C, T>(db: &C, definition_type: T) -> Result<Vec<Self>, DbErr>
    where
        C: ConnectionTrait,
        T: ToString,
    {
        custom_attribute_definitions::Entity::find()
            .filter(
                custom_attribute_definitions::Column::DefinitionType
                    .eq(definition_type.to_string()),
            )
            .order_by_asc(custom_attribute_definitions::Column::Title)
            .all(db)
            .await
    }

    /// Dropdown options, stored comma separated
    pub fn options(&self) -> Vec<String> {
        self.multi_choice_options
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|option| !option.is_empty())
            .map(ToString::to_string)
            .collect()
    }
}

impl custom_attribute_values::Model {
    /// Every value stored on an object, each with its mapped person if any
    pub async fn for_object<C, T>(
        db: &C,
        attributable_type: T,
        attributable_id: i32,
    ) -> Result<Vec<(Self, Option<people::Model>)>, DbErr>
    where
        C: ConnectionTrait,
        T: ToString,
    {
        custom_attribute_values::Entity::find()
            .filter(custom_attribute_values::Column::AttributableType.eq(attributable_type.to_string()))
            .filter(custom_attribute_values::Column::AttributableId.eq(attributable_id))
            .order_by_asc(custom_attribute_values::Column::Id)
            .find_also_related(people::Entity)
            .all(db)
            .await
    }

    /// Insert or overwrite the value of one definition on one object
    pub async fn upsert<C, T>(
        db: &C,
        custom_attribute_id: i32,
        attributable_type: T,
        attributable_id: i32,
        attribute_value: Option<String>,
        attribute_object_id: Option<i32>,
    ) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
        T: ToString,
    {
        let attributable_type = attributable_type.to_string();
        let now = Utc::now().naive_utc();
        let existing = custom_attribute_values::Entity::find()
            .filter(custom_attribute_values::Column::CustomAttributeId.eq(custom_attribute_id))
            .filter(custom_attribute_values::Column::AttributableType.eq(attributable_type.clone()))
            .filter(custom_attribute_values::Column::AttributableId.eq(attributable_id))
            .one(db)
            .await?;

        match existing {
            Some(existing) => {
                let mut model: custom_attribute_values::ActiveModel = existing.into();
                model.attribute_value = Set(attribute_value);
                model.attribute_object_id = Set(attribute_object_id);
                model.updated_at = Set(now);

                model.update(db).await
            }
            None => {
                let model = custom_attribute_values::ActiveModel {
                    custom_attribute_id: Set(custom_attribute_id),
                    attributable_type: Set(attributable_type),
                    attributable_id: Set(attributable_id),
                    attribute_value: Set(attribute_value),
                    attribute_object_id: Set(attribute_object_id),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                };

                model.insert(db).await
            }
        }
    }
}
