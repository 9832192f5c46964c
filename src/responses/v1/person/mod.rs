use actix_web::body::BoxBody;
use actix_web::{HttpRequest, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use utoipa::{IntoResponses, ToSchema};

use crate::entities::v1::people;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, IntoResponses, PartialEq, Eq, Hash)]
#[response(status = 200, description = "OK")]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "John")]
    pub name: String,
    #[schema(example = "john@example.com")]
    pub email: String,
}

impl From<people::Model> for Person {
    fn from(person: people::Model) -> Self {
        Self {
            id: person.id,
            name: person.name,
            email: person.email,
        }
    }
}

impl Responder for Person {
    type Body = BoxBody;

    fn respond_to(self, _: &HttpRequest) -> HttpResponse<Self::Body> {
        HttpResponse::Ok().json(self)
    }
}
