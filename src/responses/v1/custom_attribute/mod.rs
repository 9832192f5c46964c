use actix_web::body::BoxBody;
use actix_web::{HttpRequest, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use utoipa::{IntoResponses, ToSchema};

use crate::entities::v1::custom_attribute_definitions::AttributeType;

/// One exported cell
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExportColumn {
    #[schema(example = "Reviewed")]
    pub title: String,
    #[schema(value_type = String, example = "Checkbox")]
    pub attribute_type: AttributeType,
    /// Display value, empty when nothing is stored
    #[schema(example = "TRUE")]
    pub value: String,
}

/// Custom attribute columns of one object, ordered by title
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, IntoResponses, PartialEq, Eq)]
#[response(status = 200, description = "OK")]
#[serde(rename_all = "camelCase")]
pub struct ExportRow {
    #[schema(example = "control")]
    pub definition_type: String,
    #[schema(example = 1)]
    pub object_id: i32,
    pub columns: Vec<ExportColumn>,
}

impl ExportRow {
    pub fn column(&self, title: &str) -> Option<&ExportColumn> {
        self.columns.iter().find(|column| column.title == title)
    }
}

impl Responder for ExportRow {
    type Body = BoxBody;

    fn respond_to(self, _: &HttpRequest) -> HttpResponse<Self::Body> {
        HttpResponse::Ok().json(self)
    }
}
