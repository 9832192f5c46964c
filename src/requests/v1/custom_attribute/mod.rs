use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Cells of one imported row keyed by column title
#[derive(Clone, Debug, Default, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImportRequest {
    #[schema(example = json!({"Reviewed": "yes", "Owner": "john@example.com"}))]
    pub values: BTreeMap<String, String>,
}
