use sea_orm::ConnectionTrait;

use crate::cache::LocalCache;
use crate::converters::{CustomAttributeColumnHandler, CustomAttributeValue, RowConverter};
use crate::entities::v1::custom_attribute_values;
use crate::errors::Error;
use crate::responses::v1::custom_attribute::{ExportColumn, ExportRow};

use super::definitions::definitions;

/// Definitions of `definition_type` together with the values stored on one
/// object of that type
pub async fn load_row<C: ConnectionTrait>(
    db: &C,
    cache: &LocalCache,
    definition_type: &str,
    object_id: i32,
) -> Result<RowConverter, Error> {
    let definitions = definitions(db, cache, definition_type).await?;
    let values = custom_attribute_values::Model::for_object(db, definition_type, object_id)
        .await?
        .into_iter()
        .filter_map(|(value, person)| CustomAttributeValue::from_model(value, person, &definitions))
        .collect();

    Ok(RowConverter::new(definition_type, object_id, definitions, values))
}

#[::tracing::instrument(skip(db, cache))]
pub async fn export<C: ConnectionTrait>(
    db: &C,
    cache: &LocalCache,
    definition_type: &str,
    object_id: i32,
) -> Result<ExportRow, Error> {
    let row = load_row(db, cache, definition_type, object_id).await?;

    let columns = row
        .definitions()
        .iter()
        .map(|definition| ExportColumn {
            title: definition.title.clone(),
            attribute_type: definition.attribute_type,
            value: CustomAttributeColumnHandler::new(&row, &definition.title)
                .get_value()
                .unwrap_or_default(),
        })
        .collect::<Vec<_>>();

    ::tracing::debug!(columns = columns.len(), "Row exported");

    Ok(ExportRow {
        definition_type: row.object_type.clone(),
        object_id,
        columns,
    })
}
