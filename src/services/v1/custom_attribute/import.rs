use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::cache::LocalCache;
use crate::converters::{CustomAttributeColumnHandler, ParsedValue};
use crate::entities::v1::{custom_attribute_values, people};
use crate::errors::{Error, Validation};
use crate::requests::v1::custom_attribute::ImportRequest;
use crate::responses::v1::custom_attribute::ExportRow;

use super::export::{export, load_row};

/// Value to store for one definition: `(custom_attribute_id, value, person id)`
type Pending = (i32, Option<String>, Option<i32>);

/// Parses every cell of `request` and stores them on the object.
///
/// Nothing is written unless every cell is valid; failures are reported per
/// column title.
#[::tracing::instrument(skip(db, cache, request), fields(columns = request.values.len()))]
pub async fn import(
    db: &DatabaseConnection,
    cache: &LocalCache,
    definition_type: &str,
    object_id: i32,
    request: ImportRequest,
) -> Result<ExportRow, Error> {
    let row = load_row(db, cache, definition_type, object_id).await?;
    let mut validation = Validation::new();
    let mut pending: Vec<Pending> = Vec::with_capacity(request.values.len());

    for (title, raw) in &request.values {
        let handler = CustomAttributeColumnHandler::new(&row, title);

        let parsed = match handler.parse_item(raw) {
            Ok(parsed) => parsed,
            Err(message) => {
                validation.add(title, message);
                continue;
            }
        };

        let Some(definition) = handler.get_ca_definition() else {
            continue;
        };

        match parsed {
            ParsedValue::Empty => pending.push((definition.id, None, None)),
            ParsedValue::Value(value) => pending.push((definition.id, Some(value), None)),
            ParsedValue::Person(email) => match people::Model::find_by_email(db, &email).await? {
                Some(person) => pending.push((definition.id, None, Some(person.id))),
                None => validation.add(title, format!("Person \"{}\" not found", email)),
            },
        }
    }

    if !validation.is_empty() {
        ::tracing::warn!(errors = ?validation.errors(), "Import rejected");

        return Err(validation.into());
    }

    let attributable_type = definition_type.to_string();

    db.transaction::<_, (), Error>(|txn| {
        Box::pin(async move {
            for (custom_attribute_id, value, person_id) in pending {
                custom_attribute_values::Model::upsert(
                    txn,
                    custom_attribute_id,
                    &attributable_type,
                    object_id,
                    value,
                    person_id,
                )
                .await?;
            }

            Ok(())
        })
    })
    .await?;

    ::tracing::info!("Row imported");

    export(db, cache, definition_type, object_id).await
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::entities::v1::custom_attribute_definitions::AttributeType;
    use crate::testing::setup;

    fn request(values: &[(&str, &str)]) -> ImportRequest {
        ImportRequest {
            values: values
                .iter()
                .map(|(title, raw)| (title.to_string(), raw.to_string()))
                .collect::<BTreeMap<_, _>>(),
        }
    }

    async fn definitions(db: &DatabaseConnection) {
        setup::create_definition(db, "control", "Reviewed", AttributeType::Checkbox, None)
            .await
            .unwrap();
        setup::create_definition(db, "control", "Owner", AttributeType::MapPerson, None)
            .await
            .unwrap();
        setup::create_definition(db, "control", "Level", AttributeType::Dropdown, Some("Low,High"))
            .await
            .unwrap();
        setup::create_definition(db, "control", "Due", AttributeType::Date, None)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_import_stores_values_and_returns_export() {
        let db = setup::database().await;
        let cache = setup::cache();
        definitions(&db).await;
        setup::create_person(&db, "owner@example.com").await.unwrap();

        let row = import(
            &db,
            &cache,
            "control",
            5,
            request(&[
                ("Reviewed", "yes"),
                ("Owner", "owner@example.com"),
                ("Level", "high"),
                ("Due", "03/15/2018"),
            ]),
        )
        .await
        .unwrap();

        assert_eq!(row.column("Reviewed").unwrap().value, "TRUE");
        assert_eq!(row.column("Owner").unwrap().value, "owner@example.com");
        assert_eq!(row.column("Level").unwrap().value, "High");
        assert_eq!(row.column("Due").unwrap().value, "2018-03-15");
    }

    #[tokio::test]
    async fn test_import_overwrites_and_clears() {
        let db = setup::database().await;
        let cache = setup::cache();
        definitions(&db).await;

        import(&db, &cache, "control", 5, request(&[("Reviewed", "true")]))
            .await
            .unwrap();
        let row = import(&db, &cache, "control", 5, request(&[("Reviewed", "no"), ("Level", "")]))
            .await
            .unwrap();

        assert_eq!(row.column("Reviewed").unwrap().value, "FALSE");
        assert_eq!(row.column("Level").unwrap().value, "");

        let values = custom_attribute_values::Model::for_object(&db, "control", 5)
            .await
            .unwrap();
        assert_eq!(values.len(), 2);
    }

    #[tokio::test]
    async fn test_import_reports_every_invalid_column_and_writes_nothing() {
        let db = setup::database().await;
        let cache = setup::cache();
        definitions(&db).await;

        let result = import(
            &db,
            &cache,
            "control",
            5,
            request(&[
                ("Reviewed", "maybe"),
                ("Owner", "nobody@example.com"),
                ("Level", "Medium"),
                ("Unknown", "x"),
                ("Due", "2018-03-15"),
            ]),
        )
        .await;

        let Err(Error::Validation(validation)) = result else {
            panic!("expected validation error");
        };

        assert!(validation.get("Reviewed").is_some());
        assert!(validation.get("Owner").is_some());
        assert!(validation.get("Level").is_some());
        assert!(validation.get("Unknown").is_some());
        assert!(validation.get("Due").is_none());

        let values = custom_attribute_values::Model::for_object(&db, "control", 5)
            .await
            .unwrap();
        assert!(values.is_empty());
    }

    #[tokio::test]
    async fn test_import_mandatory_blank_is_rejected() {
        let db = setup::database().await;
        setup::create_mandatory_definition(&db, "control", "Title", AttributeType::Text)
            .await
            .unwrap();

        let result = import(&db, &setup::cache(), "control", 1, request(&[("Title", "  ")])).await;

        assert!(matches!(result, Err(Error::Validation(_))));
    }
}
