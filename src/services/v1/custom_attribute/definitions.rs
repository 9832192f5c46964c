use sea_orm::ConnectionTrait;

use crate::cache::{Cache, CacheKey, LocalCache};
use crate::converters::CustomAttributeDefinition;
use crate::entities::v1::custom_attribute_definitions::Model;
use crate::errors::Error;

/// Definitions of one object type ordered by title, read through the cache
#[::tracing::instrument(skip(db, cache))]
pub async fn definitions<C: ConnectionTrait>(
    db: &C,
    cache: &LocalCache,
    definition_type: &str,
) -> Result<Vec<CustomAttributeDefinition>, Error> {
    let key = CacheKey::definitions(definition_type);

    match cache.get::<Vec<CustomAttributeDefinition>>(&key).await {
        Ok(Some(definitions)) => {
            ::tracing::debug!(count = definitions.len(), "Definitions cache hit");

            return Ok(definitions);
        }
        Ok(None) => ::tracing::debug!("Definitions cache miss"),
        Err(e) => ::tracing::error!(error = %e, "Failed to read definitions from cache"),
    }

    let definitions = Model::for_definition_type(db, definition_type)
        .await?
        .into_iter()
        .map(CustomAttributeDefinition::from)
        .collect::<Vec<_>>();

    if let Err(e) = cache.set(&key, &definitions, cache.ttl()).await {
        ::tracing::error!(error = %e, "Failed to cache definitions");
    }

    Ok(definitions)
}
