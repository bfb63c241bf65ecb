//! Path parameter extractors

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use reaction_core::{ObjectRef, ObjectType};
use serde::Deserialize;

use crate::response::ApiError;

#[derive(Debug, Deserialize)]
struct RawObjectPath {
    object_type: String,
    id: String,
}

/// Content item addressed as `/{object_type}/{id}`
#[derive(Debug, Clone)]
pub struct ObjectPath(pub ObjectRef);

#[async_trait]
impl<S> FromRequestParts<S> for ObjectPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<RawObjectPath>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;

        let object_type = ObjectType::parse(&raw.object_type)
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;
        let id = raw
            .id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid id format"))?;

        Ok(ObjectPath(ObjectRef::new(object_type, id)))
    }
}
