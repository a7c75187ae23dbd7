//! Identidad del actor autenticado
//!
//! La autenticación propiamente dicha queda fuera de este servicio: el
//! gateway upstream ya autenticó al usuario y propaga su id en el header
//! `x-user-id`. El motor solo necesita ese id para verificar propiedad.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::utils::errors::AppError;

/// Id del actor autenticado, extraído del header `x-user-id`
#[derive(Debug, Clone, Copy)]
pub struct ActorId(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for ActorId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get("x-user-id")
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Unauthorized("Missing x-user-id header".to_string()))?;

        let actor_id = Uuid::parse_str(header)
            .map_err(|_| AppError::Unauthorized("Invalid x-user-id header".to_string()))?;

        Ok(ActorId(actor_id))
    }
}
