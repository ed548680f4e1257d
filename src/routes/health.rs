use actix_web::{get, HttpRequest};

use crate::types::response::{ApiResponse, ApiResult};

/// Liveness only; no auth, no database round trip.
#[get("")]
async fn health(_req: HttpRequest) -> ApiResult<()> {
    Ok(ApiResponse::EmptyOk)
}
