use actix_web::{delete, web};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::db::db_service::DbService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::storage::FootageStore;
use crate::utils::webutils::Identity;

#[delete("/{id}")]
async fn delete_upload(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DbService>>,
    store: web::Data<FootageStore>,
    ident: Identity,
    path: web::Path<Uuid>,
) -> ApiResult<()> {
    let id = path.into_inner();
    let (footage, _) = db.get_footage_upload(id).await?;

    if !ident.is_teacher() {
        let (user, _) = db.upsert_user_from_stack(&ident.user).await?;
        if user.id != footage.user_id {
            return Err(AppError::Forbidden);
        }
    }

    let removed = db.delete_footage_upload(id).await?;
    // The row is gone either way; a stuck file only costs disk.
    if let Err(e) = store.remove(&removed.file_path).await {
        warn!("could not remove {}: {}", removed.file_path, e);
    }
    info!("footage {} deleted by {}", id, ident.user.id);

    Ok(ApiResponse::NoContent)
}
