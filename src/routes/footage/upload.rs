use actix_web::{get, http::header, post, web, HttpRequest};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

use crate::db::db_service::DbService;
use crate::types::error::AppError;
use crate::types::footage::{is_allowed_video_type, FootageUploadQuery, FootageView, NewFootage};
use crate::types::query::{non_blank, ListQuery};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::storage::{discard, too_large_message, FootageStore};
use crate::utils::webutils::{Identity, StudentIdentity};

const INVALID_TYPE_MESSAGE: &str = "Invalid file type. Only MP4, MOV, AVI, and QuickTime files are allowed.";
const NO_FILE_MESSAGE: &str = "No file provided";

#[derive(Serialize, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    pub upload: FootageView,
}

#[derive(Serialize, Deserialize)]
pub struct ListResponse {
    pub success: bool,
    pub uploads: Vec<FootageView>,
}

fn content_type(req: &HttpRequest) -> Result<String, AppError> {
    let raw = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    if !is_allowed_video_type(raw) {
        return Err(AppError::UnsupportedMediaType(INVALID_TYPE_MESSAGE.to_string()));
    }
    Ok(raw.split(';').next().unwrap_or(raw).trim().to_ascii_lowercase())
}

fn declared_length(req: &HttpRequest) -> Option<u64> {
    req.headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
}

/// Raw video body; `?fileName=` carries the original name, `Content-Type` the video type.
#[post("/upload")]
async fn upload(
    req: HttpRequest,
    db: web::Data<Arc<DbService>>,
    store: web::Data<FootageStore>,
    student: StudentIdentity,
    query: web::Query<FootageUploadQuery>,
    payload: web::Payload,
) -> ApiResult<UploadResponse> {
    let StudentIdentity(ident) = student;
    let query = query.into_inner();

    let file_name = non_blank(query.file_name)
        .ok_or_else(|| AppError::Validation(NO_FILE_MESSAGE.to_string()))?;
    let file_type = content_type(&req)?;
    match declared_length(&req) {
        Some(0) => return Err(AppError::Validation(NO_FILE_MESSAGE.to_string())),
        Some(len) if len > store.max_bytes() => {
            return Err(AppError::PayloadTooLarge(too_large_message(store.max_bytes())))
        }
        _ => {}
    }

    let (user, _) = db.upsert_user_from_stack(&ident.user).await?;

    let stored = store.save(user.id, &file_name, &file_type, payload).await?;
    if stored.size == 0 {
        discard(&stored.disk_path).await;
        return Err(AppError::Validation(NO_FILE_MESSAGE.to_string()));
    }

    let created = db
        .create_footage_upload(NewFootage {
            user_id: user.id,
            file_name,
            file_size: stored.size as i64,
            file_type,
            file_path: stored.public_path.clone(),
            title: non_blank(query.title),
            description: non_blank(query.description),
        })
        .await;

    let upload = match created {
        Ok(u) => u,
        Err(err) => {
            error!("footage row insert failed, removing {}", stored.disk_path.display());
            discard(&stored.disk_path).await;
            return Err(err);
        }
    };
    info!("footage {} uploaded by {} ({} bytes)", upload.0.id, user.id, stored.size);

    Ok(ApiResponse::Created(UploadResponse {
        success: true,
        upload: upload.into(),
    }))
}

/// Footage is shared across the club, so the full list is visible to any signed-in user.
#[get("/upload")]
async fn list_uploads(
    _req: HttpRequest,
    db: web::Data<Arc<DbService>>,
    ident: Identity,
    query: web::Query<ListQuery>,
) -> ApiResult<ListResponse> {
    let owner = if query.mine() {
        match db.find_user_by_stack_id(&ident.user.id).await? {
            Some(user) => Some(user.id),
            None => {
                return Ok(ApiResponse::Ok(ListResponse {
                    success: true,
                    uploads: Vec::new(),
                }))
            }
        }
    } else {
        None
    };

    let uploads = db.list_footage_uploads(owner).await?;

    Ok(ApiResponse::Ok(ListResponse {
        success: true,
        uploads: uploads.into_iter().map(FootageView::from).collect(),
    }))
}
