use actix_web::{delete, get, web};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

use crate::db::db_service::DbService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::UserView;
use crate::utils::storage::FootageStore;
use crate::utils::webutils::TeacherIdentity;

#[derive(Serialize, Deserialize)]
pub struct ListResponse {
    pub success: bool,
    pub users: Vec<UserView>,
}

#[get("/users")]
async fn list_users(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DbService>>,
    _teacher: TeacherIdentity,
) -> ApiResult<ListResponse> {
    let users = db.list_users().await?;

    Ok(ApiResponse::Ok(ListResponse {
        success: true,
        users: users.into_iter().map(UserView::from).collect(),
    }))
}

#[delete("/users/{stack_id}")]
async fn delete_user(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DbService>>,
    store: web::Data<FootageStore>,
    teacher: TeacherIdentity,
    path: web::Path<String>,
) -> ApiResult<()> {
    let stack_id = path.into_inner();

    let files = db.delete_user_by_stack_id(&stack_id).await?;
    for file in &files {
        if let Err(e) = store.remove(file).await {
            warn!("could not remove {}: {}", file, e);
        }
    }
    info!("user {} removed by {} ({} footage files)", stack_id, teacher.0.user.id, files.len());

    Ok(ApiResponse::NoContent)
}
