use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::db::db_service::DbService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::UserView;
use crate::utils::webutils::Identity;

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub success: bool,
    pub user: UserView,
}

async fn sync_user(db: &DbService, ident: &Identity) -> ApiResult<Response> {
    let user = db.upsert_user_from_stack(&ident.user).await?;
    Ok(ApiResponse::Ok(Response {
        success: true,
        user: user.into(),
    }))
}

#[post("/sync")]
async fn sync(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DbService>>,
    ident: Identity,
) -> ApiResult<Response> {
    sync_user(&db, &ident).await
}

/// Same as the POST: reading the current user also refreshes the mirror.
#[get("/sync")]
async fn current(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DbService>>,
    ident: Identity,
) -> ApiResult<Response> {
    sync_user(&db, &ident).await
}
