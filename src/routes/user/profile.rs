use actix_web::{put, web};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::db::db_service::DbService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{ProfileView, RProfileUpdate};
use crate::utils::webutils::Identity;

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub success: bool,
    pub profile: ProfileView,
}

#[put("/profile")]
async fn update_profile(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DbService>>,
    ident: Identity,
    body: web::Json<RProfileUpdate>,
) -> ApiResult<Response> {
    let (user, _) = db.upsert_user_from_stack(&ident.user).await?;

    let profile = db.update_user_profile(user.id, body.into_inner()).await?;

    Ok(ApiResponse::Ok(Response {
        success: true,
        profile: profile.into(),
    }))
}
