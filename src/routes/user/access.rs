use actix_web::get;
use serde::{Deserialize, Serialize};

use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::Role;
use crate::utils::webutils::Identity;

/// Which dashboard the caller belongs on.
#[derive(Serialize, Deserialize)]
pub struct Response {
    pub email: Option<String>,
    pub role: Role,
    pub teacher: bool,
    pub student: bool,
    pub home: String,
}

#[get("/access")]
async fn access(
    _req: actix_web::HttpRequest,
    ident: Identity,
) -> ApiResult<Response> {
    Ok(ApiResponse::Ok(Response {
        email: ident.user.primary_email.clone(),
        role: ident.role,
        teacher: ident.role == Role::Teacher,
        student: matches!(ident.role, Role::Teacher | Role::Student),
        home: ident.role.home().to_string(),
    }))
}
