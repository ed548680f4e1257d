use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::db::db_service::DbService;
use crate::types::equipment::{EquipmentListQuery, EquipmentRequestView, REquipmentCreate};
use crate::types::error::AppError;
use crate::types::query::non_blank;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::{Identity, StudentIdentity};

#[derive(Serialize, Deserialize)]
pub struct CreateResponse {
    pub success: bool,
    pub request: EquipmentRequestView,
}

#[derive(Serialize, Deserialize)]
pub struct ListResponse {
    pub success: bool,
    pub requests: Vec<EquipmentRequestView>,
}

#[post("/request")]
async fn create_request(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DbService>>,
    student: StudentIdentity,
    body: web::Json<REquipmentCreate>,
) -> ApiResult<CreateResponse> {
    let StudentIdentity(ident) = student;
    let (user, _) = db.upsert_user_from_stack(&ident.user).await?;

    let body = body.into_inner();
    let equipment = non_blank(body.equipment)
        .ok_or_else(|| AppError::Validation("Equipment is required".to_string()))?;
    let description = non_blank(body.description)
        .ok_or_else(|| AppError::Validation("Description is required".to_string()))?;

    let request = db.create_equipment_request(user.id, equipment, description).await?;
    info!("equipment request {} opened by {}", request.0.id, user.id);

    Ok(ApiResponse::Created(CreateResponse {
        success: true,
        request: request.into(),
    }))
}

/// Teachers see every request unless they ask for `?mine=1`; everyone else only sees their own.
/// `?status=approved` is the checked-out view, with `overdue` set on late items.
#[get("/request")]
async fn list_requests(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DbService>>,
    ident: Identity,
    query: web::Query<EquipmentListQuery>,
) -> ApiResult<ListResponse> {
    let status = query.status()?;
    let owner = if query.mine() || !ident.is_teacher() {
        match db.find_user_by_stack_id(&ident.user.id).await? {
            Some(user) => Some(user.id),
            None => {
                return Ok(ApiResponse::Ok(ListResponse {
                    success: true,
                    requests: Vec::new(),
                }))
            }
        }
    } else {
        None
    };

    let requests = db.list_equipment_requests(owner, status).await?;

    Ok(ApiResponse::Ok(ListResponse {
        success: true,
        requests: requests.into_iter().map(EquipmentRequestView::from).collect(),
    }))
}
