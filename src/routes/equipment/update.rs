use actix_web::{put, web};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::db::db_service::DbService;
use crate::types::equipment::{parse_due_date, EquipmentRequestView, EquipmentStatus, EquipmentUpdate, REquipmentUpdate};
use crate::types::error::AppError;
use crate::types::query::non_blank;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::TeacherIdentity;

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub success: bool,
    pub request: EquipmentRequestView,
}

fn validate(body: REquipmentUpdate) -> Result<(Uuid, EquipmentUpdate), AppError> {
    let request_id = non_blank(body.request_id)
        .ok_or_else(|| AppError::Validation("Request ID is required".to_string()))?;
    let request_id = Uuid::parse_str(&request_id)
        .map_err(|_| AppError::Validation("Invalid request ID".to_string()))?;

    let status: EquipmentStatus = non_blank(body.status)
        .ok_or_else(|| AppError::Validation("Status is required".to_string()))?
        .parse()?;

    let due_date = match non_blank(body.due_date) {
        Some(raw) => Some(parse_due_date(&raw)?),
        None => None,
    };

    Ok((request_id, EquipmentUpdate {
        status,
        notes: non_blank(body.notes),
        due_date,
    }))
}

#[put("/update")]
async fn update_request(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DbService>>,
    teacher: TeacherIdentity,
    body: web::Json<REquipmentUpdate>,
) -> ApiResult<Response> {
    let (request_id, update) = validate(body.into_inner())?;
    let status = update.status;

    let updated = db.update_equipment_request(request_id, update).await?;
    info!("equipment request {} set to {} by {}", request_id, status, teacher.0.user.id);

    Ok(ApiResponse::Ok(Response {
        success: true,
        request: updated.into(),
    }))
}
