use actix_web::{put, web};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::db::db_service::DbService;
use crate::types::error::AppError;
use crate::types::query::non_blank;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::submission::{RSubmissionReview, SubmissionStatus, SubmissionView};
use crate::utils::webutils::TeacherIdentity;

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub success: bool,
    pub submission: SubmissionView,
}

#[put("/review")]
async fn review_submission(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DbService>>,
    teacher: TeacherIdentity,
    body: web::Json<RSubmissionReview>,
) -> ApiResult<Response> {
    let body = body.into_inner();
    let id = non_blank(body.submission_id)
        .ok_or_else(|| AppError::Validation("Submission ID is required".to_string()))?;
    let id = Uuid::parse_str(&id)
        .map_err(|_| AppError::Validation("Invalid submission ID".to_string()))?;
    let status: SubmissionStatus = non_blank(body.status)
        .ok_or_else(|| AppError::Validation("Status is required".to_string()))?
        .parse()?;

    let reviewed = db.review_submission(id, status, non_blank(body.feedback)).await?;
    info!("submission {} marked {} by {}", id, status.as_str(), teacher.0.user.id);

    Ok(ApiResponse::Ok(Response {
        success: true,
        submission: reviewed.into(),
    }))
}
