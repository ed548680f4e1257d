use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::db::db_service::DbService;
use crate::types::error::AppError;
use crate::types::query::{non_blank, ListQuery};
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::submission::{NewSubmission, RSubmissionCreate, SubmissionKind, SubmissionView};
use crate::utils::webutils::{Identity, StudentIdentity};

#[derive(Serialize, Deserialize)]
pub struct CreateResponse {
    pub success: bool,
    pub submission: SubmissionView,
}

#[derive(Serialize, Deserialize)]
pub struct ListResponse {
    pub success: bool,
    pub submissions: Vec<SubmissionView>,
}

#[post("")]
async fn create_submission(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DbService>>,
    student: StudentIdentity,
    body: web::Json<RSubmissionCreate>,
) -> ApiResult<CreateResponse> {
    let StudentIdentity(ident) = student;
    let (user, _) = db.upsert_user_from_stack(&ident.user).await?;

    let body = body.into_inner();
    let title = non_blank(body.title)
        .ok_or_else(|| AppError::Validation("Title is required".to_string()))?;
    let kind: SubmissionKind = non_blank(body.kind)
        .ok_or_else(|| AppError::Validation("Kind is required".to_string()))?
        .parse()?;

    let submission = db
        .create_submission(NewSubmission {
            user_id: user.id,
            title,
            kind,
            content: non_blank(body.content),
            footage_id: body.footage_id,
        })
        .await?;
    info!("submission {} ({}) from {}", submission.0.id, kind.as_str(), user.id);

    Ok(ApiResponse::Created(CreateResponse {
        success: true,
        submission: submission.into(),
    }))
}

#[get("")]
async fn list_submissions(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DbService>>,
    ident: Identity,
    query: web::Query<ListQuery>,
) -> ApiResult<ListResponse> {
    let owner = if query.mine() || !ident.is_teacher() {
        match db.find_user_by_stack_id(&ident.user.id).await? {
            Some(user) => Some(user.id),
            None => {
                return Ok(ApiResponse::Ok(ListResponse {
                    success: true,
                    submissions: Vec::new(),
                }))
            }
        }
    } else {
        None
    };

    let submissions = db.list_submissions(owner).await?;

    Ok(ApiResponse::Ok(ListResponse {
        success: true,
        submissions: submissions.into_iter().map(SubmissionView::from).collect(),
    }))
}
