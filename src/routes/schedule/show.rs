use actix_web::{get, post, web};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::db::db_service::DbService;
use crate::types::error::AppError;
use crate::types::query::non_blank;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::schedule::{parse_air_time, NewShow, RShowCreate, ScheduleQuery, ShowView};
use crate::utils::webutils::{Identity, TeacherIdentity};

#[derive(Serialize, Deserialize)]
pub struct CreateResponse {
    pub success: bool,
    pub show: ShowView,
}

#[derive(Serialize, Deserialize)]
pub struct ListResponse {
    pub success: bool,
    pub shows: Vec<ShowView>,
}

#[post("")]
async fn create_show(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DbService>>,
    teacher: TeacherIdentity,
    body: web::Json<RShowCreate>,
) -> ApiResult<CreateResponse> {
    let body = body.into_inner();
    let title = non_blank(body.title)
        .ok_or_else(|| AppError::Validation("Title is required".to_string()))?;
    let date = non_blank(body.date)
        .ok_or_else(|| AppError::Validation("Date is required".to_string()))?;
    let time = non_blank(body.time)
        .ok_or_else(|| AppError::Validation("Time is required".to_string()))?;

    let show = db
        .create_show(NewShow {
            title,
            air_time: parse_air_time(&date, &time)?,
            host_id: body.host_id,
            description: non_blank(body.description),
        })
        .await?;
    info!("show {} scheduled for {} by {}", show.0.id, show.0.air_time, teacher.0.user.id);

    Ok(ApiResponse::Created(CreateResponse {
        success: true,
        show: show.into(),
    }))
}

/// The broadcast schedule is visible to everyone in the club.
#[get("")]
async fn list_shows(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DbService>>,
    _ident: Identity,
    query: web::Query<ScheduleQuery>,
) -> ApiResult<ListResponse> {
    let from = query.upcoming().then(Utc::now);
    let shows = db.list_shows(from).await?;

    Ok(ApiResponse::Ok(ListResponse {
        success: true,
        shows: shows.into_iter().map(ShowView::from).collect(),
    }))
}
