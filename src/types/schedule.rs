use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{error::AppError, query::flag, user::UserSummary};

/// Mirrors the "Add New Show" form: a date input, a time input and a host picker.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RShowCreate {
    pub title: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub host_id: Option<Uuid>,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewShow {
    pub title: String,
    pub air_time: DateTime<Utc>,
    pub host_id: Option<Uuid>,
    pub description: Option<String>,
}

/// `YYYY-MM-DD` plus `HH:MM` (or `HH:MM:SS`), taken as UTC.
pub fn parse_air_time(date: &str, time: &str) -> Result<DateTime<Utc>, AppError> {
    let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date".to_string()))?;
    let time = NaiveTime::parse_from_str(time.trim(), "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(time.trim(), "%H:%M:%S"))
        .map_err(|_| AppError::Validation("Invalid time".to_string()))?;
    Ok(date.and_time(time).and_utc())
}

/// `?upcoming=1` hides shows that already aired.
#[derive(Deserialize, Debug, Default)]
pub struct ScheduleQuery {
    pub upcoming: Option<String>,
}

impl ScheduleQuery {
    pub fn upcoming(&self) -> bool {
        flag(self.upcoming.as_deref())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ShowView {
    pub id: Uuid,
    pub title: String,
    pub air_time: DateTime<Utc>,
    pub description: Option<String>,
    pub host_id: Option<Uuid>,
    pub host: Option<UserSummary>,
    pub created_at: DateTime<Utc>,
}

impl From<(entity::show::Model, Option<entity::user::Model>)> for ShowView {
    fn from((s, host): (entity::show::Model, Option<entity::user::Model>)) -> Self {
        Self {
            id: s.id,
            title: s.title,
            air_time: s.air_time,
            description: s.description,
            host_id: s.host_id,
            host: host.map(UserSummary::from),
            created_at: s.created_at,
        }
    }
}
