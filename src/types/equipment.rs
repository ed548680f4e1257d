use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

use crate::types::{error::AppError, query::flag, user::UserSummary};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentStatus {
    Pending,
    Approved,
    Denied,
    Returned,
}

impl EquipmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentStatus::Pending => "pending",
            EquipmentStatus::Approved => "approved",
            EquipmentStatus::Denied => "denied",
            EquipmentStatus::Returned => "returned",
        }
    }
}

impl fmt::Display for EquipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EquipmentStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(EquipmentStatus::Pending),
            "approved" => Ok(EquipmentStatus::Approved),
            "denied" => Ok(EquipmentStatus::Denied),
            "returned" => Ok(EquipmentStatus::Returned),
            _ => Err(AppError::Validation("Invalid status".to_string())),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct REquipmentCreate {
    pub equipment: Option<String>,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct REquipmentUpdate {
    pub request_id: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
    pub due_date: Option<String>,
}

/// Validated form of [`REquipmentUpdate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquipmentUpdate {
    pub status: EquipmentStatus,
    pub notes: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
}

/// `GET /equipment/request?mine=1&status=approved`
#[derive(Deserialize, Debug, Default)]
pub struct EquipmentListQuery {
    pub mine: Option<String>,
    pub status: Option<String>,
}

impl EquipmentListQuery {
    pub fn mine(&self) -> bool {
        flag(self.mine.as_deref())
    }

    pub fn status(&self) -> Result<Option<EquipmentStatus>, AppError> {
        match self.status.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => s.parse().map(Some),
        }
    }
}

/// Checked out and past its due date. Requests without a due date are never overdue.
pub fn is_overdue(status: &str, due_date: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    status == EquipmentStatus::Approved.as_str() && due_date.is_some_and(|due| due < now)
}

/// Accepts RFC 3339 or a bare `YYYY-MM-DD` (read as midnight UTC).
pub fn parse_due_date(raw: &str) -> Result<DateTime<Utc>, AppError> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .ok_or_else(|| AppError::Validation("Invalid due date".to_string()))
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentRequestView {
    pub id: Uuid,
    pub user_id: Uuid,
    pub equipment: String,
    pub description: String,
    pub status: String,
    pub notes: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub overdue: bool,
    pub request_date: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user: Option<UserSummary>,
}

impl From<(entity::equipment_request::Model, Option<entity::user::Model>)> for EquipmentRequestView {
    fn from((r, u): (entity::equipment_request::Model, Option<entity::user::Model>)) -> Self {
        let overdue = is_overdue(&r.status, r.due_date, Utc::now());
        Self {
            id: r.id,
            user_id: r.user_id,
            equipment: r.equipment,
            description: r.description,
            overdue,
            status: r.status,
            notes: r.notes,
            due_date: r.due_date,
            request_date: r.request_date,
            updated_at: r.updated_at,
            user: u.map(UserSummary::from),
        }
    }
}
