use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::types::{error::AppError, user::UserSummary};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionKind {
    Script,
    ShowSegment,
    InterviewQuestions,
}

impl SubmissionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionKind::Script => "script",
            SubmissionKind::ShowSegment => "show_segment",
            SubmissionKind::InterviewQuestions => "interview_questions",
        }
    }
}

impl FromStr for SubmissionKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "script" => Ok(SubmissionKind::Script),
            "show_segment" => Ok(SubmissionKind::ShowSegment),
            "interview_questions" => Ok(SubmissionKind::InterviewQuestions),
            _ => Err(AppError::Validation("Invalid submission kind".to_string())),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    UnderReview,
    Approved,
    NeedsChanges,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::UnderReview => "under_review",
            SubmissionStatus::Approved => "approved",
            SubmissionStatus::NeedsChanges => "needs_changes",
        }
    }
}

impl FromStr for SubmissionStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "under_review" => Ok(SubmissionStatus::UnderReview),
            "approved" => Ok(SubmissionStatus::Approved),
            "needs_changes" => Ok(SubmissionStatus::NeedsChanges),
            _ => Err(AppError::Validation("Invalid status".to_string())),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RSubmissionCreate {
    pub title: Option<String>,
    pub kind: Option<String>,
    pub content: Option<String>,
    pub footage_id: Option<Uuid>,
}

#[derive(Debug, Clone)]
pub struct NewSubmission {
    pub user_id: Uuid,
    pub title: String,
    pub kind: SubmissionKind,
    pub content: Option<String>,
    pub footage_id: Option<Uuid>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RSubmissionReview {
    pub submission_id: Option<String>,
    pub status: Option<String>,
    pub feedback: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionView {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub kind: String,
    pub content: Option<String>,
    pub footage_id: Option<Uuid>,
    pub status: String,
    pub feedback: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub user: Option<UserSummary>,
}

impl From<(entity::submission::Model, Option<entity::user::Model>)> for SubmissionView {
    fn from((s, u): (entity::submission::Model, Option<entity::user::Model>)) -> Self {
        Self {
            id: s.id,
            user_id: s.user_id,
            title: s.title,
            kind: s.kind,
            content: s.content,
            footage_id: s.footage_id,
            status: s.status,
            feedback: s.feedback,
            submitted_at: s.submitted_at,
            reviewed_at: s.reviewed_at,
            user: u.map(UserSummary::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_round_trip_through_str() {
        for k in [SubmissionKind::Script, SubmissionKind::ShowSegment, SubmissionKind::InterviewQuestions] {
            assert_eq!(k.as_str().parse::<SubmissionKind>().unwrap(), k);
        }
        assert!("podcast".parse::<SubmissionKind>().is_err());
    }

    #[test]
    fn review_status_rejects_equipment_states() {
        assert!("pending".parse::<SubmissionStatus>().is_err());
        assert_eq!("needs_changes".parse::<SubmissionStatus>().unwrap(), SubmissionStatus::NeedsChanges);
    }
}
