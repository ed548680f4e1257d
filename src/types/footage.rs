use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

use crate::types::user::UserSummary;

pub const ALLOWED_VIDEO_TYPES: [&str; 4] = ["video/mp4", "video/mov", "video/avi", "video/quicktime"];

pub fn is_allowed_video_type(content_type: &str) -> bool {
    let essence = content_type.split(';').next().unwrap_or("").trim();
    ALLOWED_VIDEO_TYPES.iter().any(|t| t.eq_ignore_ascii_case(essence))
}

/// Extension for the stored file: taken from the original name, else from the content type.
pub fn stored_extension(file_name: &str, content_type: &str) -> String {
    let from_name = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .filter(|e| !e.is_empty() && e.chars().all(|c| c.is_ascii_alphanumeric()));

    from_name.unwrap_or_else(|| {
        match content_type.split(';').next().unwrap_or("").trim() {
            "video/quicktime" | "video/mov" => "mov",
            "video/avi" => "avi",
            _ => "mp4",
        }
        .to_string()
    })
}

/// `{user_id}_{unix_millis}.{ext}`, or `{user_id}_{unix_millis}_{n}.{ext}` when that name is taken.
pub fn stored_file_name(user_id: Uuid, millis: i64, collision: u32, ext: &str) -> String {
    match collision {
        0 => format!("{user_id}_{millis}.{ext}"),
        n => format!("{user_id}_{millis}_{n}.{ext}"),
    }
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FootageUploadQuery {
    pub file_name: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Everything needed to write the metadata row once the bytes are on disk.
#[derive(Debug, Clone)]
pub struct NewFootage {
    pub user_id: Uuid,
    pub file_name: String,
    pub file_size: i64,
    pub file_type: String,
    pub file_path: String,
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FootageView {
    pub id: Uuid,
    pub user_id: Uuid,
    pub file_name: String,
    pub file_size: i64,
    pub file_type: String,
    pub file_path: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub upload_date: DateTime<Utc>,
    pub user: Option<UserSummary>,
}

impl From<(entity::footage_upload::Model, Option<entity::user::Model>)> for FootageView {
    fn from((f, u): (entity::footage_upload::Model, Option<entity::user::Model>)) -> Self {
        Self {
            id: f.id,
            user_id: f.user_id,
            file_name: f.file_name,
            file_size: f.file_size,
            file_type: f.file_type,
            file_path: f.file_path,
            title: f.title,
            description: f.description,
            upload_date: f.upload_date,
            user: u.map(UserSummary::from),
        }
    }
}
