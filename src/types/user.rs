use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity handed back by the auth provider for a valid session.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StackUser {
    pub id: String,
    pub primary_email: Option<String>,
    pub display_name: Option<String>,
    pub profile_image_url: Option<String>,
}

impl StackUser {
    pub fn email(&self) -> Option<&str> {
        self.primary_email.as_deref()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub id: Uuid,
    pub user_id: Uuid,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
}

impl From<entity::user_profile::Model> for ProfileView {
    fn from(p: entity::user_profile::Model) -> Self {
        Self {
            id: p.id,
            user_id: p.user_id,
            bio: p.bio,
            location: p.location,
            website: p.website,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: Uuid,
    pub stack_id: String,
    pub email: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub profile: Option<ProfileView>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<(entity::user::Model, Option<entity::user_profile::Model>)> for UserView {
    fn from((u, p): (entity::user::Model, Option<entity::user_profile::Model>)) -> Self {
        Self {
            id: u.id,
            stack_id: u.stack_id,
            email: u.email,
            name: u.name,
            avatar_url: u.avatar_url,
            profile: p.map(ProfileView::from),
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

/// The `user { name, email }` block embedded in request/upload/submission listings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    pub name: Option<String>,
    pub email: String,
}

impl From<entity::user::Model> for UserSummary {
    fn from(u: entity::user::Model) -> Self {
        Self { name: u.name, email: u.email }
    }
}

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct RProfileUpdate {
    pub bio: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Teacher,
    Student,
    Guest,
}

impl Role {
    pub fn home(&self) -> &'static str {
        match self {
            Role::Teacher => "/teacher",
            Role::Student => "/student",
            Role::Guest => "/",
        }
    }
}
