use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "submission")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub kind: String, // script | show_segment | interview_questions
    pub content: Option<String>,
    pub footage_id: Option<Uuid>, // FK -> footage_upload.id (nullable)
    pub status: String, // under_review | approved | needs_changes
    pub feedback: Option<String>,
    pub submitted_at: DateTimeUtc,
    pub reviewed_at: Option<DateTimeUtc>,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to   = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::footage_upload::Entity",
        from = "Column::FootageId",
        to   = "super::footage_upload::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    FootageUpload,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::footage_upload::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FootageUpload.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
