use crate::db::db_service::DbService;
use crate::types::{
    error::AppError,
    submission::{NewSubmission, SubmissionStatus},
};
use chrono::Utc;
use entity::submission::{ActiveModel as SubmissionActive, Entity as Submission, Model as SubmissionModel};
use entity::user::{Entity as User, Model as UserModel};
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

pub type SubmissionWithUser = (SubmissionModel, Option<UserModel>);

impl DbService {
    pub async fn create_submission(&self, new: NewSubmission) -> Result<SubmissionWithUser, AppError> {
        if let Some(fid) = new.footage_id {
            // Surface a 404 instead of a foreign key failure.
            self.get_footage_upload(fid).await?;
        }

        let now = Utc::now();
        let created = SubmissionActive {
            id: Set(Uuid::new_v4()),
            user_id: Set(new.user_id),
            title: Set(new.title),
            kind: Set(new.kind.as_str().to_string()),
            content: Set(new.content),
            footage_id: Set(new.footage_id),
            status: Set(SubmissionStatus::UnderReview.as_str().to_string()),
            feedback: Set(None),
            submitted_at: Set(now),
            reviewed_at: Set(None),
            updated_at: Set(now),
        }
        .insert(&self.database_connection)
        .await?;

        self.get_submission(created.id).await
    }

    pub async fn get_submission(&self, id: Uuid) -> Result<SubmissionWithUser, AppError> {
        Ok(Submission::find_by_id(id)
            .find_also_related(User)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Submission not found".into()))?)
    }

    pub async fn list_submissions(&self, owner: Option<Uuid>) -> Result<Vec<SubmissionWithUser>, AppError> {
        let mut finder = Submission::find().find_also_related(User);
        if let Some(uid) = owner {
            finder = finder.filter(entity::submission::Column::UserId.eq(uid));
        }
        Ok(finder
            .order_by_desc(entity::submission::Column::SubmittedAt)
            .all(&self.database_connection)
            .await?)
    }

    pub async fn review_submission(
        &self,
        id: Uuid,
        status: SubmissionStatus,
        feedback: Option<String>,
    ) -> Result<SubmissionWithUser, AppError> {
        let current = Submission::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Submission not found".into()))?;

        let now = Utc::now();
        let mut am: SubmissionActive = current.into();
        am.status = Set(status.as_str().to_string());
        am.feedback = Set(feedback);
        am.reviewed_at = Set(Some(now));
        am.updated_at = Set(now);
        am.update(&self.database_connection).await?;

        self.get_submission(id).await
    }
}
