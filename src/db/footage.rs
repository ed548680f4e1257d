use crate::db::db_service::DbService;
use crate::types::{error::AppError, footage::NewFootage};
use chrono::Utc;
use entity::footage_upload::{ActiveModel as FootageActive, Entity as Footage, Model as FootageModel};
use entity::user::{Entity as User, Model as UserModel};
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

pub type FootageWithUser = (FootageModel, Option<UserModel>);

impl DbService {
    pub async fn create_footage_upload(&self, new: NewFootage) -> Result<FootageWithUser, AppError> {
        let now = Utc::now();
        let created = FootageActive {
            id: Set(Uuid::new_v4()),
            user_id: Set(new.user_id),
            file_name: Set(new.file_name),
            file_size: Set(new.file_size),
            file_type: Set(new.file_type),
            file_path: Set(new.file_path),
            title: Set(new.title),
            description: Set(new.description),
            upload_date: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.database_connection)
        .await?;

        self.get_footage_upload(created.id).await
    }

    pub async fn get_footage_upload(&self, id: Uuid) -> Result<FootageWithUser, AppError> {
        Ok(Footage::find_by_id(id)
            .find_also_related(User)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Footage not found".into()))?)
    }

    pub async fn list_footage_uploads(&self, owner: Option<Uuid>) -> Result<Vec<FootageWithUser>, AppError> {
        let mut finder = Footage::find().find_also_related(User);
        if let Some(uid) = owner {
            finder = finder.filter(entity::footage_upload::Column::UserId.eq(uid));
        }
        Ok(finder
            .order_by_desc(entity::footage_upload::Column::UploadDate)
            .all(&self.database_connection)
            .await?)
    }

    /// Removes the row and hands it back so the caller can drop the stored file.
    pub async fn delete_footage_upload(&self, id: Uuid) -> Result<FootageModel, AppError> {
        let footage = Footage::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Footage not found".into()))?;
        footage.clone().delete(&self.database_connection).await?;
        Ok(footage)
    }
}
