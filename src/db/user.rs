use crate::db::db_service::DbService;
use crate::types::{error::AppError, user::StackUser};
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel};
use entity::user_profile::{Entity as Profile, Model as ProfileModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set,
    SqlErr, TransactionTrait,
};
use tracing::{info, warn};
use uuid::Uuid;

pub type UserWithProfile = (UserModel, Option<ProfileModel>);

impl DbService {
    pub async fn get_user_by_id(&self, id: &Uuid) -> Result<UserModel, AppError> {
        Ok(User::find_by_id(*id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    pub async fn get_user_by_stack_id(&self, stack_id: &str) -> Result<UserWithProfile, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::StackId.eq(stack_id))
            .find_also_related(Profile)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    /// Read-only lookup for paths that must not mirror a Stack user on first sight.
    pub async fn find_user_by_stack_id(&self, stack_id: &str) -> Result<Option<UserModel>, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::StackId.eq(stack_id))
            .one(&self.database_connection)
            .await?)
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<UserWithProfile, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email.trim().to_ascii_lowercase()))
            .find_also_related(Profile)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    /// Creates the database user the first time a Stack user shows up, refreshes it after that.
    pub async fn upsert_user_from_stack(&self, stack_user: &StackUser) -> Result<UserWithProfile, AppError> {
        let email = stack_user
            .primary_email
            .as_deref()
            .map(|e| e.trim().to_ascii_lowercase())
            .unwrap_or_default();
        let now = Utc::now();

        let txn = self.database_connection.begin().await?;
        let existing = User::find()
            .filter(entity::user::Column::StackId.eq(stack_user.id.as_str()))
            .one(&txn)
            .await?;

        let result = match existing {
            Some(user) => {
                let mut am: UserActive = user.into();
                am.email = Set(email);
                am.name = Set(stack_user.display_name.clone());
                am.avatar_url = Set(stack_user.profile_image_url.clone());
                am.updated_at = Set(now);
                am.update(&txn).await
            }
            None => {
                UserActive {
                    id: Set(Uuid::new_v4()),
                    stack_id: Set(stack_user.id.clone()),
                    email: Set(email),
                    name: Set(stack_user.display_name.clone()),
                    avatar_url: Set(stack_user.profile_image_url.clone()),
                    created_at: Set(now),
                    updated_at: Set(now),
                }
                .insert(&txn)
                .await
            }
        };

        match result {
            Ok(user) => {
                txn.commit().await?;
                let profile = user.find_related(Profile).one(&self.database_connection).await?;
                Ok((user, profile))
            }
            Err(err) => {
                txn.rollback().await?;
                // Two first-syncs for the same user raced; the other one won.
                if let Some(SqlErr::UniqueConstraintViolation(_)) = err.sql_err() {
                    warn!("concurrent sync for stack user {}, re-reading", stack_user.id);
                    return self.get_user_by_stack_id(&stack_user.id).await;
                }
                Err(err.into())
            }
        }
    }

    pub async fn list_users(&self) -> Result<Vec<UserWithProfile>, AppError> {
        Ok(User::find()
            .find_also_related(Profile)
            .order_by_desc(entity::user::Column::CreatedAt)
            .all(&self.database_connection)
            .await?)
    }

    /// Deletes the user and everything hanging off it. Returns the public paths of the
    /// footage rows that went with it so the files can be cleaned up.
    pub async fn delete_user_by_stack_id(&self, stack_id: &str) -> Result<Vec<String>, AppError> {
        let txn = self.database_connection.begin().await?;
        let user = User::find()
            .filter(entity::user::Column::StackId.eq(stack_id))
            .one(&txn)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?;

        let paths = user
            .find_related(entity::footage_upload::Entity)
            .all(&txn)
            .await?
            .into_iter()
            .map(|f| f.file_path)
            .collect();

        user.delete(&txn).await?;
        txn.commit().await?;
        info!("deleted user {stack_id}");
        Ok(paths)
    }
}
