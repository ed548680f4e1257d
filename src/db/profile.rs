use crate::db::db_service::DbService;
use crate::types::{error::AppError, user::RProfileUpdate};
use chrono::Utc;
use entity::user_profile::{ActiveModel as ProfileActive, Entity as Profile, Model as ProfileModel};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set, TransactionTrait};
use uuid::Uuid;

impl DbService {
    /// Upsert. Fields left as `None` in the patch keep their stored value.
    pub async fn update_user_profile(&self, user_id: Uuid, patch: RProfileUpdate) -> Result<ProfileModel, AppError> {
        // Unknown user is a 404, not an FK failure.
        self.get_user_by_id(&user_id).await?;

        let now = Utc::now();
        let txn = self.database_connection.begin().await?;
        let current = Profile::find()
            .filter(entity::user_profile::Column::UserId.eq(user_id))
            .one(&txn)
            .await?;

        let profile = match current {
            Some(p) => {
                let mut am: ProfileActive = p.into();
                if let Some(v) = patch.bio { am.bio = Set(Some(v)); }
                if let Some(v) = patch.location { am.location = Set(Some(v)); }
                if let Some(v) = patch.website { am.website = Set(Some(v)); }
                am.updated_at = Set(now);
                am.update(&txn).await?
            }
            None => {
                ProfileActive {
                    id: Set(Uuid::new_v4()),
                    user_id: Set(user_id),
                    bio: Set(patch.bio),
                    location: Set(patch.location),
                    website: Set(patch.website),
                    created_at: Set(now),
                    updated_at: Set(now),
                }
                .insert(&txn)
                .await?
            }
        };

        txn.commit().await?;
        Ok(profile)
    }
}
