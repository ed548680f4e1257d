use crate::db::db_service::DbService;
use crate::types::{error::AppError, schedule::NewShow};
use chrono::{DateTime, Utc};
use entity::show::{ActiveModel as ShowActive, Entity as Show, Model as ShowModel};
use entity::user::{Entity as User, Model as UserModel};
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

pub type ShowWithHost = (ShowModel, Option<UserModel>);

impl DbService {
    pub async fn create_show(&self, new: NewShow) -> Result<ShowWithHost, AppError> {
        if let Some(host) = new.host_id {
            self.get_user_by_id(&host).await?;
        }

        let now = Utc::now();
        let created = ShowActive {
            id: Set(Uuid::new_v4()),
            title: Set(new.title),
            air_time: Set(new.air_time),
            host_id: Set(new.host_id),
            description: Set(new.description),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.database_connection)
        .await?;

        self.get_show(created.id).await
    }

    pub async fn get_show(&self, id: Uuid) -> Result<ShowWithHost, AppError> {
        Ok(Show::find_by_id(id)
            .find_also_related(User)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Show not found".into()))?)
    }

    /// Soonest first. `from` drops shows that aired before it.
    pub async fn list_shows(&self, from: Option<DateTime<Utc>>) -> Result<Vec<ShowWithHost>, AppError> {
        let mut finder = Show::find().find_also_related(User);
        if let Some(from) = from {
            finder = finder.filter(entity::show::Column::AirTime.gte(from));
        }
        Ok(finder
            .order_by_asc(entity::show::Column::AirTime)
            .all(&self.database_connection)
            .await?)
    }
}
