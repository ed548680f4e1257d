use crate::db::db_service::DbService;
use crate::types::{
    equipment::{EquipmentStatus, EquipmentUpdate},
    error::AppError,
};
use chrono::Utc;
use entity::equipment_request::{ActiveModel as RequestActive, Entity as EquipmentRequest, Model as RequestModel};
use entity::user::{Entity as User, Model as UserModel};
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

pub type RequestWithUser = (RequestModel, Option<UserModel>);

impl DbService {
    pub async fn create_equipment_request(
        &self,
        user_id: Uuid,
        equipment: String,
        description: String,
    ) -> Result<RequestWithUser, AppError> {
        let now = Utc::now();
        let created = RequestActive {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            equipment: Set(equipment),
            description: Set(description),
            status: Set(EquipmentStatus::Pending.as_str().to_string()),
            notes: Set(None),
            due_date: Set(None),
            request_date: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.database_connection)
        .await?;

        self.get_equipment_request(created.id).await
    }

    pub async fn get_equipment_request(&self, id: Uuid) -> Result<RequestWithUser, AppError> {
        Ok(EquipmentRequest::find_by_id(id)
            .find_also_related(User)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Equipment request not found".into()))?)
    }

    /// Newest first. `owner` narrows the list to one user's requests, `status` to one state.
    pub async fn list_equipment_requests(
        &self,
        owner: Option<Uuid>,
        status: Option<EquipmentStatus>,
    ) -> Result<Vec<RequestWithUser>, AppError> {
        let mut finder = EquipmentRequest::find().find_also_related(User);
        if let Some(uid) = owner {
            finder = finder.filter(entity::equipment_request::Column::UserId.eq(uid));
        }
        if let Some(status) = status {
            finder = finder.filter(entity::equipment_request::Column::Status.eq(status.as_str()));
        }
        Ok(finder
            .order_by_desc(entity::equipment_request::Column::RequestDate)
            .all(&self.database_connection)
            .await?)
    }

    /// Overwrites status, notes and due date. Any status can follow any other.
    pub async fn update_equipment_request(&self, id: Uuid, update: EquipmentUpdate) -> Result<RequestWithUser, AppError> {
        let current = EquipmentRequest::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Equipment request not found".into()))?;

        let mut am: RequestActive = current.into();
        am.status = Set(update.status.as_str().to_string());
        am.notes = Set(update.notes);
        am.due_date = Set(update.due_date);
        am.updated_at = Set(Utc::now());
        am.update(&self.database_connection).await?;

        self.get_equipment_request(id).await
    }
}
