use actix_web::web;
use std::sync::Arc;

use crate::config::EnvConfig;
use crate::db::db_service::DbService;
use crate::utils::{
    access::AccessPolicy,
    auth_provider::SharedAuthProvider,
    storage::FootageStore,
};

/// Everything the handlers pull out of `app_data`.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DbService>,
    pub auth: SharedAuthProvider,
    pub access: AccessPolicy,
    pub footage: FootageStore,
}

impl AppState {
    pub fn new(config: &EnvConfig, db: Arc<DbService>, auth: SharedAuthProvider) -> Self {
        Self {
            db,
            auth,
            access: AccessPolicy::new(&config.access),
            footage: FootageStore::new(&config.uploads),
        }
    }

    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::new(Arc::clone(&self.db)))
            .app_data(web::Data::new(Arc::clone(&self.auth)))
            .app_data(web::Data::new(self.access.clone()))
            .app_data(web::Data::new(self.footage.clone()));
    }
}
