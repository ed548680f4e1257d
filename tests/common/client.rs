use actix_web::{dev::ServiceResponse, test, App};
use saberroar_portal::types::user::StackUser;
use serde_json::Value;
use uuid::Uuid;

use super::TestContext;

pub struct TestClient<'a> {
    pub ctx: &'a TestContext,
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}

impl<'a> TestClient<'a> {
    pub fn new(ctx: &'a TestContext) -> Self {
        TestClient { ctx }
    }

    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let state = self.ctx.state.clone();
        App::new()
            .configure(move |cfg| state.configure(cfg))
            .configure(saberroar_portal::routes::configure_routes)
    }

    /// Mirrors a Stack user straight into the database and returns the database id.
    pub async fn seed_user(&self, user: &StackUser) -> Uuid {
        self.ctx
            .db
            .upsert_user_from_stack(user)
            .await
            .expect("Failed to seed user")
            .0
            .id
    }
}

pub async fn json_body(resp: ServiceResponse) -> Value {
    test::read_body_json(resp).await
}
