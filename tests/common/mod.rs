#![allow(dead_code)]

use sea_orm::{ConnectionTrait, Database};
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;
use saberroar_portal::{
    config::{AccessConfig, EnvConfig, StackConfig, UploadConfig},
    db::db_service::DbService,
    state::AppState,
    types::user::StackUser,
    utils::auth_provider::{SharedAuthProvider, StaticAuthProvider},
};

pub mod client;

pub const TEACHER_TOKEN: &str = "tok_teacher";
pub const STUDENT_TOKEN: &str = "tok_student";
pub const STUDENT_RENAMED_TOKEN: &str = "tok_student_renamed";
pub const OTHER_STUDENT_TOKEN: &str = "tok_other_student";
pub const OUTSIDER_TOKEN: &str = "tok_outsider";

pub const TEACHER_EMAIL: &str = "advisor@district.k12.wi.us";
pub const STUDENT_EMAIL: &str = "sam.rivera@franklinsabers.org";
pub const OTHER_STUDENT_EMAIL: &str = "jo.chen@franklinsabers.org";
pub const OUTSIDER_EMAIL: &str = "parent@gmail.com";

pub const TEST_UPLOAD_LIMIT: u64 = 1024 * 1024;

pub struct TestContext {
    pub db: Arc<DbService>,
    pub db_url: String,
    pub state: AppState,
    pub upload_dir: PathBuf,
    pub _dir: TempDir,
}

pub fn stack_user(id: &str, email: &str, name: &str) -> StackUser {
    StackUser {
        id: id.to_string(),
        primary_email: Some(email.to_string()),
        display_name: Some(name.to_string()),
        profile_image_url: None,
    }
}

pub fn student() -> StackUser {
    stack_user("stack-student", STUDENT_EMAIL, "Sam Rivera")
}

pub fn get_test_config(upload_dir: PathBuf) -> EnvConfig {
    EnvConfig {
        port: 8080,
        db_url: "test".to_string(), // Not used in tests
        stack: StackConfig {
            api_url: "http://localhost:0".to_string(),
            project_id: "test".to_string(),
            secret_server_key: "test".to_string(),
        },
        access: AccessConfig {
            teacher_emails: vec![TEACHER_EMAIL.to_string()],
            student_emails: vec![],
            student_domains: vec!["franklinsabers.org".to_string()],
        },
        uploads: UploadConfig {
            dir: upload_dir,
            public_prefix: "/uploads/footage".to_string(),
            max_bytes: TEST_UPLOAD_LIMIT,
        },
    }
}

pub fn test_provider() -> StaticAuthProvider {
    StaticAuthProvider::new()
        .with_user(TEACHER_TOKEN, stack_user("stack-teacher", TEACHER_EMAIL, "Ms. Advisor"))
        .with_user(STUDENT_TOKEN, student())
        .with_user(STUDENT_RENAMED_TOKEN, stack_user("stack-student", STUDENT_EMAIL, "Samantha Rivera"))
        .with_user(OTHER_STUDENT_TOKEN, stack_user("stack-other", OTHER_STUDENT_EMAIL, "Jo Chen"))
        .with_user(OUTSIDER_TOKEN, stack_user("stack-outsider", OUTSIDER_EMAIL, "A Parent"))
}

impl TestContext {
    pub async fn new() -> TestContext {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = dir.path().join("portal.db");
        let upload_dir = dir.path().join("uploads").join("footage");

        let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
        let db = Arc::new(
            DbService::new(&db_url)
                .await
                .expect("Failed to initialize DbService")
        );

        let auth: SharedAuthProvider = Arc::new(test_provider());
        let state = AppState::new(&get_test_config(upload_dir.clone()), Arc::clone(&db), auth);

        TestContext {
            db,
            db_url,
            state,
            upload_dir,
            _dir: dir,
        }
    }

    /// Drops a table behind the service's back so the next write to it fails.
    pub async fn drop_table(&self, table: &str) {
        let conn = Database::connect(self.db_url.as_str())
            .await
            .expect("Failed to open side connection");
        conn.execute_unprepared(&format!("DROP TABLE \"{}\"", table))
            .await
            .expect("Failed to drop table");
        conn.close().await.expect("Failed to close side connection");
    }
}
