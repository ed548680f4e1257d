mod common;

use actix_web::{http::StatusCode, test};
use common::{
    client::{bearer, json_body, TestClient},
    TestContext, OUTSIDER_TOKEN, STUDENT_EMAIL, STUDENT_RENAMED_TOKEN, STUDENT_TOKEN, TEACHER_TOKEN,
};
use serde_json::json;

#[tokio::test]
async fn test_sync_requires_bearer_token() {
    println!("\n\n[+] Running test: test_sync_requires_bearer_token");
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::post().uri("/user/sync").to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Missing header -> {}", resp.status());
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::post()
        .uri("/user/sync")
        .insert_header(bearer("tok_not_a_session"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Unknown token -> {}", resp.status());
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body = json_body(resp).await;
    assert_eq!(body["error"], "UNAUTHORIZED");
    println!("[/] Test passed: unauthenticated sync rejected.");
}

#[tokio::test]
async fn test_sync_creates_then_refreshes_database_user() {
    println!("\n\n[+] Running test: test_sync_creates_then_refreshes_database_user");
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;

    println!("[>] First sync for the student");
    let req = test::TestRequest::post()
        .uri("/user/sync")
        .insert_header(bearer(STUDENT_TOKEN))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    println!("[<] Response body: {}", body);

    assert_eq!(body["success"], true);
    assert_eq!(body["user"]["stackId"], "stack-student");
    assert_eq!(body["user"]["email"], STUDENT_EMAIL);
    assert_eq!(body["user"]["name"], "Sam Rivera");
    assert!(body["user"]["profile"].is_null());
    let first_id = body["user"]["id"].as_str().unwrap().to_string();

    println!("[>] Same Stack user comes back with a new display name");
    let req = test::TestRequest::get()
        .uri("/user/sync")
        .insert_header(bearer(STUDENT_RENAMED_TOKEN))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;

    assert_eq!(body["user"]["id"], first_id.as_str());
    assert_eq!(body["user"]["name"], "Samantha Rivera");

    let users = ctx.db.list_users().await.expect("list users");
    assert_eq!(users.len(), 1);

    let (by_email, _) = ctx
        .db
        .get_user_by_email("Sam.Rivera@FranklinSabers.org")
        .await
        .expect("lookup is case-insensitive");
    assert_eq!(by_email.id.to_string(), first_id);
    println!("[/] Test passed: sync is an upsert keyed by Stack id.");
}

#[tokio::test]
async fn test_profile_update_only_touches_given_fields() {
    println!("\n\n[+] Running test: test_profile_update_only_touches_given_fields");
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::put()
        .uri("/user/profile")
        .insert_header(bearer(STUDENT_TOKEN))
        .set_json(json!({ "bio": "Camera op, morning show", "location": "Studio B" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    println!("[<] Created profile: {}", body);
    assert_eq!(body["profile"]["bio"], "Camera op, morning show");
    assert_eq!(body["profile"]["location"], "Studio B");
    assert!(body["profile"]["website"].is_null());

    let req = test::TestRequest::put()
        .uri("/user/profile")
        .insert_header(bearer(STUDENT_TOKEN))
        .set_json(json!({ "website": "https://example.org/sam" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["profile"]["bio"], "Camera op, morning show");
    assert_eq!(body["profile"]["website"], "https://example.org/sam");

    println!("[>] Sync now returns the profile inline");
    let req = test::TestRequest::get()
        .uri("/user/sync")
        .insert_header(bearer(STUDENT_TOKEN))
        .to_request();
    let body = json_body(test::call_service(&app, req).await).await;
    assert_eq!(body["user"]["profile"]["location"], "Studio B");
    println!("[/] Test passed: profile upsert keeps untouched fields.");
}

#[tokio::test]
async fn test_profile_update_rejects_non_string_fields() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::put()
        .uri("/user/profile")
        .insert_header(bearer(STUDENT_TOKEN))
        .set_json(json!({ "bio": 42 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_body(resp).await;
    assert_eq!(body["error"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_access_reports_dashboard_per_role() {
    println!("\n\n[+] Running test: test_access_reports_dashboard_per_role");
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;

    for (token, role, home, teacher, student) in [
        (TEACHER_TOKEN, "teacher", "/teacher", true, true),
        (STUDENT_TOKEN, "student", "/student", false, true),
        (OUTSIDER_TOKEN, "guest", "/", false, false),
    ] {
        let req = test::TestRequest::get()
            .uri("/user/access")
            .insert_header(bearer(token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = json_body(resp).await;
        println!("[<] {} -> {}", token, body);
        assert_eq!(body["role"], role);
        assert_eq!(body["home"], home);
        assert_eq!(body["teacher"], teacher);
        assert_eq!(body["student"], student);
    }
    println!("[/] Test passed: roles resolved from the allow-lists.");
}
