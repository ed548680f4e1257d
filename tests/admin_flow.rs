mod common;

use actix_web::{http::StatusCode, test};
use common::{
    client::{bearer, json_body, TestClient},
    stack_user, student, TestContext, OTHER_STUDENT_EMAIL, STUDENT_TOKEN, TEACHER_TOKEN,
};
use serde_json::json;

#[tokio::test]
async fn test_admin_user_listing() {
    println!("\n\n[+] Running test: test_admin_user_listing");
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;

    client.seed_user(&student()).await;
    tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    client.seed_user(&stack_user("stack-other", OTHER_STUDENT_EMAIL, "Jo Chen")).await;

    let req = test::TestRequest::get()
        .uri("/admin/users")
        .insert_header(bearer(STUDENT_TOKEN))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::get()
        .uri("/admin/users")
        .insert_header(bearer(TEACHER_TOKEN))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    println!("[<] Response body: {}", body);
    let emails: Vec<&str> = body["users"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["email"].as_str().unwrap())
        .collect();
    assert_eq!(emails, vec![OTHER_STUDENT_EMAIL, "sam.rivera@franklinsabers.org"]);
    println!("[/] Test passed: teacher lists users newest first.");
}

#[tokio::test]
async fn test_admin_delete_user_cascades() {
    println!("\n\n[+] Running test: test_admin_delete_user_cascades");
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;

    println!("[>] Student builds up some history");
    let req = test::TestRequest::put()
        .uri("/user/profile")
        .insert_header(bearer(STUDENT_TOKEN))
        .set_json(json!({ "bio": "editor" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/equipment/request")
        .insert_header(bearer(STUDENT_TOKEN))
        .set_json(json!({ "equipment": "Tripod", "description": "graduation" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/footage/upload?fileName=grad.mp4")
        .insert_header(bearer(STUDENT_TOKEN))
        .insert_header(("Content-Type", "video/mp4"))
        .set_payload(b"graduation".to_vec())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);
    assert_eq!(std::fs::read_dir(&ctx.upload_dir).unwrap().count(), 1);

    println!("[>] Teacher removes the student");
    let req = test::TestRequest::delete()
        .uri("/admin/users/stack-student")
        .insert_header(bearer(TEACHER_TOKEN))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);

    assert!(ctx.db.list_users().await.unwrap().is_empty());
    assert!(ctx.db.list_equipment_requests(None, None).await.unwrap().is_empty());
    assert!(ctx.db.list_footage_uploads(None).await.unwrap().is_empty());
    assert_eq!(std::fs::read_dir(&ctx.upload_dir).unwrap().count(), 0);

    println!("[>] Second delete is a 404");
    let req = test::TestRequest::delete()
        .uri("/admin/users/stack-student")
        .insert_header(bearer(TEACHER_TOKEN))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    println!("[/] Test passed: user and owned rows removed.");
}
