use crate::types::error::AppError;
use crate::utils::webutils::validate_token;
use actix_web::web;
use actix_web_httpauth::middleware::HttpAuthentication;

pub mod admin;
pub mod equipment;
pub mod footage;
pub mod health;
pub mod schedule;
pub mod submission;
pub mod user;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let auth = HttpAuthentication::bearer(validate_token);

    // Malformed bodies and query strings get the same JSON error shape as everything else.
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    );
    cfg.app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    );

    cfg.service(
        web::scope("/health").service(health::health)
    );
    cfg.service(
        web::scope("/user")
            .service(user::sync::sync)
            .service(user::sync::current)
            .service(user::profile::update_profile)
            .service(user::access::access)
            .wrap(auth.clone())
    );
    cfg.service(
        web::scope("/equipment")
            .service(equipment::request::create_request)
            .service(equipment::request::list_requests)
            .service(equipment::update::update_request)
            .wrap(auth.clone())
    );
    cfg.service(
        web::scope("/footage")
            .service(footage::upload::upload)
            .service(footage::upload::list_uploads)
            .service(footage::delete::delete_upload)
            .wrap(auth.clone())
    );
    cfg.service(
        web::scope("/submission")
            .service(submission::create::create_submission)
            .service(submission::create::list_submissions)
            .service(submission::review::review_submission)
            .wrap(auth.clone())
    );
    cfg.service(
        web::scope("/schedule")
            .service(schedule::show::create_show)
            .service(schedule::show::list_shows)
            .wrap(auth.clone())
    );
    cfg.service(
        web::scope("/admin")
            .service(admin::users::list_users)
            .service(admin::users::delete_user)
            .wrap(auth)
    );
}
