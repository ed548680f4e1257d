use actix_web::{
    dev::{Payload, ServiceRequest},
    web, FromRequest, HttpMessage, HttpRequest,
};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::future::{ready, Ready};
use tracing::{error, warn};

use crate::types::{
    error::AppError,
    user::{Role, StackUser},
};
use crate::utils::{access::AccessPolicy, auth_provider::SharedAuthProvider};

/// Bearer middleware hook: resolves the token with the configured provider and stashes
/// the Stack user in the request extensions for the extractors below.
pub async fn validate_token(
    req: ServiceRequest,
    credentials: BearerAuth,
) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    let provider = match req.app_data::<web::Data<SharedAuthProvider>>() {
        Some(p) => p.clone(),
        None => {
            error!("no auth provider registered on the app");
            return Err((AppError::Internal("auth provider missing".into()).into(), req));
        }
    };

    match provider.resolve(credentials.token()).await {
        Ok(Some(user)) => {
            req.extensions_mut().insert(user);
            Ok(req)
        }
        Ok(None) => {
            warn!("rejected bearer token for {}", req.path());
            Err((AppError::Unauthorized.into(), req))
        }
        Err(e) => Err((e.into(), req)),
    }
}

/// The signed-in user plus the role the allow-lists give them.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user: StackUser,
    pub role: Role,
}

impl Identity {
    pub fn is_teacher(&self) -> bool {
        self.role == Role::Teacher
    }
}

fn identity_from(req: &HttpRequest) -> Result<Identity, AppError> {
    let user = req
        .extensions()
        .get::<StackUser>()
        .cloned()
        .ok_or(AppError::Unauthorized)?;
    let role = req
        .app_data::<web::Data<AccessPolicy>>()
        .map(|p| p.role(user.email()))
        .unwrap_or(Role::Guest);
    Ok(Identity { user, role })
}

impl FromRequest for Identity {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(identity_from(req))
    }
}

/// Student dashboard routes. Teachers pass too.
#[derive(Debug, Clone)]
pub struct StudentIdentity(pub Identity);

impl FromRequest for StudentIdentity {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(identity_from(req).and_then(|id| match id.role {
            Role::Teacher | Role::Student => Ok(StudentIdentity(id)),
            Role::Guest => Err(AppError::Forbidden),
        }))
    }
}

/// Teacher allow-list only.
#[derive(Debug, Clone)]
pub struct TeacherIdentity(pub Identity);

impl FromRequest for TeacherIdentity {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(identity_from(req).and_then(|id| {
            if id.is_teacher() {
                Ok(TeacherIdentity(id))
            } else {
                Err(AppError::Forbidden)
            }
        }))
    }
}
