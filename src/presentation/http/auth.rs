use axum::{
    Json, Router,
    extract::{FromRequestParts, State},
    http::{HeaderValue, header::AUTHORIZATION, request::Parts},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::access::Actor;
use crate::application::use_cases::auth::login::{Login as LoginUc, LoginRequest as LoginDto};
use crate::application::use_cases::auth::me::GetMe;
use crate::application::use_cases::auth::register::{
    Register as RegisterUc, RegisterRequest as RegisterDto,
};
use crate::bootstrap::app_context::AppContext;
use crate::presentation::http::error::{ApiError, ErrorBody};
use crate::presentation::http::extract::ApiJson;

#[derive(Debug, Deserialize, ToSchema)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/users/register", post(register))
        .route("/users/login", post(login))
        .route("/users/me", get(me))
        .with_state(ctx)
}

#[utoipa::path(post, path = "/users/register", tag = "Users", request_body = Credentials, responses(
    (status = 200, body = MessageResponse),
    (status = 400, body = ErrorBody, description = "Username taken or empty field")
))]
pub async fn register(
    State(ctx): State<AppContext>,
    ApiJson(req): ApiJson<Credentials>,
) -> Result<Json<MessageResponse>, ApiError> {
    let repo = ctx.user_repo();
    let uc = RegisterUc {
        repo: repo.as_ref(),
    };
    let dto = RegisterDto {
        username: req.username,
        password: req.password,
    };
    uc.execute(&dto).await?;
    Ok(Json(MessageResponse {
        message: "User registered successfully".into(),
    }))
}

#[utoipa::path(post, path = "/users/login", tag = "Users", request_body = Credentials, responses(
    (status = 200, body = TokenResponse),
    (status = 400, body = ErrorBody, description = "Invalid credentials")
))]
pub async fn login(
    State(ctx): State<AppContext>,
    ApiJson(req): ApiJson<Credentials>,
) -> Result<Json<TokenResponse>, ApiError> {
    let repo = ctx.user_repo();
    let uc = LoginUc {
        repo: repo.as_ref(),
        keys: ctx.token_keys(),
    };
    let dto = LoginDto {
        username: req.username,
        password: req.password,
    };
    let issued = uc.execute(&dto).await?;
    Ok(Json(TokenResponse {
        access_token: issued.access_token,
        token_type: issued.token_type.to_string(),
    }))
}

#[utoipa::path(get, path = "/users/me", tag = "Users", responses(
    (status = 200, body = UserResponse),
    (status = 401, body = ErrorBody)
))]
pub async fn me(
    State(ctx): State<AppContext>,
    Bearer(token): Bearer,
) -> Result<Json<UserResponse>, ApiError> {
    let repo = ctx.user_repo();
    let uc = GetMe {
        repo: repo.as_ref(),
        keys: ctx.token_keys(),
    };
    let user = uc.execute(&token).await?;
    Ok(Json(UserResponse {
        id: user.id,
        username: user.username,
    }))
}

// --- Bearer extractor & actor resolution ---

pub struct Bearer(pub String);

/// Token from `Authorization: Bearer <token>`; the scheme is case-insensitive.
fn bearer_token(value: &HeaderValue) -> Option<String> {
    let (scheme, token) = value.to_str().ok()?.trim().split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then(|| token.to_string())
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for Bearer
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(AUTHORIZATION)
            .and_then(bearer_token)
            .map(Bearer)
            .ok_or_else(|| ApiError::unauthorized("Not authenticated"))
    }
}

/// `None` only when no `Authorization` header was sent; a header that is not a
/// usable bearer credential is a 401.
pub struct MaybeBearer(pub Option<String>);

#[axum::async_trait]
impl<S> FromRequestParts<S> for MaybeBearer
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if !parts.headers.contains_key(AUTHORIZATION) {
            return Ok(MaybeBearer(None));
        }
        let Bearer(token) = Bearer::from_request_parts(parts, state).await?;
        Ok(MaybeBearer(Some(token)))
    }
}

/// No bearer means an anonymous caller; a bearer that does not validate is a 401.
pub async fn resolve_actor(ctx: &AppContext, bearer: MaybeBearer) -> Result<Actor, ApiError> {
    let MaybeBearer(Some(token)) = bearer else {
        return Ok(Actor::Anonymous);
    };
    let repo = ctx.user_repo();
    let user = GetMe {
        repo: repo.as_ref(),
        keys: ctx.token_keys(),
    }
    .execute(&token)
    .await?;
    Ok(Actor::User {
        id: user.id,
        username: user.username,
    })
}
