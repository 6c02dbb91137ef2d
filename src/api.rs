//! Client side of the Review API.
use gloo_net::http::{Request, Response};
use leptos::logging::{log, warn};
use serde::Deserialize;

use crate::error::ApiError;
use crate::models::review::{NewReview, Review, ReviewUpdate};
use crate::models::user::{LoginRequest, LoginResponse, RegisterRequest};

/// Operations the client needs from the backend. Every method except
/// `register` and `login` authenticates with the given bearer token.
#[allow(async_fn_in_trait)]
pub trait ReviewApi {
    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError>;
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;
    async fn list_reviews(&self, token: &str) -> Result<Vec<Review>, ApiError>;
    async fn list_user_reviews(&self, token: &str, user_id: i64) -> Result<Vec<Review>, ApiError>;
    async fn create_review(&self, token: &str, review: &NewReview) -> Result<(), ApiError>;
    async fn update_review(&self, token: &str, id: i64, update: &ReviewUpdate) -> Result<(), ApiError>;
    async fn delete_review(&self, token: &str, id: i64) -> Result<(), ApiError>;
}

pub const REGISTER_PATH: &str = "/register/";
pub const LOGIN_PATH: &str = "/login/";
pub const REVIEWS_PATH: &str = "/reviews/";

pub fn review_path(id: i64) -> String {
    format!("/reviews/{id}/")
}

pub fn user_reviews_path(user_id: i64) -> String {
    format!("/reviews/user/{user_id}/")
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// [`ReviewApi`] over `fetch`.
#[derive(Debug, Clone)]
pub struct HttpApi {
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into().trim_end_matches('/').to_string() }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Passes successful responses through and turns the rest into
/// [`ApiError::Rejected`], keeping the body's `error` message if it has one.
async fn check(method: &str, url: &str, response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.error);
    warn!("[API] {} {} rejected with {}: {:?}", method, url, status, message);
    Err(ApiError::Rejected { status, message })
}

impl ReviewApi for HttpApi {
    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        let url = self.url(REGISTER_PATH);
        log!("[API] POST {}", url);
        let response = Request::post(&url).json(request)?.send().await?;
        check("POST", &url, response).await?;
        Ok(())
    }

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let url = self.url(LOGIN_PATH);
        log!("[API] POST {}", url);
        let response = Request::post(&url).json(request)?.send().await?;
        let response = check("POST", &url, response).await?;
        Ok(response.json::<LoginResponse>().await?)
    }

    async fn list_reviews(&self, token: &str) -> Result<Vec<Review>, ApiError> {
        let url = self.url(REVIEWS_PATH);
        log!("[API] GET {}", url);
        let response = Request::get(&url)
            .header("Authorization", &bearer(token))
            .send()
            .await?;
        let response = check("GET", &url, response).await?;
        Ok(response.json::<Vec<Review>>().await?)
    }

    async fn list_user_reviews(&self, token: &str, user_id: i64) -> Result<Vec<Review>, ApiError> {
        let url = self.url(&user_reviews_path(user_id));
        log!("[API] GET {}", url);
        let response = Request::get(&url)
            .header("Authorization", &bearer(token))
            .send()
            .await?;
        let response = check("GET", &url, response).await?;
        Ok(response.json::<Vec<Review>>().await?)
    }

    async fn create_review(&self, token: &str, review: &NewReview) -> Result<(), ApiError> {
        let url = self.url(REVIEWS_PATH);
        log!("[API] POST {}", url);
        let response = Request::post(&url)
            .header("Authorization", &bearer(token))
            .json(review)?
            .send()
            .await?;
        check("POST", &url, response).await?;
        Ok(())
    }

    async fn update_review(&self, token: &str, id: i64, update: &ReviewUpdate) -> Result<(), ApiError> {
        let url = self.url(&review_path(id));
        log!("[API] PUT {}", url);
        let response = Request::put(&url)
            .header("Authorization", &bearer(token))
            .json(update)?
            .send()
            .await?;
        check("PUT", &url, response).await?;
        Ok(())
    }

    async fn delete_review(&self, token: &str, id: i64) -> Result<(), ApiError> {
        let url = self.url(&review_path(id));
        log!("[API] DELETE {}", url);
        let response = Request::delete(&url)
            .header("Authorization", &bearer(token))
            .send()
            .await?;
        check("DELETE", &url, response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_endpoint_urls() {
        let api = HttpApi::new("http://localhost:8000/api/");
        assert_eq!(api.url(LOGIN_PATH), "http://localhost:8000/api/login/");
        assert_eq!(api.url(REVIEWS_PATH), "http://localhost:8000/api/reviews/");
        assert_eq!(api.url(&review_path(12)), "http://localhost:8000/api/reviews/12/");
        assert_eq!(api.url(&user_reviews_path(3)), "http://localhost:8000/api/reviews/user/3/");
    }

    #[test]
    fn bearer_header_value() {
        assert_eq!(bearer("abc"), "Bearer abc");
    }
}
