use crate::{CliClientResult, ClientError};

use std::panic::Location;

use error_location::ErrorLocation;
use reqwest::{Client as ReqwestClient, Method};
use serde::Serialize;
use serde_json::Value;

/// HTTP client for the fg-server REST API
pub struct Client {
    pub base_url: String,
    pub token: Option<String>,
    client: ReqwestClient,
}

/// Identity fields sent with either signup path
#[derive(Debug, Default, Serialize)]
pub struct SignupDetails {
    pub handle: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pronouns: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adhd_subtype: Option<String>,
}

/// Profile fields to change; `None` leaves the stored value alone
#[derive(Debug, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pronouns: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adhd_subtype: Option<String>,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8000")
    /// * `token` - Optional session token sent as `Authorization: Bearer`
    pub fn new(base_url: &str, token: Option<&str>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.map(String::from),
            client: ReqwestClient::new(),
        }
    }

    /// Build a request without credentials
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// Build a request carrying the session token
    #[track_caller]
    fn authorized(&self, method: Method, path: &str) -> CliClientResult<reqwest::RequestBuilder> {
        let token = self.token.as_deref().ok_or_else(|| ClientError::MissingToken {
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(self.request(method, path).bearer_auth(token))
    }

    /// Execute request and handle errors
    async fn execute(&self, req: reqwest::RequestBuilder) -> CliClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        let body: Value = serde_json::from_slice(&bytes)?;

        if !status.is_success() {
            let error = body.get("error");
            let code = error
                .and_then(|e| e.get("code"))
                .and_then(|v| v.as_str())
                .unwrap_or("UNKNOWN")
                .to_string();
            let message = error
                .and_then(|e| e.get("message"))
                .and_then(|v| v.as_str())
                .unwrap_or("Unknown error")
                .to_string();
            return Err(ClientError::Api {
                code,
                message,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(body)
    }

    // =========================================================================
    // Enrollment
    // =========================================================================

    /// Enroll with a face descriptor
    pub async fn signup_face(
        &self,
        details: &SignupDetails,
        descriptor: &[f64],
    ) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct FaceSignupRequest<'a> {
            descriptor: &'a [f64],
            #[serde(flatten)]
            details: &'a SignupDetails,
        }

        let body = FaceSignupRequest {
            descriptor,
            details,
        };
        let req = self.request(Method::POST, "/api/signup/face").json(&body);
        self.execute(req).await
    }

    /// Enroll without a face descriptor
    pub async fn signup_email(&self, details: &SignupDetails) -> CliClientResult<Value> {
        let req = self.request(Method::POST, "/api/signup/email").json(details);
        self.execute(req).await
    }

    // =========================================================================
    // Login and Session
    // =========================================================================

    /// Log in with a face descriptor
    pub async fn login_face(&self, descriptor: &[f64]) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct LoginRequest<'a> {
            descriptor: &'a [f64],
        }

        let req = self
            .request(Method::POST, "/api/login/face")
            .json(&LoginRequest { descriptor });
        self.execute(req).await
    }

    /// Describe the current session token
    pub async fn current_session(&self) -> CliClientResult<Value> {
        let req = self.authorized(Method::GET, "/api/session")?;
        self.execute(req).await
    }

    // =========================================================================
    // Profile
    // =========================================================================

    pub async fn get_profile(&self, id: &str) -> CliClientResult<Value> {
        let req = self.authorized(Method::GET, &format!("/api/profile/{}", id))?;
        self.execute(req).await
    }

    pub async fn update_profile(&self, id: &str, update: &ProfileUpdate) -> CliClientResult<Value> {
        let req = self
            .authorized(Method::PUT, &format!("/api/profile/{}", id))?
            .json(update);
        self.execute(req).await
    }

    // =========================================================================
    // Points
    // =========================================================================

    /// Replace the point balance
    pub async fn set_points(&self, id: &str, points: i64) -> CliClientResult<Value> {
        let req = self
            .authorized(Method::PUT, &format!("/api/users/{}/points", id))?
            .json(&serde_json::json!({ "points": points }));
        self.execute(req).await
    }

    /// Add a signed delta to the point balance
    pub async fn add_points(&self, id: &str, delta: i64) -> CliClientResult<Value> {
        let req = self
            .authorized(Method::POST, &format!("/api/users/{}/points/add", id))?
            .json(&serde_json::json!({ "points": delta }));
        self.execute(req).await
    }
}
