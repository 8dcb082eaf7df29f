//! Auth API

use shared::client::{LoginRequest, LoginResponse, RegisterRequest};
use shared::MessageResponse;

use crate::http::HttpClient;
use crate::{ClientResult, FoodieClient};

impl<H: HttpClient> FoodieClient<H> {
    /// Login with email and password
    ///
    /// On success the returned token is installed on this client.
    pub async fn login(&mut self, email: &str, password: &str) -> ClientResult<LoginResponse> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let resp: LoginResponse = self.http.post("auth/login", &request).await?;
        self.http.set_token(Some(resp.token.clone()));
        tracing::info!(user_id = resp.user_info.user_id, "logged in");
        Ok(resp)
    }

    /// Register a new customer account
    pub async fn register(&self, request: &RegisterRequest) -> ClientResult<MessageResponse> {
        self.http.post("auth/register", request).await
    }

    /// Drop the token; the backend keeps no server-side session
    pub fn logout(&mut self) {
        self.http.set_token(None);
    }
}
