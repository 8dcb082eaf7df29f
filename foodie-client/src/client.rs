//! FoodieHub API client
//!
//! Typed endpoint methods live in [`crate::api`], one module per resource.

use serde::Deserialize;
use shared::ApiResponse;

use crate::http::{HttpClient, NetworkHttpClient};
use crate::{ClientConfig, ClientError, ClientResult};

/// Typed client for the FoodieHub REST API
#[derive(Debug, Clone)]
pub struct FoodieClient<H = NetworkHttpClient> {
    pub(crate) http: H,
}

impl FoodieClient<NetworkHttpClient> {
    /// Create a network client from configuration
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self::with_transport(NetworkHttpClient::new(config)?))
    }

    /// Create a network client for `base_url` with default settings
    pub fn new(base_url: impl Into<String>) -> ClientResult<Self> {
        Self::from_config(&ClientConfig::new(base_url))
    }
}

impl<H: HttpClient> FoodieClient<H> {
    /// Wrap an existing transport
    pub fn with_transport(http: H) -> Self {
        Self { http }
    }

    /// Current bearer token
    pub fn token(&self) -> Option<&str> {
        self.http.token()
    }

    /// Replace (or clear) the bearer token
    pub fn set_token(&mut self, token: Option<String>) {
        self.http.set_token(token);
    }

    pub fn is_logged_in(&self) -> bool {
        self.http.token().is_some()
    }

    /// Underlying transport
    pub fn transport(&self) -> &H {
        &self.http
    }
}

/// Read endpoints answer either with the `{ success, data }` envelope or the
/// bare payload depending on the route; accept both.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum MaybeEnveloped<T> {
    Enveloped(ApiResponse<T>),
    Bare(T),
}

impl<T> MaybeEnveloped<T> {
    pub(crate) fn into_data(self) -> ClientResult<T> {
        match self {
            Self::Bare(data) => Ok(data),
            Self::Enveloped(resp) if resp.success => resp
                .data
                .ok_or_else(|| ClientError::InvalidResponse("Missing response data".into())),
            Self::Enveloped(resp) => Err(ClientError::Rejected {
                reason: resp.error.or(resp.message),
            }),
        }
    }
}

/// Dashboard endpoints wrap their payload in `{ data }`
#[derive(Deserialize)]
pub(crate) struct DataWrapper<T> {
    pub data: T,
}
