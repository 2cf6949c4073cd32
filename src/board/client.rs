//! HTTP client for board API requests.
//!
//! This module provides a low-level HTTP client wrapper for making JSON
//! requests to the board API and conforming response bodies to given types.

use super::BoardError;
use reqwest::{Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Makes requests to the board API and tries to conform response data to
/// the requested type.
///
pub struct Client {
    pub(crate) base_url: String,
    pub(crate) http_client: reqwest::Client,
}

impl Client {
    /// Returns a new instance for the given base URL.
    ///
    pub fn new(base_url: &str) -> Self {
        Client {
            base_url: base_url.trim_end_matches('/').to_owned(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Return the decoded body of a GET request to the path.
    ///
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, BoardError> {
        let response = self.call(Method::GET, path, None::<&()>).await?;
        Self::decode(response).await
    }

    /// Return the decoded body of a POST request sending the body as JSON.
    ///
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, BoardError> {
        let response = self.call(Method::POST, path, Some(body)).await?;
        Self::decode(response).await
    }

    /// Make request with optional JSON body and return the raw response.
    ///
    async fn call<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response, BoardError> {
        let request_url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        log::debug!("{} {}", method, request_url);

        let mut request = self.http_client.request(method, &request_url);
        if let Some(body) = body {
            request = request.json(body);
        }

        Ok(request.send().await?)
    }

    /// Check the response status, then deserialize the body.
    ///
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, BoardError> {
        let status = response.status();

        // Check status before trying to deserialize
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("Unable to read response"));
            log::error!("API request failed with status {}: {}", status, message);
            return Err(BoardError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let response_bytes = response.bytes().await?;
        serde_json::from_slice::<T>(&response_bytes).map_err(|e| {
            log::error!(
                "Failed to deserialize API response: {}. Response body: {}",
                e,
                String::from_utf8_lossy(&response_bytes)
            );
            BoardError::Deserialization(e)
        })
    }
}
