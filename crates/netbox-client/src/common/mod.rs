//! Common utilities for NetBox API client
//!
//! Provides the authenticated HTTP wrapper shared by every API section,
//! plus status-code mapping and pagination.

pub mod query;

use crate::error::NetBoxError;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Paginated response wrapper from NetBox API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// Total number of matching objects
    pub count: u64,
    /// Absolute URL of the next page, if any
    pub next: Option<String>,
    /// Absolute URL of the previous page, if any
    pub previous: Option<String>,
    /// Objects on this page
    pub results: Vec<T>,
}

/// HTTP client wrapper with optional token authentication
///
/// `base_url` already contains the API base path (e.g. `https://netbox.example.com/api`),
/// so request paths are relative to it (`/ipam/prefixes/`).
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client wrapper
    pub fn new(client: Client, base_url: String, token: Option<String>) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.is_empty()),
        }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a full URL from a path
    pub fn build_url(&self, path: &str) -> String {
        if path.starts_with("http") {
            path.to_string()
        } else {
            format!("{}{}", self.base_url, path)
        }
    }

    /// Get authorization header value, when a token was configured
    pub fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|token| format!("Token {}", token))
    }

    /// Get the underlying HTTP client
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Start a request with the standard NetBox headers
    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let builder = self
            .client
            .request(method, url)
            .header("Accept", "application/json");

        match self.auth_header() {
            Some(value) => builder.header("Authorization", value),
            None => builder,
        }
    }

    /// Map a non-2xx response to the matching [`NetBoxError`] variant
    pub(crate) async fn check_status(
        response: Response,
        method: &str,
        path: &str,
    ) -> Result<Response, NetBoxError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        match status.as_u16() {
            404 => Err(NetBoxError::NotFound(format!(
                "Resource not found: {} - {}",
                path, body
            ))),
            401 | 403 => Err(NetBoxError::Authentication(format!(
                "{} {} failed: {} - {}",
                method, path, status, body
            ))),
            _ => Err(NetBoxError::Api(format!(
                "{} {} failed: {} - {}",
                method, path, status, body
            ))),
        }
    }

    /// Decode a JSON body, keeping the head of the payload in the error message
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, NetBoxError> {
        let response_text = response.text().await?;
        serde_json::from_str(&response_text).map_err(|e| {
            NetBoxError::Api(format!(
                "error decoding response body: {} - Response (first 500 chars): {}",
                e,
                response_text.chars().take(500).collect::<String>()
            ))
        })
    }

    /// Fetch all pages of a paginated response
    pub async fn fetch_all_pages<T: DeserializeOwned>(
        &self,
        mut url: String,
    ) -> Result<Vec<T>, NetBoxError> {
        let mut all_results = Vec::new();

        loop {
            debug!("Fetching page: {}", url);

            let response = self
                .request(Method::GET, &url)
                .send()
                .await
                .map_err(NetBoxError::Http)?;
            let response = Self::check_status(response, "GET", &url).await?;
            let page: PaginatedResponse<T> = Self::decode(response).await?;
            all_results.extend(page.results);

            match page.next {
                Some(next_url) => {
                    url = self.build_url(&next_url);
                }
                None => break,
            }
        }

        Ok(all_results)
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, NetBoxError> {
        let url = self.build_url(path);
        debug!("GET {}", url);

        let response = self
            .request(Method::GET, &url)
            .send()
            .await
            .map_err(NetBoxError::Http)?;
        let response = Self::check_status(response, "GET", path).await?;
        Self::decode(response).await
    }

    /// Make a POST request
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, NetBoxError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.build_url(path);
        debug!(
            "POST {} with body: {}",
            url,
            serde_json::to_string(body).unwrap_or_default()
        );

        let response = self
            .request(Method::POST, &url)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(NetBoxError::Http)?;
        let response = Self::check_status(response, "POST", path).await?;
        Self::decode(response).await
    }

    /// Make a PATCH request
    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T, NetBoxError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.build_url(path);
        debug!(
            "PATCH {} with body: {}",
            url,
            serde_json::to_string(body).unwrap_or_default()
        );

        let response = self
            .request(Method::PATCH, &url)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(NetBoxError::Http)?;
        let response = Self::check_status(response, "PATCH", path).await?;
        Self::decode(response).await
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str) -> Result<(), NetBoxError> {
        let url = self.build_url(path);
        debug!("DELETE {}", url);

        let response = self
            .request(Method::DELETE, &url)
            .send()
            .await
            .map_err(NetBoxError::Http)?;
        Self::check_status(response, "DELETE", path).await?;

        Ok(())
    }

    /// Build query string from filters
    pub fn build_query_string(&self, filters: &[(&str, &str)]) -> String {
        filters
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(token: Option<&str>) -> HttpClient {
        HttpClient::new(
            Client::new(),
            "https://netbox.example.com/api/".to_string(),
            token.map(str::to_string),
        )
    }

    #[test]
    fn test_build_url_relative_and_absolute() {
        let http = http(None);
        assert_eq!(http.base_url(), "https://netbox.example.com/api");
        assert_eq!(
            http.build_url("/ipam/prefixes/1/"),
            "https://netbox.example.com/api/ipam/prefixes/1/"
        );
        assert_eq!(
            http.build_url("https://netbox.example.com/api/ipam/prefixes/?offset=50"),
            "https://netbox.example.com/api/ipam/prefixes/?offset=50"
        );
    }

    #[test]
    fn test_auth_header_only_with_token() {
        assert_eq!(http(None).auth_header(), None);
        assert_eq!(http(Some("")).auth_header(), None);
        assert_eq!(
            http(Some("0123abcd")).auth_header().as_deref(),
            Some("Token 0123abcd")
        );
    }

    #[test]
    fn test_build_query_string_encodes_values() {
        let query = http(None).build_query_string(&[("prefix", "10.0.0.0/16"), ("status", "active")]);
        assert_eq!(query, "prefix=10.0.0.0%2F16&status=active");
        assert_eq!(http(None).build_query_string(&[]), "");
    }
}
