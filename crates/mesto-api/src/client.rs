// Async HTTP client for the gallery REST API.
//
// Base path: {server}/v1/{cohort}/
// Auth: raw token in the `authorization` header
//
// Endpoint methods live in `users.rs` and `cards.rs` as inherent impls so
// this module stays focused on URL construction and response handling.

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::models::ErrorResponse;
use crate::transport::TransportConfig;

/// Async client for the gallery API.
///
/// Uses token authentication and communicates via JSON REST endpoints
/// under `/v1/{cohort}/`.
#[derive(Debug, Clone)]
pub struct MestoClient {
    http: reqwest::Client,
    base_url: Url,
}

impl MestoClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from a token, transport config and cohort.
    ///
    /// Injects `authorization: {token}` as a default header on every request.
    pub fn from_token(
        server: &str,
        cohort: &str,
        token: &SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        let mut value = HeaderValue::from_str(token.expose_secret())
            .map_err(|e| Error::InvalidToken(format!("invalid header value: {e}")))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);

        let http = transport.build_client_with_headers(headers)?;
        let base_url = Self::normalize_base_url(server, cohort)?;

        Ok(Self { http, base_url })
    }

    /// Wrap an existing `reqwest::Client` (caller manages auth headers).
    pub fn from_reqwest(server: &str, cohort: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(server, cohort)?;
        Ok(Self { http, base_url })
    }

    /// Build the base URL ending in `/v1/{cohort}/`.
    ///
    /// A server URL that already carries the cohort path is kept as is.
    /// An empty cohort means the server URL is already the full base.
    fn normalize_base_url(raw: &str, cohort: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        let path = url.path().trim_end_matches('/').to_owned();
        let cohort = cohort.trim_matches('/');

        let suffix = format!("/v1/{cohort}");
        if cohort.is_empty() || path.ends_with(&suffix) {
            url.set_path(&format!("{path}/"));
        } else {
            url.set_path(&format!("{path}{suffix}/"));
        }

        Ok(url)
    }

    /// The normalized base URL (always ends with `/`).
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Join a relative path (e.g. `"cards"`) onto the base URL.
    pub(crate) fn url(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(path)?)
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        self.handle_response(resp).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("POST {url}");

        let resp = self.http.post(url).json(body).send().await?;
        self.handle_response(resp).await
    }

    pub(crate) async fn patch<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("PATCH {url}");

        let resp = self.http.patch(url).json(body).send().await?;
        self.handle_response(resp).await
    }

    pub(crate) async fn put<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("PUT {url}");

        let resp = self.http.put(url).send().await?;
        self.handle_response(resp).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), Error> {
        let url = self.url(path)?;
        debug!("DELETE {url}");

        let resp = self.http.delete(url).send().await?;
        self.handle_empty(resp).await
    }

    pub(crate) async fn delete_with_response<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("DELETE {url}");

        let resp = self.http.delete(url).send().await?;
        self.handle_response(resp).await
    }

    // ── Response handling ────────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                let preview: String = body.chars().take(200).collect();
                Error::Deserialization {
                    message: format!("{e} (body preview: {preview:?})"),
                    body,
                }
            })
        } else {
            Err(self.parse_error(status, resp).await)
        }
    }

    async fn handle_empty(&self, resp: reqwest::Response) -> Result<(), Error> {
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(self.parse_error(status, resp).await)
        }
    }

    async fn parse_error(&self, status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
        let raw = resp.text().await.unwrap_or_default();

        let message = serde_json::from_str::<ErrorResponse>(&raw)
            .ok()
            .and_then(|e| e.message)
            .unwrap_or_else(|| {
                if raw.is_empty() {
                    status.to_string()
                } else {
                    raw.chars().take(200).collect()
                }
            });

        match status {
            reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
                Error::Authentication { message }
            }
            reqwest::StatusCode::NOT_FOUND => Error::NotFound { message },
            reqwest::StatusCode::BAD_REQUEST => Error::Validation { message },
            _ => Error::Api {
                status: status.as_u16(),
                message,
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::MestoClient;

    #[test]
    fn appends_version_and_cohort() {
        let url = MestoClient::normalize_base_url("https://mesto.example.com", "cohort-42").unwrap();
        assert_eq!(url.as_str(), "https://mesto.example.com/v1/cohort-42/");
    }

    #[test]
    fn keeps_existing_cohort_path() {
        let url =
            MestoClient::normalize_base_url("https://mesto.example.com/v1/cohort-42/", "cohort-42")
                .unwrap();
        assert_eq!(url.as_str(), "https://mesto.example.com/v1/cohort-42/");
    }

    #[test]
    fn empty_cohort_uses_server_as_base() {
        let url = MestoClient::normalize_base_url("http://localhost:3000/api", "").unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/api/");
    }

    #[test]
    fn joins_relative_paths() {
        let client = MestoClient::from_reqwest(
            "https://mesto.example.com",
            "cohort-42",
            reqwest::Client::new(),
        )
        .unwrap();
        let url = client.url("cards/abc/likes").unwrap();
        assert_eq!(
            url.as_str(),
            "https://mesto.example.com/v1/cohort-42/cards/abc/likes"
        );
    }

    #[test]
    fn rejects_invalid_server_url() {
        assert!(MestoClient::normalize_base_url("not a url", "cohort-42").is_err());
    }
}
