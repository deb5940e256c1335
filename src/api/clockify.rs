use super::{NewTimeEntry, TimeEntry, TimeTracker, User};
use crate::libs::config::Config;
use crate::libs::error::{DclError, Result};
use reqwest::{
    blocking::{Client, RequestBuilder, Response},
    header::{HeaderMap, HeaderValue, ACCEPT},
    Method, StatusCode,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

const API_KEY_HEADER: &str = "X-Api-Key";
const USER_URL: &str = "user";

#[derive(Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

#[derive(Serialize)]
struct StopTimer<'a> {
    end: &'a str,
}

/// Blocking Clockify REST client authenticated with an API key.
pub struct Clockify {
    client: Client,
    base_url: String,
}

impl fmt::Debug for Clockify {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Clockify").field("base_url", &self.base_url).finish_non_exhaustive()
    }
}

impl Clockify {
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_base_url(&config.base_url, &config.api_key)
    }

    pub fn with_base_url(base_url: &str, api_key: &str) -> Result<Self> {
        let mut key = HeaderValue::from_str(api_key)
            .map_err(|_| DclError::ConfigInvalid("api_key contains characters not allowed in an HTTP header".to_string()))?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, key);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder().default_headers(headers).user_agent(user_agent()).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn send(&self, method: Method, endpoint: &str, build: impl FnOnce(RequestBuilder) -> RequestBuilder) -> Result<Response> {
        let url = slash_join(&self.base_url, endpoint);
        tracing::debug!(%method, %url, "sending Clockify request");
        let response = build(self.client.request(method, &url)).send()?;
        tracing::debug!(status = %response.status(), "received Clockify response");
        Ok(response)
    }
}

impl TimeTracker for Clockify {
    fn current_user(&self) -> Result<User> {
        let response = ensure_success(self.send(Method::GET, USER_URL, |req| req)?)?;
        read_json(response)
    }

    fn running_entry(&self, workspace_id: &str, user_id: &str) -> Result<Option<TimeEntry>> {
        let endpoint = format!("workspaces/{}/user/{}/time-entries?in-progress=true", workspace_id, user_id);
        let response = ensure_success(self.send(Method::GET, &endpoint, |req| req)?)?;
        let entries: Vec<TimeEntry> = read_json(response)?;
        Ok(entries.into_iter().find(TimeEntry::is_running))
    }

    fn stop_running(&self, workspace_id: &str, user_id: &str, end: &str) -> Result<bool> {
        let endpoint = format!("workspaces/{}/user/{}/time-entries", workspace_id, user_id);
        let response = self.send(Method::PATCH, &endpoint, |req| req.json(&StopTimer { end }))?;

        // Clockify answers 404 when no timer is running
        if response.status() == StatusCode::NOT_FOUND {
            tracing::debug!("no running time entry to stop");
            return Ok(false);
        }
        ensure_success(response)?;
        Ok(true)
    }

    fn create_entry(&self, workspace_id: &str, entry: &NewTimeEntry) -> Result<TimeEntry> {
        let endpoint = format!("workspaces/{}/time-entries", workspace_id);
        let response = ensure_success(self.send(Method::POST, &endpoint, |req| req.json(entry))?)?;
        read_json(response)
    }
}

fn user_agent() -> String {
    format!("{}/{} ({})", APP_METADATA_NAME, APP_METADATA_VERSION, APP_METADATA_OWNER)
}

fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    Err(DclError::ApiError {
        status: status.as_u16(),
        message: error_message(status, &body),
    })
}

fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    response.json().map_err(|err| DclError::ApiError {
        status: status.as_u16(),
        message: format!("unexpected response body: {}", err),
    })
}

/// Picks the most useful text out of an error response.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(ApiErrorBody { message: Some(message) }) = serde_json::from_str::<ApiErrorBody>(body) {
        if !message.trim().is_empty() {
            return message;
        }
    }
    let body = body.trim();
    if !body.is_empty() {
        return body.to_string();
    }
    status.canonical_reason().unwrap_or("Unknown error").to_string()
}

/// Joins URL parts with exactly one `/` between them.
pub fn slash_join(base: &str, endpoint: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), endpoint.trim_start_matches('/'))
}
