//! REST client for the platform's v2 API

use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

use super::{BucketsClient, ClientError, LabelsClient, Result};
use crate::labels::{Label, LabelProperties};

const LABELS_PATH: &str = "/api/v2/labels";
const BUCKETS_PATH: &str = "/api/v2/buckets";

#[derive(Deserialize)]
struct LabelsResponse {
    #[serde(default)]
    labels: Vec<Label>,
}

#[derive(Deserialize)]
struct LabelResponse {
    label: Label,
}

#[derive(Deserialize)]
struct BucketEntry {
    name: String,
}

#[derive(Deserialize)]
struct BucketsResponse {
    #[serde(default)]
    buckets: Vec<BucketEntry>,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Blocking HTTP client (ureq) for labels and buckets
pub struct HttpClient {
    agent: ureq::Agent,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self {
            agent,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: &str, path: &str) -> ureq::Request {
        let request = self.agent.request(method, &format!("{}{}", self.base_url, path));
        match &self.token {
            Some(token) => request.set("Authorization", &format!("Token {}", token)),
            None => request,
        }
    }

    fn send(&self, request: ureq::Request, body: Option<serde_json::Value>) -> Result<String> {
        let response = match body {
            Some(body) => request
                .set("Content-Type", "application/json")
                .send_string(&body.to_string()),
            None => request.call(),
        };

        match response {
            Ok(response) => response
                .into_string()
                .map_err(|e| ClientError::Decode(e.to_string())),
            Err(ureq::Error::Status(status, response)) => {
                let body = response.into_string().unwrap_or_default();
                Err(ClientError::Status {
                    status,
                    message: error_message(&body),
                })
            }
            Err(ureq::Error::Transport(transport)) => {
                Err(ClientError::Transport(transport.to_string()))
            }
        }
    }
}

/// Map a 404 on a label route to `NotFound`
fn not_found_as(id: &str, err: ClientError) -> ClientError {
    match err {
        ClientError::Status { status: 404, .. } => ClientError::NotFound(id.to_string()),
        other => other,
    }
}

/// Pull `message` out of an API error body, falling back to the raw text
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|e| e.message)
        .unwrap_or_else(|_| body.trim().to_string())
}

fn decode_labels(body: &str) -> Result<Vec<Label>> {
    serde_json::from_str::<LabelsResponse>(body)
        .map(|r| r.labels)
        .map_err(|e| ClientError::Decode(e.to_string()))
}

fn decode_label(body: &str) -> Result<Label> {
    serde_json::from_str::<LabelResponse>(body)
        .map(|r| r.label)
        .map_err(|e| ClientError::Decode(e.to_string()))
}

fn decode_buckets(body: &str) -> Result<Vec<String>> {
    serde_json::from_str::<BucketsResponse>(body)
        .map(|r| r.buckets.into_iter().map(|b| b.name).collect())
        .map_err(|e| ClientError::Decode(e.to_string()))
}

impl LabelsClient for HttpClient {
    fn get_all(&self) -> Result<Vec<Label>> {
        log::debug!("GET {}{}", self.base_url, LABELS_PATH);
        let body = self.send(self.request("GET", LABELS_PATH), None)?;
        decode_labels(&body)
    }

    fn create(&self, name: &str, properties: &LabelProperties) -> Result<Label> {
        log::debug!("POST {}{} name={}", self.base_url, LABELS_PATH, name);
        let body = json!({ "name": name, "properties": properties });
        let body = self.send(self.request("POST", LABELS_PATH), Some(body))?;
        decode_label(&body)
    }

    fn update(&self, id: &str, properties: &LabelProperties) -> Result<Label> {
        let path = format!("{}/{}", LABELS_PATH, id);
        log::debug!("PATCH {}{}", self.base_url, path);
        let body = json!({ "properties": properties });
        let body = self
            .send(self.request("PATCH", &path), Some(body))
            .map_err(|e| not_found_as(id, e))?;
        decode_label(&body)
    }

    fn delete(&self, id: &str) -> Result<()> {
        let path = format!("{}/{}", LABELS_PATH, id);
        log::debug!("DELETE {}{}", self.base_url, path);
        self.send(self.request("DELETE", &path), None)
            .map_err(|e| not_found_as(id, e))?;
        Ok(())
    }
}

impl BucketsClient for HttpClient {
    fn get_buckets(&self, org_id: &str) -> Result<Vec<String>> {
        log::debug!("GET {}{} orgID={}", self.base_url, BUCKETS_PATH, org_id);
        let request = self.request("GET", BUCKETS_PATH).query("orgID", org_id);
        let body = self.send(request, None)?;
        decode_buckets(&body)
    }
}
