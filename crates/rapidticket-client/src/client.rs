//! HTTP client for the ticket backend

use std::time::Duration;

use async_trait::async_trait;
use rapidticket_core::models::{ApiConfig, Employee, TicketSubmission};
use reqwest::{Response, StatusCode};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::api::TicketApi;
use crate::{Error, Result};

#[derive(Debug, Deserialize)]
struct IpResponse {
    #[serde(default)]
    ip: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

pub struct TicketDeskClient {
    http: reqwest::Client,
    base_url: String,
    ip_url: String,
}

impl TicketDeskClient {
    /// Create a client from the API section of the config.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.normalized_base_url().to_string(),
            ip_url: config.ip_url(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turn a non-success response into [`Error::Api`], keeping the
    /// backend's `message` when the body carries one.
    async fn api_error(response: Response) -> Error {
        let status = response.status().as_u16();
        let message = match response.text().await {
            Ok(body) => serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|body| body.message),
            Err(e) => {
                warn!("Failed to read error body: {}", e);
                None
            }
        };
        Error::Api { status, message }
    }
}

#[async_trait]
impl TicketApi for TicketDeskClient {
    async fn fetch_ip(&self) -> Result<String> {
        debug!(url = %self.ip_url, "Fetching client IP");
        let response = self.http.get(&self.ip_url).send().await?;

        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        let body: IpResponse = response.json().await?;
        Ok(body.ip.unwrap_or_default())
    }

    async fn find_employee(&self, key: &str) -> Result<Employee> {
        debug!(key, "Looking up employee");
        let response = self
            .http
            .get(self.url("/api/employees/find"))
            .query(&[("key", key)])
            .send()
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => {
                debug!(key, "Employee not found");
                Err(Error::NotFound(key.to_string()))
            }
            status if status.is_success() => {
                let employee: Employee = response.json().await?;
                debug!(emp_id = %employee.emp_id, "Employee found");
                Ok(employee)
            }
            _ => {
                let err = Self::api_error(response).await;
                warn!(key, "Employee lookup failed: {}", err);
                Err(err)
            }
        }
    }

    async fn submit_ticket(&self, submission: &TicketSubmission) -> Result<()> {
        debug!(emp_id = %submission.emp_id, reporting_to = %submission.reporting_to, "Submitting ticket");
        let response = self
            .http
            .post(self.url("/api/tickets"))
            .json(submission)
            .send()
            .await?;

        if !response.status().is_success() {
            let err = Self::api_error(response).await;
            warn!("Ticket submission failed: {}", err);
            return Err(err);
        }

        debug!(emp_id = %submission.emp_id, "Ticket submitted");
        Ok(())
    }
}
