//! HTTP client for the employee REST API.

use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use roster_api::{Employee, EmployeeFields};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success response; `message` is the server's error text.
    #[error("{message}")]
    Api { status: u16, message: String },
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Http(e) => e.status().map(|s| s.as_u16()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Deserialize)]
struct MessageBody {
    message: String,
}

#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// `base_url` points at the API root, e.g. `http://localhost:5000/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn list_employees(&self) -> Result<Vec<Employee>> {
        let response = self.http.get(self.url("/employees")).send().await?;
        decode(response).await
    }

    pub async fn get_employee(&self, id: i64) -> Result<Employee> {
        let response = self
            .http
            .get(self.url(&format!("/employees/{}", id)))
            .send()
            .await?;
        decode(response).await
    }

    pub async fn create_employee(&self, fields: &EmployeeFields) -> Result<Employee> {
        let response = self
            .http
            .post(self.url("/employees"))
            .json(fields)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn update_employee(&self, id: i64, fields: &EmployeeFields) -> Result<Employee> {
        let response = self
            .http
            .put(self.url(&format!("/employees/{}", id)))
            .json(fields)
            .send()
            .await?;
        decode(response).await
    }

    /// Returns the server's confirmation message.
    pub async fn delete_employee(&self, id: i64) -> Result<String> {
        let response = self
            .http
            .delete(self.url(&format!("/employees/{}", id)))
            .send()
            .await?;
        let body: MessageBody = decode(response).await?;
        Ok(body.message)
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let message = match response.json::<MessageBody>().await {
        Ok(body) => body.message,
        Err(_) => fallback_message(status),
    };
    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

fn fallback_message(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash() {
        let client = ApiClient::new("http://localhost:5000/api/");
        assert_eq!(client.base_url(), "http://localhost:5000/api");
        assert_eq!(client.url("/employees"), "http://localhost:5000/api/employees");
    }

    #[test]
    fn test_api_error_displays_server_message() {
        let err = ClientError::Api {
            status: 404,
            message: "Employee not found".to_string(),
        };
        assert_eq!(err.to_string(), "Employee not found");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_fallback_message() {
        assert_eq!(fallback_message(StatusCode::BAD_GATEWAY), "Bad Gateway");
    }
}
