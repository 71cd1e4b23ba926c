//! Lead webhook adapter
//!
//! Posts registered leads as JSON to the CRM automation hook. One attempt per
//! lead; any transport error or non-2xx status is a failure.

use async_trait::async_trait;
use socialflip_application::ports::lead_submitter::{LeadSubmitter, SubmissionError};
use socialflip_domain::Lead;
use tracing::debug;

const USER_AGENT: &str = concat!("socialflip/", env!("CARGO_PKG_VERSION"));

pub struct WebhookLeadSubmitter {
    client: reqwest::Client,
    url: String,
}

impl WebhookLeadSubmitter {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl LeadSubmitter for WebhookLeadSubmitter {
    async fn submit(&self, lead: &Lead) -> Result<(), SubmissionError> {
        debug!("Posting lead to {}", self.url);

        let response = self
            .client
            .post(&self.url)
            .header("User-Agent", USER_AGENT)
            .json(lead)
            .send()
            .await
            .map_err(|e| SubmissionError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmissionError::Status(status.as_u16()));
        }

        debug!("Webhook accepted lead ({})", status.as_u16());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Accept one connection, answer with `status`, and return the raw request
    async fn one_shot_server(status: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/hook", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&request);
                if let Some(header_end) = text.find("\r\n\r\n") {
                    let length = text[..header_end]
                        .lines()
                        .find_map(|l| {
                            let (name, value) = l.split_once(':')?;
                            name.eq_ignore_ascii_case("content-length")
                                .then(|| value.trim().parse::<usize>().ok())
                                .flatten()
                        })
                        .unwrap_or(0);
                    if request.len() >= header_end + 4 + length {
                        break;
                    }
                }
            }
            let response = format!(
                "HTTP/1.1 {}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n",
                status
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            String::from_utf8_lossy(&request).into_owned()
        });

        (url, handle)
    }

    #[tokio::test]
    async fn test_posts_lead_as_json() {
        let (url, server) = one_shot_server("200 OK").await;
        let submitter = WebhookLeadSubmitter::new(url);

        submitter
            .submit(&Lead::new("Ada", "ada@example.com"))
            .await
            .unwrap();

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /hook HTTP/1.1"));
        assert!(request.to_lowercase().contains("content-type: application/json"));
        assert!(request.ends_with(r#"{"name":"Ada","email":"ada@example.com"}"#));
    }

    #[tokio::test]
    async fn test_non_success_status_is_failure() {
        let (url, server) = one_shot_server("500 Internal Server Error").await;
        let submitter = WebhookLeadSubmitter::new(url);

        let err = submitter
            .submit(&Lead::new("Ada", "ada@example.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, SubmissionError::Status(500)));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_unreachable_host_is_connection_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/hook", listener.local_addr().unwrap());
        drop(listener);

        let err = WebhookLeadSubmitter::new(url)
            .submit(&Lead::new("Ada", "ada@example.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, SubmissionError::ConnectionError(_)));
    }
}
