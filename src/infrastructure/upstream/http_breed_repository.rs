//! HTTP implementation of the breed repository.

use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;

use crate::domain::entities::BreedPage;
use crate::domain::repositories::BreedRepository;
use crate::error::UpstreamError;
use crate::infrastructure::audit::ResponseLog;

/// Reads breed pages from a catfact.ninja-compatible API.
///
/// Requests go to `{base_url}/breeds?page={n}`. Every response body is written
/// to the [`ResponseLog`] before it is decoded, including error responses.
pub struct HttpBreedRepository {
    client: Client,
    breeds_url: String,
    response_log: Arc<ResponseLog>,
}

impl HttpBreedRepository {
    pub fn new(client: Client, base_url: &str, response_log: Arc<ResponseLog>) -> Self {
        Self {
            client,
            breeds_url: format!("{}/breeds", base_url.trim_end_matches('/')),
            response_log,
        }
    }
}

#[async_trait]
impl BreedRepository for HttpBreedRepository {
    async fn fetch_page(&self, page: u32) -> Result<BreedPage, UpstreamError> {
        let response = self
            .client
            .get(&self.breeds_url)
            .query(&[("page", page)])
            .send()
            .await
            .map_err(UpstreamError::Transport)?;

        let status = response.status();
        let body = response.text().await.map_err(UpstreamError::Body)?;

        self.response_log.append(&body).await;

        if !status.is_success() {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn repository(base_url: &str, dir: &TempDir) -> HttpBreedRepository {
        let log = Arc::new(ResponseLog::new(dir.path().join("response.txt")));
        HttpBreedRepository::new(Client::new(), base_url, log)
    }

    #[tokio::test]
    async fn test_fetch_page_decodes_and_logs_body() {
        let server = MockServer::start_async().await;
        let dir = TempDir::new().unwrap();

        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/breeds").query_param("page", "2");
                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(json!({
                        "current_page": 2,
                        "data": [
                            {"breed": "Bengal", "country": "United States", "origin": "Hybrid", "coat": "Short", "pattern": "Spotted"}
                        ],
                        "last_page": 4
                    }));
            })
            .await;

        let repo = repository(&server.base_url(), &dir);

        let page = repo.fetch_page(2).await.unwrap();

        mock.assert_async().await;
        assert_eq!(page.last_page, 4);
        assert_eq!(page.data[0].breed, "Bengal");
        assert_eq!(page.data[0].country, "United States");

        let logged = std::fs::read_to_string(dir.path().join("response.txt")).unwrap();
        assert_eq!(logged.lines().count(), 1);
        assert!(logged.contains("Bengal"));
    }

    #[tokio::test]
    async fn test_fetch_page_tolerates_trailing_slash_in_base_url() {
        let server = MockServer::start_async().await;
        let dir = TempDir::new().unwrap();

        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/breeds").query_param("page", "1");
                then.status(200).json_body(json!({"data": [], "last_page": 1}));
            })
            .await;

        let repo = repository(&format!("{}/", server.base_url()), &dir);

        assert!(repo.fetch_page(1).await.is_ok());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_page_malformed_json() {
        let server = MockServer::start_async().await;
        let dir = TempDir::new().unwrap();

        server
            .mock_async(|when, then| {
                when.method(GET).path("/breeds");
                then.status(200).body("<html>not json</html>");
            })
            .await;

        let repo = repository(&server.base_url(), &dir);

        let result = repo.fetch_page(1).await;
        assert!(matches!(result, Err(UpstreamError::Decode(_))));

        let logged = std::fs::read_to_string(dir.path().join("response.txt")).unwrap();
        assert_eq!(logged, "<html>not json</html>\n");
    }

    #[tokio::test]
    async fn test_fetch_page_missing_last_page_is_malformed() {
        let server = MockServer::start_async().await;
        let dir = TempDir::new().unwrap();

        server
            .mock_async(|when, then| {
                when.method(GET).path("/breeds");
                then.status(200).json_body(json!({"data": []}));
            })
            .await;

        let repo = repository(&server.base_url(), &dir);

        assert!(matches!(
            repo.fetch_page(1).await,
            Err(UpstreamError::Decode(_))
        ));
    }

    #[tokio::test]
    async fn test_fetch_page_error_status() {
        let server = MockServer::start_async().await;
        let dir = TempDir::new().unwrap();

        server
            .mock_async(|when, then| {
                when.method(GET).path("/breeds");
                then.status(503).body("unavailable");
            })
            .await;

        let repo = repository(&server.base_url(), &dir);

        let result = repo.fetch_page(1).await;
        assert!(matches!(result, Err(UpstreamError::Status { status: 503 })));
    }

    #[tokio::test]
    async fn test_fetch_page_unreachable_upstream() {
        let dir = TempDir::new().unwrap();
        let repo = repository("http://127.0.0.1:1", &dir);

        let result = repo.fetch_page(1).await;

        assert!(matches!(result, Err(UpstreamError::Transport(_))));
        assert!(!dir.path().join("response.txt").exists());
    }

    #[tokio::test]
    async fn test_fetch_page_survives_unwritable_log() {
        let server = MockServer::start_async().await;
        let dir = TempDir::new().unwrap();

        server
            .mock_async(|when, then| {
                when.method(GET).path("/breeds");
                then.status(200).json_body(json!({"data": [], "last_page": 1}));
            })
            .await;

        let log = Arc::new(ResponseLog::new(dir.path().join("no-such-dir").join("log.txt")));
        let repo = HttpBreedRepository::new(Client::new(), &server.base_url(), log);

        assert!(repo.fetch_page(1).await.is_ok());
    }
}
