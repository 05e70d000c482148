use async_trait::async_trait;
use log::debug;
use reqwest::redirect::Policy;

use std::error::Error;

use crate::config::Config;
use crate::core::constants::http_status;
use crate::core::error::Result;
use crate::core::types::CheckOutcome;

/// A single reachability check.
///
/// Implementations must resolve every call to exactly one outcome; errors
/// are folded into `CheckOutcome::Failure` rather than returned.
#[async_trait]
pub trait CheckLink: Send + Sync {
    async fn check(&self, url: &str) -> CheckOutcome;
}

/// Checks a url with one HTTP request and no retries.
#[derive(Debug, Clone)]
pub struct HttpChecker {
    client: reqwest::Client,
    use_head: bool,
}

impl HttpChecker {
    pub fn new(config: &Config) -> Result<Self> {
        let mut client_builder = reqwest::Client::builder()
            .redirect(Policy::limited(10))
            .user_agent(config.user_agent());

        // Without a timeout a hung connection is only resolved by the OS
        if let Some(timeout) = config.timeout_duration() {
            client_builder = client_builder.timeout(timeout);
        }

        Ok(Self {
            client: client_builder.build()?,
            use_head: config.use_head_requests.unwrap_or(false),
        })
    }

    async fn send(&self, url: &str) -> reqwest::Result<reqwest::StatusCode> {
        if self.use_head {
            let status = self.client.head(url).send().await?.status();
            let head_rejected = matches!(
                status.as_u16(),
                http_status::METHOD_NOT_ALLOWED | http_status::NOT_IMPLEMENTED
            );
            if !head_rejected {
                return Ok(status);
            }
            debug!("HEAD rejected with {status} for {url}, falling back to GET");
        }

        Ok(self.client.get(url).send().await?.status())
    }
}

#[async_trait]
impl CheckLink for HttpChecker {
    async fn check(&self, url: &str) -> CheckOutcome {
        match self.send(url).await {
            Ok(status) => classify_status(status.as_u16()),
            Err(err) => CheckOutcome::failure(describe_error(&err)),
        }
    }
}

/// Client and server errors fail; everything else a server answers with passes.
pub fn classify_status(status_code: u16) -> CheckOutcome {
    if status_code >= http_status::CLIENT_ERROR_MIN {
        CheckOutcome::failure(status_code.to_string())
    } else {
        CheckOutcome::Success
    }
}

/// Innermost cause of a transport error, e.g. `Connection refused (os error 111)`.
fn describe_error(err: &reqwest::Error) -> String {
    std::iter::successors(err.source(), |&e| e.source())
        .last()
        .map(|e| e.to_string())
        .unwrap_or_else(|| err.to_string())
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use mockito::Server;

    fn checker(config: &Config) -> HttpChecker {
        HttpChecker::new(config).expect("client should build")
    }

    #[test]
    fn test_classify_status() {
        assert_eq!(classify_status(200), CheckOutcome::Success);
        assert_eq!(classify_status(204), CheckOutcome::Success);
        assert_eq!(classify_status(304), CheckOutcome::Success);
        assert_eq!(classify_status(400), CheckOutcome::failure("400"));
        assert_eq!(classify_status(404), CheckOutcome::failure("404"));
        assert_eq!(classify_status(503), CheckOutcome::failure("503"));
    }

    #[tokio::test]
    async fn test_check__success_status() {
        let mut server = Server::new_async().await;
        let _m = server.mock("GET", "/200").with_status(200).create_async().await;

        let outcome = checker(&Config::default())
            .check(&(server.url() + "/200"))
            .await;

        assert_eq!(outcome, CheckOutcome::Success);
    }

    #[tokio::test]
    async fn test_check__client_error_status() {
        let mut server = Server::new_async().await;
        let _m = server.mock("GET", "/404").with_status(404).create_async().await;

        let outcome = checker(&Config::default())
            .check(&(server.url() + "/404"))
            .await;

        assert_eq!(outcome, CheckOutcome::failure("404"));
    }

    #[tokio::test]
    async fn test_check__server_error_status_is_not_retried() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("GET", "/500")
            .with_status(500)
            .expect(1)
            .create_async()
            .await;

        let outcome = checker(&Config::default())
            .check(&(server.url() + "/500"))
            .await;

        assert_eq!(outcome, CheckOutcome::failure("500"));
        m.assert_async().await;
    }

    #[tokio::test]
    async fn test_check__redirect_is_success() {
        let mut server = Server::new_async().await;
        let _m301 = server
            .mock("GET", "/old")
            .with_status(301)
            .with_header("location", "/new")
            .create_async()
            .await;
        let _m200 = server.mock("GET", "/new").with_status(200).create_async().await;

        let outcome = checker(&Config::default())
            .check(&(server.url() + "/old"))
            .await;

        assert_eq!(outcome, CheckOutcome::Success);
    }

    #[tokio::test]
    async fn test_check__sends_user_agent() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("GET", "/ua")
            .match_header("user-agent", "bookmarks-test-agent")
            .with_status(200)
            .create_async()
            .await;
        let config = Config {
            user_agent: Some("bookmarks-test-agent".to_string()),
            ..Default::default()
        };

        let outcome = checker(&config).check(&(server.url() + "/ua")).await;

        assert_eq!(outcome, CheckOutcome::Success);
        m.assert_async().await;
    }

    #[tokio::test]
    async fn test_check__head_request() {
        let mut server = Server::new_async().await;
        let m = server.mock("HEAD", "/head").with_status(200).create_async().await;
        let config = Config {
            use_head_requests: Some(true),
            ..Default::default()
        };

        let outcome = checker(&config).check(&(server.url() + "/head")).await;

        assert_eq!(outcome, CheckOutcome::Success);
        m.assert_async().await;
    }

    #[tokio::test]
    async fn test_check__head_rejected_falls_back_to_get() {
        let mut server = Server::new_async().await;
        let _head = server.mock("HEAD", "/nohead").with_status(405).create_async().await;
        let get = server
            .mock("GET", "/nohead")
            .with_status(404)
            .expect(1)
            .create_async()
            .await;
        let config = Config {
            use_head_requests: Some(true),
            ..Default::default()
        };

        let outcome = checker(&config).check(&(server.url() + "/nohead")).await;

        // Classified by the GET answer, not the HEAD rejection
        assert_eq!(outcome, CheckOutcome::failure("404"));
        get.assert_async().await;
    }

    #[tokio::test]
    async fn test_check__connection_refused() {
        let outcome = checker(&Config::default())
            .check("http://127.0.0.1:1/refused")
            .await;

        let reason = outcome.reason().unwrap_or_default().to_lowercase();
        assert!(outcome.is_failure());
        assert!(reason.contains("refused"), "reason: {reason}");
    }

    #[tokio::test]
    async fn test_check__unresolvable_host_is_not_a_connect_wrapper() {
        let outcome = checker(&Config::default())
            .check("http://no-such-host.invalid/")
            .await;

        let reason = outcome.reason().unwrap_or_default();
        assert!(outcome.is_failure());
        assert!(!reason.is_empty());
        assert!(!reason.contains("client error (Connect)"), "reason: {reason}");
    }

    #[tokio::test]
    async fn test_check__invalid_url() {
        let outcome = checker(&Config::default()).check("not a url").await;

        assert!(outcome.is_failure());
    }
}
