//! Blocking HTTP round-trips with status and timeout validation.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;
use url::Url;

/// Failures signalled by a single request/response exchange.
///
/// A single failed attempt is terminal; there are no retries here.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request to {url} timed out after {timeout:?}")]
    Timeout { url: Url, timeout: Duration },
    #[error("{url} answered {status}")]
    Status { url: Url, status: StatusCode },
    #[error("could not reach {url}")]
    Network {
        url: Url,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered with a body that is not valid JSON")]
    Decode {
        url: Url,
        #[source]
        source: reqwest::Error,
    },
}

/// Issue one GET for `url` and return the parsed JSON body.
///
/// The whole exchange, connection setup included, must finish within
/// `timeout`. Responses outside the 2xx range are failures.
pub fn send(
    client: &Client,
    url: &Url,
    headers: HeaderMap,
    timeout: Duration,
) -> Result<Value, TransportError> {
    debug!(%url, ?timeout, "dispatching registry request");

    let response = client
        .get(url.clone())
        .headers(headers)
        .timeout(timeout)
        .send()
        .map_err(|source| {
            if source.is_timeout() {
                TransportError::Timeout {
                    url: url.clone(),
                    timeout,
                }
            } else {
                TransportError::Network {
                    url: url.clone(),
                    source,
                }
            }
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(TransportError::Status {
            url: url.clone(),
            status,
        });
    }

    response.json().map_err(|source| {
        if source.is_timeout() {
            TransportError::Timeout {
                url: url.clone(),
                timeout,
            }
        } else {
            TransportError::Decode {
                url: url.clone(),
                source,
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;

    fn url_of(server: &MockServer, path: &str) -> Url {
        Url::parse(&server.url(path)).unwrap()
    }

    #[test]
    fn success_exposes_parsed_body() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/thing");
            then.status(200).json_body(json!({"name": "Acme"}));
        });

        let body = send(
            &Client::new(),
            &url_of(&server, "/thing"),
            HeaderMap::new(),
            Duration::from_secs(5),
        )
        .unwrap();

        assert_eq!(body, json!({"name": "Acme"}));
        mock.assert();
    }

    #[test]
    fn non_success_status_is_an_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/thing");
            then.status(404).json_body(json!({"error": "not-found"}));
        });

        let err = send(
            &Client::new(),
            &url_of(&server, "/thing"),
            HeaderMap::new(),
            Duration::from_secs(5),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            TransportError::Status { status, .. } if status == StatusCode::NOT_FOUND
        ));
    }

    #[test]
    fn unparseable_body_is_a_decode_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/thing");
            then.status(200).body("certainly not json");
        });

        let err = send(
            &Client::new(),
            &url_of(&server, "/thing"),
            HeaderMap::new(),
            Duration::from_secs(5),
        )
        .unwrap_err();

        assert!(matches!(err, TransportError::Decode { .. }));
    }

    #[test]
    fn slow_response_times_out() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/thing");
            then.status(200)
                .delay(Duration::from_secs(2))
                .json_body(json!({}));
        });

        let err = send(
            &Client::new(),
            &url_of(&server, "/thing"),
            HeaderMap::new(),
            Duration::from_millis(100),
        )
        .unwrap_err();

        assert!(matches!(err, TransportError::Timeout { .. }));
    }

    #[test]
    fn headers_reach_the_wire() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/thing")
                .header("x-correlation-id", "abc-123");
            then.status(200).json_body(json!({}));
        });

        let mut headers = HeaderMap::new();
        headers.insert("x-correlation-id", "abc-123".parse().unwrap());
        send(
            &Client::new(),
            &url_of(&server, "/thing"),
            headers,
            Duration::from_secs(5),
        )
        .unwrap();

        mock.assert();
    }
}
