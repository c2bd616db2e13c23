use reqwest::{header, Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, trace};

use crate::context::CallContext;
use crate::error::BcyError;

use super::envelope::service_error;
use super::BlockCypher;

const FETCH_OK: &[StatusCode] = &[StatusCode::OK];
const CREATE_OK: &[StatusCode] = &[StatusCode::OK, StatusCode::CREATED];
const REPLACE_OK: &[StatusCode] = &[StatusCode::OK, StatusCode::NO_CONTENT];
const REMOVE_OK: &[StatusCode] = &[StatusCode::OK, StatusCode::NO_CONTENT];

impl BlockCypher {
    /// GET `target`, accepting only 200, and decode the body into `T`.
    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        ctx: &CallContext,
        target: Url,
    ) -> Result<T, BcyError> {
        let body = self
            .round_trip::<()>(ctx, Method::GET, target, None, FETCH_OK)
            .await?;
        decode(&body)
    }

    /// POST `target` with an optional JSON body, accepting 200 or 201.
    pub(crate) async fn create<B, T>(
        &self,
        ctx: &CallContext,
        target: Url,
        body: Option<&B>,
    ) -> Result<T, BcyError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = self
            .round_trip(ctx, Method::POST, target, body, CREATE_OK)
            .await?;
        decode(&body)
    }

    /// PUT `target` with a JSON body, accepting 200 or 204. An empty
    /// response body (the 204 case) yields `None`.
    pub(crate) async fn replace<B, T>(
        &self,
        ctx: &CallContext,
        target: Url,
        body: &B,
    ) -> Result<Option<T>, BcyError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = self
            .round_trip(ctx, Method::PUT, target, Some(body), REPLACE_OK)
            .await?;
        if body.trim().is_empty() {
            return Ok(None);
        }
        decode(&body).map(Some)
    }

    /// DELETE `target`, accepting 200 or 204. Any response body is ignored.
    pub(crate) async fn remove(&self, ctx: &CallContext, target: Url) -> Result<(), BcyError> {
        self.round_trip::<()>(ctx, Method::DELETE, target, None, REMOVE_OK)
            .await
            .map(drop)
    }

    /// Issue exactly one request and return the raw body of a successful
    /// response. Non-success statuses go through the error normalizer.
    async fn round_trip<B>(
        &self,
        ctx: &CallContext,
        method: Method,
        target: Url,
        body: Option<&B>,
        accepted: &[StatusCode],
    ) -> Result<String, BcyError>
    where
        B: Serialize + ?Sized,
    {
        // The query string carries the token, so only the path is recorded.
        let path = target.path().to_owned();
        debug!(http.method = %method, http.path = %path, "bcy request");

        let mut builder = self.http.request(method.clone(), target);
        builder = match body {
            Some(body) => builder.json(body),
            None if method == Method::POST => {
                builder.header(header::CONTENT_TYPE, "application/json")
            }
            None => builder,
        };

        let (status, text) = ctx
            .run(async move {
                let response = builder.send().await?;
                let status = response.status();
                let text = response.text().await?;
                Ok::<_, BcyError>((status, text))
            })
            .await?;

        debug!(
            http.method = %method,
            http.path = %path,
            %status,
            body_len = text.len(),
            "bcy response"
        );
        trace!(http.path = %path, body = %text, "bcy response body");

        if !accepted.contains(&status) {
            return Err(service_error(status, &text));
        }
        Ok(text)
    }
}

/// Tolerant decode: unknown fields are ignored and result shapes default
/// their missing fields, but a body that is not JSON for `T` is an error.
fn decode<T: DeserializeOwned>(body: &str) -> Result<T, BcyError> {
    serde_json::from_str(body).map_err(BcyError::Decode)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, ResponseTemplate};

    use super::*;
    use crate::test_util::{client_for, mock_server};

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Created {
        id: String,
        label: String,
    }

    #[tokio::test]
    async fn fetch_sends_token_and_decodes() {
        let server = mock_server().await;
        Mock::given(method("GET"))
            .and(path("/v1/btc/main/hooks/h1"))
            .and(query_param("token", "abc"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"id": "h1", "extra": [1, 2]})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, "abc");
        let target = client.url("/hooks/h1", None).expect("url must build");
        let got: Created = client
            .fetch(&CallContext::background(), target)
            .await
            .expect("fetch must succeed");
        assert_eq!(got.id, "h1");
        assert_eq!(got.label, "");
    }

    #[tokio::test]
    async fn fetch_rejects_created_status() {
        let server = mock_server().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({"id": "x"})))
            .mount(&server)
            .await;

        let client = client_for(&server, "");
        let target = client.url("/hooks/x", None).expect("url must build");
        let err = client
            .fetch::<Created>(&CallContext::background(), target)
            .await
            .expect_err("201 is not a fetch success");
        assert_eq!(err.status(), Some(StatusCode::CREATED));
    }

    #[tokio::test]
    async fn fetch_not_found_surfaces_service_message() {
        let server = mock_server().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(serde_json::json!({"error": "not found"})),
            )
            .mount(&server)
            .await;

        let client = client_for(&server, "");
        let target = client.url("/txs/deadbeef", None).expect("url must build");
        let err = client
            .fetch::<Created>(&CallContext::background(), target)
            .await
            .expect_err("404 must fail");
        match err {
            BcyError::Service { status, message } => {
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert_eq!(message, "not found");
            }
            other => panic!("expected service error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn ok_status_with_garbage_body_is_decode_error() {
        let server = mock_server().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = client_for(&server, "");
        let target = client.url("/txs/x", None).expect("url must build");
        let err = client
            .fetch::<Created>(&CallContext::background(), target)
            .await
            .expect_err("garbage must not decode");
        assert!(matches!(err, BcyError::Decode(_)));
    }

    #[tokio::test]
    async fn create_accepts_created_and_sends_body() {
        let server = mock_server().await;
        Mock::given(method("POST"))
            .and(path("/v1/btc/main/wallets"))
            .and(body_json(serde_json::json!({"name": "w1"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({"id": "w1"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, "");
        let target = client.url("/wallets", None).expect("url must build");
        let got: Created = client
            .create(
                &CallContext::background(),
                target,
                Some(&serde_json::json!({"name": "w1"})),
            )
            .await
            .expect("create must succeed");
        assert_eq!(got.id, "w1");
    }

    #[tokio::test]
    async fn create_rejects_no_content() {
        let server = mock_server().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = client_for(&server, "");
        let target = client.url("/addrs", None).expect("url must build");
        let err = client
            .create::<(), Created>(&CallContext::background(), target, None)
            .await
            .expect_err("204 is not a create success");
        assert_eq!(err.status(), Some(StatusCode::NO_CONTENT));
    }

    #[tokio::test]
    async fn replace_with_no_content_yields_none() {
        let server = mock_server().await;
        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, "");
        let target = client.url("/addrs/x/meta", None).expect("url must build");
        let got: Option<Created> = client
            .replace(&CallContext::background(), target, &serde_json::json!({"k": "v"}))
            .await
            .expect("replace must succeed");
        assert!(got.is_none());
    }

    #[tokio::test]
    async fn replace_rejects_created() {
        let server = mock_server().await;
        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let client = client_for(&server, "");
        let target = client.url("/addrs/x/meta", None).expect("url must build");
        let err = client
            .replace::<_, Created>(&CallContext::background(), target, &serde_json::json!({}))
            .await
            .expect_err("201 is not a replace success");
        assert_eq!(err.status(), Some(StatusCode::CREATED));
    }

    #[tokio::test]
    async fn remove_accepts_ok_and_no_content() {
        let server = mock_server().await;
        Mock::given(method("DELETE"))
            .and(path("/v1/btc/main/hooks/a"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/v1/btc/main/hooks/b"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ignored"))
            .mount(&server)
            .await;

        let client = client_for(&server, "");
        let ctx = CallContext::background();
        for id in ["/hooks/a", "/hooks/b"] {
            let target = client.url(id, None).expect("url must build");
            client.remove(&ctx, target).await.expect("remove must succeed");
        }
    }

    #[tokio::test]
    async fn failure_statuses_never_return_results() {
        let server = mock_server().await;
        for code in [400u16, 401, 403, 404, 409, 429, 500, 503] {
            Mock::given(method("GET"))
                .and(path(format!("/v1/btc/main/status/{code}")))
                .respond_with(ResponseTemplate::new(code))
                .mount(&server)
                .await;
        }

        let client = client_for(&server, "");
        let ctx = CallContext::background();
        for code in [400u16, 401, 403, 404, 409, 429, 500, 503] {
            let target = client
                .url(&format!("/status/{code}"), None)
                .expect("url must build");
            let err = client
                .fetch::<Created>(&ctx, target)
                .await
                .expect_err("failure status must not decode");
            assert_eq!(err.status().map(|s| s.as_u16()), Some(code));
        }
    }

    #[tokio::test]
    async fn canceled_context_issues_no_request() {
        let server = mock_server().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(0)
            .mount(&server)
            .await;

        let token = tokio_util::sync::CancellationToken::new();
        token.cancel();
        let ctx = CallContext::background().with_cancel(token);

        let client = client_for(&server, "");
        let target = client.url("/hooks", None).expect("url must build");
        let err = client
            .fetch::<Created>(&ctx, target)
            .await
            .expect_err("canceled context must fail");
        assert!(matches!(err, BcyError::Canceled));
    }

    #[tokio::test]
    async fn slow_response_hits_deadline() {
        let server = mock_server().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({}))
                    .set_delay(std::time::Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        let ctx = CallContext::background().with_timeout(std::time::Duration::from_millis(50));
        let client = client_for(&server, "");
        let target = client.url("/hooks", None).expect("url must build");
        let err = client
            .fetch::<Created>(&ctx, target)
            .await
            .expect_err("deadline must fire");
        assert!(matches!(err, BcyError::DeadlineExceeded));
    }
}
