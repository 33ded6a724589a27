//! Request extractors shared by the feature routers
//!
//! Both are forgiving in the way the public API has always been:
//! a bad `?id=` is treated as id 0, and a body that cannot be decoded
//! is answered with a bare 406.

use std::convert::Infallible;

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::{StatusCode, Uri};
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;

/// `?id=<int>` query parameter. Missing or malformed values become `0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdQuery(pub i64);

impl IdQuery {
    /// Uses the first `id` pair when the key repeats.
    pub fn from_uri(uri: &Uri) -> Self {
        let id = Query::<Vec<(String, String)>>::try_from_uri(uri)
            .ok()
            .and_then(|Query(pairs)| pairs.into_iter().find(|(key, _)| key == "id"))
            .and_then(|(_, raw)| raw.parse::<i64>().ok())
            .unwrap_or(0);
        Self(id)
    }
}

impl<S> FromRequestParts<S> for IdQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let id = Self::from_uri(&parts.uri);
        if id.0 == 0 {
            tracing::debug!(query = ?parts.uri.query(), "id query parameter missing or malformed");
        }
        Ok(id)
    }
}

/// JSON body extractor that ignores `Content-Type` and rejects with
/// `406 Not Acceptable` and an empty body.
#[derive(Debug, Clone)]
pub struct StrictJson<T>(pub T);

/// Rejection for [`StrictJson`]
#[derive(Debug, thiserror::Error)]
pub enum BodyRejection {
    #[error("request body could not be read")]
    Unreadable,

    #[error("request body is not valid JSON for this resource: {0}")]
    Undecodable(#[from] serde_json::Error),
}

impl IntoResponse for BodyRejection {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "Rejected request body");
        (StatusCode::NOT_ACCEPTABLE, ()).into_response()
    }
}

impl<T, S> FromRequest<S> for StrictJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = BodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|_| BodyRejection::Unreadable)?;
        let value = serde_json::from_slice(&body)?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::body::Body;
    use axum::http::Request;
    use axum::routing::{get, post};
    use serde::Deserialize;
    use tower::ServiceExt;

    fn id_of(uri: &str) -> i64 {
        IdQuery::from_uri(&uri.parse().unwrap()).0
    }

    #[test]
    fn test_id_query_parsing() {
        assert_eq!(id_of("/person?id=12"), 12);
        assert_eq!(id_of("/person?other=1&id=-3"), -3);
        assert_eq!(id_of("/person?id=abc"), 0);
        assert_eq!(id_of("/person?id="), 0);
        assert_eq!(id_of("/person?name=x"), 0);
        assert_eq!(id_of("/person"), 0);
    }

    #[test]
    fn test_id_query_repeated_key_uses_first() {
        assert_eq!(id_of("/person?id=4&id=5"), 4);
        assert_eq!(id_of("/person?id=abc&id=5"), 0);
    }

    #[derive(Debug, Deserialize)]
    struct Named {
        name: String,
    }

    fn app() -> Router {
        Router::new()
            .route("/id", get(|IdQuery(id): IdQuery| async move { id.to_string() }))
            .route(
                "/named",
                post(|StrictJson(named): StrictJson<Named>| async move { named.name }),
            )
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_id_query_never_rejects() {
        let response = app()
            .oneshot(Request::builder().uri("/id?id=nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "0");
    }

    #[tokio::test]
    async fn test_strict_json_accepts_without_content_type() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/named")
                    .body(Body::from(r#"{"name":"Alice"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "Alice");
    }

    #[tokio::test]
    async fn test_strict_json_rejects_with_406() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/named")
                    .header("content-type", "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_ACCEPTABLE);
        assert!(body_string(response).await.is_empty());
    }
}
