// booking-client/src/client/http_oneshot.rs
// Oneshot HTTP client - in-process calls into an axum Router
//
// Requires the "in-process" feature

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Method, Request};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tower::ServiceExt;

use super::http::{HttpClient, decode_body};
use crate::{ClientError, ClientResult};

/// Oneshot HTTP client (in-memory calls)
///
/// Drives the Router through Tower's `oneshot`, so a server and client in
/// the same process talk without a socket.
///
/// # Example
///
/// ```ignore
/// use booking_client::OneshotHttpClient;
///
/// let router = booking_mock::router(Arc::new(booking_mock::AppState::seeded()));
/// let client = OneshotHttpClient::new(router);
/// let tables: Vec<shared::Table> = client.get("/api/tables").await?;
/// ```
#[derive(Debug, Clone)]
pub struct OneshotHttpClient {
    router: Router,
}

impl OneshotHttpClient {
    /// `router` must already have its state attached (`with_state` called)
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    fn build_request(&self, method: Method, path: &str, body: Body) -> ClientResult<Request<Body>> {
        Request::builder()
            .method(method)
            .uri(path)
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(body)
            .map_err(|e| ClientError::Internal(format!("Failed to build request: {}", e)))
    }

    async fn execute<T: DeserializeOwned>(&self, request: Request<Body>) -> ClientResult<T> {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .map_err(|e| ClientError::Internal(format!("Oneshot call failed: {}", e)))?;

        let status = response.status().as_u16();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| ClientError::Internal(format!("Failed to read body: {}", e)))?;

        decode_body(status, &body)
    }
}

#[async_trait]
impl HttpClient for OneshotHttpClient {
    async fn get<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T> {
        let request = self.build_request(Method::GET, path, Body::empty())?;
        self.execute(request).await
    }

    async fn post<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let bytes = serde_json::to_vec(body)?;
        let request = self.build_request(Method::POST, path, Body::from(bytes))?;
        self.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Json;
    use axum::routing::get;

    #[tokio::test]
    async fn test_oneshot_round_trip() {
        let router = Router::new().route("/ping", get(|| async { Json(vec!["pong"]) }));
        let client = OneshotHttpClient::new(router);

        let body: Vec<String> = client.get("/ping").await.unwrap();
        assert_eq!(body, vec!["pong".to_string()]);
    }

    #[tokio::test]
    async fn test_oneshot_unknown_route_is_api_error() {
        let client = OneshotHttpClient::new(Router::new());
        let result: ClientResult<serde_json::Value> = client.get("/missing").await;
        assert_eq!(result.unwrap_err().status(), Some(404));
    }
}
