/* src/server/adapter/axum/src/error.rs */

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use elfinder_engine::WidgetError;

/// Newtype wrapper to implement `IntoResponse` for `WidgetError`.
/// Required because Rust's orphan rule prevents `impl IntoResponse for WidgetError`
/// when both types are foreign to this crate.
pub(crate) struct AxumError(pub WidgetError);

impl IntoResponse for AxumError {
  fn into_response(self) -> Response {
    let err = self.0;
    // Either way the host is misconfigured or broken, never the client.
    let status = StatusCode::INTERNAL_SERVER_ERROR;
    if err.is_configuration() {
      tracing::warn!(code = err.code(), error = %err, "elfinder widget is misconfigured");
    } else {
      tracing::error!(code = err.code(), error = %err, "elfinder render failed");
    }
    let body = serde_json::json!({
      "ok": false,
      "error": {
        "code": err.code(),
        "message": err.to_string(),
      }
    });
    (status, axum::Json(body)).into_response()
  }
}

impl From<WidgetError> for AxumError {
  fn from(err: WidgetError) -> Self {
    Self(err)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use axum::body::to_bytes;
  use serde_json::Value;

  async fn body_json(err: WidgetError) -> (StatusCode, Value) {
    let resp = AxumError::from(err).into_response();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
  }

  #[tokio::test]
  async fn configuration_error_body() {
    let (status, json) = body_json(WidgetError::MissingContainerId).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "CONFIGURATION_ERROR");
    assert_eq!(json["error"]["message"], "container id must not be empty");
  }

  #[tokio::test]
  async fn internal_error_body() {
    let inner = serde_json::from_str::<Value>("{").unwrap_err();
    let (status, json) = body_json(WidgetError::from(inner)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["ok"], false);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
  }
}
