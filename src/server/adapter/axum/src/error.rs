/* src/server/adapter/axum/src/error.rs */

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use epoxy_server::SiteError;
use serde_json::{Value, json};

/// Success envelope shared by single calls, batch entries and pages.
pub(crate) fn ok_envelope(data: Value) -> Value {
  json!({ "ok": true, "data": data })
}

/// Failure envelope; errors raised by content lookups are never transient.
pub(crate) fn err_envelope(err: &SiteError) -> Value {
  json!({
    "ok": false,
    "error": { "code": err.code(), "message": err.message(), "transient": false },
  })
}

/// `SiteError` as an HTTP response. A local type because `IntoResponse` and
/// `SiteError` both live in other crates.
pub(crate) struct AxumError(pub SiteError);

impl IntoResponse for AxumError {
  fn into_response(self) -> Response {
    let status = StatusCode::from_u16(self.0.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, axum::Json(err_envelope(&self.0))).into_response()
  }
}

impl From<SiteError> for AxumError {
  fn from(err: SiteError) -> Self {
    Self(err)
  }
}

#[cfg(test)]
mod tests {
  use http_body_util::BodyExt;

  use super::*;

  #[test]
  fn envelopes() {
    assert_eq!(ok_envelope(json!(null)), json!({"ok": true, "data": null}));
    let err = SiteError::validation("missing field `slug`");
    assert_eq!(
      err_envelope(&err),
      json!({"ok": false, "error": {"code": "VALIDATION_ERROR", "message": "missing field `slug`", "transient": false}})
    );
  }

  #[tokio::test]
  async fn response_carries_error_status() {
    let resp = AxumError(SiteError::not_found("gone")).into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"]["code"], "NOT_FOUND");
  }
}
