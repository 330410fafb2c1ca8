/* src/server/adapter/axum/src/handler/rpc.rs */

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use epoxy_server::{ProcedureDef, SiteError};
use serde::Deserialize;
use tokio::task::JoinSet;
use tracing::debug;

use super::AppState;
use crate::error::{AxumError, err_envelope, ok_envelope};

pub(super) async fn handle_manifest(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  axum::Json(state.manifest_json.clone())
}

fn lookup(state: &AppState, name: &str) -> Result<Arc<ProcedureDef>, SiteError> {
  state
    .handlers
    .get(name)
    .cloned()
    .ok_or_else(|| SiteError::not_found(format!("Procedure '{name}' not found")))
}

pub(super) async fn handle_rpc(
  State(state): State<Arc<AppState>>,
  Path(name): Path<String>,
  body: axum::body::Bytes,
) -> Result<Response, AxumError> {
  if name == "_batch" {
    return handle_batch(&state, &body).await;
  }

  let proc = lookup(&state, &name)?;
  // An empty body is treated like `null`: every procedure input is optional.
  let input = if body.is_empty() {
    serde_json::Value::Null
  } else {
    serde_json::from_slice(&body).map_err(|e| SiteError::validation(e.to_string()))?
  };

  debug!(procedure = %name, "rpc");
  let data = proc.call(input).await?;
  Ok(axum::Json(ok_envelope(data)).into_response())
}

#[derive(Deserialize)]
struct BatchRequest {
  calls: Vec<BatchCall>,
}

#[derive(Deserialize)]
struct BatchCall {
  procedure: String,
  #[serde(default)]
  input: serde_json::Value,
}

/// Runs every call concurrently. Each entry succeeds or fails on its own and
/// lands in the slot of its call.
async fn handle_batch(state: &AppState, body: &[u8]) -> Result<Response, AxumError> {
  let batch: BatchRequest = serde_json::from_slice(body)
    .map_err(|_| SiteError::validation("Batch request must have a 'calls' array"))?;
  debug!(calls = batch.calls.len(), "rpc batch");

  let mut slots = vec![serde_json::Value::Null; batch.calls.len()];
  let mut join_set = JoinSet::new();
  for (slot, call) in batch.calls.into_iter().enumerate() {
    let proc = lookup(state, &call.procedure);
    join_set.spawn(async move {
      let outcome = match proc {
        Ok(proc) => proc.call(call.input).await,
        Err(err) => Err(err),
      };
      (slot, outcome)
    });
  }

  while let Some(joined) = join_set.join_next().await {
    let (slot, outcome) = joined.map_err(|e| SiteError::internal(e.to_string()))?;
    slots[slot] = match outcome {
      Ok(data) => ok_envelope(data),
      Err(err) => err_envelope(&err),
    };
  }

  Ok(axum::Json(ok_envelope(serde_json::json!({ "results": slots }))).into_response())
}
