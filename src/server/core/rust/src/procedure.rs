/* src/server/core/rust/src/procedure.rs */

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::errors::SiteError;

pub type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

pub type HandlerFn =
  Arc<dyn Fn(serde_json::Value) -> BoxFuture<Result<serde_json::Value, SiteError>> + Send + Sync>;

pub struct ProcedureDef {
  pub name: String,
  pub handler: HandlerFn,
}

impl ProcedureDef {
  pub fn new(name: impl Into<String>, handler: HandlerFn) -> Self {
    Self { name: name.into(), handler }
  }

  pub async fn call(&self, input: serde_json::Value) -> Result<serde_json::Value, SiteError> {
    (self.handler)(input).await
  }
}
