/* src/server/adapter/axum/src/lib.rs */

mod error;
mod handler;

use std::sync::Arc;

use epoxy_server::SiteServer;
use epoxy_server::manifest::build_manifest;
use tracing::info;

/// Re-export epoxy-server core for convenience
pub use epoxy_server;

/// Extension trait that converts a `SiteServer` into an Axum router.
pub trait IntoAxumRouter {
  fn into_axum_router(self) -> axum::Router;
  fn serve(
    self,
    addr: &str,
  ) -> impl std::future::Future<Output = Result<(), Box<dyn std::error::Error>>> + Send;
}

impl IntoAxumRouter for SiteServer {
  fn into_axum_router(self) -> axum::Router {
    let parts = self.into_parts();
    let manifest_json = serde_json::to_value(build_manifest(&parts.procedures, &parts.pages))
      .unwrap_or(serde_json::Value::Null);
    let handlers = parts.procedures.into_iter().map(|p| (p.name.clone(), Arc::new(p))).collect();
    handler::build_router(manifest_json, handlers, parts.pages, parts.layout, parts.locale_cookie)
  }

  async fn serve(self, addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let router = self.into_axum_router();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "site server listening");
    axum::serve(listener, router).await?;
    Ok(())
  }
}
