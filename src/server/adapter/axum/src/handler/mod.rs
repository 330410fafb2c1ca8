/* src/server/adapter/axum/src/handler/mod.rs */

mod page;
mod rpc;

use std::collections::HashMap;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use epoxy_server::{LoaderDef, PageDef, ProcedureDef, SiteError};

use crate::error::AxumError;

pub(crate) struct AppState {
  pub manifest_json: serde_json::Value,
  pub handlers: HashMap<String, Arc<ProcedureDef>>,
  /// Keyed by localized route pattern, as reported by `MatchedPath`.
  pub pages: HashMap<String, Arc<PageDef>>,
  pub layout: Vec<LoaderDef>,
  pub locale_cookie: String,
}

pub(crate) fn build_router(
  manifest_json: serde_json::Value,
  handlers: HashMap<String, Arc<ProcedureDef>>,
  pages: Vec<PageDef>,
  layout: Vec<LoaderDef>,
  locale_cookie: String,
) -> Router {
  let mut page_map = HashMap::new();
  let mut router = Router::new()
    .route("/_site/manifest.json", get(rpc::handle_manifest))
    .route("/_site/procedure/{name}", post(rpc::handle_rpc))
    .route("/", get(page::handle_root));

  for page in pages {
    let route = page.localized_route();
    page_map.insert(route.clone(), Arc::new(page));
    router = router.route(&route, get(page::handle_page));
  }

  let state =
    Arc::new(AppState { manifest_json, handlers, pages: page_map, layout, locale_cookie });

  router.fallback(handle_fallback).with_state(state)
}

async fn handle_fallback() -> AxumError {
  SiteError::not_found("Not found").into()
}

#[cfg(test)]
mod tests;
