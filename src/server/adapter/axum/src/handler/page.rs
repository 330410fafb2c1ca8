/* src/server/adapter/axum/src/handler/page.rs */

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{MatchedPath, Path, State};
use axum::http::{HeaderMap, HeaderValue, Uri, header};
use axum::response::{IntoResponse, Redirect, Response};
use epoxy_content::Locale;
use epoxy_server::{
  LoaderDef, LoaderRole, PATH_PARAM, ProcedureDef, ResolveContext, SiteError, negotiate_locale,
};
use tokio::task::JoinSet;
use tracing::{debug, warn};

use super::AppState;
use crate::error::{AxumError, ok_envelope};

/// Bare root: send the visitor to their negotiated locale.
pub(super) async fn handle_root(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Redirect {
  let ctx = ResolveContext {
    cookie_header: headers.get(header::COOKIE).and_then(|v| v.to_str().ok()),
    accept_language: headers.get(header::ACCEPT_LANGUAGE).and_then(|v| v.to_str().ok()),
    cookie_name: &state.locale_cookie,
  };
  let locale = negotiate_locale(&ctx);
  debug!(%locale, "root redirect");
  Redirect::temporary(&format!("/{locale}"))
}

/// Run loaders concurrently and collect keyed results. Guards are checked but
/// not stored; a rejected guard or required loader is a not-found outcome.
async fn run_loaders(
  handlers: &HashMap<String, Arc<ProcedureDef>>,
  loaders: &[LoaderDef],
  params: &HashMap<String, String>,
) -> Result<serde_json::Map<String, serde_json::Value>, SiteError> {
  let mut join_set = JoinSet::new();

  for (idx, loader) in loaders.iter().enumerate() {
    let input = (loader.input_fn)(params);
    let proc = handlers
      .get(&loader.procedure)
      .cloned()
      .ok_or_else(|| SiteError::internal(format!("Procedure '{}' not found", loader.procedure)))?;

    join_set.spawn(async move {
      let result = proc.call(input).await?;
      Ok::<(usize, serde_json::Value), SiteError>((idx, result))
    });
  }

  let mut data = serde_json::Map::new();
  while let Some(result) = join_set.join_next().await {
    let (idx, value) = result
      .map_err(|e| SiteError::internal(e.to_string()))? // JoinError -> Internal (task panic)
      ?;
    let loader = &loaders[idx];
    if !loader.accepts(&value) {
      return Err(SiteError::not_found(format!("'{}' rejected the request", loader.procedure)));
    }
    if loader.role != LoaderRole::Guard {
      data.insert(loader.data_key.clone(), value);
    }
  }
  Ok(data)
}

pub(super) async fn handle_page(
  State(state): State<Arc<AppState>>,
  matched: MatchedPath,
  uri: Uri,
  Path(mut params): Path<HashMap<String, String>>,
) -> Result<Response, AxumError> {
  params.insert(PATH_PARAM.to_string(), uri.path().to_string());
  let outcome = render_page(&state, matched.as_str(), &params).await;
  let payload = match outcome {
    Ok(payload) => payload,
    Err(err) => {
      if err.is_not_found() {
        warn!(path = %uri.path(), reason = err.message(), "page not found");
      }
      return Err(err.into());
    }
  };

  let mut response = axum::Json(ok_envelope(serde_json::json!({
    "locale": payload.locale,
    "dir": payload.locale.direction(),
    "route": uri.path(),
    "page": payload.page,
    "layout": payload.layout,
  })))
  .into_response();
  response
    .headers_mut()
    .insert(header::CONTENT_LANGUAGE, HeaderValue::from_static(payload.locale.as_str()));
  Ok(response)
}

struct PagePayload {
  locale: Locale,
  page: serde_json::Map<String, serde_json::Value>,
  layout: serde_json::Map<String, serde_json::Value>,
}

async fn render_page(
  state: &AppState,
  route: &str,
  params: &HashMap<String, String>,
) -> Result<PagePayload, SiteError> {
  // Locale gate: the path segment must name a published locale.
  let requested = params.get("locale").map(String::as_str).unwrap_or_default();
  let locale: Locale =
    requested.parse().map_err(|_| SiteError::not_found(format!("Unknown locale '{requested}'")))?;

  let page =
    state.pages.get(route).ok_or_else(|| SiteError::not_found(format!("No page at '{route}'")))?;

  debug!(route, %locale, "page");
  let (page_data, layout) = tokio::try_join!(
    run_loaders(&state.handlers, &page.loaders, params),
    run_loaders(&state.handlers, &state.layout, params),
  )?;
  Ok(PagePayload { locale, page: page_data, layout })
}
