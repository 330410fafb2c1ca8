/* src/server/adapter/axum/src/handler/tests.rs */

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use epoxy_content::ContentStore;
use epoxy_server::site_server;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::IntoAxumRouter;

fn app() -> Router {
  let store = Arc::new(ContentStore::embedded().unwrap());
  site_server(store, Duration::ZERO).into_axum_router()
}

async fn send(req: Request<Body>) -> (StatusCode, axum::http::HeaderMap, Value) {
  let resp = app().oneshot(req).await.unwrap();
  let status = resp.status();
  let headers = resp.headers().clone();
  let bytes = resp.into_body().collect().await.unwrap().to_bytes();
  let body = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
  (status, headers, body)
}

async fn get(uri: &str) -> (StatusCode, axum::http::HeaderMap, Value) {
  send(Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn post(uri: &str, body: Value) -> (StatusCode, Value) {
  let req = Request::post(uri)
    .header(header::CONTENT_TYPE, "application/json")
    .body(Body::from(body.to_string()))
    .unwrap();
  let (status, _, body) = send(req).await;
  (status, body)
}

#[tokio::test]
async fn english_page_renders() {
  let (status, headers, body) = get("/en/about").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(headers.get(header::CONTENT_LANGUAGE).unwrap(), "en");
  assert_eq!(body["ok"], true);
  assert_eq!(body["data"]["locale"], "en");
  assert_eq!(body["data"]["dir"], "ltr");
  assert_eq!(body["data"]["route"], "/en/about");
  assert!(body["data"]["page"]["page"].is_object());
  assert!(body["data"]["page"]["seo"]["title"].is_string());
  assert_eq!(body["data"]["layout"]["navigation"]["links"][1]["href"], "/en/about");
  assert!(body["data"]["layout"]["messages"]["nav"].is_object());
}

#[tokio::test]
async fn arabic_page_is_rtl() {
  let (status, headers, body) = get("/ar").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(headers.get(header::CONTENT_LANGUAGE).unwrap(), "ar");
  assert_eq!(body["data"]["dir"], "rtl");
  assert_eq!(body["data"]["layout"]["navigation"]["links"][0]["href"], "/ar");
}

#[tokio::test]
async fn language_switcher_follows_current_page() {
  let (status, _, body) = get("/ar/about").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(
    body["data"]["layout"]["navigation"]["alternates"],
    json!([
      {"locale": "en", "href": "/en/about"},
      {"locale": "ar", "href": "/ar/about"},
    ])
  );

  let (_, _, body) = get("/en/services/retail-applications").await;
  let alternates = &body["data"]["layout"]["navigation"]["alternates"];
  assert_eq!(alternates[1]["href"], "/ar/services/retail-applications");
}

#[tokio::test]
async fn unsupported_locale_is_not_found() {
  let (status, _, body) = get("/fr/about").await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert_eq!(body["ok"], false);
  assert_eq!(body["error"]["code"], "NOT_FOUND");
  assert_eq!(body["error"]["transient"], false);
}

#[tokio::test]
async fn service_page_checks_category() {
  let (status, _, body) = get("/ar/services/retail-applications/residential-flooring").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["data"]["page"]["page"]["hero"]["title"], "أرضيات سكنية");
  assert!(body["data"]["page"].get("valid").is_none());

  let (status, _, _) = get("/en/services/wrong-category/residential-flooring").await;
  assert_eq!(status, StatusCode::NOT_FOUND);

  let (status, _, _) = get("/en/services/retail-applications/does-not-exist").await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn category_page() {
  let (status, _, body) = get("/en/services/retail-applications").await;
  assert_eq!(status, StatusCode::OK);
  assert!(body["data"]["page"]["page"]["services"].as_array().is_some_and(|s| !s.is_empty()));

  let (status, _, _) = get("/en/services/no-such-category").await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn blog_pages() {
  let (status, _, _) = get("/en/blogs/ultimate-guide-epoxy-flooring").await;
  assert_eq!(status, StatusCode::OK);

  let (status, _, _) = get("/en/blogs/does-not-exist").await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_path_is_not_found() {
  let (status, _, body) = get("/en/pricing").await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn root_redirects_to_negotiated_locale() {
  let (status, headers, _) = get("/").await;
  assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
  assert_eq!(headers.get(header::LOCATION).unwrap(), "/en");

  let req = Request::get("/").header(header::ACCEPT_LANGUAGE, "ar-SA,en;q=0.5").body(Body::empty()).unwrap();
  let (_, headers, _) = send(req).await;
  assert_eq!(headers.get(header::LOCATION).unwrap(), "/ar");

  let req = Request::get("/")
    .header(header::COOKIE, "NEXT_LOCALE=en")
    .header(header::ACCEPT_LANGUAGE, "ar")
    .body(Body::empty())
    .unwrap();
  let (_, headers, _) = send(req).await;
  assert_eq!(headers.get(header::LOCATION).unwrap(), "/en");
}

#[tokio::test]
async fn rpc_soft_miss_is_null() {
  let (status, body) = post("/_site/procedure/getBlogBySlug", json!({"slug": "does-not-exist"})).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body, json!({"ok": true, "data": null}));
}

#[tokio::test]
async fn rpc_hard_miss_and_bad_input() {
  let (status, body) = post("/_site/procedure/getServiceDetailData", json!({"slug": "nope"})).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert_eq!(body["error"]["code"], "NOT_FOUND");

  let (status, body) = post("/_site/procedure/getBlogBySlug", json!({"locale": "en"})).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

  let (status, _) = post("/_site/procedure/getEverything", json!({})).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn rpc_accepts_empty_body() {
  let req = Request::post("/_site/procedure/getNavigation").body(Body::empty()).unwrap();
  let (status, _, body) = send(req).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body["data"]["links"][0]["href"], "/en");
}

#[tokio::test]
async fn batch_preserves_order() {
  let (status, body) = post(
    "/_site/procedure/_batch",
    json!({"calls": [
      {"procedure": "validateServiceCategory", "input": {"slug": "residential-flooring", "category": "retail-applications"}},
      {"procedure": "getServiceDetailData", "input": {"slug": "nope"}},
      {"procedure": "missing"},
      {"procedure": "getBlogBySlug", "input": {"slug": "does-not-exist"}},
    ]}),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  let results = body["data"]["results"].as_array().unwrap();
  assert_eq!(results.len(), 4);
  assert_eq!(results[0], json!({"ok": true, "data": true}));
  assert_eq!(results[1]["error"]["code"], "NOT_FOUND");
  assert_eq!(results[2]["error"]["message"], "Procedure 'missing' not found");
  assert_eq!(results[3], json!({"ok": true, "data": null}));
}

#[tokio::test]
async fn batch_requires_calls() {
  let (status, body) = post("/_site/procedure/_batch", json!({"procedure": "getNavigation"})).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn manifest_lists_routes() {
  let (status, _, body) = get("/_site/manifest.json").await;
  assert_eq!(status, StatusCode::OK);
  let pages = body["pages"].as_array().unwrap();
  assert_eq!(pages.len(), 13);
  assert!(pages.iter().any(|p| p["route"] == "/{locale}/services/{category}/{service}"));
  assert!(body["procedures"].as_array().unwrap().iter().any(|p| p == "getStaticTranslations"));
}
