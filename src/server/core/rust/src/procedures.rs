/* src/server/core/rust/src/procedures.rs */

//! Content procedures: every page family behind the RPC boundary.

use std::sync::Arc;
use std::time::Duration;

use epoxy_content::pages::{about, blogs, contact, home, legal, projects, services, why_choose_epoxy};
use epoxy_content::{ContentStore, Locale, navigation, navigation_for_path, static_messages};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::SiteError;
use crate::procedure::ProcedureDef;

/// Input accepted by every content procedure. Fields a procedure does not use
/// are ignored; a missing required field is a validation error.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContentInput {
  pub locale: Option<String>,
  pub slug: Option<String>,
  pub category: Option<String>,
  pub id: Option<String>,
  /// Current page path, used by the language switcher.
  pub path: Option<String>,
}

fn require<'a>(value: Option<&'a String>, field: &str) -> Result<&'a str, SiteError> {
  value.map(String::as_str).ok_or_else(|| SiteError::validation(format!("missing field `{field}`")))
}

impl ContentInput {
  pub fn parse(raw: serde_json::Value) -> Result<Self, SiteError> {
    if raw.is_null() {
      return Ok(Self::default());
    }
    serde_json::from_value(raw).map_err(|e| SiteError::validation(e.to_string()))
  }

  /// Requested locale as sent. Unsupported values resolve to the default
  /// bundle inside the assemblers.
  pub fn locale(&self) -> &str {
    self.locale.as_deref().unwrap_or(Locale::DEFAULT.as_str())
  }

  pub fn slug(&self) -> Result<&str, SiteError> {
    require(self.slug.as_ref(), "slug")
  }

  pub fn category(&self) -> Result<&str, SiteError> {
    require(self.category.as_ref(), "category")
  }

  pub fn id(&self) -> Result<&str, SiteError> {
    require(self.id.as_ref(), "id")
  }

  /// Absolute page path, if one was sent.
  pub fn path(&self) -> Result<Option<&str>, SiteError> {
    match self.path.as_deref() {
      None => Ok(None),
      Some(path) if path.starts_with('/') => Ok(Some(path)),
      Some(path) => Err(SiteError::validation(format!("path `{path}` must start with '/'"))),
    }
  }
}

#[derive(Clone)]
pub struct ContentApi {
  store: Arc<ContentStore>,
  latency: Duration,
}

impl ContentApi {
  pub fn new(store: Arc<ContentStore>) -> Self {
    Self { store, latency: Duration::ZERO }
  }

  /// Artificial delay applied to every call.
  pub fn latency(mut self, latency: Duration) -> Self {
    self.latency = latency;
    self
  }

  fn define<T, F>(&self, name: &'static str, run: F) -> ProcedureDef
  where
    T: Serialize + 'static,
    F: Fn(&ContentStore, &ContentInput) -> Result<T, SiteError> + Send + Sync + 'static,
  {
    let api = self.clone();
    let run = Arc::new(run);
    ProcedureDef::new(
      name,
      Arc::new(move |raw: serde_json::Value| {
        let api = api.clone();
        let run = run.clone();
        Box::pin(async move {
          let input = ContentInput::parse(raw)?;
          if !api.latency.is_zero() {
            tokio::time::sleep(api.latency).await;
          }
          debug!(procedure = name, locale = input.locale(), "content procedure");
          let store: &ContentStore = &api.store;
          let output = run(store, &input)?;
          serde_json::to_value(output).map_err(|e| SiteError::internal(e.to_string()))
        })
      }),
    )
  }

  pub fn procedures(&self) -> Vec<ProcedureDef> {
    vec![
      // Home
      self.define("getHomePageData", |s, i| Ok(home::home_data(s, i.locale()))),
      self.define("getHomePageSEO", |s, i| Ok(home::home_seo(s, i.locale()))),
      // About
      self.define("getAboutPageData", |s, i| Ok(about::about_data(s, i.locale()))),
      self.define("getAboutPageSEO", |s, i| Ok(about::about_seo(s, i.locale()))),
      // Services
      self.define("getServicesPageData", |s, i| Ok(services::services_page_data(s, i.locale()))),
      self.define("getServicesPageSEO", |s, i| Ok(services::services_page_seo(s, i.locale()))),
      self.define("getAllServices", |s, i| Ok(services::all_services(s, i.locale()))),
      self.define("getServicesByCategory", |s, i| {
        Ok(services::services_by_category(s, i.category()?, i.locale()))
      }),
      self.define("getCategoryBySlug", |s, i| Ok(services::category_by_slug(s, i.category()?, i.locale()))),
      self.define("getCategoryPageData", |s, i| {
        Ok(services::category_page_data(s, i.category()?, i.locale()))
      }),
      self.define("getCategoryPageSEO", |s, i| Ok(services::category_page_seo(s, i.category()?, i.locale()))),
      self.define("getServiceDetailData", |s, i| {
        Ok(services::service_detail_data(s, i.slug()?, i.locale())?)
      }),
      self.define("getServiceDetailSEO", |s, i| Ok(services::service_detail_seo(s, i.slug()?, i.locale())?)),
      self.define("validateServiceCategory", |s, i| {
        Ok(services::validate_service_category(s, i.slug()?, i.category()?))
      }),
      // Projects
      self.define("getProjectsPageData", |s, i| Ok(projects::projects_page_data(s, i.locale()))),
      self.define("getProjectsPageSEO", |s, i| Ok(projects::projects_page_seo(s, i.locale()))),
      self.define("getAllProjects", |s, i| Ok(projects::all_projects(s, i.locale()))),
      self.define("getProjectById", |s, i| Ok(projects::project_by_id(s, i.id()?, i.locale()))),
      // Blog
      self.define("getBlogsPageData", |s, i| Ok(blogs::blogs_page_data(s, i.locale()))),
      self.define("getBlogsPageSEO", |s, i| Ok(blogs::blogs_page_seo(s, i.locale()))),
      self.define("getAllBlogs", |s, i| Ok(blogs::all_blogs(s, i.locale()))),
      self.define("getBlogBySlug", |s, i| Ok(blogs::blog_by_slug(s, i.slug()?, i.locale()))),
      self.define("getBlogSEO", |s, i| Ok(blogs::blog_seo(s, i.slug()?, i.locale()))),
      // Contact and consultation
      self.define("getContactUsPageData", |s, i| Ok(contact::contact_data(s, i.locale()))),
      self.define("getContactUsPageSEO", |s, i| Ok(contact::contact_seo(s, i.locale()))),
      self.define("getConsultationPageData", |s, i| Ok(contact::consultation_data(s, i.locale()))),
      self.define("getConsultationPageSEO", |s, i| Ok(contact::consultation_seo(s, i.locale()))),
      // Legal
      self.define("getCookiesPageData", |s, i| Ok(legal::cookies_data(s, i.locale()))),
      self.define("getCookiesPageSEO", |s, i| Ok(legal::cookies_seo(s, i.locale()))),
      self.define("getPrivacyPageData", |s, i| Ok(legal::privacy_data(s, i.locale()))),
      self.define("getPrivacyPageSEO", |s, i| Ok(legal::privacy_seo(s, i.locale()))),
      // Why choose epoxy
      self.define("getWhyChooseEpoxyPageData", |s, i| Ok(why_choose_epoxy::why_choose_epoxy_data(s, i.locale()))),
      self.define("getWhyChooseEpoxyPageSEO", |s, i| Ok(why_choose_epoxy::why_choose_epoxy_seo(s, i.locale()))),
      // Layout
      self.define("getNavigation", |s, i| {
        Ok(match i.path()? {
          Some(path) => navigation_for_path(s, i.locale(), path),
          None => navigation(s, i.locale()),
        })
      }),
      self.define("getStaticTranslations", |s, i| Ok(static_messages(s, i.locale()))),
    ]
  }
}

#[cfg(test)]
mod tests {
  use std::collections::HashMap;

  use serde_json::{Value, json};

  use super::*;

  fn procedures() -> HashMap<String, ProcedureDef> {
    let store = Arc::new(ContentStore::embedded().unwrap());
    ContentApi::new(store).procedures().into_iter().map(|p| (p.name.clone(), p)).collect()
  }

  async fn call(name: &str, input: Value) -> Result<Value, SiteError> {
    let procs = procedures();
    procs.get(name).unwrap().call(input).await
  }

  #[test]
  fn names_are_unique() {
    let store = Arc::new(ContentStore::embedded().unwrap());
    let defs = ContentApi::new(store).procedures();
    assert_eq!(procedures().len(), defs.len());
  }

  #[tokio::test]
  async fn locale_defaults_to_english() {
    let en = call("getAboutPageSEO", json!({"locale": "en"})).await.unwrap();
    assert_eq!(call("getAboutPageSEO", Value::Null).await.unwrap(), en);
    assert_eq!(call("getAboutPageSEO", json!({})).await.unwrap(), en);
    assert_eq!(call("getAboutPageSEO", json!({"locale": "xx"})).await.unwrap(), en);
  }

  #[tokio::test]
  async fn service_detail_hard_miss() {
    let err = call("getServiceDetailData", json!({"slug": "does-not-exist"})).await.unwrap_err();
    assert_eq!(err.code(), "NOT_FOUND");
    assert_eq!(err.status(), 404);
  }

  #[tokio::test]
  async fn service_detail_in_arabic() {
    let data = call("getServiceDetailData", json!({"slug": "residential-flooring", "locale": "ar"})).await.unwrap();
    assert_eq!(data["hero"]["title"], "أرضيات سكنية");
    assert_eq!(data["relatedServices"]["services"][0]["link"], "/services/retail-applications/home-repairs");
  }

  #[tokio::test]
  async fn blog_soft_miss_is_null() {
    let data = call("getBlogBySlug", json!({"slug": "does-not-exist", "locale": "en"})).await.unwrap();
    assert!(data.is_null());
    let seo = call("getBlogSEO", json!({"slug": "does-not-exist"})).await.unwrap();
    assert!(seo.is_null());
  }

  #[tokio::test]
  async fn validates_category() {
    let ok = call("validateServiceCategory", json!({"slug": "residential-flooring", "category": "retail-applications"}));
    assert_eq!(ok.await.unwrap(), json!(true));
    let wrong = call("validateServiceCategory", json!({"slug": "residential-flooring", "category": "wrong-category"}));
    assert_eq!(wrong.await.unwrap(), json!(false));
  }

  #[tokio::test]
  async fn missing_field_is_validation_error() {
    let err = call("getBlogBySlug", json!({"locale": "en"})).await.unwrap_err();
    assert_eq!(err.code(), "VALIDATION_ERROR");
    assert_eq!(err.message(), "missing field `slug`");
  }

  #[tokio::test]
  async fn unknown_input_field_is_rejected() {
    let err = call("getAllServices", json!({"lang": "ar"})).await.unwrap_err();
    assert_eq!(err.status(), 400);
  }

  #[tokio::test]
  async fn navigation_switches_current_path() {
    let nav = call("getNavigation", json!({"locale": "ar", "path": "/ar/projects"})).await.unwrap();
    assert_eq!(nav["alternates"], json!([
      {"locale": "en", "href": "/en/projects"},
      {"locale": "ar", "href": "/ar/projects"},
    ]));

    let err = call("getNavigation", json!({"path": "projects"})).await.unwrap_err();
    assert_eq!(err.code(), "VALIDATION_ERROR");
  }

  #[tokio::test(start_paused = true)]
  async fn latency_delays_response() {
    let store = Arc::new(ContentStore::embedded().unwrap());
    let api = ContentApi::new(store).latency(Duration::from_millis(250));
    let procs = api.procedures();
    let nav = procs.iter().find(|p| p.name == "getNavigation").unwrap();

    let started = tokio::time::Instant::now();
    nav.call(json!({"locale": "ar"})).await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(250));
  }
}
