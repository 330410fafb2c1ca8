/* src/content/rust/src/pages/legal.rs */

use serde::{Deserialize, Serialize};

use super::{content_of, page_of, seo_of};
use crate::seo::{Page, SeoData};
use crate::store::ContentStore;

// -- Cookies --

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CookiesContent {
  pub title: String,
  pub heading: String,
  pub description: String,
  pub consent_text: String,
  pub last_updated: String,
  pub buttons: ConsentButtons,
  pub categories: Vec<CookieCategory>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConsentButtons {
  pub necessary_only: String,
  pub allow_selection: String,
  pub accept_all: String,
  pub decline: String,
  pub manage_cookies: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CookieCategory {
  pub name: String,
  pub description: String,
  /// Required categories cannot be declined in the consent banner.
  pub required: bool,
  pub cookies: Vec<CookieEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CookieEntry {
  pub name: String,
  pub purpose: String,
  pub duration: String,
}

pub fn cookies_data(store: &ContentStore, locale: &str) -> CookiesContent {
  content_of(store.cookies(), locale)
}

pub fn cookies_seo(store: &ContentStore, locale: &str) -> SeoData {
  seo_of(store.cookies(), locale)
}

pub fn cookies_page(store: &ContentStore, locale: &str) -> Page<CookiesContent> {
  page_of(store.cookies(), locale)
}

// -- Privacy --

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PrivacyContent {
  pub title: String,
  pub last_updated: String,
  pub sections: Vec<PrivacySection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrivacySection {
  pub title: String,
  pub content: String,
}

pub fn privacy_data(store: &ContentStore, locale: &str) -> PrivacyContent {
  content_of(store.privacy(), locale)
}

pub fn privacy_seo(store: &ContentStore, locale: &str) -> SeoData {
  seo_of(store.privacy(), locale)
}

pub fn privacy_page(store: &ContentStore, locale: &str) -> Page<PrivacyContent> {
  page_of(store.privacy(), locale)
}
