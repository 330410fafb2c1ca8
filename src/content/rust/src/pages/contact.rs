/* src/content/rust/src/pages/contact.rs */

//! Contact and consultation pages. Both carry the same shape; the form labels
//! live in the static message namespaces.

use serde::{Deserialize, Serialize};

use super::{content_of, page_of, seo_of};
use crate::seo::{Page, SeoData};
use crate::store::ContentStore;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContactContent {
  pub hero: ContactHero,
  pub contact_info: Vec<ContactInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactHero {
  pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactInfo {
  /// Matches a label key in the contact message namespace.
  #[serde(rename = "type")]
  pub kind: ContactKind,
  pub value: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub link: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
  Email,
  Contact,
  Address,
}

pub fn contact_data(store: &ContentStore, locale: &str) -> ContactContent {
  content_of(store.contact(), locale)
}

pub fn contact_seo(store: &ContentStore, locale: &str) -> SeoData {
  seo_of(store.contact(), locale)
}

pub fn contact_page(store: &ContentStore, locale: &str) -> Page<ContactContent> {
  page_of(store.contact(), locale)
}

pub fn consultation_data(store: &ContentStore, locale: &str) -> ContactContent {
  content_of(store.consultation(), locale)
}

pub fn consultation_seo(store: &ContentStore, locale: &str) -> SeoData {
  seo_of(store.consultation(), locale)
}

pub fn consultation_page(store: &ContentStore, locale: &str) -> Page<ContactContent> {
  page_of(store.consultation(), locale)
}
