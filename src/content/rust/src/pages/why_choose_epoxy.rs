/* src/content/rust/src/pages/why_choose_epoxy.rs */

use serde::{Deserialize, Serialize};

use super::{content_of, page_of, seo_of};
use crate::seo::{Page, SeoData};
use crate::store::ContentStore;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WhyChooseEpoxyContent {
  pub hero: WhyHero,
  pub intro: WhyIntro,
  pub features: Vec<FeatureSection>,
  /// Chemical and heat resistance, cost-effectiveness.
  pub additional_features: Vec<FeatureSection>,
  pub epoxy_types: EpoxyTypes,
  pub application_techniques: ApplicationTechniques,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WhyHero {
  pub heading: String,
  pub title: String,
  pub breadcrumbs: Vec<String>,
  pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WhyIntro {
  pub paragraph1: String,
  pub paragraph2: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FeatureSection {
  pub title: String,
  pub description: String,
  pub items: Vec<String>,
  pub image: String,
  pub image_position: ImagePosition,
  pub bg_color: SectionBackground,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImagePosition {
  Left,
  Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionBackground {
  Blue,
  White,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EpoxyTypes {
  pub heading: String,
  pub types: Vec<EpoxyType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EpoxyType {
  pub id: String,
  pub title: String,
  pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApplicationTechniques {
  pub heading: String,
  pub description: String,
  pub items: Vec<String>,
  pub image: String,
}

pub fn why_choose_epoxy_data(store: &ContentStore, locale: &str) -> WhyChooseEpoxyContent {
  content_of(store.why_choose_epoxy(), locale)
}

pub fn why_choose_epoxy_seo(store: &ContentStore, locale: &str) -> SeoData {
  seo_of(store.why_choose_epoxy(), locale)
}

pub fn why_choose_epoxy_page(store: &ContentStore, locale: &str) -> Page<WhyChooseEpoxyContent> {
  page_of(store.why_choose_epoxy(), locale)
}
