/* src/content/rust/src/pages/about.rs */

use serde::{Deserialize, Serialize};

use super::{content_of, page_of, seo_of};
use crate::seo::{Page, SeoData};
use crate::store::ContentStore;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AboutContent {
  pub hero: AboutHero,
  pub intro: AboutIntro,
  pub vision_mission: VisionMission,
  pub core_values: AboutCoreValues,
  pub expertise: Expertise,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AboutHero {
  pub heading: String,
  pub title: String,
  pub breadcrumbs: Vec<String>,
  pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AboutIntro {
  pub paragraph: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VisionMission {
  pub vision: VisionMissionCard,
  pub mission: VisionMissionCard,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VisionMissionCard {
  /// Icon identifier understood by the presentation layer, e.g. `vision`.
  pub icon: String,
  pub title: String,
  pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AboutCoreValues {
  pub heading: String,
  pub title: String,
  pub values: Vec<Card>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Expertise {
  pub heading: String,
  pub intro: String,
  pub image: String,
  pub cards: Vec<Card>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Card {
  pub id: String,
  pub title: String,
  pub description: String,
}

pub fn about_data(store: &ContentStore, locale: &str) -> AboutContent {
  content_of(store.about(), locale)
}

pub fn about_seo(store: &ContentStore, locale: &str) -> SeoData {
  seo_of(store.about(), locale)
}

pub fn about_page(store: &ContentStore, locale: &str) -> Page<AboutContent> {
  page_of(store.about(), locale)
}
