/* src/content/rust/src/pages/home.rs */

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::projects::LocalizedProject;
use super::seo_of;
use crate::locale::Locale;
use crate::routing::with_locale;
use crate::seo::{Page, SeoData};
use crate::store::ContentStore;

/// Home page content. Authored with project ids in `featuredProjects`; the
/// assembler swaps them for localized project cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HomeContent<P = String> {
  pub hero: HomeHero,
  pub about: HomeAbout,
  pub core_values: HomeCoreValues,
  pub services: HomeServices,
  pub why_choose_us: WhyChooseUs,
  pub featured_projects: FeaturedProjects<P>,
  pub testimonials: Testimonials,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HomeHero {
  pub headline: String,
  /// Substring of `headline` rendered with the accent color.
  pub highlighted_text: String,
  pub description: String,
  pub cta_text: String,
  pub cta_link: String,
  pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HomeAbout {
  pub heading: String,
  pub title: String,
  pub description1: String,
  pub description2: String,
  pub cta_text: String,
  pub cta_link: String,
  pub image1: String,
  pub image2: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HomeCoreValues {
  pub heading: String,
  pub title: String,
  pub values: Vec<CoreValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoreValue {
  pub id: String,
  pub title: String,
  pub description: String,
  pub image: String,
}

/// Tabbed service teaser. Every tab names a key of `services`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HomeServices {
  pub heading: String,
  pub title: String,
  pub tabs: Vec<String>,
  pub services: BTreeMap<String, Vec<ServiceCard>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceCard {
  pub id: String,
  pub title: String,
  pub description: String,
  pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WhyChooseUs {
  pub heading: String,
  pub title: String,
  pub description: String,
  pub cta_text: String,
  pub cta_link: String,
  pub benefits: Vec<Benefit>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Benefit {
  pub id: String,
  pub icon: String,
  pub title: String,
  pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeaturedProjects<P> {
  pub heading: String,
  pub title: String,
  pub description: String,
  pub projects: Vec<P>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Testimonials {
  pub heading: String,
  pub title: String,
  pub testimonials: Vec<Testimonial>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Testimonial {
  pub id: String,
  pub text: String,
  pub author: String,
  pub author_image: String,
  /// Star rating, 1 through 5.
  pub rating: u8,
}

pub type HomeData = HomeContent<LocalizedProject>;

pub fn home_data(store: &ContentStore, locale: &str) -> HomeData {
  let resolved = Locale::resolve(locale);
  let content = &store.home().translations.get(resolved).content;

  let featured = &content.featured_projects;
  let projects = featured
    .projects
    .iter()
    .filter_map(|id| store.project_by_id(id))
    .map(|project| project.localize(locale))
    .collect();

  HomeContent {
    hero: HomeHero { cta_link: with_locale(resolved, &content.hero.cta_link), ..content.hero.clone() },
    about: HomeAbout { cta_link: with_locale(resolved, &content.about.cta_link), ..content.about.clone() },
    core_values: content.core_values.clone(),
    services: content.services.clone(),
    why_choose_us: WhyChooseUs {
      cta_link: with_locale(resolved, &content.why_choose_us.cta_link),
      ..content.why_choose_us.clone()
    },
    featured_projects: FeaturedProjects {
      heading: featured.heading.clone(),
      title: featured.title.clone(),
      description: featured.description.clone(),
      projects,
    },
    testimonials: content.testimonials.clone(),
  }
}

pub fn home_seo(store: &ContentStore, locale: &str) -> SeoData {
  seo_of(&store.home().translations, locale)
}

pub fn home_page(store: &ContentStore, locale: &str) -> Page<HomeData> {
  Page { data: home_data(store, locale), seo: home_seo(store, locale) }
}
