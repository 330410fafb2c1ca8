/* src/content/rust/src/pages/projects.rs */

use serde::{Deserialize, Serialize};

use super::seo_of;
use crate::seo::{Hero, Page, SeoData};
use crate::store::{ContentStore, Project};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProjectsPageContent {
  pub hero: Hero,
  pub show_more_text: String,
}

/// A project flattened to one locale. `images` is shared across locales and
/// `image` is always its first entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocalizedProject {
  pub id: String,
  pub title: String,
  pub image: String,
  pub description: String,
  pub category: String,
  pub images: Vec<String>,
}

impl Project {
  pub fn localize(&self, locale: &str) -> LocalizedProject {
    let text = self.translations.resolve(locale);
    LocalizedProject {
      id: self.id.clone(),
      title: text.title.clone(),
      image: self.images.first().cloned().unwrap_or_default(),
      description: text.description.clone(),
      category: text.category.clone(),
      images: self.images.clone(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsPageData {
  pub hero: Hero,
  pub projects: Vec<LocalizedProject>,
  pub show_more_text: String,
}

pub fn projects_page_data(store: &ContentStore, locale: &str) -> ProjectsPageData {
  let content = &store.projects_page().resolve(locale).content;
  ProjectsPageData {
    hero: content.hero.clone(),
    projects: all_projects(store, locale),
    show_more_text: content.show_more_text.clone(),
  }
}

pub fn projects_page_seo(store: &ContentStore, locale: &str) -> SeoData {
  seo_of(store.projects_page(), locale)
}

pub fn projects_page(store: &ContentStore, locale: &str) -> Page<ProjectsPageData> {
  Page { data: projects_page_data(store, locale), seo: projects_page_seo(store, locale) }
}

/// Every project in authored order.
pub fn all_projects(store: &ContentStore, locale: &str) -> Vec<LocalizedProject> {
  store.projects().iter().map(|p| p.localize(locale)).collect()
}

pub fn project_by_id(store: &ContentStore, id: &str, locale: &str) -> Option<LocalizedProject> {
  store.project_by_id(id).map(|p| p.localize(locale))
}
