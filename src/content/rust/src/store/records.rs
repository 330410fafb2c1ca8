/* src/content/rust/src/store/records.rs */

//! Authored records and the catalogs they are loaded into.

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::warn;

use crate::errors::ContentError;
use crate::linker::RelatedRef;
use crate::locale::Translations;
use crate::pages::blogs::BlogsPageContent;
use crate::pages::home::HomeContent;
use crate::pages::projects::ProjectsPageContent;
use crate::pages::services::{ServiceContent, ServicesPageContent};
use crate::seo::{PageBundle, SeoData};
use crate::slug::slugify;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HomeSource {
  /// Shared contact address shown in the header and footer.
  pub email: String,
  pub translations: Translations<PageBundle<HomeContent>>,
}

// -- Services --

#[derive(Debug, Clone, PartialEq)]
pub struct Service {
  pub id: String,
  /// Derived from the English hero title.
  pub slug: String,
  pub category: Category,
  pub related: Vec<RelatedRef>,
  pub translations: Translations<PageBundle<ServiceContent>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
  pub labels: Translations<String>,
  /// Derived from the English label, identical across locales.
  pub slug: String,
}

impl Service {
  pub fn title(&self, locale: &str) -> &str {
    &self.translations.resolve(locale).content.hero.title
  }

  pub fn english_title(&self) -> &str {
    &self.translations.default_bundle().content.hero.title
  }

  pub fn image(&self, locale: &str) -> &str {
    &self.translations.resolve(locale).content.hero.image
  }

  /// `/services/{category}/{slug}`, without locale prefix.
  pub fn link(&self) -> String {
    format!("/services/{}/{}", self.category.slug, self.slug)
  }
}

impl Category {
  pub fn label(&self, locale: &str) -> &str {
    self.labels.resolve(locale)
  }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ServiceDoc {
  id: String,
  category: Translations<String>,
  #[serde(default)]
  related: Vec<RelatedRef>,
  translations: Translations<PageBundle<ServiceContent>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ServicesDoc {
  pub(crate) page: Translations<PageBundle<ServicesPageContent>>,
  pub(crate) services: Vec<ServiceDoc>,
}

impl ServiceDoc {
  pub(crate) fn into_service(self) -> Result<Service, ContentError> {
    let english = &self.translations.default_bundle().content.hero.title;
    let slug = slugify(english);
    if slug.is_empty() {
      return Err(ContentError::EmptySlug { family: "service", id: self.id, title: english.clone() });
    }

    let label = self.category.default_bundle();
    let category_slug = slugify(label);
    if category_slug.is_empty() {
      return Err(ContentError::EmptySlug { family: "category", id: self.id, title: label.clone() });
    }

    Ok(Service {
      id: self.id,
      slug,
      category: Category { labels: self.category, slug: category_slug },
      related: self.related,
      translations: self.translations,
    })
  }
}

/// Derives slugs for every service. Duplicate slugs are kept; lookups by slug
/// return the first one.
pub(crate) fn build_services(docs: Vec<ServiceDoc>) -> Result<Vec<Service>, ContentError> {
  let services = docs.into_iter().map(ServiceDoc::into_service).collect::<Result<Vec<_>, _>>()?;
  for (i, service) in services.iter().enumerate() {
    if let Some(first) = services[..i].iter().find(|s| s.slug == service.slug) {
      warn!(slug = %service.slug, first = %first.id, shadowed = %service.id, "duplicate service slug");
    }
  }
  Ok(services)
}

// -- Projects --

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Project {
  pub id: String,
  /// Gallery images, shared across locales; the first is the cover.
  pub images: Vec<String>,
  pub translations: Translations<ProjectText>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectText {
  pub title: String,
  pub description: String,
  pub category: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ProjectsDoc {
  pub(crate) page: Translations<PageBundle<ProjectsPageContent>>,
  pub(crate) projects: Vec<Project>,
}

// -- Blog --

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BlogPost {
  pub slug: String,
  pub image: String,
  pub author: String,
  pub published_at: NaiveDate,
  pub translations: Translations<BlogText>,
  /// Per-locale SEO; untranslated locales fall back to English.
  pub seo: Translations<SeoData>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlogText {
  pub title: String,
  pub excerpt: String,
  pub content: String,
  pub category: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct BlogsDoc {
  pub(crate) page: Translations<PageBundle<BlogsPageContent>>,
  pub(crate) posts: Vec<BlogPost>,
}
