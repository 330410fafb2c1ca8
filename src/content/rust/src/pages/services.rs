/* src/content/rust/src/pages/services.rs */

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::seo_of;
use crate::errors::ContentError;
use crate::linker::{RelatedServiceLink, link_related};
use crate::seo::{Hero, Page, SeoData, SeoTemplate};
use crate::store::{ContentStore, Service};

// -- Authored shapes --

/// Chrome of the services listing and category pages.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ServicesPageContent {
  pub hero: Hero,
  pub intro: String,
  pub category_seo: SeoTemplate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ServiceContent {
  pub hero: Hero,
  pub intro: ServiceIntro,
  pub applications: Applications,
  pub benefits: Benefits,
  pub related_services: RelatedServicesHeading,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceIntro {
  pub paragraph1: String,
  pub paragraph2: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Applications {
  pub heading: String,
  pub items: Vec<Application>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Application {
  pub title: String,
  pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Benefits {
  pub heading: String,
  pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RelatedServicesHeading {
  pub heading: String,
}

// -- Display shapes --

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRef {
  pub title: String,
  pub slug: String,
}

/// Navigation entry for one service. `link` carries no locale prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceListItem {
  pub slug: String,
  pub title: String,
  pub link: String,
  pub category: CategoryRef,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryGroup {
  pub category: CategoryRef,
  pub services: Vec<ServiceListItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServicesPageData {
  pub hero: Hero,
  pub intro: String,
  pub categories: Vec<CategoryGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryPageData {
  pub hero: Hero,
  pub category: CategoryRef,
  pub services: Vec<ServiceListItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDetailData {
  pub hero: Hero,
  pub intro: ServiceIntro,
  pub applications: Applications,
  pub benefits: Benefits,
  pub related_services: RelatedServices,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelatedServices {
  pub heading: String,
  pub services: Vec<RelatedServiceLink>,
}

impl Service {
  pub fn list_item(&self, locale: &str) -> ServiceListItem {
    ServiceListItem {
      slug: self.slug.clone(),
      title: self.title(locale).to_string(),
      link: self.link(),
      category: CategoryRef { title: self.category.label(locale).to_string(), slug: self.category.slug.clone() },
    }
  }
}

// -- Listing --

/// Listing page; services grouped by category, groups ordered by category slug.
pub fn services_page_data(store: &ContentStore, locale: &str) -> ServicesPageData {
  let mut groups: BTreeMap<String, CategoryGroup> = BTreeMap::new();
  for item in all_services(store, locale) {
    groups
      .entry(item.category.slug.clone())
      .or_insert_with(|| CategoryGroup { category: item.category.clone(), services: Vec::new() })
      .services
      .push(item);
  }

  let content = &store.services_page().resolve(locale).content;
  ServicesPageData {
    hero: content.hero.clone(),
    intro: content.intro.clone(),
    categories: groups.into_values().collect(),
  }
}

pub fn services_page_seo(store: &ContentStore, locale: &str) -> SeoData {
  seo_of(store.services_page(), locale)
}

pub fn services_page(store: &ContentStore, locale: &str) -> Page<ServicesPageData> {
  Page { data: services_page_data(store, locale), seo: services_page_seo(store, locale) }
}

/// Every service in authored order, for menus and footers.
pub fn all_services(store: &ContentStore, locale: &str) -> Vec<ServiceListItem> {
  store.services().iter().map(|s| s.list_item(locale)).collect()
}

// -- Category --

pub fn services_by_category(store: &ContentStore, category_slug: &str, locale: &str) -> Vec<ServiceListItem> {
  store
    .services()
    .iter()
    .filter(|s| s.category.slug == category_slug)
    .map(|s| s.list_item(locale))
    .collect()
}

pub fn category_by_slug(store: &ContentStore, category_slug: &str, locale: &str) -> Option<CategoryRef> {
  store.services().iter().find(|s| s.category.slug == category_slug).map(|s| CategoryRef {
    title: s.category.label(locale).to_string(),
    slug: s.category.slug.clone(),
  })
}

/// Category page data, `None` when no service carries `category_slug`.
pub fn category_page_data(store: &ContentStore, category_slug: &str, locale: &str) -> Option<CategoryPageData> {
  let category = category_by_slug(store, category_slug, locale)?;
  let chrome = &store.services_page().resolve(locale).content.hero;
  let mut breadcrumbs = chrome.breadcrumbs.clone();
  breadcrumbs.push(category.title.clone());

  Some(CategoryPageData {
    hero: Hero { title: category.title.clone(), breadcrumbs, image: chrome.image.clone() },
    services: services_by_category(store, category_slug, locale),
    category,
  })
}

pub fn category_page_seo(store: &ContentStore, category_slug: &str, locale: &str) -> Option<SeoData> {
  let category = category_by_slug(store, category_slug, locale)?;
  let template = &store.services_page().resolve(locale).content.category_seo;
  Some(template.render(&category.title))
}

// -- Detail --

fn find_service<'a>(store: &'a ContentStore, slug: &str) -> Result<&'a Service, ContentError> {
  store.service_by_slug(slug).ok_or_else(|| ContentError::ServiceNotFound(slug.to_string()))
}

/// Detail page data. An unknown slug is an error, not an empty value.
pub fn service_detail_data(store: &ContentStore, slug: &str, locale: &str) -> Result<ServiceDetailData, ContentError> {
  let service = find_service(store, slug)?;
  let content = &service.translations.resolve(locale).content;

  Ok(ServiceDetailData {
    hero: content.hero.clone(),
    intro: content.intro.clone(),
    applications: content.applications.clone(),
    benefits: content.benefits.clone(),
    related_services: RelatedServices {
      heading: content.related_services.heading.clone(),
      services: link_related(service, store.services(), locale),
    },
  })
}

pub fn service_detail_seo(store: &ContentStore, slug: &str, locale: &str) -> Result<SeoData, ContentError> {
  let service = find_service(store, slug)?;
  Ok(service.translations.resolve(locale).seo.clone())
}

pub fn service_detail_page(
  store: &ContentStore,
  slug: &str,
  locale: &str,
) -> Result<Page<ServiceDetailData>, ContentError> {
  Ok(Page { data: service_detail_data(store, slug, locale)?, seo: service_detail_seo(store, slug, locale)? })
}

/// True iff `service_slug` exists and belongs to `category_slug`.
pub fn validate_service_category(store: &ContentStore, service_slug: &str, category_slug: &str) -> bool {
  store.service_by_slug(service_slug).is_some_and(|s| s.category.slug == category_slug)
}
