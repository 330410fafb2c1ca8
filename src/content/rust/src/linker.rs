/* src/content/rust/src/linker.rs */

//! Expands a service's related references into links for one locale.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::locale::Translations;
use crate::slug::slugify;
use crate::store::Service;

/// Authored pointer from one service to another.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RelatedRef {
  ById(ServiceRef),
  ByTitle(TitleRef),
}

/// Stable service id, checked when the store loads.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceRef {
  pub service: String,
}

/// Legacy form: display titles per locale, matched on the English title.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TitleRef {
  pub titles: Translations<RelatedTitle>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RelatedTitle {
  pub title: String,
  pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedServiceLink {
  pub id: String,
  pub title: String,
  pub image: String,
  pub link: String,
}

/// Lower-cased English title to service. Later services win on collision.
pub struct TitleIndex<'a> {
  by_title: HashMap<String, &'a Service>,
}

impl<'a> TitleIndex<'a> {
  pub fn build(services: &'a [Service]) -> Self {
    let by_title = services.iter().map(|s| (s.english_title().to_lowercase(), s)).collect();
    Self { by_title }
  }

  pub fn lookup(&self, title: &str) -> Option<&'a Service> {
    self.by_title.get(&title.to_lowercase()).copied()
  }
}

/// Links for every related reference of `service`, in authored order.
pub fn link_related(service: &Service, services: &[Service], locale: &str) -> Vec<RelatedServiceLink> {
  let index = TitleIndex::build(services);
  service
    .related
    .iter()
    .filter_map(|related| match related {
      RelatedRef::ById(ServiceRef { service: id }) => {
        services.iter().find(|s| &s.id == id).map(|target| RelatedServiceLink {
          id: target.slug.clone(),
          title: target.title(locale).to_string(),
          image: target.image(locale).to_string(),
          link: target.link(),
        })
      }
      RelatedRef::ByTitle(TitleRef { titles }) => Some(link_by_title(&index, titles, locale)),
    })
    .collect()
}

fn link_by_title(index: &TitleIndex<'_>, titles: &Translations<RelatedTitle>, locale: &str) -> RelatedServiceLink {
  let display = titles.resolve(locale);
  let english = &titles.default_bundle().title;
  match index.lookup(english) {
    Some(target) => RelatedServiceLink {
      id: target.slug.clone(),
      title: display.title.clone(),
      image: display.image.clone(),
      link: target.link(),
    },
    None => {
      // Unmatched titles keep the historical category-less link, slugged
      // from the English title so every locale points at the same path.
      let fallback = slugify(english);
      RelatedServiceLink {
        link: format!("/services/{fallback}"),
        id: fallback,
        title: display.title.clone(),
        image: display.image.clone(),
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::store::{ContentSources, ContentStore, SERVICES};

  const FIXTURE: &str = include_str!("../tests/fixtures/three-services.json");

  fn store() -> ContentStore {
    ContentStore::load(&ContentSources::embedded().with(SERVICES, FIXTURE)).unwrap()
  }

  fn links(store: &ContentStore, slug: &str, locale: &str) -> Vec<RelatedServiceLink> {
    let service = store.service_by_slug(slug).unwrap();
    link_related(service, store.services(), locale)
  }

  #[test]
  fn id_reference_links_to_target() {
    let store = store();
    let related = links(&store, "garage-floors", "en");
    assert_eq!(
      related[0],
      RelatedServiceLink {
        id: "kitchen-floors".into(),
        title: "Kitchen Floors".into(),
        image: "/images/kitchen.jpg".into(),
        link: "/services/retail-applications/kitchen-floors".into(),
      }
    );
  }

  #[test]
  fn id_reference_uses_localized_title() {
    let store = store();
    let related = links(&store, "garage-floors", "ar");
    assert_eq!(related[0].title, "أرضيات المطابخ");
    assert_eq!(related[0].link, "/services/retail-applications/kitchen-floors");
  }

  #[test]
  fn title_reference_matches_english_title() {
    let store = store();
    let related = links(&store, "kitchen-floors", "ar");
    let warehouse = &related[0];
    assert_eq!(warehouse.id, "warehouse-floors");
    assert_eq!(warehouse.title, "أرضيات المستودعات");
    assert_eq!(warehouse.link, "/services/corporate-applications/warehouse-floors");
  }

  #[test]
  fn unmatched_title_degrades_to_bare_link() {
    let store = store();
    let related = links(&store, "kitchen-floors", "en");
    let missing = &related[1];
    assert_eq!(missing.id, "pool-decks");
    assert_eq!(missing.title, "Pool Decks!");
    assert_eq!(missing.link, "/services/pool-decks");
  }

  #[test]
  fn unmatched_title_link_is_stable_across_locales() {
    let store = store();
    let related = links(&store, "kitchen-floors", "ar");
    let missing = &related[1];
    assert_eq!(missing.title, "أسطح المسابح");
    assert_eq!(missing.id, "pool-decks");
    assert_eq!(missing.link, "/services/pool-decks");
  }

  #[test]
  fn references_reject_unknown_fields() {
    let by_id: RelatedRef = serde_json::from_str(r#"{"service": "svc-x"}"#).unwrap();
    assert_eq!(by_id, RelatedRef::ById(ServiceRef { service: "svc-x".into() }));
    assert!(serde_json::from_str::<RelatedRef>(r#"{"service": "svc-x", "titels": 1}"#).is_err());
    assert!(serde_json::from_str::<RelatedRef>(r#"{"titles": {"en": {"title": "A", "image": "/a.jpg"}}, "extra": true}"#).is_err());
  }

  #[test]
  fn title_lookup_is_case_insensitive() {
    let store = store();
    let index = TitleIndex::build(store.services());
    assert_eq!(index.lookup("GARAGE floors").map(|s| s.id.as_str()), Some("svc-garage"));
    assert!(index.lookup("Pool Decks").is_none());
  }

  #[test]
  fn garbage_locale_renders_english() {
    let store = store();
    assert_eq!(links(&store, "garage-floors", "xx"), links(&store, "garage-floors", "en"));
  }
}
