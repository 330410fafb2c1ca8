/* src/content/rust/src/messages.rs */

//! Static UI strings, split into typed namespaces. A namespace missing from a
//! locale falls back to English as a whole.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::ContentError;
use crate::locale::{Locale, Translations};
use crate::store::ContentStore;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NavMessages {
  pub home: String,
  pub about: String,
  pub services: String,
  pub projects: String,
  pub blogs: String,
  pub why_choose_epoxy: String,
  pub contact: String,
  pub consultation: String,
  /// Label of the language switcher.
  pub language: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FooterMessages {
  pub tagline: String,
  pub company: String,
  pub legal: String,
  pub social: String,
  pub privacy: String,
  pub cookies: String,
  pub copyright: String,
  pub made_with: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactFormMessages {
  pub heading: String,
  pub title: String,
  pub email: String,
  pub contact: String,
  pub address: String,
  pub name: String,
  pub message: String,
  pub submit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConsultationFormMessages {
  pub heading: String,
  pub title: String,
  pub email: String,
  pub contact: String,
  pub address: String,
  pub name: String,
  pub project_type: String,
  pub message: String,
  pub submit: String,
}

/// One locale's entry in `messages.json`. Every namespace is optional.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct MessageCatalog {
  nav: Option<NavMessages>,
  footer: Option<FooterMessages>,
  contact: Option<ContactFormMessages>,
  consultation: Option<ConsultationFormMessages>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StaticMessages {
  pub nav: Translations<NavMessages>,
  pub footer: Translations<FooterMessages>,
  pub contact: Translations<ContactFormMessages>,
  pub consultation: Translations<ConsultationFormMessages>,
}

fn namespace<T>(
  catalogs: &mut BTreeMap<Locale, MessageCatalog>,
  name: &'static str,
  take: impl Fn(&mut MessageCatalog) -> Option<T>,
) -> Result<Translations<T>, ContentError> {
  let map = catalogs.iter_mut().filter_map(|(locale, catalog)| take(catalog).map(|ns| (*locale, ns))).collect();
  Translations::from_map(map).map_err(|_| ContentError::MissingNamespace(name))
}

impl StaticMessages {
  pub(crate) fn from_catalogs(mut catalogs: BTreeMap<Locale, MessageCatalog>) -> Result<Self, ContentError> {
    Ok(Self {
      nav: namespace(&mut catalogs, "nav", |c| c.nav.take())?,
      footer: namespace(&mut catalogs, "footer", |c| c.footer.take())?,
      contact: namespace(&mut catalogs, "contact", |c| c.contact.take())?,
      consultation: namespace(&mut catalogs, "consultation", |c| c.consultation.take())?,
    })
  }
}

/// Every namespace for one locale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocalizedMessages {
  pub nav: NavMessages,
  pub footer: FooterMessages,
  pub contact: ContactFormMessages,
  pub consultation: ConsultationFormMessages,
}

pub fn static_messages(store: &ContentStore, locale: &str) -> LocalizedMessages {
  let messages = store.messages();
  LocalizedMessages {
    nav: messages.nav.resolve(locale).clone(),
    footer: messages.footer.resolve(locale).clone(),
    contact: messages.contact.resolve(locale).clone(),
    consultation: messages.consultation.resolve(locale).clone(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::store::{ContentSources, MESSAGES};

  #[test]
  fn arabic_namespaces_resolve() {
    let store = ContentStore::embedded().unwrap();
    let ar = static_messages(&store, "ar");
    let en = static_messages(&store, "en");
    assert_ne!(ar.nav.home, en.nav.home);
    assert_ne!(ar.footer.tagline, en.footer.tagline);
  }

  #[test]
  fn missing_namespace_falls_back_to_english() {
    let store = ContentStore::embedded().unwrap();
    assert!(!store.messages().consultation.has(Locale::Ar));
    assert_eq!(static_messages(&store, "ar").consultation, static_messages(&store, "en").consultation);
  }

  #[test]
  fn english_namespace_is_required() {
    let en_without_footer = r#"{
      "en": {
        "nav": {"home": "Home", "about": "About", "services": "Services", "projects": "Projects",
                "blogs": "Blog", "whyChooseEpoxy": "Why Epoxy", "contact": "Contact",
                "consultation": "Consultation", "language": "Language"}
      }
    }"#;
    let err = ContentStore::load(&ContentSources::embedded().with(MESSAGES, en_without_footer)).unwrap_err();
    assert!(matches!(err, ContentError::MissingNamespace("footer")));
  }

  #[test]
  fn unknown_keys_are_rejected() {
    let typo = r#"{"en": {"navigation": {}}}"#;
    let err = ContentStore::load(&ContentSources::embedded().with(MESSAGES, typo)).unwrap_err();
    assert!(matches!(err, ContentError::Parse { file: "messages.json", .. }));
  }
}
