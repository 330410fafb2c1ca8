/* src/content/rust/src/navigation.rs */

use serde::Serialize;

use crate::locale::Locale;
use crate::pages::services::{ServiceListItem, all_services};
use crate::routing::{LocaleAlternate, alternates, with_locale};
use crate::store::ContentStore;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
  /// Key of the label in the `nav` message namespace.
  pub key: &'static str,
  pub label: String,
  pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Navigation {
  pub links: Vec<NavLink>,
  pub services: Vec<ServiceListItem>,
  pub email: String,
  /// Language switcher targets for the current page.
  pub alternates: Vec<LocaleAlternate>,
}

/// Navigation for the home page.
pub fn navigation(store: &ContentStore, locale: &str) -> Navigation {
  navigation_for_path(store, locale, "/")
}

/// Navigation whose language switcher points at `path`, with or without a
/// locale prefix.
pub fn navigation_for_path(store: &ContentStore, locale: &str, path: &str) -> Navigation {
  let resolved = Locale::resolve(locale);
  let nav = store.messages().nav.get(resolved);

  let entries = [
    ("home", &nav.home, "/"),
    ("about", &nav.about, "/about"),
    ("services", &nav.services, "/services"),
    ("projects", &nav.projects, "/projects"),
    ("blogs", &nav.blogs, "/blogs"),
    ("whyChooseEpoxy", &nav.why_choose_epoxy, "/why-choose-epoxy"),
    ("contact", &nav.contact, "/contact"),
    ("consultation", &nav.consultation, "/consultation"),
  ];
  let links = entries
    .into_iter()
    .map(|(key, label, path)| NavLink { key, label: label.clone(), href: with_locale(resolved, path) })
    .collect();

  Navigation {
    links,
    services: all_services(store, locale),
    email: store.home().email.clone(),
    alternates: alternates(path),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn links_carry_resolved_locale() {
    let store = ContentStore::embedded().unwrap();
    let nav = navigation(&store, "ar");
    assert_eq!(nav.links[0].href, "/ar");
    assert_eq!(nav.links[1].href, "/ar/about");
    assert_eq!(nav.links.len(), 8);

    let fallback = navigation(&store, "zz");
    assert_eq!(fallback.links[0].href, "/en");
    assert_eq!(fallback.links[0].label, "Home");
    assert_eq!(fallback.email, "info@epoxymaestro.com");
  }

  #[test]
  fn switcher_targets_current_page() {
    let store = ContentStore::embedded().unwrap();
    let home: Vec<String> = navigation(&store, "ar").alternates.into_iter().map(|a| a.href).collect();
    assert_eq!(home, ["/en", "/ar"]);

    let blog = navigation_for_path(&store, "ar", "/ar/blogs/maintaining-epoxy-floors");
    assert_eq!(blog.alternates[0].locale, Locale::En);
    assert_eq!(blog.alternates[0].href, "/en/blogs/maintaining-epoxy-floors");
    assert_eq!(blog.alternates[1].href, "/ar/blogs/maintaining-epoxy-floors");
  }

  #[test]
  fn services_menu_lists_every_service() {
    let store = ContentStore::embedded().unwrap();
    let nav = navigation(&store, "en");
    assert_eq!(nav.services.len(), store.services().len());
    assert!(nav.services.iter().all(|s| s.link.starts_with("/services/")));
  }
}
