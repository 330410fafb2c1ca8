/* src/content/rust/src/routing.rs */

//! Locale-prefixed URL helpers. Paths are always absolute (`/en/about`).

use serde::Serialize;

use crate::locale::Locale;
use crate::store::ContentStore;

/// Locale-independent page paths, home first.
pub const STATIC_PAGES: [&str; 10] = [
  "/",
  "/about",
  "/services",
  "/projects",
  "/blogs",
  "/contact",
  "/consultation",
  "/cookies",
  "/privacy",
  "/why-choose-epoxy",
];

fn first_segment(path: &str) -> &str {
  path.trim_start_matches('/').split('/').next().unwrap_or("")
}

/// Locale named by the first path segment, if it is a supported one.
pub fn locale_from_path(path: &str) -> Option<Locale> {
  first_segment(path).parse().ok()
}

/// Path with a leading locale segment removed; `/en` becomes `/`.
pub fn strip_locale(path: &str) -> &str {
  if locale_from_path(path).is_none() {
    return path;
  }
  let trimmed = path.trim_start_matches('/');
  match trimmed.find('/') {
    Some(i) => &trimmed[i..],
    None => "/",
  }
}

/// Prefixes `path` with `locale`. External and anchor links pass through.
pub fn with_locale(locale: Locale, path: &str) -> String {
  if !path.starts_with('/') {
    return path.to_string();
  }
  match path {
    "/" => format!("/{locale}"),
    _ => format!("/{locale}{path}"),
  }
}

/// Same page in another locale.
pub fn localized_path(path: &str, locale: Locale) -> String {
  with_locale(locale, strip_locale(path))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleAlternate {
  pub locale: Locale,
  pub href: String,
}

/// One entry per supported locale for the language switcher.
pub fn alternates(path: &str) -> Vec<LocaleAlternate> {
  Locale::ALL.iter().map(|&locale| LocaleAlternate { locale, href: localized_path(path, locale) }).collect()
}

/// Every prerenderable page path: static pages, categories, services and
/// posts, for each locale.
pub fn static_paths(store: &ContentStore) -> Vec<String> {
  let mut unlocalized: Vec<String> = STATIC_PAGES.iter().map(|p| (*p).to_string()).collect();

  let mut categories: Vec<&str> = store.services().iter().map(|s| s.category.slug.as_str()).collect();
  categories.sort_unstable();
  categories.dedup();
  unlocalized.extend(categories.iter().map(|c| format!("/services/{c}")));
  unlocalized.extend(store.services().iter().map(|s| s.link()));
  unlocalized.extend(store.blogs().iter().map(|p| format!("/blogs/{}", p.slug)));

  Locale::ALL.iter().flat_map(|&locale| unlocalized.iter().map(move |p| with_locale(locale, p))).collect()
}
