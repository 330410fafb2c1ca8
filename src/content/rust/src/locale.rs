/* src/content/rust/src/locale.rs */

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ContentError;

/// Closed set of locales the site is published in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
  En,
  Ar,
}

/// Text direction of a locale, emitted as the page `dir` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
  Ltr,
  Rtl,
}

impl Locale {
  pub const ALL: [Locale; 2] = [Locale::En, Locale::Ar];
  pub const DEFAULT: Locale = Locale::En;

  pub fn as_str(self) -> &'static str {
    match self {
      Self::En => "en",
      Self::Ar => "ar",
    }
  }

  pub fn direction(self) -> Direction {
    match self {
      Self::En => Direction::Ltr,
      Self::Ar => Direction::Rtl,
    }
  }

  /// Lenient parse used by the resolver: anything unknown maps to the default.
  pub fn resolve(code: &str) -> Locale {
    code.parse().unwrap_or(Self::DEFAULT)
  }
}

impl fmt::Display for Locale {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale \"{0}\"")]
pub struct UnsupportedLocale(pub String);

impl FromStr for Locale {
  type Err = UnsupportedLocale;

  /// Strict membership: "en-US" and "EN" are not "en".
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "en" => Ok(Self::En),
      "ar" => Ok(Self::Ar),
      other => Err(UnsupportedLocale(other.to_string())),
    }
  }
}

pub fn is_supported(code: &str) -> bool {
  code.parse::<Locale>().is_ok()
}

pub fn default_locale() -> Locale {
  Locale::DEFAULT
}

/// Per-locale bundles of one content record.
///
/// The default-locale bundle is stored outside the map so resolution can never
/// come up empty; deserialization rejects documents without it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "BTreeMap<Locale, T>")]
pub struct Translations<T> {
  default: T,
  others: BTreeMap<Locale, T>,
}

impl<T> Translations<T> {
  pub fn from_map(mut map: BTreeMap<Locale, T>) -> Result<Self, ContentError> {
    let default = map.remove(&Locale::DEFAULT).ok_or(ContentError::MissingDefaultLocale)?;
    Ok(Self { default, others: map })
  }

  /// Bundle for `locale`, or the default-locale bundle when it has none.
  pub fn get(&self, locale: Locale) -> &T {
    if locale == Locale::DEFAULT {
      return &self.default;
    }
    self.others.get(&locale).unwrap_or(&self.default)
  }

  /// Bundle for an arbitrary requested locale string. Never fails.
  pub fn resolve(&self, requested: &str) -> &T {
    match requested.parse::<Locale>() {
      Ok(locale) => self.get(locale),
      Err(_) => &self.default,
    }
  }

  pub fn default_bundle(&self) -> &T {
    &self.default
  }

  pub fn has(&self, locale: Locale) -> bool {
    locale == Locale::DEFAULT || self.others.contains_key(&locale)
  }
}

impl<T> TryFrom<BTreeMap<Locale, T>> for Translations<T> {
  type Error = ContentError;

  fn try_from(map: BTreeMap<Locale, T>) -> Result<Self, Self::Error> {
    Self::from_map(map)
  }
}

/// `bundles[requested] ?? bundles[default]`
pub fn resolve<'a, T>(bundles: &'a Translations<T>, requested: &str) -> &'a T {
  bundles.resolve(requested)
}
