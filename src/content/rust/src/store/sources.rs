/* src/content/rust/src/store/sources.rs */

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::errors::ContentError;

pub const HOME: &str = "home.json";
pub const ABOUT: &str = "about.json";
pub const SERVICES: &str = "services.json";
pub const PROJECTS: &str = "projects.json";
pub const BLOGS: &str = "blogs.json";
pub const CONTACT: &str = "contact.json";
pub const CONSULTATION: &str = "consultation.json";
pub const COOKIES: &str = "cookies.json";
pub const PRIVACY: &str = "privacy.json";
pub const WHY_CHOOSE_EPOXY: &str = "why-choose-epoxy.json";
pub const MESSAGES: &str = "messages.json";

const EMBEDDED: [(&str, &str); 11] = [
  (HOME, include_str!("../../content/home.json")),
  (ABOUT, include_str!("../../content/about.json")),
  (SERVICES, include_str!("../../content/services.json")),
  (PROJECTS, include_str!("../../content/projects.json")),
  (BLOGS, include_str!("../../content/blogs.json")),
  (CONTACT, include_str!("../../content/contact.json")),
  (CONSULTATION, include_str!("../../content/consultation.json")),
  (COOKIES, include_str!("../../content/cookies.json")),
  (PRIVACY, include_str!("../../content/privacy.json")),
  (WHY_CHOOSE_EPOXY, include_str!("../../content/why-choose-epoxy.json")),
  (MESSAGES, include_str!("../../content/messages.json")),
];

/// Raw JSON documents, one per content family, keyed by file name.
#[derive(Debug, Clone)]
pub struct ContentSources {
  docs: BTreeMap<&'static str, Cow<'static, str>>,
}

impl ContentSources {
  /// Documents compiled into the binary.
  pub fn embedded() -> Self {
    Self { docs: EMBEDDED.iter().map(|(name, text)| (*name, Cow::Borrowed(*text))).collect() }
  }

  /// Documents read from `dir`; any file absent there keeps its embedded copy.
  pub fn from_dir(dir: &Path) -> Result<Self, ContentError> {
    let mut sources = Self::embedded();
    for name in EMBEDDED.map(|(name, _)| name) {
      let path = dir.join(name);
      if !path.is_file() {
        continue;
      }
      let text = std::fs::read_to_string(&path)
        .map_err(|source| ContentError::Io { path: path.display().to_string(), source })?;
      debug!(file = name, dir = %dir.display(), "content override loaded");
      sources.docs.insert(name, Cow::Owned(text));
    }
    Ok(sources)
  }

  /// Replaces one document.
  pub fn with(mut self, name: &'static str, text: impl Into<String>) -> Self {
    self.docs.insert(name, Cow::Owned(text.into()));
    self
  }

  pub fn get(&self, name: &str) -> Option<&str> {
    self.docs.get(name).map(|text| text.as_ref())
  }

  pub(crate) fn parse<T: DeserializeOwned>(&self, name: &'static str) -> Result<T, ContentError> {
    serde_json::from_str(self.get(name).unwrap_or_default())
      .map_err(|source| ContentError::Parse { file: name, source })
  }
}
