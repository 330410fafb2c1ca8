/* src/content/rust/src/errors.rs */

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
  #[error("bundle for the default locale (en) is missing")]
  MissingDefaultLocale,

  #[error("failed to read {path}: {source}")]
  Io {
    path: String,
    #[source]
    source: std::io::Error,
  },

  #[error("failed to parse {file}: {source}")]
  Parse {
    file: &'static str,
    #[source]
    source: serde_json::Error,
  },

  #[error("{family} \"{id}\": English title \"{title}\" does not produce a slug")]
  EmptySlug { family: &'static str, id: String, title: String },

  #[error("blog post slug \"{0}\" is not URL-safe")]
  InvalidSlug(String),

  #[error("service \"{from}\" lists unknown related service \"{target}\"")]
  UnknownRelatedService { from: String, target: String },

  #[error("home page features unknown project \"{0}\"")]
  UnknownFeaturedProject(String),

  #[error("home page tab \"{tab}\" ({locale}) has no service list")]
  MissingServiceTab { tab: String, locale: &'static str },

  #[error("message namespace \"{0}\" has no English bundle")]
  MissingNamespace(&'static str),

  #[error("service with slug \"{0}\" not found")]
  ServiceNotFound(String),
}

impl ContentError {
  /// Hard misses a request can trigger, as opposed to content load failures.
  pub fn is_not_found(&self) -> bool {
    matches!(self, Self::ServiceNotFound(_))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn display_messages() {
    assert_eq!(
      ContentError::ServiceNotFound("nope".into()).to_string(),
      "service with slug \"nope\" not found"
    );
    assert_eq!(
      ContentError::UnknownRelatedService { from: "a".into(), target: "b".into() }.to_string(),
      "service \"a\" lists unknown related service \"b\""
    );
  }

  #[test]
  fn only_service_miss_is_not_found() {
    assert!(ContentError::ServiceNotFound("x".into()).is_not_found());
    assert!(!ContentError::MissingDefaultLocale.is_not_found());
    assert!(!ContentError::InvalidSlug("X".into()).is_not_found());
  }
}
