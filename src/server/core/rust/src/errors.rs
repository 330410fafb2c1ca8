/* src/server/core/rust/src/errors.rs */

use epoxy_content::ContentError;

#[derive(Debug, thiserror::Error)]
#[error("{code}: {message}")]
pub struct SiteError {
  code: String,
  message: String,
  status: u16,
}

fn default_status(code: &str) -> u16 {
  match code {
    "VALIDATION_ERROR" => 400,
    "NOT_FOUND" => 404,
    _ => 500,
  }
}

impl SiteError {
  fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
    let code = code.into();
    let status = default_status(&code);
    Self { code, message: message.into(), status }
  }

  pub fn validation(msg: impl Into<String>) -> Self {
    Self::with_code("VALIDATION_ERROR", msg)
  }

  pub fn not_found(msg: impl Into<String>) -> Self {
    Self::with_code("NOT_FOUND", msg)
  }

  pub fn internal(msg: impl Into<String>) -> Self {
    Self::with_code("INTERNAL_ERROR", msg)
  }

  pub fn code(&self) -> &str {
    &self.code
  }

  pub fn message(&self) -> &str {
    &self.message
  }

  pub fn status(&self) -> u16 {
    self.status
  }

  pub fn is_not_found(&self) -> bool {
    self.status == 404
  }
}

impl From<ContentError> for SiteError {
  fn from(err: ContentError) -> Self {
    if err.is_not_found() { Self::not_found(err.to_string()) } else { Self::internal(err.to_string()) }
  }
}
