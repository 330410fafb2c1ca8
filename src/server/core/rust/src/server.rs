/* src/server/core/rust/src/server.rs */

use crate::page::{LoaderDef, PageDef};
use crate::procedure::ProcedureDef;
use crate::resolve::DEFAULT_LOCALE_COOKIE;

/// Framework-agnostic parts extracted from `SiteServer`.
/// Adapter crates consume this to build framework-specific routers.
pub struct SiteParts {
  pub procedures: Vec<ProcedureDef>,
  pub pages: Vec<PageDef>,
  /// Loaders run for every page, stored under `layout` in the payload.
  pub layout: Vec<LoaderDef>,
  pub locale_cookie: String,
}

pub struct SiteServer {
  procedures: Vec<ProcedureDef>,
  pages: Vec<PageDef>,
  layout: Vec<LoaderDef>,
  locale_cookie: String,
}

impl SiteServer {
  pub fn new() -> Self {
    Self {
      procedures: Vec::new(),
      pages: Vec::new(),
      layout: Vec::new(),
      locale_cookie: DEFAULT_LOCALE_COOKIE.to_string(),
    }
  }

  pub fn procedures(mut self, procs: impl IntoIterator<Item = ProcedureDef>) -> Self {
    self.procedures.extend(procs);
    self
  }

  pub fn page(mut self, page: PageDef) -> Self {
    self.pages.push(page);
    self
  }

  pub fn layout(mut self, loader: LoaderDef) -> Self {
    self.layout.push(loader);
    self
  }

  pub fn locale_cookie(mut self, name: impl Into<String>) -> Self {
    self.locale_cookie = name.into();
    self
  }

  /// Consume the builder, returning framework-agnostic parts for an adapter.
  pub fn into_parts(self) -> SiteParts {
    SiteParts {
      procedures: self.procedures,
      pages: self.pages,
      layout: self.layout,
      locale_cookie: self.locale_cookie,
    }
  }
}

impl Default for SiteServer {
  fn default() -> Self {
    Self::new()
  }
}
