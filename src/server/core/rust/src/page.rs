/* src/server/core/rust/src/page.rs */

use std::collections::HashMap;
use std::sync::Arc;

pub type LoaderInputFn = Arc<dyn Fn(&HashMap<String, String>) -> serde_json::Value + Send + Sync>;

/// How a page treats its loader's result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderRole {
  /// Stored as returned, `null` included.
  Data,
  /// `null` turns the page into a 404.
  Required,
  /// Must return `true`, otherwise the page is a 404. Not stored.
  Guard,
}

pub struct LoaderDef {
  pub data_key: String,
  pub procedure: String,
  pub input_fn: LoaderInputFn,
  pub role: LoaderRole,
}

impl LoaderDef {
  /// Loader whose input maps input fields to route params, e.g.
  /// `[("slug", "service")]`. The route's `locale` param is always forwarded.
  pub fn new(data_key: &str, procedure: &str, fields: &[(&'static str, &'static str)]) -> Self {
    let fields = fields.to_vec();
    Self {
      data_key: data_key.to_string(),
      procedure: procedure.to_string(),
      input_fn: Arc::new(move |params| {
        let mut input = serde_json::Map::new();
        if let Some(locale) = params.get("locale") {
          input.insert("locale".into(), serde_json::Value::String(locale.clone()));
        }
        for (field, param) in &fields {
          if let Some(value) = params.get(*param) {
            input.insert((*field).into(), serde_json::Value::String(value.clone()));
          }
        }
        serde_json::Value::Object(input)
      }),
      role: LoaderRole::Data,
    }
  }

  pub fn required(mut self) -> Self {
    self.role = LoaderRole::Required;
    self
  }

  pub fn guard(mut self) -> Self {
    self.role = LoaderRole::Guard;
    self
  }

  /// Whether `value` lets the page render.
  pub fn accepts(&self, value: &serde_json::Value) -> bool {
    match self.role {
      LoaderRole::Data => true,
      LoaderRole::Required => !value.is_null(),
      LoaderRole::Guard => value.as_bool() == Some(true),
    }
  }
}

pub struct PageDef {
  /// Axum route syntax without the locale segment, e.g. "/blogs/{slug}"
  pub route: String,
  pub loaders: Vec<LoaderDef>,
}

impl PageDef {
  pub fn new(route: &str) -> Self {
    Self { route: route.to_string(), loaders: Vec::new() }
  }

  pub fn loader(mut self, loader: LoaderDef) -> Self {
    self.loaders.push(loader);
    self
  }

  /// Route with the leading `/{locale}` segment, e.g. "/{locale}/blogs/{slug}".
  pub fn localized_route(&self) -> String {
    match self.route.as_str() {
      "/" => "/{locale}".to_string(),
      route => format!("/{{locale}}{route}"),
    }
  }
}
