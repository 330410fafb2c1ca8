/* src/content/rust/src/seo.rs */

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SeoData {
  pub title: String,
  pub description: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub keywords: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub og_image: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub og_title: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub og_description: Option<String>,
}

/// SEO record with a `{category}` placeholder, rendered per category page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeoTemplate {
  pub title: String,
  pub description: String,
}

impl SeoTemplate {
  pub fn render(&self, category: &str) -> SeoData {
    SeoData {
      title: self.title.replace("{category}", category),
      description: self.description.replace("{category}", &category.to_lowercase()),
      keywords: None,
      og_image: None,
      og_title: None,
      og_description: None,
    }
  }
}

/// One locale's authored page: display content plus its SEO record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageBundle<C> {
  pub content: C,
  pub seo: SeoData,
}

/// Combined result of a page family: `data` never carries SEO fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
  pub data: T,
  pub seo: SeoData,
}

/// Page header shared by listing and detail pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Hero {
  pub title: String,
  pub breadcrumbs: Vec<String>,
  pub image: String,
}
