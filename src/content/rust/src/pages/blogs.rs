/* src/content/rust/src/pages/blogs.rs */

use std::cmp::Reverse;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::seo_of;
use crate::seo::{Hero, Page, SeoData};
use crate::store::{BlogPost, ContentStore};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlogsPageContent {
  pub hero: Hero,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedBlogPost {
  pub slug: String,
  pub title: String,
  pub excerpt: String,
  /// Trusted HTML body.
  pub content: String,
  pub image: String,
  pub author: String,
  pub published_at: NaiveDate,
  pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlogsPageData {
  pub hero: Hero,
  pub blogs: Vec<LocalizedBlogPost>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogDetailData {
  pub hero: Hero,
  pub content: String,
  pub author: String,
  pub published_at: NaiveDate,
  pub category: String,
}

impl BlogPost {
  pub fn localize(&self, locale: &str) -> LocalizedBlogPost {
    let text = self.translations.resolve(locale);
    LocalizedBlogPost {
      slug: self.slug.clone(),
      title: text.title.clone(),
      excerpt: text.excerpt.clone(),
      content: text.content.clone(),
      image: self.image.clone(),
      author: self.author.clone(),
      published_at: self.published_at,
      category: text.category.clone(),
    }
  }
}

/// Listing page; posts newest first, ties keep authored order.
pub fn blogs_page_data(store: &ContentStore, locale: &str) -> BlogsPageData {
  let mut blogs = all_blogs(store, locale);
  blogs.sort_by_key(|post| Reverse(post.published_at));
  BlogsPageData { hero: store.blogs_page().resolve(locale).content.hero.clone(), blogs }
}

pub fn blogs_page_seo(store: &ContentStore, locale: &str) -> SeoData {
  seo_of(store.blogs_page(), locale)
}

pub fn blogs_page(store: &ContentStore, locale: &str) -> Page<BlogsPageData> {
  Page { data: blogs_page_data(store, locale), seo: blogs_page_seo(store, locale) }
}

/// Every post in authored order.
pub fn all_blogs(store: &ContentStore, locale: &str) -> Vec<LocalizedBlogPost> {
  store.blogs().iter().map(|post| post.localize(locale)).collect()
}

/// Detail page data, `None` for an unknown slug.
pub fn blog_by_slug(store: &ContentStore, slug: &str, locale: &str) -> Option<BlogDetailData> {
  let post = store.blog_by_slug(slug)?;
  let text = post.translations.resolve(locale);

  // Listing breadcrumbs ("Home", "Blog") extended with the post title.
  let chrome = &store.blogs_page().resolve(locale).content.hero;
  let mut breadcrumbs = chrome.breadcrumbs.clone();
  breadcrumbs.push(text.title.clone());

  Some(BlogDetailData {
    hero: Hero { title: text.title.clone(), breadcrumbs, image: post.image.clone() },
    content: text.content.clone(),
    author: post.author.clone(),
    published_at: post.published_at,
    category: text.category.clone(),
  })
}

pub fn blog_seo(store: &ContentStore, slug: &str, locale: &str) -> Option<SeoData> {
  store.blog_by_slug(slug).map(|post| post.seo.resolve(locale).clone())
}
