/* src/content/rust/src/pages/mod.rs */

//! Page data assemblers, one module per page family.
//!
//! Every family exposes `*_data` (display content, no SEO) and `*_seo` (SEO
//! only). The two never depend on each other, so a caller that only renders
//! `<head>` metadata does not pay for the display transform.

pub mod about;
pub mod blogs;
pub mod contact;
pub mod home;
pub mod legal;
pub mod projects;
pub mod services;
pub mod why_choose_epoxy;


use crate::locale::Translations;
use crate::seo::{Page, PageBundle, SeoData};

/// Display half of a single-bundle family. Content is served as authored.
pub(crate) fn content_of<C: Clone>(bundles: &Translations<PageBundle<C>>, locale: &str) -> C {
  bundles.resolve(locale).content.clone()
}

pub(crate) fn seo_of<C>(bundles: &Translations<PageBundle<C>>, locale: &str) -> SeoData {
  bundles.resolve(locale).seo.clone()
}

pub(crate) fn page_of<C: Clone>(bundles: &Translations<PageBundle<C>>, locale: &str) -> Page<C> {
  let bundle = bundles.resolve(locale);
  Page { data: bundle.content.clone(), seo: bundle.seo.clone() }
}
