/* src/server/core/rust/src/site.rs */

//! The marketing site's page table.

use std::sync::Arc;
use std::time::Duration;

use epoxy_content::ContentStore;

use crate::page::{LoaderDef, PageDef};
use crate::procedures::ContentApi;
use crate::server::SiteServer;

fn simple(route: &str, family: &str) -> PageDef {
  PageDef::new(route)
    .loader(LoaderDef::new("page", &format!("get{family}PageData"), &[]))
    .loader(LoaderDef::new("seo", &format!("get{family}PageSEO"), &[]))
}

pub fn pages() -> Vec<PageDef> {
  vec![
    simple("/", "Home"),
    simple("/about", "About"),
    simple("/services", "Services"),
    PageDef::new("/services/{category}")
      .loader(LoaderDef::new("page", "getCategoryPageData", &[("category", "category")]).required())
      .loader(LoaderDef::new("seo", "getCategoryPageSEO", &[("category", "category")]).required()),
    PageDef::new("/services/{category}/{service}")
      .loader(
        LoaderDef::new("valid", "validateServiceCategory", &[("slug", "service"), ("category", "category")])
          .guard(),
      )
      .loader(LoaderDef::new("page", "getServiceDetailData", &[("slug", "service")]))
      .loader(LoaderDef::new("seo", "getServiceDetailSEO", &[("slug", "service")])),
    simple("/projects", "Projects"),
    simple("/blogs", "Blogs"),
    PageDef::new("/blogs/{slug}")
      .loader(LoaderDef::new("page", "getBlogBySlug", &[("slug", "slug")]).required())
      .loader(LoaderDef::new("seo", "getBlogSEO", &[("slug", "slug")]).required()),
    simple("/contact", "ContactUs"),
    simple("/consultation", "Consultation"),
    simple("/cookies", "Cookies"),
    simple("/privacy", "Privacy"),
    simple("/why-choose-epoxy", "WhyChooseEpoxy"),
  ]
}

/// Param the adapter fills with the request path before running loaders.
pub const PATH_PARAM: &str = "path";

pub fn layout() -> Vec<LoaderDef> {
  vec![
    LoaderDef::new("navigation", "getNavigation", &[("path", PATH_PARAM)]),
    LoaderDef::new("messages", "getStaticTranslations", &[]),
  ]
}

/// Server with every content procedure, page and layout loader registered.
pub fn site_server(store: Arc<ContentStore>, latency: Duration) -> SiteServer {
  let api = ContentApi::new(store).latency(latency);
  let mut server = SiteServer::new().procedures(api.procedures());
  for page in pages() {
    server = server.page(page);
  }
  for loader in layout() {
    server = server.layout(loader);
  }
  server
}
