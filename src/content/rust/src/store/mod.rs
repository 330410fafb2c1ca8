/* src/content/rust/src/store/mod.rs */

//! Immutable, validated content shared by every request.

mod records;
mod sources;


use std::collections::{BTreeMap, HashSet};

use tracing::info;

pub use records::{BlogPost, BlogText, Category, HomeSource, Project, ProjectText, Service};
pub use sources::{
  ABOUT, BLOGS, CONSULTATION, CONTACT, COOKIES, ContentSources, HOME, MESSAGES, PRIVACY, PROJECTS, SERVICES,
  WHY_CHOOSE_EPOXY,
};

use crate::errors::ContentError;
use crate::linker::{RelatedRef, ServiceRef};
use crate::locale::{Locale, Translations};
use crate::messages::{MessageCatalog, StaticMessages};
use crate::pages::about::AboutContent;
use crate::pages::blogs::BlogsPageContent;
use crate::pages::contact::ContactContent;
use crate::pages::legal::{CookiesContent, PrivacyContent};
use crate::pages::projects::ProjectsPageContent;
use crate::pages::services::ServicesPageContent;
use crate::pages::why_choose_epoxy::WhyChooseEpoxyContent;
use crate::seo::PageBundle;
use crate::slug::is_valid_slug;
use records::{BlogsDoc, ProjectsDoc, ServicesDoc, build_services};

type Bundles<C> = Translations<PageBundle<C>>;

#[derive(Debug, Clone)]
pub struct ContentStore {
  home: HomeSource,
  about: Bundles<AboutContent>,
  services_page: Bundles<ServicesPageContent>,
  services: Vec<Service>,
  projects_page: Bundles<ProjectsPageContent>,
  projects: Vec<Project>,
  blogs_page: Bundles<BlogsPageContent>,
  blogs: Vec<BlogPost>,
  contact: Bundles<ContactContent>,
  consultation: Bundles<ContactContent>,
  cookies: Bundles<CookiesContent>,
  privacy: Bundles<PrivacyContent>,
  why_choose_epoxy: Bundles<WhyChooseEpoxyContent>,
  messages: StaticMessages,
}

impl ContentStore {
  /// Parses and validates every document. Any failure aborts the load.
  pub fn load(sources: &ContentSources) -> Result<Self, ContentError> {
    let ServicesDoc { page: services_page, services } = sources.parse(SERVICES)?;
    let ProjectsDoc { page: projects_page, projects } = sources.parse(PROJECTS)?;
    let BlogsDoc { page: blogs_page, posts: blogs } = sources.parse(BLOGS)?;
    let catalogs: BTreeMap<Locale, MessageCatalog> = sources.parse(MESSAGES)?;

    let store = Self {
      home: sources.parse(HOME)?,
      about: sources.parse(ABOUT)?,
      services_page,
      services: build_services(services)?,
      projects_page,
      projects,
      blogs_page,
      blogs,
      contact: sources.parse(CONTACT)?,
      consultation: sources.parse(CONSULTATION)?,
      cookies: sources.parse(COOKIES)?,
      privacy: sources.parse(PRIVACY)?,
      why_choose_epoxy: sources.parse(WHY_CHOOSE_EPOXY)?,
      messages: StaticMessages::from_catalogs(catalogs)?,
    };
    store.validate()?;

    info!(
      services = store.services.len(),
      projects = store.projects.len(),
      posts = store.blogs.len(),
      "content store loaded"
    );
    Ok(store)
  }

  pub fn embedded() -> Result<Self, ContentError> {
    Self::load(&ContentSources::embedded())
  }

  fn validate(&self) -> Result<(), ContentError> {
    for post in &self.blogs {
      if !is_valid_slug(&post.slug) {
        return Err(ContentError::InvalidSlug(post.slug.clone()));
      }
    }

    let ids: HashSet<&str> = self.services.iter().map(|s| s.id.as_str()).collect();
    for service in &self.services {
      for related in &service.related {
        if let RelatedRef::ById(ServiceRef { service: target }) = related
          && !ids.contains(target.as_str())
        {
          return Err(ContentError::UnknownRelatedService { from: service.id.clone(), target: target.clone() });
        }
      }
    }

    for locale in Locale::ALL {
      if !self.home.translations.has(locale) {
        continue;
      }
      let content = &self.home.translations.get(locale).content;
      for id in &content.featured_projects.projects {
        if self.project_by_id(id).is_none() {
          return Err(ContentError::UnknownFeaturedProject(id.clone()));
        }
      }
      for tab in &content.services.tabs {
        if !content.services.services.contains_key(tab) {
          return Err(ContentError::MissingServiceTab { tab: tab.clone(), locale: locale.as_str() });
        }
      }
    }
    Ok(())
  }

  // -- Accessors --

  pub fn home(&self) -> &HomeSource {
    &self.home
  }

  pub fn about(&self) -> &Bundles<AboutContent> {
    &self.about
  }

  pub fn services_page(&self) -> &Bundles<ServicesPageContent> {
    &self.services_page
  }

  pub fn services(&self) -> &[Service] {
    &self.services
  }

  pub fn projects_page(&self) -> &Bundles<ProjectsPageContent> {
    &self.projects_page
  }

  pub fn projects(&self) -> &[Project] {
    &self.projects
  }

  pub fn blogs_page(&self) -> &Bundles<BlogsPageContent> {
    &self.blogs_page
  }

  pub fn blogs(&self) -> &[BlogPost] {
    &self.blogs
  }

  pub fn contact(&self) -> &Bundles<ContactContent> {
    &self.contact
  }

  pub fn consultation(&self) -> &Bundles<ContactContent> {
    &self.consultation
  }

  pub fn cookies(&self) -> &Bundles<CookiesContent> {
    &self.cookies
  }

  pub fn privacy(&self) -> &Bundles<PrivacyContent> {
    &self.privacy
  }

  pub fn why_choose_epoxy(&self) -> &Bundles<WhyChooseEpoxyContent> {
    &self.why_choose_epoxy
  }

  pub fn messages(&self) -> &StaticMessages {
    &self.messages
  }

  // -- Lookups --

  /// First service whose derived slug equals `slug`.
  pub fn service_by_slug(&self, slug: &str) -> Option<&Service> {
    self.services.iter().find(|s| s.slug == slug)
  }

  pub fn service_by_id(&self, id: &str) -> Option<&Service> {
    self.services.iter().find(|s| s.id == id)
  }

  pub fn project_by_id(&self, id: &str) -> Option<&Project> {
    self.projects.iter().find(|p| p.id == id)
  }

  pub fn blog_by_slug(&self, slug: &str) -> Option<&BlogPost> {
    self.blogs.iter().find(|p| p.slug == slug)
  }
}
