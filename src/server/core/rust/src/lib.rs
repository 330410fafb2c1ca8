/* src/server/core/rust/src/lib.rs */

pub mod errors;
pub mod manifest;
pub mod page;
pub mod procedure;
pub mod procedures;
pub mod resolve;
pub mod server;
pub mod site;

// Re-exports for ergonomic use
pub use errors::SiteError;
pub use manifest::{Manifest, build_manifest};
pub use page::{LoaderDef, LoaderInputFn, LoaderRole, PageDef};
pub use procedure::{BoxFuture, HandlerFn, ProcedureDef};
pub use procedures::{ContentApi, ContentInput};
pub use resolve::{DEFAULT_LOCALE_COOKIE, ResolveContext, negotiate_locale};
pub use server::{SiteParts, SiteServer};
pub use site::{PATH_PARAM, site_server};
