/* src/content/rust/src/lib.rs */

pub mod errors;
pub mod linker;
pub mod locale;
pub mod messages;
pub mod navigation;
pub mod pages;
pub mod routing;
pub mod seo;
pub mod slug;
pub mod store;

// Re-exports for ergonomic use
pub use errors::ContentError;
pub use linker::{RelatedRef, RelatedServiceLink, ServiceRef, TitleIndex, TitleRef, link_related};
pub use locale::{Direction, Locale, Translations, UnsupportedLocale, default_locale, is_supported, resolve};
pub use messages::{LocalizedMessages, StaticMessages, static_messages};
pub use navigation::{NavLink, Navigation, navigation, navigation_for_path};
pub use routing::{LocaleAlternate, alternates, localized_path, locale_from_path, static_paths, strip_locale, with_locale};
pub use seo::{Hero, Page, PageBundle, SeoData, SeoTemplate};
pub use slug::{is_valid_slug, slugify};
pub use store::{ContentSources, ContentStore};
