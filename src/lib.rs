//! Typed access to the global documents of a headless content backend.
//!
//! ```no_run
//! use std::sync::Arc;
//! use site_globals::{FooterFetcher, HttpContentBackend, Settings};
//!
//! # async fn run() -> Result<(), site_globals::Error> {
//! let settings = Settings::load()?;
//! let backend = Arc::new(HttpContentBackend::from_settings(&settings)?);
//! let footer = FooterFetcher::from_settings(backend, &settings).fetch_footer().await?;
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod contract;
pub mod globals;
pub mod observability;
pub mod utils;

pub use backend::http_backend::{HttpContentBackend, HttpContentBackendConnectionDetails};
pub use backend::memory_backend::InMemoryContentBackend;
pub use contract::icontentbackend::{FindGlobalRequest, IContentBackend};
pub use contract::lib::{BackendError, Error, Result};
pub use globals::fetcher::{FooterFetcher, GlobalFetcher};
pub use globals::footer::{DocumentId, Footer, Link, LinkAppearance, LinkReference, LinkType, NavItem, FOOTER_SLUG};
pub use utils::config::Settings;
