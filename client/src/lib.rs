//! Typed client for the CV platform API.
//!
//! One `ApiClient` per base URL; public reads need nothing else, mutating
//! calls take the `AdminSession` returned by [`ApiClient::login`]. The
//! [`content::fetch_site_content`] helper issues the public page's six
//! fetches concurrently and fails as a whole if any one of them fails.

pub mod client;
pub mod content;
pub mod error;
pub mod forms;
pub mod model;

pub use client::{AdminSession, ApiClient};
pub use content::{fetch_site_content, SiteContent};
pub use error::ClientError;
