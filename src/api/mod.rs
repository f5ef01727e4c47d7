//! Access to the presentation service.
//!
//! [`PresentationApi`] is the seam the wizard depends on; [`ApiClient`] is the
//! HTTP implementation. Every call is made once: there is no retry, backoff
//! or idempotency handling, and a failure is reported straight back to the
//! caller.
//!
//! # Example
//!
//! ```no_run
//! use pptwizard::api::{ApiClient, PresentationApi};
//! use pptwizard::{ClientConfig, ContentCustomization};
//!
//! # async fn run() -> pptwizard::Result<()> {
//! let client = ApiClient::new(ClientConfig::from_env())?;
//! client.login("user", "password").await?;
//! let content = client
//!     .generate_content("Intro to Machine Learning", &ContentCustomization::default())
//!     .await?;
//! println!("{}", content);
//! # Ok(())
//! # }
//! ```

mod client;
pub mod urls;
mod wire;

pub use client::ApiClient;

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{ContentCustomization, LayoutCustomization, Theme};

/// Operations the wizard needs from the presentation service.
#[async_trait]
pub trait PresentationApi: Send + Sync {
    /// Exchange credentials for a bearer token and persist it.
    async fn login(&self, username: &str, password: &str) -> Result<String>;

    /// Generate slide content for a topic.
    async fn generate_content(
        &self,
        topic: &str,
        customization: &ContentCustomization,
    ) -> Result<String>;

    /// Render content into a presentation; returns the service-side file path.
    async fn create_presentation(
        &self,
        content: &str,
        layout: &LayoutCustomization,
        theme: Theme,
    ) -> Result<String>;

    /// Fetch a rendered file.
    async fn download(&self, filepath: &str) -> Result<Vec<u8>>;

    /// Fetch a rendered file through the inline preview endpoint.
    async fn fetch_preview(&self, filepath: &str) -> Result<Vec<u8>>;

    /// URL of the file as served directly.
    fn direct_url(&self, filepath: &str) -> String;

    /// URL of the inline preview endpoint for the current token.
    fn preview_url(&self, filepath: &str) -> Result<String>;

    /// URL of the third-party document viewer for the current token.
    fn viewer_url(&self, filepath: &str) -> Result<String>;

    /// Whether a token is currently stored.
    fn has_token(&self) -> bool;

    /// Remove the stored token.
    fn clear_token(&self) -> Result<()>;
}
