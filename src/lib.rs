//! # pptwizard
//!
//! Client library for an AI presentation service.
//!
//! The service generates slide content for a topic, renders it into a
//! PowerPoint file and serves the result. This crate walks one presentation
//! through four steps (topic, review, design, download) and owns everything
//! on the client side: the HTTP client with bearer-token handling, the
//! session state, the step transitions and the preview files.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pptwizard::{ClientConfig, PptWizard, Theme};
//!
//! # async fn run() -> pptwizard::Result<()> {
//! let saved = PptWizard::new()
//!     .with_config(ClientConfig::from_env())
//!     .with_theme(Theme::Madison)
//!     .run("Intro to Machine Learning", std::path::Path::new("."))
//!     .await?;
//! println!("Saved {}", saved.display());
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - **Typed options**: every content and layout option is an enum with the
//!   exact wire value the service expects
//! - **Copy-on-write session**: snapshots never observe later edits
//! - **Explicit re-authentication**: a rejected token clears the stored
//!   credentials and asks for a new login without losing the session
//! - **Preview lifecycle**: local preview files are deleted as soon as they
//!   are superseded

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod model;
pub mod preview;
pub mod session;
pub mod wizard;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use api::{ApiClient, PresentationApi};
pub use auth::{AuthState, FileTokenStore, MemoryTokenStore, TokenStore};
pub use config::{ClientConfig, DEFAULT_API_URL};
pub use error::{Error, Result};
pub use model::{
    ContentCustomization, ContentCustomizationPatch, ContentLength, DetailLevel, EngagementLevel,
    ExampleDensity, LayoutCustomization, LayoutCustomizationPatch, PresentationPurpose, Session,
    SlideRange, Step, TargetAudience, Theme, Tone, VisualPreference,
};
pub use preview::{PreviewMethod, PreviewSlot, PreviewSource};
pub use session::SessionStore;
pub use wizard::{download_file_name, StepView, Wizard};

use std::path::{Path, PathBuf};

/// Log in and persist the token at the configured location.
///
/// # Example
///
/// ```no_run
/// use pptwizard::{login, ClientConfig};
///
/// # async fn run() -> pptwizard::Result<()> {
/// login(ClientConfig::default(), "user", "secret").await?;
/// # Ok(())
/// # }
/// ```
pub async fn login(config: ClientConfig, username: &str, password: &str) -> Result<()> {
    let client = ApiClient::new(config)?;
    client.login(username, password).await?;
    Ok(())
}

/// Remove the token stored at the configured location.
pub fn logout(config: ClientConfig) -> Result<()> {
    ApiClient::new(config)?.clear_token()
}

/// Builder for a non-interactive run from topic to saved file.
///
/// # Example
///
/// ```no_run
/// use pptwizard::{PptWizard, SlideRange, Tone};
///
/// # async fn run() -> pptwizard::Result<()> {
/// let saved = PptWizard::new()
///     .with_tone(Tone::Friendly)
///     .with_slide_range(SlideRange::SixToNine)
///     .run("Rust for beginners", std::path::Path::new("out"))
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct PptWizard {
    config: ClientConfig,
    content: ContentCustomizationPatch,
    layout: LayoutCustomizationPatch,
}

impl PptWizard {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the client configuration.
    pub fn with_config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the content options collected so far.
    pub fn with_content(mut self, patch: ContentCustomizationPatch) -> Self {
        self.content = patch;
        self
    }

    /// Set the tone.
    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.content.tone = Some(tone);
        self
    }

    /// Set the detail level.
    pub fn with_detail_level(mut self, level: DetailLevel) -> Self {
        self.content.detail_level = Some(level);
        self
    }

    /// Set the target audience.
    pub fn with_audience(mut self, audience: TargetAudience) -> Self {
        self.content.target_audience = Some(audience);
        self
    }

    /// Replace the layout options collected so far.
    pub fn with_layout(mut self, patch: LayoutCustomizationPatch) -> Self {
        self.layout = patch;
        self
    }

    /// Set the theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.layout.theme = Some(theme);
        self
    }

    /// Set the slide range.
    pub fn with_slide_range(mut self, range: SlideRange) -> Self {
        self.layout.slide_range = Some(range);
        self
    }

    /// Build the wizard without running it.
    pub fn build(self) -> Result<Wizard<ApiClient>> {
        let mut wizard = Wizard::new(ApiClient::new(self.config)?);
        wizard.customize_content(self.content);
        wizard.customize_layout(self.layout);
        Ok(wizard)
    }

    /// Generate, render and download a presentation for `topic` into `dir`,
    /// accepting the generated content as is.
    pub async fn run(self, topic: &str, dir: &Path) -> Result<PathBuf> {
        let mut wizard = self.build()?;
        wizard.set_topic(topic);
        wizard.generate_content().await?;
        wizard.continue_to_design()?;
        wizard.create_presentation().await?;
        wizard.download(dir).await
    }
}
