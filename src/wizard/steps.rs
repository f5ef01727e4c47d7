//! Step actions.
//!
//! Each primary action follows the same shape: refuse if the wizard is on
//! another step or already loading, mark loading, make at most one call, on
//! success update the session and advance exactly one step, on failure set
//! the step's message and stay put, then clear loading.

use std::path::{Path, PathBuf};

use super::{download_file_name, Wizard};
use crate::api::PresentationApi;
use crate::error::{Error, Result};
use crate::model::{ContentCustomizationPatch, LayoutCustomizationPatch, Step};
use crate::preview::{LocalPreview, PreviewMethod, PreviewSource};

/// Messages shown to the user when an action fails.
pub mod messages {
    pub const EMPTY_TOPIC: &str = "Please enter a topic for your presentation";
    pub const GENERATE_FAILED: &str = "Failed to generate content. Please try again.";
    pub const EMPTY_CONTENT: &str = "Please review the content before continuing";
    pub const CREATE_FAILED: &str = "Failed to create PowerPoint. Please try again.";
    pub const NO_OUTPUT: &str = "No presentation has been created yet";
    pub const DOWNLOAD_FAILED: &str = "Failed to download file. Please try again.";
    pub const PREVIEW_FAILED: &str = "Failed to load preview. Please try again.";
    pub const SESSION_EXPIRED: &str = "Your session has expired. Please log in again.";
}

impl<A: PresentationApi> Wizard<A> {
    fn reject(&mut self, message: &str) -> Error {
        self.store.set_error(Some(message.to_string()));
        Error::Validation(message.to_string())
    }

    fn refuse_if_loading(&self) -> Result<()> {
        if self.store.get().is_loading {
            Err(Error::Busy)
        } else {
            Ok(())
        }
    }

    // ==================== Step 1: topic ====================

    /// Replace the topic.
    pub fn set_topic(&mut self, topic: impl Into<String>) {
        self.store.update_topic(topic);
    }

    /// Merge content options.
    pub fn customize_content(&mut self, patch: ContentCustomizationPatch) {
        self.store.update_content_customization(patch);
    }

    /// Generate content for the topic and move to the review step.
    ///
    /// A blank topic is rejected without contacting the service.
    pub async fn generate_content(&mut self) -> Result<()> {
        self.require_step(Step::Topic)?;
        self.refuse_if_loading()?;

        let session = self.store.snapshot();
        if session.topic.trim().is_empty() {
            return Err(self.reject(messages::EMPTY_TOPIC));
        }

        self.begin(Step::Topic)?;
        let result = self
            .api
            .generate_content(&session.topic, &session.content_customization)
            .await;
        let content = self.finish(result, messages::GENERATE_FAILED, "Content generation")?;

        log::info!("Generated {} bytes of content", content.len());
        self.store.update_generated_content(content);
        self.store.set_current_step(Step::Review);
        Ok(())
    }

    // ==================== Step 2: review ====================

    /// Replace the edited content.
    pub fn edit_content(&mut self, content: impl Into<String>) {
        self.store.update_edited_content(content);
    }

    /// Accept the edited content and move to the design step.
    pub fn continue_to_design(&mut self) -> Result<()> {
        self.require_step(Step::Review)?;
        self.refuse_if_loading()?;

        if self.store.get().edited_content.trim().is_empty() {
            return Err(self.reject(messages::EMPTY_CONTENT));
        }

        self.store.set_error(None);
        self.store.set_current_step(Step::Design);
        Ok(())
    }

    // ==================== Step 3: design ====================

    /// Merge layout options.
    pub fn customize_layout(&mut self, patch: LayoutCustomizationPatch) {
        self.store.update_layout_customization(patch);
    }

    /// Render the edited content and move to the download step.
    pub async fn create_presentation(&mut self) -> Result<()> {
        self.require_step(Step::Design)?;
        self.refuse_if_loading()?;

        let session = self.store.snapshot();
        if session.edited_content.trim().is_empty() {
            return Err(self.reject(messages::EMPTY_CONTENT));
        }

        self.begin(Step::Design)?;
        let layout = session.layout_customization;
        let result = self
            .api
            .create_presentation(&session.edited_content, &layout, layout.theme)
            .await;
        let output_file = self.finish(result, messages::CREATE_FAILED, "PPT creation")?;

        log::info!("Presentation rendered to {}", output_file);
        self.store.update_output_file(output_file);
        self.store.set_current_step(Step::Download);
        Ok(())
    }

    // ==================== Step 4: download ====================

    fn require_output(&mut self) -> Result<String> {
        let file = self.store.get().output_file.clone();
        if file.is_empty() {
            return Err(self.reject(messages::NO_OUTPUT));
        }
        Ok(file)
    }

    /// Fetch the rendered file and save it into `dir` as
    /// `<topic>_presentation.pptx`. Returns the saved path.
    ///
    /// On failure the output file and the step are left as they were.
    pub async fn download(&mut self, dir: &Path) -> Result<PathBuf> {
        self.require_step(Step::Download)?;
        self.refuse_if_loading()?;
        let file = self.require_output()?;
        let target = dir.join(download_file_name(&self.store.get().topic));

        self.begin(Step::Download)?;
        let result = match self.api.download(&file).await {
            Ok(bytes) => save(&target, &bytes).await,
            Err(e) => Err(e),
        };
        self.finish(result, messages::DOWNLOAD_FAILED, "Download")?;

        log::info!("Saved {}", target.display());
        Ok(target)
    }

    /// Show the rendered file with `method`, replacing (and releasing) any
    /// previous preview.
    ///
    /// If fetching the file for a local preview fails, the third-party
    /// viewer is used instead.
    pub async fn show_preview(&mut self, method: PreviewMethod) -> Result<&PreviewSource> {
        self.require_step(Step::Download)?;
        self.refuse_if_loading()?;
        let file = self.require_output()?;

        let source = match method {
            PreviewMethod::Direct => PreviewSource::Remote {
                method,
                url: self.api.direct_url(&file),
            },
            PreviewMethod::Viewer => self.viewer_source(&file)?,
            PreviewMethod::Blob => {
                self.begin(Step::Download)?;
                let fetched = match self.api.fetch_preview(&file).await {
                    Ok(bytes) => LocalPreview::create(&bytes),
                    Err(e) => Err(e),
                };
                self.store.set_loading(false);

                match fetched {
                    Ok(local) => PreviewSource::Local(local),
                    Err(e) if e.is_unauthorized() => {
                        self.preview.release();
                        self.require_reauth();
                        return Err(e);
                    }
                    Err(e) => {
                        log::warn!("Local preview failed, falling back to viewer: {}", e);
                        self.viewer_source(&file)?
                    }
                }
            }
        };

        self.store.set_error(None);
        Ok(self.preview.set(source))
    }

    fn viewer_source(&mut self, file: &str) -> Result<PreviewSource> {
        match self.api.viewer_url(file) {
            Ok(url) => Ok(PreviewSource::Remote {
                method: PreviewMethod::Viewer,
                url,
            }),
            Err(e) => {
                log::error!("Preview error: {}", e);
                self.store
                    .set_error(Some(messages::PREVIEW_FAILED.to_string()));
                Err(e)
            }
        }
    }
}

async fn save(target: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = target.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    tokio::fs::write(target, bytes).await?;
    Ok(())
}
