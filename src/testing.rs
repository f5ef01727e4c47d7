//! In-process stand-in for the presentation service, for unit tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::{urls, PresentationApi};
use crate::error::{Error, Result};
use crate::model::{ContentCustomization, LayoutCustomization, Theme};

const BASE_URL: &str = "http://fake.local";

/// Failure the next call should report.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Failure {
    /// Non-success status
    Status,
    /// Token rejected; the token is cleared like the real client does
    Unauthorized,
}

pub(crate) struct FakeApi {
    token: Mutex<Option<String>>,
    next_failure: Mutex<Option<Failure>>,
    sticky_failure: Option<Failure>,
    calls: Mutex<Vec<&'static str>>,
    last_theme: Mutex<Option<Theme>>,
    content: String,
    output_file: String,
}

impl FakeApi {
    pub const FILE_BYTES: &'static [u8] = b"PK\x03\x04fake-pptx";

    pub fn new() -> Self {
        Self {
            token: Mutex::new(Some("test-token".to_string())),
            next_failure: Mutex::new(None),
            sticky_failure: None,
            calls: Mutex::new(Vec::new()),
            last_theme: Mutex::new(None),
            content: "# Generated\n- point".to_string(),
            output_file: "outputs/deck.pptx".to_string(),
        }
    }

    pub fn logged_out() -> Self {
        let api = Self::new();
        *api.token.lock().unwrap() = None;
        api
    }

    pub fn with_content(mut self, content: &str) -> Self {
        self.content = content.to_string();
        self
    }

    pub fn with_output_file(mut self, file: &str) -> Self {
        self.output_file = file.to_string();
        self
    }

    /// Every call fails.
    pub fn failing(mut self, failure: Failure) -> Self {
        self.sticky_failure = Some(failure);
        self
    }

    /// Only the next call fails.
    pub fn fail_next(&self, failure: Failure) {
        *self.next_failure.lock().unwrap() = Some(failure);
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_theme(&self) -> Option<Theme> {
        *self.last_theme.lock().unwrap()
    }

    fn record(&self, name: &'static str) -> Result<()> {
        self.calls.lock().unwrap().push(name);
        let failure = self.next_failure.lock().unwrap().take().or(self.sticky_failure);
        match failure {
            None => Ok(()),
            Some(Failure::Status) => Err(Error::Status {
                status: 500,
                message: "Internal Server Error".into(),
            }),
            Some(Failure::Unauthorized) => {
                *self.token.lock().unwrap() = None;
                Err(Error::Unauthorized)
            }
        }
    }

    fn token(&self) -> Result<String> {
        self.token.lock().unwrap().clone().ok_or(Error::Unauthorized)
    }
}

#[async_trait]
impl PresentationApi for FakeApi {
    async fn login(&self, _username: &str, _password: &str) -> Result<String> {
        let token = "fresh-token".to_string();
        *self.token.lock().unwrap() = Some(token.clone());
        Ok(token)
    }

    async fn generate_content(
        &self,
        _topic: &str,
        _customization: &ContentCustomization,
    ) -> Result<String> {
        self.record("generate_content")?;
        Ok(self.content.clone())
    }

    async fn create_presentation(
        &self,
        _content: &str,
        _layout: &LayoutCustomization,
        theme: Theme,
    ) -> Result<String> {
        self.record("create_presentation")?;
        *self.last_theme.lock().unwrap() = Some(theme);
        Ok(self.output_file.clone())
    }

    async fn download(&self, _filepath: &str) -> Result<Vec<u8>> {
        self.record("download")?;
        Ok(Self::FILE_BYTES.to_vec())
    }

    async fn fetch_preview(&self, _filepath: &str) -> Result<Vec<u8>> {
        self.record("fetch_preview")?;
        Ok(Self::FILE_BYTES.to_vec())
    }

    fn direct_url(&self, filepath: &str) -> String {
        urls::direct_url(BASE_URL, filepath)
    }

    fn preview_url(&self, filepath: &str) -> Result<String> {
        Ok(urls::preview_url(BASE_URL, filepath, &self.token()?))
    }

    fn viewer_url(&self, filepath: &str) -> Result<String> {
        Ok(urls::viewer_url(BASE_URL, filepath, &self.token()?))
    }

    fn has_token(&self) -> bool {
        self.token.lock().unwrap().is_some()
    }

    fn clear_token(&self) -> Result<()> {
        *self.token.lock().unwrap() = None;
        Ok(())
    }
}
