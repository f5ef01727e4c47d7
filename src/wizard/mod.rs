//! The wizard orchestrator.
//!
//! [`Wizard`] is the composition root: it owns the session store, the API
//! implementation and the preview slot, and decides what the current step
//! shows. Step actions live in `steps.rs`.
//!
//! Transitions are strictly forward on a successful call and strictly
//! backward on an explicit "back". A rejected token does not end the
//! process: the wizard moves to [`AuthState::ReauthRequired`] and keeps the
//! session so the user can log in again and carry on.
//!
//! # Example
//!
//! ```no_run
//! use pptwizard::api::ApiClient;
//! use pptwizard::{ClientConfig, Wizard};
//!
//! # async fn run() -> pptwizard::Result<()> {
//! let mut wizard = Wizard::new(ApiClient::new(ClientConfig::from_env())?);
//! wizard.set_topic("Intro to Machine Learning");
//! wizard.generate_content().await?;
//! wizard.continue_to_design()?;
//! wizard.create_presentation().await?;
//! let saved = wizard.download(std::path::Path::new(".")).await?;
//! println!("{}", saved.display());
//! # Ok(())
//! # }
//! ```

mod filename;
mod steps;

pub use filename::download_file_name;
pub use steps::messages;

use std::sync::Arc;

use crate::api::PresentationApi;
use crate::auth::AuthState;
use crate::error::{Error, Result};
use crate::model::{
    ContentCustomization, LayoutCustomization, Session, Step,
};
use crate::preview::{PreviewSlot, PreviewSource};
use crate::session::SessionStore;

/// What the current step displays.
#[derive(Debug)]
pub enum StepView<'a> {
    /// Topic entry with content options
    Topic {
        topic: &'a str,
        customization: &'a ContentCustomization,
    },
    /// Generated content, editable
    Review { content: &'a str },
    /// Layout options
    Design {
        topic: &'a str,
        layout: &'a LayoutCustomization,
    },
    /// Rendered file, preview and download
    Download {
        topic: &'a str,
        layout: &'a LayoutCustomization,
        output_file: &'a str,
        preview: Option<&'a PreviewSource>,
    },
}

impl StepView<'_> {
    /// The step this view belongs to.
    pub fn step(&self) -> Step {
        match self {
            StepView::Topic { .. } => Step::Topic,
            StepView::Review { .. } => Step::Review,
            StepView::Design { .. } => Step::Design,
            StepView::Download { .. } => Step::Download,
        }
    }
}

/// Drives one presentation from topic to download.
pub struct Wizard<A: PresentationApi> {
    api: A,
    store: SessionStore,
    preview: PreviewSlot,
    auth: AuthState,
}

impl<A: PresentationApi> Wizard<A> {
    /// Create a wizard; authenticated if the API already holds a token.
    pub fn new(api: A) -> Self {
        let auth = if api.has_token() {
            AuthState::Authenticated
        } else {
            AuthState::Unauthenticated
        };
        Self {
            api,
            store: SessionStore::new(),
            preview: PreviewSlot::new(),
            auth,
        }
    }

    /// The API implementation.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Current session state.
    pub fn session(&self) -> &Session {
        self.store.get()
    }

    /// Shared snapshot of the session state.
    pub fn snapshot(&self) -> Arc<Session> {
        self.store.snapshot()
    }

    /// Current authentication state.
    pub fn auth_state(&self) -> AuthState {
        self.auth
    }

    /// Current step.
    pub fn current_step(&self) -> Step {
        self.store.get().current_step
    }

    /// Current preview, if one is shown.
    pub fn preview(&self) -> Option<&PreviewSource> {
        self.preview.current()
    }

    /// Number of local preview files currently alive.
    pub fn live_preview_files(&self) -> usize {
        self.preview.live_local_files()
    }

    /// What the current step displays.
    pub fn view(&self) -> StepView<'_> {
        self.view_for(self.current_step().number())
    }

    /// What a step number displays. Unknown numbers show the topic step.
    pub fn view_for(&self, step: u8) -> StepView<'_> {
        let s = self.store.get();
        match Step::from_number(step) {
            Step::Topic => StepView::Topic {
                topic: &s.topic,
                customization: &s.content_customization,
            },
            Step::Review => StepView::Review {
                content: &s.edited_content,
            },
            Step::Design => StepView::Design {
                topic: &s.topic,
                layout: &s.layout_customization,
            },
            Step::Download => StepView::Download {
                topic: &s.topic,
                layout: &s.layout_customization,
                output_file: &s.output_file,
                preview: self.preview.current(),
            },
        }
    }

    /// Log in and return to wherever the session was.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<()> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(Error::Validation(
                "Please enter your username and password".into(),
            ));
        }
        match self.api.login(username, password).await {
            Ok(_) => {
                self.auth = AuthState::Authenticated;
                self.store.set_error(None);
                Ok(())
            }
            Err(e) => {
                log::error!("Login error: {}", e);
                Err(e)
            }
        }
    }

    /// Forget the token and the session.
    pub fn logout(&mut self) -> Result<()> {
        self.preview.release();
        self.store.reset();
        self.auth = AuthState::Unauthenticated;
        self.api.clear_token()
    }

    /// Discard the current presentation and start again at the topic step.
    pub fn new_presentation(&mut self) {
        self.preview.release();
        self.store.reset();
    }

    /// Go one step back. Refused on the first step and while loading.
    pub fn back(&mut self) -> Result<()> {
        let session = self.store.get();
        if session.is_loading {
            return Err(Error::Busy);
        }
        let current = session.current_step;
        let previous = current
            .previous()
            .ok_or(Error::InvalidStep(current.number()))?;
        if current == Step::Download {
            self.preview.release();
        }
        self.store.set_error(None);
        self.store.set_current_step(previous);
        Ok(())
    }

    fn require_step(&self, step: Step) -> Result<()> {
        let current = self.current_step();
        if current != step {
            return Err(Error::InvalidStep(current.number()));
        }
        Ok(())
    }

    fn require_auth(&self) -> Result<()> {
        if self.auth.is_authenticated() {
            Ok(())
        } else {
            Err(Error::Unauthorized)
        }
    }

    /// Start a primary action: refuse if one is outstanding, then mark loading.
    fn begin(&mut self, step: Step) -> Result<()> {
        self.require_step(step)?;
        if self.store.get().is_loading {
            return Err(Error::Busy);
        }
        self.require_auth()?;
        self.store.set_loading(true);
        self.store.set_error(None);
        Ok(())
    }

    /// Finish a primary action: clear loading and translate a failure into
    /// the step's message.
    fn finish<T>(&mut self, result: Result<T>, failure: &str, context: &str) -> Result<T> {
        self.store.set_loading(false);
        if let Err(e) = &result {
            log::error!("{} error: {}", context, e);
            if e.is_unauthorized() {
                self.require_reauth();
            } else {
                self.store.set_error(Some(failure.to_string()));
            }
        }
        result
    }

    /// The service rejected the token: ask for a fresh login, keep the session.
    fn require_reauth(&mut self) {
        self.auth = AuthState::ReauthRequired;
        self.store
            .set_error(Some(messages::SESSION_EXPIRED.to_string()));
    }
}
