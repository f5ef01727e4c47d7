//! Wizard session state.

use super::{ContentCustomization, LayoutCustomization};

/// One of the four sequential wizard stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub enum Step {
    /// Topic entry and content options
    #[default]
    Topic = 1,
    /// Review and edit the generated content
    Review = 2,
    /// Theme and layout selection
    Design = 3,
    /// Preview and download
    Download = 4,
}

impl Step {
    /// Every step, in order.
    pub const ALL: [Step; 4] = [Step::Topic, Step::Review, Step::Design, Step::Download];

    /// 1-based step number.
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Map a step number to a step. Anything unrecognized is the topic step.
    pub fn from_number(n: u8) -> Self {
        match n {
            2 => Step::Review,
            3 => Step::Design,
            4 => Step::Download,
            _ => Step::Topic,
        }
    }

    /// The step after this one.
    pub fn next(self) -> Option<Step> {
        match self {
            Step::Topic => Some(Step::Review),
            Step::Review => Some(Step::Design),
            Step::Design => Some(Step::Download),
            Step::Download => None,
        }
    }

    /// The step before this one.
    pub fn previous(self) -> Option<Step> {
        match self {
            Step::Topic => None,
            Step::Review => Some(Step::Topic),
            Step::Design => Some(Step::Review),
            Step::Download => Some(Step::Design),
        }
    }

    /// Short title.
    pub fn title(self) -> &'static str {
        match self {
            Step::Topic => "Topic",
            Step::Review => "Review",
            Step::Design => "Design",
            Step::Download => "Download",
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {}", self.number(), self.title())
    }
}

/// Everything the wizard has collected for the current presentation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub current_step: Step,
    pub topic: String,
    pub content_customization: ContentCustomization,

    /// Content exactly as the service returned it
    pub generated_content: String,

    /// Content after user edits; this is what gets rendered
    pub edited_content: String,

    pub layout_customization: LayoutCustomization,

    /// Service-side path of the rendered file
    pub output_file: String,

    pub is_loading: bool,
    pub error: Option<String>,
}

impl Session {
    /// Create a session with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a presentation has been rendered.
    pub fn has_output(&self) -> bool {
        !self.output_file.is_empty()
    }
}
