//! Content customization sent with the generation request.

use serde::{Deserialize, Serialize};

wire_enum! {
    /// How deep the generated content goes.
    DetailLevel, "detail_level" {
        Overview => "overview", "Overview",
        #[default]
        Intermediate => "intermediate", "Intermediate",
        DeepDive => "deep_dive", "Deep Dive",
        ExpertLevel => "expert_level", "Expert Level",
    }
}

wire_enum! {
    /// How much the content tries to involve the audience.
    EngagementLevel, "engagement_level" {
        #[default]
        Informational => "informational", "Informational",
        Interactive => "interactive", "Interactive",
        HighlyEngaging => "highly_engaging", "Highly Engaging",
    }
}

wire_enum! {
    /// How many worked examples to include.
    ExampleDensity, "include_examples" {
        None => "none", "None",
        Minimal => "minimal", "Minimal",
        #[default]
        Moderate => "moderate", "Moderate",
        Extensive => "extensive", "Extensive",
    }
}

wire_enum! {
    /// Overall text length per slide.
    ContentLength, "length" {
        Brief => "brief", "Brief",
        #[default]
        Moderate => "moderate", "Moderate",
        Descriptive => "descriptive", "Descriptive",
        Comprehensive => "comprehensive", "Comprehensive",
    }
}

wire_enum! {
    /// What the presentation is for.
    PresentationPurpose, "presentation_purpose" {
        SalesPitch => "sales_pitch", "Sales Pitch",
        #[default]
        ConferenceTalk => "conference_talk", "Conference Talk",
        Educational => "educational", "Educational",
        Training => "training", "Training",
        MeetingPresentation => "meeting_presentation", "Meeting Presentation",
        Workshop => "workshop", "Workshop",
        PitchDeck => "pitch_deck", "Pitch Deck",
    }
}

wire_enum! {
    /// Who the presentation is for.
    TargetAudience, "target_audience" {
        #[default]
        General => "general", "General",
        Students => "students", "Students",
        TechnicalExperts => "technical_experts", "Technical Experts",
        Executives => "executives", "Executives",
    }
}

wire_enum! {
    /// Voice of the generated text.
    Tone, "tone" {
        Casual => "casual", "Casual",
        Friendly => "friendly", "Friendly",
        #[default]
        Professional => "professional", "Professional",
        Academic => "academic", "Academic",
        Persuasive => "persuasive", "Persuasive",
        Technical => "technical", "Technical",
    }
}

/// Industry used when the user leaves the field alone.
pub const DEFAULT_INDUSTRY: &str = "general";

/// Options steering content generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentCustomization {
    /// Depth of coverage
    pub detail_level: DetailLevel,

    /// Audience involvement
    pub engagement_level: EngagementLevel,

    /// Example density
    pub include_examples: ExampleDensity,

    /// Free-text industry
    pub industry: String,

    /// Text length
    pub length: ContentLength,

    /// Purpose of the talk
    pub presentation_purpose: PresentationPurpose,

    /// Intended audience
    pub target_audience: TargetAudience,

    /// Voice
    pub tone: Tone,
}

impl ContentCustomization {
    /// Create the default customization.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a partial update; fields the patch leaves empty are kept.
    pub fn merge(&mut self, patch: ContentCustomizationPatch) {
        if let Some(v) = patch.detail_level {
            self.detail_level = v;
        }
        if let Some(v) = patch.engagement_level {
            self.engagement_level = v;
        }
        if let Some(v) = patch.include_examples {
            self.include_examples = v;
        }
        if let Some(v) = patch.industry {
            self.industry = v;
        }
        if let Some(v) = patch.length {
            self.length = v;
        }
        if let Some(v) = patch.presentation_purpose {
            self.presentation_purpose = v;
        }
        if let Some(v) = patch.target_audience {
            self.target_audience = v;
        }
        if let Some(v) = patch.tone {
            self.tone = v;
        }
    }
}

impl Default for ContentCustomization {
    fn default() -> Self {
        Self {
            detail_level: DetailLevel::default(),
            engagement_level: EngagementLevel::default(),
            include_examples: ExampleDensity::default(),
            industry: DEFAULT_INDUSTRY.to_string(),
            length: ContentLength::default(),
            presentation_purpose: PresentationPurpose::default(),
            target_audience: TargetAudience::default(),
            tone: Tone::default(),
        }
    }
}

/// Partial update for [`ContentCustomization`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentCustomizationPatch {
    pub detail_level: Option<DetailLevel>,
    pub engagement_level: Option<EngagementLevel>,
    pub include_examples: Option<ExampleDensity>,
    pub industry: Option<String>,
    pub length: Option<ContentLength>,
    pub presentation_purpose: Option<PresentationPurpose>,
    pub target_audience: Option<TargetAudience>,
    pub tone: Option<Tone>,
}

impl ContentCustomizationPatch {
    /// Create an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set detail level.
    pub fn detail_level(mut self, v: DetailLevel) -> Self {
        self.detail_level = Some(v);
        self
    }

    /// Set engagement level.
    pub fn engagement_level(mut self, v: EngagementLevel) -> Self {
        self.engagement_level = Some(v);
        self
    }

    /// Set example density.
    pub fn include_examples(mut self, v: ExampleDensity) -> Self {
        self.include_examples = Some(v);
        self
    }

    /// Set industry.
    pub fn industry(mut self, v: impl Into<String>) -> Self {
        self.industry = Some(v.into());
        self
    }

    /// Set length.
    pub fn length(mut self, v: ContentLength) -> Self {
        self.length = Some(v);
        self
    }

    /// Set presentation purpose.
    pub fn presentation_purpose(mut self, v: PresentationPurpose) -> Self {
        self.presentation_purpose = Some(v);
        self
    }

    /// Set target audience.
    pub fn target_audience(mut self, v: TargetAudience) -> Self {
        self.target_audience = Some(v);
        self
    }

    /// Set tone.
    pub fn tone(mut self, v: Tone) -> Self {
        self.tone = Some(v);
        self
    }

    /// Whether the patch names no field at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
