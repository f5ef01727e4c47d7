//! Layout customization sent with the rendering request.

use serde::{Deserialize, Serialize};

wire_enum! {
    /// Slide template the service renders with.
    Theme, "theme" {
        Madison => "madison", "Madison",
        #[default]
        MadisonLilac => "madison-lilac", "Madison Lilac",
        BlueSpheres => "blue-spheres", "Blue Spheres",
        IonBoardroom => "ion-boardroom", "Ion Boardroom",
        Bohemian => "bohemian", "Bohemian",
        CanvaPortfolio => "canva-portfolio", "Canva Portfolio",
        DesignerTemplate => "designer-template", "Designer Template",
        DividendNavy => "dividend-navy", "Dividend Navy",
        GradientPink => "gradient-pink", "Gradient Pink",
        Holographic => "holographic", "Holographic",
        MeshBlack => "mesh-black", "Mesh Black",
        Nature => "nature", "Nature",
        SalesBlue => "sales-blue", "Sales Blue",
        SlideBlue => "slide-blue", "Slide Blue",
    }
}

wire_enum! {
    /// Requested number of slides.
    SlideRange, "slide_range" {
        ThreeToFive => "3-5", "3-5 slides",
        SixToNine => "6-9", "6-9 slides",
        #[default]
        TenToFifteen => "10-15", "10-15 slides",
        SixteenPlus => "16+", "16+ slides",
    }
}

wire_enum! {
    /// Balance between text and imagery.
    VisualPreference, "visual_preference" {
        Minimal => "minimal", "Minimal & Clean",
        VisualHeavy => "visual_heavy", "Visual Heavy",
        #[default]
        Balanced => "balanced", "Balanced",
    }
}

/// Options steering slide rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutCustomization {
    pub slide_range: SlideRange,
    pub visual_preference: VisualPreference,
    pub theme: Theme,
}

impl LayoutCustomization {
    /// Create the default layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a partial update; fields the patch leaves empty are kept.
    pub fn merge(&mut self, patch: LayoutCustomizationPatch) {
        if let Some(v) = patch.slide_range {
            self.slide_range = v;
        }
        if let Some(v) = patch.visual_preference {
            self.visual_preference = v;
        }
        if let Some(v) = patch.theme {
            self.theme = v;
        }
    }
}

/// Partial update for [`LayoutCustomization`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutCustomizationPatch {
    pub slide_range: Option<SlideRange>,
    pub visual_preference: Option<VisualPreference>,
    pub theme: Option<Theme>,
}

impl LayoutCustomizationPatch {
    /// Create an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set slide range.
    pub fn slide_range(mut self, v: SlideRange) -> Self {
        self.slide_range = Some(v);
        self
    }

    /// Set visual preference.
    pub fn visual_preference(mut self, v: VisualPreference) -> Self {
        self.visual_preference = Some(v);
        self
    }

    /// Set theme.
    pub fn theme(mut self, v: Theme) -> Self {
        self.theme = Some(v);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let layout = LayoutCustomization::default();
        assert_eq!(layout.slide_range, SlideRange::TenToFifteen);
        assert_eq!(layout.visual_preference, VisualPreference::Balanced);
        assert_eq!(layout.theme, Theme::MadisonLilac);
    }

    #[test]
    fn test_theme_catalog() {
        assert_eq!(Theme::ALL.len(), 14);
        assert_eq!("madison".parse::<Theme>().unwrap(), Theme::Madison);
        assert_eq!(Theme::IonBoardroom.label(), "Ion Boardroom");
        assert!("papyrus".parse::<Theme>().is_err());
    }

    #[test]
    fn test_merge_layout() {
        let mut layout = LayoutCustomization::default();
        layout.merge(LayoutCustomizationPatch::new().theme(Theme::Madison));
        assert_eq!(layout.theme, Theme::Madison);
        assert_eq!(layout.slide_range, SlideRange::TenToFifteen);
        assert_eq!(layout.visual_preference, VisualPreference::Balanced);
    }

    #[test]
    fn test_layout_wire_format() {
        let layout = LayoutCustomization {
            slide_range: SlideRange::SixteenPlus,
            visual_preference: VisualPreference::VisualHeavy,
            theme: Theme::SlideBlue,
        };
        let json = serde_json::to_value(layout).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "slide_range": "16+",
                "visual_preference": "visual_heavy",
                "theme": "slide-blue"
            })
        );
    }
}
