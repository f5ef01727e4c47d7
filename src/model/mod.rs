//! Wizard data model.
//!
//! This module defines the state the wizard collects: the session itself,
//! the content customization sent with the generation request and the
//! layout customization sent with the rendering request. Every enumerated
//! option serializes to the exact wire value the service expects.

/// Declares a closed set of options with a wire value and a display label.
///
/// Generates `ALL`, `as_str`, `label`, `Display` and a case-insensitive
/// `FromStr` that reports unknown input as `Error::InvalidValue`.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal, $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, Default,
            serde::Serialize, serde::Deserialize,
        )]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Every option, in presentation order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Value sent over the wire.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }

            /// Human-friendly label.
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = crate::error::Error;

            fn from_str(s: &str) -> crate::error::Result<Self> {
                let needle = s.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(needle))
                    .ok_or_else(|| crate::error::Error::invalid_value($field, needle))
            }
        }
    };
}

mod customization;
mod layout;
mod session;

pub use customization::{
    ContentCustomization, ContentCustomizationPatch, ContentLength, DetailLevel, EngagementLevel,
    ExampleDensity, PresentationPurpose, TargetAudience, Tone,
};
pub use layout::{LayoutCustomization, LayoutCustomizationPatch, SlideRange, Theme, VisualPreference};
pub use session::{Session, Step};
