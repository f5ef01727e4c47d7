//! Copy-on-write holder of the wizard session.

use std::sync::Arc;

use crate::model::{ContentCustomizationPatch, LayoutCustomizationPatch, Session, Step};

/// Owns the [`Session`] and exposes its setters.
///
/// Every setter replaces the whole state: if a snapshot taken through
/// [`SessionStore::snapshot`] is still alive, the store clones before
/// writing, so earlier snapshots never observe later changes.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    state: Arc<Session>,
}

impl SessionStore {
    /// Create a store holding the default session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the current state.
    pub fn get(&self) -> &Session {
        &self.state
    }

    /// Share the current state.
    pub fn snapshot(&self) -> Arc<Session> {
        Arc::clone(&self.state)
    }

    fn update(&mut self, f: impl FnOnce(&mut Session)) {
        f(Arc::make_mut(&mut self.state));
    }

    /// Replace the topic.
    pub fn update_topic(&mut self, topic: impl Into<String>) {
        let topic = topic.into();
        self.update(|s| s.topic = topic);
    }

    /// Merge a partial content customization.
    pub fn update_content_customization(&mut self, patch: ContentCustomizationPatch) {
        self.update(|s| s.content_customization.merge(patch));
    }

    /// Store freshly generated content; the editable copy starts out identical.
    pub fn update_generated_content(&mut self, content: impl Into<String>) {
        let content = content.into();
        self.update(|s| {
            s.edited_content = content.clone();
            s.generated_content = content;
        });
    }

    /// Replace the edited content.
    pub fn update_edited_content(&mut self, content: impl Into<String>) {
        let content = content.into();
        self.update(|s| s.edited_content = content);
    }

    /// Merge a partial layout customization.
    pub fn update_layout_customization(&mut self, patch: LayoutCustomizationPatch) {
        self.update(|s| s.layout_customization.merge(patch));
    }

    /// Record the service-side path of the rendered file.
    pub fn update_output_file(&mut self, file: impl Into<String>) {
        let file = file.into();
        self.update(|s| s.output_file = file);
    }

    /// Move to a step.
    pub fn set_current_step(&mut self, step: Step) {
        self.update(|s| s.current_step = step);
    }

    /// Set or clear the loading flag.
    pub fn set_loading(&mut self, loading: bool) {
        self.update(|s| s.is_loading = loading);
    }

    /// Set or clear the error message.
    pub fn set_error(&mut self, error: Option<String>) {
        self.update(|s| s.error = error);
    }

    /// Discard everything and start over.
    pub fn reset(&mut self) {
        self.state = Arc::new(Session::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        ContentCustomization, DetailLevel, LayoutCustomization, SlideRange, Theme, Tone,
    };

    #[test]
    fn test_snapshot_is_unaffected_by_later_updates() {
        let mut store = SessionStore::new();
        store.update_topic("Rust ownership");
        let before = store.snapshot();

        store.update_topic("Something else");

        assert_eq!(before.topic, "Rust ownership");
        assert_eq!(store.get().topic, "Something else");
    }

    #[test]
    fn test_content_patch_preserves_other_fields() {
        let mut store = SessionStore::new();
        store.update_topic("Databases");
        store.update_content_customization(
            ContentCustomizationPatch::new().detail_level(DetailLevel::DeepDive),
        );
        store.update_content_customization(ContentCustomizationPatch::new().tone(Tone::Academic));

        let s = store.get();
        assert_eq!(s.topic, "Databases");
        assert_eq!(
            s.content_customization,
            ContentCustomization {
                detail_level: DetailLevel::DeepDive,
                tone: Tone::Academic,
                ..ContentCustomization::default()
            }
        );
        assert_eq!(s.layout_customization, LayoutCustomization::default());
    }

    #[test]
    fn test_layout_patch_preserves_other_fields() {
        let mut store = SessionStore::new();
        store.update_layout_customization(LayoutCustomizationPatch::new().theme(Theme::Nature));
        store.update_layout_customization(
            LayoutCustomizationPatch::new().slide_range(SlideRange::ThreeToFive),
        );

        let layout = store.get().layout_customization;
        assert_eq!(layout.theme, Theme::Nature);
        assert_eq!(layout.slide_range, SlideRange::ThreeToFive);
        assert_eq!(layout.visual_preference, Default::default());
    }

    #[test]
    fn test_generated_content_initialises_edited_content() {
        let mut store = SessionStore::new();
        store.update_generated_content("# Slides");
        assert_eq!(store.get().generated_content, "# Slides");
        assert_eq!(store.get().edited_content, "# Slides");

        store.update_edited_content("# Slides (v2)");
        assert_eq!(store.get().generated_content, "# Slides");
        assert_eq!(store.get().edited_content, "# Slides (v2)");
    }

    #[test]
    fn test_reset() {
        let mut store = SessionStore::new();
        store.update_topic("x");
        store.set_current_step(Step::Design);
        store.set_error(Some("boom".into()));
        store.set_loading(true);
        store.reset();
        assert_eq!(*store.get(), Session::default());
    }
}
