//! User Preferences
//!
//! The visitor profile, the store that merges patches into it, and the
//! first-visit capture dialog that fills it in.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How much motion and decoration the visitor wants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Experience {
    #[default]
    Full,
    Moderate,
    Simple,
}

impl Experience {
    pub const ALL: [Experience; 3] = [Experience::Full, Experience::Moderate, Experience::Simple];

    pub fn as_str(&self) -> &'static str {
        match self {
            Experience::Full => "full",
            Experience::Moderate => "moderate",
            Experience::Simple => "simple",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Experience::Full => "Full Experience",
            Experience::Moderate => "Moderate",
            Experience::Simple => "Simple",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    #[default]
    Neutral,
    Relaxed,
    Excited,
    Happy,
    Focused,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::Neutral,
        Mood::Relaxed,
        Mood::Excited,
        Mood::Happy,
        Mood::Focused,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Neutral => "neutral",
            Mood::Relaxed => "relaxed",
            Mood::Excited => "excited",
            Mood::Happy => "happy",
            Mood::Focused => "focused",
        }
    }

    /// Capitalized chip label
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Neutral => "Neutral",
            Mood::Relaxed => "Relaxed",
            Mood::Excited => "Excited",
            Mood::Happy => "Happy",
            Mood::Focused => "Focused",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visitor profile
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub experience: Experience,
    #[serde(default)]
    pub mood: Mood,
    #[serde(default)]
    pub play_music: bool,
}

impl UserPreferences {
    /// Whether the capture dialog still has to ask for a name
    pub fn needs_capture(&self) -> bool {
        self.name.is_empty()
    }

    /// Apply a patch; fields absent from the patch keep their value
    pub fn merged(mut self, patch: PreferencesPatch) -> Self {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(experience) = patch.experience {
            self.experience = experience;
        }
        if let Some(mood) = patch.mood {
            self.mood = mood;
        }
        if let Some(play_music) = patch.play_music {
            self.play_music = play_music;
        }
        self
    }
}

/// Partial preferences record
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<Experience>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub play_music: Option<bool>,
}

impl PreferencesPatch {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn experience(mut self, experience: Experience) -> Self {
        self.experience = Some(experience);
        self
    }

    pub fn mood(mut self, mood: Mood) -> Self {
        self.mood = Some(mood);
        self
    }

    pub fn play_music(mut self, play_music: bool) -> Self {
        self.play_music = Some(play_music);
        self
    }
}

impl From<UserPreferences> for PreferencesPatch {
    fn from(prefs: UserPreferences) -> Self {
        Self {
            name: Some(prefs.name),
            experience: Some(prefs.experience),
            mood: Some(prefs.mood),
            play_music: Some(prefs.play_music),
        }
    }
}

/// Session-scoped preference state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PreferenceStore {
    current: UserPreferences,
}

impl PreferenceStore {
    pub fn new(initial: UserPreferences) -> Self {
        Self { current: initial }
    }

    pub fn get(&self) -> &UserPreferences {
        &self.current
    }

    /// Shallow-merge a patch and return the new snapshot
    pub fn update(&mut self, patch: PreferencesPatch) -> UserPreferences {
        self.current = std::mem::take(&mut self.current).merged(patch);
        tracing::debug!(
            experience = self.current.experience.as_str(),
            mood = %self.current.mood,
            play_music = self.current.play_music,
            "Preferences updated"
        );
        self.current.clone()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogVisibility {
    Visible,
    Hidden,
}

/// First-visit preference capture dialog
///
/// Edits a draft seeded from the current preferences; only a successful
/// submit writes back to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceDialog {
    visibility: DialogVisibility,
    draft: UserPreferences,
}

impl PreferenceDialog {
    /// Visible iff the visitor has no name yet
    pub fn for_preferences(prefs: &UserPreferences) -> Self {
        let visibility = if prefs.needs_capture() {
            DialogVisibility::Visible
        } else {
            DialogVisibility::Hidden
        };
        Self {
            visibility,
            draft: prefs.clone(),
        }
    }

    pub fn visibility(&self) -> DialogVisibility {
        self.visibility
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == DialogVisibility::Visible
    }

    pub fn draft(&self) -> &UserPreferences {
        &self.draft
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn choose_experience(&mut self, experience: Experience) {
        self.draft.experience = experience;
    }

    pub fn choose_mood(&mut self, mood: Mood) {
        self.draft.mood = mood;
    }

    pub fn toggle_music(&mut self) {
        self.draft.play_music = !self.draft.play_music;
    }

    /// Submission is disabled while the trimmed name is empty
    pub fn can_submit(&self) -> bool {
        !self.draft.name.trim().is_empty()
    }

    /// Dismiss without saving
    pub fn close(&mut self) {
        self.visibility = DialogVisibility::Hidden;
    }

    /// Write the draft into the store and hide
    ///
    /// Returns `None` and stays open when the name is blank.
    pub fn submit(&mut self, store: &mut PreferenceStore) -> Option<UserPreferences> {
        if !self.can_submit() {
            return None;
        }
        let updated = store.update(self.draft.clone().into());
        self.visibility = DialogVisibility::Hidden;
        Some(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let prefs = PreferenceStore::default().get().clone();
        assert_eq!(prefs.name, "");
        assert_eq!(prefs.experience, Experience::Full);
        assert_eq!(prefs.mood, Mood::Neutral);
        assert!(!prefs.play_music);
    }

    #[test]
    fn test_update_is_shallow_left_biased_merge() {
        let mut store = PreferenceStore::new(UserPreferences {
            name: String::new(),
            experience: Experience::Moderate,
            mood: Mood::Neutral,
            play_music: true,
        });
        let original = store.get().clone();

        store.update(PreferencesPatch::default().mood(Mood::Happy));
        let result = store.update(PreferencesPatch::default().name("A"));

        assert_eq!(
            result,
            UserPreferences {
                mood: Mood::Happy,
                name: "A".to_string(),
                ..original
            }
        );
    }

    #[test]
    fn test_empty_patch_changes_nothing() {
        let mut store = PreferenceStore::default();
        let before = store.get().clone();
        assert_eq!(store.update(PreferencesPatch::default()), before);
    }

    #[test]
    fn test_dialog_visibility_follows_name() {
        let empty = UserPreferences::default();
        assert!(PreferenceDialog::for_preferences(&empty).is_visible());

        let named = UserPreferences {
            name: "Ada".to_string(),
            ..Default::default()
        };
        assert_eq!(
            PreferenceDialog::for_preferences(&named).visibility(),
            DialogVisibility::Hidden
        );
    }

    #[test]
    fn test_dialog_blocks_blank_name() {
        let mut store = PreferenceStore::default();
        let mut dialog = PreferenceDialog::for_preferences(store.get());

        dialog.set_name("   ");
        assert!(!dialog.can_submit());
        assert!(dialog.submit(&mut store).is_none());
        assert!(dialog.is_visible());
        assert_eq!(store.get().name, "");
    }

    #[test]
    fn test_dialog_submit_writes_draft() {
        let mut store = PreferenceStore::default();
        let mut dialog = PreferenceDialog::for_preferences(store.get());

        dialog.set_name("Grace");
        dialog.choose_experience(Experience::Simple);
        dialog.choose_mood(Mood::Focused);
        dialog.toggle_music();

        let saved = dialog.submit(&mut store).unwrap();
        assert!(!dialog.is_visible());
        assert_eq!(saved.name, "Grace");
        assert_eq!(saved.experience, Experience::Simple);
        assert_eq!(saved.mood, Mood::Focused);
        assert!(saved.play_music);
        assert_eq!(store.get(), &saved);
    }

    #[test]
    fn test_dialog_close_discards_draft() {
        let store = PreferenceStore::default();
        let mut dialog = PreferenceDialog::for_preferences(store.get());
        dialog.set_name("Linus");
        dialog.close();

        assert!(!dialog.is_visible());
        assert!(store.get().name.is_empty());
    }

    #[test]
    fn test_serde_uses_camel_case() {
        let prefs = UserPreferences {
            name: "A".to_string(),
            play_music: true,
            ..Default::default()
        };
        let json = serde_json::to_value(&prefs).unwrap();
        assert_eq!(json["playMusic"], true);
        assert_eq!(json["experience"], "full");

        let parsed: UserPreferences = serde_json::from_str(r#"{"name":"B"}"#).unwrap();
        assert_eq!(parsed.mood, Mood::Neutral);
    }
}
