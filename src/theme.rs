//! Theme Store
//!
//! Holds the active light/dark token and maps it to the color values every
//! themed element renders with.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Visual mode of the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeToken {
    #[default]
    Light,
    Dark,
}

impl ThemeToken {
    /// The opposite token
    pub fn toggled(self) -> Self {
        match self {
            ThemeToken::Light => ThemeToken::Dark,
            ThemeToken::Dark => ThemeToken::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeToken::Light => "light",
            ThemeToken::Dark => "dark",
        }
    }

    /// Color values for this token
    pub fn values(self) -> &'static ThemeValues {
        match self {
            ThemeToken::Light => &LIGHT,
            ThemeToken::Dark => &DARK,
        }
    }
}

impl fmt::Display for ThemeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


/// Color, shadow and background values a token resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeValues {
    pub background: &'static str,
    pub text: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub card: &'static str,
    pub border: &'static str,
    pub shadow: &'static str,
}

pub const LIGHT: ThemeValues = ThemeValues {
    background: "#f8f9fa",
    text: "#212529",
    primary: "#6c63ff",
    secondary: "#ff6584",
    card: "#ffffff",
    border: "#dee2e6",
    shadow: "0 4px 20px rgba(0, 0, 0, 0.08)",
};

pub const DARK: ThemeValues = ThemeValues {
    background: "#121212",
    text: "#e9ecef",
    primary: "#8c85ff",
    secondary: "#ff7a95",
    card: "#1e1e1e",
    border: "#343a40",
    shadow: "0 4px 20px rgba(0, 0, 0, 0.45)",
};

impl ThemeValues {
    /// Render as CSS custom properties for an inline `style` attribute
    pub fn css_variables(&self) -> String {
        format!(
            "--color-background: {}; --color-text: {}; --color-primary: {}; \
             --color-secondary: {}; --color-card: {}; --color-border: {}; --shadow: {};",
            self.background,
            self.text,
            self.primary,
            self.secondary,
            self.card,
            self.border,
            self.shadow
        )
    }
}

/// Session-scoped theme state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeStore {
    token: ThemeToken,
}

impl ThemeStore {
    pub fn new(token: ThemeToken) -> Self {
        Self { token }
    }

    pub fn get(&self) -> ThemeToken {
        self.token
    }

    /// Flip light and dark, returning the new token
    pub fn toggle(&mut self) -> ThemeToken {
        self.token = self.token.toggled();
        tracing::debug!(theme = %self.token, "Theme toggled");
        self.token
    }

    pub fn values(&self) -> &'static ThemeValues {
        self.token.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_light() {
        assert_eq!(ThemeStore::default().get(), ThemeToken::Light);
    }

    #[test]
    fn test_toggle_is_involution() {
        let mut store = ThemeStore::new(ThemeToken::Light);
        assert_eq!(store.toggle(), ThemeToken::Dark);
        assert_eq!(store.toggle(), ThemeToken::Light);

        for token in [ThemeToken::Light, ThemeToken::Dark] {
            assert_eq!(token.toggled().toggled(), token);
        }
    }

    #[test]
    fn test_values_follow_token() {
        let mut store = ThemeStore::default();
        assert_eq!(store.values(), &LIGHT);
        store.toggle();
        assert_eq!(store.values(), &DARK);
        assert!(store.values().css_variables().contains("--color-primary: #8c85ff"));
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&ThemeToken::Light).unwrap(), "\"light\"");
        assert_eq!(
            serde_json::from_str::<ThemeToken>("\"dark\"").unwrap(),
            ThemeToken::Dark
        );
    }
}
