//! Phase-to-style lookup.
//!
//! The engine only reports abstract phases; display classes live here so
//! presentation can swap them without touching schedule logic.

use serde::{Deserialize, Serialize};

use crate::models::PhaseClassification;

/// Light or dark presentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// A pair of style classes, one per theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemedClass {
    pub light: String,
    pub dark: String,
}

impl ThemedClass {
    pub fn new(light: impl Into<String>, dark: impl Into<String>) -> Self {
        Self {
            light: light.into(),
            dark: dark.into(),
        }
    }

    #[inline]
    pub fn for_theme(&self, theme: Theme) -> &str {
        match theme {
            Theme::Light => &self.light,
            Theme::Dark => &self.dark,
        }
    }
}

/// Style classes for classified days.
///
/// Unclassified days never get a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhasePalette {
    pub active: ThemedClass,
    pub rest: ThemedClass,
}

impl Default for PhasePalette {
    fn default() -> Self {
        Self {
            active: ThemedClass::new("bg-green-200", "bg-green-800"),
            rest: ThemedClass::new("bg-red-200", "bg-red-800"),
        }
    }
}

impl PhasePalette {
    /// Replaces the active-day classes.
    pub fn with_active(mut self, light: impl Into<String>, dark: impl Into<String>) -> Self {
        self.active = ThemedClass::new(light, dark);
        self
    }

    /// Replaces the rest-day classes.
    pub fn with_rest(mut self, light: impl Into<String>, dark: impl Into<String>) -> Self {
        self.rest = ThemedClass::new(light, dark);
        self
    }

    /// Style class for a phase; empty for unclassified days.
    pub fn class_for(&self, phase: PhaseClassification, theme: Theme) -> &str {
        match phase {
            PhaseClassification::Active => self.active.for_theme(theme),
            PhaseClassification::Rest => self.rest.for_theme(theme),
            PhaseClassification::Unclassified => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_classes() {
        let palette = PhasePalette::default();
        assert_eq!(palette.class_for(PhaseClassification::Active, Theme::Light), "bg-green-200");
        assert_eq!(palette.class_for(PhaseClassification::Active, Theme::Dark), "bg-green-800");
        assert_eq!(palette.class_for(PhaseClassification::Rest, Theme::Light), "bg-red-200");
        assert_eq!(palette.class_for(PhaseClassification::Rest, Theme::Dark), "bg-red-800");
        assert_eq!(palette.class_for(PhaseClassification::Unclassified, Theme::Dark), "");
    }

    #[test]
    fn test_custom_palette() {
        let palette = PhasePalette::default().with_rest("rest-l", "rest-d");
        assert_eq!(palette.class_for(PhaseClassification::Rest, Theme::Dark), "rest-d");
        assert_eq!(palette.class_for(PhaseClassification::Active, Theme::Light), "bg-green-200");
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::default(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }
}
