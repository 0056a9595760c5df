//! Color tokens read by the row renderer.
//!
//! The theme is passed into `render` explicitly; nothing here is global.
//! Palettes serialize with serde so a host can ship its own as JSON.

use serde::{Deserialize, Serialize};

/// Two-stop gradient, start color first. Serialized as a two-element array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gradient(pub String, pub String);

impl Gradient {
    fn new(from: &str, to: &str) -> Self {
        Self(from.to_string(), to.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gradients {
    pub surface: Gradient,
    pub success: Gradient,
    pub muted: Gradient,
    pub warning: Gradient,
    pub danger: Gradient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub mode: ThemeMode,
    pub text: String,
    pub text_muted: String,
    pub border: String,
    pub gradients: Gradients,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            text: "#1e293b".to_string(),
            text_muted: "#64748b".to_string(),
            border: "#e2e8f0".to_string(),
            gradients: Gradients {
                surface: Gradient::new("#ffffff", "#f8fafc"),
                success: Gradient::new("#10b981", "#059669"),
                muted: Gradient::new("#9ca3af", "#6b7280"),
                warning: Gradient::new("#f59e0b", "#d97706"),
                danger: Gradient::new("#ef4444", "#dc2626"),
            },
        }
    }

    pub fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            text: "#f1f5f9".to_string(),
            text_muted: "#94a3b8".to_string(),
            border: "#334155".to_string(),
            gradients: Gradients {
                surface: Gradient::new("#1e293b", "#334155"),
                success: Gradient::new("#10b981", "#059669"),
                muted: Gradient::new("#374151", "#4b5563"),
                warning: Gradient::new("#f59e0b", "#d97706"),
                danger: Gradient::new("#ef4444", "#dc2626"),
            },
        }
    }

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
