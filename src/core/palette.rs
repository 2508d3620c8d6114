//! Theme palettes for a center's customer-facing site
//!
//! A palette is either one of four named presets or a custom set of four
//! colours. Both resolve through [`resolve_palette`] into the same
//! [`PaletteDisplay`] so every renderer treats them alike.

use serde::{Deserialize, Serialize};

/// Named palette presets
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteKey {
    Dark,
    Light,
    Blue,
    Purple,
}

impl PaletteKey {
    pub const ALL: [PaletteKey; 4] = [
        PaletteKey::Dark,
        PaletteKey::Light,
        PaletteKey::Blue,
        PaletteKey::Purple,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaletteKey::Dark => "dark",
            PaletteKey::Light => "light",
            PaletteKey::Blue => "blue",
            PaletteKey::Purple => "purple",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "dark" => Some(PaletteKey::Dark),
            "light" => Some(PaletteKey::Light),
            "blue" => Some(PaletteKey::Blue),
            "purple" => Some(PaletteKey::Purple),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaletteKey::Dark => "Dark Mode",
            PaletteKey::Light => "Light Mode",
            PaletteKey::Blue => "Ocean Blue",
            PaletteKey::Purple => "Creative Purple",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PaletteKey::Dark => "Professional dark theme",
            PaletteKey::Light => "Modern light theme",
            PaletteKey::Blue => "Academic blue theme",
            PaletteKey::Purple => "Vibrant learning theme",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            PaletteKey::Dark => "moon",
            PaletteKey::Light => "sun",
            PaletteKey::Blue => "droplets",
            PaletteKey::Purple => "flame",
        }
    }

    fn tokens(&self) -> PresetTokens {
        match self {
            PaletteKey::Dark => PresetTokens {
                gradient: &["#0f172a", "#1e293b"],
                card: "background-color: rgba(30, 41, 59, 0.8); border: 1px solid rgba(96, 165, 250, 0.1);",
                text: "#f1f5f9",
                accent: "#60a5fa",
            },
            PaletteKey::Light => PresetTokens {
                gradient: &["#f8fafc", "#eff6ff", "#e0e7ff"],
                card: "background-color: rgba(255, 255, 255, 0.95); border: 1px solid rgba(226, 232, 240, 0.5);",
                text: "#334155",
                accent: "#2563eb",
            },
            PaletteKey::Blue => PresetTokens {
                gradient: &["#0a2540", "#0f3556", "#113a5d"],
                card: "background-color: rgba(255, 255, 255, 0.05); border: 1px solid rgba(34, 211, 238, 0.1);",
                text: "#e6f7ff",
                accent: "#4dd0e1",
            },
            PaletteKey::Purple => PresetTokens {
                gradient: &["#2a103d", "#341449", "#3b1b52"],
                card: "background-color: rgba(255, 255, 255, 0.05); border: 1px solid rgba(244, 114, 182, 0.1);",
                text: "#fdf4ff",
                accent: "#e040fb",
            },
        }
    }
}

impl std::fmt::Display for PaletteKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

struct PresetTokens {
    gradient: &'static [&'static str],
    card: &'static str,
    text: &'static str,
    accent: &'static str,
}

/// Card style used by custom palettes
const CUSTOM_CARD_STYLE: &str =
    "background-color: rgba(255, 255, 255, 0.05); border: 1px solid rgba(96, 165, 250, 0.1);";

/// The four colour slots of a custom palette
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorRole {
    Primary,
    Secondary,
    Accent,
    Text,
}

impl ColorRole {
    pub const ALL: [ColorRole; 4] = [
        ColorRole::Primary,
        ColorRole::Secondary,
        ColorRole::Accent,
        ColorRole::Text,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorRole::Primary => "primary",
            ColorRole::Secondary => "secondary",
            ColorRole::Accent => "accent",
            ColorRole::Text => "text",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ColorRole::Primary => "Primary Color",
            ColorRole::Secondary => "Secondary Color",
            ColorRole::Accent => "Accent Color",
            ColorRole::Text => "Text Color",
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PaletteError {
    #[error("'{value}' is not a valid {} colour (expected #rrggbb)", .role.as_str())]
    InvalidColor { role: ColorRole, value: String },
}

/// Four `#rrggbb` colours backing a custom palette.
///
/// Only built through [`ColorSet::new`] or [`ColorSet::with_color`], so every
/// value in it is a valid colour. Deserializing goes through the same checks.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawColorSet")]
pub struct ColorSet {
    primary: String,
    secondary: String,
    accent: String,
    text: String,
}

/// Unchecked wire shape of a [`ColorSet`]
#[derive(Deserialize)]
struct RawColorSet {
    primary: String,
    secondary: String,
    accent: String,
    text: String,
}

impl TryFrom<RawColorSet> for ColorSet {
    type Error = PaletteError;

    fn try_from(raw: RawColorSet) -> Result<Self, Self::Error> {
        ColorSet::new(&raw.primary, &raw.secondary, &raw.accent, &raw.text)
    }
}

impl Default for ColorSet {
    fn default() -> Self {
        Self {
            primary: "#1a1a1a".to_string(),
            secondary: "#2a2a2a".to_string(),
            accent: "#6366f1".to_string(),
            text: "#ffffff".to_string(),
        }
    }
}

impl ColorSet {
    /// Build a colour set, checking every value
    pub fn new(
        primary: &str,
        secondary: &str,
        accent: &str,
        text: &str,
    ) -> Result<Self, PaletteError> {
        Self::default()
            .with_color(ColorRole::Primary, primary)?
            .with_color(ColorRole::Secondary, secondary)?
            .with_color(ColorRole::Accent, accent)?
            .with_color(ColorRole::Text, text)
    }

    pub fn get(&self, role: ColorRole) -> &str {
        match role {
            ColorRole::Primary => &self.primary,
            ColorRole::Secondary => &self.secondary,
            ColorRole::Accent => &self.accent,
            ColorRole::Text => &self.text,
        }
    }

    /// Replace one colour. Values are normalized to lowercase.
    pub fn with_color(mut self, role: ColorRole, value: &str) -> Result<Self, PaletteError> {
        let value = value.trim();
        if !is_hex_color(value) {
            return Err(PaletteError::InvalidColor {
                role,
                value: value.to_string(),
            });
        }
        let slot = match role {
            ColorRole::Primary => &mut self.primary,
            ColorRole::Secondary => &mut self.secondary,
            ColorRole::Accent => &mut self.accent,
            ColorRole::Text => &mut self.text,
        };
        *slot = value.to_ascii_lowercase();
        Ok(self)
    }
}

/// `#rrggbb`, the format produced by `<input type="color">`
pub fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// A palette reference stored in the form
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaletteChoice {
    Named(PaletteKey),
    Custom(ColorSet),
}

impl PaletteChoice {
    pub fn is_custom(&self) -> bool {
        matches!(self, PaletteChoice::Custom(_))
    }

    pub fn key(&self) -> Option<PaletteKey> {
        match self {
            PaletteChoice::Named(key) => Some(*key),
            PaletteChoice::Custom(_) => None,
        }
    }
}

/// Display tokens for a resolved palette
#[derive(Clone, Debug, PartialEq)]
pub struct PaletteDisplay {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    /// Gradient stops, top-left to bottom-right
    pub gradient: Vec<String>,
    /// Inline style for cards drawn on top of the background
    pub card_style: &'static str,
    pub text_color: String,
    pub accent_color: String,
}

impl PaletteDisplay {
    /// CSS `background` value for the page behind the preview
    pub fn background_css(&self) -> String {
        format!("linear-gradient(to bottom right, {})", self.gradient.join(", "))
    }

    /// Swatches shown in summaries: the gradient stops followed by the accent
    pub fn swatches(&self) -> Vec<String> {
        let mut swatches = self.gradient.clone();
        swatches.push(self.accent_color.clone());
        swatches
    }
}

/// Resolve either palette variant into display tokens
pub fn resolve_palette(choice: &PaletteChoice) -> PaletteDisplay {
    match choice {
        PaletteChoice::Named(key) => {
            let tokens = key.tokens();
            PaletteDisplay {
                name: key.display_name(),
                description: key.description(),
                icon: key.icon(),
                gradient: tokens.gradient.iter().map(|c| c.to_string()).collect(),
                card_style: tokens.card,
                text_color: tokens.text.to_string(),
                accent_color: tokens.accent.to_string(),
            }
        }
        PaletteChoice::Custom(colors) => PaletteDisplay {
            name: "Custom Theme",
            description: "Custom theme based on your selection",
            icon: "palette",
            gradient: vec![colors.primary.clone(), colors.secondary.clone()],
            card_style: CUSTOM_CARD_STYLE,
            text_color: colors.text.clone(),
            accent_color: colors.accent.clone(),
        },
    }
}
