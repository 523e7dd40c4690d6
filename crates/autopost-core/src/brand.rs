use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, CoreError};

/// Communication tone of the brand. Serialized with the dashboard labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tone {
    #[serde(rename = "Profesional")]
    Professional,
    Casual,
    #[serde(rename = "Elegante")]
    Elegant,
    #[serde(rename = "Juvenil")]
    Youthful,
    #[serde(rename = "Minimalista")]
    Minimalist,
    Cyberpunk,
    #[default]
    #[serde(rename = "Audaz")]
    Bold,
    #[serde(rename = "Sofisticado")]
    Sophisticated,
}

impl Tone {
    pub const ALL: [Tone; 8] = [
        Tone::Professional,
        Tone::Casual,
        Tone::Elegant,
        Tone::Youthful,
        Tone::Minimalist,
        Tone::Cyberpunk,
        Tone::Bold,
        Tone::Sophisticated,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Tone::Professional => "Profesional",
            Tone::Casual => "Casual",
            Tone::Elegant => "Elegante",
            Tone::Youthful => "Juvenil",
            Tone::Minimalist => "Minimalista",
            Tone::Cyberpunk => "Cyberpunk",
            Tone::Bold => "Audaz",
            Tone::Sophisticated => "Sofisticado",
        }
    }
}

impl FromStr for Tone {
    type Err = CoreError;

    /// Accepts the dashboard label or the English variant name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| {
                t.label().eq_ignore_ascii_case(wanted)
                    || format!("{t:?}").eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| CoreError::UnknownTone(s.to_string()))
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Brand identity used to theme posts.
///
/// Caption synthesis reads only `brand_name` and `tone`; the colors and fonts
/// are passed through to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandProfile {
    pub brand_name: String,
    pub tagline: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
    pub background_color: String,
    pub font_primary: String,
    pub font_secondary: String,
    pub tone: Tone,
}

impl Default for BrandProfile {
    fn default() -> Self {
        ThemePreset::Nova.profile()
    }
}

/// Built-in themes. Both drive the same engine; they differ only in palette,
/// typography and tone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ThemePreset {
    #[default]
    Nova,
    Neon,
}

impl ThemePreset {
    #[must_use]
    pub fn profile(self) -> BrandProfile {
        let (primary, secondary, accent, background, font_primary, font_secondary, tone) =
            match self {
                ThemePreset::Nova => (
                    "#6c5ce7", "#a29bfe", "#fd79a8", "#0d0d0d", "Sora", "DM Sans", Tone::Bold,
                ),
                ThemePreset::Neon => (
                    "#00f3ff",
                    "#bc13fe",
                    "#ff0055",
                    "#050510",
                    "Orbitron",
                    "Inter",
                    Tone::Cyberpunk,
                ),
            };

        BrandProfile {
            brand_name: "NOVA".to_string(),
            tagline: "Define tu estilo".to_string(),
            primary_color: primary.to_string(),
            secondary_color: secondary.to_string(),
            accent_color: accent.to_string(),
            background_color: background.to_string(),
            font_primary: font_primary.to_string(),
            font_secondary: font_secondary.to_string(),
            tone,
        }
    }
}

impl FromStr for ThemePreset {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nova" => Ok(ThemePreset::Nova),
            "neon" | "cyberpunk" => Ok(ThemePreset::Neon),
            _ => Err(CoreError::UnknownThemePreset(s.to_string())),
        }
    }
}

/// Load and validate a brand profile from a YAML file.
///
/// Fields missing from the file keep their [`ThemePreset::Nova`] defaults.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_brand_profile(path: &Path) -> Result<BrandProfile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileIo {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_brand_profile(&content)
}

/// Parse and validate a brand profile from YAML text.
///
/// # Errors
///
/// Returns `ConfigError` if the text is not valid YAML or a field is blank.
pub fn parse_brand_profile(content: &str) -> Result<BrandProfile, ConfigError> {
    let profile: BrandProfile = serde_yaml::from_str(content)?;
    validate_brand_profile(&profile)?;
    Ok(profile)
}

fn validate_brand_profile(profile: &BrandProfile) -> Result<(), ConfigError> {
    let fields = [
        ("brand_name", &profile.brand_name),
        ("tagline", &profile.tagline),
        ("primary_color", &profile.primary_color),
        ("secondary_color", &profile.secondary_color),
        ("accent_color", &profile.accent_color),
        ("background_color", &profile.background_color),
        ("font_primary", &profile.font_primary),
        ("font_secondary", &profile.font_secondary),
    ];

    for (name, value) in fields {
        if value.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "brand profile field '{name}' must be non-empty"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "brand_test.rs"]
mod tests;
