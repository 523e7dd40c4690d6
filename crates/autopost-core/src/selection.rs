//! Closed sets of generation options: selection strategy, caption style, and
//! batch size.
//!
//! Strategy and caption style each have a strict `FromStr` and a lenient
//! `from_id_or_default`; the lenient form is what user-facing code uses, since
//! an unrecognised id falls back to the default rather than failing.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionStrategy {
    /// Highest stock first. The only strategy with its own ordering.
    #[default]
    #[serde(rename = "high-stock", alias = "by-stock-descending")]
    StockDescending,
    #[serde(rename = "new-arrivals", alias = "newest-first")]
    NewestFirst,
    #[serde(rename = "margin-first", alias = "highest-margin")]
    HighestMargin,
    Mixed,
}

impl SelectionStrategy {
    pub const ALL: [SelectionStrategy; 4] = [
        SelectionStrategy::StockDescending,
        SelectionStrategy::NewestFirst,
        SelectionStrategy::HighestMargin,
        SelectionStrategy::Mixed,
    ];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            SelectionStrategy::StockDescending => "high-stock",
            SelectionStrategy::NewestFirst => "new-arrivals",
            SelectionStrategy::HighestMargin => "margin-first",
            SelectionStrategy::Mixed => "mixed",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SelectionStrategy::StockDescending => "Mayor Stock Primero",
            SelectionStrategy::NewestFirst => "Recién Llegados",
            SelectionStrategy::HighestMargin => "Mayor Margen",
            SelectionStrategy::Mixed => "Estrategia Mixta",
        }
    }

    /// `true` for strategies that currently have no ordering of their own and
    /// rank exactly like [`SelectionStrategy::StockDescending`].
    #[must_use]
    pub fn is_fallback(self) -> bool {
        !matches!(self, SelectionStrategy::StockDescending)
    }

    /// Parses `id`, returning the default strategy for unknown ids.
    #[must_use]
    pub fn from_id_or_default(id: &str) -> Self {
        id.parse().unwrap_or_default()
    }
}

impl FromStr for SelectionStrategy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high-stock" | "by-stock-descending" => Ok(SelectionStrategy::StockDescending),
            "new-arrivals" | "newest-first" => Ok(SelectionStrategy::NewestFirst),
            "margin-first" | "highest-margin" => Ok(SelectionStrategy::HighestMargin),
            "mixed" => Ok(SelectionStrategy::Mixed),
            _ => Err(CoreError::UnknownStrategy(s.to_string())),
        }
    }
}

impl std::fmt::Display for SelectionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptionStyle {
    #[default]
    Engaging,
    Minimal,
    #[serde(alias = "story")]
    Storytelling,
}

impl CaptionStyle {
    pub const ALL: [CaptionStyle; 3] = [
        CaptionStyle::Engaging,
        CaptionStyle::Minimal,
        CaptionStyle::Storytelling,
    ];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            CaptionStyle::Engaging => "engaging",
            CaptionStyle::Minimal => "minimal",
            CaptionStyle::Storytelling => "storytelling",
        }
    }

    /// Parses `id`, returning [`CaptionStyle::Engaging`] for unknown ids.
    #[must_use]
    pub fn from_id_or_default(id: &str) -> Self {
        id.parse().unwrap_or_default()
    }
}

impl FromStr for CaptionStyle {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "engaging" => Ok(CaptionStyle::Engaging),
            "minimal" => Ok(CaptionStyle::Minimal),
            "storytelling" | "story" => Ok(CaptionStyle::Storytelling),
            _ => Err(CoreError::UnknownCaptionStyle(s.to_string())),
        }
    }
}

impl std::fmt::Display for CaptionStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Number of posts per batch. Only 2, 4, 6 and 8 are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct BatchSize(usize);

impl BatchSize {
    pub const ALLOWED: [usize; 4] = [2, 4, 6, 8];

    #[must_use]
    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for BatchSize {
    fn default() -> Self {
        BatchSize(4)
    }
}

impl TryFrom<usize> for BatchSize {
    type Error = CoreError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        if Self::ALLOWED.contains(&value) {
            Ok(BatchSize(value))
        } else {
            Err(CoreError::InvalidBatchSize(value))
        }
    }
}

impl From<BatchSize> for usize {
    fn from(value: BatchSize) -> Self {
        value.0
    }
}

impl std::fmt::Display for BatchSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
