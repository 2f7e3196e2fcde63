use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Error, Result, err};

/// Colour token used by cards, badges and progress bars.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Primary,
    Success,
    Warning,
    Danger,
    Info,
}

impl Tone {
    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Primary => "primary",
            Tone::Success => "success",
            Tone::Warning => "warning",
            Tone::Danger => "danger",
            Tone::Info => "info",
        }
    }

    pub fn bg_class(self) -> String {
        format!("bg-{}", self.as_str())
    }

    pub fn text_class(self) -> String {
        format!("text-{}", self.as_str())
    }
}

/// An integer percentage in `0..=100`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Percent(u8);

impl Percent {
    pub const ZERO: Percent = Percent(0);
    pub const FULL: Percent = Percent(100);

    pub fn new(value: u8) -> Result<Self> {
        if value > 100 {
            return Err(err!("percentage out of range: {value}"));
        }
        Ok(Self(value))
    }

    /// Rounds and saturates into range. NaN maps to zero.
    pub fn clamped(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.round().clamp(0.0, 100.0) as u8)
    }

    /// `part / whole`, or zero when `whole` is zero.
    pub fn ratio(part: u32, whole: u32) -> Self {
        if whole == 0 {
            return Self::ZERO;
        }
        Self::clamped(f64::from(part) * 100.0 / f64::from(whole))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Percent {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Percent> for u8 {
    fn from(p: Percent) -> Self {
        p.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// One row of a metrics panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardMetric {
    pub label: String,
    pub value: Percent,
    #[serde(default)]
    pub tone: Tone,
}

impl DashboardMetric {
    pub fn new(label: impl Into<String>, value: Percent, tone: Tone) -> Self {
        Self {
            label: label.into(),
            value,
            tone,
        }
    }
}
