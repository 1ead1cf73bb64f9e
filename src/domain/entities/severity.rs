use std::fmt;
use std::str::FromStr;

use colored::Color;
use serde::{Deserialize, Serialize};

use crate::domain::errors::LogError;

/// Severity of a log record, least important first.
///
/// The discriminants are the ranks used for threshold filtering. Ordering is
/// always by rank, never by label text: "ERROR" sorts before "INFO"
/// alphabetically, so a lexicographic comparison would misclassify.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum Severity {
    #[default]
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
}

impl Severity {
    /// Numeric rank used for threshold comparison.
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Label printed between brackets in a rendered line.
    pub const fn label(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }

    /// Terminal color the label is painted with.
    pub const fn color(self) -> Color {
        match self {
            Severity::Debug => Color::BrightBlack,
            Severity::Info => Color::Cyan,
            Severity::Warn => Color::Yellow,
            Severity::Error => Color::Red,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Severity {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(Severity::Debug),
            "INFO" => Ok(Severity::Info),
            "WARN" => Ok(Severity::Warn),
            "ERROR" => Ok(Severity::Error),
            other => Err(LogError::UnknownLevel(other.to_string())),
        }
    }
}
