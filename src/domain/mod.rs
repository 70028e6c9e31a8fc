//! Domain primitives shared by the aggregation and re-pagination services.
//!
//! Everything here is pure: no I/O, no configuration. Reference parsing lives
//! in [`reference`], episode code parsing and ordering in [`episode_code`].

pub mod episode_code;
pub mod reference;

pub use episode_code::EpisodeCode;
pub use reference::{dedupe, resolve_id};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction requested by the client for episode ordering.
///
/// Uses an enum instead of a bool so call sites read as intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "ASC")]
    Ascending,
    #[serde(rename = "DESC")]
    Descending,
}

impl SortOrder {
    /// Returns true if this is ascending order.
    #[must_use]
    pub const fn is_ascending(&self) -> bool {
        matches!(self, Self::Ascending)
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ASC" | "asc" => Ok(Self::Ascending),
            "DESC" | "desc" => Ok(Self::Descending),
            other => Err(format!("Invalid sort order '{other}', expected ASC or DESC")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_order_boolean_blindness_fix() {
        assert!(SortOrder::Ascending.is_ascending());
        assert!(!SortOrder::Descending.is_ascending());
    }

    #[test]
    fn sort_order_wire_format() {
        assert_eq!(
            serde_json::to_string(&SortOrder::Descending).unwrap(),
            "\"DESC\""
        );
        let parsed: SortOrder = serde_json::from_str("\"ASC\"").unwrap();
        assert_eq!(parsed, SortOrder::Ascending);
        assert!(serde_json::from_str::<SortOrder>("\"UP\"").is_err());
    }

    #[test]
    fn sort_order_from_str() {
        assert_eq!("desc".parse::<SortOrder>(), Ok(SortOrder::Descending));
        assert_eq!("ASC".parse::<SortOrder>(), Ok(SortOrder::Ascending));
        assert!("sideways".parse::<SortOrder>().is_err());
    }
}
