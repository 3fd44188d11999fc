//! NSFW filtering mode definitions.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How adult-flagged posts are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum NsfwMode {
    /// Skip adult-flagged posts (default).
    #[default]
    None,
    /// Process every post regardless of the adult flag.
    Include,
    /// Process only adult-flagged posts.
    Exclusive,
}

impl NsfwMode {
    /// Check whether a post with the given adult flag passes this mode.
    pub fn allows(&self, over_18: bool) -> bool {
        match self {
            NsfwMode::None => !over_18,
            NsfwMode::Include => true,
            NsfwMode::Exclusive => over_18,
        }
    }
}

impl fmt::Display for NsfwMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NsfwMode::None => write!(f, "none"),
            NsfwMode::Include => write!(f, "include"),
            NsfwMode::Exclusive => write!(f, "exclusive"),
        }
    }
}

impl FromStr for NsfwMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(NsfwMode::None),
            "include" => Ok(NsfwMode::Include),
            "exclusive" => Ok(NsfwMode::Exclusive),
            _ => Err(format!("Unknown NSFW mode: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_drops_adult() {
        assert!(!NsfwMode::None.allows(true));
        assert!(NsfwMode::None.allows(false));
    }

    #[test]
    fn test_include_allows_everything() {
        assert!(NsfwMode::Include.allows(true));
        assert!(NsfwMode::Include.allows(false));
    }

    #[test]
    fn test_exclusive_drops_worksafe() {
        assert!(NsfwMode::Exclusive.allows(true));
        assert!(!NsfwMode::Exclusive.allows(false));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("none".parse::<NsfwMode>().unwrap(), NsfwMode::None);
        assert_eq!("Include".parse::<NsfwMode>().unwrap(), NsfwMode::Include);
        assert!("sometimes".parse::<NsfwMode>().is_err());
    }
}
