//! Pixel range value object
//!
//! Inclusive bounds used by size and distance constraints. Either side may be
//! open; a range with neither bound accepts every value.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PixelRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<i32>,
}

impl PixelRange {
    pub fn exact(value: i32) -> Self {
        Self {
            min: Some(value),
            max: Some(value),
        }
    }

    pub fn between(min: i32, max: i32) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    pub fn at_least(min: i32) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    pub fn at_most(max: i32) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    pub fn contains(&self, value: impl Into<i64>) -> bool {
        let value = value.into();
        self.min.is_none_or(|min| value >= i64::from(min))
            && self.max.is_none_or(|max| value <= i64::from(max))
    }
}

impl std::fmt::Display for PixelRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.min, self.max) {
            (Some(min), Some(max)) if min == max => write!(f, "{}px", min),
            (Some(min), Some(max)) => write!(f, "{} to {}px", min, max),
            (Some(min), None) => write!(f, ">= {}px", min),
            (None, Some(max)) => write!(f, "<= {}px", max),
            (None, None) => write!(f, "any"),
        }
    }
}
