//! Constraint value object - the geometric vocabulary of layout rules
//!
//! A constraint names the relation an object must satisfy. Evaluation lives
//! with the section validator; this type only describes the rule.

use serde::{Deserialize, Serialize};

use super::PixelRange;

/// Geometric constraint on a page object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Constraint {
    /// Element width falls in range
    Width(PixelRange),

    /// Element height falls in range
    Height(PixelRange),

    /// Element lies inside `container`, each edge offset by `margin` when given
    Inside {
        container: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        margin: Option<PixelRange>,
    },

    /// Element's bottom edge is `gap` above `other`'s top edge
    Above {
        other: String,
        #[serde(default)]
        gap: PixelRange,
    },

    /// Element's top edge is `gap` below `other`'s bottom edge
    Below {
        other: String,
        #[serde(default)]
        gap: PixelRange,
    },

    /// Element's right edge is `gap` left of `other`'s left edge
    LeftOf {
        other: String,
        #[serde(default)]
        gap: PixelRange,
    },

    /// Element's left edge is `gap` right of `other`'s right edge
    RightOf {
        other: String,
        #[serde(default)]
        gap: PixelRange,
    },

    /// Top and bottom edges match every one of `others` within `tolerance`
    AlignedHorizontally {
        others: Vec<String>,
        #[serde(default)]
        tolerance: i32,
    },

    /// Left and right edges match every one of `others` within `tolerance`
    AlignedVertically {
        others: Vec<String>,
        #[serde(default)]
        tolerance: i32,
    },

    /// Element is present and visible
    Visible,

    /// Element is missing or hidden
    Absent,
}

impl Constraint {
    /// Other objects this constraint refers to besides its subject
    pub fn referenced_objects(&self) -> Vec<&str> {
        match self {
            Constraint::Inside { container, .. } => vec![container.as_str()],
            Constraint::Above { other, .. }
            | Constraint::Below { other, .. }
            | Constraint::LeftOf { other, .. }
            | Constraint::RightOf { other, .. } => vec![other.as_str()],
            Constraint::AlignedHorizontally { others, .. }
            | Constraint::AlignedVertically { others, .. } => {
                others.iter().map(String::as_str).collect()
            }
            Constraint::Width(_)
            | Constraint::Height(_)
            | Constraint::Visible
            | Constraint::Absent => Vec::new(),
        }
    }
}

impl std::fmt::Display for Constraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Constraint::Width(range) => write!(f, "width {}", range),
            Constraint::Height(range) => write!(f, "height {}", range),
            Constraint::Inside {
                container,
                margin: Some(margin),
            } => write!(f, "inside {} {}", container, margin),
            Constraint::Inside {
                container,
                margin: None,
            } => write!(f, "inside {}", container),
            Constraint::Above { other, gap } => write!(f, "above {} {}", other, gap),
            Constraint::Below { other, gap } => write!(f, "below {} {}", other, gap),
            Constraint::LeftOf { other, gap } => write!(f, "left-of {} {}", other, gap),
            Constraint::RightOf { other, gap } => write!(f, "right-of {} {}", other, gap),
            Constraint::AlignedHorizontally { others, tolerance } => {
                write!(f, "aligned horizontally {}", others.join(", "))?;
                if *tolerance > 0 {
                    write!(f, " ~{}px", tolerance)?;
                }
                Ok(())
            }
            Constraint::AlignedVertically { others, tolerance } => {
                write!(f, "aligned vertically {}", others.join(", "))?;
                if *tolerance > 0 {
                    write!(f, " ~{}px", tolerance)?;
                }
                Ok(())
            }
            Constraint::Visible => write!(f, "visible"),
            Constraint::Absent => write!(f, "absent"),
        }
    }
}
