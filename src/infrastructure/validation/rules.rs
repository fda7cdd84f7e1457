//! Rule evaluation
//!
//! Pure geometry: given the subject element and a way to resolve the other
//! objects a constraint names, decide whether the constraint holds.

use crate::domain::ports::PageElement;
use crate::domain::value_objects::{Constraint, PixelRange, Rect};

/// A rule did not hold
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleFailure {
    pub message: String,
    pub areas: Vec<Rect>,
}

impl RuleFailure {
    fn new(message: impl Into<String>, areas: Vec<Rect>) -> Self {
        Self {
            message: message.into(),
            areas,
        }
    }
}

/// Evaluate `constraint` for `object`.
///
/// `resolve` looks up any object by name; it returns `None` when the object
/// is not on the page.
pub fn evaluate<F>(object: &str, constraint: &Constraint, resolve: F) -> Result<(), RuleFailure>
where
    F: Fn(&str) -> Option<PageElement>,
{
    let subject = resolve(object);

    if let Constraint::Absent = constraint {
        return match subject {
            Some(element) if element.visible => Err(RuleFailure::new(
                format!("{} should be absent on page", object),
                vec![element.area],
            )),
            _ => Ok(()),
        };
    }

    let subject = visible_area(object, subject)?;

    match constraint {
        Constraint::Visible | Constraint::Absent => Ok(()),
        Constraint::Width(range) => check_size(object, "width", subject.width, range, subject),
        Constraint::Height(range) => check_size(object, "height", subject.height, range, subject),
        Constraint::Inside { container, margin } => {
            let outer = visible_area(container, resolve(container))?;
            check_inside(object, subject, container, outer, margin.as_ref())
        }
        Constraint::Above { other, gap } => {
            let target = visible_area(other, resolve(other))?;
            let distance = i64::from(target.top) - subject.bottom();
            check_gap(object, "above", other, distance, gap, subject, target)
        }
        Constraint::Below { other, gap } => {
            let target = visible_area(other, resolve(other))?;
            let distance = i64::from(subject.top) - target.bottom();
            check_gap(object, "below", other, distance, gap, subject, target)
        }
        Constraint::LeftOf { other, gap } => {
            let target = visible_area(other, resolve(other))?;
            let distance = i64::from(target.left) - subject.right();
            check_gap(object, "left of", other, distance, gap, subject, target)
        }
        Constraint::RightOf { other, gap } => {
            let target = visible_area(other, resolve(other))?;
            let distance = i64::from(subject.left) - target.right();
            check_gap(object, "right of", other, distance, gap, subject, target)
        }
        Constraint::AlignedHorizontally { others, tolerance } => {
            check_aligned(object, subject, others, *tolerance, &resolve, Axis::Horizontal)
        }
        Constraint::AlignedVertically { others, tolerance } => {
            check_aligned(object, subject, others, *tolerance, &resolve, Axis::Vertical)
        }
    }
}

fn visible_area(object: &str, element: Option<PageElement>) -> Result<Rect, RuleFailure> {
    match element {
        None => Err(RuleFailure::new(
            format!("{} is absent on page", object),
            Vec::new(),
        )),
        Some(element) if !element.visible => Err(RuleFailure::new(
            format!("{} is not visible on page", object),
            vec![element.area],
        )),
        Some(element) => Ok(element.area),
    }
}

fn check_size(
    object: &str,
    dimension: &str,
    actual: i32,
    expected: &PixelRange,
    area: Rect,
) -> Result<(), RuleFailure> {
    if expected.contains(actual) {
        return Ok(());
    }
    Err(RuleFailure::new(
        format!(
            "{} {} is {}px but it should be {}",
            object, dimension, actual, expected
        ),
        vec![area],
    ))
}

fn check_inside(
    object: &str,
    subject: Rect,
    container: &str,
    outer: Rect,
    margin: Option<&PixelRange>,
) -> Result<(), RuleFailure> {
    let offsets = [
        ("left", i64::from(subject.left) - i64::from(outer.left)),
        ("top", i64::from(subject.top) - i64::from(outer.top)),
        ("right", outer.right() - subject.right()),
        ("bottom", outer.bottom() - subject.bottom()),
    ];
    let areas = vec![subject, outer];

    if offsets.iter().any(|(_, offset)| *offset < 0) {
        return Err(RuleFailure::new(
            format!("{} is not completely inside {}", object, container),
            areas,
        ));
    }

    let Some(margin) = margin else {
        return Ok(());
    };
    match offsets.iter().find(|(_, offset)| !margin.contains(*offset)) {
        None => Ok(()),
        Some((edge, offset)) => Err(RuleFailure::new(
            format!(
                "{} is {}px from the {} edge of {} but it should be {}",
                object, offset, edge, container, margin
            ),
            areas,
        )),
    }
}

fn check_gap(
    object: &str,
    relation: &str,
    other: &str,
    distance: i64,
    gap: &PixelRange,
    subject: Rect,
    target: Rect,
) -> Result<(), RuleFailure> {
    // An open gap still requires the objects not to overlap
    let expected = if gap.min.is_none() && gap.max.is_none() {
        PixelRange::at_least(0)
    } else {
        *gap
    };
    if expected.contains(distance) {
        return Ok(());
    }

    let message = if distance < 0 {
        format!("{} is not {} {}", object, relation, other)
    } else {
        format!(
            "{} is {}px {} {} but it should be {}",
            object, distance, relation, other, expected
        )
    };
    Err(RuleFailure::new(message, vec![subject, target]))
}

#[derive(Clone, Copy)]
enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    fn edges(self, rect: Rect) -> (i64, i64) {
        match self {
            Axis::Horizontal => (i64::from(rect.top), rect.bottom()),
            Axis::Vertical => (i64::from(rect.left), rect.right()),
        }
    }

    fn label(self) -> &'static str {
        match self {
            Axis::Horizontal => "horizontally",
            Axis::Vertical => "vertically",
        }
    }
}

fn check_aligned<F>(
    object: &str,
    subject: Rect,
    others: &[String],
    tolerance: i32,
    resolve: &F,
    axis: Axis,
) -> Result<(), RuleFailure>
where
    F: Fn(&str) -> Option<PageElement>,
{
    let (start, end) = axis.edges(subject);
    let tolerance = i64::from(tolerance);
    let mut misaligned = Vec::new();
    let mut areas = vec![subject];

    for other in others {
        let area = visible_area(other, resolve(other))?;
        let (other_start, other_end) = axis.edges(area);
        if (start - other_start).abs() > tolerance || (end - other_end).abs() > tolerance {
            misaligned.push(other.as_str());
            areas.push(area);
        }
    }

    if misaligned.is_empty() {
        return Ok(());
    }
    Err(RuleFailure::new(
        format!(
            "{} is not aligned {} with {}",
            object,
            axis.label(),
            misaligned.join(", ")
        ),
        areas,
    ))
}
