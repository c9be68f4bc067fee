//! Detection of same-color rectangles.
//!
//! Every occupied cell is tried as the top-left corner of a rectangle. From that corner
//! the widest same-color run to the right bounds the candidate widths; for each width of
//! at least 2 the rectangle is extended downward while whole rows match. Candidates at
//! least 2 tall are kept, and a candidate contained in another candidate is dropped, so
//! only maximal rectangles are reported.
//!
//! Non-rectangular regions (L-shapes, plus signs, ...) never match on their own. Two
//! maximal rectangles of one color may still partially overlap; both are reported.

use crate::core::{Color, Field, Position, Rectangle};

/// Smallest width and height of a matching rectangle.
pub const MIN_MATCH_SIZE: usize = 2;

/// Finds every maximal same-color rectangle of at least 2×2.
///
/// Rectangles are returned in discovery order (corners scanned row by row, then by
/// increasing width).
///
/// # Example
///
/// ```
/// use quadfall_engine::{Block, Color, Field, Position, rules::matching};
///
/// let mut field = Field::new();
/// for (x, y) in [(0, 18), (1, 18), (0, 19), (1, 19)] {
///     field.place_block(Position::new(x, y), Block::new(Color::Red)).unwrap();
/// }
///
/// let rectangles = matching::find_matching_rectangles(&field);
/// assert_eq!(rectangles.len(), 1);
/// assert_eq!(rectangles[0].area(), 4);
/// ```
#[must_use]
pub fn find_matching_rectangles(field: &Field) -> Vec<Rectangle> {
    let mut candidates = vec![];
    for y in 0..field.height() {
        for x in 0..field.width() {
            candidates.extend(rectangles_at(Position::new(x, y), field));
        }
    }
    remove_contained(candidates)
}

/// Checks whether every position holds a block of `color`.
#[must_use]
pub fn is_rectangle(positions: &[Position], color: Color, field: &Field) -> bool {
    positions
        .iter()
        .all(|&position| has_color(field, position, color))
}

fn has_color(field: &Field, position: Position, color: Color) -> bool {
    field
        .get_block(position)
        .is_some_and(|block| block.color() == color)
}

/// Returns every rectangle (≥2×2) whose top-left corner is `corner`.
fn rectangles_at(corner: Position, field: &Field) -> Vec<Rectangle> {
    let Some(block) = field.get_block(corner) else {
        return vec![];
    };
    let color = block.color();

    let mut max_width = 1;
    while corner.x() + max_width < field.width()
        && has_color(field, corner.offset(max_width, 0), color)
    {
        max_width += 1;
    }

    let mut rectangles = vec![];
    for width in MIN_MATCH_SIZE..=max_width {
        let mut height = 1;
        while corner.y() + height < field.height()
            && (0..width).all(|dx| has_color(field, corner.offset(dx, height), color))
        {
            height += 1;
        }
        if height >= MIN_MATCH_SIZE
            && let Ok(rectangle) = Rectangle::new(corner, width, height)
        {
            rectangles.push(rectangle);
        }
    }
    rectangles
}

/// Drops every candidate fully contained in a different candidate.
///
/// Comparing against all candidates (not only previously accepted ones) keeps the result
/// independent of discovery order.
fn remove_contained(candidates: Vec<Rectangle>) -> Vec<Rectangle> {
    let mut maximal: Vec<Rectangle> = Vec::with_capacity(candidates.len());
    for (i, rect) in candidates.iter().enumerate() {
        let contained = candidates
            .iter()
            .enumerate()
            .any(|(j, other)| i != j && other != rect && other.contains_rectangle(rect));
        if !contained && !maximal.contains(rect) {
            maximal.push(*rect);
        }
    }
    maximal
}
