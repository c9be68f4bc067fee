//! Removal of matched rectangles and the resulting chain reaction.

use tracing::{debug, trace, warn};

use crate::{
    FieldError,
    core::{Field, Rectangle},
};

use super::{gravity, matching};

/// Result of running a removal chain to completion.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ChainOutcome {
    /// Sum of the areas of every rectangle removed across all chain steps.
    pub cleared_cells: usize,
    /// Number of match → remove → gravity steps that removed something.
    pub chains: usize,
}

/// Removes every cell of `rectangles` and returns the sum of their areas.
///
/// This is a single pass: no gravity is applied and no new matches are searched.
///
/// # Errors
///
/// Returns [`FieldError::OutOfBounds`] if any rectangle extends past the field. The field
/// is left untouched in that case.
pub fn remove_blocks(rectangles: &[Rectangle], field: &mut Field) -> Result<usize, FieldError> {
    if let Some(position) = rectangles
        .iter()
        .map(Rectangle::bottom_right)
        .find(|position| !field.is_valid_position(*position))
    {
        return Err(FieldError::OutOfBounds { position });
    }

    let mut cleared = 0;
    for rectangle in rectangles {
        for position in rectangle.positions() {
            field.remove_block(position)?;
        }
        cleared += rectangle.area();
    }
    Ok(cleared)
}

/// Runs match → remove → gravity until no rectangle matches and returns the total
/// number of cells cleared.
pub fn process_removal_chain(field: &mut Field) -> usize {
    run_removal_chain(field).cleared_cells
}

/// Like [`process_removal_chain`], but also reports how many chain steps ran.
///
/// Every step removes at least four cells, so the occupied cell count strictly decreases
/// and the loop finishes within `Field::CELL_COUNT / 4` steps.
///
/// # Example
///
/// ```
/// use quadfall_engine::{Block, Color, Field, Position, rules::removal};
///
/// let mut field = Field::new();
/// for (x, y) in [(0, 18), (1, 18), (0, 19), (1, 19)] {
///     field.place_block(Position::new(x, y), Block::new(Color::Blue)).unwrap();
/// }
///
/// let outcome = removal::run_removal_chain(&mut field);
/// assert_eq!(outcome.cleared_cells, 4);
/// assert_eq!(outcome.chains, 1);
/// assert_eq!(field.occupied_count(), 0);
/// ```
pub fn run_removal_chain(field: &mut Field) -> ChainOutcome {
    let mut outcome = ChainOutcome::default();
    for _ in 0..Field::CELL_COUNT {
        let rectangles = matching::find_matching_rectangles(field);
        if rectangles.is_empty() {
            break;
        }

        let occupied_before = field.occupied_count();
        let cleared = match remove_blocks(&rectangles, field) {
            Ok(cleared) => cleared,
            Err(error) => {
                warn!(%error, "matched rectangle outside the field");
                break;
            }
        };
        debug_assert!(field.occupied_count() < occupied_before);

        outcome.cleared_cells += cleared;
        outcome.chains += 1;
        debug!(
            chain = outcome.chains,
            rectangles = rectangles.len(),
            cleared,
            "removed matched rectangles"
        );

        let passes = gravity::settle(field);
        trace!(passes, "field settled");
    }
    outcome
}
