//! The footprint cycler.
//!
//! One operation: given a selected component and a direction, replace its
//! footprint with the next or previous one (by sorted name) from the same
//! library, carrying the board-specific state over. Hitting either end of
//! the library is a silent no-op rather than a wrap-around or an error.

pub mod error;
pub mod select;
pub mod transplant;

use tracing::{debug, info};

pub use error::{CycleError, CycleResult};
pub use select::{resolve_selection, SelectionItem, SelectionProvider};
pub use transplant::{apply_plan, compute_transplant, TransplantPlan};

use crate::board::{Board, FootprintId, InstanceId};
use crate::catalog::LibraryCatalog;

/// Which way to cycle through the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards the next name in sort order.
    Forward,
    /// Towards the previous name in sort order.
    Backward,
}

impl Direction {
    /// The index offset this direction applies: +1 or -1.
    #[must_use]
    pub const fn offset(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// Computes the index reached by stepping from `current` in `direction`,
/// clamped to `[0, len - 1]`. No wrap-around: stepping past either end
/// returns `current` unchanged.
#[must_use]
pub fn next_index(current: usize, direction: Direction, len: usize) -> usize {
    debug_assert!(current < len, "current index out of range");
    match direction {
        Direction::Forward if current + 1 < len => current + 1,
        Direction::Backward => current.saturating_sub(1),
        Direction::Forward => current,
    }
}

/// What a cycle invocation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Nothing resolvable was selected; the board is untouched.
    NoSelection,
    /// The component already sits at the first/last footprint of its
    /// library; the board is untouched.
    AtBoundary {
        /// The component that was left alone.
        instance: InstanceId,
        /// Its (unchanged) footprint.
        footprint: FootprintId,
    },
    /// The footprint was swapped.
    Replaced {
        /// The component's stable identity (unchanged by the swap).
        instance: InstanceId,
        /// Footprint before the swap.
        from: FootprintId,
        /// Footprint after the swap.
        to: FootprintId,
    },
}

/// A named, host-bindable cycle action.
///
/// Hosts register these with their own menu/shortcut mechanism; the
/// descriptor only carries the metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionDescriptor {
    /// Stable action name.
    pub name: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// Suggested keyboard shortcut.
    pub default_shortcut: &'static str,
    /// Cycle direction the action triggers.
    pub direction: Direction,
}

/// The two actions exposed to hosts.
pub const ACTIONS: [ActionDescriptor; 2] = [
    ActionDescriptor {
        name: "next-footprint",
        description: "Swap the selected component to the next footprint in its library",
        default_shortcut: "Shift+J",
        direction: Direction::Forward,
    },
    ActionDescriptor {
        name: "previous-footprint",
        description: "Swap the selected component to the previous footprint in its library",
        default_shortcut: "Shift+K",
        direction: Direction::Backward,
    },
];

/// Cycles components through their libraries' footprint variants.
///
/// Holds only the injected catalog; selection and board are passed per
/// invocation, so one cycler can serve any number of boards.
#[derive(Debug)]
pub struct Cycler<C> {
    catalog: C,
}

impl<C: LibraryCatalog> Cycler<C> {
    /// Creates a cycler over the given catalog.
    pub const fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// The injected catalog.
    pub const fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Cycles whatever the selection resolves to.
    ///
    /// An empty or unresolvable selection is a silent no-op
    /// ([`CycleOutcome::NoSelection`]).
    ///
    /// # Errors
    ///
    /// See [`cycle_instance`](Self::cycle_instance).
    pub fn cycle(
        &self,
        board: &mut Board,
        selection: &dyn SelectionProvider,
        direction: Direction,
    ) -> CycleResult<CycleOutcome> {
        let Some(target) = resolve_selection(board, &selection.current_selection()) else {
            debug!("nothing selected, cycle is a no-op");
            return Ok(CycleOutcome::NoSelection);
        };
        self.cycle_instance(board, target, direction)
    }

    /// Cycles one component by identity.
    ///
    /// # Errors
    ///
    /// Returns an error — always leaving the board untouched — if the
    /// instance is not on the board, its library cannot be listed, its
    /// current footprint is not in the listing, or the replacement
    /// definition fails to load.
    pub fn cycle_instance(
        &self,
        board: &mut Board,
        instance: InstanceId,
        direction: Direction,
    ) -> CycleResult<CycleOutcome> {
        let existing = board
            .get(instance)
            .ok_or_else(|| CycleError::instance_missing(instance))?;
        let footprint = existing.id.clone();
        debug!(
            reference = %existing.reference.text,
            footprint = %footprint,
            ?direction,
            "cycling footprint"
        );

        let names = self.catalog.list_footprints(&footprint.library)?;
        let current = names
            .iter()
            .position(|n| *n == footprint.name)
            .ok_or_else(|| CycleError::not_listed(footprint.clone()))?;

        let next = next_index(current, direction, names.len());
        if next == current {
            debug!(footprint = %footprint, "already at the end of the library, nothing to do");
            return Ok(CycleOutcome::AtBoundary {
                instance,
                footprint,
            });
        }

        let template = self.catalog.load_footprint(&footprint.library, &names[next])?;
        let to = template.id.clone();
        let plan = compute_transplant(existing, template);
        let instance = apply_plan(board, plan)?;

        info!(
            reference = %board.get(instance).map_or("?", |c| c.reference.text.as_str()),
            from = %footprint,
            to = %to,
            "replaced footprint"
        );
        Ok(CycleOutcome::Replaced {
            instance,
            from: footprint,
            to,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_index_steps_and_clamps() {
        assert_eq!(next_index(1, Direction::Forward, 3), 2);
        assert_eq!(next_index(1, Direction::Backward, 3), 0);
        assert_eq!(next_index(2, Direction::Forward, 3), 2);
        assert_eq!(next_index(0, Direction::Backward, 3), 0);
        assert_eq!(next_index(0, Direction::Forward, 1), 0);
        assert_eq!(next_index(0, Direction::Backward, 1), 0);
    }

    #[test]
    fn direction_offsets() {
        assert_eq!(Direction::Forward.offset(), 1);
        assert_eq!(Direction::Backward.offset(), -1);
    }

    #[test]
    fn actions_cover_both_directions() {
        assert_eq!(ACTIONS.len(), 2);
        assert_eq!(ACTIONS[0].direction, Direction::Forward);
        assert_eq!(ACTIONS[1].direction, Direction::Backward);
        assert_ne!(ACTIONS[0].name, ACTIONS[1].name);
    }
}
