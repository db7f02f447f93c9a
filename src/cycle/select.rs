//! Selection resolution.
//!
//! The host hands the cycler an unordered set of heterogeneous board items;
//! at most one target component comes out. A selected component wins over a
//! selected pad (which resolves to its owner); anything else resolves to
//! nothing, which is a silent no-op rather than an error.

use tracing::trace;

use crate::board::{Board, InstanceId};

/// One item of the host's current selection, reduced to the closed set of
/// variants the cycler cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionItem {
    /// A placed component.
    Component(InstanceId),
    /// A pad, identified by its owning component and pad index.
    Pad {
        /// Owning component.
        component: InstanceId,
        /// Index into the owner's pad collection.
        pad: usize,
    },
    /// Any other board item (track, text, zone, ...).
    Other,
}

/// Supplies the host's current selection.
pub trait SelectionProvider {
    /// Returns the current selection. Order is not meaningful.
    fn current_selection(&self) -> Vec<SelectionItem>;
}

impl SelectionProvider for Vec<SelectionItem> {
    fn current_selection(&self) -> Vec<SelectionItem> {
        self.clone()
    }
}

/// Resolves a selection to at most one target component.
///
/// Components take precedence over pads; among multiple qualifying items the
/// first encountered wins (a known limitation, not a contract). Items that
/// refer to instances no longer on the board are ignored.
#[must_use]
pub fn resolve_selection(board: &Board, items: &[SelectionItem]) -> Option<InstanceId> {
    for item in items {
        if let SelectionItem::Component(id) = item {
            if board.contains(*id) {
                return Some(*id);
            }
        }
    }
    for item in items {
        if let SelectionItem::Pad { component, .. } = item {
            if board.contains(*component) {
                return Some(*component);
            }
        }
    }
    trace!("selection contains no component or pad");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{ComponentInstance, FootprintId};

    fn board_with_two() -> (Board, InstanceId, InstanceId) {
        let mut board = Board::new();
        let a = board.insert(ComponentInstance::new(FootprintId::new("lib", "A")));
        let b = board.insert(ComponentInstance::new(FootprintId::new("lib", "B")));
        (board, a, b)
    }

    #[test]
    fn component_resolves_to_itself() {
        let (board, a, _) = board_with_two();
        let items = vec![SelectionItem::Other, SelectionItem::Component(a)];
        assert_eq!(resolve_selection(&board, &items), Some(a));
    }

    #[test]
    fn pad_resolves_to_owner() {
        let (board, a, _) = board_with_two();
        let items = vec![SelectionItem::Pad { component: a, pad: 0 }];
        assert_eq!(resolve_selection(&board, &items), Some(a));
    }

    #[test]
    fn component_wins_over_pad() {
        let (board, a, b) = board_with_two();
        let items = vec![
            SelectionItem::Pad { component: a, pad: 1 },
            SelectionItem::Component(b),
        ];
        assert_eq!(resolve_selection(&board, &items), Some(b));
    }

    #[test]
    fn other_items_resolve_to_none() {
        let (board, _, _) = board_with_two();
        assert_eq!(resolve_selection(&board, &[SelectionItem::Other]), None);
        assert_eq!(resolve_selection(&board, &[]), None);
    }

    #[test]
    fn stale_items_are_ignored() {
        let (board, a, _) = board_with_two();
        let gone = InstanceId::new();
        let items = vec![
            SelectionItem::Component(gone),
            SelectionItem::Pad { component: a, pad: 0 },
        ];
        assert_eq!(resolve_selection(&board, &items), Some(a));
    }
}
