//! Attribute and connectivity transplant.
//!
//! Replacing a footprint means carrying the old instance's board-specific
//! state over to a freshly loaded template: placement, lock flag, per-pad net
//! assignments, reference/value text, and path identity. The work is split
//! into a pure planning step ([`compute_transplant`]) and a single commit
//! ([`apply_plan`]), so nothing short of the commit touches the board and a
//! half-swapped board state cannot be observed.
//!
//! Free-form graphic and text items beyond reference and value are not
//! carried over. That is a documented gap of the swap, not silent behaviour.

use tracing::trace;

use super::error::{CycleError, CycleResult};
use crate::board::{Board, ComponentInstance, InstanceFlags, InstanceId, NetCode, PadFlags};

/// A fully prepared footprint swap, ready to commit.
#[derive(Debug, Clone, PartialEq)]
pub struct TransplantPlan {
    /// The replacement instance, already carrying the transplanted state and
    /// the identity of the instance it replaces.
    pub replacement: ComponentInstance,
    /// Identity of the instance to be replaced.
    pub replaces: InstanceId,
}

/// Computes a transplant plan. Pure: neither `existing` nor any board is
/// modified.
///
/// The returned plan's replacement instance:
///
/// - sits at `existing`'s exact position;
/// - is on `existing`'s side — if the template defaulted to the other side it
///   is mirrored about the position (a geometric flip, not a side-field
///   overwrite);
/// - matches `existing`'s orientation and lock flag;
/// - inherits per-pad connectivity by pad number: a connectable replacement
///   pad takes net, pin function, pin type, and ratsnest visibility from the
///   first connectable pad of `existing` with the same number; unnumbered or
///   off-copper pads, and pads with no match, are forced unconnected;
/// - carries `existing`'s reference and value text items (content, layer,
///   visibility, lock state);
/// - keeps `existing`'s path identity, so downstream tooling treats it as
///   the same logical component.
#[must_use]
pub fn compute_transplant(
    existing: &ComponentInstance,
    template: ComponentInstance,
) -> TransplantPlan {
    let mut replacement = template;

    replacement.position = existing.position;

    if replacement.side != existing.side {
        trace!(side = ?existing.side, "mirroring replacement onto the original side");
        replacement.flip(existing.position);
    }

    if replacement.orientation != existing.orientation {
        replacement.rotate_to(existing.orientation);
    }

    replacement.locked = existing.locked;

    for pad in &mut replacement.pads {
        let number = match pad.number.as_deref() {
            Some(n) if !n.is_empty() && pad.is_on_copper() => n,
            // Unnamed or non-electrical pads never inherit connectivity.
            _ => {
                pad.net = NetCode::UNCONNECTED;
                continue;
            }
        };

        if let Some(donor) = existing.connectable_pad(number) {
            pad.net = donor.net;
            pad.pin_function = donor.pin_function.clone();
            pad.pin_type = donor.pin_type;
            pad.flags
                .set(PadFlags::SHOW_RATSNEST, donor.flags.contains(PadFlags::SHOW_RATSNEST));
        } else {
            pad.net = NetCode::UNCONNECTED;
        }
    }

    replacement.reference = existing.reference.clone();
    replacement.value = existing.value.clone();
    replacement.path = existing.path;

    TransplantPlan {
        replaces: existing.path,
        replacement,
    }
}

/// Commits a transplant plan to the board.
///
/// All-or-nothing: the replacement carries the replaced instance's identity,
/// so the insert swaps it into the same slot in one step, preserving
/// placement order. Transient edit flags are cleared and the replacement
/// becomes the sole selection, inheriting the old instance's focus.
///
/// # Errors
///
/// Returns [`CycleError::InstanceMissing`], leaving the board untouched, if
/// the instance to replace is no longer present.
pub fn apply_plan(board: &mut Board, plan: TransplantPlan) -> CycleResult<InstanceId> {
    if !board.contains(plan.replaces) {
        return Err(CycleError::instance_missing(plan.replaces));
    }

    let mut replacement = plan.replacement;
    replacement.flags.remove(InstanceFlags::TRANSIENT);
    let id = board.insert(replacement);
    board.select_only(id);
    Ok(id)
}
