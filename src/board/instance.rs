//! Component instances and their pads.
//!
//! A [`ComponentInstance`] is a footprint placed on a board: the library
//! definition's pad layout plus the board-specific state (position,
//! orientation, side, lock flag, per-pad net assignments, reference and value
//! text, and a stable identity token). Instances are replaced, never mutated
//! in place, when their footprint changes.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::geometry::{Angle, Point, Side};
use super::{FootprintId, NetCode};

/// Stable identity token for a placed component.
///
/// This is the board-path identity that downstream tooling (netlists,
/// schematic cross-references) uses to recognise "the same" logical component
/// across footprint swaps. A replacement instance inherits the token of the
/// instance it replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstanceId(Uuid);

impl InstanceId {
    /// Generates a fresh identity token.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for InstanceId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

bitflags! {
    /// Per-pad state flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct PadFlags: u8 {
        /// The pad sits on a copper-bearing layer and participates in
        /// electrical connectivity.
        const ON_COPPER = 1 << 0;
        /// Unrouted connections to this pad are shown in the ratsnest.
        const SHOW_RATSNEST = 1 << 1;
    }
}

impl Default for PadFlags {
    fn default() -> Self {
        Self::ON_COPPER | Self::SHOW_RATSNEST
    }
}

bitflags! {
    /// Transient editing state of a placed component.
    ///
    /// `NEW` and `MODIFIED` are edit-session bookkeeping and are cleared when
    /// an instance is committed to the board; `SELECTED` tracks the current
    /// selection.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct InstanceFlags: u8 {
        /// The instance is part of the current selection.
        const SELECTED = 1 << 0;
        /// Freshly instantiated from a library, not yet committed.
        const NEW = 1 << 1;
        /// Touched during the current edit.
        const MODIFIED = 1 << 2;
    }
}

impl Default for InstanceFlags {
    fn default() -> Self {
        Self::empty()
    }
}

impl InstanceFlags {
    /// Flags that do not survive a commit to the board.
    pub const TRANSIENT: Self = Self::NEW.union(Self::MODIFIED);
}

/// Electrical role of a pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PinType {
    /// Passive connection (default).
    #[default]
    Passive,
    /// Input pin.
    Input,
    /// Output pin.
    Output,
    /// Bidirectional pin.
    Bidirectional,
    /// Power input.
    PowerIn,
    /// Power output.
    PowerOut,
    /// Open-collector output.
    OpenCollector,
    /// Intentionally unconnected.
    NoConnect,
    /// Unrestricted.
    Free,
}

/// An electrical or mechanical contact point on a component.
///
/// Pads correspond across a footprint swap by number, not by position in the
/// pad collection. Pads without a number, or off copper, never carry
/// connectivity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pad {
    /// Pad number or name (e.g., "1", "A3"). May be absent for mechanical
    /// pads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,

    /// Offset from the component origin, in the component's local frame.
    #[serde(default)]
    pub offset: Point,

    /// Net this pad is connected to. [`NetCode::UNCONNECTED`] if none.
    #[serde(default)]
    pub net: NetCode,

    /// Pin function label (e.g., "VCC"). Empty if unknown.
    #[serde(default)]
    pub pin_function: String,

    /// Electrical role of the pin.
    #[serde(default)]
    pub pin_type: PinType,

    /// Pad state flags.
    #[serde(default)]
    pub flags: PadFlags,
}

impl Pad {
    /// Creates a numbered copper pad at the given local offset.
    #[must_use]
    pub fn connectable(number: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            number: Some(number.into()),
            offset: Point::new(x, y),
            net: NetCode::UNCONNECTED,
            pin_function: String::new(),
            pin_type: PinType::Passive,
            flags: PadFlags::default(),
        }
    }

    /// Creates an unnumbered mechanical pad (off copper).
    #[must_use]
    pub fn mechanical(x: f64, y: f64) -> Self {
        Self {
            number: None,
            offset: Point::new(x, y),
            net: NetCode::UNCONNECTED,
            pin_function: String::new(),
            pin_type: PinType::Passive,
            flags: PadFlags::empty(),
        }
    }

    /// Whether the pad sits on a copper-bearing layer.
    #[must_use]
    pub const fn is_on_copper(&self) -> bool {
        self.flags.contains(PadFlags::ON_COPPER)
    }

    /// Whether the pad can carry connectivity: it has a non-empty number and
    /// sits on copper.
    #[must_use]
    pub fn is_connectable(&self) -> bool {
        self.is_on_copper() && self.number.as_deref().is_some_and(|n| !n.is_empty())
    }
}

/// Layer a text item is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextLayer {
    /// Front silkscreen.
    #[default]
    FrontSilk,
    /// Back silkscreen.
    BackSilk,
    /// Front fabrication layer.
    FrontFab,
    /// Back fabrication layer.
    BackFab,
}

impl TextLayer {
    /// The same layer on the opposite side of the board.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::FrontSilk => Self::BackSilk,
            Self::BackSilk => Self::FrontSilk,
            Self::FrontFab => Self::BackFab,
            Self::BackFab => Self::FrontFab,
        }
    }
}

/// A text item attached to a component (reference designator or value).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextItem {
    /// Text content.
    pub text: String,
    /// Layer the text is drawn on.
    #[serde(default)]
    pub layer: TextLayer,
    /// Whether the text is visible.
    #[serde(default = "default_visible")]
    pub visible: bool,
    /// Whether the text is locked against editing.
    #[serde(default)]
    pub locked: bool,
}

const fn default_visible() -> bool {
    true
}

impl TextItem {
    /// Creates a visible, unlocked text item on the front silkscreen.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            layer: TextLayer::FrontSilk,
            visible: true,
            locked: false,
        }
    }
}

/// A footprint placed on a board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentInstance {
    /// Which footprint definition this instance was loaded from.
    pub id: FootprintId,

    /// Stable board-path identity token.
    pub path: InstanceId,

    /// Reference designator text (e.g., "R5").
    pub reference: TextItem,

    /// Value text (e.g., "10k").
    pub value: TextItem,

    /// Position of the component origin on the board.
    #[serde(default)]
    pub position: Point,

    /// Orientation angle.
    #[serde(default)]
    pub orientation: Angle,

    /// Side of the board the component sits on.
    #[serde(default)]
    pub side: Side,

    /// Whether the component is locked against moving.
    #[serde(default)]
    pub locked: bool,

    /// Pads, in definition order.
    #[serde(default)]
    pub pads: Vec<Pad>,

    /// Transient editing flags.
    #[serde(default, skip_serializing_if = "InstanceFlags::is_empty")]
    pub flags: InstanceFlags,
}

impl ComponentInstance {
    /// Creates a bare instance of the given footprint with default placement
    /// and no pads.
    #[must_use]
    pub fn new(id: FootprintId) -> Self {
        let value = TextItem::new(id.name.clone());
        Self {
            id,
            path: InstanceId::new(),
            reference: TextItem::new("REF**"),
            value,
            position: Point::ORIGIN,
            orientation: Angle::ZERO,
            side: Side::Front,
            locked: false,
            pads: Vec::new(),
            flags: InstanceFlags::empty(),
        }
    }

    /// Flips the component to the other side of the board.
    ///
    /// This is a true mirror about a vertical axis through `about`: the
    /// position and the local pad offsets are reflected, the orientation is
    /// negated, and the side and text layers are toggled. Flipping about the
    /// component's own position leaves the position unchanged.
    pub fn flip(&mut self, about: Point) {
        self.position = self.position.mirrored_x(about);
        self.side = self.side.opposite();
        self.orientation = self.orientation.mirrored();
        for pad in &mut self.pads {
            pad.offset.x = -pad.offset.x;
        }
        self.reference.layer = self.reference.layer.flipped();
        self.value.layer = self.value.layer.flipped();
    }

    /// Sets the orientation. Pad offsets are stored in the component's local
    /// frame, so no pad coordinates change.
    pub fn rotate_to(&mut self, orientation: Angle) {
        self.orientation = orientation;
    }

    /// Finds the first connectable pad with the given number.
    ///
    /// Same-numbered pads that are off copper (or unnumbered pads) are
    /// skipped, so a mechanical pad never shadows the copper pad that
    /// actually carries the net.
    #[must_use]
    pub fn connectable_pad(&self, number: &str) -> Option<&Pad> {
        self.pads
            .iter()
            .find(|p| p.is_connectable() && p.number.as_deref() == Some(number))
    }

    /// Whether the instance is part of the current selection.
    #[must_use]
    pub const fn is_selected(&self) -> bool {
        self.flags.contains(InstanceFlags::SELECTED)
    }
}
