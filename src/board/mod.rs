//! The board document and footprint identity types.
//!
//! A [`Board`] owns zero or more [`ComponentInstance`]s, keyed by their
//! stable [`InstanceId`] path tokens, and interns net names to [`NetCode`]s.
//! Instance order is placement order and is preserved across footprint swaps
//! (a replacement takes the slot of the instance it replaces).

pub mod geometry;
pub mod instance;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use geometry::{Angle, Point, Side};
pub use instance::{
    ComponentInstance, InstanceFlags, InstanceId, Pad, PadFlags, PinType, TextItem, TextLayer,
};

/// Composite key addressing one footprint definition within a library.
///
/// Serialises to the `"library:name"` form (the first colon separates the
/// parts, so footprint names may themselves contain colons).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct FootprintId {
    /// Library the footprint belongs to.
    pub library: String,
    /// Footprint name, unique within the library.
    pub name: String,
}

impl FootprintId {
    /// Creates a footprint identifier.
    #[must_use]
    pub fn new(library: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            library: library.into(),
            name: name.into(),
        }
    }
}

impl std::fmt::Display for FootprintId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.library, self.name)
    }
}

impl From<FootprintId> for String {
    fn from(id: FootprintId) -> Self {
        id.to_string()
    }
}

/// Error parsing a `"library:name"` footprint identifier.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid footprint id '{id}': expected 'library:name'")]
pub struct ParseFootprintIdError {
    /// The string that failed to parse.
    pub id: String,
}

impl std::str::FromStr for FootprintId {
    type Err = ParseFootprintIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((library, name)) if !library.is_empty() && !name.is_empty() => {
                Ok(Self::new(library, name))
            }
            _ => Err(ParseFootprintIdError { id: s.to_string() }),
        }
    }
}

impl TryFrom<String> for FootprintId {
    type Error = ParseFootprintIdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// A net code. Pads sharing a code are electrically joined.
///
/// Code 0 is the "unconnected" sentinel; real nets are interned by the board
/// starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NetCode(u32);

impl NetCode {
    /// The unconnected sentinel.
    pub const UNCONNECTED: Self = Self(0);

    /// Whether this code names a real net.
    #[must_use]
    pub const fn is_connected(self) -> bool {
        self.0 != 0
    }

    /// Raw code value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// An in-memory board document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Board {
    /// Placed components, keyed by path identity, in placement order.
    #[serde(default)]
    components: IndexMap<InstanceId, ComponentInstance>,

    /// Net name interning table. Codes are assigned in definition order,
    /// starting at 1 (0 is reserved for "unconnected").
    #[serde(default)]
    nets: IndexMap<String, NetCode>,
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of placed components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether the board has no components.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Inserts a component, keyed by its path identity.
    ///
    /// If an instance with the same identity is already on the board it is
    /// replaced in place, keeping its position in the placement order.
    pub fn insert(&mut self, instance: ComponentInstance) -> InstanceId {
        let id = instance.path;
        self.components.insert(id, instance);
        id
    }

    /// Removes a component by identity, preserving the order of the rest.
    pub fn remove(&mut self, id: InstanceId) -> Option<ComponentInstance> {
        self.components.shift_remove(&id)
    }

    /// Looks up a component by identity.
    #[must_use]
    pub fn get(&self, id: InstanceId) -> Option<&ComponentInstance> {
        self.components.get(&id)
    }

    /// Looks up a component by identity, mutably.
    pub fn get_mut(&mut self, id: InstanceId) -> Option<&mut ComponentInstance> {
        self.components.get_mut(&id)
    }

    /// Whether a component with the given identity is on the board.
    #[must_use]
    pub fn contains(&self, id: InstanceId) -> bool {
        self.components.contains_key(&id)
    }

    /// Iterates over the placed components in placement order.
    pub fn instances(&self) -> impl Iterator<Item = &ComponentInstance> {
        self.components.values()
    }

    /// Finds a component by its reference designator text.
    #[must_use]
    pub fn find_by_reference(&self, reference: &str) -> Option<&ComponentInstance> {
        self.instances().find(|c| c.reference.text == reference)
    }

    /// Interns a net name, returning its code. Repeated calls with the same
    /// name return the same code.
    pub fn add_net(&mut self, name: impl Into<String>) -> NetCode {
        let next = NetCode(u32::try_from(self.nets.len()).unwrap_or(u32::MAX - 1) + 1);
        *self.nets.entry(name.into()).or_insert(next)
    }

    /// Looks up the code for a net name.
    #[must_use]
    pub fn net_code(&self, name: &str) -> Option<NetCode> {
        self.nets.get(name).copied()
    }

    /// Looks up the name for a net code.
    #[must_use]
    pub fn net_name(&self, code: NetCode) -> Option<&str> {
        self.nets
            .iter()
            .find_map(|(name, c)| (*c == code).then_some(name.as_str()))
    }

    /// Makes the given component the sole selection.
    ///
    /// Returns `false` (leaving the selection untouched) if the component is
    /// not on the board.
    pub fn select_only(&mut self, id: InstanceId) -> bool {
        if !self.contains(id) {
            return false;
        }
        for instance in self.components.values_mut() {
            instance.flags.set(InstanceFlags::SELECTED, instance.path == id);
        }
        true
    }

    /// The first component marked selected, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&ComponentInstance> {
        self.instances().find(|c| c.is_selected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footprint_id_roundtrips_through_string() {
        let id = FootprintId::new("Resistor_SMD", "R_0603");
        assert_eq!(id.to_string(), "Resistor_SMD:R_0603");
        assert_eq!("Resistor_SMD:R_0603".parse::<FootprintId>().unwrap(), id);
    }

    #[test]
    fn footprint_id_splits_on_first_colon() {
        let id: FootprintId = "lib:name:with:colons".parse().unwrap();
        assert_eq!(id.library, "lib");
        assert_eq!(id.name, "name:with:colons");
    }

    #[test]
    fn footprint_id_rejects_missing_parts() {
        assert!("no-colon".parse::<FootprintId>().is_err());
        assert!(":name".parse::<FootprintId>().is_err());
        assert!("lib:".parse::<FootprintId>().is_err());
    }

    #[test]
    fn net_interning_is_stable() {
        let mut board = Board::new();
        let gnd = board.add_net("GND");
        let vcc = board.add_net("VCC");
        assert_ne!(gnd, vcc);
        assert!(gnd.is_connected());
        assert_eq!(board.add_net("GND"), gnd);
        assert_eq!(board.net_code("GND"), Some(gnd));
        assert_eq!(board.net_name(vcc), Some("VCC"));
        assert_eq!(board.net_name(NetCode::UNCONNECTED), None);
    }

    #[test]
    fn insert_with_same_identity_replaces_in_place() {
        let mut board = Board::new();
        let first = board.insert(ComponentInstance::new(FootprintId::new("lib", "A")));
        let target = board.insert(ComponentInstance::new(FootprintId::new("lib", "B")));
        let last = board.insert(ComponentInstance::new(FootprintId::new("lib", "C")));

        let mut replacement = ComponentInstance::new(FootprintId::new("lib", "B2"));
        replacement.path = target;
        board.insert(replacement);

        assert_eq!(board.len(), 3);
        let order: Vec<_> = board.instances().map(|c| c.path).collect();
        assert_eq!(order, vec![first, target, last]);
        assert_eq!(board.get(target).unwrap().id.name, "B2");
    }

    #[test]
    fn select_only_clears_previous_selection() {
        let mut board = Board::new();
        let a = board.insert(ComponentInstance::new(FootprintId::new("lib", "A")));
        let b = board.insert(ComponentInstance::new(FootprintId::new("lib", "B")));

        assert!(board.select_only(a));
        assert!(board.select_only(b));
        assert_eq!(board.selected().unwrap().path, b);
        assert!(!board.get(a).unwrap().is_selected());
    }

    #[test]
    fn select_only_rejects_unknown_instance() {
        let mut board = Board::new();
        let a = board.insert(ComponentInstance::new(FootprintId::new("lib", "A")));
        board.select_only(a);
        assert!(!board.select_only(InstanceId::new()));
        assert_eq!(board.selected().unwrap().path, a);
    }

    #[test]
    fn board_document_roundtrips_through_json() {
        let mut board = Board::new();
        let gnd = board.add_net("GND");
        let mut inst = ComponentInstance::new(FootprintId::new("Resistor_SMD", "R_0603"));
        inst.reference.text = "R5".to_string();
        inst.pads.push(Pad::connectable("1", -0.75, 0.0));
        inst.pads[0].net = gnd;
        board.insert(inst);

        let json = serde_json::to_string(&board).unwrap();
        let parsed: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, board);
    }
}
