//! Directory-backed footprint catalog.
//!
//! Libraries live under a configured root directory, one folder per library
//! named `<library>.pretty`, holding one JSON definition file per footprint
//! (`<name>.json`). The file stem is the footprint name; the stored suffix is
//! never part of a name.
//!
//! The JSON schema here ([`FootprintDef`]) is this crate's own serialisation
//! of its own model. It is not a parser for any CAD vendor's footprint
//! format; hosts with native library storage implement
//! [`LibraryCatalog`] themselves.

use std::collections::HashSet;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::order::NameOrder;
use super::{CatalogError, CatalogResult, LibraryCatalog};
use crate::board::{
    ComponentInstance, FootprintId, InstanceFlags, Pad, PadFlags, PinType, Point, Side,
};

/// Per-library folder suffix.
pub const LIBRARY_SUFFIX: &str = ".pretty";

/// Definition file extension (without the dot).
pub const DEFINITION_EXTENSION: &str = "json";

/// A footprint catalog backed by a directory tree.
#[derive(Debug, Clone)]
pub struct DirectoryCatalog {
    root: PathBuf,
    order: NameOrder,
}

impl DirectoryCatalog {
    /// Creates a catalog rooted at the given directory, with the default
    /// lexicographic name order.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            order: NameOrder::default(),
        }
    }

    /// Sets the name ordering used for listings.
    #[must_use]
    pub const fn with_order(mut self, order: NameOrder) -> Self {
        self.order = order;
        self
    }

    /// The configured library root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves a library name to its backing folder.
    #[must_use]
    pub fn library_dir(&self, library: &str) -> PathBuf {
        self.root.join(format!("{library}{LIBRARY_SUFFIX}"))
    }

    fn definition_path(&self, library: &str, name: &str) -> PathBuf {
        self.library_dir(library)
            .join(format!("{name}.{DEFINITION_EXTENSION}"))
    }
}

impl LibraryCatalog for DirectoryCatalog {
    fn list_footprints(&self, library: &str) -> CatalogResult<Vec<String>> {
        let dir = self.library_dir(library);
        if !dir.is_dir() {
            return Err(CatalogError::library_not_found(library, dir));
        }

        let entries = fs::read_dir(&dir).map_err(|e| CatalogError::list_failed(library, e))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| CatalogError::list_failed(library, e))?;
            let path = entry.path();
            if path.extension().and_then(OsStr::to_str) != Some(DEFINITION_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(OsStr::to_str) {
                names.push(stem.to_string());
            }
        }

        self.order.sort(&mut names);
        debug!(library, count = names.len(), "listed footprint library");
        Ok(names)
    }

    fn load_footprint(&self, library: &str, name: &str) -> CatalogResult<ComponentInstance> {
        let path = self.definition_path(library, name);
        if !path.is_file() {
            return Err(CatalogError::definition_missing(library, name));
        }

        let contents = fs::read_to_string(&path).map_err(|e| CatalogError::DefinitionRead {
            library: library.to_string(),
            name: name.to_string(),
            source: e,
        })?;

        let def: FootprintDef = serde_json::from_str(&contents)
            .map_err(|e| CatalogError::definition_invalid(library, name, e.to_string(), Some(e)))?;

        def.validate()
            .map_err(|message| CatalogError::definition_invalid(library, name, message, None))?;

        debug!(library, name, "loaded footprint definition");
        Ok(def.instantiate(library, name))
    }
}

/// On-disk footprint definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FootprintDef {
    /// Human-readable description.
    #[serde(default)]
    pub description: String,

    /// Side of the board the footprint defaults to.
    #[serde(default)]
    pub side: Side,

    /// Pad layout.
    #[serde(default)]
    pub pads: Vec<PadDef>,
}

/// On-disk pad definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PadDef {
    /// Pad number or name. Absent for mechanical pads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,

    /// X offset from the footprint origin in mm.
    pub x: f64,

    /// Y offset from the footprint origin in mm.
    pub y: f64,

    /// Whether the pad sits on a copper-bearing layer.
    #[serde(default = "default_true")]
    pub copper: bool,

    /// Whether unrouted connections to the pad show in the ratsnest.
    #[serde(default = "default_true")]
    pub ratsnest: bool,

    /// Electrical role of the pin.
    #[serde(default)]
    pub pin_type: PinType,

    /// Pin function label.
    #[serde(default)]
    pub pin_function: String,
}

const fn default_true() -> bool {
    true
}

impl FootprintDef {
    /// Validates the definition.
    ///
    /// # Errors
    ///
    /// Returns a description of the problem if two copper pads share a
    /// number. (Duplicate numbers on non-copper pads are legitimate, e.g.
    /// paired mechanical pads.)
    pub fn validate(&self) -> Result<(), String> {
        let mut seen = HashSet::new();
        for pad in &self.pads {
            let Some(number) = pad.number.as_deref().filter(|n| !n.is_empty()) else {
                continue;
            };
            if pad.copper && !seen.insert(number) {
                return Err(format!("duplicate copper pad number '{number}'"));
            }
        }
        Ok(())
    }

    /// Instantiates the definition as a fresh, board-independent template.
    ///
    /// The template sits at the origin with zero orientation, carries a fresh
    /// identity token, default reference/value text, and all pads
    /// unconnected. The `NEW` flag marks it as not yet committed.
    #[must_use]
    pub fn instantiate(&self, library: &str, name: &str) -> ComponentInstance {
        let mut instance = ComponentInstance::new(FootprintId::new(library, name));
        instance.side = self.side;
        instance.flags = InstanceFlags::NEW;
        instance.pads = self.pads.iter().map(PadDef::instantiate).collect();
        instance
    }
}

impl PadDef {
    fn instantiate(&self) -> Pad {
        let mut flags = PadFlags::empty();
        flags.set(PadFlags::ON_COPPER, self.copper);
        flags.set(PadFlags::SHOW_RATSNEST, self.ratsnest);
        Pad {
            number: self.number.clone(),
            offset: Point::new(self.x, self.y),
            net: crate::board::NetCode::UNCONNECTED,
            pin_function: self.pin_function.clone(),
            pin_type: self.pin_type,
            flags,
        }
    }
}
