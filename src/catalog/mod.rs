//! Footprint library catalogs.
//!
//! A catalog answers two questions: which footprints does a library contain
//! (sorted, suffix-free names), and what does a given footprint look like
//! (a fresh, board-independent [`ComponentInstance`] template).
//!
//! The cycler only ever talks to the [`LibraryCatalog`] trait, so a host with
//! its own library storage can plug in directly. [`DirectoryCatalog`] is the
//! bundled implementation, backed by a root directory of per-library folders.

pub mod directory;
pub mod order;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub use directory::{DirectoryCatalog, FootprintDef, PadDef};
pub use order::NameOrder;

use crate::board::ComponentInstance;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Access to a set of footprint libraries.
pub trait LibraryCatalog {
    /// Lists the footprint names in a library, sorted in cycling order.
    ///
    /// Names have any storage-specific suffix stripped and are unique within
    /// the library.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::LibraryNotFound`] if the library's backing
    /// location does not exist, or [`CatalogError::ListFailed`] if it cannot
    /// be enumerated.
    fn list_footprints(&self, library: &str) -> CatalogResult<Vec<String>>;

    /// Loads a footprint definition as a fresh instance template.
    ///
    /// The template carries the library's default geometry and pad layout, a
    /// fresh identity token, and no net connections; it is not attached to
    /// any board.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DefinitionMissing`] or
    /// [`CatalogError::DefinitionInvalid`] if the definition is absent or
    /// malformed. A failed load never touches any board state.
    fn load_footprint(&self, library: &str, name: &str) -> CatalogResult<ComponentInstance>;
}

/// Errors that can occur during catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The named library has no backing location.
    #[error("library not found: {library} (looked in {path})")]
    LibraryNotFound {
        /// Library name that was looked up.
        library: String,
        /// Location that was checked.
        path: PathBuf,
    },

    /// The library location exists but could not be enumerated.
    #[error("failed to list library: {library}")]
    ListFailed {
        /// Library name.
        library: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The footprint definition is not in the library.
    #[error("footprint definition not found: {library}:{name}")]
    DefinitionMissing {
        /// Library name.
        library: String,
        /// Footprint name.
        name: String,
    },

    /// The footprint definition exists but could not be read.
    #[error("failed to read footprint definition: {library}:{name}")]
    DefinitionRead {
        /// Library name.
        library: String,
        /// Footprint name.
        name: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The footprint definition is malformed.
    #[error("invalid footprint definition {library}:{name}: {message}")]
    DefinitionInvalid {
        /// Library name.
        library: String,
        /// Footprint name.
        name: String,
        /// Description of what's wrong.
        message: String,
        /// Underlying parse error, if any.
        #[source]
        source: Option<serde_json::Error>,
    },
}

impl CatalogError {
    /// Creates a library-not-found error.
    pub fn library_not_found(library: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::LibraryNotFound {
            library: library.into(),
            path: path.into(),
        }
    }

    /// Creates a list-failed error.
    pub fn list_failed(library: impl Into<String>, source: io::Error) -> Self {
        Self::ListFailed {
            library: library.into(),
            source,
        }
    }

    /// Creates a definition-missing error.
    pub fn definition_missing(library: impl Into<String>, name: impl Into<String>) -> Self {
        Self::DefinitionMissing {
            library: library.into(),
            name: name.into(),
        }
    }

    /// Creates a definition-invalid error.
    pub fn definition_invalid(
        library: impl Into<String>,
        name: impl Into<String>,
        message: impl Into<String>,
        source: Option<serde_json::Error>,
    ) -> Self {
        Self::DefinitionInvalid {
            library: library.into(),
            name: name.into(),
            message: message.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CatalogError::definition_missing("Resistor_SMD", "R_0603");
        assert_eq!(
            err.to_string(),
            "footprint definition not found: Resistor_SMD:R_0603"
        );
    }

    #[test]
    fn library_not_found_names_the_location() {
        let err = CatalogError::library_not_found("Missing", "/libs/Missing.pretty");
        let msg = err.to_string();
        assert!(msg.contains("Missing"));
        assert!(msg.contains("/libs/Missing.pretty"));
    }
}
