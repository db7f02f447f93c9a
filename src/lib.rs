//! fpcycle: cycle PCB components through alternate footprint variants
//!
//! While prototyping a board it is common to swap a part's physical footprint
//! back and forth (a resistor between 0402/0603/0805, say) to see what fits.
//! This crate implements that swap as a reusable operation: given a component
//! and a direction, pick the next or previous footprint (by sorted name) from
//! the same library, load it, and transplant the board-specific state of the
//! old instance onto the new one before replacing it on the board.
//!
//! # Architecture
//!
//! The cycler has no ambient host state. Everything it needs is injected:
//!
//! - **Selection**: a [`cycle::SelectionProvider`] maps whatever the host
//!   considers "selected" onto board items.
//! - **Catalog**: a [`catalog::LibraryCatalog`] enumerates and loads footprint
//!   definitions. [`catalog::DirectoryCatalog`] is the bundled implementation,
//!   backed by a configured root directory.
//! - **Board**: an in-memory [`board::Board`] document owned by the caller.
//!
//! The swap itself is split into a pure planning step and a single commit
//! ([`cycle::compute_transplant`] / [`cycle::apply_plan`]), so a failure at
//! any point leaves the board untouched.
//!
//! # Modules
//!
//! - [`board`] — board document, component instances, pads, geometry
//! - [`catalog`] — footprint library enumeration and loading
//! - [`config`] — configuration loading and validation
//! - [`cycle`] — selection resolution, cycling, and the transplant algorithm
//! - [`error`] — configuration and board file error types

pub mod board;
pub mod catalog;
pub mod config;
pub mod cycle;
pub mod error;
