//! Interaction state: the pure half of the binders in `crate::dom`.
//!
//! Everything here is DOM-free so the rules can be tested natively; the
//! components in `crate::dom` hold the nodes and apply these states.

pub mod expand;
pub mod form;
pub mod launch;
pub mod nav;
