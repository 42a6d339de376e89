//! Parametric layout engine for window and door units.
//!
//! Every entry point is a pure function of its arguments: a [`CadModel`],
//! the [`ProductTemplate`] it was built from and an [`EngineConfig`].
//! Nothing is cached between calls.
//!
//! [`CadModel`]: fenestra_types::CadModel
//! [`ProductTemplate`]: fenestra_types::ProductTemplate

pub mod config;
pub mod distribute;
pub mod frame;
pub mod indicator;
pub mod layout;
pub mod pricing;
pub mod validation;

pub use config::EngineConfig;
pub use distribute::{distribute, Distribution};
pub use frame::{mitred_frame, safe_truncation, MitredFrame};
pub use indicator::{opening_glyph, Glyph, GlyphKind, GlyphPath};
pub use layout::{
    compute_layout, FrameMember, FrameRole, LayoutTree, OpeningGlyph, PanelRegion, StyleHints,
};
pub use pricing::{price, Quote};
pub use validation::{validate, ConstraintViolation, Field, ValidationResult};
