//! # Coulomb Core
//!
//! The numeric heart of `coulomb` and the adapter that turns its results into
//! pictures.
//!
//! * **[`grid`]**: samples observation points over the plot bounds.
//! * **[`field`]**: Coulomb's law and superposition.
//! * **[`palette`]**: maps charges and field strengths to colors.
//! * **[`render`]**: composes a drawable scene and hands it to a [`render::PlotSink`].
//! * **[`pipeline`]**: runs the stages above for a collected request.

pub mod field;
pub mod grid;
pub mod palette;
pub mod pipeline;
pub mod render;
