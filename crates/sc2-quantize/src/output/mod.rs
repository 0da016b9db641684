//! Output types for the conversion pipeline.
//!
//! [`IndexGrid`] is the working representation between pixel classification
//! and tile encoding: one palette index per pixel. It can be rendered back to
//! RGB with any [`Palette`](crate::palette::Palette) for previews.

mod index_grid;

pub use index_grid::IndexGrid;
