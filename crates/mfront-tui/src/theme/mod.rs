//! Light and dark color schemes
//!
//! Widgets never pick colors directly: they receive the [`Palette`] for the
//! resolved theme and build styles through [`styles`].

pub mod palette;
pub mod styles;

pub use palette::Palette;
