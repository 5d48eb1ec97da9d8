//! Compiled-in token scales
//!
//! Each submodule owns one family of scales and returns fresh
//! [`TokenScale`]s: eleven-step color palettes, the 4px spacing grid, radii,
//! light and dark shadow sets, z-index layers and breakpoints, font stacks
//! with sizes and weights, and transition durations and easings. Composition
//! picks from these; nothing here changes at runtime.

mod animation;
mod color;
mod layout;
mod radius;
mod scale;
mod shadow;
mod spacing;
mod typography;

pub use animation::*;
pub use color::*;
pub use layout::*;
pub use radius::*;
pub use scale::*;
pub use shadow::*;
pub use spacing::*;
pub use typography::*;
