//! Bezier handle cascades and the polygon morph animation built on top of them.
//!
//! The [bezier] module evaluates a curve point with de Casteljau's algorithm while keeping every
//! intermediate level of interpolated points (the "handles"). The [animation] module sweeps the
//! interpolation parameter over regular polygons of increasing side count and accumulates the
//! traced curve.
//!
//! # Examples
//!
//! ```
//! # use bezier_beauty::animation::*;
//! let mut animator = Animator::default();
//! let frame = animator.tick();
//! assert_eq!(frame.sides, 3);
//! // triangle closed back to its first vertex (4 points), cascaded down to 2 points
//! assert_eq!(frame.cascade.level_count(), 3);
//! assert_eq!(frame.trail.len(), 1);
//! ```
#[macro_use]
mod macros;
pub mod animation;
pub mod bezier;
pub mod core;
pub mod palette;
pub mod polygon;
