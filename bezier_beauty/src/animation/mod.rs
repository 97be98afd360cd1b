//! Animation stepping: sweeps the interpolation fraction over regular polygons of increasing side
//! count and accumulates the traced curve.
mod animator;
mod state;

pub use animator::*;
pub use state::*;
