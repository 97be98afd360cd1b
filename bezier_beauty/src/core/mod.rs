//! Core module has common/shared math and traits used by the geometry and animation modules.
pub mod math;
pub mod traits;
