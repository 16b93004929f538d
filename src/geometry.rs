//! Axis-aligned bounds and dirty-rectangle math.

pub mod bounds;
