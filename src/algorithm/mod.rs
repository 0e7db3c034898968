/// Growth engine state machine and snapshot sinks
pub mod executor;
/// Palette enumeration and hue ordering
pub mod palette;
/// Color compatibility cost of a candidate position
pub mod scoring;
/// Frontier scoring and randomized tie-breaking
pub mod selection;
