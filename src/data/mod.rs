pub mod analysis;
pub mod apnea;
pub mod legend;
pub mod segment_look;
pub mod segments;
pub mod signal;
pub mod viewport;
