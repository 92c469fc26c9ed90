//! Pure display computations. None of these allocate state or fail: an
//! unusable input yields a fixed placeholder.

pub mod dates;
pub mod duration;
pub mod intensity;
pub mod time_ago;
