pub mod chart;
pub mod signals;

pub use chart::*;
pub use signals::*;
