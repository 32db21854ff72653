pub mod elevation;
pub mod ownership;

pub use elevation::*;
pub use ownership::*;
