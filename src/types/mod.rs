pub mod errors;
pub mod identity;
pub mod ids;
pub mod ownership;
pub mod plan;
pub mod report;

pub use errors::*;
pub use identity::*;
pub use ids::*;
pub use ownership::*;
pub use plan::*;
pub use report::*;
