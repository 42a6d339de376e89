pub mod geometry;
pub mod model;
pub mod opening;
pub mod template;

pub use geometry::*;
pub use model::*;
pub use opening::*;
pub use template::*;
