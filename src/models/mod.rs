mod report;
mod resource;

pub use report::*;
pub use resource::*;
