mod formatting;
mod logging;

pub use formatting::*;
pub use logging::*;
