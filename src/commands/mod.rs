mod cleanup;
mod preflight;

pub use cleanup::*;
pub use preflight::*;
