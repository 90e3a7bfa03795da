pub mod cloud_interface;
#[cfg(test)]
pub mod fake;
pub mod providers;

pub use cloud_interface::*;
