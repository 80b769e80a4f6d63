pub mod options;
pub use options::{InspectFlags, InspectOptions};
