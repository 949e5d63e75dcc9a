// Service construction shared by the server and the CLI
pub mod pii;

pub use pii::*;
