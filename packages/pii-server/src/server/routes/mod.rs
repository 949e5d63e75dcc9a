// HTTP routes
pub mod generate;
pub mod health;
pub mod models;

pub use generate::*;
pub use health::*;
pub use models::*;
