pub mod entities;
pub mod errors;
pub mod factories;
pub mod models;

pub use entities::*;
pub use errors::*;
pub use models::*;
