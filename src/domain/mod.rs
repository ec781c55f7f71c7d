pub mod phone;
pub mod models;
pub mod backend;
pub mod errors;

pub use phone::*;
pub use models::*;
pub use backend::*;
pub use errors::*;
