pub mod entities;
pub mod policies;
pub mod services;
pub mod tips;
pub mod value_objects;

pub use entities::*;
pub use services::classify;
pub use value_objects::*;
