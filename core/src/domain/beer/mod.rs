pub mod entities;
pub mod ports;
pub mod query;
pub mod services;
pub mod sort;
pub mod specification;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use value_objects::*;
