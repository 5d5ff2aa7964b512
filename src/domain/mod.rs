pub mod errors;
pub mod events;
pub mod item;
pub mod value_objects;

pub use errors::*;
pub use events::*;
pub use item::*;
pub use value_objects::*;
