//! Pure data structures; [`Order`] and [`Assembly`] implement
//! [`ActorEntity`](crate::framework::ActorEntity).

pub mod assembly;
pub mod ingredient;
pub mod item;
pub mod order;

pub use assembly::*;
pub use ingredient::*;
pub use item::*;
pub use order::*;
