pub mod character;

pub use character::{sorted_by_name, CharacterRecord};
