pub mod animal_type;
pub mod pet;
pub mod shared;
