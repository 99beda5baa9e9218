pub mod animal_type;
pub mod health;
pub mod pet;
