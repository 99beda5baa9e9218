pub mod pet;
pub mod pet_status;
pub mod priority;

pub use pet::{AnimalType, DeletePetResponse, NewAnimalType, NewPet, Pet, PetPatch, UpdatePetResponse};
pub use pet_status::PetStatus;
pub use priority::Priority;
