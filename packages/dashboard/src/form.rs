//! Add-pet form state and client-side validation.

use std::collections::BTreeMap;

use common::{AnimalType, NewPet, PetStatus, Priority};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DraftField {
    Name,
    AnimalType,
    NewAnimalType,
}

pub type FormErrors = BTreeMap<DraftField, String>;

pub const NAME_REQUIRED: &str = "Pet name is required";
pub const ANIMAL_TYPE_REQUIRED: &str = "Please select an existing animal type or enter a new one";
pub const ANIMAL_TYPE_AMBIGUOUS: &str =
    "Please either select an existing animal type OR enter a new one, not both";
pub const ANIMAL_TYPE_EXISTS: &str =
    "This animal type already exists. Please select it from the dropdown instead";
pub const ANIMAL_TYPE_CREATE_FAILED: &str = "Failed to add new animal type. Please try again.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PetDraft {
    pub name: String,
    /// An existing animal type picked from the list.
    pub animal_type_id: Option<i32>,
    /// Free-text name of a type to create on submit.
    pub new_animal_type: String,
    pub priority: Priority,
    pub status: PetStatus,
    errors: FormErrors,
}

impl PetDraft {
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.errors.remove(&DraftField::Name);
    }

    /// Picking an existing type clears any typed-in new type.
    pub fn select_animal_type(&mut self, id: Option<i32>) {
        self.animal_type_id = id;
        if id.is_some() {
            self.new_animal_type.clear();
        }
        self.errors.remove(&DraftField::AnimalType);
    }

    /// Typing a new type clears the selected existing one.
    pub fn set_new_animal_type(&mut self, name: impl Into<String>) {
        self.new_animal_type = name.into();
        if !self.new_animal_type.is_empty() {
            self.animal_type_id = None;
        }
        self.errors.remove(&DraftField::NewAnimalType);
    }

    pub fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }

    pub fn set_status(&mut self, status: PetStatus) {
        self.status = status;
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn error(&self, field: DraftField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn set_error(&mut self, field: DraftField, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// Trimmed new type name, if one was entered.
    pub fn new_type_name(&self) -> Option<&str> {
        let name = self.new_animal_type.trim();
        (!name.is_empty()).then_some(name)
    }

    /// Recompute the field errors against the known animal types.
    /// Returns `true` when the draft can be submitted.
    pub fn validate(&mut self, animal_types: &[AnimalType]) -> bool {
        let mut errors = FormErrors::new();

        if self.name.trim().is_empty() {
            errors.insert(DraftField::Name, NAME_REQUIRED.to_string());
        }

        match (self.animal_type_id, self.new_type_name()) {
            (None, None) => {
                errors.insert(DraftField::AnimalType, ANIMAL_TYPE_REQUIRED.to_string());
            }
            (Some(_), Some(_)) => {
                errors.insert(DraftField::AnimalType, ANIMAL_TYPE_AMBIGUOUS.to_string());
            }
            _ => {}
        }

        if let Some(new_type) = self.new_type_name() {
            let wanted = new_type.to_lowercase();
            if animal_types.iter().any(|t| t.name.to_lowercase() == wanted) {
                errors.insert(DraftField::NewAnimalType, ANIMAL_TYPE_EXISTS.to_string());
            }
        }

        self.errors = errors;
        self.errors.is_empty()
    }

    /// Request body for this draft, tagged with the resolved animal type.
    pub fn to_new_pet(&self, animal_type_id: Option<i32>) -> NewPet {
        NewPet {
            name: self.name.trim().to_string(),
            status: Some(self.status),
            animal_type_id,
            priority: Some(self.priority),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
