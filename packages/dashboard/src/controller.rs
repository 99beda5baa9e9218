//! Dashboard state: the pet and animal type collections, loading flag,
//! filter settings and the notification slot.
//!
//! Local state after a successful mutation differs per operation:
//! adding or deleting a pet refetches both collections, updating a pet
//! merges the changed field into the matching record, and adding an
//! animal type appends the returned record.

use common::{AnimalType, NewPet, Pet, PetPatch, PetStatus, Priority};
use tracing::{instrument, warn};

use crate::form::{ANIMAL_TYPE_CREATE_FAILED, DraftField, PetDraft};
use crate::gateway::PetApi;
use crate::list_view::{FilterPatch, FilterSettings, ListView, animal_type_options, empty_message};
use crate::notification::{Notification, Notifier};

pub const LOAD_FAILED: &str = "Failed to load data. Please try again.";
pub const DELETE_SUCCEEDED: &str = "Pet has been deleted successfully!";
pub const DELETE_FAILED: &str = "Failed to delete pet. Please try again.";
pub const UPDATE_SUCCEEDED: &str = "Pet updated successfully!";
pub const ADD_TYPE_FAILED: &str = "Failed to add animal type. Please try again.";

/// The single field an in-place pet update changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PetChange {
    Status(PetStatus),
    Priority(Priority),
}

impl PetChange {
    pub fn patch(&self) -> PetPatch {
        match *self {
            Self::Status(status) => PetPatch {
                status: Some(status),
                priority: None,
            },
            Self::Priority(priority) => PetPatch {
                status: None,
                priority: Some(priority),
            },
        }
    }

    fn apply(&self, pet: &mut Pet) {
        match *self {
            Self::Status(status) => pet.status = status,
            Self::Priority(priority) => pet.priority = priority,
        }
    }
}

pub struct Dashboard<A> {
    api: A,
    pets: Vec<Pet>,
    animal_types: Vec<AnimalType>,
    loading: bool,
    filters: FilterSettings,
    notifier: Notifier,
    /// Bumped whenever `pets` changes; keys the list view memo.
    revision: u64,
    view: ListView,
}

impl<A: PetApi> Dashboard<A> {
    /// A dashboard that has not loaded yet; call [`Dashboard::load`] next.
    pub fn new(api: A) -> Self {
        Self::with_notifier(api, Notifier::default())
    }

    pub fn with_notifier(api: A, notifier: Notifier) -> Self {
        Self {
            api,
            pets: Vec::new(),
            animal_types: Vec::new(),
            loading: true,
            filters: FilterSettings::default(),
            notifier,
            revision: 0,
            view: ListView::default(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn pets(&self) -> &[Pet] {
        &self.pets
    }

    pub fn animal_types(&self) -> &[AnimalType] {
        &self.animal_types
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn filter_settings(&self) -> &FilterSettings {
        &self.filters
    }

    pub fn notification(&self) -> Notification {
        self.notifier.current()
    }

    pub fn dismiss_notification(&mut self) {
        self.notifier.dismiss();
    }

    /// Fetch both collections concurrently and replace local state.
    ///
    /// Either request failing leaves the collections as they were and shows
    /// the load error. Returns whether both requests succeeded.
    #[instrument(skip(self))]
    pub async fn load(&mut self) -> bool {
        self.loading = true;
        let (pets, animal_types) =
            tokio::join!(self.api.list_pets(), self.api.list_animal_types());

        let loaded = match (pets, animal_types) {
            (Ok(pets), Ok(animal_types)) => {
                self.set_pets(pets);
                self.animal_types = animal_types;
                true
            }
            (Err(e), _) | (_, Err(e)) => {
                warn!(error = %e, "Failed to load dashboard data");
                self.notifier.error(LOAD_FAILED);
                false
            }
        };
        self.loading = false;
        loaded
    }

    #[instrument(skip(self, pet), fields(name = %pet.name))]
    pub async fn add_pet(&mut self, pet: NewPet) -> bool {
        match self.api.create_pet(&pet).await {
            Ok(_) => {
                self.load().await;
                self.notifier
                    .success(format!("{} has been added successfully!", pet.name));
                true
            }
            Err(e) => {
                warn!(error = %e, "Failed to add pet");
                self.notifier
                    .error(format!("Failed to add pet: {}", e.user_message()));
                false
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn delete_pet(&mut self, id: i32) -> bool {
        match self.api.delete_pet(id).await {
            Ok(_) => {
                self.load().await;
                self.notifier.success(DELETE_SUCCEEDED);
                true
            }
            Err(e) => {
                warn!(error = %e, "Failed to delete pet");
                self.notifier.error(DELETE_FAILED);
                false
            }
        }
    }

    /// Send a single-field patch and merge it into the matching local record.
    ///
    /// Returns the server's copy of the pet, or the locally merged record when
    /// the server could not read it back.
    #[instrument(skip(self))]
    pub async fn update_pet(&mut self, id: i32, change: PetChange) -> Option<Pet> {
        let response = match self.api.update_pet(id, &change.patch()).await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Failed to update pet");
                self.notifier
                    .error(format!("Failed to update pet: {}", e.user_message()));
                return None;
            }
        };

        let merged = self.pets.iter_mut().find(|pet| pet.id == id).map(|pet| {
            change.apply(pet);
            pet.clone()
        });
        if merged.is_some() {
            self.revision += 1;
        }
        self.notifier.success(UPDATE_SUCCEEDED);

        response.pet.or(merged)
    }

    /// Create an animal type and append it locally. Returns the new id.
    #[instrument(skip(self))]
    pub async fn add_animal_type(&mut self, name: &str) -> Option<i32> {
        match self.api.create_animal_type(name).await {
            Ok(created) => {
                let id = created.id;
                self.notifier
                    .success(format!("Animal type \"{}\" has been added!", created.name));
                self.animal_types.push(created);
                Some(id)
            }
            Err(e) => {
                warn!(error = %e, "Failed to add animal type");
                self.notifier.error(ADD_TYPE_FAILED);
                None
            }
        }
    }

    /// Validate and submit the add-pet form, creating a new animal type first
    /// if one was entered. The draft is reset on success.
    pub async fn submit_draft(&mut self, draft: &mut PetDraft) -> bool {
        if !draft.validate(&self.animal_types) {
            return false;
        }

        let mut animal_type_id = draft.animal_type_id;
        if let Some(new_type) = draft.new_type_name().map(str::to_string) {
            match self.add_animal_type(&new_type).await {
                Some(id) => animal_type_id = Some(id),
                None => {
                    draft.set_error(DraftField::NewAnimalType, ANIMAL_TYPE_CREATE_FAILED);
                    return false;
                }
            }
        }

        let added = self.add_pet(draft.to_new_pet(animal_type_id)).await;
        if added {
            draft.reset();
        }
        added
    }

    pub fn update_filter_settings(&mut self, patch: FilterPatch) {
        self.filters.apply(patch);
    }

    /// Pets after search, type filter and sort. Cached until the collection
    /// or the filter settings change.
    pub fn visible_pets(&mut self) -> &[Pet] {
        self.view.get(self.revision, &self.pets, &self.filters)
    }

    /// Animal types present in the pet list, for the type filter.
    pub fn filter_options(&self) -> Vec<String> {
        animal_type_options(&self.pets)
    }

    /// Message for an empty list view.
    pub fn empty_message(&self) -> String {
        empty_message(&self.filters)
    }

    pub fn view_computations(&self) -> u64 {
        self.view.computations()
    }

    fn set_pets(&mut self, pets: Vec<Pet>) {
        self.pets = pets;
        self.revision += 1;
    }
}
