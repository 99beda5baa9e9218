//! Search, filter and sort pipeline behind the pet list.
//!
//! Everything here is a pure function of the pet collection and the
//! [`FilterSettings`]; [`ListView`] only caches the last result.

use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use common::Pet;

/// `filter_type` value meaning "no type filter".
pub const ALL_TYPES: &str = "all";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortBy {
    /// Name, A to Z.
    #[default]
    Name,
    /// Priority, Low to High.
    Priority,
    /// Priority, High to Low.
    PriorityDesc,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Priority => "priority",
            Self::PriorityDesc => "priority-desc",
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized keys fall back to name order.
impl FromStr for SortBy {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "priority" => Self::Priority,
            "priority-desc" => Self::PriorityDesc,
            _ => Self::Name,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterSettings {
    pub search_term: String,
    /// An animal type name, or [`ALL_TYPES`].
    pub filter_type: String,
    pub sort_by: SortBy,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            filter_type: ALL_TYPES.to_string(),
            sort_by: SortBy::Name,
        }
    }
}

/// Partial update of [`FilterSettings`]; `None` keeps the current value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterPatch {
    pub search_term: Option<String>,
    pub filter_type: Option<String>,
    pub sort_by: Option<SortBy>,
}

impl FilterSettings {
    pub fn apply(&mut self, patch: FilterPatch) {
        if let Some(search_term) = patch.search_term {
            self.search_term = search_term;
        }
        if let Some(filter_type) = patch.filter_type {
            self.filter_type = filter_type;
        }
        if let Some(sort_by) = patch.sort_by {
            self.sort_by = sort_by;
        }
    }

    fn is_searching(&self) -> bool {
        !self.search_term.trim().is_empty()
    }

    fn is_type_filtered(&self) -> bool {
        self.filter_type != ALL_TYPES
    }
}

/// Case-folded comparison with a raw-string tiebreak, so "bella" and "Bella"
/// sort together but still in a fixed order.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Apply search, type filter and sort to `pets`.
pub fn derive_view(pets: &[Pet], settings: &FilterSettings) -> Vec<Pet> {
    let needle = settings.search_term.to_lowercase();

    let mut view: Vec<Pet> = pets
        .iter()
        .filter(|pet| !settings.is_searching() || pet.name.to_lowercase().contains(&needle))
        .filter(|pet| {
            !settings.is_type_filtered()
                || pet.animal_type.as_deref() == Some(settings.filter_type.as_str())
        })
        .cloned()
        .collect();

    match settings.sort_by {
        SortBy::Name => view.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortBy::Priority => view.sort_by_key(|pet| pet.priority.rank()),
        SortBy::PriorityDesc => view.sort_by(|a, b| b.priority.rank().cmp(&a.priority.rank())),
    }
    view
}

/// Distinct animal type names present in `pets`, sorted, for the type filter.
pub fn animal_type_options(pets: &[Pet]) -> Vec<String> {
    let mut names: Vec<String> = pets
        .iter()
        .filter_map(|pet| pet.animal_type.clone())
        .collect();
    names.sort_by(|a, b| compare_names(a, b));
    names.dedup();
    names
}

/// Message shown in place of an empty list, naming why it is empty.
pub fn empty_message(settings: &FilterSettings) -> String {
    if !settings.search_term.is_empty() {
        format!("No pets found matching \"{}\"", settings.search_term)
    } else if settings.is_type_filtered() {
        format!("No pets found for animal type \"{}\"", settings.filter_type)
    } else {
        "No pets available.".to_string()
    }
}

/// Memoized [`derive_view`] keyed on a collection revision and the settings.
#[derive(Debug, Default)]
pub struct ListView {
    key: Option<(u64, FilterSettings)>,
    pets: Vec<Pet>,
    computations: u64,
}

impl ListView {
    /// Return the derived view, recomputing only if `revision` or `settings` changed.
    pub fn get(&mut self, revision: u64, pets: &[Pet], settings: &FilterSettings) -> &[Pet] {
        let fresh = matches!(&self.key, Some((rev, cached)) if *rev == revision && cached == settings);
        if !fresh {
            self.pets = derive_view(pets, settings);
            self.key = Some((revision, settings.clone()));
            self.computations += 1;
        }
        &self.pets
    }

    /// How many times the view has been recomputed.
    pub fn computations(&self) -> u64 {
        self.computations
    }
}
