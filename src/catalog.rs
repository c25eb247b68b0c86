//! Puppy catalog data model and the fixed catalog provider.
//!
//! The catalog is a literal in-memory fixture: ten records, five breeds with
//! one puppy of each gender per breed. It is constructed once at startup and
//! passed into the application by value; there is no module-level mutable
//! state and no failure path.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::assets::handles;

/// Puppy gender.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Opaque handle to a bundled image asset.
///
/// Resolved to a displayable sprite by the asset registry (`crate::assets`).
/// The handle itself carries no meaning beyond identity; a handle with no
/// registered sprite is the collaborator's problem, not a crash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageHandle(pub u16);

impl ImageHandle {
    /// Raw integer value, used when the handle is serialized into a route path.
    pub fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for ImageHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One catalog entry. Immutable once constructed; copied by value into the
/// detail screen when selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuppyRecord {
    /// Breed name, e.g. "Golden Retriever". Not unique: each breed appears
    /// once per gender.
    pub breed_name: String,
    /// Free-form age text, e.g. "2 Months" or "45 Days".
    pub age: String,
    pub gender: Gender,
    /// Long-form description shown on the detail screen.
    pub details: String,
    /// Handle to the bundled sprite for this puppy.
    pub image: ImageHandle,
}

impl PuppyRecord {
    fn new(
        breed_name: &str,
        age: &str,
        gender: Gender,
        details: &str,
        image: ImageHandle,
    ) -> Self {
        Self {
            breed_name: breed_name.to_string(),
            age: age.to_string(),
            gender,
            details: details.to_string(),
            image,
        }
    }
}

/// The fixed ordered sequence of puppy records shown on the list screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    records: Vec<PuppyRecord>,
}

const GOLDEN_DETAILS: &str = "Golden retrievers are very versatile. They’re known as bird dogs, family pets, service dogs for the disabled, and search and rescue dogs.";
const LAB_DETAILS: &str = "Labrador retrievers are excellent family dogs, as long as you keep in mind their need for exercise and training. These are dogs bred to work and work hard and they love to have jobs to do, particularly retrieving";
const SIB_DETAILS: &str = "Siberian huskies are classic northern dogs. They are intelligent but somewhat independent and stubborn. They thrive on human company, but need firm, gentle training right from puppy hood.";
const ROT_DETAILS: &str = "Rottweilers are large, powerful dogs and require extensive socialization and training from early puppyhood.";
const SP_DETAILS: &str = "Smart and easily trained, the ever-popular German shepherd is quite active and likes to have something to do. Therefore, they need ample daily exercise daily; otherwise, they become mischievous or high-strung.";

impl Catalog {
    /// Build the standard ten-entry catalog.
    ///
    /// Pure and deterministic: every invocation returns the same sequence in
    /// the same order, so the result can be snapshot-tested. Cannot fail.
    pub fn standard() -> Self {
        let records = vec![
            PuppyRecord::new(
                "Golden Retriever",
                "2 Months",
                Gender::Female,
                GOLDEN_DETAILS,
                handles::GOLDEN_1,
            ),
            PuppyRecord::new(
                "Labrador Retriever",
                "45 Days",
                Gender::Female,
                LAB_DETAILS,
                handles::LAB_1,
            ),
            PuppyRecord::new(
                "Siberian Husky",
                "1 Month",
                Gender::Female,
                SIB_DETAILS,
                handles::SIB_1,
            ),
            PuppyRecord::new(
                "Rottweiler",
                "30 Days",
                Gender::Female,
                ROT_DETAILS,
                handles::ROT_1,
            ),
            PuppyRecord::new(
                "German Shepherd",
                "2 Months",
                Gender::Female,
                SP_DETAILS,
                handles::SP_1,
            ),
            PuppyRecord::new(
                "Golden Retriever",
                "2 Months",
                Gender::Male,
                GOLDEN_DETAILS,
                handles::GOLDEN_2,
            ),
            PuppyRecord::new(
                "Labrador Retriever",
                "45 Days",
                Gender::Male,
                LAB_DETAILS,
                handles::LAB_2,
            ),
            PuppyRecord::new(
                "Siberian Husky",
                "1 Month",
                Gender::Male,
                SIB_DETAILS,
                handles::SIB_2,
            ),
            PuppyRecord::new(
                "Rottweiler",
                "30 Days",
                Gender::Male,
                ROT_DETAILS,
                handles::ROT_2,
            ),
            PuppyRecord::new(
                "German Shepherd",
                "2 Months",
                Gender::Male,
                SP_DETAILS,
                handles::SP_2,
            ),
        ];
        Self { records }
    }

    /// All records, in catalog order.
    pub fn records(&self) -> &[PuppyRecord] {
        &self.records
    }

    /// Record at `index`, if in bounds.
    pub fn get(&self, index: usize) -> Option<&PuppyRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
