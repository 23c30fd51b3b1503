//! Demo document types
//!
//! `Fish` and `Person` are stored in the `fish` and `people` collections by
//! the `seed` command.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const FISH_COLLECTION: &str = "fish";
pub const PEOPLE_COLLECTION: &str = "people";

/// A fish, keyed by its name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fish {
    #[serde(rename = "type")]
    pub kind: String,
}

impl Fish {
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into() }
    }
}

/// The classic school, as `(resource, fish)` pairs
pub fn school() -> Vec<(&'static str, Fish)> {
    vec![
        ("onefish", Fish::new("one")),
        ("twofish", Fish::new("two")),
        ("redfish", Fish::new("red")),
        ("bluefish", Fish::new("blue")),
    ]
}

/// A person, keyed by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub age: u8,
}

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Barbara", "Claude", "Dennis", "Edsger", "Frances", "Grace", "Hedy", "Ivan",
    "John", "Ken", "Linus", "Margaret", "Niklaus", "Radia", "Shafi", "Tim", "Whitfield", "Yukihiro",
];

/// Generate `count` fake people with random first names and ages in 0..=120
///
/// Names repeat, so writing them by name keeps only the last of each.
pub fn fake_people<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Person> {
    (0..count)
        .map(|_| Person {
            name: FIRST_NAMES
                .choose(rng)
                .copied()
                .unwrap_or("Anonymous")
                .to_string(),
            age: rng.gen_range(0..=120),
        })
        .collect()
}
