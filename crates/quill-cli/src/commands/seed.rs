//! Seed command handlers
//!
//! Fill the store with demo data.

use anyhow::{Context, Result};
use tracing::debug;

use quill_core::Driver;

use crate::models::{self, FISH_COLLECTION, PEOPLE_COLLECTION};
use crate::output::Output;

/// Write the classic four-fish school into `fish`
pub fn fish(db: &Driver, output: &Output) -> Result<()> {
    let school = models::school();

    for (name, fish) in &school {
        db.write(FISH_COLLECTION, name, fish)
            .with_context(|| format!("Failed to write fish '{}'", name))?;
        debug!("Wrote fish {}", name);
    }

    output.success(&format!("Seeded {} fish", school.len()));
    Ok(())
}

/// Write `count` fake people into `people`, keyed by name
pub fn people(db: &Driver, count: usize, output: &Output) -> Result<()> {
    let people = models::fake_people(count, &mut rand::thread_rng());

    for person in &people {
        db.write(PEOPLE_COLLECTION, &person.name, person)
            .with_context(|| format!("Failed to write person '{}'", person.name))?;
        debug!("Wrote person {}", person.name);
    }

    output.success(&format!("Seeded {} people", people.len()));
    Ok(())
}
