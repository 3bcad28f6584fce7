//! End-to-end generator run.
//!
//! Composes the stages in order: load roster, size rooms, assign members,
//! write the manifest, then summarize. Nothing is shared between runs.

use std::path::PathBuf;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use crate::assignment::{Room, assign_members};
use crate::config::RoomSeedSettings;
use crate::error::{GenerationError, RunError};
use crate::manifest::Manifest;
use crate::roster::Roster;
use crate::sizing::generate_room_sizes;
use crate::statistics::{Statistics, summarize_with_threshold};

/// Result of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    /// Seed the room generator was initialised with.
    pub seed: u64,
    /// Where the manifest was written.
    pub manifest_path: PathBuf,
    /// Distribution summary for the generated rooms.
    pub statistics: Statistics,
}

/// Sizes and populates rooms for `roster` using one RNG for both stages.
///
/// # Errors
///
/// Returns [`GenerationError`] if sizing or assignment fails.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use room_seed::{Roster, generate_rooms};
///
/// let roster = Roster::new((0..20).map(|i| format!("user{i}")).collect());
/// let rooms = generate_rooms(&roster, &mut ChaCha8Rng::seed_from_u64(9)).expect("rooms");
/// let again = generate_rooms(&roster, &mut ChaCha8Rng::seed_from_u64(9)).expect("rooms");
///
/// assert_eq!(rooms, again);
/// ```
pub fn generate_rooms<R>(roster: &Roster, rng: &mut R) -> Result<Vec<Room>, GenerationError>
where
    R: Rng + ?Sized,
{
    let sizes = generate_room_sizes(roster.len(), rng)?;
    assign_members(roster, &sizes, rng)
}

/// Runs the generator with `settings`.
///
/// # Errors
///
/// Returns [`RunError`] if the roster cannot be loaded, generation fails, or
/// the manifest cannot be written. Nothing is written when an earlier stage
/// fails.
pub fn run(settings: &RoomSeedSettings) -> Result<RunOutcome, RunError> {
    let roster_path = settings.roster_path();
    let roster = Roster::from_file(&roster_path)?;
    info!(path = %roster_path.display(), users = roster.len(), "loaded roster");

    let seed = settings.seed.unwrap_or_else(random_seed);
    info!(seed, "seeding room generator");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let rooms = generate_rooms(&roster, &mut rng)?;
    if rooms.is_empty() {
        warn!(users = roster.len(), "no rooms generated");
    }

    let manifest_path = settings.manifest_path();
    Manifest::from_rooms(&rooms).write_to_file(&manifest_path, settings.manifest_layout())?;

    let statistics = summarize_with_threshold(&roster, &rooms, settings.centurion_threshold());
    log_statistics(&statistics);

    Ok(RunOutcome {
        seed,
        manifest_path,
        statistics,
    })
}

fn log_statistics(statistics: &Statistics) {
    match statistics.sizes {
        Some(sizes) => info!(
            rooms = statistics.room_count,
            max = sizes.max,
            min = sizes.min,
            average = sizes.average,
            "room sizes"
        ),
        None => info!(rooms = 0, "room sizes"),
    }
    info!(
        roomless = statistics.roomless,
        in_all_rooms = statistics.in_all_rooms,
        centurions = statistics.centurions,
        centurion_threshold = statistics.centurion_threshold,
        "room membership"
    );
}

fn random_seed() -> u64 {
    rand::rng().random()
}
