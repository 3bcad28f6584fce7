//! Synthetic chat room memberships for seeding load tests.
//!
//! Given a roster of usernames, this crate generates rooms whose sizes follow
//! a Pareto (80/20) distribution, fills each room with randomly chosen users,
//! and produces a manifest naming who creates each room and whom they invite.
//!
//! # Overview
//!
//! The pipeline runs forward in one pass:
//!
//! - [`Roster`] loads usernames from a CSV file
//! - [`generate_room_sizes`] draws bounded power-law room sizes
//! - [`assign_members`] samples distinct members per room
//! - [`Manifest`] groups rooms by creator and is written atomically
//! - [`summarize`] reports size range and membership skew
//!
//! All randomness comes from a caller-supplied RNG, so a fixed seed
//! reproduces the same dataset.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use room_seed::{Manifest, Roster, assign_members, generate_room_sizes, summarize};
//!
//! let roster = Roster::new((0..30).map(|i| format!("user{i}")).collect());
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//!
//! let sizes = generate_room_sizes(roster.len(), &mut rng).expect("valid distribution");
//! let rooms = assign_members(&roster, &sizes, &mut rng).expect("sizes fit roster");
//! let manifest = Manifest::from_rooms(&rooms);
//! let stats = summarize(&roster, &rooms);
//!
//! assert_eq!(manifest.creators.len(), sizes.len());
//! assert_eq!(stats.room_count, sizes.len());
//! ```

mod assignment;
mod atomic_io;
mod config;
mod error;
mod manifest;
mod pipeline;
mod roster;
mod sizing;
mod statistics;

pub use assignment::{Room, assign_members};
pub use config::RoomSeedSettings;
pub use error::{GenerationError, ManifestError, RosterError, RunError};
pub use manifest::{CreationEntry, Manifest, ManifestLayout};
pub use pipeline::{RunOutcome, generate_rooms, run};
pub use roster::{Roster, USERNAME_COLUMN};
pub use sizing::{
    MIN_ROOM_SIZE, PARETO_SCALE, PARETO_SHAPE, RoomSize, generate_room_sizes, sample_room_sizes,
};
pub use statistics::{
    CENTURION_THRESHOLD, MembershipCounts, SizeSummary, Statistics, summarize,
    summarize_with_threshold,
};
