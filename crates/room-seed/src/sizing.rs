//! Power-law room size sampling.
//!
//! Room sizes are drawn from a Pareto distribution with scale 1 and the shape
//! that yields an 80/20 concentration. Each draw is rounded, clamped to the
//! roster size, and dropped if it would make a room of fewer than two people.

use rand::Rng;
use rand_distr::{Distribution, Pareto};
use tracing::info;

use crate::error::GenerationError;

/// Pareto shape parameter matching the 80/20 rule.
pub const PARETO_SHAPE: f64 = 1.161;

/// Pareto scale parameter; the smallest possible draw.
pub const PARETO_SCALE: f64 = 1.0;

/// Smallest room worth creating: a creator and one invitee.
pub const MIN_ROOM_SIZE: usize = 2;

/// Number of distinct users to place in one room.
///
/// A `RoomSize` is always at least [`MIN_ROOM_SIZE`]. The upper bound depends
/// on the roster and is enforced when members are assigned.
///
/// # Example
///
/// ```
/// use room_seed::RoomSize;
///
/// assert_eq!(RoomSize::new(3).map(RoomSize::get), Some(3));
/// assert!(RoomSize::new(1).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoomSize(usize);

impl RoomSize {
    /// Wraps `size` if it is large enough to form a room.
    #[must_use]
    pub const fn new(size: usize) -> Option<Self> {
        if size >= MIN_ROOM_SIZE {
            Some(Self(size))
        } else {
            None
        }
    }

    /// Returns the member count.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

/// Generates room sizes for a roster of `num_users`.
///
/// Makes exactly `num_users` draws, so the result holds at most that many
/// rooms. See [`sample_room_sizes`] for the per-draw rules.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidDistribution`] if the Pareto parameters
/// are rejected.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use room_seed::generate_room_sizes;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let sizes = generate_room_sizes(50, &mut rng).expect("valid distribution");
///
/// assert!(sizes.len() <= 50);
/// assert!(sizes.iter().all(|size| (2..=50).contains(&size.get())));
/// ```
pub fn generate_room_sizes<R>(num_users: usize, rng: &mut R) -> Result<Vec<RoomSize>, GenerationError>
where
    R: Rng + ?Sized,
{
    sample_room_sizes(num_users, num_users, rng)
}

/// Draws up to `max_candidates` room sizes for a roster of `num_users`.
///
/// Every attempt draws one Pareto variate and rounds it. Draws above
/// `num_users` are clamped to `num_users`; draws below [`MIN_ROOM_SIZE`] are
/// discarded but still use up an attempt. Accepted sizes keep draw order.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidDistribution`] if the Pareto parameters
/// are rejected.
pub fn sample_room_sizes<R>(
    num_users: usize,
    max_candidates: usize,
    rng: &mut R,
) -> Result<Vec<RoomSize>, GenerationError>
where
    R: Rng + ?Sized,
{
    let pareto = Pareto::new(PARETO_SCALE, PARETO_SHAPE).map_err(|err| {
        GenerationError::InvalidDistribution {
            message: err.to_string(),
        }
    })?;

    let mut sizes = Vec::new();
    for _ in 0..max_candidates {
        let draw: f64 = pareto.sample(rng);
        if let Some(size) = clamp_draw(draw, num_users) {
            info!(size = size.get(), "accepted room size");
            sizes.push(size);
        }
    }

    Ok(sizes)
}

/// Rounds a raw draw and applies the clamp and rejection rules.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    reason = "draws are at least 1.0 and compared against the roster size before narrowing"
)]
fn clamp_draw(draw: f64, num_users: usize) -> Option<RoomSize> {
    let rounded = draw.round();
    let size = if rounded >= num_users as f64 {
        num_users
    } else {
        rounded as usize
    };
    RoomSize::new(size)
}
