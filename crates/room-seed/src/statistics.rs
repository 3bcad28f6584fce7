//! Membership aggregation and distribution statistics.
//!
//! Statistics are derived from the roster and the generated rooms only; they
//! are reported and never written to the manifest.

use std::collections::HashMap;
use std::fmt;

use crate::assignment::Room;
use crate::roster::Roster;

/// Users in more rooms than this are reported as centurions.
pub const CENTURION_THRESHOLD: usize = 99;

const RULE: &str = "###################################";

/// Number of rooms each user belongs to, as creator or invitee.
///
/// Users missing from every room are not stored and read back as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MembershipCounts {
    counts: HashMap<String, usize>,
}

impl MembershipCounts {
    /// Counts memberships across `rooms`.
    #[must_use]
    pub fn from_rooms(rooms: &[Room]) -> Self {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for member in rooms.iter().flat_map(Room::members) {
            *counts.entry(member.clone()).or_default() += 1;
        }
        Self { counts }
    }

    /// Returns how many rooms `user` belongs to.
    #[must_use]
    pub fn get(&self, user: &str) -> usize {
        self.counts.get(user).copied().unwrap_or_default()
    }

    /// Returns the total number of memberships across all users.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

/// Size range of the generated rooms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeSummary {
    /// Largest room size.
    pub max: usize,
    /// Smallest room size.
    pub min: usize,
    /// Mean room size.
    pub average: f64,
}

/// Summary of a generated room distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    /// Number of rooms generated.
    pub room_count: usize,
    /// Size range, or `None` when no rooms were generated.
    pub sizes: Option<SizeSummary>,
    /// Roster seats belonging to no room.
    pub roomless: usize,
    /// Roster seats belonging to every room. Zero when there are no rooms.
    pub in_all_rooms: usize,
    /// Roster seats belonging to more than `centurion_threshold` rooms.
    pub centurions: usize,
    /// Threshold used to count centurions.
    pub centurion_threshold: usize,
}

/// Summarizes `rooms` over `roster` using [`CENTURION_THRESHOLD`].
///
/// # Example
///
/// ```
/// use room_seed::{Room, Roster, summarize};
///
/// let roster = Roster::new(vec!["a".to_owned(), "b".to_owned(), "c".to_owned()]);
/// let rooms = vec![
///     Room::new(0, vec!["a".to_owned(), "b".to_owned()]),
///     Room::new(1, vec!["b".to_owned(), "a".to_owned()]),
/// ];
///
/// let stats = summarize(&roster, &rooms);
///
/// assert_eq!(stats.room_count, 2);
/// assert_eq!(stats.roomless, 1);
/// assert_eq!(stats.in_all_rooms, 2);
/// ```
#[must_use]
pub fn summarize(roster: &Roster, rooms: &[Room]) -> Statistics {
    summarize_with_threshold(roster, rooms, CENTURION_THRESHOLD)
}

/// Summarizes `rooms` over `roster`, counting users in more than
/// `centurion_threshold` rooms as centurions.
///
/// Each roster seat is classified on its own, so a duplicated username
/// contributes once per occurrence.
#[must_use]
pub fn summarize_with_threshold(
    roster: &Roster,
    rooms: &[Room],
    centurion_threshold: usize,
) -> Statistics {
    let room_count = rooms.len();
    let memberships = MembershipCounts::from_rooms(rooms);
    let seat_counts: Vec<usize> = roster
        .users()
        .iter()
        .map(|user| memberships.get(user))
        .collect();

    let roomless = seat_counts.iter().filter(|&&count| count == 0).count();
    let in_all_rooms = if room_count == 0 {
        0
    } else {
        seat_counts
            .iter()
            .filter(|&&count| count == room_count)
            .count()
    };
    let centurions = seat_counts
        .iter()
        .filter(|&&count| count > centurion_threshold)
        .count();

    Statistics {
        room_count,
        sizes: size_summary(rooms),
        roomless,
        in_all_rooms,
        centurions,
        centurion_threshold,
    }
}

fn size_summary(rooms: &[Room]) -> Option<SizeSummary> {
    let max = rooms.iter().map(Room::size).max()?;
    let min = rooms.iter().map(Room::size).min()?;
    let total: usize = rooms.iter().map(Room::size).sum();
    Some(SizeSummary {
        max,
        min,
        average: mean(total, rooms.len()),
    })
}

#[expect(
    clippy::cast_precision_loss,
    clippy::float_arithmetic,
    reason = "room counts are far below 2^52 and the mean is only reported"
)]
fn mean(total: usize, count: usize) -> f64 {
    total as f64 / count as f64
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        writeln!(f, "{} Total rooms", self.room_count)?;
        match self.sizes {
            Some(sizes) => {
                writeln!(f, "Max = {}", sizes.max)?;
                writeln!(f, "Min = {}", sizes.min)?;
                writeln!(f, "Avg = {:.2}", sizes.average)?;
            }
            None => writeln!(f, "No rooms generated")?,
        }
        writeln!(f, "{RULE}")?;
        writeln!(f, "{} users in zero rooms", self.roomless)?;
        writeln!(f, "{} users in all rooms", self.in_all_rooms)?;
        write!(
            f,
            "{} users in > {} rooms",
            self.centurions, self.centurion_threshold
        )
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rstest::{fixture, rstest};

    use super::*;
    use crate::assignment::assign_members;
    use crate::sizing::generate_room_sizes;

    fn users(names: &[&str]) -> Vec<String> {
        names.iter().map(|&name| name.to_owned()).collect()
    }

    #[fixture]
    fn roster() -> Roster {
        Roster::new(users(&["A", "B", "C", "D"]))
    }

    #[fixture]
    fn rooms() -> Vec<Room> {
        vec![
            Room::new(0, users(&["A", "B"])),
            Room::new(1, users(&["C", "A", "B"])),
            Room::new(2, users(&["B", "A"])),
        ]
    }

    #[rstest]
    fn counts_every_membership(rooms: Vec<Room>) {
        let counts = MembershipCounts::from_rooms(&rooms);

        assert_eq!(counts.get("A"), 3);
        assert_eq!(counts.get("B"), 3);
        assert_eq!(counts.get("C"), 1);
        assert_eq!(counts.get("D"), 0);
        assert_eq!(counts.total(), 7);
    }

    #[rstest]
    fn summarizes_sizes_and_membership(roster: Roster, rooms: Vec<Room>) {
        let stats = summarize(&roster, &rooms);

        assert_eq!(stats.room_count, 3);
        let sizes = stats.sizes.expect("rooms were generated");
        assert_eq!(sizes.max, 3);
        assert_eq!(sizes.min, 2);
        assert!((sizes.average - 7.0 / 3.0).abs() < 1e-9);
        assert_eq!(stats.roomless, 1);
        assert_eq!(stats.in_all_rooms, 2);
        assert_eq!(stats.centurions, 0);
    }

    #[rstest]
    fn zero_rooms_has_no_size_summary(roster: Roster) {
        let stats = summarize(&roster, &[]);

        assert_eq!(stats.room_count, 0);
        assert_eq!(stats.sizes, None);
        assert_eq!(stats.roomless, 4);
        assert_eq!(stats.in_all_rooms, 0);
    }

    #[test]
    fn user_in_every_room_is_counted_once() {
        let roster = Roster::new(users(&["A", "B", "C"]));
        let rooms = vec![
            Room::new(0, users(&["A", "B"])),
            Room::new(1, users(&["C", "A"])),
        ];

        let stats = summarize(&roster, &rooms);

        assert_eq!(stats.in_all_rooms, 1);
    }

    #[rstest]
    #[case::default_threshold(CENTURION_THRESHOLD, 0)]
    #[case::low_threshold(1, 2)]
    #[case::threshold_equal_to_count(3, 0)]
    fn centurions_exceed_threshold(
        roster: Roster,
        rooms: Vec<Room>,
        #[case] threshold: usize,
        #[case] expected: usize,
    ) {
        let stats = summarize_with_threshold(&roster, &rooms, threshold);

        assert_eq!(stats.centurions, expected);
        assert_eq!(stats.centurion_threshold, threshold);
    }

    #[test]
    fn hundred_room_member_is_a_centurion() {
        let roster = Roster::new(users(&["A", "B", "C"]));
        let rooms: Vec<Room> = (0..100).map(|index| Room::new(index, users(&["A", "B"]))).collect();

        let stats = summarize(&roster, &rooms);

        assert_eq!(stats.centurions, 2);
        assert_eq!(stats.in_all_rooms, 2);
    }

    #[test]
    fn generated_data_obeys_conservation_laws() {
        let roster = Roster::new((0..200).map(|index| format!("user{index}")).collect());
        let mut rng = ChaCha8Rng::seed_from_u64(2026);
        let sizes = generate_room_sizes(roster.len(), &mut rng).expect("sizes");
        let rooms = assign_members(&roster, &sizes, &mut rng).expect("rooms");

        let counts = MembershipCounts::from_rooms(&rooms);
        let seats: usize = rooms.iter().map(Room::size).sum();
        assert_eq!(counts.total(), seats);

        let stats = summarize(&roster, &rooms);
        let active = roster
            .users()
            .iter()
            .filter(|user| counts.get(user) >= 1)
            .count();
        assert_eq!(stats.roomless + active, roster.len());
        assert!(stats.in_all_rooms <= roster.len());
    }

    #[rstest]
    fn summarizing_twice_is_idempotent(roster: Roster, rooms: Vec<Room>) {
        assert_eq!(summarize(&roster, &rooms), summarize(&roster, &rooms));
    }

    #[rstest]
    fn display_reports_every_value(roster: Roster, rooms: Vec<Room>) {
        let report = summarize(&roster, &rooms).to_string();

        assert!(report.contains("3 Total rooms"));
        assert!(report.contains("Max = 3"));
        assert!(report.contains("Min = 2"));
        assert!(report.contains("Avg = 2.33"));
        assert!(report.contains("1 users in zero rooms"));
        assert!(report.contains("2 users in all rooms"));
        assert!(report.contains("0 users in > 99 rooms"));
    }

    #[rstest]
    fn display_reports_missing_rooms(roster: Roster) {
        let report = summarize(&roster, &[]).to_string();

        assert!(report.contains("No rooms generated"));
        assert!(!report.contains("Avg"));
    }
}
