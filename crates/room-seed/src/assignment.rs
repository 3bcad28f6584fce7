//! Random room membership assignment.
//!
//! Each room draws its members from the whole roster without replacement.
//! Draws are independent across rooms, so one user can land in many rooms.

use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::debug;

use crate::error::GenerationError;
use crate::roster::Roster;
use crate::sizing::RoomSize;

/// A generated room and its members in draw order.
///
/// The first member is the room's creator; the rest are invitees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    name: String,
    members: Vec<String>,
}

impl Room {
    /// Creates the room generated at `index`, named `Room {index}`.
    #[must_use]
    pub fn new(index: usize, members: Vec<String>) -> Self {
        Self::with_name(format!("Room {index}"), members)
    }

    /// Creates a room with an explicit name.
    #[must_use]
    pub const fn with_name(name: String, members: Vec<String>) -> Self {
        Self { name, members }
    }

    /// Returns the room name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns every member, creator first.
    #[must_use]
    pub fn members(&self) -> &[String] {
        &self.members
    }

    /// Returns the member count.
    #[must_use]
    pub fn size(&self) -> usize {
        self.members.len()
    }

    /// Returns the creator, or `None` for a room with no members.
    #[must_use]
    pub fn creator(&self) -> Option<&str> {
        self.members.first().map(String::as_str)
    }

    /// Returns the members to invite after the creator.
    #[must_use]
    pub fn invitees(&self) -> &[String] {
        self.members.get(1..).unwrap_or_default()
    }
}

/// Populates one room per size with users drawn from `roster`.
///
/// Members of a single room are distinct roster seats in random order. Rooms
/// are named by their position in `sizes`.
///
/// # Errors
///
/// Returns [`GenerationError::RoomTooLarge`] if a size exceeds the roster
/// length. Sizes produced by [`crate::generate_room_sizes`] never do.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use room_seed::{Roster, RoomSize, assign_members};
///
/// let roster = Roster::from_csv("username\na\nb\nc\nd\n").expect("valid roster");
/// let sizes: Vec<RoomSize> = [2, 3].into_iter().filter_map(RoomSize::new).collect();
/// let mut rng = ChaCha8Rng::seed_from_u64(1);
///
/// let rooms = assign_members(&roster, &sizes, &mut rng).expect("sizes fit roster");
///
/// assert_eq!(rooms.len(), 2);
/// assert_eq!(rooms[1].name(), "Room 1");
/// assert_eq!(rooms[1].invitees().len(), 2);
/// ```
pub fn assign_members<R>(
    roster: &Roster,
    sizes: &[RoomSize],
    rng: &mut R,
) -> Result<Vec<Room>, GenerationError>
where
    R: Rng + ?Sized,
{
    let available = roster.len();
    let mut rooms = Vec::with_capacity(sizes.len());

    for (index, size) in sizes.iter().enumerate() {
        if size.get() > available {
            return Err(GenerationError::RoomTooLarge {
                index,
                size: size.get(),
                available,
            });
        }

        let members: Vec<String> = roster
            .users()
            .choose_multiple(rng, size.get())
            .cloned()
            .collect();
        let room = Room::new(index, members);
        debug!(room = room.name(), size = room.size(), "assigned room members");
        rooms.push(room);
    }

    Ok(rooms)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rstest::{fixture, rstest};

    use super::*;

    fn sizes(values: &[usize]) -> Vec<RoomSize> {
        values
            .iter()
            .map(|&value| RoomSize::new(value).expect("valid room size"))
            .collect()
    }

    #[fixture]
    fn four_users() -> Roster {
        Roster::new(vec![
            "A".to_owned(),
            "B".to_owned(),
            "C".to_owned(),
            "D".to_owned(),
        ])
    }

    #[rstest]
    fn builds_one_room_per_size(four_users: Roster) {
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let rooms = assign_members(&four_users, &sizes(&[2, 3]), &mut rng).expect("assigned");

        let names: Vec<&str> = rooms.iter().map(Room::name).collect();
        assert_eq!(names, ["Room 0", "Room 1"]);
        let room_sizes: Vec<usize> = rooms.iter().map(Room::size).collect();
        assert_eq!(room_sizes, [2, 3]);
    }

    #[rstest]
    fn members_are_distinct_roster_users(four_users: Roster) {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let roster_users: HashSet<&String> = four_users.users().iter().collect();

        let rooms =
            assign_members(&four_users, &sizes(&[4, 3, 2, 4, 2]), &mut rng).expect("assigned");

        for room in &rooms {
            let distinct: HashSet<&String> = room.members().iter().collect();
            assert_eq!(distinct.len(), room.size(), "duplicate in {}", room.name());
            assert!(distinct.is_subset(&roster_users));
        }
    }

    #[rstest]
    fn full_rooms_may_share_every_user(four_users: Roster) {
        let mut rng = ChaCha8Rng::seed_from_u64(21);

        let rooms = assign_members(&four_users, &sizes(&[4, 4]), &mut rng).expect("assigned");

        for room in &rooms {
            let distinct: HashSet<&String> = room.members().iter().collect();
            assert_eq!(distinct.len(), 4);
        }
    }

    #[rstest]
    fn rejects_room_larger_than_roster(four_users: Roster) {
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        let result = assign_members(&four_users, &sizes(&[2, 5]), &mut rng);

        assert_eq!(
            result,
            Err(GenerationError::RoomTooLarge {
                index: 1,
                size: 5,
                available: 4,
            })
        );
    }

    #[rstest]
    fn no_sizes_means_no_rooms(four_users: Roster) {
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        let rooms = assign_members(&four_users, &[], &mut rng).expect("assigned");

        assert!(rooms.is_empty());
    }

    #[test]
    fn creator_is_first_member() {
        let room = Room::new(
            7,
            vec!["carol".to_owned(), "alice".to_owned(), "bob".to_owned()],
        );

        assert_eq!(room.name(), "Room 7");
        assert_eq!(room.creator(), Some("carol"));
        assert_eq!(room.invitees(), ["alice", "bob"]);
    }

    #[test]
    fn empty_room_has_no_creator() {
        let room = Room::with_name("Lobby".to_owned(), Vec::new());

        assert_eq!(room.creator(), None);
        assert!(room.invitees().is_empty());
    }
}
