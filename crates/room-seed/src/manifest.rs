//! Room creation manifest.
//!
//! The manifest tells a load generator which user creates each room and whom
//! they invite. It is the only artefact the generator persists.

use std::path::Path;

use camino::Utf8Path;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::assignment::Room;
use crate::atomic_io::{open_parent_dir, write_atomic};
use crate::error::ManifestError;

/// Instructions for creating one room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreationEntry {
    /// User who creates the room.
    pub creator: String,
    /// Room display name.
    pub name: String,
    /// Users the creator invites, in draw order.
    pub users: Vec<String>,
}

/// Whitespace style used when encoding a manifest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ManifestLayout {
    /// Single-line JSON.
    #[default]
    Compact,
    /// Indented, human-readable JSON.
    Pretty,
}

/// Every room to create, grouped under the `creators` key.
///
/// # Example
///
/// ```
/// use room_seed::{Manifest, ManifestLayout, Room};
///
/// let rooms = vec![Room::new(0, vec!["alice".to_owned(), "bob".to_owned()])];
/// let manifest = Manifest::from_rooms(&rooms);
/// let json = manifest.to_json(ManifestLayout::Compact).expect("serializable");
///
/// assert_eq!(
///     json,
///     r#"{"creators":[{"creator":"alice","name":"Room 0","users":["bob"]}]}"#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// One entry per room, in generation order.
    pub creators: Vec<CreationEntry>,
}

impl Manifest {
    /// Builds the manifest for `rooms`, keeping their order.
    ///
    /// Rooms without members have no creator and are left out.
    #[must_use]
    pub fn from_rooms(rooms: &[Room]) -> Self {
        let creators = rooms
            .iter()
            .filter_map(|room| {
                room.creator().map(|creator| CreationEntry {
                    creator: creator.to_owned(),
                    name: room.name().to_owned(),
                    users: room.invitees().to_vec(),
                })
            })
            .collect();
        Self { creators }
    }

    /// Rebuilds the rooms described by the manifest, creator first.
    #[must_use]
    pub fn rooms(&self) -> Vec<Room> {
        self.creators
            .iter()
            .map(|entry| {
                let members = std::iter::once(entry.creator.clone())
                    .chain(entry.users.iter().cloned())
                    .collect();
                Room::with_name(entry.name.clone(), members)
            })
            .collect()
    }

    /// Parses a manifest from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Parse`] if the JSON is malformed or does not
    /// match the manifest shape.
    pub fn from_json(json: &str) -> Result<Self, ManifestError> {
        serde_json::from_str(json).map_err(|err| ManifestError::Parse {
            message: err.to_string(),
        })
    }

    /// Encodes the manifest as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Serialize`] if encoding fails.
    pub fn to_json(&self, layout: ManifestLayout) -> Result<String, ManifestError> {
        let encoded = match layout {
            ManifestLayout::Compact => serde_json::to_string(self),
            ManifestLayout::Pretty => serde_json::to_string_pretty(self),
        };
        encoded.map_err(|err| ManifestError::Serialize {
            message: err.to_string(),
        })
    }

    /// Writes the manifest to `path`, replacing any existing file atomically.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError`] if the path is not UTF-8, the parent
    /// directory cannot be opened, or the write fails.
    pub fn write_to_file(&self, path: &Path, layout: ManifestLayout) -> Result<(), ManifestError> {
        let utf8_path = Utf8Path::from_path(path).ok_or_else(|| ManifestError::NonUtf8Path {
            path: path.to_path_buf(),
        })?;
        let file_name = utf8_path
            .file_name()
            .ok_or_else(|| ManifestError::WriteError {
                path: path.to_path_buf(),
                message: "manifest path must be a file".to_owned(),
            })?;
        let dir = open_parent_dir(path).map_err(|err| ManifestError::WriteError {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;

        let contents = self.to_json(layout)?;
        write_atomic(&dir, Utf8Path::new(file_name), &contents)?;
        info!(path = %utf8_path, rooms = self.creators.len(), "wrote room manifest");
        Ok(())
    }
}
