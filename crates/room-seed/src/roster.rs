//! User roster loading.
//!
//! The roster is a CSV file with a header row naming at least a `username`
//! column. Rows are read top to bottom; other columns are ignored.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::atomic_io::open_parent_dir;
use crate::error::RosterError;

/// Header naming the user identifier column.
pub const USERNAME_COLUMN: &str = "username";

/// The ordered list of users rooms are populated from.
///
/// Duplicate usernames are kept; each occurrence is a separate seat.
///
/// # Example
///
/// ```
/// use room_seed::Roster;
///
/// let roster = Roster::from_csv("username,password\nalice,pw1\nbob,pw2\n")
///     .expect("valid roster");
/// assert_eq!(roster.users(), ["alice", "bob"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    users: Vec<String>,
}

impl Roster {
    /// Builds a roster from already-loaded usernames.
    #[must_use]
    pub const fn new(users: Vec<String>) -> Self {
        Self { users }
    }

    /// Parses a roster from CSV text.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError`] if the header lacks the `username` column or a
    /// row cannot be decoded.
    pub fn from_csv(csv: &str) -> Result<Self, RosterError> {
        Self::from_reader(csv.as_bytes())
    }

    /// Parses a roster from any CSV byte stream.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError`] if the header lacks the `username` column or a
    /// row cannot be decoded.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, RosterError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let headers = csv_reader.headers().map_err(|err| parse_error(&err))?;
        if !headers.iter().any(|header| header == USERNAME_COLUMN) {
            return Err(RosterError::MissingColumn {
                column: USERNAME_COLUMN,
            });
        }

        let mut users = Vec::new();
        for record in csv_reader.deserialize::<RosterRow>() {
            let row = record.map_err(|err| parse_error(&err))?;
            info!(username = %row.username, "found user");
            users.push(row.username);
        }

        Ok(Self { users })
    }

    /// Loads a roster from a CSV file.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Io`] if the file cannot be opened, or any parse
    /// error from [`Roster::from_reader`].
    pub fn from_file(path: &Path) -> Result<Self, RosterError> {
        let io_error = |err: std::io::Error| RosterError::Io {
            path: path.to_path_buf(),
            message: err.to_string(),
        };
        let file_name = path.file_name().ok_or_else(|| RosterError::Io {
            path: path.to_path_buf(),
            message: "roster path must be a file".to_owned(),
        })?;
        let dir = open_parent_dir(path).map_err(io_error)?;
        let file = dir.open(Path::new(file_name)).map_err(io_error)?;

        Self::from_reader(file)
    }

    /// Returns the usernames in file order.
    #[must_use]
    pub fn users(&self) -> &[String] {
        &self.users
    }

    /// Returns the number of seats in the roster.
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Returns `true` when the roster holds no users.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    username: String,
}

fn parse_error(err: &csv::Error) -> RosterError {
    RosterError::Parse {
        line: err.position().map_or(0, csv::Position::line),
        message: err.to_string(),
    }
}
