//! Generator settings loaded via OrthoConfig.
//!
//! Every setting is optional. With nothing supplied the generator reads
//! `users.csv` and writes `rooms.json` in the working directory.

use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::manifest::ManifestLayout;
use crate::statistics::CENTURION_THRESHOLD;

const DEFAULT_ROSTER_PATH: &str = "users.csv";
const DEFAULT_MANIFEST_PATH: &str = "rooms.json";

/// Configuration values for one generator run.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ROOM_SEED")]
pub struct RoomSeedSettings {
    /// CSV roster to read users from.
    pub roster_path: Option<PathBuf>,
    /// Destination for the room manifest.
    pub manifest_path: Option<PathBuf>,
    /// RNG seed; a random one is chosen and logged when absent.
    pub seed: Option<u64>,
    /// Membership count above which a user is reported as a centurion.
    pub centurion_threshold: Option<usize>,
    /// Pretty-print the manifest JSON.
    #[ortho_config(default = false)]
    pub pretty: bool,
}

impl RoomSeedSettings {
    /// Return the configured roster path, falling back to `users.csv`.
    #[must_use]
    pub fn roster_path(&self) -> PathBuf {
        self.roster_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ROSTER_PATH))
    }

    /// Return the configured manifest path, falling back to `rooms.json`.
    #[must_use]
    pub fn manifest_path(&self) -> PathBuf {
        self.manifest_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MANIFEST_PATH))
    }

    /// Return the configured centurion threshold.
    #[must_use]
    pub fn centurion_threshold(&self) -> usize {
        self.centurion_threshold.unwrap_or(CENTURION_THRESHOLD)
    }

    /// Return the manifest layout selected by `pretty`.
    #[must_use]
    pub const fn manifest_layout(&self) -> ManifestLayout {
        if self.pretty {
            ManifestLayout::Pretty
        } else {
            ManifestLayout::Compact
        }
    }
}
