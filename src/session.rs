//! One logical console session.

use crate::catalog::Catalog;
use crate::playback_manager::PlaybackManager;
use crate::playlist_manager::PlaylistManager;

/// Constructed once by the host at startup; every operation goes through
/// its fields. Replaces the ambient-singleton shape with explicit ownership.
pub struct Session {
    pub catalog: Catalog,
    pub playback: PlaybackManager,
    pub playlists: PlaylistManager,
}

impl Session {
    pub fn new(catalog: Catalog) -> Session {
        Session {
            catalog,
            playback: PlaybackManager::new(),
            playlists: PlaylistManager::new(),
        }
    }
}
