//! Named playlist store with case-insensitive name resolution.
//!
//! Playlists are keyed by lowercased name while the playlist itself carries
//! the casing the user typed at create time. Lookups go through the
//! lowercased index, so "my list" and "MY LIST" address the same playlist.

use std::collections::HashMap;

use log::debug;

use crate::catalog::Catalog;
use crate::error::ConsoleError;

/// One named, ordered, duplicate-free list of catalog video ids. The name
/// keeps the casing used at create time.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Playlist {
    name: String,
    video_ids: Vec<String>,
}

pub struct PlaylistManager {
    // Lowercased name -> playlist carrying the stored casing.
    playlists: HashMap<String, Playlist>,
}

impl PlaylistManager {
    pub fn new() -> PlaylistManager {
        PlaylistManager {
            playlists: HashMap::new(),
        }
    }

    fn normalized_playlist_name(name: &str) -> String {
        name.to_lowercase()
    }

    /// Resolves a typed name to the stored casing, when such a playlist
    /// exists.
    pub fn resolve_name(&self, name: &str) -> Option<&str> {
        self.playlists
            .get(&Self::normalized_playlist_name(name))
            .map(|playlist| playlist.name.as_str())
    }

    /// Stores a new empty playlist under the exact given casing.
    pub fn create(&mut self, name: &str) -> Result<(), ConsoleError> {
        let key = Self::normalized_playlist_name(name);
        if self.playlists.contains_key(&key) {
            return Err(ConsoleError::PlaylistAlreadyExists);
        }
        self.playlists.insert(
            key,
            Playlist {
                name: name.to_string(),
                video_ids: Vec::new(),
            },
        );
        debug!("playlist created: {}", name);
        Ok(())
    }

    /// Appends `video_id` to the playlist. Check order is part of the
    /// contract: playlist existence, then video existence, then duplicate.
    pub fn add_video(
        &mut self,
        name: &str,
        video_id: &str,
        catalog: &Catalog,
    ) -> Result<(), ConsoleError> {
        let key = Self::normalized_playlist_name(name);
        let playlist = self
            .playlists
            .get_mut(&key)
            .ok_or(ConsoleError::PlaylistNotFound)?;
        if !catalog.contains(video_id) {
            return Err(ConsoleError::VideoNotFound);
        }
        if playlist.video_ids.iter().any(|id| id == video_id) {
            return Err(ConsoleError::VideoAlreadyInPlaylist);
        }
        playlist.video_ids.push(video_id.to_string());
        debug!("playlist {}: added {}", playlist.name, video_id);
        Ok(())
    }

    /// Removes the single occurrence of `video_id` in place. Check order:
    /// playlist existence, then video existence, then membership.
    pub fn remove_video(
        &mut self,
        name: &str,
        video_id: &str,
        catalog: &Catalog,
    ) -> Result<(), ConsoleError> {
        let key = Self::normalized_playlist_name(name);
        let playlist = self
            .playlists
            .get_mut(&key)
            .ok_or(ConsoleError::PlaylistNotFound)?;
        if !catalog.contains(video_id) {
            return Err(ConsoleError::VideoNotFound);
        }
        let position = playlist
            .video_ids
            .iter()
            .position(|id| id == video_id)
            .ok_or(ConsoleError::VideoNotInPlaylist)?;
        playlist.video_ids.remove(position);
        debug!("playlist {}: removed {}", playlist.name, video_id);
        Ok(())
    }

    /// Empties the playlist in place; its name and existence survive.
    pub fn clear(&mut self, name: &str) -> Result<(), ConsoleError> {
        let key = Self::normalized_playlist_name(name);
        let playlist = self
            .playlists
            .get_mut(&key)
            .ok_or(ConsoleError::PlaylistNotFound)?;
        playlist.video_ids.clear();
        debug!("playlist {}: cleared", playlist.name);
        Ok(())
    }

    /// Removes the playlist entirely.
    pub fn delete(&mut self, name: &str) -> Result<(), ConsoleError> {
        let key = Self::normalized_playlist_name(name);
        match self.playlists.remove(&key) {
            Some(playlist) => {
                debug!("playlist deleted: {}", playlist.name);
                Ok(())
            }
            None => Err(ConsoleError::PlaylistNotFound),
        }
    }

    /// Stored names sorted case-insensitively. Empty means no playlists.
    pub fn list_all(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .playlists
            .values()
            .map(|playlist| playlist.name.as_str())
            .collect();
        names.sort_by_key(|name| name.to_lowercase());
        names
    }

    /// Ordered ids of one playlist, possibly empty.
    pub fn list_videos(&self, name: &str) -> Result<&[String], ConsoleError> {
        self.playlists
            .get(&Self::normalized_playlist_name(name))
            .map(|playlist| playlist.video_ids.as_slice())
            .ok_or(ConsoleError::PlaylistNotFound)
    }
}
