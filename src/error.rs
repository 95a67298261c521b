//! Recoverable failure kinds reported by the playback and playlist cores.

/// Every fallible console operation reports exactly one of these kinds.
/// The host maps a kind to user-facing text; `Display` output here is for
/// logs only.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConsoleError {
    #[error("video does not exist in the catalog")]
    VideoNotFound,
    #[error("playlist does not exist")]
    PlaylistNotFound,
    #[error("a playlist with the same name already exists")]
    PlaylistAlreadyExists,
    #[error("video is already in the playlist")]
    VideoAlreadyInPlaylist,
    #[error("video is not in the playlist")]
    VideoNotInPlaylist,
    #[error("no video is currently playing")]
    NoVideoPlaying,
    #[error("video {video_id} is already paused")]
    AlreadyPaused { video_id: String },
    #[error("current video is not paused")]
    NotPaused,
    #[error("the catalog has no videos")]
    EmptyCatalog,
}
