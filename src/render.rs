//! User-facing text for every console outcome.
//!
//! The core reports structured values and named failure kinds; everything a
//! user reads is formatted here and nowhere else. Multi-line output is
//! returned as one string joined with newlines.

use crate::catalog::Catalog;
use crate::command::ParseError;
use crate::error::ConsoleError;
use crate::playback_manager::{NowPlaying, PlayStarted};
use crate::video::Video;

/// Joins tags with single spaces for the bracketed display segment.
pub fn join_tags(tags: &[String]) -> String {
    tags.join(" ")
}

/// `<title> (<id>) [<tags>]`
pub fn video_line(video: &Video) -> String {
    format!(
        "{} ({}) [{}]",
        video.title,
        video.video_id,
        join_tags(&video.tags)
    )
}

// Ids come from the catalog moments earlier; the fallback only shows up if
// that ever stops being true.
fn title_of<'a>(catalog: &'a Catalog, video_id: &'a str) -> &'a str {
    catalog
        .get(video_id)
        .map(|video| video.title.as_str())
        .unwrap_or(video_id)
}

pub fn number_of_videos(catalog: &Catalog) -> String {
    format!("{} videos in the library", catalog.len())
}

pub fn all_videos(catalog: &Catalog) -> String {
    let mut lines = vec!["Here's a list of all available videos:".to_string()];
    for video in catalog.all_videos() {
        lines.push(video_line(video));
    }
    lines.join("\n")
}

pub fn play_started(catalog: &Catalog, started: &PlayStarted) -> String {
    let playing = format!("Playing video: {}", title_of(catalog, &started.video_id));
    match &started.stopped {
        Some(stopped) => format!("Stopping video: {}\n{}", title_of(catalog, stopped), playing),
        None => playing,
    }
}

pub fn play_error(error: &ConsoleError) -> String {
    match error {
        ConsoleError::VideoNotFound => "Cannot play video: Video does not exist".to_string(),
        ConsoleError::EmptyCatalog => "No videos available".to_string(),
        other => other.to_string(),
    }
}

pub fn video_stopped(catalog: &Catalog, video_id: &str) -> String {
    format!("Stopping video: {}", title_of(catalog, video_id))
}

pub fn stop_error(error: &ConsoleError) -> String {
    match error {
        ConsoleError::NoVideoPlaying => {
            "Cannot stop video: No video is currently playing".to_string()
        }
        other => other.to_string(),
    }
}

pub fn video_paused(catalog: &Catalog, video_id: &str) -> String {
    format!("Pausing video: {}", title_of(catalog, video_id))
}

pub fn pause_error(catalog: &Catalog, error: &ConsoleError) -> String {
    match error {
        ConsoleError::NoVideoPlaying => {
            "Cannot pause video: No video is currently playing".to_string()
        }
        ConsoleError::AlreadyPaused { video_id } => {
            format!("Video already paused: {}", title_of(catalog, video_id))
        }
        other => other.to_string(),
    }
}

pub fn video_continued(catalog: &Catalog, video_id: &str) -> String {
    format!("Continuing video: {}", title_of(catalog, video_id))
}

pub fn continue_error(error: &ConsoleError) -> String {
    match error {
        ConsoleError::NoVideoPlaying => {
            "Cannot continue video: No video is currently playing".to_string()
        }
        ConsoleError::NotPaused => "Cannot continue video: Video is not paused".to_string(),
        other => other.to_string(),
    }
}

pub fn now_playing(catalog: &Catalog, current: Option<&NowPlaying>) -> String {
    match current {
        None => "No video is currently playing".to_string(),
        Some(now) => {
            let line = catalog
                .get(&now.video_id)
                .map(video_line)
                .unwrap_or_else(|| now.video_id.clone());
            if now.paused {
                format!("Currently playing: {} - PAUSED", line)
            } else {
                format!("Currently playing: {}", line)
            }
        }
    }
}

pub fn playlist_created(name: &str) -> String {
    format!("Successfully created new playlist: {}", name)
}

pub fn create_playlist_error(error: &ConsoleError) -> String {
    match error {
        ConsoleError::PlaylistAlreadyExists => {
            "Cannot create playlist: A playlist with the same name already exists".to_string()
        }
        other => other.to_string(),
    }
}

pub fn video_added(catalog: &Catalog, name: &str, video_id: &str) -> String {
    format!("Added video to {}: {}", name, title_of(catalog, video_id))
}

pub fn add_to_playlist_error(name: &str, error: &ConsoleError) -> String {
    let reason = match error {
        ConsoleError::PlaylistNotFound => "Playlist does not exist",
        ConsoleError::VideoNotFound => "Video does not exist",
        ConsoleError::VideoAlreadyInPlaylist => "Video already added",
        other => return other.to_string(),
    };
    format!("Cannot add video to {}: {}", name, reason)
}

pub fn all_playlists(names: &[&str]) -> String {
    if names.is_empty() {
        return "No playlists exist yet".to_string();
    }
    let mut lines = vec!["Showing all playlists:".to_string()];
    for name in names {
        lines.push(name.to_string());
    }
    lines.join("\n")
}

pub fn playlist_videos(catalog: &Catalog, name: &str, video_ids: &[String]) -> String {
    let mut lines = vec![format!("Showing playlist: {}", name)];
    if video_ids.is_empty() {
        lines.push("No videos here yet".to_string());
    } else {
        for video_id in video_ids {
            let line = catalog
                .get(video_id)
                .map(video_line)
                .unwrap_or_else(|| video_id.clone());
            lines.push(line);
        }
    }
    lines.join("\n")
}

pub fn show_playlist_error(name: &str, error: &ConsoleError) -> String {
    match error {
        ConsoleError::PlaylistNotFound => {
            format!("Cannot show playlist {}: Playlist does not exist", name)
        }
        other => other.to_string(),
    }
}

pub fn video_removed(catalog: &Catalog, name: &str, video_id: &str) -> String {
    format!(
        "Removed video from {}: {}",
        name,
        title_of(catalog, video_id)
    )
}

pub fn remove_from_playlist_error(name: &str, error: &ConsoleError) -> String {
    let reason = match error {
        ConsoleError::PlaylistNotFound => "Playlist does not exist",
        ConsoleError::VideoNotFound => "Video does not exist",
        ConsoleError::VideoNotInPlaylist => "Video is not in playlist",
        other => return other.to_string(),
    };
    format!("Cannot remove video from {}: {}", name, reason)
}

pub fn playlist_cleared(name: &str) -> String {
    format!("Successfully removed all videos from {}", name)
}

pub fn clear_playlist_error(name: &str, error: &ConsoleError) -> String {
    match error {
        ConsoleError::PlaylistNotFound => {
            format!("Cannot clear playlist {}: Playlist does not exist", name)
        }
        other => other.to_string(),
    }
}

pub fn playlist_deleted(name: &str) -> String {
    format!("Deleted playlist: {}", name)
}

pub fn delete_playlist_error(name: &str, error: &ConsoleError) -> String {
    match error {
        ConsoleError::PlaylistNotFound => {
            format!("Cannot delete playlist {}: Playlist does not exist", name)
        }
        other => other.to_string(),
    }
}

pub fn search_results(term: &str, videos: &[&Video]) -> String {
    let mut lines = vec![format!("Here are the results for {}:", term)];
    for (index, video) in videos.iter().enumerate() {
        lines.push(format!("{}) {}", index + 1, video_line(video)));
    }
    lines.join("\n")
}

pub fn no_search_results(term: &str) -> String {
    format!("No search results for {}", term)
}

pub fn search_play_prompt() -> String {
    "Would you like to play any of the above? If yes, specify the number of the video.\n\
     If your answer is not a valid number, we will assume it's a no."
        .to_string()
}

pub fn search_play_declined() -> String {
    "Nope!".to_string()
}

pub fn parse_error(error: &ParseError) -> String {
    match error {
        ParseError::Empty | ParseError::UnknownCommand(_) => {
            "Please enter a valid command, type HELP for a list of available commands."
                .to_string()
        }
        ParseError::WrongArgumentCount { .. } => {
            format!("Cannot process command: {}", error)
        }
    }
}

pub fn help_text() -> String {
    [
        "Available commands:",
        "  NUMBER_OF_VIDEOS",
        "  SHOW_ALL_VIDEOS",
        "  PLAY <video_id>",
        "  PLAY_RANDOM",
        "  STOP",
        "  PAUSE",
        "  CONTINUE",
        "  SHOW_PLAYING",
        "  CREATE_PLAYLIST <playlist_name>",
        "  ADD_TO_PLAYLIST <playlist_name> <video_id>",
        "  REMOVE_FROM_PLAYLIST <playlist_name> <video_id>",
        "  CLEAR_PLAYLIST <playlist_name>",
        "  DELETE_PLAYLIST <playlist_name>",
        "  SHOW_ALL_PLAYLISTS",
        "  SHOW_PLAYLIST <playlist_name>",
        "  SEARCH_VIDEOS <search_term>",
        "  SEARCH_VIDEOS_WITH_TAG <tag>",
        "  HELP",
        "  EXIT",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::{
        add_to_playlist_error, all_playlists, all_videos, join_tags, no_search_results,
        now_playing, number_of_videos, pause_error, play_error, play_started, playlist_videos,
        search_results, video_line,
    };
    use crate::catalog::Catalog;
    use crate::error::ConsoleError;
    use crate::playback_manager::{NowPlaying, PlayStarted};
    use crate::video::Video;

    fn demo_catalog() -> Catalog {
        Catalog::from_videos(vec![
            Video::new("v1", "Amazing Cat Video", &["cat", "animal"]),
            Video::new("v2", "Dog Video", &[]),
        ])
    }

    #[test]
    fn test_join_tags_uses_single_spaces() {
        assert_eq!(
            join_tags(&["cat".to_string(), "animal".to_string()]),
            "cat animal"
        );
        assert_eq!(join_tags(&[]), "");
    }

    #[test]
    fn test_video_line_format() {
        let catalog = demo_catalog();
        let video = catalog.get("v1").expect("v1 is in the demo catalog");
        assert_eq!(video_line(video), "Amazing Cat Video (v1) [cat animal]");
        let untagged = catalog.get("v2").expect("v2 is in the demo catalog");
        assert_eq!(video_line(untagged), "Dog Video (v2) []");
    }

    #[test]
    fn test_all_videos_lists_in_title_order() {
        let catalog = demo_catalog();
        assert_eq!(
            all_videos(&catalog),
            "Here's a list of all available videos:\n\
             Amazing Cat Video (v1) [cat animal]\n\
             Dog Video (v2) []"
        );
        assert_eq!(number_of_videos(&catalog), "2 videos in the library");
    }

    #[test]
    fn test_play_started_announces_stopped_video_first() {
        let catalog = demo_catalog();
        let fresh = PlayStarted {
            stopped: None,
            video_id: "v1".to_string(),
        };
        assert_eq!(
            play_started(&catalog, &fresh),
            "Playing video: Amazing Cat Video"
        );
        let replacing = PlayStarted {
            stopped: Some("v1".to_string()),
            video_id: "v2".to_string(),
        };
        assert_eq!(
            play_started(&catalog, &replacing),
            "Stopping video: Amazing Cat Video\nPlaying video: Dog Video"
        );
    }

    #[test]
    fn test_playback_error_messages() {
        let catalog = demo_catalog();
        assert_eq!(
            play_error(&ConsoleError::VideoNotFound),
            "Cannot play video: Video does not exist"
        );
        assert_eq!(play_error(&ConsoleError::EmptyCatalog), "No videos available");
        assert_eq!(
            pause_error(
                &catalog,
                &ConsoleError::AlreadyPaused {
                    video_id: "v1".to_string(),
                }
            ),
            "Video already paused: Amazing Cat Video"
        );
    }

    #[test]
    fn test_now_playing_marks_paused_state() {
        let catalog = demo_catalog();
        assert_eq!(now_playing(&catalog, None), "No video is currently playing");
        let playing = NowPlaying {
            video_id: "v1".to_string(),
            paused: false,
        };
        assert_eq!(
            now_playing(&catalog, Some(&playing)),
            "Currently playing: Amazing Cat Video (v1) [cat animal]"
        );
        let paused = NowPlaying {
            video_id: "v1".to_string(),
            paused: true,
        };
        assert_eq!(
            now_playing(&catalog, Some(&paused)),
            "Currently playing: Amazing Cat Video (v1) [cat animal] - PAUSED"
        );
    }

    #[test]
    fn test_playlist_messages_use_typed_name() {
        let catalog = demo_catalog();
        assert_eq!(
            add_to_playlist_error("PL", &ConsoleError::VideoAlreadyInPlaylist),
            "Cannot add video to PL: Video already added"
        );
        assert_eq!(
            playlist_videos(&catalog, "pl", &[]),
            "Showing playlist: pl\nNo videos here yet"
        );
        assert_eq!(
            playlist_videos(&catalog, "pl", &["v2".to_string()]),
            "Showing playlist: pl\nDog Video (v2) []"
        );
    }

    #[test]
    fn test_all_playlists_empty_and_sorted_output() {
        assert_eq!(all_playlists(&[]), "No playlists exist yet");
        assert_eq!(
            all_playlists(&["Apple", "zebra"]),
            "Showing all playlists:\nApple\nzebra"
        );
    }

    #[test]
    fn test_search_results_are_numbered_from_one() {
        let catalog = demo_catalog();
        let matches = catalog.search_titles("cat");
        assert_eq!(
            search_results("cat", &matches),
            "Here are the results for cat:\n1) Amazing Cat Video (v1) [cat animal]"
        );
        assert_eq!(no_search_results("dragon"), "No search results for dragon");
    }
}
