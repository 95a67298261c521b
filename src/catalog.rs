//! Read-only video catalog collaborator.
//!
//! The catalog is loaded once at startup and never mutated afterwards.
//! Playback and playlist logic validate video ids against it; search is a
//! read-only query answered entirely from the in-memory list.

use std::collections::HashMap;
use std::path::Path;

use log::info;

use crate::video::Video;

pub struct Catalog {
    // Sorted by title at construction so display order is free.
    videos: Vec<Video>,
    index_by_id: HashMap<String, usize>,
}

impl Catalog {
    pub fn from_videos(mut videos: Vec<Video>) -> Catalog {
        videos.sort_by(|a, b| a.title.cmp(&b.title));
        let index_by_id = videos
            .iter()
            .enumerate()
            .map(|(index, video)| (video.video_id.clone(), index))
            .collect();
        Catalog { videos, index_by_id }
    }

    /// Reads a JSON catalog file: a top-level array of video records.
    pub fn load(path: &Path) -> Result<Catalog, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let videos: Vec<Video> = serde_json::from_str(&content)?;
        info!("Loaded {} videos from {}", videos.len(), path.display());
        Ok(Catalog::from_videos(videos))
    }

    /// Demo catalog used when no catalog file is configured.
    pub fn builtin() -> Catalog {
        Catalog::from_videos(vec![
            Video::new("funny_dogs_video_id", "Funny Dogs", &["#dog", "#animal"]),
            Video::new("amazing_cats_video_id", "Amazing Cats", &["#cat", "#animal"]),
            Video::new("another_cat_video_id", "Another Cat Video", &["#cat", "#animal"]),
            Video::new("life_at_google_video_id", "Life at Google", &["#google", "#career"]),
            Video::new("nothing_video_id", "Video about nothing", &[]),
        ])
    }

    /// All videos in title order.
    pub fn all_videos(&self) -> &[Video] {
        &self.videos
    }

    pub fn get(&self, video_id: &str) -> Option<&Video> {
        self.index_by_id
            .get(video_id)
            .map(|index| &self.videos[*index])
    }

    pub fn contains(&self, video_id: &str) -> bool {
        self.index_by_id.contains_key(video_id)
    }

    /// Ids in title order, for uniform random selection.
    pub fn video_ids(&self) -> Vec<&str> {
        self.videos
            .iter()
            .map(|video| video.video_id.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    /// Case-insensitive substring match on title, results in title order.
    pub fn search_titles(&self, term: &str) -> Vec<&Video> {
        let needle = term.to_lowercase();
        self.videos
            .iter()
            .filter(|video| video.title.to_lowercase().contains(&needle))
            .collect()
    }

    /// Case-insensitive exact tag match, results in title order.
    pub fn search_tag(&self, tag: &str) -> Vec<&Video> {
        self.videos
            .iter()
            .filter(|video| video.has_tag(tag))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::Catalog;
    use crate::video::Video;

    fn demo_catalog() -> Catalog {
        Catalog::builtin()
    }

    #[test]
    fn test_videos_sorted_by_title() {
        let catalog = Catalog::from_videos(vec![
            Video::new("v2", "Dog Video", &[]),
            Video::new("v1", "Amazing Cat Video", &["cat", "animal"]),
        ]);
        let titles: Vec<&str> = catalog
            .all_videos()
            .iter()
            .map(|video| video.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Amazing Cat Video", "Dog Video"]);
    }

    #[test]
    fn test_get_and_contains() {
        let catalog = demo_catalog();
        assert!(catalog.contains("amazing_cats_video_id"));
        assert_eq!(
            catalog.get("amazing_cats_video_id").map(|v| v.title.as_str()),
            Some("Amazing Cats")
        );
        assert!(!catalog.contains("missing_video_id"));
        assert!(catalog.get("missing_video_id").is_none());
    }

    #[test]
    fn test_search_titles_is_case_insensitive_and_ordered() {
        let catalog = demo_catalog();
        let titles: Vec<&str> = catalog
            .search_titles("CAT")
            .iter()
            .map(|video| video.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Amazing Cats", "Another Cat Video"]);
        assert!(catalog.search_titles("no such title").is_empty());
    }

    #[test]
    fn test_search_tag_matches_whole_tags_only() {
        let catalog = demo_catalog();
        let titles: Vec<&str> = catalog
            .search_tag("#CAT")
            .iter()
            .map(|video| video.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Amazing Cats", "Another Cat Video"]);
        // "#cat" is a substring of no other tag; partials must not match.
        assert!(catalog.search_tag("#ca").is_empty());
    }

    #[test]
    fn test_builtin_catalog_has_demo_videos() {
        let catalog = demo_catalog();
        assert_eq!(catalog.len(), 5);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.video_ids().len(), 5);
    }
}
