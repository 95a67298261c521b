//! Immutable video record owned by the catalog.

/// One catalog entry. Built at catalog load time and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Video {
    pub video_id: String,
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Video {
    pub fn new(video_id: &str, title: &str, tags: &[&str]) -> Video {
        Video {
            video_id: video_id.to_string(),
            title: title.to_string(),
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}
