//! Single-slot playback state machine.
//!
//! At most one video occupies the slot, either playing or paused, never
//! both. Starting playback of any valid video always succeeds and replaces
//! whatever occupied the slot before.

use log::debug;
use rand::{rngs::StdRng, RngExt, SeedableRng};

use crate::catalog::Catalog;
use crate::error::ConsoleError;

/// Successful `play` outcome. `stopped` names the video that was implicitly
/// stopped, when there was one, so the host can announce it first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayStarted {
    pub stopped: Option<String>,
    pub video_id: String,
}

/// Read-only snapshot of the playback slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NowPlaying {
    pub video_id: String,
    pub paused: bool,
}

pub struct PlaybackManager {
    playing: Option<String>,
    paused: Option<String>,
    // Use StdRng from a stored seed instead of ThreadRng so random
    // selection stays deterministic under test.
    rng_seed: [u8; 32],
}

impl PlaybackManager {
    pub fn new() -> PlaybackManager {
        // Generate a random seed
        let mut seed = [0u8; 32];
        getrandom::fill(&mut seed).expect("Failed to generate random seed");
        PlaybackManager::with_seed(seed)
    }

    /// Fixed-seed constructor; `play_random` becomes deterministic.
    pub fn with_seed(seed: [u8; 32]) -> PlaybackManager {
        PlaybackManager {
            playing: None,
            paused: None,
            rng_seed: seed,
        }
    }

    /// Starts playback of `video_id`, replacing any current occupant of the
    /// slot. Fails only when the id is unknown to the catalog.
    pub fn play(
        &mut self,
        catalog: &Catalog,
        video_id: &str,
    ) -> Result<PlayStarted, ConsoleError> {
        if !catalog.contains(video_id) {
            return Err(ConsoleError::VideoNotFound);
        }
        let stopped = self.playing.take().or_else(|| self.paused.take());
        self.playing = Some(video_id.to_string());
        debug!("playback: now playing {}", video_id);
        Ok(PlayStarted {
            stopped,
            video_id: video_id.to_string(),
        })
    }

    /// Clears the slot and returns the id that occupied it.
    pub fn stop(&mut self) -> Result<String, ConsoleError> {
        match self.playing.take().or_else(|| self.paused.take()) {
            Some(video_id) => {
                debug!("playback: stopped {}", video_id);
                Ok(video_id)
            }
            None => Err(ConsoleError::NoVideoPlaying),
        }
    }

    /// Moves playing to paused and returns the id.
    pub fn pause(&mut self) -> Result<String, ConsoleError> {
        if let Some(video_id) = &self.paused {
            return Err(ConsoleError::AlreadyPaused {
                video_id: video_id.clone(),
            });
        }
        match self.playing.take() {
            Some(video_id) => {
                self.paused = Some(video_id.clone());
                debug!("playback: paused {}", video_id);
                Ok(video_id)
            }
            None => Err(ConsoleError::NoVideoPlaying),
        }
    }

    /// Moves paused back to playing and returns the id.
    pub fn resume(&mut self) -> Result<String, ConsoleError> {
        if self.playing.is_none() && self.paused.is_none() {
            return Err(ConsoleError::NoVideoPlaying);
        }
        match self.paused.take() {
            Some(video_id) => {
                self.playing = Some(video_id.clone());
                debug!("playback: resumed {}", video_id);
                Ok(video_id)
            }
            None => Err(ConsoleError::NotPaused),
        }
    }

    /// Reads the slot without touching it.
    pub fn current(&self) -> Option<NowPlaying> {
        if let Some(video_id) = &self.playing {
            return Some(NowPlaying {
                video_id: video_id.clone(),
                paused: false,
            });
        }
        self.paused.as_ref().map(|video_id| NowPlaying {
            video_id: video_id.clone(),
            paused: true,
        })
    }

    /// Picks one catalog id uniformly at random and plays it.
    pub fn play_random(&mut self, catalog: &Catalog) -> Result<PlayStarted, ConsoleError> {
        let video_ids = catalog.video_ids();
        if video_ids.is_empty() {
            return Err(ConsoleError::EmptyCatalog);
        }
        let mut rng = StdRng::from_seed(self.rng_seed);
        let index = rng.random_range(0..video_ids.len());
        self.advance_seed();
        let video_id = video_ids[index].to_string();
        self.play(catalog, &video_id)
    }

    // Derive a fresh seed so consecutive draws differ
    fn advance_seed(&mut self) {
        let mut new_seed = [0u8; 32];
        for (i, val) in new_seed.iter_mut().enumerate() {
            *val = self.rng_seed[i].wrapping_add(1);
        }
        self.rng_seed = new_seed;
    }
}
