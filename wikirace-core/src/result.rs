use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One link "clicked" during a race.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hop {
    pub url: String,
    /// Keyword matches found in the page when it was scored. Zero for
    /// the final short-circuit hop and for fallback picks.
    pub score: usize,
    /// True when the hop was chosen at random because nothing scored.
    pub fallback: bool,
}

/// Summary of a finished race.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaceResult {
    /// Title of the target article, used as the search keyword.
    pub keyword: String,
    /// Every article visited, start first, target last.
    pub path: Vec<String>,
    /// One entry per click (everything in `path` except the start).
    pub hops: Vec<Hop>,
    pub steps: usize,
    pub fallback_steps: usize,
    pub elapsed: Duration,
}
