use crate::error::{RaceError, Result};
use crate::extract::{extract_article_links, extract_title};
use crate::fetcher::PageFetcher;
use crate::pool::ScoringPool;
use crate::result::{Hop, RaceResult};
use crate::score::KeywordScorer;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};
use url::Url;

/// Called after each click with (step index, chosen URL, its score).
pub type StepCallback = Arc<dyn Fn(usize, String, usize) + Send + Sync>;

/// Greedy best-first link chaser.
///
/// Starting from one article, repeatedly scores every outgoing link
/// against the target article's title and clicks the best unvisited
/// one, falling back to a random unvisited link when nothing scores.
pub struct Racer {
    fetcher: PageFetcher,
    workers: usize,
    max_steps: usize,
    seed: Option<u64>,
    step_callback: Option<StepCallback>,
}

impl Racer {
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(10))
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            fetcher: PageFetcher::with_timeout(timeout),
            workers: 50,
            max_steps: 100,
            seed: None,
            step_callback: None,
        }
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Seed the fallback selector for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_step_callback(mut self, callback: StepCallback) -> Self {
        self.step_callback = Some(callback);
        self
    }

    /// Find a chain of links from `start` to `finish`.
    ///
    /// The returned path begins with `start`, ends with `finish`, and
    /// every element links directly to the next.
    pub async fn race(&self, start: &str, finish: &str) -> Result<RaceResult> {
        let started_at = Instant::now();

        let start_url = parse_input_url(start)?;
        let finish_url = parse_input_url(finish)?;
        if start_url == finish_url {
            return Err(RaceError::InvalidInput(
                "start and finish are the same article".to_string(),
            ));
        }

        // The target article's title is the search keyword for the
        // whole run.
        let finish_html = self.fetcher.fetch(&finish_url).await.map_err(|e| {
            RaceError::TargetResolution(format!("cannot fetch {}: {}", finish_url, e))
        })?;
        let keyword = extract_title(&finish_html).ok_or_else(|| {
            RaceError::TargetResolution(format!("no title found in {}", finish_url))
        })?;
        let scorer = KeywordScorer::new(&keyword)?;
        info!("Target keyword: {}", keyword);

        let pool = ScoringPool::new(self.fetcher.clone(), self.workers);
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut path = vec![start_url.clone()];
        let mut visited: HashSet<String> = HashSet::new();
        visited.insert(start_url.to_string());
        let mut hops: Vec<Hop> = Vec::new();
        let mut fallback_steps = 0;

        loop {
            let steps = path.len() - 1;
            if steps >= self.max_steps {
                return Err(RaceError::NoProgress(self.max_steps));
            }

            let current = path.last().expect("path is never empty").clone();
            debug!("Step {}: on {}", steps, current);

            let html = self
                .fetcher
                .fetch(&current)
                .await
                .map_err(|e| RaceError::StepFetch(format!("cannot fetch {}: {}", current, e)))?;
            let candidates = extract_article_links(&html, &current);

            // One click away: no scoring round needed
            if candidates.contains(&finish_url) {
                visited.insert(finish_url.to_string());
                path.push(finish_url.clone());
                hops.push(Hop {
                    url: finish_url.to_string(),
                    score: 0,
                    fallback: false,
                });
                self.report_step(path.len() - 1, &finish_url, 0);
                break;
            }

            // Visited links can never be selected again, so only
            // unvisited candidates go to the pool. BTreeSet iteration
            // keeps them in lexicographic order, which fixes the
            // tie-break among equal top scores.
            let unvisited: Vec<Url> = candidates
                .into_iter()
                .filter(|u| !visited.contains(u.as_str()))
                .collect();
            if unvisited.is_empty() {
                return Err(RaceError::DeadEnd(format!(
                    "no unvisited links on {}",
                    current
                )));
            }

            let scored = pool.score_batch(&unvisited, &scorer).await?;

            // First-encountered maximum wins ties
            let mut best = &scored[0];
            for candidate in &scored[1..] {
                if candidate.1 > best.1 {
                    best = candidate;
                }
            }

            let (next, score, fallback) = if best.1 > 0 {
                (best.0.clone(), best.1, false)
            } else {
                // No signal anywhere: click a random unvisited link
                let pick = unvisited
                    .choose(&mut rng)
                    .expect("unvisited is non-empty")
                    .clone();
                fallback_steps += 1;
                (pick, 0, true)
            };

            visited.insert(next.to_string());
            path.push(next.clone());
            hops.push(Hop {
                url: next.to_string(),
                score,
                fallback,
            });

            info!(
                "Step {}: clicked {} ({} matches{})",
                path.len() - 1,
                next,
                score,
                if fallback { ", fallback" } else { "" }
            );
            self.report_step(path.len() - 1, &next, score);
        }

        let steps = path.len() - 1;
        info!("Reached {} in {} clicks", finish_url, steps);

        Ok(RaceResult {
            keyword,
            path: path.iter().map(|u| u.to_string()).collect(),
            hops,
            steps,
            fallback_steps,
            elapsed: started_at.elapsed(),
        })
    }

    fn report_step(&self, step: usize, url: &Url, score: usize) {
        if let Some(ref callback) = self.step_callback {
            callback(step, url.to_string(), score);
        }
    }
}

impl Default for Racer {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize a user-supplied URL the same way extracted candidates are
/// normalized, so equality checks against them can succeed.
fn parse_input_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw)
        .map_err(|e| RaceError::InvalidInput(format!("invalid URL '{}': {}", raw, e)))?;
    url.set_fragment(None);
    url.set_query(None);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input_url_strips_fragment() {
        let url = parse_input_url("https://en.wikipedia.org/wiki/Peace#History").unwrap();
        assert_eq!(url.to_string(), "https://en.wikipedia.org/wiki/Peace");
    }

    #[test]
    fn test_parse_input_url_strips_query() {
        let url = parse_input_url("https://en.wikipedia.org/wiki/Peace?useskin=vector").unwrap();
        assert_eq!(url.to_string(), "https://en.wikipedia.org/wiki/Peace");
    }

    #[test]
    fn test_parse_input_url_rejects_garbage() {
        assert!(matches!(
            parse_input_url("not a url"),
            Err(RaceError::InvalidInput(_))
        ));
    }
}
