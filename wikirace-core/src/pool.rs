use crate::error::Result;
use crate::fetcher::PageFetcher;
use crate::score::KeywordScorer;
use futures::future::join_all;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{debug, warn};
use url::Url;

/// Bounded-concurrency scorer for a batch of candidate links.
///
/// Every submitted candidate has exactly one score before `score_batch`
/// returns; a candidate whose fetch fails scores 0 instead of failing
/// the batch, so one broken link cannot halt the search.
pub struct ScoringPool {
    fetcher: PageFetcher,
    workers: usize,
}

impl ScoringPool {
    pub fn new(fetcher: PageFetcher, workers: usize) -> Self {
        Self {
            fetcher,
            workers: workers.max(1),
        }
    }

    /// Fetch each candidate and count keyword matches in its body.
    ///
    /// Fans out one task per candidate, bounded by a semaphore, and
    /// joins them all before returning. Result order matches input
    /// order. Each task owns its own fetcher and scorer clone; nothing
    /// mutable is shared between workers.
    pub async fn score_batch(
        &self,
        candidates: &[Url],
        scorer: &KeywordScorer,
    ) -> Result<Vec<(Url, usize)>> {
        debug!(
            "Scoring {} candidates with {} workers",
            candidates.len(),
            self.workers
        );

        let semaphore = Arc::new(Semaphore::new(self.workers));
        let mut handles = Vec::with_capacity(candidates.len());

        for url in candidates {
            let url = url.clone();
            let fetcher = self.fetcher.clone();
            let scorer = scorer.clone();
            let semaphore = semaphore.clone();

            handles.push(tokio::spawn(async move {
                let _permit = semaphore.acquire().await.unwrap();

                let score = match fetcher.fetch(&url).await {
                    Ok(body) => scorer.matches(&body),
                    Err(e) => {
                        // Unreachable links just score zero
                        warn!("Scoring fetch failed for {}: {}", url, e);
                        0
                    }
                };

                (url, score)
            }));
        }

        let mut scored = Vec::with_capacity(handles.len());
        for joined in join_all(handles).await {
            scored.push(joined?);
        }

        Ok(scored)
    }
}
