pub mod error;
pub mod extract;
pub mod fetcher;
pub mod pool;
pub mod racer;
pub mod result;
pub mod score;

pub use error::RaceError;
pub use fetcher::PageFetcher;
pub use pool::ScoringPool;
pub use racer::{Racer, StepCallback};
pub use result::{Hop, RaceResult};
pub use score::KeywordScorer;
