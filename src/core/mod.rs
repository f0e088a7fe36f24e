pub mod candidate;
pub mod preview;

pub use candidate::{CandidateDocument, MatchCandidate, MatchType};
pub use preview::{MatchPreview, PreviewStatus};
