// Core algorithm exports
pub mod education;
pub mod experience;
pub mod matcher;
pub mod scoring;
pub mod skills;
pub mod text;
pub mod training;

pub use education::{education_level_rank, education_score, EDUCATION_LEVELS};
pub use experience::experience_score;
pub use matcher::MatchEngine;
pub use scoring::{calculate_match_score, calculate_sub_scores, is_good_fit, SubScores, GOOD_FIT_THRESHOLD, MATCH_WEIGHTS};
pub use skills::skills_score;
pub use text::{normalize, similarity};
pub use training::training_score;
