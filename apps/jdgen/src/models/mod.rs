pub mod job;

pub use job::{ArtifactKind, Difficulty, JobRequest, QuestionCount};
