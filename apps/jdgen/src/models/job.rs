use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const MIN_QUESTIONS: i64 = 5;
pub const MAX_QUESTIONS: i64 = 20;

/// Everything the user typed about the position. Built once by the intake
/// prompts and only read afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRequest {
    pub job_title: String,
    /// Free text, exactly as entered.
    pub min_experience: String,
    /// Free text, exactly as entered.
    pub max_experience: String,
    pub industry: String,
    pub responsibilities: [String; 3],
    pub tech_stack: Vec<String>,
    pub tools_technologies: Vec<String>,
    /// May be empty.
    pub preferred_skills: Vec<String>,
}

impl JobRequest {
    /// Job title with spaces replaced by underscores, used in output filenames.
    pub fn file_stem(&self) -> String {
        self.job_title.replace(' ', "_")
    }
}

/// Questionnaire difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidDifficulty(pub String);

impl fmt::Display for InvalidDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not one of Easy, Medium, Advanced", self.0)
    }
}

impl std::error::Error for InvalidDifficulty {}

impl FromStr for Difficulty {
    type Err = InvalidDifficulty;

    /// Capitalizes the input (first char upper, rest lower) and requires an
    /// exact match. Surrounding whitespace is NOT trimmed: " easy" is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match capitalize(s).as_str() {
            "Easy" => Ok(Difficulty::Easy),
            "Medium" => Ok(Difficulty::Medium),
            "Advanced" => Ok(Difficulty::Advanced),
            _ => Err(InvalidDifficulty(s.to_string())),
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Number of questions to request, always within `MIN_QUESTIONS..=MAX_QUESTIONS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionCount(u8);

impl QuestionCount {
    pub fn clamped(requested: i64) -> Self {
        // Bounded by MAX_QUESTIONS, so the cast is lossless.
        QuestionCount(requested.clamp(MIN_QUESTIONS, MAX_QUESTIONS) as u8)
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for QuestionCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which generated document an artifact is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    JobDescription,
    Questionnaire { difficulty: Difficulty },
}

impl ArtifactKind {
    /// `JD_<title>.pdf` or `Questions_<title>_<difficulty>.pdf`.
    pub fn file_name(&self, request: &JobRequest) -> String {
        match self {
            ArtifactKind::JobDescription => format!("JD_{}.pdf", request.file_stem()),
            ArtifactKind::Questionnaire { difficulty } => {
                format!("Questions_{}_{}.pdf", request.file_stem(), difficulty)
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ArtifactKind::JobDescription => "job description",
            ArtifactKind::Questionnaire { .. } => "questionnaire",
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::JobRequest;

    pub fn senior_data_engineer() -> JobRequest {
        JobRequest {
            job_title: "Senior Data Engineer".to_string(),
            min_experience: "5".to_string(),
            max_experience: "8".to_string(),
            industry: "Fintech".to_string(),
            responsibilities: [
                "Design batch and streaming pipelines".to_string(),
                "Own the data warehouse schema".to_string(),
                "Mentor junior engineers".to_string(),
            ],
            tech_stack: vec!["Python".to_string(), "SQL".to_string(), "AWS".to_string()],
            tools_technologies: vec!["Git".to_string(), "Airflow".to_string()],
            preferred_skills: vec!["Docker".to_string(), "Kubernetes".to_string()],
        }
    }
}
