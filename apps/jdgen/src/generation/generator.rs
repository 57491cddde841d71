//! Generator — turns a `JobRequest` into prompts and forwards them to the
//! completion service. One attempt per artifact; failures become `AppError::Llm`.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::generation::prompts::{
    JOB_DESCRIPTION_PROMPT_TEMPLATE, NONE_PLACEHOLDER, QUESTIONNAIRE_PROMPT_TEMPLATE,
};
use crate::llm_client::CompletionService;
use crate::models::{Difficulty, JobRequest, QuestionCount};

/// Produces the two text artifacts of a run.
///
/// The pipeline holds an `Arc<dyn TextGenerator>` so tests can swap in stubs.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate_description(&self, request: &JobRequest) -> Result<String, AppError>;

    async fn generate_questions(
        &self,
        request: &JobRequest,
        difficulty: Difficulty,
        count: QuestionCount,
    ) -> Result<String, AppError>;
}

/// `TextGenerator` backed by a completion service.
pub struct LlmTextGenerator {
    llm: Arc<dyn CompletionService>,
}

impl LlmTextGenerator {
    pub fn new(llm: Arc<dyn CompletionService>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl TextGenerator for LlmTextGenerator {
    async fn generate_description(&self, request: &JobRequest) -> Result<String, AppError> {
        let prompt = build_description_prompt(request);
        info!(title = %request.job_title, "Generating job description");
        debug!(prompt_chars = prompt.len(), "Job description prompt built");

        self.llm
            .complete(&prompt)
            .await
            .map_err(|e| AppError::Llm(format!("Job description generation failed: {e}")))
    }

    async fn generate_questions(
        &self,
        request: &JobRequest,
        difficulty: Difficulty,
        count: QuestionCount,
    ) -> Result<String, AppError> {
        let prompt = build_questions_prompt(request, difficulty, count);
        info!(
            title = %request.job_title,
            %difficulty,
            count = count.get(),
            "Generating questionnaire"
        );
        debug!(prompt_chars = prompt.len(), "Questionnaire prompt built");

        self.llm
            .complete(&prompt)
            .await
            .map_err(|e| AppError::Llm(format!("Question generation failed: {e}")))
    }
}

pub fn build_description_prompt(request: &JobRequest) -> String {
    let tech_stack = request.tech_stack.join(", ");
    let tools = request.tools_technologies.join(", ");
    let preferred = preferred_or_none(&request.preferred_skills);

    fill_template(
        JOB_DESCRIPTION_PROMPT_TEMPLATE,
        &[
            ("job_title", request.job_title.as_str()),
            ("min_exp", request.min_experience.as_str()),
            ("max_exp", request.max_experience.as_str()),
            ("industry", request.industry.as_str()),
            ("responsibility_1", request.responsibilities[0].as_str()),
            ("responsibility_2", request.responsibilities[1].as_str()),
            ("responsibility_3", request.responsibilities[2].as_str()),
            ("tech_stack", tech_stack.as_str()),
            ("tools", tools.as_str()),
            ("preferred_skills", preferred.as_str()),
        ],
    )
}

pub fn build_questions_prompt(
    request: &JobRequest,
    difficulty: Difficulty,
    count: QuestionCount,
) -> String {
    let count = count.to_string();
    let key_skills = request
        .tech_stack
        .iter()
        .chain(&request.tools_technologies)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    let responsibilities = request.responsibilities.join(", ");
    let preferred = preferred_or_none(&request.preferred_skills);

    fill_template(
        QUESTIONNAIRE_PROMPT_TEMPLATE,
        &[
            ("count", count.as_str()),
            ("job_title", request.job_title.as_str()),
            ("difficulty", difficulty.as_str()),
            ("key_skills", key_skills.as_str()),
            ("responsibilities", responsibilities.as_str()),
            ("preferred_skills", preferred.as_str()),
        ],
    )
}

fn preferred_or_none(skills: &[String]) -> String {
    if skills.is_empty() {
        NONE_PLACEHOLDER.to_string()
    } else {
        skills.join(", ")
    }
}

/// Single-pass `{name}` substitution. Substituted values are never rescanned,
/// so user text containing braces lands in the prompt verbatim.
/// Unknown placeholders are left as-is.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() * 2);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let substituted = after.find('}').and_then(|close| {
            let key = &after[..close];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v, close))
        });
        match substituted {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use crate::models::job::fixtures::senior_data_engineer;
    use std::sync::Mutex;

    /// Records every prompt and replies with a canned result.
    struct StubCompletion {
        reply: Result<String, u16>,
        prompts: Mutex<Vec<String>>,
    }

    impl StubCompletion {
        fn ok(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn failing(status: u16) -> Self {
            Self {
                reply: Err(status),
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl CompletionService for StubCompletion {
        async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(status) => Err(LlmError::Api {
                    status: *status,
                    message: "API key not valid".to_string(),
                }),
            }
        }
    }

    #[test]
    fn test_description_prompt_contains_every_field() {
        let request = senior_data_engineer();
        let prompt = build_description_prompt(&request);

        assert!(prompt.starts_with("Generate a professional Job Description"));
        assert!(prompt.contains("Position: Senior Data Engineer"));
        assert!(prompt.contains("Experience: 5-8 years"));
        assert!(prompt.contains("Industry: Fintech"));
        assert!(prompt.contains("1. Design batch and streaming pipelines"));
        assert!(prompt.contains("2. Own the data warehouse schema"));
        assert!(prompt.contains("3. Mentor junior engineers"));
        assert!(prompt.contains("- Python, SQL, AWS"));
        assert!(prompt.contains("- Git, Airflow"));
        assert!(prompt.contains("- Docker, Kubernetes"));
        for term in request.tech_stack.iter().chain(&request.tools_technologies) {
            assert!(prompt.contains(term.as_str()), "missing {term}");
        }
    }

    #[test]
    fn test_description_prompt_uses_none_for_empty_preferred_skills() {
        let mut request = senior_data_engineer();
        request.preferred_skills.clear();
        let prompt = build_description_prompt(&request);
        assert!(prompt.contains("Preferred Skills:\n- None"));
    }

    #[test]
    fn test_questions_prompt_contains_fields_and_clamped_count() {
        let request = senior_data_engineer();
        let prompt =
            build_questions_prompt(&request, Difficulty::Advanced, QuestionCount::clamped(42));

        assert!(prompt
            .starts_with("Generate 20 technical interview questions for a Senior Data Engineer position."));
        assert!(prompt.contains("Difficulty Level: Advanced"));
        assert!(prompt.contains("Include Advanced-level questions"));
        assert!(prompt.contains("Key Skills: Python, SQL, AWS, Git, Airflow"));
        assert!(prompt.contains(
            "Responsibilities: Design batch and streaming pipelines, Own the data warehouse schema, Mentor junior engineers"
        ));
        assert!(prompt.contains("Preferred Skills: Docker, Kubernetes"));
    }

    #[test]
    fn test_questions_prompt_none_for_empty_preferred_skills() {
        let mut request = senior_data_engineer();
        request.preferred_skills.clear();
        let prompt = build_questions_prompt(&request, Difficulty::Easy, QuestionCount::clamped(5));
        assert!(prompt.contains("- Preferred Skills: None"));
    }

    #[test]
    fn test_user_text_with_braces_is_inserted_verbatim() {
        let mut request = senior_data_engineer();
        request.industry = "{job_title} & {unknown}".to_string();
        let prompt = build_description_prompt(&request);
        assert!(prompt.contains("Industry: {job_title} & {unknown}"));
    }

    #[test]
    fn test_fill_template_leaves_unknown_placeholders() {
        assert_eq!(
            fill_template("{a} {b} {", &[("a", "1")]),
            "1 {b} {".to_string()
        );
    }

    #[tokio::test]
    async fn test_generate_description_returns_text_verbatim() {
        let stub = Arc::new(StubCompletion::ok("We are looking for...\n- Python"));
        let generator = LlmTextGenerator::new(stub.clone());

        let text = generator
            .generate_description(&senior_data_engineer())
            .await
            .unwrap();

        assert_eq!(text, "We are looking for...\n- Python");
        let prompts = stub.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Senior Data Engineer"));
    }

    #[tokio::test]
    async fn test_generation_failure_is_a_value_not_a_panic() {
        let stub = Arc::new(StubCompletion::failing(401));
        let generator = LlmTextGenerator::new(stub.clone());
        let request = senior_data_engineer();

        let err = generator.generate_description(&request).await.unwrap_err();
        assert!(matches!(err, AppError::Llm(ref m) if m.contains("API key not valid")));

        let err = generator
            .generate_questions(&request, Difficulty::Medium, QuestionCount::clamped(10))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Llm(ref m) if m.starts_with("Question generation failed")));

        // Single attempt per call.
        assert_eq!(stub.prompts.lock().unwrap().len(), 2);
    }
}
