// Prompt templates for the generation module.
// Placeholders in braces are substituted by `generator::build_*_prompt`.

/// Value substituted for an empty preferred-skills list.
pub const NONE_PLACEHOLDER: &str = "None";

/// Job description prompt template.
/// Replace: {job_title}, {min_exp}, {max_exp}, {industry},
///          {responsibility_1}, {responsibility_2}, {responsibility_3},
///          {tech_stack}, {tools}, {preferred_skills}
pub const JOB_DESCRIPTION_PROMPT_TEMPLATE: &str = r#"Generate a professional Job Description that begins with "We are looking for..." and includes the following details:

Position: {job_title}
Experience: {min_exp}-{max_exp} years
Industry: {industry}

Key Responsibilities:
1. {responsibility_1}
2. {responsibility_2}
3. {responsibility_3}

Required Technical Skills:
- {tech_stack}

Tools and Technologies:
- {tools}

Preferred Skills:
- {preferred_skills}

Formatting Requirements:
- Start with "We are looking for..."
- Use professional but engaging tone
- Organize in clear sections with bullet points
- Keep technical descriptions precise
- Exclude company information and soft skills
- Use proper markdown formatting"#;

/// Questionnaire prompt template.
/// Replace: {count}, {job_title}, {difficulty}, {key_skills},
///          {responsibilities}, {preferred_skills}
pub const QUESTIONNAIRE_PROMPT_TEMPLATE: &str = r#"Generate {count} technical interview questions for a {job_title} position.
Difficulty Level: {difficulty}

Based on these job requirements:
- Key Skills: {key_skills}
- Responsibilities: {responsibilities}
- Preferred Skills: {preferred_skills}

Question Requirements:
- Focus on technical concepts
- Include {difficulty}-level questions
- Cover all key technologies mentioned
- Include practical/scenario-based questions
- Format as numbered list with clear questions"#;
