//! Interactive intake — line prompts on a reader/writer pair (stdin/stdout in
//! production, in-memory buffers in tests).

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::models::{Difficulty, JobRequest, QuestionCount};

/// Prints `label`, then reads one line and returns it trimmed.
///
/// A closed input stream is an `UnexpectedEof` error rather than an empty answer,
/// otherwise the re-prompt loops below would spin forever.
pub fn ask<R: BufRead, W: Write>(reader: &mut R, writer: &mut W, label: &str) -> io::Result<String> {
    write!(writer, "{label}")?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("input closed while waiting for: {}", label.trim()),
        ));
    }
    Ok(line.trim().to_string())
}

/// Splits a comma-separated answer and trims each entry. Empty entries are kept.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',').map(|s| s.trim().to_string()).collect()
}

/// Like `split_list`, but drops empty entries (a blank answer yields an empty list).
pub fn split_optional_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Collects all job fields. No validation beyond trimming.
pub fn collect_job_request<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> io::Result<JobRequest> {
    writeln!(writer, "\n  Enter Job Details:")?;
    let job_title = ask(reader, writer, "Job Title (e.g., 'Senior Data Engineer'): ")?;
    let min_experience = ask(reader, writer, "Minimum Experience (years): ")?;
    let max_experience = ask(reader, writer, "Maximum Experience (years): ")?;
    let industry = ask(reader, writer, "Industry (e.g., 'Fintech'): ")?;

    writeln!(writer, "\n Enter 3 Key Responsibilities (1 per line):")?;
    let responsibilities = [
        ask(reader, writer, "Responsibility 1: ")?,
        ask(reader, writer, "Responsibility 2: ")?,
        ask(reader, writer, "Responsibility 3: ")?,
    ];

    writeln!(writer, "\n Enter Required Tech Stack (comma-separated):")?;
    let tech_stack = split_list(&ask(reader, writer, "e.g., Python, SQL, AWS: ")?);

    writeln!(writer, "\n Enter Tools and Technologies (comma-separated):")?;
    let tools_technologies = split_list(&ask(reader, writer, "e.g., Git, JIRA, VS Code: ")?);

    writeln!(writer, "\n Preferred Skills (comma-separated, or leave blank):")?;
    let preferred_skills = split_optional_list(&ask(reader, writer, "e.g., Docker, Kubernetes: ")?);

    debug!(
        title = %job_title,
        tech_terms = tech_stack.len(),
        tool_terms = tools_technologies.len(),
        preferred_terms = preferred_skills.len(),
        "Collected job request"
    );

    Ok(JobRequest {
        job_title,
        min_experience,
        max_experience,
        industry,
        responsibilities,
        tech_stack,
        tools_technologies,
        preferred_skills,
    })
}

/// Prompts until the answer normalizes to Easy, Medium or Advanced.
pub fn prompt_difficulty<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> io::Result<Difficulty> {
    loop {
        let answer = ask(reader, writer, "Choose difficulty (Easy/Medium/Advanced): ")?;
        match answer.parse::<Difficulty>() {
            Ok(difficulty) => return Ok(difficulty),
            Err(_) => writeln!(writer, "Please enter Easy, Medium, or Advanced")?,
        }
    }
}

/// Prompts for an integer and clamps it into range. Non-numeric answers are re-prompted.
pub fn prompt_question_count<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> io::Result<QuestionCount> {
    loop {
        let answer = ask(reader, writer, "Number of questions to generate (5-20): ")?;
        match answer.parse::<i64>() {
            Ok(requested) => return Ok(QuestionCount::clamped(requested)),
            Err(_) => writeln!(writer, "Please enter a whole number")?,
        }
    }
}
