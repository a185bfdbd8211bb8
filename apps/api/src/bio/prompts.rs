//! Prompts for bio generation. Each service that needs LLM calls defines
//! its own prompts.rs alongside it.

/// Resumes longer than this are truncated before prompting; a professional
/// bio does not need the tail of a long document.
const MAX_RESUME_CHARS: usize = 20_000;

pub const BIO_SYSTEM: &str = "You are a professional biography writer. \
    Given the raw text of a resume, write a concise third-person \
    professional biography of 2-4 paragraphs. \
    Use only facts present in the resume. Do NOT invent employers, dates, \
    titles, or accomplishments. \
    Respond with the biography text only, no preamble or headings.";

/// Builds the user prompt for a bio generation call.
pub fn build_bio_prompt(resume_text: &str) -> String {
    let truncated = match resume_text.char_indices().nth(MAX_RESUME_CHARS) {
        Some((idx, _)) => &resume_text[..idx],
        None => resume_text,
    };
    format!("Write a professional biography from this resume:\n\n{truncated}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_resume_text() {
        let prompt = build_bio_prompt("Ada Lovelace, analyst engine programmer");
        assert!(prompt.contains("Ada Lovelace, analyst engine programmer"));
    }

    #[test]
    fn test_prompt_truncates_long_resumes() {
        let long = "x".repeat(MAX_RESUME_CHARS * 2);
        let prompt = build_bio_prompt(&long);
        assert!(prompt.len() < MAX_RESUME_CHARS + 200);
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let long = "é".repeat(MAX_RESUME_CHARS + 10);
        // Must not panic slicing mid-codepoint.
        let _ = build_bio_prompt(&long);
    }
}
