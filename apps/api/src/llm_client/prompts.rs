// Cross-cutting prompt fragments shared by every model call.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// The user message shared by both scoring calls: the job description followed
/// by the resume, each under a fixed heading.
pub fn document_pair_message(jd_text: &str, resume_text: &str) -> String {
    format!("JOB DESCRIPTION:\n{jd_text}\n\nRESUME:\n{resume_text}\n")
}
