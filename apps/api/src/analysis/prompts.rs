// Analysis module LLM prompt templates.
// Section labels must match the markers in parser.rs.

use crate::llm_client::prompts::fill_template;

pub const ANALYSIS_SYSTEM: &str = "\
You are an experienced technical recruiter reviewing resumes. \
Answer in exactly the three labeled sections you are asked for, in the given order. \
Do NOT add any other sections, greetings, or closing remarks.";

/// Resume analysis prompt. Replace `{resume_text}` before sending.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Resume Analysis:

Summary: Provide a concise 2-3 sentence summary of the applicant's qualifications.

Key Points: List 3 notable strengths or achievements from the resume.

Rating: Evaluate the overall resume quality in one word (Excellent, Good, Average, Poor).

Format your answer EXACTLY like this, keeping the bold labels:

**Summary:** <summary>

**Key Points:**
1. <first strength>
2. <second strength>
3. <third strength>

**Rating:** <one word>

Resume Text:
{resume_text}"#;

pub fn build_analysis_prompt(resume_text: &str) -> String {
    fill_template(ANALYSIS_PROMPT_TEMPLATE, &[("resume_text", resume_text)])
}
