// All LLM prompt constants for the Generation module.
// Section names must stay in sync with formatter::SECTION_NAMES.

use crate::llm_client::prompts::{fill_template, PLAIN_TEXT_INSTRUCTION};
use crate::models::FormRecord;

pub const GENERATION_SYSTEM: &str = "You are a professional resume writer.";

/// Resume generation prompt template.
/// Replace: {plain_text_instruction} and one placeholder per form field.
pub const GENERATION_PROMPT_TEMPLATE: &str = r#"You are a professional resume writer.

Instructions:
- Build a clean, ATS-friendly resume based on the candidate's data.
- Do not use markdown formatting or special characters like asterisks (*) or stars.
- Bold section headings like (Summary, Education, Skills, Projects, Experience, Achievements) without using markdown.
- Do not draw separator or horizontal lines of dashes, underscores or equals signs.
- Use bullet points for skills, projects, achievements, but ensure no stars are visible.
- {plain_text_instruction}

Candidate Details:

Name: {name}
Contact: {contact}
Email: {email}
LinkedIn: {linkedin}
GitHub: {github}
Address: {address}

Education:
{education}

Skills:
{skills}

Projects:
{projects}

Experience:
{experience}

Achievements:
{achievements}

Make it professional, readable, and without any markdown formatting or stars."#;

pub fn build_generation_prompt(form: &FormRecord) -> String {
    let mut values = vec![("plain_text_instruction", PLAIN_TEXT_INSTRUCTION)];
    values.extend(form.fields());
    fill_template(GENERATION_PROMPT_TEMPLATE, &values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::formatter::{format_document, SECTION_NAMES};
    use crate::models::Block;

    #[test]
    fn test_prompt_embeds_every_field() {
        let form = FormRecord {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            skills: "Analysis, {notation}".into(),
            achievements: "First program".into(),
            ..Default::default()
        };
        let prompt = build_generation_prompt(&form);
        assert!(prompt.contains("Name: Ada Lovelace"));
        assert!(prompt.contains("Email: ada@example.com"));
        assert!(prompt.contains("Skills:\nAnalysis, {notation}"));
        assert!(prompt.contains("Achievements:\nFirst program"));
        for (field, _) in form.fields() {
            assert!(!prompt.contains(&format!("{{{field}}}")), "unfilled {field}");
        }
        assert!(!prompt.contains("{plain_text_instruction}"));
    }

    #[test]
    fn test_template_never_asks_for_rule_lines() {
        let template = GENERATION_PROMPT_TEMPLATE.to_lowercase();
        assert!(!template.contains("add a horizontal line"));
        assert!(template.contains("do not draw separator"));
    }

    #[test]
    fn test_rule_lines_would_become_list_items() {
        // Rules are drawn by the exporter; a dashed line from the model is read as a bullet.
        let document = format_document("Skills\n----------\n- Rust");
        assert!(document
            .blocks()
            .contains(&Block::ListItem("---------".into())));
    }

    #[test]
    fn test_prompt_names_every_section() {
        for name in SECTION_NAMES {
            assert!(GENERATION_PROMPT_TEMPLATE.contains(name), "missing {name}");
        }
    }
}
