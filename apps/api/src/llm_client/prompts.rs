// Shared prompt constants and prompt-building utilities.
// Each pipeline that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Layout rules for outputs that are parsed line by line rather than as markdown.
pub const PLAIN_TEXT_INSTRUCTION: &str = "\
    Start each section with its name alone on its own line. \
    Put every bullet point on its own line, starting with '- '.";

/// Substitutes `{key}` placeholders in a template in a single pass.
/// Substituted values are never rescanned, so user text containing braces is inserted verbatim.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let replacement = after.find('}').and_then(|close| {
            let key = &after[..close];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, value)| (*value, close))
        });

        match replacement {
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
