// Shared prompt constants and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Instruction appended to prompts that expect a bare JSON object back.
pub const JSON_ONLY_INSTRUCTION: &str = "\
    Respond with the JSON object only. \
    Do NOT include any text outside the JSON object. \
    Do NOT include explanations or apologies.";

/// Instruction appended to prompts that expect free text back.
pub const PLAIN_TEXT_INSTRUCTION: &str = "\
    Respond with the requested text only. \
    Do NOT add a title, a heading, or any commentary.";

/// Fills `{name}` placeholders in a single left-to-right pass.
///
/// Substituted values are never rescanned, so a CV that happens to contain
/// `{job_description}` is passed through literally.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + values.iter().map(|(_, v)| v.len()).sum::<usize>());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let replaced = after.find('}').and_then(|end| {
            let name = &after[..end];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, end))
        });
        match replaced {
            Some((value, end)) => {
                out.push_str(value);
                rest = &after[end + 1..];
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
