//! Response normalizer
//!
//! The completion service is not contractually guaranteed to omit Markdown
//! fencing even when instructed to, so raw model text is scrubbed before
//! parsing. Total function: never fails, always yields a string.

/// Strip Markdown code-fence delimiters anywhere in the text and trim
/// surrounding whitespace.
///
/// Handles both language-tagged (```json) and bare (```) fences. The fence
/// delimiters and the tag are removed; the fenced content is kept.
#[must_use]
pub fn strip_code_fences(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(pos) = rest.find("```") {
        out.push_str(&rest[..pos]);
        rest = &rest[pos + 3..];
        if let Some(stripped) = rest.strip_prefix("json") {
            rest = stripped;
        }
        rest = rest.trim_start();
    }
    out.push_str(rest);

    out.trim().to_string()
}
