use crate::engine::Ruling;

/// Build the plain-text results view: each element with its submitted
/// answer, then the ruling. Numeric scores are deliberately absent.
#[must_use]
pub fn render_ruling(ruling: &Ruling) -> String {
    let mut out = String::new();
    out.push_str("Judge's Plausibility Ruling\n");
    out.push_str("===========================\n\n");

    for answer in &ruling.answers {
        out.push_str(answer.element.name());
        out.push_str(":\n");
        out.push_str("  ");
        out.push_str(&answer.text);
        out.push_str("\n\n");
    }

    out.push_str("---\n");
    out.push_str(ruling.verdict.title);
    out.push('\n');
    out.push_str(ruling.verdict.description);
    out.push('\n');
    out
}
