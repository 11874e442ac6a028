use serde_json::{json, Value};

use crate::engine::Ruling;

/// Structured results view for machine consumers. Mirrors the console view:
/// answers plus the qualitative verdict, with score numbers omitted from the
/// wire shape.
#[must_use]
pub fn ruling_to_json(ruling: &Ruling) -> Value {
    let answers: Vec<Value> = ruling
        .answers
        .iter()
        .map(|a| {
            json!({
                "element": a.element.name(),
                "text": a.text,
            })
        })
        .collect();
    json!({
        "answers": answers,
        "verdict": {
            "class": ruling.verdict.class.label(),
            "css_class": ruling.verdict.class.css_class(),
            "title": ruling.verdict.title,
            "description": ruling.verdict.description,
        }
    })
}
