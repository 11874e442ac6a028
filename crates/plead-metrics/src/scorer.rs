use tracing::debug;

use plead_core::model::ClaimElement;
use plead_core::scoring::{AnswerScorer, IndicatorHit, ScoreBreakdown};

use crate::rules::{conclusion_terms, indicator_rules};

/// Scores an answer by running every applicable indicator rule over it,
/// then applies the conclusion penalty: an answer that leans on conclusory
/// legal terms earns nothing unless it also carries at least one point of
/// non-bonus factual matter.
pub struct FactualIndicatorScorer;

impl AnswerScorer for FactualIndicatorScorer {
    fn name(&self) -> &'static str {
        "factual_indicators"
    }

    fn score(&self, element: ClaimElement, text: &str) -> ScoreBreakdown {
        let mut total = 0i64;
        let mut bonus = 0i64;
        let mut hits = Vec::new();

        for rule in indicator_rules() {
            if !rule.applies_to.covers(element) {
                continue;
            }
            if rule.is_match(text) {
                total += rule.weight;
                if rule.causal_bonus {
                    bonus += rule.weight;
                }
                hits.push(IndicatorHit {
                    indicator: rule.name,
                    weight: rule.weight,
                });
            }
        }

        // Bonus rules only fire for Causal Connection, so the subtraction is
        // a no-op for the other elements.
        let base = total - bonus;
        if conclusion_terms().is_match(text) && base < 1 {
            debug!(element = element.name(), "conclusion penalty zeroed answer");
            return ScoreBreakdown::zeroed(hits);
        }

        ScoreBreakdown::scored(total, hits)
    }
}
