use once_cell::sync::Lazy;
use regex::Regex;

use plead_core::model::ClaimElement;

/// Which claim elements a rule scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applicability {
    All,
    /// Protected Activity and Adverse Employment Action.
    FactElements,
    /// Causal Connection only.
    Causal,
}

impl Applicability {
    pub fn covers(self, element: ClaimElement) -> bool {
        match self {
            Applicability::All => true,
            Applicability::FactElements => matches!(
                element,
                ClaimElement::ProtectedActivity | ClaimElement::AdverseAction
            ),
            Applicability::Causal => element == ClaimElement::CausalConnection,
        }
    }
}

/// One factual-indicator heuristic: a pattern, a fixed weight, and the
/// elements it applies to. A rule contributes its weight when the pattern
/// matches anywhere in the answer text.
pub struct IndicatorRule {
    pub name: &'static str,
    pub weight: i64,
    pub applies_to: Applicability,
    /// Marks the Causal-only bonus rules the conclusion penalty subtracts
    /// back out before its threshold check.
    pub causal_bonus: bool,
    pattern: Regex,
}

impl IndicatorRule {
    fn new(
        name: &'static str,
        pattern: &str,
        weight: i64,
        applies_to: Applicability,
        causal_bonus: bool,
    ) -> Self {
        Self {
            name,
            weight,
            applies_to,
            causal_bonus,
            pattern: Regex::new(pattern).expect("static indicator pattern"),
        }
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

static RULES: Lazy<Vec<IndicatorRule>> = Lazy::new(|| {
    vec![
        // Numeric date, month-name date, or bare 4-digit year.
        IndicatorRule::new(
            "date",
            r"(?i)\d{1,2}[/-]\d{1,2}[/-]\d{2,4}|\b(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\s\d{1,2}(?:st|nd|rd|th)?,\s\d{4}|\b\d{4}",
            1,
            Applicability::All,
            false,
        ),
        // Two consecutive capitalized words: first-name + last-name shape.
        // Intentionally case-sensitive.
        IndicatorRule::new(
            "named_person",
            r"[A-Z][a-z]+\s[A-Z][a-z]+",
            1,
            Applicability::All,
            false,
        ),
        IndicatorRule::new(
            "specific_action",
            r"(?i)EEOC|accommodation|demotion|termination|pay cut|transfer|suspension|fired|complaint|testified|disciplined",
            1,
            Applicability::FactElements,
            false,
        ),
        IndicatorRule::new(
            "temporal_proximity",
            r"(?i)\d{1,2}\s(?:days|weeks|week)|immediately|just\s[a-z]*\safter",
            2,
            Applicability::Causal,
            true,
        ),
        IndicatorRule::new(
            "policy_evidence",
            r"(?i)handbook|policy|procedure|standard practice|no warning|deviation|sudden change|clean record",
            1,
            Applicability::Causal,
            true,
        ),
    ]
});

static CONCLUSION_TERMS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)retaliated|discriminatory|illegal|unfair|unjust|harassment|hostile|bad faith")
        .expect("static conclusion pattern")
});

pub fn indicator_rules() -> &'static [IndicatorRule] {
    &RULES
}

/// Conclusory legal vocabulary checked by the conclusion penalty.
pub fn conclusion_terms() -> &'static Regex {
    &CONCLUSION_TERMS
}
