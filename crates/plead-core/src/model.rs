use std::fmt;

use serde::{Deserialize, Serialize};

/// One element of a federal retaliation claim. The three elements form the
/// fixed questionnaire sequence; the variant identity doubles as the
/// selector key for element-specific scoring rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClaimElement {
    #[serde(rename = "Protected Activity")]
    ProtectedActivity,
    #[serde(rename = "Adverse Employment Action")]
    AdverseAction,
    #[serde(rename = "Causal Connection / But-For Cause")]
    CausalConnection,
}

impl ClaimElement {
    /// Questionnaire order. Exactly three, created once, never mutated.
    pub const ALL: [ClaimElement; 3] = [
        ClaimElement::ProtectedActivity,
        ClaimElement::AdverseAction,
        ClaimElement::CausalConnection,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ClaimElement::ProtectedActivity => "Protected Activity",
            ClaimElement::AdverseAction => "Adverse Employment Action",
            ClaimElement::CausalConnection => "Causal Connection / But-For Cause",
        }
    }

    pub fn question(self) -> &'static str {
        match self {
            ClaimElement::ProtectedActivity => {
                "Plaintiff, describe your protected activity (e.g., filing an internal \
                 complaint, an EEOC charge, or requesting a reasonable accommodation). \
                 Include date and evidence."
            }
            ClaimElement::AdverseAction => {
                "Describe the adverse action taken against you (e.g., suspension, demotion, \
                 termination, or significant change in duties). Include dates, effect on \
                 pay/responsibilities, and documents."
            }
            ClaimElement::CausalConnection => {
                "Explain how the adverse action was caused by your protected activity \
                 (timing, statements, patterns, or other evidence)."
            }
        }
    }
}

impl fmt::Display for ClaimElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A submitted answer. `text` is trimmed and non-empty (enforced by
/// `Session::submit`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub element: ClaimElement,
    pub text: String,
}

/// An answer with its heuristic score attached. Produced only during final
/// evaluation; scores stay internal and are never rendered for the end user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredAnswer {
    pub element: ClaimElement,
    pub text: String,
    pub score: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerdictClass {
    Weak,
    Plausible,
    Strong,
}

impl VerdictClass {
    pub fn label(self) -> &'static str {
        match self {
            VerdictClass::Weak => "Weak",
            VerdictClass::Plausible => "Plausible",
            VerdictClass::Strong => "Strong",
        }
    }

    /// Severity class names kept from the original styling hooks.
    pub fn css_class(self) -> &'static str {
        match self {
            VerdictClass::Weak => "weak-claim",
            VerdictClass::Plausible => "plausible-claim",
            VerdictClass::Strong => "strong-claim",
        }
    }
}

/// The qualitative ruling derived from the total score. Never stored;
/// computed once per evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub class: VerdictClass,
    pub title: &'static str,
    pub description: &'static str,
}
