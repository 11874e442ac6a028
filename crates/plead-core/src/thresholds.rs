use crate::model::{Verdict, VerdictClass};

/// Totals below this are dismissed outright.
pub const WEAK_THRESHOLD: i64 = 3;
/// Totals at or above this are well-pled; in between is plausible.
pub const PLAUSIBLE_THRESHOLD: i64 = 6;

const WEAK_TITLE: &str = "Weak Claim: Dismissed for Failure to State a Claim.";
const WEAK_DESCRIPTION: &str = "The allegations predominantly use legal conclusions rather than \
     specific facts (who, what, when). The claim fails to meet the plausibility standard and \
     would likely be dismissed on a motion to dismiss under Rule 12(b)(6).";

const PLAUSIBLE_TITLE: &str = "Facially Plausible: Proceed to Discovery.";
const PLAUSIBLE_DESCRIPTION: &str = "The facts are substantive and support the prima facie \
     elements, meeting the plausibility standard (Twombly/Iqbal). A motion to dismiss would be \
     denied, allowing the case to move to discovery.";

const STRONG_TITLE: &str = "Legally Strong: Well-Pled Complaint.";
const STRONG_DESCRIPTION: &str = "The claim is supported by highly specific allegations, \
     including strong temporal proximity and/or evidence of pretext (policy deviation). This \
     positions the plaintiff favorably to withstand a later motion for summary judgment.";

/// Map a summed plausibility score to its ruling. Pure; thresholds and
/// message bodies are fixed constants.
pub fn map_verdict(total: i64) -> Verdict {
    if total < WEAK_THRESHOLD {
        Verdict {
            class: VerdictClass::Weak,
            title: WEAK_TITLE,
            description: WEAK_DESCRIPTION,
        }
    } else if total < PLAUSIBLE_THRESHOLD {
        Verdict {
            class: VerdictClass::Plausible,
            title: PLAUSIBLE_TITLE,
            description: PLAUSIBLE_DESCRIPTION,
        }
    } else {
        Verdict {
            class: VerdictClass::Strong,
            title: STRONG_TITLE,
            description: STRONG_DESCRIPTION,
        }
    }
}
