use tracing::debug;

use crate::model::{Answer, ScoredAnswer, Verdict};
use crate::scoring::AnswerScorer;
use crate::thresholds::map_verdict;

/// Everything the presentation layer needs to build the results view: the
/// answers in submission order and the selected verdict. Scores ride along
/// for diagnostics but are never rendered.
#[derive(Debug, Clone)]
pub struct Ruling {
    pub answers: Vec<ScoredAnswer>,
    pub total: i64,
    pub verdict: Verdict,
}

/// Score each answer in order, sum, and map the total to a verdict.
pub fn evaluate(answers: &[Answer], scorer: &dyn AnswerScorer) -> Ruling {
    let mut scored = Vec::with_capacity(answers.len());
    let mut total = 0i64;
    for answer in answers {
        let breakdown = scorer.score(answer.element, &answer.text);
        debug!(
            element = answer.element.name(),
            scorer = scorer.name(),
            score = breakdown.total,
            zeroed = breakdown.conclusory_zeroed,
            "scored answer"
        );
        total += breakdown.total;
        scored.push(ScoredAnswer {
            element: answer.element,
            text: answer.text.clone(),
            score: breakdown.total,
        });
    }
    let verdict = map_verdict(total);
    debug!(total, class = verdict.class.label(), "ruling selected");
    Ruling {
        answers: scored,
        total,
        verdict,
    }
}
