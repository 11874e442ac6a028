use std::sync::Arc;

use plead_core::scoring::AnswerScorer;

pub mod rules;
mod scorer;

pub use scorer::FactualIndicatorScorer;

pub fn default_scorer() -> Arc<dyn AnswerScorer> {
    Arc::new(FactualIndicatorScorer)
}
