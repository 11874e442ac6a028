use crate::errors::SubmitError;
use crate::model::{Answer, ClaimElement};

/// The questionnaire flow controller. Owns the current position and the
/// answers collected so far; the only mutation path is `submit`.
///
/// Invariants: `answers.len()` always equals the number of accepted
/// submissions, and the element order of `answers` is the fixed order of
/// `ClaimElement::ALL`.
#[derive(Debug, Default)]
pub struct Session {
    current: usize,
    answers: Vec<Answer>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// The element awaiting an answer, or `None` once all three are done.
    pub fn current_prompt(&self) -> Option<ClaimElement> {
        ClaimElement::ALL.get(self.current).copied()
    }

    pub fn is_complete(&self) -> bool {
        self.current == ClaimElement::ALL.len()
    }

    /// Accept `raw` for the current element. Leading/trailing whitespace is
    /// trimmed; an empty result is rejected without advancing.
    pub fn submit(&mut self, raw: &str) -> Result<(), SubmitError> {
        let Some(element) = self.current_prompt() else {
            return Err(SubmitError::Complete);
        };
        let text = raw.trim();
        if text.is_empty() {
            return Err(SubmitError::EmptyAnswer);
        }
        self.answers.push(Answer {
            element,
            text: text.to_string(),
        });
        self.current += 1;
        debug_assert_eq!(self.answers.len(), self.current);
        Ok(())
    }

    /// Accepted answers in submission order.
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_whitespace_submissions_never_advance() {
        let mut s = Session::new();
        for _ in ClaimElement::ALL {
            assert_eq!(s.submit(""), Err(SubmitError::EmptyAnswer));
            assert_eq!(s.submit("   "), Err(SubmitError::EmptyAnswer));
            assert_eq!(s.submit("\t\n"), Err(SubmitError::EmptyAnswer));
            s.submit("a real answer").unwrap();
        }
        assert!(s.is_complete());
    }

    #[test]
    fn submit_advances_one_step_and_appends_one_answer() {
        let mut s = Session::new();
        assert_eq!(s.current_prompt(), Some(ClaimElement::ProtectedActivity));
        s.submit("I filed an EEOC charge").unwrap();
        assert_eq!(s.answers().len(), 1);
        assert_eq!(s.current_prompt(), Some(ClaimElement::AdverseAction));
        s.submit("I was demoted").unwrap();
        assert_eq!(s.answers().len(), 2);
        assert_eq!(s.current_prompt(), Some(ClaimElement::CausalConnection));
    }

    #[test]
    fn submitted_text_is_trimmed() {
        let mut s = Session::new();
        s.submit("  spaced out  ").unwrap();
        assert_eq!(s.answers()[0].text, "spaced out");
    }

    #[test]
    fn answers_follow_the_fixed_element_order() {
        let mut s = Session::new();
        s.submit("one").unwrap();
        s.submit("two").unwrap();
        s.submit("three").unwrap();
        let order: Vec<ClaimElement> = s.answers().iter().map(|a| a.element).collect();
        assert_eq!(order, ClaimElement::ALL.to_vec());
    }

    #[test]
    fn fourth_submit_is_rejected() {
        let mut s = Session::new();
        s.submit("one").unwrap();
        s.submit("two").unwrap();
        s.submit("three").unwrap();
        assert!(s.is_complete());
        assert_eq!(s.current_prompt(), None);
        assert_eq!(s.submit("four"), Err(SubmitError::Complete));
        assert_eq!(s.answers().len(), 3);
    }
}
