use thiserror::Error;

/// Rejections raised by `Session::submit`. Neither case advances the
/// questionnaire; the caller re-prompts (empty input) or stops driving the
/// session (already complete).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("answer is empty after trimming whitespace")]
    EmptyAnswer,
    #[error("all elements of the claim are already answered")]
    Complete,
}
