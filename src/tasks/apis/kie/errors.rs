use super::structs::kie_result::KieResult;

/// Why a single create-task attempt did not succeed.
#[derive(Debug)]
pub enum CreateTaskError {
    /// kie.ai answered with a non-success status.
    Rejected(KieResult),
    /// The request never produced a complete response.
    Transport(reqwest::Error),
}

impl CreateTaskError {
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Rejected(result) => result.is_retryable(),
            Self::Transport(_) => false,
        }
    }
}
