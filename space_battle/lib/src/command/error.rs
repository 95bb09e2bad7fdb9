use thiserror::Error;

/// Why a movable could not be moved.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidMoveReason {
    #[error("position is missing")]
    MissingPosition,

    #[error("move speed is missing")]
    MissingMoveSpeed,

    #[error("position has {position} dimensions but move speed has {move_speed}")]
    DimensionMismatch { position: usize, move_speed: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("invalid movable state: {}", join_reasons(.reasons))]
    InvalidState { reasons: Vec<InvalidMoveReason> },
}

impl MoveError {
    pub fn reasons(&self) -> &[InvalidMoveReason] {
        match self {
            MoveError::InvalidState { reasons } => reasons,
        }
    }
}

fn join_reasons(reasons: &[InvalidMoveReason]) -> String {
    reasons
        .iter()
        .map(|reason| reason.to_string())
        .collect::<Vec<String>>()
        .join(", ")
}
