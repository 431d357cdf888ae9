use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoError {
    OutOfBounds,
    Occupied,
    Suicide,
    Repetition,
    WrongTurn,
    GameOver,
    NotFinished,
    InvalidSize(u8),
    InvalidKomi,
}

impl GoError {
    /// True for the reasons a placement can be declined on the board itself.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            GoError::OutOfBounds | GoError::Occupied | GoError::Suicide | GoError::Repetition
        )
    }
}

impl fmt::Display for GoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoError::OutOfBounds => write!(f, "point is off the board"),
            GoError::Occupied => write!(f, "point is already occupied"),
            GoError::Suicide => write!(f, "suicide"),
            GoError::Repetition => write!(f, "move repeats an earlier position"),
            GoError::WrongTurn => write!(f, "out of turn"),
            GoError::GameOver => write!(f, "game is over"),
            GoError::NotFinished => write!(f, "game is still in progress"),
            GoError::InvalidSize(n) => write!(f, "unsupported board size {n}, expected 9, 13 or 19"),
            GoError::InvalidKomi => write!(f, "komi must be a finite number"),
        }
    }
}

impl std::error::Error for GoError {}
