use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Malformed coordinates, expected \"row-col\"")]
    MalformedCoords,
    #[error("Board shape must be between 1x1 and 255x255")]
    InvalidBoardShape,
}

pub type Result<T> = core::result::Result<T, GameError>;
