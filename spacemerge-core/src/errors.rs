use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SpaceParseError {
    #[error("Missing {0} field, expected `<start>,<size>`")]
    MissingField(&'static str),

    #[error("Too many fields in space, expected `<start>,<size>`: {0}")]
    TooManyFields(String),

    #[error("Can't parse number: {0}")]
    InvalidNumber(String),
}
