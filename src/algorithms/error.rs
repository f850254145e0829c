use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    #[error("the number list cannot be empty")]
    Empty,

    #[error("the number list cannot have more than {max} elements")]
    TooMany { max: usize },

    #[error("numbers must be between {min} and {max}")]
    OutOfRange { min: i64, max: i64 },

    #[error("the number list cannot contain duplicates")]
    Duplicates,

    #[error("the number list must have at least {min} elements to {action}")]
    TooFew { min: usize, action: &'static str },

    #[error("the sum does not fit in a 64-bit integer")]
    Overflow,
}
