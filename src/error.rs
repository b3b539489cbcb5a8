use thiserror::Error;

/// Errors from the post store, the About page and their files.
#[derive(Error, Debug)]
pub enum Error {
    /// A draft was missing a field that must not be blank.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// No post has the given id.
    #[error("post not found: {0}")]
    NotFound(String),

    /// Reading or writing a backing file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A backing file held malformed JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Shorthand for results carrying [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
