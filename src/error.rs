/// Error type for the crate.
///
/// Every documented violation — a zero layer size, fewer than two layers, a
/// misdirected connection endpoint, an input slice of the wrong length, an
/// out-of-range weight index — is an `InvalidArgument`. Errors are raised
/// eagerly at the point of violation and leave prior state untouched.
#[derive(thiserror::Error, Debug)]
pub enum NetworkError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, NetworkError>;
