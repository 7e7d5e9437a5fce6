use thiserror::Error;

/// Errors raised while reading inputs, checking parameters or writing output.
#[derive(Debug, Error)]
pub enum DhError {
    #[error("could not parse {field} from {input:?}: expected a 64-bit integer")]
    InputParse { field: &'static str, input: String },

    #[error("input ended before {field} was read")]
    UnexpectedEof { field: &'static str },

    #[error("modulus must be positive, got {0}")]
    InvalidModulus(i64),

    #[error("invalid parameters: {0}")]
    Validation(#[from] ValidationError),

    #[error("prime {0} is too small to draw a private key from [2, p-2]")]
    KeySpaceTooSmall(i64),

    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures of the strict validation policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is not prime")]
    NotPrime(i64),

    #[error("generator {generator} is outside [2, {prime} - 1]")]
    GeneratorOutOfRange { generator: i64, prime: i64 },

    #[error("private key {value} of {name} is outside [2, {prime} - 2]")]
    PrivateExponentOutOfRange {
        name: String,
        value: i64,
        prime: i64,
    },
}
