use thiserror::Error;

#[derive(Error, Debug)]
pub enum MotifError {
    #[error("Invalid base '{base}' at position {position}")]
    InvalidBase { base: char, position: usize },

    #[error("Invalid base '{base}' in sequence {index} at position {position}")]
    InvalidSequenceBase {
        index: usize,
        base: char,
        position: usize,
    },

    #[error("K-mer and PWM are different lengths: k-mer = {kmer}, PWM = {pwm}")]
    LengthMismatch { kmer: usize, pwm: usize },

    #[error("Sequence {index} is too short: length {length}, required {required}")]
    SequenceTooShort {
        index: usize,
        length: usize,
        required: usize,
    },

    #[error("Invalid matrix shape: {0}")]
    InvalidShape(String),

    #[error("Invalid parameter: {name} = {value}, {message}")]
    InvalidParameter {
        name: String,
        value: String,
        message: String,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Data error: {0}")]
    DataError(String),
}

/// Type alias for Result with MotifError
pub type Result<T> = std::result::Result<T, MotifError>;

impl MotifError {
    /// Create a new InvalidShape error
    pub fn invalid_shape(message: impl Into<String>) -> Self {
        MotifError::InvalidShape(message.into())
    }

    /// Create a new InvalidParameter error
    pub fn invalid_parameter(
        name: impl Into<String>,
        value: impl ToString,
        message: impl Into<String>,
    ) -> Self {
        MotifError::InvalidParameter {
            name: name.into(),
            value: value.to_string(),
            message: message.into(),
        }
    }
}
