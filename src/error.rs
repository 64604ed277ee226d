//! Error types for the share_card library

use thiserror::Error;

/// Result type alias for share_card operations
pub type Result<T> = std::result::Result<T, ShareCardError>;

/// Failure to reduce an image to a theme palette.
///
/// Both variants mean the same thing to a caller: no palette was produced.
/// The split only exists so diagnostics can say why.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// Input bytes could not be interpreted as a pixel buffer
    #[error("Failed to decode image: {message}")]
    Decode {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Image has zero width or height, so there is nothing to average
    #[error("Image has empty extent: {width}x{height}")]
    EmptyExtent { width: u32, height: u32 },
}

impl ExtractionError {
    /// Create a decode error with context
    pub fn decode<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Decode {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Failure to hand a share intent to a platform
#[derive(Error, Debug)]
pub enum ShareError {
    /// Target app is not installed or its URL scheme is not registered
    #[error("Cannot open {url}: app not installed or URL scheme is incorrect")]
    AppUnavailable { url: String },

    /// Platform requires a background video and none was supplied
    #[error("{platform} requires a background video")]
    MissingVideo { platform: String },

    /// Sink rejected the intent
    #[error("Delivery failed: {message}")]
    Delivery { message: String },
}

/// Crate-wide error type
#[derive(Error, Debug)]
pub enum ShareCardError {
    /// Image file could not be opened, decoded or encoded
    #[error("Failed to load image: {message}")]
    ImageLoad {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Theme palette could not be extracted
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    /// Share intent could not be built or delivered
    #[error(transparent)]
    Share(#[from] ShareError),

    /// Configuration file could not be parsed or written
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ShareCardError {
    /// Create an image load error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoad {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Check if this error is worth retrying with a different input or target
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ShareCardError::Extraction(_) | ShareCardError::Share(ShareError::AppUnavailable { .. })
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            ShareCardError::ImageLoad { .. } => {
                "Could not load the image. Please check the file format and try again.".to_string()
            }
            ShareCardError::Extraction(ExtractionError::EmptyExtent { .. }) => {
                "The image is empty. Please choose an image with visible content.".to_string()
            }
            ShareCardError::Extraction(ExtractionError::Decode { .. }) => {
                "Could not read colors from the image.".to_string()
            }
            ShareCardError::Share(ShareError::AppUnavailable { .. }) => {
                "The target app is not installed on this device.".to_string()
            }
            ShareCardError::Share(ShareError::MissingVideo { platform }) => {
                format!("Sharing to {} needs a background video.", platform)
            }
            ShareCardError::Config { .. } => {
                "The configuration file is invalid.".to_string()
            }
            _ => "Sharing failed. Please try again.".to_string(),
        }
    }
}
