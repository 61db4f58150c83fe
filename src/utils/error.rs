use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Content error for '{slug}': {message}")]
    ContentError { slug: String, message: String },
}

pub type Result<T> = std::result::Result<T, SiteError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Archive,
    Io,
    Serialization,
    Config,
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SiteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SiteError::ZipError(_) => ErrorCategory::Archive,
            SiteError::IoError(_) => ErrorCategory::Io,
            SiteError::SerializationError(_) => ErrorCategory::Serialization,
            SiteError::ConfigValidationError { .. }
            | SiteError::InvalidConfigValueError { .. }
            | SiteError::MissingConfigError { .. } => ErrorCategory::Config,
            SiteError::ContentError { .. } => ErrorCategory::Content,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Io | ErrorCategory::Archive => ErrorSeverity::Critical,
            ErrorCategory::Serialization | ErrorCategory::Config => ErrorSeverity::High,
            ErrorCategory::Content => ErrorSeverity::Medium,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that the output directory exists and is writable",
            ErrorCategory::Archive => "Disable archiving in the config or check free disk space",
            ErrorCategory::Serialization => "Re-run with --verbose and report the manifest payload",
            ErrorCategory::Config => "Fix the configuration value and re-run",
            ErrorCategory::Content => "Run the content_report binary to inspect the shipped catalog",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Io => format!("Could not write the site: {}", self),
            ErrorCategory::Archive => format!("Could not create the site archive: {}", self),
            ErrorCategory::Serialization => format!("Could not encode build metadata: {}", self),
            ErrorCategory::Config => format!("The site configuration is invalid: {}", self),
            ErrorCategory::Content => format!("The shipped content is inconsistent: {}", self),
        }
    }
}
