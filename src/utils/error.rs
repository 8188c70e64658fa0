use thiserror::Error;

/// 單次搜尋可能的失敗；`Display` 即為顯示給使用者的訊息
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Please enter a search keyword")]
    InvalidInput,

    #[error("Network Error: Unable to connect to the server. Please check your internet connection.")]
    NetworkError,

    #[error("Request Setup Error: {0}")]
    RequestSetupError(String),

    #[error("Bad Request: Invalid search parameters")]
    BadRequest,

    #[error("Unauthorized: Please check your authentication")]
    Unauthorized,

    #[error("Forbidden: You don't have permission to access this resource")]
    Forbidden,

    #[error("Not Found: No jobs match your search criteria")]
    NotFound,

    #[error("Server Error: Internal server problem. Please try again later")]
    ServerError,

    #[error("Service Unavailable: The job search service is temporarily down")]
    Unavailable,

    #[error("Unexpected Error: {status} - {message}")]
    UnexpectedStatus { status: u16, message: String },

    #[error("No jobs found for your search. Try a different keyword.")]
    EmptyResult,
}

pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error occurred";

impl FetchError {
    /// 將非 2xx 狀態碼對應到錯誤類別，`message` 只在未知狀態碼時使用
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        match status {
            400 => FetchError::BadRequest,
            401 => FetchError::Unauthorized,
            403 => FetchError::Forbidden,
            404 => FetchError::NotFound,
            500 => FetchError::ServerError,
            503 => FetchError::Unavailable,
            _ => FetchError::UnexpectedStatus {
                status,
                message: message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string()),
            },
        }
    }

    pub fn from_transport(err: &reqwest::Error) -> Self {
        if err.is_builder() {
            FetchError::RequestSetupError(err.to_string())
        } else if err.is_decode() {
            FetchError::EmptyResult
        } else if let Some(status) = err.status() {
            FetchError::from_status(status.as_u16(), None)
        } else {
            // 連線失敗、逾時等：請求送出但沒有收到回應
            FetchError::NetworkError
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            FetchError::BadRequest => Some(400),
            FetchError::Unauthorized => Some(401),
            FetchError::Forbidden => Some(403),
            FetchError::NotFound => Some(404),
            FetchError::ServerError => Some(500),
            FetchError::Unavailable => Some(503),
            FetchError::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Search failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Failed to parse configuration: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Network,
    Search,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AppError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::IoError(_) => ErrorCategory::System,
            AppError::ConfigError { .. }
            | AppError::ConfigParseError { .. }
            | AppError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            AppError::Fetch(FetchError::NetworkError)
            | AppError::Fetch(FetchError::RequestSetupError(_)) => ErrorCategory::Network,
            AppError::Fetch(_) => ErrorCategory::Search,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Fetch(FetchError::EmptyResult)
            | AppError::Fetch(FetchError::NotFound)
            | AppError::Fetch(FetchError::InvalidInput) => ErrorSeverity::Low,
            AppError::Fetch(FetchError::NetworkError)
            | AppError::Fetch(FetchError::ServerError)
            | AppError::Fetch(FetchError::Unavailable) => ErrorSeverity::Medium,
            AppError::Fetch(_) => ErrorSeverity::High,
            AppError::ConfigError { .. }
            | AppError::ConfigParseError { .. }
            | AppError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            AppError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AppError::Fetch(FetchError::InvalidInput) => "Provide a non-empty keyword",
            AppError::Fetch(FetchError::EmptyResult) | AppError::Fetch(FetchError::NotFound) => {
                "Try a broader keyword such as 'python developer'"
            }
            AppError::Fetch(FetchError::NetworkError) => {
                "Check connectivity to the scraping service or raise --timeout-secs"
            }
            AppError::Fetch(FetchError::ServerError) | AppError::Fetch(FetchError::Unavailable) => {
                "Retry later, or pass --retry to retry automatically"
            }
            AppError::Fetch(_) => "Verify --base-url points at the scraping service",
            AppError::ConfigError { .. }
            | AppError::ConfigParseError { .. }
            | AppError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command line flags"
            }
            AppError::IoError(_) => "Check file paths and permissions",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::Fetch(e) => e.to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_status_codes_map_to_variants() {
        assert_eq!(FetchError::from_status(400, None), FetchError::BadRequest);
        assert_eq!(FetchError::from_status(401, None), FetchError::Unauthorized);
        assert_eq!(FetchError::from_status(403, None), FetchError::Forbidden);
        assert_eq!(FetchError::from_status(404, None), FetchError::NotFound);
        assert_eq!(FetchError::from_status(500, None), FetchError::ServerError);
        assert_eq!(FetchError::from_status(503, None), FetchError::Unavailable);
    }

    #[test]
    fn test_unexpected_status_message() {
        let err = FetchError::from_status(418, Some("teapot".to_string()));
        assert_eq!(err.to_string(), "Unexpected Error: 418 - teapot");

        let err = FetchError::from_status(502, None);
        assert_eq!(err.to_string(), "Unexpected Error: 502 - Unknown error occurred");
        assert_eq!(err.status_code(), Some(502));
    }

    #[test]
    fn test_not_found_message_is_user_visible() {
        assert!(FetchError::NotFound.to_string().starts_with("Not Found"));
        assert_eq!(FetchError::NotFound.status_code(), Some(404));
        assert_eq!(FetchError::NetworkError.status_code(), None);
    }

    #[test]
    fn test_app_error_classification() {
        let err = AppError::from(FetchError::Unavailable);
        assert_eq!(err.category(), ErrorCategory::Search);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(
            err.user_friendly_message(),
            "Service Unavailable: The job search service is temporarily down"
        );

        let err = AppError::InvalidConfigValueError {
            field: "view.page_size".to_string(),
            value: "0".to_string(),
            reason: "Value must be at least 1".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
    }
}
