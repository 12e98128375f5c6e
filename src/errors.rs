use thiserror::Error;

/// HTTP error classification
#[derive(Error, Debug, Clone)]
pub enum HttpErrorKind {
    #[error("Client error (code: {code:?}): {message}")]
    Client {
        code: Option<u16>,
        message: String,
        data: Option<String>,
    },
    #[error("Server error: {message}")]
    Server { message: String },
}

/// Main SDK error type
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// A required field was never set before encoding.
    ///
    /// The payload is the wire path of the field, e.g. `action.orders[1].t`.
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// HTTP error with status code and classification
    #[error("HTTP error (status {status}): {kind}")]
    Http { status: u16, kind: HttpErrorKind },

    /// Generic request error
    #[error("Generic request error: {0}")]
    GenericRequest(String),

    /// JSON encode or parse error
    #[error("Json parse error: {0}")]
    JsonParse(String),

    /// MessagePack encode error
    #[error("Rmp parse error: {0}")]
    RmpParse(String),

    /// Vault address could not be read as a 20-byte address
    #[error("Invalid vault address: {0}")]
    InvalidVaultAddress(String),

    /// Private key parse error
    #[error("Private key parse error: {0}")]
    PrivateKeyParse(String),

    /// Signature failure
    #[error("ECDSA signature failed: {0}")]
    SignatureFailure(String),
}

impl Error {
    /// Create a missing-field error for the given wire path
    pub fn missing_field(path: impl Into<String>) -> Self {
        Error::MissingField(path.into())
    }

    /// Create an HTTP client error
    pub fn client_error(
        status: u16,
        code: Option<u16>,
        message: String,
        data: Option<String>,
    ) -> Self {
        Error::Http {
            status,
            kind: HttpErrorKind::Client {
                code,
                message,
                data,
            },
        }
    }

    /// Create an HTTP server error
    pub fn server_error(status: u16, message: String) -> Self {
        Error::Http {
            status,
            kind: HttpErrorKind::Server { message },
        }
    }

    /// Create a JSON parse error
    pub fn json_parse(msg: impl Into<String>) -> Self {
        Error::JsonParse(msg.into())
    }

    /// Create a signature failure error
    pub fn signature_failure(msg: impl Into<String>) -> Self {
        Error::SignatureFailure(msg.into())
    }

    /// Whether this error reports an unset required field.
    pub fn is_missing_field(&self) -> bool {
        matches!(self, Error::MissingField(_))
    }
}
