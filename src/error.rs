//! Application error type.
//!
//! Every failure in the pipeline is an `AppError`: a kind (which decides the
//! process exit code) plus a human-readable diagnostic. Errors are detected
//! eagerly, never recovered, and propagate to `main()` via `Result` + `?`.

/// Failure taxonomy for the fit pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unreadable input or unwritable output file.
    Io,
    /// Inconsistent row/column counts or malformed data tokens.
    Structure,
    /// Physically meaningless data (non-positive uncertainties).
    Constraint,
    /// Degenerate arithmetic (zero weighted x-variance, too few points).
    Numerical,
}

impl ErrorKind {
    /// Process exit code for this kind of failure.
    ///
    /// Success is 0; each failure kind gets a distinct non-zero code so
    /// callers can tell failures apart without parsing diagnostics.
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorKind::Io => 2,
            ErrorKind::Structure => 3,
            ErrorKind::Constraint => 4,
            ErrorKind::Numerical => 5,
        }
    }
}

#[derive(Clone)]
pub struct AppError {
    kind: ErrorKind,
    message: String,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io, message)
    }

    pub fn structural(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Structure, message)
    }

    pub fn constraint(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Constraint, message)
    }

    pub fn numerical(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Numerical, message)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn exit_code(&self) -> u8 {
        self.kind.exit_code()
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
