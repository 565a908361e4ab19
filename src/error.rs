// Take a look at the license at the top of the repository in the LICENSE file.

/// Result type returned by every metric query.
pub type Result<T> = std::result::Result<T, Error>;

/// Why a metric query did not produce a value.
///
/// The two variants must be told apart by callers: [`Error::NotImplemented`] is a normal
/// outcome meaning "unknown on this platform" whereas [`Error::NativeCallFailed`] means
/// the operating system was asked and refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The native primitive was invoked and reported a failure.
    #[error("{call} failed with error: {code}")]
    NativeCallFailed {
        /// Name of the failing primitive or of the kernel file being read.
        call: &'static str,
        /// Error code as returned by the OS (`GetLastError`, `errno`), unmodified.
        code: i32,
    },
    /// This backend has no way to obtain the metric.
    #[error("not implemented on this platform")]
    NotImplemented,
}

impl Error {
    pub(crate) fn native(call: &'static str, code: i32) -> Self {
        hoststat_debug!("{call} failed with error: {code}");
        Self::NativeCallFailed { call, code }
    }

    /// Returns `true` if the metric is not available on this platform at all.
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Self::NotImplemented)
    }

    /// Returns the OS error code if a native call failed.
    pub fn code(&self) -> Option<i32> {
        match self {
            Self::NativeCallFailed { code, .. } => Some(*code),
            Self::NotImplemented => None,
        }
    }
}
