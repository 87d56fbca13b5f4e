//! Description of the wrapped native library.

use serde::{Deserialize, Serialize};

/// The C library the generated wrappers bind to.
///
/// Only `header` and `error_type` reach the declaration surface; the rest is
/// used by the implementation surface to call into the library and report
/// its failures. `Default` describes libgit2.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NativeLibrary {
    /// C header included with C linkage, e.g. `git2.h`.
    pub header: String,
    /// Error detail struct stored in every Baton.
    pub error_type: String,
    /// Return code signalling success.
    pub ok_code: String,
    /// Expression yielding the last error of the calling thread.
    pub last_error: String,
    /// Function duplicating an error detail so it outlives the worker thread.
    pub error_dup: String,
    /// Extra include for the implementation surface, declaring `error_dup`.
    pub impl_include: Option<String>,
}

impl Default for NativeLibrary {
    fn default() -> Self {
        Self {
            header: "git2.h".to_string(),
            error_type: "git_error".to_string(),
            ok_code: "GIT_OK".to_string(),
            last_error: "giterr_last()".to_string(),
            error_dup: "git_error_dup".to_string(),
            impl_include: Some("../include/functions/copy.h".to_string()),
        }
    }
}
