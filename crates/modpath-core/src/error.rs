//! Error types for module path resolution.

use thiserror::Error;

/// Why a found location could not be turned into a URI.
#[derive(Debug, Error)]
pub enum UriError {
    /// The location text is not valid URL syntax.
    #[error(transparent)]
    Parse(#[from] url::ParseError),
    /// Filesystem locations must be absolute to map onto a `file:` URL.
    #[error("path is not absolute")]
    RelativePath,
}

/// Failure of a module path lookup. Callers match on the kind; nothing is retried.
#[derive(Debug, Error)]
pub enum LocationError {
    /// The lookup has no resource under this name.
    #[error("resource `{name}` not found in {anchor}")]
    NotFound { name: String, anchor: String },

    /// The resource was found but its location is not expressible as a URI.
    #[error("trouble evaluating module path for `{location}`")]
    Unresolvable {
        location: String,
        #[source]
        source: UriError,
    },

    /// A module id passed to `module_url_for` is empty, absolute, or climbs out with `..`.
    #[error("invalid module id `{0}`")]
    InvalidModuleId(String),
}
