//! Raw resource locations and their conversion to URIs.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use url::Url;

use crate::error::UriError;

/// Where a lookup found a resource, before it is validated as a URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceLocation {
    /// Found on the local filesystem.
    Path(PathBuf),
    /// Described by URL text, e.g. `jar:file:/opt/app.jar!/lib/` or a pinned `file:` URL.
    Url(String),
}

impl ResourceLocation {
    /// Converts this location into a URI.
    ///
    /// Directory paths map to a `file:` URL with a trailing `/`; other paths
    /// map without one. `.` and `..` components are folded away first so the
    /// URL text is already in the form the URL parser would produce. URL text
    /// is parsed as-is.
    pub fn to_url(&self) -> Result<Url, UriError> {
        match self {
            ResourceLocation::Path(path) => {
                if !path.is_absolute() {
                    return Err(UriError::RelativePath);
                }
                let normalized = normalize(path);
                let converted = if path.is_dir() {
                    Url::from_directory_path(&normalized)
                } else {
                    Url::from_file_path(&normalized)
                };
                converted.map_err(|()| UriError::RelativePath)
            }
            ResourceLocation::Url(text) => Ok(Url::parse(text)?),
        }
    }
}

/// Lexically drops `.` and resolves `..` against the preceding component.
/// `..` above the root stays at the root.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

impl fmt::Display for ResourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceLocation::Path(p) => write!(f, "{}", p.display()),
            ResourceLocation::Url(u) => f.write_str(u),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_gets_trailing_slash() {
        let dir = tempfile::tempdir().unwrap();
        let loc = ResourceLocation::Path(dir.path().to_path_buf());
        let url = loc.to_url().unwrap();
        assert_eq!(url.scheme(), "file");
        assert!(url.as_str().ends_with('/'));
    }

    #[test]
    fn file_has_no_trailing_slash() {
        let f = tempfile::NamedTempFile::new().unwrap();
        let url = ResourceLocation::Path(f.path().to_path_buf())
            .to_url()
            .unwrap();
        assert!(!url.as_str().ends_with('/'));
        assert_eq!(url.to_file_path().unwrap(), f.path());
    }

    #[test]
    fn parent_components_are_folded() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("bin")).unwrap();
        std::fs::create_dir(dir.path().join("lib")).unwrap();
        let loc = ResourceLocation::Path(dir.path().join("bin").join("..").join(".").join("lib"));
        let url = loc.to_url().unwrap();
        assert!(!url.as_str().contains("/../"));
        assert!(!url.as_str().contains("/./"));
        assert_eq!(Url::parse(url.as_str()).unwrap().as_str(), url.as_str());
        assert_eq!(url.to_file_path().unwrap(), dir.path().join("lib"));
    }

    #[test]
    fn normalize_stops_at_root() {
        assert_eq!(normalize(Path::new("/a/../../b")), PathBuf::from("/b"));
        assert_eq!(normalize(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
    }

    #[test]
    fn relative_path_rejected() {
        let loc = ResourceLocation::Path(PathBuf::from("lib"));
        assert!(matches!(loc.to_url(), Err(UriError::RelativePath)));
    }

    #[test]
    fn spaces_are_percent_encoded() {
        let dir = tempfile::tempdir().unwrap();
        let lib = dir.path().join("my lib");
        std::fs::create_dir(&lib).unwrap();
        let url = ResourceLocation::Path(lib).to_url().unwrap();
        assert!(url.as_str().ends_with("/my%20lib/"));
    }

    #[test]
    fn archive_url_text_parses() {
        let loc = ResourceLocation::Url("jar:file:/opt/app.jar!/lib/".to_string());
        let url = loc.to_url().unwrap();
        assert_eq!(url.scheme(), "jar");
        assert_eq!(url.as_str(), "jar:file:/opt/app.jar!/lib/");
    }

    #[test]
    fn schemeless_text_rejected() {
        let loc = ResourceLocation::Url("lib/".to_string());
        match loc.to_url() {
            Err(UriError::Parse(e)) => assert_eq!(e, url::ParseError::RelativeUrlWithoutBase),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn bad_port_rejected() {
        let loc = ResourceLocation::Url("http://example.com:99999/lib/".to_string());
        assert!(matches!(
            loc.to_url(),
            Err(UriError::Parse(url::ParseError::InvalidPort))
        ));
    }
}
