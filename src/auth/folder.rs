//! Folder identity
//!
//! The folder hierarchy lives in the platform. The core only needs a folder's
//! canonical full name, which is the key stored in role folder sets.

/// Anything that names a folder
pub trait FolderIdentity {
    fn full_name(&self) -> String;
}

impl FolderIdentity for str {
    fn full_name(&self) -> String {
        self.to_string()
    }
}

impl FolderIdentity for String {
    fn full_name(&self) -> String {
        self.clone()
    }
}

/// Folder addressed by its path from the root, e.g. `["team-a", "app-x"]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FolderPath {
    segments: Vec<String>,
}

impl FolderPath {
    pub fn new<I>(segments: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a `/`-separated path, ignoring empty segments
    pub fn parse(path: &str) -> Self {
        Self::new(path.split('/').filter(|segment| !segment.is_empty()))
    }

    /// Full name of the folder at `path`, e.g. `/team-a//app-x/` -> `team-a/app-x`
    pub fn canonical_name(path: &str) -> String {
        Self::parse(path).full_name()
    }
}

impl FolderIdentity for FolderPath {
    fn full_name(&self) -> String {
        self.segments.join("/")
    }
}
