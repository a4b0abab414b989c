//! File-backed role storage

use crate::auth::rbac::RoleSnapshot;
use crate::utils::error::{FolderAuthError, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// On-disk encoding of a role snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Yaml,
}

impl SnapshotFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            _ => Err(FolderAuthError::Config(format!(
                "Unsupported roles file format: {}",
                path.display()
            ))),
        }
    }

    pub fn encode(self, snapshot: &RoleSnapshot) -> Result<String> {
        match self {
            Self::Json => Ok(serde_json::to_string_pretty(snapshot)?),
            Self::Yaml => Ok(serde_yaml::to_string(snapshot)?),
        }
    }

    pub fn decode(self, content: &str) -> Result<RoleSnapshot> {
        match self {
            Self::Json => Ok(serde_json::from_str(content)?),
            Self::Yaml => Ok(serde_yaml::from_str(content)?),
        }
    }
}

/// Role snapshot kept in a single local file
#[derive(Debug, Clone)]
pub struct RoleFileStorage {
    path: PathBuf,
    format: SnapshotFormat,
}

impl RoleFileStorage {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let format = SnapshotFormat::from_path(&path)?;
        Ok(Self { path, format })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the snapshot; a missing file yields an empty snapshot
    pub async fn load(&self) -> Result<RoleSnapshot> {
        if !fs::try_exists(&self.path).await? {
            info!(
                "Roles file {:?} does not exist, starting with no folder roles",
                self.path
            );
            return Ok(RoleSnapshot::default());
        }

        let content = fs::read_to_string(&self.path).await?;
        let snapshot = self.format.decode(&content)?;
        debug!(
            "Loaded {} folder roles from {:?}",
            snapshot.roles.len(),
            self.path
        );
        Ok(snapshot)
    }

    /// Write the snapshot through a temporary file renamed into place
    pub async fn save(&self, snapshot: &RoleSnapshot) -> Result<()> {
        let content = self.format.encode(snapshot)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, content).await?;
        fs::rename(&tmp, &self.path).await?;

        debug!(
            "Saved {} folder roles to {:?}",
            snapshot.roles.len(),
            self.path
        );
        Ok(())
    }
}
