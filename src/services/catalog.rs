use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use thiserror::Error;

use crate::models::FundingProgram;

/// Errors that can occur when loading the program catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// File-backed program catalog.
///
/// Stand-in for the external catalog provider: loads the program list from a
/// JSON file at startup and serves filtered snapshots to the matching
/// endpoint. `reload` re-reads the file so the catalog can be updated without
/// a restart.
pub struct ProgramCatalog {
    path: PathBuf,
    programs: RwLock<Vec<FundingProgram>>,
}

impl ProgramCatalog {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref().to_path_buf();
        let programs = read_programs(&path)?;

        tracing::info!("Loaded {} programs from {}", programs.len(), path.display());

        Ok(Self {
            path,
            programs: RwLock::new(programs),
        })
    }

    /// Re-read the catalog file, replacing the in-memory set on success.
    /// On failure the previous snapshot stays in place.
    pub fn reload(&self) -> Result<usize, CatalogError> {
        let programs = read_programs(&self.path)?;
        let count = programs.len();

        *self.programs.write().expect("catalog lock poisoned") = programs;

        tracing::info!("Reloaded catalog: {} programs", count);
        Ok(count)
    }

    /// Programs currently open for applications: active flag set and, for
    /// time-limited programs, deadline not yet passed.
    pub fn active_programs(&self) -> Vec<FundingProgram> {
        let today = chrono::Utc::now().date_naive();

        self.programs
            .read()
            .expect("catalog lock poisoned")
            .iter()
            .filter(|p| p.is_active)
            .filter(|p| p.deadline.map_or(true, |d| d >= today))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.programs.read().expect("catalog lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn read_programs(path: &Path) -> Result<Vec<FundingProgram>, CatalogError> {
    let raw = fs::read_to_string(path)?;
    let programs: Vec<FundingProgram> = serde_json::from_str(&raw)?;
    Ok(programs)
}
