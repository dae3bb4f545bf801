//! Artifact storage API.

use crate::types::RunManifest;
use crate::{ResultsError, ResultsResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Canonical artifact file names.
pub mod names {
    pub const TIMES: &str = "times.txt";
    pub const REACTIVITIES: &str = "reactivities.txt";
    pub const MATRIX_A: &str = "A.txt";
    pub const RHS_B: &str = "B.txt";
    pub const POWERS: &str = "powers.txt";
    pub const CONCENTRATIONS: &str = "concentrations.txt";
    pub const MANIFEST: &str = "manifest.json";
}

/// Writes and reads the numeric artifacts of a single run directory.
#[derive(Clone, Debug)]
pub struct ArtifactStore {
    root_dir: PathBuf,
}

impl ArtifactStore {
    pub fn new(root_dir: impl Into<PathBuf>) -> ResultsResult<Self> {
        let root_dir = root_dir.into();
        if !root_dir.exists() {
            fs::create_dir_all(&root_dir)?;
        }
        Ok(Self { root_dir })
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    pub fn path_of(&self, name: &str) -> PathBuf {
        self.root_dir.join(name)
    }

    /// Write a vector artifact, one value per line.
    pub fn write_vector(&self, name: &str, values: &[f64]) -> ResultsResult<PathBuf> {
        let mut content = String::with_capacity(values.len() * 24);
        for v in values {
            content.push_str(&v.to_string());
            content.push('\n');
        }
        let path = self.path_of(name);
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Write a matrix artifact, one space-separated row per line.
    pub fn write_matrix(&self, name: &str, rows: &[Vec<f64>]) -> ResultsResult<PathBuf> {
        let mut content = String::new();
        for row in rows {
            let mut sep = "";
            for v in row {
                content.push_str(sep);
                content.push_str(&v.to_string());
                sep = " ";
            }
            content.push('\n');
        }
        let path = self.path_of(name);
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Read a vector artifact back.
    pub fn read_vector(&self, name: &str) -> ResultsResult<Vec<f64>> {
        let content = self.read_artifact(name)?;
        let mut values = Vec::new();
        for (line_no, line) in content.lines().enumerate() {
            let token = line.trim();
            if token.is_empty() {
                continue;
            }
            values.push(parse_value(name, line_no, token)?);
        }
        Ok(values)
    }

    /// Read a matrix artifact back, one row per non-empty line.
    pub fn read_matrix(&self, name: &str) -> ResultsResult<Vec<Vec<f64>>> {
        let content = self.read_artifact(name)?;
        let mut rows = Vec::new();
        for (line_no, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let row = line
                .split_whitespace()
                .map(|token| parse_value(name, line_no, token))
                .collect::<ResultsResult<Vec<f64>>>()?;
            rows.push(row);
        }
        Ok(rows)
    }

    pub fn save_manifest(&self, manifest: &RunManifest) -> ResultsResult<PathBuf> {
        let path = self.path_of(names::MANIFEST);
        let json = serde_json::to_string_pretty(manifest)?;
        fs::write(&path, json)?;
        Ok(path)
    }

    pub fn load_manifest(&self) -> ResultsResult<RunManifest> {
        let content = self.read_artifact(names::MANIFEST)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn read_artifact(&self, name: &str) -> ResultsResult<String> {
        let path = self.path_of(name);
        if !path.exists() {
            return Err(ResultsError::ArtifactNotFound {
                name: name.to_string(),
            });
        }
        Ok(fs::read_to_string(path)?)
    }
}

fn parse_value(name: &str, line_no: usize, token: &str) -> ResultsResult<f64> {
    token
        .parse::<f64>()
        .map_err(|_| ResultsError::MalformedArtifact {
            name: name.to_string(),
            line: line_no + 1,
            token: token.to_string(),
        })
}
