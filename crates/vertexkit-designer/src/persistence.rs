//! Project storage.
//!
//! The editor saves after every committing mutation and loads the current
//! project once at startup. Stores key projects by name; names are limited
//! to letters, digits, `_`, `-`, `.` and spaces so they map safely onto
//! file names.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;
use vertexkit_core::constants::DEFAULT_PROJECT_NAME;
use vertexkit_core::{Result, StorageError};

use crate::serialization::SceneSnapshot;

/// File extension of stored projects.
pub const PROJECT_EXTENSION: &str = ".vkproj.json";

const CURRENT_MARKER: &str = "current";

/// Resolves a user-supplied project name.
///
/// A blank hint becomes `untitled_project`; anything else must be a valid
/// project name.
pub fn resolve_project_name(hint: &str) -> Result<String> {
    let name = hint.trim();
    if name.is_empty() {
        return Ok(DEFAULT_PROJECT_NAME.to_string());
    }
    validate_project_name(name)?;
    Ok(name.to_string())
}

/// Checks that `name` can be used as a storage key.
pub fn validate_project_name(name: &str) -> Result<()> {
    let valid = !name.trim().is_empty()
        && !name.starts_with('.')
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | ' '));
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidProjectName {
            name: name.to_string(),
        }
        .into())
    }
}

/// Persistence collaborator used by the editor loop.
pub trait ProjectStore {
    /// Stores a snapshot under the resolved name and returns that name.
    fn save(&mut self, name_hint: &str, snapshot: &SceneSnapshot) -> Result<String>;

    /// Loads a project; `Ok(None)` when nothing is stored under `name`.
    fn load(&self, name: &str) -> Result<Option<SceneSnapshot>>;

    /// Names of all stored projects, sorted.
    fn list(&self) -> Result<Vec<String>>;

    /// Removes a project.
    fn delete(&mut self, name: &str) -> Result<()>;

    /// The project selected for the next startup.
    fn current(&self) -> Result<Option<String>>;

    fn set_current(&mut self, name: &str) -> Result<()>;
}

/// In-memory store for tests and headless use.
#[derive(Debug, Clone, Default)]
pub struct MemoryProjectStore {
    projects: BTreeMap<String, SceneSnapshot>,
    current: Option<String>,
}

impl MemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

impl ProjectStore for MemoryProjectStore {
    fn save(&mut self, name_hint: &str, snapshot: &SceneSnapshot) -> Result<String> {
        let name = resolve_project_name(name_hint)?;
        let mut stored = snapshot.clone();
        stored.metadata.name = name.clone();
        self.projects.insert(name.clone(), stored);
        Ok(name)
    }

    fn load(&self, name: &str) -> Result<Option<SceneSnapshot>> {
        Ok(self.projects.get(name).cloned())
    }

    fn list(&self) -> Result<Vec<String>> {
        Ok(self.projects.keys().cloned().collect())
    }

    fn delete(&mut self, name: &str) -> Result<()> {
        if self.projects.remove(name).is_none() {
            return Err(StorageError::ProjectNotFound {
                name: name.to_string(),
            }
            .into());
        }
        if self.current.as_deref() == Some(name) {
            self.current = None;
        }
        Ok(())
    }

    fn current(&self) -> Result<Option<String>> {
        Ok(self.current.clone())
    }

    fn set_current(&mut self, name: &str) -> Result<()> {
        validate_project_name(name)?;
        self.current = Some(name.to_string());
        Ok(())
    }
}

/// Directory-backed store: one `<name>.vkproj.json` per project and a
/// `current` marker file naming the project to reopen.
#[derive(Debug, Clone)]
pub struct FileProjectStore {
    dir: PathBuf,
}

impl FileProjectStore {
    /// Opens (and creates if needed) a store rooted at `dir`.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn project_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}{PROJECT_EXTENSION}"))
    }

    fn marker_path(&self) -> PathBuf {
        self.dir.join(CURRENT_MARKER)
    }
}

impl ProjectStore for FileProjectStore {
    fn save(&mut self, name_hint: &str, snapshot: &SceneSnapshot) -> Result<String> {
        let name = resolve_project_name(name_hint)?;
        let mut stored = snapshot.clone();
        stored.metadata.name = name.clone();
        let path = self.project_path(&name);
        fs::write(&path, stored.to_json()?)?;
        debug!("Saved project '{}' to {}", name, path.display());
        Ok(name)
    }

    fn load(&self, name: &str) -> Result<Option<SceneSnapshot>> {
        validate_project_name(name)?;
        match fs::read_to_string(self.project_path(name)) {
            Ok(json) => Ok(Some(SceneSnapshot::from_json(&json)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn list(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let file_name = entry?.file_name();
            if let Some(name) = file_name
                .to_str()
                .and_then(|n| n.strip_suffix(PROJECT_EXTENSION))
            {
                names.push(name.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn delete(&mut self, name: &str) -> Result<()> {
        validate_project_name(name)?;
        match fs::remove_file(self.project_path(name)) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StorageError::ProjectNotFound {
                    name: name.to_string(),
                }
                .into())
            }
            Err(e) => return Err(e.into()),
        }
        if self.current()?.as_deref() == Some(name) {
            fs::remove_file(self.marker_path())?;
        }
        Ok(())
    }

    fn current(&self) -> Result<Option<String>> {
        match fs::read_to_string(self.marker_path()) {
            Ok(content) => {
                let name = content.trim();
                Ok((!name.is_empty()).then(|| name.to_string()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_current(&mut self, name: &str) -> Result<()> {
        validate_project_name(name)?;
        fs::write(self.marker_path(), name)?;
        Ok(())
    }
}
