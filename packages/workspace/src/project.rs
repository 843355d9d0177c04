//! Projects and the persistence boundary.
//!
//! The session server never talks to storage directly beyond handing a
//! [`PersistPayload`] to a [`ProjectStore`]. Two stores ship with the crate:
//! an in-memory map and a directory of JSON files.

use crate::events::PersistPayload;
use chrono::{DateTime, Utc};
use screenplay_document::Document;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Project not found: {0}")]
    NotFound(String),

    #[error("Invalid project id: {0}")]
    InvalidId(String),

    #[error("Store is unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMetadata {
    pub author: String,
    pub version: String,
}

impl Default for ProjectMetadata {
    fn default() -> Self {
        Self {
            author: String::new(),
            version: "1.0".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    /// Serialized document
    pub content: String,
    #[serde(default)]
    pub metadata: ProjectMetadata,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    pub fn document(&self) -> Result<Document, screenplay_document::DocumentError> {
        Document::load(Some(&self.content))
    }
}

/// Durable storage keyed by project id
pub trait ProjectStore: Send + Sync {
    fn get(&self, id: &str) -> StoreResult<Option<Project>>;

    fn put(&self, project: &Project) -> StoreResult<()>;

    fn list(&self) -> StoreResult<Vec<Project>>;

    /// Returns whether anything was removed
    fn delete(&self, id: &str) -> StoreResult<bool>;

    /// Write persisted content into an existing project
    fn save_content(&self, id: &str, payload: &PersistPayload) -> StoreResult<Project> {
        let mut project = self
            .get(id)?
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        project.content = payload.content.clone();
        project.updated_at = payload.updated_at;
        self.put(&project)?;
        Ok(project)
    }
}

/// Projects held in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    projects: Mutex<BTreeMap<String, Project>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn projects(&self) -> StoreResult<std::sync::MutexGuard<'_, BTreeMap<String, Project>>> {
        self.projects
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".to_string()))
    }
}

impl ProjectStore for MemoryStore {
    fn get(&self, id: &str) -> StoreResult<Option<Project>> {
        Ok(self.projects()?.get(id).cloned())
    }

    fn put(&self, project: &Project) -> StoreResult<()> {
        self.projects()?.insert(project.id.clone(), project.clone());
        Ok(())
    }

    fn list(&self) -> StoreResult<Vec<Project>> {
        Ok(self.projects()?.values().cloned().collect())
    }

    fn delete(&self, id: &str) -> StoreResult<bool> {
        Ok(self.projects()?.remove(id).is_some())
    }
}

/// One `<id>.json` file per project under a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, id: &str) -> StoreResult<PathBuf> {
        let valid = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StoreError::InvalidId(id.to_string()));
        }
        Ok(self.root.join(format!("{}.json", id)))
    }
}

impl ProjectStore for FileStore {
    fn get(&self, id: &str) -> StoreResult<Option<Project>> {
        let path = self.path_for(id)?;
        if !path.exists() {
            return Ok(None);
        }
        let source = std::fs::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&source)?))
    }

    fn put(&self, project: &Project) -> StoreResult<()> {
        let path = self.path_for(&project.id)?;
        std::fs::create_dir_all(&self.root)?;
        std::fs::write(path, serde_json::to_string_pretty(project)?)?;
        Ok(())
    }

    fn list(&self) -> StoreResult<Vec<Project>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut projects = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let source = std::fs::read_to_string(&path)?;
            projects.push(serde_json::from_str(&source)?);
        }
        Ok(projects)
    }

    fn delete(&self, id: &str) -> StoreResult<bool> {
        let path = self.path_for(id)?;
        if !path.exists() {
            return Ok(false);
        }
        std::fs::remove_file(path)?;
        Ok(true)
    }
}

/// Project lifecycle on top of a store
pub struct ProjectManager<S: ProjectStore> {
    store: S,
}

impl<S: ProjectStore> ProjectManager<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Create a project holding an empty document
    pub fn create(&self, title: &str, author: &str) -> StoreResult<Project> {
        self.create_with(title, author, &Document::new())
    }

    /// Create a project holding `document`
    pub fn create_with(&self, title: &str, author: &str, document: &Document) -> StoreResult<Project> {
        let now = Utc::now();
        let base = format!("proj_{}", now.timestamp_millis());

        let mut id = base.clone();
        let mut suffix = 1;
        while self.store.get(&id)?.is_some() {
            suffix += 1;
            id = format!("{}_{}", base, suffix);
        }

        let title = match title.trim() {
            "" => "Untitled".to_string(),
            title => title.to_string(),
        };

        let project = Project {
            id,
            title,
            content: document.serialize(),
            metadata: ProjectMetadata {
                author: author.to_string(),
                ..ProjectMetadata::default()
            },
            created_at: now,
            updated_at: now,
        };
        self.store.put(&project)?;

        info!(id = %project.id, title = %project.title, "Created project");
        Ok(project)
    }

    pub fn open(&self, id: &str) -> StoreResult<Project> {
        self.store
            .get(id)?
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    pub fn save(&self, id: &str, payload: &PersistPayload) -> StoreResult<Project> {
        self.store.save_content(id, payload)
    }

    pub fn rename(&self, id: &str, title: &str) -> StoreResult<Project> {
        let mut project = self.open(id)?;
        project.title = title.to_string();
        project.updated_at = Utc::now();
        self.store.put(&project)?;
        Ok(project)
    }

    /// Most recently updated first
    pub fn list(&self) -> StoreResult<Vec<Project>> {
        let mut projects = self.store.list()?;
        projects.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then_with(|| a.id.cmp(&b.id)));
        Ok(projects)
    }

    pub fn delete(&self, id: &str) -> StoreResult<bool> {
        self.store.delete(id)
    }
}

impl<S: ProjectStore> ProjectStore for std::sync::Arc<S> {
    fn get(&self, id: &str) -> StoreResult<Option<Project>> {
        (**self).get(id)
    }

    fn put(&self, project: &Project) -> StoreResult<()> {
        (**self).put(project)
    }

    fn list(&self) -> StoreResult<Vec<Project>> {
        (**self).list()
    }

    fn delete(&self, id: &str) -> StoreResult<bool> {
        (**self).delete(id)
    }
}
