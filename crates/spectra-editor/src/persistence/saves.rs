//! Save directories and the save/load workflow
//!
//! Saves live under `<root>/saves/<mode>/<key>/` and hold two files,
//! `<key>_Spectra.json` and `<key>_Spectra.png`. The key is the shared key of
//! a multi-session run if one is given, otherwise a Unix timestamp picked on
//! the first save and reused for the rest of the session.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use parking_lot::Mutex;
use spectra_core::{CameraPose, DocumentError, Scene, SceneDocument};

use super::capture::{CaptureError, CaptureSink};
use crate::config::SaveConfig;

pub const DOCUMENT_SUFFIX: &str = "_Spectra.json";
pub const PREVIEW_SUFFIX: &str = "_Spectra.png";

#[derive(Debug, Clone, thiserror::Error)]
pub enum SaveError {
    #[error("IO error at {path}: {message}")]
    Io { path: String, message: String },
    #[error(transparent)]
    Document(#[from] DocumentError),
    #[error("Preview capture failed: {0}")]
    Capture(#[from] CaptureError),
    #[error("A save is already in progress")]
    InProgress,
    #[error("No save named '{0}'")]
    NotFound(String),
}

impl SaveError {
    fn io(path: &Path, error: std::io::Error) -> Self {
        SaveError::Io {
            path: path.display().to_string(),
            message: error.to_string(),
        }
    }
}

/// How the current session was started
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    /// Subdirectory under `saves/`
    pub mode: String,
    /// Key handed over by a multi-session host; used verbatim
    pub shared_key: Option<String>,
}

impl SessionContext {
    pub fn new(mode: impl Into<String>) -> Self {
        Self {
            mode: mode.into(),
            shared_key: None,
        }
    }

    pub fn with_shared_key(mut self, key: impl Into<String>) -> Self {
        self.shared_key = Some(key.into());
        self
    }
}

/// File locations of one save
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveEntry {
    pub key: String,
    pub directory: PathBuf,
    pub document_path: PathBuf,
    pub preview_path: PathBuf,
}

impl SaveEntry {
    fn new(mode_dir: &Path, key: &str) -> Self {
        let directory = mode_dir.join(key);
        Self {
            key: key.to_string(),
            document_path: directory.join(format!("{key}{DOCUMENT_SUFFIX}")),
            preview_path: directory.join(format!("{key}{PREVIEW_SUFFIX}")),
            directory,
        }
    }
}

/// Outcome of a successful save
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveReport {
    pub entry: SaveEntry,
    /// The save directory did not exist before this save
    pub created_directory: bool,
    pub record_count: usize,
}

/// Clears the in-progress flag when a save ends, however it ends
struct InProgressGuard<'a>(&'a AtomicBool);

impl Drop for InProgressGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Writes and reads the saves of one session
pub struct SaveManager {
    root: PathBuf,
    context: SessionContext,
    /// Key remembered after the first successful save
    saved_key: Mutex<Option<String>>,
    in_progress: AtomicBool,
}

impl SaveManager {
    pub fn new(root: impl Into<PathBuf>, context: SessionContext) -> Self {
        Self {
            root: root.into(),
            context,
            saved_key: Mutex::new(None),
            in_progress: AtomicBool::new(false),
        }
    }

    /// Manager for the configured root and mode
    pub fn from_config(config: &SaveConfig, shared_key: Option<String>) -> Self {
        let context = SessionContext {
            mode: config.mode.clone(),
            shared_key,
        };
        Self::new(config.resolved_root(), context)
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    /// `<root>/saves/<mode>`
    pub fn mode_dir(&self) -> PathBuf {
        self.root.join("saves").join(&self.context.mode)
    }

    pub fn is_saved_already(&self) -> bool {
        self.saved_key.lock().is_some()
    }

    pub fn saved_key(&self) -> Option<String> {
        self.saved_key.lock().clone()
    }

    /// Key the next save will use: shared key, then remembered key, then a
    /// fresh timestamp
    pub fn resolve_key(&self) -> String {
        if let Some(key) = &self.context.shared_key {
            return key.clone();
        }
        if let Some(key) = self.saved_key() {
            return key;
        }
        let seconds = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        seconds.to_string()
    }

    /// Capture `scene` and write the document and preview.
    ///
    /// Fails with [`SaveError::InProgress`] if called while another save on
    /// this manager has not finished.
    pub fn save(
        &self,
        scene: &Scene,
        camera: CameraPose,
        sink: &mut dyn CaptureSink,
    ) -> Result<SaveReport, SaveError> {
        if self.in_progress.swap(true, Ordering::AcqRel) {
            tracing::warn!("Save requested while another save is running");
            return Err(SaveError::InProgress);
        }
        let _guard = InProgressGuard(&self.in_progress);

        let document = SceneDocument::capture(scene, camera);
        let json = document.to_json()?;

        // nothing touches the disk until the preview exists
        let pixels = sink.render(&camera)?;
        let preview = sink.encode(&pixels)?;

        let key = self.resolve_key();
        let entry = SaveEntry::new(&self.mode_dir(), &key);

        let created_directory = !entry.directory.exists();
        if created_directory {
            std::fs::create_dir_all(&entry.directory)
                .map_err(|e| SaveError::io(&entry.directory, e))?;
        }

        if let Err(e) = write_pair(&entry, json.as_bytes(), &preview, sink) {
            tracing::warn!("Save to {:?} failed, rolling back: {}", entry.directory, e);
            discard_staged(&entry);
            if created_directory {
                let _ = std::fs::remove_dir_all(&entry.directory);
            }
            return Err(e);
        }

        *self.saved_key.lock() = Some(key);
        tracing::info!("Saved scene to {:?}", entry.directory);

        Ok(SaveReport {
            entry,
            created_directory,
            record_count: document.record_count(),
        })
    }

    /// Saves of this mode that have a document, sorted by key
    pub fn list_saves(&self) -> Result<Vec<SaveEntry>, SaveError> {
        let mode_dir = self.mode_dir();
        if !mode_dir.exists() {
            return Ok(Vec::new());
        }

        let read_dir = std::fs::read_dir(&mode_dir).map_err(|e| SaveError::io(&mode_dir, e))?;
        let mut entries = Vec::new();
        for dir_entry in read_dir {
            let dir_entry = dir_entry.map_err(|e| SaveError::io(&mode_dir, e))?;
            if !dir_entry.path().is_dir() {
                continue;
            }
            let Some(key) = dir_entry.file_name().to_str().map(str::to_string) else {
                continue;
            };
            let entry = SaveEntry::new(&mode_dir, &key);
            if entry.document_path.is_file() {
                entries.push(entry);
            }
        }

        entries.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(entries)
    }

    /// Read the document saved under `key`
    pub fn load(&self, key: &str) -> Result<SceneDocument, SaveError> {
        let entry = SaveEntry::new(&self.mode_dir(), key);
        if !entry.document_path.is_file() {
            return Err(SaveError::NotFound(key.to_string()));
        }
        read_document(&entry.document_path)
    }
}

fn staged(path: &Path) -> PathBuf {
    let mut staged = path.as_os_str().to_owned();
    staged.push(".tmp");
    PathBuf::from(staged)
}

/// Write both files under temporary names, then move them into place, so a
/// failed write never leaves a document without its preview.
fn write_pair(
    entry: &SaveEntry,
    document: &[u8],
    preview: &[u8],
    sink: &mut dyn CaptureSink,
) -> Result<(), SaveError> {
    let document_tmp = staged(&entry.document_path);
    let preview_tmp = staged(&entry.preview_path);

    std::fs::write(&document_tmp, document).map_err(|e| SaveError::io(&document_tmp, e))?;
    sink.write(&preview_tmp, preview)?;

    std::fs::rename(&preview_tmp, &entry.preview_path)
        .map_err(|e| SaveError::io(&entry.preview_path, e))?;
    std::fs::rename(&document_tmp, &entry.document_path)
        .map_err(|e| SaveError::io(&entry.document_path, e))
}

fn discard_staged(entry: &SaveEntry) {
    for path in [&entry.document_path, &entry.preview_path] {
        let _ = std::fs::remove_file(staged(path));
    }
}

/// Read and parse a document file
pub fn read_document(path: &Path) -> Result<SceneDocument, SaveError> {
    let json = std::fs::read_to_string(path).map_err(|e| SaveError::io(path, e))?;
    let document = SceneDocument::from_json(&json)?;
    tracing::info!(
        "Loaded {} records from {:?} (version {})",
        document.record_count(),
        path,
        document.version
    );
    Ok(document)
}
