// loader.rs - Reads template collections off the UI thread

use life_core::TemplateCollection;
use life_core::patterns::builtin_collections;
use std::path::{Path, PathBuf};
use tokio::runtime::Runtime;
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;

enum LoadState {
    Pending(oneshot::Receiver<Vec<TemplateCollection>>),
    Ready(Vec<TemplateCollection>),
}

/// Template collections loaded in the background, polled once per frame.
pub struct TemplateLoader {
    state: LoadState,
    // Keeps the loading task alive until it reports back.
    _runtime: Option<Runtime>,
}

impl TemplateLoader {
    /// Starts reading every collection file in `dir` on a tokio runtime.
    pub fn spawn(dir: PathBuf) -> std::io::Result<Self> {
        let runtime = Runtime::new()?;
        let (tx, rx) = oneshot::channel();
        runtime.spawn(async move {
            let collections = load_dir(&dir).await;
            let _ = tx.send(collections);
        });
        Ok(Self {
            state: LoadState::Pending(rx),
            _runtime: Some(runtime),
        })
    }

    /// Loader that already holds `collections`.
    pub fn ready(collections: Vec<TemplateCollection>) -> Self {
        Self {
            state: LoadState::Ready(collections),
            _runtime: None,
        }
    }

    /// Collections, once loading has finished.
    pub fn poll(&mut self) -> Option<&[TemplateCollection]> {
        if let LoadState::Pending(rx) = &mut self.state {
            match rx.try_recv() {
                Ok(collections) => self.state = LoadState::Ready(collections),
                Err(TryRecvError::Empty) => return None,
                Err(TryRecvError::Closed) => {
                    log::warn!("template loading was interrupted, using built-in templates");
                    self.state = LoadState::Ready(builtin_collections());
                }
            }
        }
        match &self.state {
            LoadState::Ready(collections) => Some(collections),
            LoadState::Pending(_) => None,
        }
    }
}

/// Reads every template collection file in `dir`, in file name order.
/// Unreadable or malformed files are skipped; without any usable file the
/// built-in library is returned.
pub async fn load_dir(dir: &Path) -> Vec<TemplateCollection> {
    let mut entries = match tokio::fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(err) => {
            log::info!("no templates in {} ({err}), using built-in templates", dir.display());
            return builtin_collections();
        }
    };

    let mut paths = Vec::new();
    loop {
        match entries.next_entry().await {
            Ok(Some(entry)) => paths.push(entry.path()),
            Ok(None) => break,
            Err(err) => {
                log::warn!("failed to list {}: {err}", dir.display());
                break;
            }
        }
    }
    paths.sort();

    let mut collections = Vec::new();
    for path in paths {
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(err) => {
                log::warn!("skipping {}: {err}", path.display());
                continue;
            }
        };
        match TemplateCollection::from_slice(&bytes) {
            Ok(collection) => {
                log::debug!(
                    "loaded {} templates from {} (page {})",
                    collection.templates().len(),
                    path.display(),
                    collection.page()
                );
                collections.push(collection);
            }
            Err(err) => log::warn!("skipping malformed template file {}: {err}", path.display()),
        }
    }

    if collections.is_empty() {
        log::info!("{} has no usable templates, using built-in templates", dir.display());
        return builtin_collections();
    }
    log::info!("loaded {} template collections from {}", collections.len(), dir.display());
    collections
}
