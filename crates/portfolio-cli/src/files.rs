//! File-backed gallery plumbing for the CLI.

use std::cell::RefCell;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::time::Duration;

use portfolio_core::{ConfigSource, FetchOutcome, GallerySurface, PortfolioResult};

/// Reads the configuration from disk, mapping errors the way a static
/// web server would: a missing file is a 404, anything else a transport
/// failure.
pub struct FileConfigSource {
    root: PathBuf,
}

impl FileConfigSource {
    /// Paths passed to `fetch` are resolved against `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ConfigSource for FileConfigSource {
    async fn fetch(&self, path: &str) -> FetchOutcome {
        let full = self.root.join(path);
        match tokio::fs::read_to_string(&full).await {
            Ok(body) => FetchOutcome::Loaded(body),
            Err(e) if e.kind() == ErrorKind::NotFound => FetchOutcome::NotFound { status: 404 },
            Err(e) if e.kind() == ErrorKind::PermissionDenied => FetchOutcome::NotFound { status: 403 },
            Err(e) => FetchOutcome::Transport(format!("{}: {}", full.display(), e)),
        }
    }
}

/// Keeps the last markup written, standing in for the gallery container.
#[derive(Default)]
pub struct BufferSurface {
    markup: RefCell<String>,
    revealed: RefCell<usize>,
}

impl BufferSurface {
    pub fn markup(&self) -> String {
        self.markup.borrow().clone()
    }

    pub fn revealed(&self) -> usize {
        *self.revealed.borrow()
    }
}

impl GallerySurface for BufferSurface {
    fn replace(&self, markup: &str) -> PortfolioResult<()> {
        *self.markup.borrow_mut() = markup.to_string();
        Ok(())
    }

    fn schedule_reveal(&self, delays: &[Duration]) {
        // No animation in a static preview; remember how many cards would reveal.
        *self.revealed.borrow_mut() = delays.len();
    }
}
