//! Certificate gallery renderer.
//!
//! Fetches the certificate configuration, validates it and renders exactly
//! one of the gallery views into a single container.
//!
//! ## View selection
//!
//! ```text
//! FetchOutcome::Loaded(body) ── parse ──┬── cards survive ──> Populated
//!                                       ├── nothing valid ──> Empty
//!                                       └── bad JSON ───────> Empty
//! FetchOutcome::NotFound { .. } ──────────────────────────────> Empty
//! FetchOutcome::Transport(..) ────────────────────────────────> Empty
//! surface failure during initialize/refresh ──────────────────> Error
//! ```
//!
//! A missing configuration file is the normal state for a portfolio with no
//! certificates yet, so it renders the empty state rather than an error.
//!
//! ## Overlapping loads
//!
//! Every load takes a generation ticket before it suspends on the fetch.
//! When it resumes, a load whose ticket is no longer the newest discards
//! its result, so the most recently *started* request always owns the
//! container.

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::time::Duration;

use serde_json::Value;

use crate::certificate::{collect, parse_document};
use crate::error::PortfolioResult;
use crate::template;

/// Delay before the first card is revealed.
pub const REVEAL_INITIAL_DELAY: Duration = Duration::from_millis(100);

/// Extra delay added per card index.
pub const REVEAL_STAGGER: Duration = Duration::from_millis(100);

/// Result of reading the configuration resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The resource was read; the body has not been parsed yet
    Loaded(String),
    /// The server answered with a non-success status
    NotFound { status: u16 },
    /// No response at all
    Transport(String),
}

/// What the gallery container currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryView {
    /// Refresh in flight
    Loading,
    /// One card per valid certificate
    Populated { markup: String, cards: usize },
    Empty,
    Error { message: String },
}

impl GalleryView {
    /// Map a fetch result to a view. Never produces `Error` or `Loading`.
    pub fn from_outcome(outcome: FetchOutcome) -> Self {
        match outcome {
            FetchOutcome::Loaded(body) => match parse_document(&body) {
                Ok(records) => Self::from_records(records.as_deref()),
                Err(e) => {
                    tracing::warn!("No certificates config found: {}", e);
                    Self::Empty
                }
            },
            FetchOutcome::NotFound { status } => {
                tracing::warn!("No certificates config found: HTTP error! status: {}", status);
                Self::Empty
            }
            FetchOutcome::Transport(reason) => {
                tracing::warn!("No certificates config found: {}", reason);
                Self::Empty
            }
        }
    }

    /// Render a raw certificate list.
    pub fn from_records(records: Option<&[Value]>) -> Self {
        let records = match records {
            Some(records) if !records.is_empty() => records,
            _ => return Self::Empty,
        };

        let collection = collect(records);
        if collection.is_empty() {
            return Self::Empty;
        }

        let markup: String = collection
            .certificates
            .iter()
            .map(template::certificate_card)
            .collect();

        Self::Populated {
            markup,
            cards: collection.certificates.len(),
        }
    }

    pub fn markup(&self) -> String {
        match self {
            Self::Loading => template::loading_state(),
            Self::Populated { markup, .. } => markup.clone(),
            Self::Empty => template::empty_state(),
            Self::Error { message } => template::error_state(message),
        }
    }

    /// Number of cards shown (zero for every non-grid view).
    pub fn card_count(&self) -> usize {
        match self {
            Self::Populated { cards, .. } => *cards,
            _ => 0,
        }
    }
}

/// Reveal delay for each of `cards` freshly inserted cards.
pub fn reveal_schedule(cards: usize) -> Vec<Duration> {
    (0..cards)
        .map(|index| REVEAL_INITIAL_DELAY + REVEAL_STAGGER * index as u32)
        .collect()
}

/// Reads the certificate configuration.
#[allow(async_fn_in_trait)]
pub trait ConfigSource {
    async fn fetch(&self, path: &str) -> FetchOutcome;
}

/// The container the gallery renders into.
pub trait GallerySurface {
    /// Replace the container's contents in one write.
    fn replace(&self, markup: &str) -> PortfolioResult<()>;

    /// Reveal the freshly inserted cards, card `i` after `delays[i]`.
    fn schedule_reveal(&self, delays: &[Duration]);
}

/// Fetches and renders the certificate gallery.
pub struct GalleryRenderer<S, C> {
    source: S,
    surface: Option<C>,
    config_path: String,
    generation: Cell<u64>,
    current: RefCell<Option<GalleryView>>,
}

impl<S: ConfigSource, C: GallerySurface> GalleryRenderer<S, C> {
    /// `surface` is `None` when the container is not on the page; the
    /// renderer then stays inactive and every operation is a no-op.
    pub fn new(source: S, surface: Option<C>, config_path: impl Into<String>) -> Self {
        Self {
            source,
            surface,
            config_path: config_path.into(),
            generation: Cell::new(0),
            current: RefCell::new(None),
        }
    }

    pub fn is_active(&self) -> bool {
        self.surface.is_some()
    }

    pub fn surface(&self) -> Option<&C> {
        self.surface.as_ref()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn config_path(&self) -> &str {
        &self.config_path
    }

    /// The view last written to the container.
    pub fn current_view(&self) -> Option<GalleryView> {
        self.current.borrow().clone()
    }

    /// Initial load. Never fails past this boundary.
    pub async fn initialize(&self) -> Option<GalleryView> {
        if !self.is_active() {
            tracing::warn!(
                "Certificates container not found - certificates section may not be added to HTML yet"
            );
            return None;
        }

        self.guarded(self.load()).await
    }

    /// Show the loading view, then load again. No-op while inactive.
    pub async fn refresh(&self) -> Option<GalleryView> {
        if !self.is_active() {
            tracing::debug!("Refresh skipped: certificate gallery inactive");
            return None;
        }

        let reload = async {
            self.show(&GalleryView::Loading)?;
            self.load().await
        };
        self.guarded(reload).await
    }

    /// Fetch the configuration and render it.
    ///
    /// `Ok(None)` when a newer load started while this one was in flight;
    /// the stale result is discarded.
    pub async fn load(&self) -> PortfolioResult<Option<GalleryView>> {
        let ticket = self.generation.get() + 1;
        self.generation.set(ticket);

        let outcome = self.source.fetch(&self.config_path).await;

        if ticket != self.generation.get() {
            tracing::debug!(ticket, latest = self.generation.get(), "Discarding superseded certificate load");
            return Ok(None);
        }

        let view = GalleryView::from_outcome(outcome);
        self.show(&view)?;
        Ok(Some(view))
    }

    /// Render an already-loaded certificate list.
    pub fn render(&self, certificates: Option<&[Value]>) -> PortfolioResult<GalleryView> {
        let view = GalleryView::from_records(certificates);
        self.show(&view)?;
        Ok(view)
    }

    fn show(&self, view: &GalleryView) -> PortfolioResult<()> {
        let Some(surface) = self.surface.as_ref() else {
            return Ok(());
        };

        surface.replace(&view.markup())?;
        if let GalleryView::Populated { cards, .. } = view {
            surface.schedule_reveal(&reveal_schedule(*cards));
        }
        *self.current.borrow_mut() = Some(view.clone());
        Ok(())
    }

    async fn guarded(
        &self,
        work: impl Future<Output = PortfolioResult<Option<GalleryView>>>,
    ) -> Option<GalleryView> {
        match work.await {
            Ok(view) => view,
            Err(e) => {
                tracing::error!("Certificate loading error: {}", e);
                let view = GalleryView::Error {
                    message: template::LOAD_FAILURE_MESSAGE.to_string(),
                };
                if let Err(e) = self.show(&view) {
                    tracing::error!("Could not show certificate error state: {}", e);
                    return None;
                }
                Some(view)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_schedule_is_staggered() {
        assert_eq!(
            reveal_schedule(3),
            vec![
                Duration::from_millis(100),
                Duration::from_millis(200),
                Duration::from_millis(300)
            ]
        );
        assert!(reveal_schedule(0).is_empty());
    }

    #[test]
    fn test_outcomes_without_data_render_empty() {
        assert_eq!(
            GalleryView::from_outcome(FetchOutcome::NotFound { status: 404 }),
            GalleryView::Empty
        );
        assert_eq!(
            GalleryView::from_outcome(FetchOutcome::Transport("offline".into())),
            GalleryView::Empty
        );
        assert_eq!(
            GalleryView::from_outcome(FetchOutcome::Loaded("<html>".into())),
            GalleryView::Empty
        );
        assert_eq!(
            GalleryView::from_outcome(FetchOutcome::Loaded(r#"{"certificates":[]}"#.into())),
            GalleryView::Empty
        );
    }

    #[test]
    fn test_all_records_invalid_renders_empty() {
        let view = GalleryView::from_outcome(FetchOutcome::Loaded(
            r#"{"certificates":[{"issuer":"Y"},{"name":"Z"}]}"#.into(),
        ));
        assert_eq!(view, GalleryView::Empty);
    }

    #[test]
    fn test_populated_view_counts_cards() {
        let view = GalleryView::from_outcome(FetchOutcome::Loaded(
            r#"{"certificates":[{"name":"A","issuer":"X"},{"name":"B","issuer":"Y"}]}"#.into(),
        ));
        assert_eq!(view.card_count(), 2);
        assert_eq!(view.markup().matches(template::CARD_CLASS).count(), 2);
    }

    #[test]
    fn test_error_view_markup() {
        let view = GalleryView::Error {
            message: template::LOAD_FAILURE_MESSAGE.to_string(),
        };
        assert!(view.markup().contains("Failed to load certificates"));
        assert_eq!(view.card_count(), 0);
    }
}
