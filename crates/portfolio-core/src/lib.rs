//! Portfolio Site Core Library
//!
//! Host-agnostic behaviour for a personal portfolio website.
//!
//! ## Overview
//!
//! The browser crate wires DOM elements to the pieces in here; the CLI runs
//! the same pipeline against local files. Nothing in this crate touches the
//! DOM directly. Instead the browser-facing seams are traits:
//!
//! - [`ConfigSource`] fetches the certificate configuration
//! - [`GallerySurface`] owns the gallery container
//! - [`RelayClient`] posts contact-form submissions
//! - [`ContactSurface`] owns the contact form controls
//!
//! ## Quick Start
//!
//! ```ignore
//! use portfolio_core::{GalleryRenderer, PortfolioConfig};
//!
//! let config = PortfolioConfig::default();
//! let gallery = GalleryRenderer::new(source, Some(surface), &config.certificates_path);
//!
//! // Fetch, validate and render the certificates
//! gallery.initialize().await;
//!
//! // Later, from a diagnostic entry point
//! gallery.refresh().await;
//! ```

pub mod certificate;
pub mod config;
pub mod contact;
pub mod effects;
pub mod error;
pub mod escape;
pub mod gallery;
pub mod logging;
pub mod page;
pub mod template;

// Re-exports
pub use certificate::{Certificate, Collection, DroppedRecord, RecordRejection};
pub use config::PortfolioConfig;
pub use contact::{
    ContactSubmitter, ContactSurface, FormFields, FormMessage, RelayClient, RelayResponse,
    SubmissionOutcome, SubmissionState,
};
pub use error::{PortfolioError, PortfolioResult};
pub use escape::escape_html;
pub use gallery::{ConfigSource, FetchOutcome, GalleryRenderer, GallerySurface, GalleryView};
pub use page::{BootReport, Bootstrap, PageStatus};
