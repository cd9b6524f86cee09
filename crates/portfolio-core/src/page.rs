//! Page bootstrap and status.
//!
//! Initializers run in a fixed order and each one is isolated: an error in
//! one is recorded and logged, and the rest still run.

use serde::Serialize;

use crate::error::PortfolioResult;

/// What became of one initializer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum InitStatus {
    Active,
    /// Expected elements were missing
    Skipped { reason: String },
    Failed { error: String },
}

/// Per-initializer results, in run order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BootReport {
    pub steps: Vec<(&'static str, InitStatus)>,
}

impl BootReport {
    pub fn status_of(&self, name: &str) -> Option<&InitStatus> {
        self.steps.iter().find(|(n, _)| *n == name).map(|(_, s)| s)
    }

    pub fn active(&self) -> usize {
        self.count(|s| matches!(s, InitStatus::Active))
    }

    pub fn skipped(&self) -> usize {
        self.count(|s| matches!(s, InitStatus::Skipped { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, InitStatus::Failed { .. }))
    }

    fn count(&self, pred: impl Fn(&InitStatus) -> bool) -> usize {
        self.steps.iter().filter(|(_, s)| pred(s)).count()
    }
}

type Step<'a> = (&'static str, Box<dyn FnOnce() -> PortfolioResult<()> + 'a>);

/// Ordered list of page initializers.
#[derive(Default)]
pub struct Bootstrap<'a> {
    steps: Vec<Step<'a>>,
}

impl<'a> Bootstrap<'a> {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub fn step(mut self, name: &'static str, init: impl FnOnce() -> PortfolioResult<()> + 'a) -> Self {
        self.steps.push((name, Box::new(init)));
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Run every step in order.
    pub fn run(self) -> BootReport {
        let mut report = BootReport::default();

        for (name, init) in self.steps {
            let status = match init() {
                Ok(()) => {
                    tracing::debug!(initializer = name, "Initialized");
                    InitStatus::Active
                }
                Err(e) if e.is_missing_element() => {
                    tracing::warn!(initializer = name, "{}", e);
                    InitStatus::Skipped { reason: e.to_string() }
                }
                Err(e) => {
                    tracing::error!(initializer = name, "Error initializing portfolio: {}", e);
                    InitStatus::Failed { error: e.to_string() }
                }
            };
            report.steps.push((name, status));
        }

        tracing::info!(
            active = report.active(),
            skipped = report.skipped(),
            failed = report.failed(),
            "Portfolio initialized successfully"
        );
        report
    }
}

/// Diagnostic snapshot exposed to page scripts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageStatus {
    pub certificate_manager: bool,
    pub observer: bool,
    pub contact_form: bool,
    pub skills_section: bool,
}

/// Selector whose presence `contactForm` reports.
pub const CONTACT_FORM_SELECTOR: &str = ".contact-form";

/// Selector whose presence `skillsSection` reports.
pub const SKILLS_SECTION_SELECTOR: &str = ".skills";

impl PageStatus {
    /// Component flags come from what was started; section flags from
    /// what `exists` finds on the page.
    pub fn snapshot(certificate_manager: bool, observer: bool, exists: impl Fn(&str) -> bool) -> Self {
        Self {
            certificate_manager,
            observer,
            contact_form: exists(CONTACT_FORM_SELECTOR),
            skills_section: exists(SKILLS_SECTION_SELECTOR),
        }
    }
}
