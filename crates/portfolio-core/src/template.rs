//! Markup for the certificate gallery.
//!
//! Every interpolated value goes through [`escape_html`], URLs included.

use std::fmt::Write as _;

use crate::certificate::Certificate;
use crate::escape::escape_html;

/// Class carried by each rendered card; the reveal animation selects on it.
pub const CARD_CLASS: &str = "certificate-card";

/// Link target used when a certificate has no PDF.
pub const PLACEHOLDER_LINK: &str = "#";

/// Message shown in the error state after an unexpected setup failure.
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load certificates";

/// Inline style cards are inserted with, before the staggered reveal.
pub const CARD_HIDDEN_STYLE: &str =
    "opacity: 0; transform: translateY(20px); transition: opacity 0.5s ease, transform 0.5s ease;";

/// Generic certificate icon, shown in place of a missing or broken image.
pub fn fallback_icon() -> &'static str {
    r#"<div class="certificate-icon" style="display:flex;align-items:center;justify-content:center;height:100%;color:white;font-size:3rem;"><i class="fas fa-certificate"></i></div>"#
}

/// Build the card fragment for one certificate.
pub fn certificate_card(cert: &Certificate) -> String {
    let name = escape_html(&cert.name);
    let issuer = escape_html(&cert.issuer);
    let pdf = escape_html(cert.pdf.as_deref().unwrap_or(PLACEHOLDER_LINK));
    let date = escape_html(cert.date.as_deref().unwrap_or(""));

    let media = match cert.image.as_deref() {
        Some(image) => format!(
            r#"<img src="{}" alt="{}" loading="lazy">"#,
            escape_html(image),
            name
        ),
        None => fallback_icon().to_string(),
    };

    let mut card = String::with_capacity(1024);
    let _ = write!(
        card,
        r#"<div class="{CARD_CLASS}" style="{CARD_HIDDEN_STYLE}">
    <div class="certificate-image">
        {media}
        <div class="certificate-overlay">
            <div class="certificate-links">
                <a href="{pdf}" target="_blank" rel="noopener" class="cert-btn"><i class="fas fa-eye"></i> View</a>
                <a href="{pdf}" download class="cert-btn"><i class="fas fa-download"></i> Download</a>
            </div>
        </div>
    </div>
    <div class="certificate-content">
        <h3>{name}</h3>
        <p class="certificate-issuer">{issuer}</p>
        <div class="cert-date">{date}</div>"#
    );

    if let Some(kind) = cert.kind.as_deref() {
        let _ = write!(card, r#"
        <div class="cert-type">{}</div>"#, escape_html(kind));
    }

    if !cert.skills.is_empty() {
        card.push_str(r#"
        <div class="cert-skills">"#);
        for skill in &cert.skills {
            let _ = write!(card, r#"<span class="cert-skill">{}</span>"#, escape_html(skill));
        }
        card.push_str("</div>");
    }

    card.push_str("\n    </div>\n</div>\n");
    card
}

/// Shown when there is nothing to display.
pub fn empty_state() -> String {
    r#"<div class="no-certificates">
    <i class="fas fa-certificate" style="font-size: 3rem; color: #d1d5db; margin-bottom: 1rem;"></i>
    <h3 style="color: #6b7280; margin-bottom: 0.5rem;">No Certificates Found</h3>
    <p style="color: #9ca3af;">Add certificates to the certificates-config.json file to display them here.</p>
</div>
"#
    .to_string()
}

/// Shown when setup fails unexpectedly.
pub fn error_state(message: &str) -> String {
    format!(
        r#"<div class="error-message">
    <i class="fas fa-exclamation-triangle" style="font-size: 2rem; margin-bottom: 1rem;"></i>
    <h3>Error Loading Certificates</h3>
    <p>{}</p>
</div>
"#,
        escape_html(message)
    )
}

/// Transient view while a refresh is in flight.
pub fn loading_state() -> String {
    r#"<div class="loading-message">
    <i class="fas fa-spinner fa-spin"></i>
    <p>Refreshing certificates...</p>
</div>
"#
    .to_string()
}
