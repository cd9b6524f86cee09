//! In-page anchor navigation.

/// Class toggled on the navigation menu.
pub const MENU_OPEN_CLASS: &str = "active";

/// Element id an in-page link scrolls to.
///
/// `None` for external links, a bare `#`, and fragments that are not
/// plain ids.
pub fn anchor_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    let valid = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_');
    valid.then_some(id)
}
