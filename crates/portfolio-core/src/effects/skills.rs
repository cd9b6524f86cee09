//! Skill bar widths.

/// Class of a progress bar inside the skills section.
pub const SKILL_BAR_CLASS: &str = "skill-progress";

/// Attribute carrying the width a bar grows to.
pub const WIDTH_ATTRIBUTE: &str = "data-width";

const UNITS: [&str; 6] = ["%", "px", "rem", "em", "vw", "ch"];

/// Validate a `data-width` value as a CSS length or percentage.
pub fn target_width(raw: Option<&str>) -> Option<&str> {
    let value = raw?.trim();
    let unit = UNITS.iter().find(|unit| value.ends_with(*unit))?;
    let number = &value[..value.len() - unit.len()];

    match number.parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 0.0 && (*unit != "%" || n <= 100.0) => Some(value),
        _ => {
            tracing::warn!(width = value, "Ignoring invalid skill bar width");
            None
        }
    }
}
