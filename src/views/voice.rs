//! Voice view indicator

use crate::agent::AgentIndicator;

/// Marker for the voice indicator, the page's animated circle
pub fn indicator_glyph(indicator: &AgentIndicator) -> &'static str {
    if indicator.active {
        "[*]"
    } else if indicator.busy {
        "[~]"
    } else {
        "[ ]"
    }
}

/// One status line for the voice view
pub fn status_line(indicator: &AgentIndicator) -> String {
    format!("{} {}", indicator_glyph(indicator), indicator.message)
}
