//! Boxed error lines for build-time config validation
//!
//! Shared by build.rs and the binary's tests.

/// Width of the text column inside the box
pub const BOX_WIDTH: usize = 62;

/// One bullet line of the error box, truncated to fit
///
/// Counts characters, not bytes, so TOML errors quoting non-ASCII input
/// are cut on a character boundary.
pub fn box_line(line: &str) -> String {
    let truncated = if line.chars().count() > BOX_WIDTH {
        let head: String = line.chars().take(BOX_WIDTH - 3).collect();
        format!("{}...", head)
    } else {
        line.to_string()
    };
    format!("║  • {:<width$} ║", truncated, width = BOX_WIDTH)
}
