//! Text rendering for status updates.

/// First line of every status update.
pub const STATUS_BANNER: &str = "🤖 **Claude Code Update**";

pub const PROGRESS_BAR_WIDTH: usize = 10;

const FILLED: char = '█';
const EMPTY: char = '░';

/// Clamp a raw progress value into `0..=100`.
#[must_use]
pub fn clamp_progress(progress: i64) -> u8 {
    // in range after the clamp
    u8::try_from(progress.clamp(0, 100)).unwrap_or(100)
}

/// Render a clamped percentage as a fixed-width bar, one cell per ten percent.
///
/// ```
/// use slack_send::slack::message_formatter::render_progress_bar;
///
/// assert_eq!(render_progress_bar(45), "████░░░░░░");
/// ```
#[must_use]
pub fn render_progress_bar(percent: u8) -> String {
    let filled = (usize::from(percent.min(100)) / 10).min(PROGRESS_BAR_WIDTH);
    let mut bar = String::with_capacity(PROGRESS_BAR_WIDTH * FILLED.len_utf8());
    bar.extend(std::iter::repeat_n(FILLED, filled));
    bar.extend(std::iter::repeat_n(EMPTY, PROGRESS_BAR_WIDTH - filled));
    bar
}

/// Build the status update text: banner, status line and an optional
/// progress paragraph. Out-of-range progress is clamped.
#[must_use]
pub fn format_status_message(status: &str, progress: Option<i64>) -> String {
    let mut message = format!("{STATUS_BANNER}\n{status}");

    if let Some(raw) = progress {
        let percent = clamp_progress(raw);
        message.push_str(&format!(
            "\n\nProgress: {} {percent}%",
            render_progress_bar(percent)
        ));
    }

    message
}
