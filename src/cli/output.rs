/// Result reporting: one line on stdout for success, one on stderr for failure.
use crate::errors::SlackError;

#[must_use]
pub fn success_line(message: &str) -> String {
    format!("✅ {message}")
}

#[must_use]
pub fn error_line(err: &SlackError) -> String {
    format!("❌ Error: {err}")
}

pub fn write_success(message: &str) {
    println!("{}", success_line(message));
}

pub fn write_error(err: &SlackError) {
    eprintln!("{}", error_line(err));
}
