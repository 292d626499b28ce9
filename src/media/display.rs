/// Format a duration in seconds as `m:ss`.
///
/// Minutes are not padded and keep growing past an hour (`75:00`), seconds are
/// always two digits.
pub fn format_duration(duration_seconds: u32) -> String {
    let minutes = duration_seconds / 60;
    let seconds = duration_seconds % 60;
    format!("{minutes}:{seconds:02}")
}
