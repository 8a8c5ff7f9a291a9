/// Formats a number of seconds as `H:MM:SS`.
///
/// Hours are not padded and may exceed 24; minutes and seconds are always two
/// digits.
///
/// # Examples
///
/// ```
/// use gronkh_tv::seconds_to_time;
///
/// assert_eq!(seconds_to_time(3661), "1:01:01");
/// assert_eq!(seconds_to_time(59), "0:00:59");
/// ```
pub fn seconds_to_time(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds / 60) % 60;
    let secs = seconds % 60;
    format!("{}:{:02}:{:02}", hours, minutes, secs)
}
