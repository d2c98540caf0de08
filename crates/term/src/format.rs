//! Text formatting for the status bar.

/// Elapsed seconds as zero-padded `MM:SS`. Minutes keep growing past 99.
pub fn format_elapsed(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_minutes_and_seconds() {
        assert_eq!(format_elapsed(0), "00:00");
        assert_eq!(format_elapsed(9), "00:09");
        assert_eq!(format_elapsed(61), "01:01");
        assert_eq!(format_elapsed(3599), "59:59");
        assert_eq!(format_elapsed(6000), "100:00");
    }
}
