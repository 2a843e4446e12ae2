use std::time::Duration;

/// How often the busy indicator advances
pub const TICK: Duration = Duration::from_millis(350);

const MAX_DOTS: usize = 3;

/// `base` followed by 0 to 3 dots depending on the frame, padded to a fixed width
pub fn label(base: &str, frame: usize) -> String {
    let dots = frame % (MAX_DOTS + 1);
    format!("{base}{}{}", ".".repeat(dots), " ".repeat(MAX_DOTS - dots))
}

/// 1 to 3 dots depending on the frame; never empty
pub fn badge(frame: usize) -> String {
    ".".repeat(frame % MAX_DOTS + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dots_cycle() {
        assert_eq!(label("Searching", 0), "Searching   ");
        assert_eq!(label("Searching", 2), "Searching.. ");
        assert_eq!(label("Searching", 3), "Searching...");
        assert_eq!(label("Searching", 4), label("Searching", 0));
    }

    #[test]
    fn badge_is_never_blank() {
        assert_eq!(badge(0), ".");
        assert_eq!(badge(2), "...");
        assert_eq!(badge(3), ".");
        assert!((0..12).all(|frame| !badge(frame).is_empty()));
    }
}
