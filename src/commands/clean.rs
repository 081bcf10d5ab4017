//! Clean command - print clean labels without fetching anything

use crate::listing::clean;
use crate::ui::OutputWriter;

/// Execute the clean command
pub fn execute(labels: &[String], output: &dyn OutputWriter) {
    for label in labels {
        output.write(&clean(label));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{MessageLevel, MessageLog};

    #[test]
    fn test_clean_prints_one_line_per_label() {
        let log = MessageLog::new();

        execute(
            &["[Group] B - 02 (1080p).mkv".to_string(), "dir/A.mkv".to_string()],
            &log,
        );

        assert_eq!(log.at_level(MessageLevel::Normal), vec!["B", "A"]);
    }
}
