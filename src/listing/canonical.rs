//! Label canonicalization
//!
//! Produces the "clean" form of a raw entry label used for display, copy and
//! dispatch. A raw label such as `shows\[Group] Title - 02 (1080p).mkv`
//! becomes `Title`.
//!
//! The pipeline runs in a fixed order:
//!
//! 1. container prefix (everything up to the last `/` or `\`)
//! 2. extension (last `.` and everything after it)
//! 3. leading `[...]` / `(...)` groups, repeated until none remain
//! 4. trailing `[...]` / `(...)` groups, repeated until none remain
//! 5. trailing ` - <digits>` episode number
//!
//! The whole pipeline is repeated until the label stops changing, so
//! `clean(clean(x)) == clean(x)` holds even for labels with several dots.
//! The price is that a dot left in a title after the first pass is read as
//! an extension on the next one: `Dr. Stone - 01.mkv` becomes `Dr`, not
//! `Dr. Stone`, and `Show v1.5 - 03.mkv` becomes `Show v1`.

use regex::Regex;
use std::sync::LazyLock;

static EXTENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.[^.]+$").expect("valid extension pattern"));

static LEADING_GROUP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\[[^\]]*\]|\([^)]*\))\s*").expect("valid leading group pattern")
});

static TRAILING_GROUP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*(?:\[[^\]]*\]|\([^)]*\))$").expect("valid trailing group pattern")
});

static EPISODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*-\s*\d+$").expect("valid episode pattern"));

/// Canonicalize a raw label
///
/// Pure and total; the output is never longer than the input.
///
/// # Examples
///
/// ```
/// use rowpick::listing::canonical::clean;
///
/// assert_eq!(clean("[Group] B - 02 (1080p).mkv"), "B");
/// assert_eq!(clean("plain title"), "plain title");
/// ```
#[must_use]
pub fn clean(raw: &str) -> String {
    let mut current = raw.to_string();

    loop {
        let next = clean_once(&current);
        if next == current {
            return next;
        }
        current = next;
    }
}

fn clean_once(raw: &str) -> String {
    let text = strip_container(raw);
    let text = EXTENSION.replace(text, "");
    let text = strip_repeated(&LEADING_GROUP, &text);
    let text = strip_repeated(&TRAILING_GROUP, &text);

    EPISODE.replace(&text, "").into_owned()
}

fn strip_container(text: &str) -> &str {
    text.rfind(['/', '\\'])
        .map_or(text, |separator| &text[separator + 1..])
}

fn strip_repeated(pattern: &Regex, text: &str) -> String {
    let mut current = text.to_string();

    loop {
        let next = pattern.replace(&current, "");
        if next.len() == current.len() {
            return current;
        }
        current = next.into_owned();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_full_pipeline() {
        assert_eq!(clean("[Group] B - 02 (1080p).mkv"), "B");
    }

    #[test]
    fn test_clean_strips_container_prefix() {
        assert_eq!(clean(r"D:\media\shows\Title.mkv"), "Title");
        assert_eq!(clean("/srv/media/Title.mkv"), "Title");
    }

    #[test]
    fn test_clean_strips_adjacent_groups() {
        assert_eq!(clean("[A][B] (C) Title [x265] (10bit).mkv"), "Title");
    }

    #[test]
    fn test_clean_strips_episode_number() {
        assert_eq!(clean("Title - 12.mkv"), "Title");
        assert_eq!(clean("Title-3"), "Title");
    }

    #[test]
    fn test_clean_passes_plain_text_through() {
        assert_eq!(clean("plain title"), "plain title");
        assert_eq!(clean(""), "");
    }

    #[test]
    fn test_clean_keeps_inner_brackets() {
        assert_eq!(clean("Title (Part 2) Finale.mkv"), "Title (Part 2) Finale");
    }

    #[test]
    fn test_clean_strips_dots_left_in_titles() {
        assert_eq!(clean_once("Dr. Stone - 01.mkv"), "Dr. Stone");
        assert_eq!(clean("Dr. Stone - 01.mkv"), "Dr");
        assert_eq!(clean("Show v1.5 - 03.mkv"), "Show v1");
    }

    #[test]
    fn test_clean_is_idempotent() {
        let samples = [
            "[Group] B - 02 (1080p).mkv",
            "a.b.c",
            "Show v1.5 - 03.mkv",
            r"dir\[x] (y) z [w].tar.gz",
            "(only)",
            ".hidden",
            "Title - 2 - 3",
            "no extension",
        ];

        for sample in samples {
            let once = clean(sample);
            assert_eq!(clean(&once), once, "not idempotent for {sample:?}");
            assert!(once.len() <= sample.len());
        }
    }
}
