// SPDX-License-Identifier: MIT

//! Business logic for cleaning word input and exporting formatted lists.
//!
//! Responsibilities:
//! - Strip numbering prefixes and blank/duplicate lines from raw input.
//! - Render a word sequence as a literal array declaration.
//! - Generate timestamped export filenames and write export files.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;
use time::OffsetDateTime;
use time::macros::format_description;

/// Maximum number of words rendered per line in the export format.
const WORDS_PER_LINE: usize = 10;

/// Leading numbering prefix, e.g. `1. `, `23.` or `3.   `.
static NUMBER_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s*").expect("number prefix pattern is valid"));

/// Normalize a raw block of newline-separated input into cleaned words.
///
/// Each line is trimmed and stripped of a leading `<digits>.` prefix; lines
/// that end up empty are dropped, as are repeats of a word already produced
/// earlier in the same call. Order of first occurrence is preserved.
pub fn clean_input(raw: &str) -> Vec<String> {
    let mut cleaned = Vec::new();
    for line in raw.lines() {
        let word = NUMBER_PREFIX.replace(line.trim(), "").into_owned();
        if !word.is_empty() && !cleaned.contains(&word) {
            cleaned.push(word);
        }
    }
    cleaned
}

/// Render `words` as a pretty-printed literal array declaration.
///
/// Words are grouped ten per line, double-quoted and comma-joined, with the
/// trailing comma omitted on the last line. An empty input renders as an
/// empty literal (`words = [\n]`).
pub fn format_list(words: &[String]) -> String {
    let mut out = String::from("words = [\n");
    for chunk in words.chunks(WORDS_PER_LINE) {
        let quoted: Vec<String> = chunk.iter().map(|word| format!("\"{word}\"")).collect();
        out.push_str("    ");
        out.push_str(&quoted.join(", "));
        out.push_str(",\n");
    }
    if !words.is_empty() {
        // Drop the trailing comma on the last item line, keep its newline.
        out.truncate(out.len() - 2);
        out.push('\n');
    }
    out.push(']');
    out
}

/// Build the export filename for the given timestamp, second resolution.
pub fn export_filename(stamp: OffsetDateTime) -> Result<String> {
    let format =
        format_description!("word_list_[year][month][day]_[hour][minute][second].txt");
    stamp
        .format(&format)
        .map_err(|err| anyhow::anyhow!("Failed to format export timestamp: {}", err))
}

/// Write the formatted export to `path`, overwriting any existing file.
pub fn write_export(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("Failed to write export file {:?}", path))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;
    use time::OffsetDateTime;

    use super::clean_input;
    use super::export_filename;
    use super::format_list;
    use super::write_export;

    fn owned(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn clean_input_strips_numbering_prefixes() {
        assert_eq!(clean_input("12. Banana"), ["Banana"]);
        assert_eq!(clean_input("Banana"), ["Banana"]);
        assert_eq!(clean_input("3.NoSpace"), ["NoSpace"]);
    }

    #[test]
    fn clean_input_drops_blank_and_duplicate_lines() {
        let cleaned = clean_input("Apple\n\n   \nApple\nBanana");

        assert_eq!(cleaned, ["Apple", "Banana"]);
    }

    // The prefix is only stripped at the start of a line.
    #[test]
    fn clean_input_keeps_interior_numbering() {
        assert_eq!(clean_input("item 2. two"), ["item 2. two"]);
    }

    #[test]
    fn clean_input_is_idempotent_on_its_own_output() {
        let once = clean_input("1. Cherry\n2. apple\n1. Cherry\n\n10.   Fig");
        let twice = clean_input(&once.join("\n"));

        assert_eq!(once, twice);
    }

    #[test]
    fn format_list_groups_ten_words_per_line() {
        let words: Vec<String> = (0..23).map(|i| format!("w{i:02}")).collect();
        let formatted = format_list(&words);
        let lines: Vec<&str> = formatted.lines().collect();

        assert_eq!(lines.len(), 5, "header + 3 chunk lines + footer");
        assert_eq!(lines[0], "words = [");
        assert_eq!(lines[4], "]");
        assert_eq!(lines[1].matches('"').count(), 20);
        assert_eq!(lines[2].matches('"').count(), 20);
        assert_eq!(lines[3].matches('"').count(), 6);
        assert!(lines[1].ends_with(','));
        assert!(lines[2].ends_with(','));
        assert!(
            !lines[3].ends_with(','),
            "last item line must not carry a trailing comma"
        );
    }

    #[test]
    fn format_list_renders_empty_literal() {
        assert_eq!(format_list(&[]), "words = [\n]");
    }

    #[test]
    fn format_list_renders_exact_small_list() {
        let formatted = format_list(&owned(&["Cherry", "apple"]));

        assert_eq!(formatted, "words = [\n    \"Cherry\", \"apple\"\n]");
    }

    #[test]
    fn export_filename_uses_second_resolution_pattern() {
        let stamp = OffsetDateTime::from_unix_timestamp(0).unwrap();

        assert_eq!(
            export_filename(stamp).unwrap(),
            "word_list_19700101_000000.txt"
        );
    }

    #[test]
    fn write_export_creates_file_with_exact_contents() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("word_list_19700101_000000.txt");
        let contents = format_list(&owned(&["Cherry", "apple"]));

        write_export(&path, &contents).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), contents);
    }

    #[test]
    fn write_export_reports_underlying_cause_on_failure() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("missing").join("out.txt");

        let err = write_export(&path, "words = [\n]").unwrap_err();

        assert!(format!("{err:?}").contains("Failed to write export file"));
    }
}
