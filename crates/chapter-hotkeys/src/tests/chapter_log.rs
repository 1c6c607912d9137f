use crate::host::{ChapterLog, format_elapsed};

use std::{fs, time::Duration};

use chapter_hotkeys_core::ChapterRecorder;
use tempfile::TempDir;

/// WHAT: Elapsed time is formatted as HH:MM:SS.mmm
/// WHY: Chapter logs are read by people and by import tools
#[test]
fn given_durations_when_formatting_then_zero_padded() {
    assert_eq!(format_elapsed(Duration::ZERO), "00:00:00.000");
    assert_eq!(format_elapsed(Duration::from_millis(61_005)), "00:01:01.005");
    assert_eq!(format_elapsed(Duration::from_secs(3 * 3600 + 7)), "03:00:07.000");
}

/// WHAT: Each chapter marker appends one line with the chapter name
/// WHY: Markers accumulate over a recording
#[test]
#[allow(clippy::unwrap_used)]
fn given_log_when_adding_chapters_then_lines_appended() {
    // Given: A chapter log in a not yet existing subdirectory
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("logs").join("chapters.txt");
    let log = ChapterLog::new(&path);

    // When: Adding two chapters
    log.add_chapter("Intro");
    log.add_chapter("Q&A");

    // Then: Two tab-separated lines in order
    let contents = fs::read_to_string(&path).unwrap();
    let names: Vec<_> = contents
        .lines()
        .map(|l| l.split('\t').nth(1).unwrap())
        .collect();
    assert_eq!(names, vec!["Intro", "Q&A"]);
}
