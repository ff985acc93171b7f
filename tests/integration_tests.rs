use omlogger::{
    Console, DisplaySettings, Level, LevelFilter, Logger, LoggerConfig, MemoryConsole, Profile,
    Tag,
};
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tempfile::TempDir;

/// Logger with an in-memory console, bare prefixes and no self-log noise
fn setup(levels: LevelFilter) -> (Logger, MemoryConsole) {
    let console = MemoryConsole::new();
    let logger = Logger::with_console(Box::new(console.clone()));
    logger.set_level_filter(levels);
    logger.set_display_settings(DisplaySettings::NONE);
    (logger, console)
}

fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("Failed to read log file")
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_line_written_iff_level_in_filter() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    for raw in 0..=LevelFilter::ALL.bits() {
        let filter = LevelFilter::from_raw(raw);
        let path = temp_dir.path().join(format!("filter_{raw}.log"));
        let (logger, console) = setup(LevelFilter::ALL);
        logger.open_file(&path).expect("Failed to open log file");
        console.clear();
        logger.set_level_filter(filter);

        for level in Level::ALL {
            logger.log(level, level.name());
        }
        logger.set_level_filter(LevelFilter::NONE);
        logger.close_file();

        let expected: Vec<String> = Level::ALL
            .into_iter()
            .filter(|level| filter.allows(*level))
            .map(|level| format!("{} {}", level.padded_label(), level.name()))
            .collect();

        // the first file line is the "Opened" note written under the ALL filter
        let file_lines = read_lines(&path);
        assert_eq!(&file_lines[1..], expected.as_slice(), "filter {filter:?}");
        assert_eq!(console.lines(), expected, "filter {filter:?}");
    }
}

#[test]
fn test_info_error_scenario_file_is_plain() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("scenario.log");
    let (logger, _console) = setup(LevelFilter::INFO | LevelFilter::ERROR);
    logger.set_level_filter(LevelFilter::ERROR);
    logger.open_file(&path).expect("Failed to open log file");
    logger.set_level_filter(LevelFilter::INFO | LevelFilter::ERROR);

    logger.log(Level::Debug, "x");
    logger.log(Level::Info, "y");
    drop(logger);

    let content = fs::read_to_string(&path).expect("Failed to read log file");
    assert_eq!(content, "[INFO]     y\n");
    assert!(!content.contains('\u{1b}'), "file output must not carry escape codes");
}

#[test]
fn test_display_fields_render_exactly_what_is_enabled() {
    let cases = [
        (DisplaySettings::NONE, 0),
        (DisplaySettings::SHOW_DATE, 1),
        (DisplaySettings::SHOW_THREAD, 1),
        (DisplaySettings::SHOW_FILE_INFO, 1),
        (DisplaySettings::SHOW_DATE | DisplaySettings::SHOW_FILE_INFO, 2),
        (DisplaySettings::SHOW_ALL, 3),
    ];

    for (settings, field_count) in cases {
        let (logger, console) = setup(LevelFilter::ALL);
        logger.set_display_settings(settings);

        let handle = thread::Builder::new()
            .name("display-check".to_string())
            .spawn(move || {
                logger.log_tagged(Level::Info, Tag::Network, "payload");
            })
            .expect("Failed to spawn thread");
        handle.join().expect("Thread should complete successfully");

        let lines = console.lines();
        assert_eq!(lines.len(), 1);
        let line = &lines[0];

        let label_at = line.find("[INFO]").expect("level label present");
        let fields = &line[..label_at];
        assert_eq!(fields.matches("] ").count(), field_count, "{settings:?}: {line}");

        assert_eq!(
            fields.contains("[display-check]"),
            settings.contains(DisplaySettings::SHOW_THREAD),
            "{settings:?}: {line}"
        );
        assert_eq!(
            fields.contains("integration_tests.rs@"),
            settings.contains(DisplaySettings::SHOW_FILE_INFO),
            "{settings:?}: {line}"
        );
        assert!(line.ends_with("[INFO]     [Network] payload"), "{line}");
    }
}

#[test]
fn test_second_open_closes_first_without_losing_lines() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let first = temp_dir.path().join("first.log");
    let second = temp_dir.path().join("second.log");
    let (logger, _console) = setup(LevelFilter::ALL);

    logger.open_file(&first).expect("Failed to open first log file");
    logger.warning("before switch");
    logger.open_file(&second).expect("Failed to open second log file");
    logger.warning("after switch");
    logger.close_file();

    let first_lines = read_lines(&first);
    assert!(first_lines[0].starts_with("[INFO]     Opened log file"));
    assert_eq!(first_lines[1], "[WARNING]  before switch");
    assert!(first_lines[2].starts_with("[INFO]     Closed log file"));
    assert_eq!(first_lines.len(), 3);

    let second_lines = read_lines(&second);
    assert!(second_lines[0].starts_with("[INFO]     Opened log file"));
    assert_eq!(second_lines[1], "[WARNING]  after switch");
    assert!(!second_lines.iter().any(|line| line.contains("before switch")));
}

#[test]
fn test_reopening_appends() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("append.log");
    let (logger, _console) = setup(LevelFilter::ERROR);

    logger.open_file(&path).expect("Failed to open log file");
    logger.error("run 1");
    logger.close_file();
    logger.open_file(&path).expect("Failed to reopen log file");
    logger.error("run 2");
    logger.shutdown();

    assert_eq!(read_lines(&path), vec!["[ERROR]    run 1", "[ERROR]    run 2"]);
}

#[test]
fn test_no_file_still_writes_console() {
    let (logger, console) = setup(LevelFilter::ALL);
    logger.close_file();
    logger.close_file();
    logger.info("console only");

    assert!(!logger.is_file_open());
    assert_eq!(console.lines(), vec!["[INFO]     console only"]);
}

#[test]
fn test_concurrent_lines_are_never_torn() {
    const THREADS: usize = 8;
    const LINES_PER_THREAD: usize = 250;

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("concurrent.log");
    let (logger, console) = setup(LevelFilter::WARNING);
    logger.open_file(&path).expect("Failed to open log file");
    logger.set_level_filter(LevelFilter::ALL);
    let logger = Arc::new(logger);

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..LINES_PER_THREAD {
                    logger.log_tagged(Level::Info, Tag::Core, format!("thread {t} line {i} {}", "x".repeat(64)));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Thread should complete successfully");
    }
    logger.set_level_filter(LevelFilter::NONE);
    logger.close_file();

    let lines = read_lines(&path);
    assert_eq!(lines.len(), THREADS * LINES_PER_THREAD);

    let padding = "x".repeat(64);
    let mut seen = HashSet::new();
    for line in &lines {
        let body = line
            .strip_prefix("[INFO]     [Core] thread ")
            .unwrap_or_else(|| panic!("torn or foreign line: {line}"));
        assert!(body.ends_with(&padding), "torn line: {line}");
        assert!(seen.insert(body.to_string()), "duplicate line: {line}");
    }

    // console and file saw the same order
    assert_eq!(console.lines(), lines);
}

/// Console that holds the logger's lock for a while on every line
struct SlowConsole;

impl Console for SlowConsole {
    fn write_line(&mut self, _level: Level, _prefix: &str, _message: &str) -> io::Result<()> {
        thread::sleep(Duration::from_millis(2));
        Ok(())
    }
}

#[test]
fn test_timestamps_never_go_backwards_under_contention() {
    const THREADS: usize = 4;
    const LINES_PER_THREAD: usize = 150;

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("ordered.log");
    let logger = Logger::with_console(Box::new(SlowConsole));
    logger.set_level_filter(LevelFilter::WARNING);
    logger.open_file(&path).expect("Failed to open log file");
    logger.set_display_settings(DisplaySettings::SHOW_DATE);
    let logger = Arc::new(logger);

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..LINES_PER_THREAD {
                    logger.warning(format!("thread {t} line {i}"));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Thread should complete successfully");
    }
    logger.close_file();

    let lines = read_lines(&path);
    assert_eq!(lines.len(), THREADS * LINES_PER_THREAD);

    // "[HH:MM:SS] " compares correctly as text within one day
    let stamps: Vec<&str> = lines.iter().map(|line| &line[1..9]).collect();
    for pair in stamps.windows(2) {
        assert!(pair[0] <= pair[1], "timestamp went backwards: {} then {}", pair[0], pair[1]);
    }
}

#[test]
fn test_filter_changes_race_free_with_writers() {
    let (logger, console) = setup(LevelFilter::ALL);
    let logger = Arc::new(logger);

    let writer = {
        let logger = Arc::clone(&logger);
        thread::spawn(move || {
            for i in 0..2000 {
                logger.info(i);
            }
        })
    };
    let toggler = {
        let logger = Arc::clone(&logger);
        thread::spawn(move || {
            for i in 0..2000 {
                let filter = if i % 2 == 0 { LevelFilter::NONE } else { LevelFilter::ALL };
                logger.set_level_filter(filter);
                logger.apply_profile(if i % 3 == 0 { Profile::Full } else { Profile::Normal });
            }
        })
    };

    writer.join().expect("Thread should complete successfully");
    toggler.join().expect("Thread should complete successfully");

    for line in console.lines() {
        assert!(line.contains("[INFO]"), "unexpected line {line}");
    }
}

#[test]
fn test_config_file_drives_logger() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let log_path = temp_dir.path().join("configured.log");
    let config = LoggerConfig {
        levels: LevelFilter::WARNING | LevelFilter::ERROR,
        display: DisplaySettings::NONE,
        log_file: Some(log_path.clone()),
        ..LoggerConfig::default()
    };

    let console = MemoryConsole::new();
    let logger = Logger::with_console(Box::new(console.clone()));
    logger.apply_config(&config);
    assert_eq!(logger.file_path(), Some(log_path.clone()));

    logger.info("dropped");
    logger.error("kept");
    drop(logger);

    assert_eq!(read_lines(&log_path), vec!["[ERROR]    kept"]);
    assert_eq!(console.lines(), vec!["[ERROR]    kept"]);
}
