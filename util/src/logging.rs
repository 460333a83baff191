use std::{
    error::Error,
    fmt,
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use chrono::prelude::*;
use flate2::{write::GzEncoder, Compression};
use log::*;
use log4rs::{
    append::{file::FileAppender, Append},
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::{Filter, Response},
};

#[cfg(unix)]
use termion::color;

const LOG_DIR: &str = "./logs";
const LATEST_LOG: &str = "latest.log";
const PATTERN: &str = "[{d(%H:%M:%S)} {l}]: {m}{n}";

#[cfg(debug_assertions)]
const LEVEL_FILTER: LevelFilter = LevelFilter::Debug;
#[cfg(not(debug_assertions))]
const LEVEL_FILTER: LevelFilter = LevelFilter::Info;

/// Sets up log4rs to print `[HH:MM:SS LEVEL]: message` lines to the console and to `logs/latest.log`.
///
/// Console lines are colored by level on unix. Debug and trace records are only kept when they come
/// from a module whose path starts with `crate_prefix`, and debug logging is compiled out of release
/// builds entirely.
///
/// Call [cleanup] before exiting to archive the log.
pub fn init_logger(crate_prefix: &str) -> Result<(), Box<dyn Error>> {
    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .append(false)
        .build(Path::new(LOG_DIR).join(LATEST_LOG))?;

    let appender = |name: &str, append: Box<dyn Append>| {
        Appender::builder()
            .filter(Box::new(PrefixFilter {
                prefix: crate_prefix.to_owned(),
            }))
            .build(name, append)
    };

    let config = Config::builder()
        .appender(appender("console", Box::new(ConsoleAppender)))
        .appender(appender("logfile", Box::new(logfile)))
        .build(
            Root::builder()
                .appender("console")
                .appender("logfile")
                .build(LEVEL_FILTER),
        )?;

    log4rs::init_config(config)?;
    Ok(())
}

/// Compresses `logs/latest.log` into `logs/{yyyy-mm-dd}-{n}.log.gz`, `n` counting up from 1 per day.
///
/// Meant to be called right before the process exits, failures are only reported to stderr.
pub fn cleanup() {
    log::logger().flush();

    let dir = Path::new(LOG_DIR);
    let date = Local::now().format("%Y-%m-%d").to_string();
    if let Err(e) = archive(&dir.join(LATEST_LOG), dir, &date) {
        eprintln!("Failed to archive the log: {}", e);
    }
}

fn archive(latest: &Path, dir: &Path, date: &str) -> io::Result<PathBuf> {
    let last = fs::read_dir(dir)?
        .flatten()
        .filter_map(|entry| archive_index(&entry.file_name().to_string_lossy(), date))
        .max()
        .unwrap_or(0);
    let output = dir.join(format!("{}-{}.log.gz", date, last + 1));

    let mut input = File::open(latest)?;
    let mut encoder = GzEncoder::new(File::create(&output)?, Compression::default());
    io::copy(&mut input, &mut encoder)?;
    encoder.finish()?;
    drop(input);

    fs::remove_file(latest)?;
    Ok(output)
}

// `{date}-{index}.log.gz` -> index
fn archive_index(file_name: &str, date: &str) -> Option<u32> {
    file_name
        .strip_prefix(date)?
        .strip_prefix('-')?
        .strip_suffix(".log.gz")?
        .parse()
        .ok()
}

// Debug output from dependencies is noise
#[derive(Debug)]
struct PrefixFilter {
    prefix: String,
}

impl Filter for PrefixFilter {
    fn filter(&self, record: &Record) -> Response {
        if record.level() < Level::Debug {
            return Response::Neutral;
        }

        match record.module_path() {
            Some(path) if path.starts_with(&self.prefix) => Response::Neutral,
            _ => Response::Reject,
        }
    }
}

struct ConsoleAppender;

impl ConsoleAppender {
    #[cfg(unix)]
    fn write_record(writer: &mut impl Write, record: &Record) -> io::Result<()> {
        let start = match record.level() {
            Level::Error => format!("{}", color::Fg(color::Red)),
            Level::Warn => format!("{}", color::Fg(color::LightYellow)),
            Level::Debug | Level::Trace => format!("{}", color::Fg(color::LightCyan)),
            Level::Info => format!("{}", color::Fg(color::Reset)),
        };
        writeln!(
            writer,
            "{}[{} {}]: {}{}",
            start,
            Local::now().format("%H:%M:%S"),
            record.level(),
            record.args(),
            color::Fg(color::Reset)
        )
    }

    #[cfg(not(unix))]
    fn write_record(writer: &mut impl Write, record: &Record) -> io::Result<()> {
        writeln!(
            writer,
            "[{} {}]: {}",
            Local::now().format("%H:%M:%S"),
            record.level(),
            record.args()
        )
    }
}

impl Append for ConsoleAppender {
    fn append(&self, record: &Record) -> anyhow::Result<()> {
        Self::write_record(&mut io::stdout().lock(), record)?;
        Ok(())
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
    }
}

impl fmt::Debug for ConsoleAppender {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("ConsoleAppender")
    }
}

#[test]
fn archive_indices() {
    assert_eq!(archive_index("2026-10-18-3.log.gz", "2026-10-18"), Some(3));
    assert_eq!(archive_index("2026-10-18-12.log.gz", "2026-10-18"), Some(12));
    assert_eq!(archive_index("2026-10-17-4.log.gz", "2026-10-18"), None);
    assert_eq!(archive_index("latest.log", "2026-10-18"), None);
}

#[test]
fn archive_counts_up() {
    let dir = tempfile::tempdir().unwrap();
    let latest = dir.path().join(LATEST_LOG);

    fs::write(&latest, "[12:00:00 INFO]: first").unwrap();
    let first = archive(&latest, dir.path(), "2026-10-18").unwrap();
    assert_eq!(first, dir.path().join("2026-10-18-1.log.gz"));
    assert!(!latest.exists());

    fs::write(&latest, "[12:00:01 INFO]: second").unwrap();
    let second = archive(&latest, dir.path(), "2026-10-18").unwrap();
    assert_eq!(second, dir.path().join("2026-10-18-2.log.gz"));
}
