//! The global logger can be installed once per process, so this binary holds
//! a single test.

use am_portal::logger::{self, LogTarget, LoggerStatus};

use log::LevelFilter;
use tempfile::TempDir;

#[test]
fn given_log_file_when_installed_twice_then_first_wins_and_records_written() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("log").join("portal.log");

    let first = logger::install_with(LevelFilter::Debug, LogTarget::File(path.clone())).unwrap();
    let second =
        logger::install_with(LevelFilter::Trace, LogTarget::Stdout { colored: false }).unwrap();
    log::debug!("debug record");
    log::trace!("trace record");
    log::logger().flush();

    assert_eq!(first, LoggerStatus::Installed);
    assert_eq!(second, LoggerStatus::AlreadyInstalled);
    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("Logging at DEBUG to"));
    assert!(contents.contains("DEBUG] debug record ["));
    assert!(contents.contains("logger.rs:"));
    assert!(!contents.contains("trace record"));
}
