use crate::logger::LogTarget;

use am_config::Config;

#[test]
fn given_no_log_file_when_target_from_config_then_stdout_with_color_setting() {
    let mut config = Config::default();
    config.logging.colored = false;

    let target = LogTarget::from_config(&config).unwrap();

    assert_eq!(target, LogTarget::Stdout { colored: false });
}

#[test]
fn given_log_file_when_target_from_config_then_file_under_log_dir() {
    let mut config = Config::default();
    config.logging.file = Some("portal.log".to_string());

    let target = LogTarget::from_config(&config).unwrap();

    match target {
        LogTarget::File(path) => assert!(path.ends_with("log/portal.log")),
        other => panic!("expected file target, got {other:?}"),
    }
}
