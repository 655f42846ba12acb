use rotalog::{Config, Handler, Level, Logger, attr};
use std::fs;
use tempfile::tempdir;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempdir().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.parse_level(), Level::Info);
    assert!(config.general.console);
}

#[test]
fn handler_from_config_file() {
    let dir = tempdir().unwrap();
    let log_path = dir.path().join("logs").join("svc.log");
    let config_path = dir.path().join("rotalog.toml");
    fs::write(
        &config_path,
        format!(
            r#"
[general]
level = "debug"
console = false

[format]
line = "${{Level}} ${{Message}}${{Attrs}}"
attr_prefix = " ("
attr_suffix = ")"
attr_delimiter = " "

[rotation]
filename = "{}"
max_backups = 1
"#,
            log_path.display()
        ),
    )
    .unwrap();

    let config = Config::load_from(&config_path).unwrap();
    let logger = Logger::new(Handler::from_config(&config));

    logger.debug("starting", []);
    logger.info("ready", [attr("port", 8080), attr("tls", true)]);
    logger.handler().close().unwrap();

    let files: Vec<_> = fs::read_dir(log_path.parent().unwrap())
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(files.len(), 1);
    assert_eq!(
        fs::read_to_string(&files[0]).unwrap(),
        "DEBUG starting\nINFO ready (port=8080 tls=true)\n"
    );
}

#[test]
fn zero_max_size_in_file_keeps_logging() {
    let dir = tempdir().unwrap();
    let config: Config = "[rotation]\nmax_size = \"0\"\nmax_size_mb = 0\n"
        .parse()
        .unwrap();
    let rotation = config.rotation_options().filename(dir.path().join("zero.log"));
    assert_eq!(rotation.max_size(), 1024 * 1024);

    let handler = Handler::with_rotation(rotation)
        .with_options(config.handler_options().mirror_to_console(false));
    handler
        .handle(&rotalog::Record::new(Level::Info, "m", vec![]))
        .unwrap();
}

#[test]
fn invalid_level_in_file_is_an_error() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("rotalog.toml");
    fs::write(&config_path, "[general]\nlevel = \"verbose\"\n").unwrap();

    let err = Config::load_from(&config_path).unwrap_err();
    assert!(matches!(err, rotalog::Error::InvalidLevel(_)));
}
