//! Environment variable override tests
//!
//! Kept in their own binary: these tests mutate process-global environment
//! variables, which would race with other configuration tests running in
//! parallel threads.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use tempfile::NamedTempFile;
use textveil::config::load_config;

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_env_overrides_apply_over_file_values() {
    let _guard = ENV_LOCK.lock().unwrap();
    let file = write_config(
        r#"
        [input]
        dir = "./from-file"

        [output]
        dir = "./from-file-out"

        [engine.audit]
        enabled = false
        "#,
    );

    std::env::set_var("TEXTVEIL_INPUT_DIR", "./from-env-in");
    std::env::set_var("TEXTVEIL_OUTPUT_DIR", "./from-env-out");
    std::env::set_var("TEXTVEIL_DRY_RUN", "true");
    std::env::set_var("TEXTVEIL_SEED", "99");

    let config = load_config(file.path()).unwrap();

    std::env::remove_var("TEXTVEIL_INPUT_DIR");
    std::env::remove_var("TEXTVEIL_OUTPUT_DIR");
    std::env::remove_var("TEXTVEIL_DRY_RUN");
    std::env::remove_var("TEXTVEIL_SEED");

    assert_eq!(config.input.dir, PathBuf::from("./from-env-in"));
    assert_eq!(config.output.dir, PathBuf::from("./from-env-out"));
    assert!(config.engine.dry_run);
    assert_eq!(config.engine.seed, Some(99));
}

#[test]
fn test_invalid_env_override_is_an_error() {
    let _guard = ENV_LOCK.lock().unwrap();
    let file = write_config(
        r#"
        [engine.audit]
        enabled = false
        "#,
    );

    std::env::set_var("TEXTVEIL_SEED", "not-a-number");
    let result = load_config(file.path());
    std::env::remove_var("TEXTVEIL_SEED");

    assert!(result.is_err());
}
