use std::ffi::OsString;
use std::path::PathBuf;
use std::sync::Mutex;

use lodestone_config::{
    discover_config_path, load_for_dir, ConfigError, LodestoneConfig, LODESTONE_CONFIG_ENV_VAR,
};
use tempfile::tempdir;

static ENV_LOCK: Mutex<()> = Mutex::new(());

struct EnvVarGuard {
    key: &'static str,
    prev: Option<OsString>,
}

impl EnvVarGuard {
    fn set(key: &'static str, value: &std::path::Path) -> Self {
        let prev = std::env::var_os(key);
        std::env::set_var(key, value);
        Self { key, prev }
    }

    fn unset(key: &'static str) -> Self {
        let prev = std::env::var_os(key);
        std::env::remove_var(key);
        Self { key, prev }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        match &self.prev {
            Some(v) => std::env::set_var(self.key, v),
            None => std::env::remove_var(self.key),
        }
    }
}

#[test]
fn discovers_lodestone_toml_in_root() {
    let _lock = ENV_LOCK.lock().expect("ENV_LOCK mutex poisoned");
    let _env = EnvVarGuard::unset(LODESTONE_CONFIG_ENV_VAR);

    let dir = tempdir().unwrap();
    let config_path = dir.path().join("lodestone.toml");
    std::fs::write(&config_path, "[merge]\npretty = false\n").unwrap();

    let discovered = discover_config_path(dir.path()).expect("lodestone.toml should be discovered");
    assert_eq!(discovered, config_path.canonicalize().unwrap_or(config_path));

    let (config, path) = load_for_dir(dir.path()).unwrap();
    assert!(path.is_some());
    assert!(!config.merge.pretty);
}

#[test]
fn falls_back_to_hidden_config_file() {
    let _lock = ENV_LOCK.lock().expect("ENV_LOCK mutex poisoned");
    let _env = EnvVarGuard::unset(LODESTONE_CONFIG_ENV_VAR);

    let dir = tempdir().unwrap();
    let config_path = dir.path().join(".lodestone.toml");
    std::fs::write(&config_path, "[logging]\nlevel = \"debug\"\n").unwrap();

    let (config, path) = load_for_dir(dir.path()).unwrap();
    assert_eq!(path, Some(config_path.canonicalize().unwrap_or(config_path)));
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn env_var_overrides_discovery() {
    let _lock = ENV_LOCK.lock().expect("ENV_LOCK mutex poisoned");

    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("lodestone.toml"), "[merge]\nleft = \"ignored.json\"\n").unwrap();
    let custom = dir.path().join("custom.toml");
    std::fs::write(&custom, "[merge]\nleft = \"client.json\"\n").unwrap();
    let _env = EnvVarGuard::set(LODESTONE_CONFIG_ENV_VAR, &custom);

    let (config, _) = load_for_dir(dir.path()).unwrap();
    assert_eq!(config.merge.left, PathBuf::from("client.json"));
}

#[test]
fn missing_config_yields_defaults() {
    let _lock = ENV_LOCK.lock().expect("ENV_LOCK mutex poisoned");
    let _env = EnvVarGuard::unset(LODESTONE_CONFIG_ENV_VAR);

    let dir = tempdir().unwrap();
    let (config, path) = load_for_dir(dir.path()).unwrap();
    assert_eq!(config, LodestoneConfig::default());
    assert_eq!(path, None);
}

#[test]
fn env_var_pointing_at_missing_file_is_an_io_error() {
    let _lock = ENV_LOCK.lock().expect("ENV_LOCK mutex poisoned");

    let dir = tempdir().unwrap();
    let _env = EnvVarGuard::set(LODESTONE_CONFIG_ENV_VAR, &dir.path().join("absent.toml"));

    let err = load_for_dir(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}
