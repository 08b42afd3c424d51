
use crate::{CONFIG_DIR_ENV, CONFIG_FILENAME, Config};

use std::env;
use std::path::Path;

use tempfile::TempDir;

/// A throwaway portal config directory with `AM_CONFIG_DIR` pointed at it.
/// Every variable set through the sandbox is put back when it drops, newest
/// first.
pub(crate) struct ConfigSandbox {
    dir: TempDir,
    saved: Vec<(&'static str, Option<String>)>,
}

impl ConfigSandbox {
    pub(crate) fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let root = dir.path().to_str().unwrap().to_string();
        Self {
            dir,
            saved: Vec::new(),
        }
        .env(CONFIG_DIR_ENV, &root)
    }

    /// Sets an `AM_*` override for the lifetime of the sandbox.
    pub(crate) fn env(mut self, key: &'static str, value: &str) -> Self {
        self.saved.push((key, env::var(key).ok()));
        unsafe { env::set_var(key, value) };
        self
    }

    pub(crate) fn config_toml(self, contents: &str) -> Self {
        std::fs::write(self.dir.path().join(CONFIG_FILENAME), contents).unwrap();
        self
    }

    pub(crate) fn path(&self) -> &Path {
        self.dir.path()
    }

    pub(crate) fn load(&self) -> Config {
        Config::load().unwrap()
    }
}

impl Drop for ConfigSandbox {
    fn drop(&mut self) {
        for (key, previous) in self.saved.drain(..).rev() {
            unsafe {
                match previous {
                    Some(value) => env::set_var(key, value),
                    None => env::remove_var(key),
                }
            }
        }
    }
}
