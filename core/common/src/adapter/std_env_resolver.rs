//! 標準環境変数解決実装（std::env を委譲）

use crate::domain::{Dirs, HomeDir};
use crate::error::Error;
use crate::ports::outbound::EnvResolver;
use std::env;
use std::path::PathBuf;

/// 標準環境変数解決実装
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|s| !s.is_empty())
}

impl EnvResolver for StdEnvResolver {
    fn resolve_home_dir(&self) -> Result<HomeDir, Error> {
        if let Some(home) = non_empty_var("SOPHIE_HOME") {
            return Ok(HomeDir::new(PathBuf::from(home)));
        }

        let config_base = non_empty_var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| non_empty_var("HOME").map(|h| PathBuf::from(h).join(".config")))
            .ok_or_else(|| Error::env("HOME is not set"))?;

        Ok(HomeDir::new(config_base.join("sophie")))
    }

    fn resolve_dirs(&self) -> Result<Dirs, Error> {
        let home = self.resolve_home_dir()?;
        let data_dir = non_empty_var("SOPHIE_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| home.join("data"));
        Ok(Dirs {
            config_dir: home.to_path_buf(),
            data_dir,
        })
    }

    fn var(&self, name: &str) -> Option<String> {
        non_empty_var(name)
    }
}
