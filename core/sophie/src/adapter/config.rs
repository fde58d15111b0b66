//! config.json と環境変数から SophieConfig を組み立てる（adapter 層）
//!
//! 優先順位: 環境変数（SOPHIE_TZ / SOPHIE_DATA_DIR） > config.json > 既定値

use common::error::Error;
use common::ports::outbound::{EnvResolver, FileSystem};
use std::path::{Path, PathBuf};

use crate::domain::config::parse_timezone;
use crate::domain::SophieConfig;

pub const ENV_TIMEZONE: &str = "SOPHIE_TZ";
pub const ENV_DATA_DIR: &str = "SOPHIE_DATA_DIR";

/// ファイルが無ければ既定値。JSON が壊れていればパスを含めたエラー。
pub fn load_sophie_config(
    fs: &dyn FileSystem,
    env: &dyn EnvResolver,
    path: &Path,
) -> Result<SophieConfig, Error> {
    let mut cfg = if fs.exists(path) {
        let contents = fs.read_to_string(path)?;
        SophieConfig::parse(&contents).map_err(|e| match e {
            Error::Json(msg) => Error::json(format!("{}: {}", path.display(), msg)),
            other => other,
        })?
    } else {
        SophieConfig::default()
    };
    if let Some(tz) = env.var(ENV_TIMEZONE) {
        cfg.timezone = parse_timezone(&tz)?;
    }
    if let Some(dir) = env.var(ENV_DATA_DIR) {
        cfg.data_dir = Some(PathBuf::from(dir));
    }
    Ok(cfg)
}
