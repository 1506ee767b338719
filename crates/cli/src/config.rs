use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable naming the inventory file to load.
pub const INVENTORY_FILE_ENV: &str = "PARTBIN_INVENTORY_FILE";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// File to load at startup. `None` means ask the user.
    pub inventory_file: Option<PathBuf>,
}

impl Config {
    /// First positional argument wins, then `PARTBIN_INVENTORY_FILE`.
    pub fn from_env() -> Self {
        Self::from_sources(
            std::env::args_os().nth(1),
            std::env::var_os(INVENTORY_FILE_ENV),
        )
    }

    pub fn from_sources(arg: Option<OsString>, env: Option<OsString>) -> Self {
        let inventory_file = arg
            .filter(|v| !v.is_empty())
            .or_else(|| env.filter(|v| !v.is_empty()))
            .map(PathBuf::from);

        Config { inventory_file }
    }
}
