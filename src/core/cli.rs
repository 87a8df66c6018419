use crate::core::roster::DEFAULT_ROSTER_FILE;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct CliPaths {
    pub roster_path: PathBuf,
    pub config_path: PathBuf,
    pub exports_dir: PathBuf,
    pub logs_dir: PathBuf,
}

impl CliPaths {
    pub fn from_env() -> Result<Self, String> {
        Self::from_args(std::env::args().skip(1))
    }

    pub fn from_args<I>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = String>,
    {
        let mut paths = Self::defaults();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--roster" => {
                    paths.roster_path = Self::next_path(&mut args, "--roster")?;
                }
                "--config" => {
                    paths.config_path = Self::next_path(&mut args, "--config")?;
                }
                "--exports" => {
                    paths.exports_dir = Self::next_path(&mut args, "--exports")?;
                }
                "--logs" => {
                    paths.logs_dir = Self::next_path(&mut args, "--logs")?;
                }
                _ => return Err(format!("Unknown argument: {arg}")),
            }
        }
        Ok(paths)
    }

    fn next_path<I>(args: &mut I, flag: &str) -> Result<PathBuf, String>
    where
        I: Iterator<Item = String>,
    {
        args.next()
            .map(PathBuf::from)
            .ok_or_else(|| format!("Missing value for {flag}"))
    }

    fn defaults() -> Self {
        Self {
            roster_path: PathBuf::from(DEFAULT_ROSTER_FILE),
            config_path: PathBuf::from("config.json"),
            exports_dir: PathBuf::from("exports"),
            logs_dir: PathBuf::from("logs"),
        }
    }
}
