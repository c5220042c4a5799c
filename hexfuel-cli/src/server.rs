//! `serve` command - runs the HTTP API and front end on a tokio runtime

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;

use hexfuel_server::{run_server, ServerConfig};

#[derive(Args)]
pub struct ServeArgs {
    /// Port number to listen on
    #[arg(long, default_value_t = ServerConfig::default().port)]
    pub port: u16,

    /// Directory holding the browser front end
    #[arg(long, default_value = "hexfuel/web")]
    pub static_dir: PathBuf,
}

impl ServeArgs {
    /// Server settings for one session; `seed` fixes the board values
    fn into_config(self, seed: Option<u64>) -> Result<ServerConfig> {
        if !has_front_end(&self.static_dir)? {
            tracing::warn!(
                "No front end at {}; only the /api routes will answer",
                self.static_dir.display()
            );
        }

        Ok(ServerConfig {
            port: self.port,
            static_dir: self.static_dir.to_string_lossy().into_owned(),
            seed,
        })
    }
}

pub fn run(args: ServeArgs, seed: Option<u64>) -> Result<()> {
    let config = args.into_config(seed)?;

    let runtime = tokio::runtime::Runtime::new().context("Failed to start tokio runtime")?;
    runtime.block_on(run_server(config))
}

/// A missing directory is tolerated; a file in its place is not.
fn has_front_end(dir: &Path) -> Result<bool> {
    if !dir.exists() {
        return Ok(false);
    }
    if !dir.is_dir() {
        bail!("Static path is not a directory: {}", dir.display());
    }
    Ok(dir.join("index.html").is_file())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(static_dir: &str) -> ServeArgs {
        ServeArgs {
            port: 9000,
            static_dir: PathBuf::from(static_dir),
        }
    }

    #[test]
    fn test_into_config_carries_seed() {
        let config = args("web").into_config(Some(9)).unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.static_dir, "web");
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_missing_static_dir_is_tolerated() {
        assert!(!has_front_end(Path::new("/nonexistent/hexfuel/web")).unwrap());
        assert!(args("/nonexistent/hexfuel/web").into_config(None).is_ok());
    }

    #[test]
    fn test_static_path_must_be_directory() {
        let file = std::env::temp_dir().join("hexfuel_static_dir_is_a_file");
        std::fs::write(&file, "not a dir").unwrap();
        let result = has_front_end(&file);
        let _ = std::fs::remove_file(&file);
        assert!(result.is_err());
    }

    #[test]
    fn test_front_end_needs_index() {
        let dir = std::env::temp_dir().join("hexfuel_front_end_check");
        std::fs::create_dir_all(&dir).unwrap();
        let _ = std::fs::remove_file(dir.join("index.html"));
        assert!(!has_front_end(&dir).unwrap());

        std::fs::write(dir.join("index.html"), "<html></html>").unwrap();
        assert!(has_front_end(&dir).unwrap());
        let _ = std::fs::remove_dir_all(&dir);
    }
}
