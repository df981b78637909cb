//! Init command implementation.
//!
//! Writes a `viewer.yaml` holding the default configuration.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::config::{ViewerConfig, CONFIG_FILENAME};
use crate::error::{Result, ViewerError};
use crate::output::{display_path, Printer};

/// Write a default viewer.yaml
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write into (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing viewer.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let config_path = args.path.join(CONFIG_FILENAME);

    if config_path.exists() && !args.force {
        return Err(ViewerError::Io {
            path: config_path,
            message: format!("{} already exists (use --force to overwrite)", CONFIG_FILENAME),
        });
    }

    let mut yaml = String::from("# Role ids allowed to use the viewer\n");
    yaml.push_str(&ViewerConfig::default().to_yaml()?);

    fs::write(&config_path, yaml).map_err(|e| ViewerError::Io {
        path: config_path.clone(),
        message: format!("Failed to write config: {}", e),
    })?;

    printer.status("Created", &display_path(&config_path));
    printer.info("Edit", "access_roles to enable the viewer for your roles");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = tempdir().unwrap();
        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };

        run(args, &Printer::new()).unwrap();

        let config = ViewerConfig::load(&dir.path().join(CONFIG_FILENAME)).unwrap();
        assert_eq!(config, ViewerConfig::default());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "tile_size: 8\n").unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };
        assert!(run(args, &Printer::new()).is_err());

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: true,
        };
        run(args, &Printer::new()).unwrap();
        let config = ViewerConfig::load(&dir.path().join(CONFIG_FILENAME)).unwrap();
        assert_eq!(config.tile_size, 56);
    }
}
