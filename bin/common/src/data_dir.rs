use std::io;
use std::path::PathBuf;

use chainparams::NetworkKind;
use directories::ProjectDirs;

use crate::Config;

/// Gets the platform's default data directory, if the platform has one
pub fn default_data_dir() -> Option<PathBuf> {
    ProjectDirs::from("io", "NeoBitcoin Project", "NeoBitcoin").map(|dirs| dirs.data_dir().to_path_buf())
}

/// Gets the directory for the given network's files (log files, block database, etc.), creating
/// it if needed
///
/// # Errors
/// If no data directory is configured and the platform has no default, or the directory cannot
/// be created
pub fn network_data_dir(config: &Config, network: NetworkKind) -> io::Result<PathBuf> {
    let mut path = match &config.data_directory {
        Some(custom_data_directory) => custom_data_directory.to_path_buf(),
        None => default_data_dir().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "Failed to get project user directory")
        })?,
    };
    path.push(network.data_dir());

    std::fs::create_dir_all(&path).or_else(|err| {
        if err.kind() == io::ErrorKind::AlreadyExists {
            Ok(())
        } else {
            Err(err)
        }
    })?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn networks_get_their_own_directory() {
        let base = std::env::temp_dir().join(format!("neobitcoin-data-dir-{}", std::process::id()));
        let config = Config {
            log_level: log::LevelFilter::Info,
            data_directory: Some(base.clone()),
        };

        let main = network_data_dir(&config, NetworkKind::Main).unwrap();
        let regtest = network_data_dir(&config, NetworkKind::RegressionTest).unwrap();

        assert_eq!(main, base);
        assert_eq!(regtest, base.join("regtest"));
        assert!(regtest.is_dir());

        std::fs::remove_dir_all(&base).unwrap();
    }
}
