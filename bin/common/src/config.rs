use std::path::PathBuf;

use log::LevelFilter;
use structopt::StructOpt;

/// Configuration for common systems
#[derive(StructOpt, Debug)]
#[structopt(rename_all = "kebab-case")]
pub struct Config {
    /// Sets the log level for the logger
    /// The levels correspond to the following:
    ///
    ///   0 - Warn
    ///   1 - Info
    ///   2 - Debug
    ///   3 - Trace
    #[structopt(long, default_value = "1", parse(try_from_str = "parse_log_level"))]
    pub log_level: LevelFilter,

    /// Sets the data directory to be used
    /// If unset, the platform's default data directory is used. Networks other than the main
    /// network keep their files in a sub-directory of it
    #[structopt(long, parse(from_os_str))]
    pub data_directory: Option<PathBuf>,
}

fn parse_log_level(level: &str) -> Result<LevelFilter, String> {
    match level {
        "0" => Ok(LevelFilter::Warn),
        "1" => Ok(LevelFilter::Info),
        "2" => Ok(LevelFilter::Debug),
        "3" => Ok(LevelFilter::Trace),
        _ => Err(format!("Invalid log level {}, expected 0 to 3", level)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_parses_log_levels() {
        assert_eq!(parse_log_level("0"), Ok(LevelFilter::Warn));
        assert_eq!(parse_log_level("3"), Ok(LevelFilter::Trace));
        assert!(parse_log_level("4").is_err());
        assert!(parse_log_level("info").is_err());
    }

    #[test]
    fn it_reads_the_command_line() {
        let config = Config::from_iter(&["test", "--log-level", "2", "--data-directory", "/tmp/nbc"]);
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.data_directory, Some(PathBuf::from("/tmp/nbc")));

        let config = Config::from_iter(&["test"]);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(config.data_directory, None);
    }
}
