use std::path::Path;

use fern::colors::Color;
use log::info;

use crate::Config;

/// Sets up logging to stderr and to `<log_directory>/<binary_name>.log`
///
/// Stdout is left to the binary's own output
///
/// # Errors
/// If the log file cannot be opened or a logger has already been set
pub fn init(config: &Config, log_directory: &Path, binary_name: &str) -> Result<(), fern::InitError> {
    let colors = fern::colors::ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Cyan)
        .debug(Color::Green)
        .trace(Color::Magenta);

    let mut log_file_path = log_directory.to_path_buf();
    log_file_path.push(binary_name);
    log_file_path.set_extension("log");

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{date} {level:<5} [{target}] {message}",
                date = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                level = colors.color(record.level()),
                target = record.target(),
                message = message,
            ))
        })
        .level(config.log_level)
        .chain(std::io::stderr())
        .chain(fern::log_file(&log_file_path)?)
        .apply()?;

    info!("Logging events to {}", log_file_path.display());
    Ok(())
}
