use std::fmt;
use std::fmt::Formatter;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use crate::common::structs::custom_error::CustomError;
use crate::config::structs::configuration::Configuration;

pub(crate) fn bin2hex(data: &[u8], f: &mut Formatter) -> fmt::Result {
    let mut chars = vec![0u8; data.len() * 2];
    match binascii::bin2hex(data, &mut chars) {
        Ok(hex) => write!(f, "{}", String::from_utf8_lossy(hex)),
        Err(_) => Err(fmt::Error)
    }
}

#[inline(always)]
pub(crate) fn hex_to_nibble(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => 0xFF,
    }
}

/// Decodes a hex string into a fixed size byte array.
pub(crate) fn hex2bin<const N: usize>(data: &str) -> Result<[u8; N], binascii::ConvertError> {
    if data.len() != N * 2 {
        return Err(binascii::ConvertError::InvalidInputLength);
    }
    let mut result = [0u8; N];
    for (i, chunk) in data.as_bytes().chunks_exact(2).enumerate() {
        let high = hex_to_nibble(chunk[0]);
        let low = hex_to_nibble(chunk[1]);
        if high == 0xFF || low == 0xFF {
            return Err(binascii::ConvertError::InvalidInput);
        }
        result[i] = (high << 4) | low;
    }
    Ok(result)
}

pub(crate) fn bin2hex_string(data: &[u8]) -> String {
    const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";
    let mut buffer = String::with_capacity(data.len() * 2);
    for &byte in data {
        buffer.push(HEX_CHARS[(byte >> 4) as usize] as char);
        buffer.push(HEX_CHARS[(byte & 0xf) as usize] as char);
    }
    buffer
}

/// Current unix timestamp in seconds.
pub fn current_time() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Estimates a transfer speed in bytes per second from two announce timestamps.
///
/// Returns 0 when either timestamp is unset, nothing was transferred, or
/// no time elapsed between the two announces.
pub fn est_speed(start_time: i64, last_time: i64, bytes: u64) -> u64 {
    if start_time <= 0 || last_time <= 0 || bytes == 0 || last_time <= start_time {
        return 0;
    }
    bytes / (last_time - start_time) as u64
}

pub fn setup_logging(config: &Configuration) -> Result<(), CustomError>
{
    let level = match config.log_level.as_str() {
        "off" => log::LevelFilter::Off,
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => {
            return Err(CustomError::new(&format!("Unknown log level encountered: '{}'", config.log_level)));
        }
    };

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    if fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()
        .is_err()
    {
        return Err(CustomError::new("Failed to initialize logging."));
    }
    info!("logging initialized.");
    Ok(())
}
