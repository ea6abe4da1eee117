use std::fs::File;
use std::io::Write;
use std::thread::available_parallelism;
use log::warn;
use regex::Regex;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::database_config::DatabaseConfig;
use crate::config::structs::http_trackers_config::HttpTrackersConfig;
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::tracker_config::TrackerConfig;
use crate::store::enums::store_drivers::StoreDrivers;

impl Configuration {
    pub fn init() -> Configuration {
        let threads = available_parallelism().map(|n| n.get() as u64).unwrap_or(4);
        Configuration {
            log_level: String::from("info"),
            log_console_interval: 60,
            tracker_config: TrackerConfig {
                request_interval: 1800,
                request_interval_minimum: 900,
                peers_timeout: 2700,
                peers_cleanup_interval: 900,
                peers_returned: 30,
                peers_returned_max: 100,
                hnr_threshold: 86400,
                hnr_min_bytes: 52_428_800,
                whitelist_enabled: true,
                reject_private_ip: false,
                enforce_min_interval: false,
                announce_timeout: 5,
            },
            database: DatabaseConfig {
                engine: StoreDrivers::memory,
                path: String::from("sqlite://data.db"),
                persistent_interval: 60,
                sync_batch_size: 1000,
                sync_queue_size: 65536,
            },
            http_server: vec!(
                HttpTrackersConfig {
                    enabled: true,
                    bind_address: String::from("0.0.0.0:6969"),
                    real_ip: String::from("X-Forwarded-For"),
                    keep_alive: 60,
                    request_timeout: 15,
                    disconnect_timeout: 15,
                    max_connections: 25000,
                    threads,
                }
            ),
            sentry_config: SentryConfig {
                enabled: false,
                dsn: String::new(),
                debug: false,
                sample_rate: 1.0,
                max_breadcrumbs: 100,
                attach_stacktrace: true,
                send_default_pii: false,
                traces_sample_rate: 1.0,
            },
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        let data = std::fs::read(path)?;
        Ok(Self::load(data.as_slice())?)
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path)?;
        file.write_all(data.as_ref())?;
        Ok(())
    }

    pub fn save_from_config(config: &Configuration, path: &str) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config)?;
        Self::save_file(path, config_toml)
    }

    pub fn load_from_file(create: bool) -> Result<Configuration, CustomError> {
        Self::load_from_path("config.toml", create)
    }

    pub fn load_from_path(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {error}");

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new(&format!("will not create automatically {path} file")));
                }
                eprintln!("Creating config file..");

                return match Configuration::save_from_config(&Configuration::init(), path) {
                    Ok(_) => {
                        eprintln!("Please edit {path} and start again, exiting now...");
                        Err(CustomError::new(&format!("created {path} file")))
                    }
                    Err(e) => {
                        eprintln!("{path} file could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new(&format!("could not create {path} file")))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let check_map = self.http_server.iter()
            .map(|server| ("[HTTP] bind_address", server.bind_address.clone(), r"^[0-9a-fA-F.:\[\]]+:[0-9]{1,5}$"))
            .chain(self.http_server.iter()
                .filter(|server| !server.real_ip.is_empty())
                .map(|server| ("[HTTP] real_ip", server.real_ip.clone(), r"^[A-Za-z][A-Za-z0-9-]{0,63}$")))
            .chain(std::iter::once(("[LOG] log_level", self.log_level.clone(), r"^(off|trace|debug|info|warn|error)$")))
            .collect::<Vec<_>>();

        for (name, value, regex) in check_map {
            Self::validate_value(name, &value, regex)?;
        }

        let tracker_config = &self.tracker_config;
        if tracker_config.request_interval_minimum > tracker_config.request_interval {
            return Err(ConfigurationError::ValidationError(String::from("request_interval_minimum is larger than request_interval")));
        }
        if tracker_config.peers_returned > tracker_config.peers_returned_max {
            return Err(ConfigurationError::ValidationError(String::from("peers_returned is larger than peers_returned_max")));
        }
        if self.database.sync_queue_size == 0 || self.database.sync_batch_size == 0 {
            return Err(ConfigurationError::ValidationError(String::from("sync_queue_size and sync_batch_size must be above 0")));
        }
        if tracker_config.peers_timeout <= tracker_config.request_interval {
            warn!("[VALIDATE CONFIG] peers_timeout ({}) is not above request_interval ({}), active peers will be reaped", tracker_config.peers_timeout, tracker_config.request_interval);
        }
        Ok(())
    }

    pub fn validate_value(name: &str, value: &str, regex: &str) -> Result<(), ConfigurationError>
    {
        let regex_check = Regex::new(regex)
            .map_err(|e| ConfigurationError::ValidationError(e.to_string()))?;
        if !regex_check.is_match(value) {
            return Err(ConfigurationError::ValidationError(format!("Error checking {name} [:] Name: \"{value}\" [:] Regex: \"{regex_check}\"")));
        }
        Ok(())
    }
}
