use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use futures_util::future::try_join_all;
use log::{error, info};
use parking_lot::deadlock;
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use mika_tracker::common::common::{current_time, setup_logging};
use mika_tracker::config::structs::configuration::Configuration;
use mika_tracker::http::http::{http_check_host_and_port_used, http_service};
use mika_tracker::http::structs::http_service_data::HttpServiceData;
use mika_tracker::stats::enums::stats_event::StatsEvent;
use mika_tracker::structs::Cli;
use mika_tracker::tracker::structs::torrent_tracker::TorrentTracker;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    if let Err(error) = setup_logging(&config) {
        eprintln!("{error}");
        exit(1);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let _sentry_guard = config.sentry_config.enabled.then(|| {
        sentry::init((config.sentry_config.dsn.clone(), sentry::ClientOptions {
            release: sentry::release_name!(),
            debug: config.sentry_config.debug,
            sample_rate: config.sentry_config.sample_rate,
            max_breadcrumbs: config.sentry_config.max_breadcrumbs,
            attach_stacktrace: config.sentry_config.attach_stacktrace,
            send_default_pii: config.sentry_config.send_default_pii,
            traces_sample_rate: config.sentry_config.traces_sample_rate,
            session_mode: sentry::SessionMode::Request,
            auto_session_tracking: true,
            ..Default::default()
        }))
    });

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let store = match TorrentTracker::create_store(&config).await {
                Ok(store) => store,
                Err(error) => {
                    error!("[BOOT] Unable to open the {:?} store: {error}", config.database.engine);
                    exit(1);
                }
            };
            let tracker = Arc::new(TorrentTracker::new(config.clone(), store));

            match tracker.admin(&args).await {
                Ok(true) => return Ok(()),
                Ok(false) => {}
                Err(error) => {
                    error!("[ADMIN] {error}");
                    exit(1);
                }
            }

            match tracker.load_whitelist().await {
                Ok(count) => info!("[BOOT] Loaded {count} whitelisted clients"),
                Err(error) => {
                    error!("[BOOT] Unable to load the whitelist: {error}");
                    exit(1);
                }
            }

            let tokio_shutdown = match Shutdown::new() {
                Ok(shutdown) => shutdown,
                Err(error) => {
                    error!("[BOOT] Unable to register the shutdown handler: {error:?}");
                    exit(1);
                }
            };

            let deadlocks_handler = tokio_shutdown.clone();
            tokio::spawn(async move {
                info!("[BOOT] Starting thread for deadlocks...");
                let mut interval = tokio::time::interval(Duration::from_secs(30));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let deadlocks = deadlock::check_deadlock();
                            if !deadlocks.is_empty() {
                                info!("[DEADLOCK] Found {} deadlocks", deadlocks.len());
                                for (i, threads) in deadlocks.iter().enumerate() {
                                    info!("[DEADLOCK] #{i}");
                                    for t in threads {
                                        info!("[DEADLOCK] Thread ID: {:#?}", t.thread_id());
                                        info!("[DEADLOCK] {:#?}", t.backtrace());
                                        sentry::capture_message(&format!("{:#?}", t.backtrace()), sentry::Level::Error);
                                    }
                                }
                            }
                        }
                        _ = deadlocks_handler.handle() => {
                            info!("[BOOT] Shutting down thread for deadlocks...");
                            return;
                        }
                    }
                }
            });

            let mut http_futures = Vec::new();
            for http_server_object in &config.http_server {
                if !http_server_object.enabled {
                    continue;
                }
                if let Err(error) = http_check_host_and_port_used(&http_server_object.bind_address) {
                    error!("[HTTP] {error}");
                    exit(1);
                }
                let address: SocketAddr = match http_server_object.bind_address.parse() {
                    Ok(address) => address,
                    Err(error) => {
                        error!("[HTTP] Invalid bind address {}: {error}", http_server_object.bind_address);
                        exit(1);
                    }
                };
                let data = Arc::new(HttpServiceData {
                    torrent_tracker: tracker.clone(),
                    http_trackers_config: Arc::new(http_server_object.clone())
                });
                http_futures.push(http_service(address, data)?);
            }

            let (http_handles, http_servers): (Vec<_>, Vec<_>) = http_futures.into_iter().unzip();
            if !http_servers.is_empty() {
                tokio::spawn(async move {
                    if let Err(error) = try_join_all(http_servers).await {
                        error!("[HTTP] Server stopped: {error}");
                    }
                });
            }

            let stats_handler = tokio_shutdown.clone();
            let tracker_spawn_stats = tracker.clone();
            let console_interval = tracker_spawn_stats.config.log_console_interval.max(1);
            info!("[BOOT] Starting thread for console updates with {console_interval} seconds delay...");
            tokio::spawn(async move {
                let mut interval = tokio::time::interval(Duration::from_secs(console_interval));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            tracker_spawn_stats.set_stats(StatsEvent::TimestampConsole, current_time());
                            let stats = tracker_spawn_stats.get_stats();
                            info!(
                                "[STATS] Torrents: {} - Users: {} - WList: {} - Seeds: {} - Peers: {} - Completed: {}",
                                stats.torrents, stats.users, stats.whitelist, stats.seeds, stats.peers, stats.completed
                            );
                            info!(
                                "[STATS HTTP] A:{} S:{} F:{} | Sync Q:{} OK:{} F:{} | Reaped P:{} T:{}",
                                stats.announces_handled, stats.scrapes_handled, stats.failures,
                                stats.queue_len, stats.sync_ok, stats.sync_failed,
                                stats.peers_reaped, stats.torrents_reaped
                            );
                        }
                        _ = stats_handler.handle() => {
                            info!("[BOOT] Shutting down thread for console updates...");
                            return;
                        }
                    }
                }
            });

            let reaper = tokio::spawn(tracker.clone().reaper_worker(tokio_shutdown.clone()));
            let sync = tokio::spawn(tracker.clone().sync_worker(tokio_shutdown.clone()));

            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown request received, shutting down...");
                    for handle in http_handles.iter() {
                        handle.stop(true).await;
                    }
                    tokio_shutdown.handle().await;
                    if let Err(error) = reaper.await {
                        error!("[BOOT] Peers cleanup thread failed: {error}");
                    }
                    if let Err(error) = sync.await {
                        sentry::capture_error(&error);
                        error!("[BOOT] Store sync thread failed: {error}");
                    }
                    info!("Server shutting down completed");
                    Ok(())
                }
            }
        })
}
