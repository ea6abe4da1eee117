use std::borrow::Cow;
use std::future::Future;
use std::net::{IpAddr, SocketAddr, TcpListener};
use std::sync::Arc;
use std::time::Duration;
use actix_cors::Cors;
use actix_web::{App, http, HttpRequest, HttpResponse, HttpServer, web};
use actix_web::dev::ServerHandle;
use actix_web::http::header::ContentType;
use actix_web::middleware::Condition;
use actix_web::web::{Data, ServiceConfig};
use bip_bencode::{ben_bytes, ben_int, ben_list, ben_map, BMutAccess};
use byteorder::{BigEndian, WriteBytesExt};
use log::{debug, error, info};
use crate::common::structs::custom_error::CustomError;
use crate::http::structs::http_service_data::HttpServiceData;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::announce_query_request::AnnounceQueryRequest;
use crate::tracker::structs::announce_response::AnnounceResponse;
use crate::tracker::structs::query::Query;
use crate::tracker::structs::scrape_query_request::ScrapeQueryRequest;
use crate::tracker::structs::torrent_peer::TorrentPeer;

pub fn http_service_cors() -> Cors
{
    Cors::default()
        .send_wildcard()
        .allowed_methods(vec!["GET"])
        .allowed_headers(vec![http::header::X_FORWARDED_FOR, http::header::ACCEPT])
        .allowed_header(http::header::CONTENT_TYPE)
        .max_age(1)
}

pub fn http_service_routes(data: Arc<HttpServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(data.clone()));
        cfg.service(web::resource("/{passkey}/announce").route(web::get().to(http_service_announce)));
        cfg.service(web::resource("/{passkey}/scrape").route(web::get().to(http_service_scrape)));
        cfg.default_service(web::route().to(http_service_not_found));
    })
}

/// Binds one tracker listener and returns its handle together with the server future.
pub fn http_service(
    addr: SocketAddr,
    data: Arc<HttpServiceData>
) -> Result<(ServerHandle, impl Future<Output=Result<(), std::io::Error>>), std::io::Error>
{
    let config = data.http_trackers_config.clone();
    let sentry_enabled = data.torrent_tracker.config.sentry_config.enabled;

    info!("[HTTP] Starting server listener on {addr}");
    let server = HttpServer::new(move || {
        App::new()
            .wrap(Condition::new(sentry_enabled, sentry_actix::Sentry::new()))
            .wrap(http_service_cors())
            .configure(http_service_routes(data.clone()))
    })
        .keep_alive(Duration::from_secs(config.keep_alive))
        .client_request_timeout(Duration::from_secs(config.request_timeout))
        .client_disconnect_timeout(Duration::from_secs(config.disconnect_timeout))
        .max_connections(config.max_connections as usize)
        .workers(config.threads.max(1) as usize)
        .bind((addr.ip(), addr.port()))?
        .disable_signals()
        .run();

    Ok((server.handle(), server))
}

pub async fn http_service_announce(request: HttpRequest, path: web::Path<String>, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let passkey = path.into_inner();
    let tracker = &data.torrent_tracker;

    let query = match Query::parse(request.query_string()) {
        Ok(query) => query,
        Err(error) => return http_service_failure(&error)
    };

    let forwarded_for = http_service_forwarded_for(&request, &data.http_trackers_config.real_ip);
    let remote_addr = request.peer_addr().map(|addr| addr.ip());
    let announce = match tracker.validate_announce(&query, remote_addr, forwarded_for.as_deref()) {
        Ok(announce) => announce,
        Err(error) => return http_service_failure(&error)
    };

    match tracker.handle_announce(&passkey, announce.clone()).await {
        Ok(response) => http_service_announce_response(&announce, &response),
        Err(error) => http_service_failure(&error)
    }
}

pub fn http_service_announce_response(announce: &AnnounceQueryRequest, response: &AnnounceResponse) -> HttpResponse
{
    if announce.compact {
        let (peers, peers6) = match http_service_compact_peers(&response.peers) {
            Ok(encoded) => encoded,
            Err(error) => {
                error!("[HTTP] Unable to encode compact peers: {error}");
                return http_service_failure(&TrackerError::Generic);
            }
        };
        return HttpResponse::Ok().content_type(ContentType::plaintext()).body(ben_map! {
                "interval" => ben_int!(response.interval as i64),
                "min interval" => ben_int!(response.min_interval as i64),
                "complete" => ben_int!(response.complete as i64),
                "incomplete" => ben_int!(response.incomplete as i64),
                "peers" => ben_bytes!(peers),
                "peers6" => ben_bytes!(peers6)
            }.encode());
    }

    let mut peers_list = ben_list!();
    if let Some(peers_list_mut) = peers_list.list_mut() {
        for peer in response.peers.iter() {
            let entry = match announce.no_peer_id {
                true => ben_map! {
                    "ip" => ben_bytes!(peer.peer_addr.ip().to_string()),
                    "port" => ben_int!(peer.peer_addr.port() as i64)
                },
                false => ben_map! {
                    "peer id" => ben_bytes!(peer.peer_id.0.to_vec()),
                    "ip" => ben_bytes!(peer.peer_addr.ip().to_string()),
                    "port" => ben_int!(peer.peer_addr.port() as i64)
                }
            };
            peers_list_mut.push(entry);
        }
    }
    HttpResponse::Ok().content_type(ContentType::plaintext()).body(ben_map! {
            "interval" => ben_int!(response.interval as i64),
            "min interval" => ben_int!(response.min_interval as i64),
            "complete" => ben_int!(response.complete as i64),
            "incomplete" => ben_int!(response.incomplete as i64),
            "peers" => peers_list
        }.encode())
}

/// Splits the peers into the BEP 23 IPv4 string and the BEP 7 IPv6 string.
pub fn http_service_compact_peers(peers: &[TorrentPeer]) -> std::io::Result<(Vec<u8>, Vec<u8>)>
{
    let mut peers4: Vec<u8> = Vec::new();
    let mut peers6: Vec<u8> = Vec::new();
    for peer in peers {
        match peer.peer_addr.ip() {
            IpAddr::V4(ip) => {
                peers4.write_u32::<BigEndian>(u32::from(ip))?;
                peers4.write_u16::<BigEndian>(peer.peer_addr.port())?;
            }
            IpAddr::V6(ip) => {
                peers6.write_u128::<BigEndian>(u128::from(ip))?;
                peers6.write_u16::<BigEndian>(peer.peer_addr.port())?;
            }
        }
    }
    Ok((peers4, peers6))
}

pub async fn http_service_scrape(request: HttpRequest, path: web::Path<String>, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let passkey = path.into_inner();

    let scrape = match Query::parse(request.query_string()).and_then(|query| ScrapeQueryRequest::from_query(&query)) {
        Ok(scrape) => scrape,
        Err(error) => return http_service_failure(&error)
    };

    let entries = match data.torrent_tracker.handle_scrape(&passkey, &scrape.info_hashes).await {
        Ok(entries) => entries,
        Err(error) => return http_service_failure(&error)
    };

    let mut files = ben_map!();
    if let Some(files_mut) = files.dict_mut() {
        for (info_hash, entry) in entries.iter() {
            files_mut.insert(Cow::from(info_hash.0.to_vec()), ben_map! {
                "complete" => ben_int!(entry.complete as i64),
                "downloaded" => ben_int!(entry.downloaded as i64),
                "incomplete" => ben_int!(entry.incomplete as i64)
            });
        }
    }
    HttpResponse::Ok().content_type(ContentType::plaintext()).body(ben_map! {
            "files" => files
        }.encode())
}

pub async fn http_service_not_found(request: HttpRequest) -> HttpResponse
{
    debug!("[HTTP] Unknown request {}", request.path());
    HttpResponse::NotFound().content_type(ContentType::plaintext()).body(ben_map! {
            "failure reason" => ben_bytes!("unknown request")
        }.encode())
}

pub fn http_service_failure(error: &TrackerError) -> HttpResponse
{
    if error.code() == 900 {
        error!("[HTTP] {error}");
    }
    HttpResponse::build(error.http_status()).content_type(ContentType::plaintext()).body(ben_map! {
            "failure reason" => ben_bytes!(error.message())
        }.encode())
}

/// Reads the proxy header holding the client address, if one is configured.
pub fn http_service_forwarded_for(request: &HttpRequest, real_ip: &str) -> Option<String>
{
    if real_ip.is_empty() {
        return None;
    }
    request.headers()
        .get(real_ip)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}

pub fn http_check_host_and_port_used(bind_address: &str) -> Result<(), CustomError>
{
    match TcpListener::bind(bind_address) {
        Ok(_) => Ok(()),
        Err(error) => Err(CustomError::new(&format!("Unable to bind to {bind_address}: {error}")))
    }
}
