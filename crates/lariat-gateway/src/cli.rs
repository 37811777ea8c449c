use clap::Parser;
use std::net::SocketAddr;

pub const LISTEN_ADDR_ENV: &str = "LARIAT_GATEWAY_LISTEN_ADDR";
pub const WORKER_ID_ENV: &str = "LARIAT_GATEWAY_WORKER_ID";
pub const BASE_URL_ENV: &str = "LARIAT_GATEWAY_BASE_URL";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

#[derive(Debug, Parser)]
#[command(name = "lariat-gateway")]
pub struct Cli {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Worker index embedded in every generated identifier.
    ///
    /// Concurrently running instances must each be assigned a distinct value
    /// in [0, 1023]; nothing here enforces that assignment.
    #[arg(long, env = WORKER_ID_ENV, default_value_t = 1)]
    pub worker_id: u16,

    /// Public base URL used when rendering short links in responses.
    #[arg(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
}
