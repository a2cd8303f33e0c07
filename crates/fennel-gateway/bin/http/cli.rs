use clap::Parser;
use std::net::SocketAddr;

pub const LISTEN_ADDR_ENV: &str = "FENNEL_GATEWAY_LISTEN_ADDR";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Parser)]
#[command(name = "fennel-gateway")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,
}
