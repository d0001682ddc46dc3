//! Client modules for external API interactions

pub mod http_transport;
pub mod ip_client;

pub use http_transport::{HttpTransport, ReqwestTransport};
pub use ip_client::{IPIFY_URL, fetch_ip, parse_ip_response};
