//! Outbound HTTP: client construction and the transport seam used by the
//! status checker and the notifiers.

pub mod client;
pub mod transport;

pub use client::build_http_client;
pub use transport::{HttpReply, HttpTransport, JsonPost, ReqwestTransport};
