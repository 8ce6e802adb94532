pub mod forwarding;
pub mod proxy;
pub mod transport;

pub use proxy::UpstreamProxy;
