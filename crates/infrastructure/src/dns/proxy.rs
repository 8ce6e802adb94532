use super::forwarding::{MessageBuilder, ResponseParser};
use super::transport::{DnsTransport, UdpTransport};
use async_trait::async_trait;
use ferrous_sd_application::ports::{DnsProxy, ProxyResponse};
use ferrous_sd_domain::config::UpstreamConfig;
use ferrous_sd_domain::{DomainError, QueryState, RecordClass, RecordType};
use hickory_proto::op::ResponseCode;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Forwards questions about foreign names to upstream resolvers, one at a
/// time in configured order.
///
/// A server that times out, fails to answer, answers garbage or returns a
/// server-side error code hands over to the next one. NXDOMAIN is final.
pub struct UpstreamProxy {
    transports: Vec<Arc<dyn DnsTransport>>,
    timeout: Duration,
}

impl UpstreamProxy {
    pub fn new(servers: &[SocketAddr], timeout: Duration) -> Self {
        let transports = servers
            .iter()
            .map(|addr| Arc::new(UdpTransport::new(*addr)) as Arc<dyn DnsTransport>)
            .collect();
        Self::with_transports(transports, timeout)
    }

    pub fn with_transports(transports: Vec<Arc<dyn DnsTransport>>, timeout: Duration) -> Self {
        Self {
            transports,
            timeout,
        }
    }

    pub fn from_config(config: &UpstreamConfig) -> Result<Self, DomainError> {
        let servers = config
            .servers
            .iter()
            .map(|s| {
                s.parse::<SocketAddr>()
                    .map_err(|e| DomainError::ConfigError(format!("upstream '{}': {}", s, e)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(
            &servers,
            Duration::from_millis(config.query_timeout_ms),
        ))
    }

    async fn exchange(
        &self,
        transport: &dyn DnsTransport,
        name: &str,
        record_type: RecordType,
        class: RecordClass,
    ) -> Result<ProxyResponse, DomainError> {
        let server = transport.server().to_string();
        let query = MessageBuilder::build_query(name, record_type, class)?;
        let response = transport.send(&query.bytes, self.timeout).await?;
        let parsed = ResponseParser::parse(&response.bytes)?;

        if parsed.id != query.id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "ID mismatch from {}: sent {}, got {}",
                server, query.id, parsed.id
            )));
        }
        if parsed.rcode != ResponseCode::NoError {
            return Err(DomainError::UpstreamRcode {
                server,
                rcode: ResponseParser::rcode_to_status(parsed.rcode).to_string(),
            });
        }

        Ok(ProxyResponse {
            answers: parsed.answers,
            upstream_server: Some(server),
        })
    }
}

#[async_trait]
impl DnsProxy for UpstreamProxy {
    async fn lookup(
        &self,
        state: &QueryState,
        name: &str,
        record_type: RecordType,
    ) -> Result<ProxyResponse, DomainError> {
        if self.transports.is_empty() {
            return Err(DomainError::NoUpstreamServers);
        }

        debug!(
            client_question = %state.name,
            name = %name,
            record_type = %record_type,
            class = %state.class,
            servers = self.transports.len(),
            "Forwarding to upstream"
        );

        for (index, transport) in self.transports.iter().enumerate() {
            match self.exchange(transport.as_ref(), name, record_type, state.class).await {
                Ok(response) => {
                    debug!(
                        server = ?response.upstream_server,
                        answers = response.answers.len(),
                        position = index,
                        "Upstream answered"
                    );
                    return Ok(response);
                }
                Err(e) if is_final(&e) => return Err(e),
                Err(e) => {
                    warn!(server = %transport.server(), error = %e, position = index, "Failing over");
                }
            }
        }

        Err(DomainError::TransportAllServersUnreachable)
    }
}

fn is_final(error: &DomainError) -> bool {
    matches!(error, DomainError::UpstreamRcode { rcode, .. } if rcode == "NXDOMAIN")
}
