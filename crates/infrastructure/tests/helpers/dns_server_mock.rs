#![allow(dead_code)]
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// How the mock upstream reacts to every query it receives.
#[derive(Debug, Clone)]
pub enum MockAnswer {
    /// One A record for the question name.
    A(Ipv4Addr),
    /// A CNAME from the question name to `target`, then an A record for it.
    CnameThenA { target: String, addr: Ipv4Addr },
    /// Header-only answer with this response code (2 = SERVFAIL, 3 = NXDOMAIN).
    Rcode(u8),
    /// Correct answer carrying a different transaction ID.
    WrongId(Ipv4Addr),
    /// Never replies.
    Silent,
}

pub struct MockDnsServer {
    addr: SocketAddr,
    queries: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(answer: MockAnswer) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;
        let queries = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&queries);

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            counter.fetch_add(1, Ordering::SeqCst);
                            if let Some(response) = Self::build_response(&buf[..len], &answer) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    fn build_response(query: &[u8], answer: &MockAnswer) -> Option<Vec<u8>> {
        if query.len() < 12 || matches!(answer, MockAnswer::Silent) {
            return None;
        }

        let (rcode, ancount) = match answer {
            MockAnswer::A(_) | MockAnswer::WrongId(_) => (0u8, 1u8),
            MockAnswer::CnameThenA { .. } => (0, 2),
            MockAnswer::Rcode(code) => (*code, 0),
            MockAnswer::Silent => return None,
        };

        let mut response = Vec::with_capacity(512);

        if matches!(answer, MockAnswer::WrongId(_)) {
            response.extend_from_slice(&[query[0] ^ 0xff, query[1]]);
        } else {
            response.extend_from_slice(&query[0..2]);
        }
        response.push(0x81);
        response.push(0x80 | (rcode & 0x0f));
        response.extend_from_slice(&query[4..6]);
        response.extend_from_slice(&[0x00, ancount]);
        response.extend_from_slice(&[0x00, 0x00]);
        response.extend_from_slice(&[0x00, 0x00]);
        response.extend_from_slice(&query[12..]);

        match answer {
            MockAnswer::A(addr) | MockAnswer::WrongId(addr) => {
                Self::push_a(&mut response, [0xc0, 0x0c], *addr);
            }
            MockAnswer::CnameThenA { target, addr } => {
                let encoded = Self::encode_name(target);
                response.extend_from_slice(&[0xc0, 0x0c, 0x00, 0x05, 0x00, 0x01]);
                response.extend_from_slice(&[0x00, 0x00, 0x00, 0x3c]);
                response.extend_from_slice(&(encoded.len() as u16).to_be_bytes());
                let target_offset = response.len() as u16;
                response.extend_from_slice(&encoded);
                Self::push_a(&mut response, (0xc000 | target_offset).to_be_bytes(), *addr);
            }
            _ => {}
        }

        Some(response)
    }

    fn push_a(response: &mut Vec<u8>, name: [u8; 2], addr: Ipv4Addr) {
        response.extend_from_slice(&name);
        response.extend_from_slice(&[0x00, 0x01, 0x00, 0x01]);
        response.extend_from_slice(&[0x00, 0x00, 0x00, 0x3c]);
        response.extend_from_slice(&[0x00, 0x04]);
        response.extend_from_slice(&addr.octets());
    }

    fn encode_name(name: &str) -> Vec<u8> {
        let mut out = Vec::new();
        for label in name.split('.').filter(|l| !l.is_empty()) {
            out.push(label.len() as u8);
            out.extend_from_slice(label.as_bytes());
        }
        out.push(0);
        out
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
