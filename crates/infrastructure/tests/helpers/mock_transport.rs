#![allow(dead_code)]
use super::ResponseBuilder;
use async_trait::async_trait;
use rootwalk_domain::{normalize_name, DomainError};
use rootwalk_infrastructure::dns::transport::{DnsTransport, TransportResponse};
use rootwalk_infrastructure::dns::wire::Message;
use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Mutex;

type Build = Box<dyn Fn(ResponseBuilder) -> ResponseBuilder + Send + Sync>;
type Raw = Box<dyn Fn(&[u8]) -> Vec<u8> + Send + Sync>;

enum Reply {
    Build(Build),
    Raw(Raw),
    Fail(DomainError),
}

#[derive(Debug, Clone)]
pub struct Exchange {
    pub server: SocketAddr,
    pub name: String,
    pub bytes: Vec<u8>,
}

/// In-memory name servers keyed by address and, optionally, question name.
///
/// Exchanges with an address that has no matching route fail with a
/// transport error, so an unexpected query shows up as a failed lookup.
#[derive(Default)]
pub struct MockTransport {
    routes: Mutex<HashMap<(Ipv4Addr, Option<String>), Reply>>,
    log: Mutex<Vec<Exchange>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers queries for `name` at `server`.
    pub fn route<F>(&self, server: Ipv4Addr, name: &str, build: F)
    where
        F: Fn(ResponseBuilder) -> ResponseBuilder + Send + Sync + 'static,
    {
        self.insert(server, Some(name), Reply::Build(Box::new(build)));
    }

    /// Answers every query at `server`.
    pub fn route_any<F>(&self, server: Ipv4Addr, build: F)
    where
        F: Fn(ResponseBuilder) -> ResponseBuilder + Send + Sync + 'static,
    {
        self.insert(server, None, Reply::Build(Box::new(build)));
    }

    pub fn route_raw<F>(&self, server: Ipv4Addr, reply: F)
    where
        F: Fn(&[u8]) -> Vec<u8> + Send + Sync + 'static,
    {
        self.insert(server, None, Reply::Raw(Box::new(reply)));
    }

    pub fn fail(&self, server: Ipv4Addr, error: DomainError) {
        self.insert(server, None, Reply::Fail(error));
    }

    /// Servers queried so far, in order.
    pub fn visits(&self) -> Vec<Ipv4Addr> {
        self.exchanges()
            .iter()
            .filter_map(|e| match e.server.ip() {
                IpAddr::V4(ip) => Some(ip),
                IpAddr::V6(_) => None,
            })
            .collect()
    }

    pub fn exchanges(&self) -> Vec<Exchange> {
        self.log.lock().unwrap().clone()
    }

    fn insert(&self, server: Ipv4Addr, name: Option<&str>, reply: Reply) {
        self.routes
            .lock()
            .unwrap()
            .insert((server, name.map(normalize_name)), reply);
    }
}

#[async_trait]
impl DnsTransport for MockTransport {
    async fn exchange(
        &self,
        server: SocketAddr,
        message_bytes: &[u8],
    ) -> Result<TransportResponse, DomainError> {
        let query = Message::decode(message_bytes).unwrap();
        let name = query.question().map(|q| q.name.clone()).unwrap_or_default();

        self.log.lock().unwrap().push(Exchange {
            server,
            name: name.clone(),
            bytes: message_bytes.to_vec(),
        });

        let IpAddr::V4(ip) = server.ip() else {
            panic!("mock transport only serves IPv4 addresses");
        };

        let routes = self.routes.lock().unwrap();
        let reply = routes
            .get(&(ip, Some(normalize_name(&name))))
            .or_else(|| routes.get(&(ip, None)));

        let bytes = match reply {
            Some(Reply::Build(build)) => build(ResponseBuilder::for_query(message_bytes)).build(),
            Some(Reply::Raw(raw)) => raw(message_bytes),
            Some(Reply::Fail(error)) => return Err(error.clone()),
            None => {
                return Err(DomainError::Transport {
                    server: server.to_string(),
                    message: format!("no route for {}", name),
                })
            }
        };

        Ok(TransportResponse {
            bytes,
            protocol_used: "MOCK",
        })
    }

    fn protocol_name(&self) -> &'static str {
        "MOCK"
    }
}
