#![allow(dead_code)]

use async_trait::async_trait;
use rootwalk_application::ports::DnsResolver;
use rootwalk_domain::{DnsQuery, DomainError, Resolution};
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct MockDnsResolver {
    responses: Arc<Mutex<HashMap<String, Result<Resolution, DomainError>>>>,
    calls: Arc<Mutex<Vec<(String, Ipv4Addr)>>>,
}

impl MockDnsResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_addresses(&self, domain: &str, addresses: Vec<Ipv4Addr>) {
        let resolution = Resolution {
            domain: domain.into(),
            addresses,
            authoritative_server: Ipv4Addr::new(192, 0, 2, 53),
            round_trips: 1,
        };
        self.responses
            .lock()
            .unwrap()
            .insert(domain.to_string(), Ok(resolution));
    }

    pub fn set_error(&self, domain: &str, error: DomainError) {
        self.responses
            .lock()
            .unwrap()
            .insert(domain.to_string(), Err(error));
    }

    pub fn calls(&self) -> Vec<(String, Ipv4Addr)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DnsResolver for MockDnsResolver {
    async fn resolve(
        &self,
        query: &DnsQuery,
        start_server: Ipv4Addr,
    ) -> Result<Resolution, DomainError> {
        self.calls
            .lock()
            .unwrap()
            .push((query.domain.to_string(), start_server));

        self.responses
            .lock()
            .unwrap()
            .get(&*query.domain)
            .cloned()
            .unwrap_or_else(|| Err(DomainError::UnresolvedDomain(query.domain.to_string())))
    }
}
