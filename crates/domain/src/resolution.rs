use std::fmt;
use std::net::Ipv4Addr;
use std::sync::Arc;

/// Outcome of one top-level iterative lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub domain: Arc<str>,
    /// A-record addresses from the first server that answered, in wire order.
    pub addresses: Vec<Ipv4Addr>,
    /// Name server that supplied the answer.
    pub authoritative_server: Ipv4Addr,
    /// Round trips spent, including nested name-server lookups.
    pub round_trips: usize,
}

impl Resolution {
    /// Dotted-decimal renderings of `addresses`.
    pub fn address_literals(&self) -> Vec<String> {
        self.addresses.iter().map(|ip| ip.to_string()).collect()
    }

    pub fn first_address(&self) -> Option<Ipv4Addr> {
        self.addresses.first().copied()
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ->", self.domain)?;
        for ip in &self.addresses {
            write!(f, " {}", ip)?;
        }
        Ok(())
    }
}
