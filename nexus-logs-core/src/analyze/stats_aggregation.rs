use crate::analyze::types::{PackageFormat, RequestRecord};
use std::collections::HashMap;

/// Running tallies for one pass over a log.
///
/// Counts only ever go up. Read them once the pass that produced them is done.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TrafficStats {
    repositories: HashMap<String, u64>,
    formats: HashMap<PackageFormat, u64>,
    clients: HashMap<PackageFormat, HashMap<String, u64>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientCount {
    pub address: String,
    pub count: u64,
}

impl TrafficStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one classified request into all three tallies.
    pub fn record(&mut self, request: &RequestRecord<'_>, format: PackageFormat) {
        self.record_repository(request.repository);
        self.record_format(format);
        self.record_client(format, request.client_address);
    }

    pub fn record_repository(&mut self, name: &str) {
        bump(&mut self.repositories, name);
    }

    pub fn record_format(&mut self, format: PackageFormat) {
        *self.formats.entry(format).or_insert(0) += 1;
    }

    pub fn record_client(&mut self, format: PackageFormat, address: &str) {
        bump(self.clients.entry(format).or_default(), address);
    }

    pub fn total_requests(&self) -> u64 {
        self.repositories.values().sum()
    }

    pub fn repository_count(&self, name: &str) -> u64 {
        self.repositories.get(name).copied().unwrap_or(0)
    }

    pub fn format_count(&self, format: PackageFormat) -> u64 {
        self.formats.get(&format).copied().unwrap_or(0)
    }

    pub fn client_count(&self, format: PackageFormat, address: &str) -> u64 {
        self.clients
            .get(&format)
            .and_then(|c| c.get(address))
            .copied()
            .unwrap_or(0)
    }

    /// Total requests attributed to a format, summed over its clients.
    pub fn format_client_total(&self, format: PackageFormat) -> u64 {
        self.clients
            .get(&format)
            .map(|c| c.values().sum())
            .unwrap_or(0)
    }

    /// Repositories, busiest first. Ties break on name.
    pub fn repositories_by_count(&self) -> Vec<(&str, u64)> {
        let mut out: Vec<_> = self
            .repositories
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
            .collect();
        out.sort_by(|(a_name, a), (b_name, b)| b.cmp(a).then_with(|| a_name.cmp(b_name)));
        out
    }

    /// Formats seen at least once, busiest first. Ties break on rule table
    /// order, with `Other` last.
    pub fn formats_by_count(&self) -> Vec<(PackageFormat, u64)> {
        let mut out: Vec<_> = self
            .formats
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(format, count)| (*format, *count))
            .collect();
        out.sort_by(|(a_fmt, a), (b_fmt, b)| b.cmp(a).then_with(|| a_fmt.cmp(b_fmt)));
        out
    }

    /// Up to `n` heaviest clients of a format. Ties break on address.
    pub fn top_clients(&self, format: PackageFormat, n: usize) -> Vec<ClientCount> {
        let Some(clients) = self.clients.get(&format) else {
            return Vec::new();
        };

        let mut out: Vec<_> = clients.iter().collect();
        out.sort_by(|(a_addr, a), (b_addr, b)| b.cmp(a).then_with(|| a_addr.cmp(b_addr)));

        out.into_iter()
            .take(n)
            .map(|(address, count)| ClientCount {
                address: address.clone(),
                count: *count,
            })
            .collect()
    }
}

fn bump(counts: &mut HashMap<String, u64>, key: &str) {
    match counts.get_mut(key) {
        Some(count) => *count += 1,
        None => {
            counts.insert(key.to_string(), 1);
        }
    }
}
