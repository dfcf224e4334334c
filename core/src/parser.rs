//! # Scan Output Parser
//!
//! Single pass over Nmap's normal output. Port lines are grouped under the
//! most recent `Nmap scan report for <host>` line.
//!
//! Port lines are recognized by substring (`/tcp` or `/udp` anywhere in the
//! line), not by grammar. A line such as `|_ see /tcp/notes for details`
//! therefore counts as a port line and yields a bogus port number.

use tracing::trace;

use nparse_common::report::{PortEntry, PortMap, PortState, StateFilter, Transport};

pub const HOST_MARKER: &str = "Nmap scan report for";

const TCP_MARK: &str = "/tcp";
const UDP_MARK: &str = "/udp";

/// Returns the host identifier if `line` is a host marker line.
///
/// `line` must already be trimmed. The identifier is the last
/// whitespace-separated token, so `Nmap scan report for web (10.0.0.5)`
/// yields `(10.0.0.5)`.
pub fn parse_host_marker(line: &str) -> Option<&str> {
    if !line.starts_with(HOST_MARKER) {
        return None;
    }
    line.split_whitespace().last()
}

/// Parses a `<port>/<transport> <state> <service>` line.
///
/// Returns `None` when the line lacks a `/tcp` or `/udp` substring or has
/// fewer than three tokens.
pub fn parse_port_line(line: &str) -> Option<PortEntry> {
    let fallback = if line.contains(TCP_MARK) {
        Transport::Tcp
    } else if line.contains(UDP_MARK) {
        Transport::Udp
    } else {
        return None;
    };

    let mut tokens = line.split_whitespace();
    let (Some(port), Some(state), Some(service)) = (tokens.next(), tokens.next(), tokens.next())
    else {
        trace!("skipping short port line: {line}");
        return None;
    };

    let (number, transport) = match port.split_once('/') {
        Some((number, rest)) => {
            let proto = rest.split('/').next().unwrap_or_default();
            (number, proto.parse().unwrap_or(fallback))
        }
        None => (port, fallback),
    };

    Some(PortEntry {
        number: number.to_string(),
        state: PortState::from(state),
        service: service.to_string(),
        transport,
    })
}

/// Groups port numbers by host, keeping only ports that pass `filter`.
pub fn parse_lines<I, S>(lines: I, filter: Option<StateFilter>) -> PortMap
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut map = PortMap::new();
    let mut current_host: Option<String> = None;

    for raw in lines {
        let line = raw.as_ref().trim();

        if let Some(host) = parse_host_marker(line) {
            map.announce(host);
            current_host = Some(host.to_string());
            continue;
        }

        let Some(host) = current_host.as_deref() else {
            continue;
        };
        if line.is_empty() {
            continue;
        }
        let Some(entry) = parse_port_line(line) else {
            continue;
        };

        if filter.is_none_or(|f| f.matches(&entry.state)) {
            trace!(
                "{host}: keeping {}/{} {} {}",
                entry.number, entry.transport, entry.state, entry.service
            );
            map.push_port(host, entry.number);
        }
    }

    map
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
