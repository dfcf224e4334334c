//! # Port Report Model
//!
//! Types describing what the report filter pulls out of scan output:
//! * A [`PortEntry`] is one parsed port line (number, state, service, transport).
//! * A [`PortMap`] is the insertion-ordered host -> port numbers result.
//! * A [`StateFilter`] narrows the result to a single port state.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// State column of a port line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PortState {
    Open,
    Closed,
    Filtered,
    /// Anything else the scanner reports, e.g. `open|filtered` or `unfiltered`.
    Other(String),
}

impl PortState {
    pub fn as_str(&self) -> &str {
        match self {
            PortState::Open => "open",
            PortState::Closed => "closed",
            PortState::Filtered => "filtered",
            PortState::Other(raw) => raw,
        }
    }
}

impl From<&str> for PortState {
    fn from(s: &str) -> Self {
        match s {
            "open" => PortState::Open,
            "closed" => PortState::Closed,
            "filtered" => PortState::Filtered,
            other => PortState::Other(other.to_string()),
        }
    }
}

impl fmt::Display for PortState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transport {
    Tcp,
    Udp,
}

impl FromStr for Transport {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tcp" => Ok(Transport::Tcp),
            "udp" => Ok(Transport::Udp),
            _ => Err(format!("unknown transport: {s}")),
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transport::Tcp => f.write_str("tcp"),
            Transport::Udp => f.write_str("udp"),
        }
    }
}

/// One port line, e.g. `22/tcp open ssh`.
///
/// The number is kept as the raw text before the first `/`. It is not
/// validated as numeric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortEntry {
    pub number: String,
    pub state: PortState,
    pub service: String,
    pub transport: Transport,
}

/// The three states a user can filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateFilter {
    Open,
    Closed,
    Filtered,
}

impl StateFilter {
    /// Picks a filter from the three command-line flags.
    ///
    /// Flags are checked in the order open, closed, filtered and the first
    /// one set wins. Setting several is not an error.
    pub fn from_flags(open: bool, closed: bool, filtered: bool) -> Option<Self> {
        if open {
            Some(StateFilter::Open)
        } else if closed {
            Some(StateFilter::Closed)
        } else if filtered {
            Some(StateFilter::Filtered)
        } else {
            None
        }
    }

    pub fn matches(&self, state: &PortState) -> bool {
        matches!(
            (self, state),
            (StateFilter::Open, PortState::Open)
                | (StateFilter::Closed, PortState::Closed)
                | (StateFilter::Filtered, PortState::Filtered)
        )
    }
}

impl fmt::Display for StateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateFilter::Open => f.write_str("open"),
            StateFilter::Closed => f.write_str("closed"),
            StateFilter::Filtered => f.write_str("filtered"),
        }
    }
}

/// A host and the port numbers kept for it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Host {
    pub id: String,
    pub ports: Vec<String>,
}

/// Insertion-ordered mapping from host identifier to port numbers.
///
/// Announcing a host that is already present clears its ports but keeps its
/// original position.
#[derive(Debug, Clone, Default)]
pub struct PortMap {
    hosts: Vec<Host>,
    index: HashMap<String, usize>,
}

impl PortMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fresh, empty port list for `id`.
    pub fn announce(&mut self, id: &str) {
        match self.index.get(id) {
            Some(&pos) => self.hosts[pos].ports.clear(),
            None => {
                self.index.insert(id.to_string(), self.hosts.len());
                self.hosts.push(Host {
                    id: id.to_string(),
                    ports: Vec::new(),
                });
            }
        }
    }

    /// Appends a port number to an announced host. Unknown hosts are ignored.
    pub fn push_port(&mut self, id: &str, number: String) {
        if let Some(&pos) = self.index.get(id) {
            self.hosts[pos].ports.push(number);
        }
    }

    pub fn get(&self, id: &str) -> Option<&[String]> {
        self.index
            .get(id)
            .map(|&pos| self.hosts[pos].ports.as_slice())
    }

    pub fn hosts(&self) -> impl Iterator<Item = &Host> {
        self.hosts.iter()
    }

    /// Hosts that would produce an output line.
    pub fn non_empty(&self) -> impl Iterator<Item = &Host> {
        self.hosts.iter().filter(|host| !host.ports.is_empty())
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
