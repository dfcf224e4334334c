//! Shared fixtures for the integration tests.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Normal output of a small `nmap -sS -sU` run against three hosts.
pub const SCAN_REPORT: &str = "\
# Nmap 7.94 scan initiated Wed May  1 10:00:00 2024 as: nmap -sS -sU -oN scan.txt 10.0.0.0/29
Nmap scan report for 10.0.0.1
Host is up (0.00042s latency).
Not shown: 995 closed tcp ports (reset)
PORT     STATE         SERVICE
22/tcp   open          ssh
80/tcp   open          http
111/tcp  filtered      rpcbind
443/tcp  closed        https
53/udp   open          domain
MAC Address: 52:54:00:12:34:56 (QEMU virtual NIC)

Nmap scan report for printer.lan (10.0.0.3)
Host is up (0.0011s latency).
All 1000 scanned ports on printer.lan (10.0.0.3) are in ignored states.

Nmap scan report for 10.0.0.5
Host is up (0.00090s latency).
PORT     STATE         SERVICE
3306/tcp closed        mysql
161/udp  open|filtered snmp

# Nmap done at Wed May  1 10:00:12 2024 -- 8 IP addresses (3 hosts up) scanned in 12.01 seconds
";

/// Temporary directory holding test files. Removed on drop.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    pub fn write(&self, name: &str, content: &str) -> anyhow::Result<PathBuf> {
        let path = self.path(name);
        fs::write(&path, content)?;
        Ok(path)
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}
