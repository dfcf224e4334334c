use nparse_common::report::{Host, PortMap};

/// Formats one host as `<host> -p <port>,<port>,...`.
pub fn host_line(host: &Host) -> String {
    format!("{} -p {}", host.id, host.ports.join(","))
}

/// Renders every host that kept at least one port, one line each.
pub fn render(map: &PortMap) -> String {
    map.non_empty()
        .map(|host| host_line(host) + "\n")
        .collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
