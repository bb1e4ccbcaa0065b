//! Wire constants for the hub's text protocol.

/// TCP port the hub accepts commands on.
pub const COMMAND_PORT: u16 = 10003;

/// Line terminator closing every command and reply.
pub const TERMINATOR: &str = "\r\n";

/// Queries the state of every light.
pub const GET_LIGHTS: &str = "GL\r\n";

/// Liveness probe.
pub const HEARTBEAT: &str = "HB\r\n";

/// The only acceptable reply to [`HEARTBEAT`].
pub const HEARTBEAT_ACK: &str = "HACK\r\n";

/// Prefix of a light control command.
pub const CONTROL_PREFIX: &str = "C ";

/// Light id addressing every light on the hub.
pub const BROADCAST_ID: &str = "G000";

/// Header tokens seen in front of a status reply, longest first.
pub const RESPONSE_HEADERS: [&str; 2] = ["GLB", "GL"];

/// Separator between light entries in a status reply.
pub const ENTRY_SEPARATOR: char = ';';

/// Separator between fields of an entry or a command.
pub const FIELD_SEPARATOR: char = ',';

/// Fields in one status entry: the id followed by eight integers.
pub const LIGHT_FIELD_COUNT: usize = 9;

/// SSDP multicast group and port the discovery query is sent to.
pub const SSDP_TARGET: &str = "239.255.255.250:1900";

/// Service type the hub answers discovery queries for.
pub const SERVICE_TYPE: &str = "yeelink:yeebox";

/// Marker preceding the hub address in a discovery reply.
pub const LOCATION_MARKER: &str = "LOCATION: ";

/// Marker following the hub address in a discovery reply.
pub const MAC_MARKER: &str = "MAC: ";

/// Builds the fixed discovery request for `service_type`.
pub fn search_request(service_type: &str) -> String {
    format!(
        "M-SEARCH * HTTP/1.1\r\n HOST:239.255.255.250:1900\r\n MAN:\"ssdp:discover\"\r\n ST:{}\r\n MAC:00000001\r\n MX:3\r\n\n\r\n",
        service_type
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_request() {
        let request = search_request(SERVICE_TYPE);
        assert!(request.starts_with("M-SEARCH * HTTP/1.1\r\n"));
        assert!(request.contains(" ST:yeelink:yeebox\r\n"));
        assert!(request.ends_with(" MX:3\r\n\n\r\n"));
    }
}
