// DO NOT EDIT, this is an auto-generated file
//
// Regenerate with `cargo xtask semconv <path-to-semantic-conventions>/model`.

//! Attributes of the `network`, `server`, `client`, `source`, `destination`, `peer`, `net`, `dns`, `tls` namespaces.

use crate::registry::{Deprecated::*, Entry, Stability::*};

/// Client address - domain name if available without reverse DNS lookup; otherwise, IP address or Unix domain socket name.
///
/// Type: `string`. Examples: `"client.example.com"`, `"10.1.2.80"`, `"/tmp/my.sock"`.
pub const CLIENT_ADDRESS: &str = "client.address";

/// Client port number.
///
/// Type: `int`. Examples: `65123`.
pub const CLIENT_PORT: &str = "client.port";

/// Destination address - domain name if available without reverse DNS lookup; otherwise, IP address or Unix domain socket name.
///
/// Type: `string`. Examples: `"destination.example.com"`, `"10.1.2.80"`, `"/tmp/my.sock"`.
#[cfg(feature = "semconv_experimental")]
pub const DESTINATION_ADDRESS: &str = "destination.address";

/// Destination port number
///
/// Type: `int`. Examples: `3389`, `2888`.
#[cfg(feature = "semconv_experimental")]
pub const DESTINATION_PORT: &str = "destination.port";

/// The list of IPv4 or IPv6 addresses resolved during DNS lookup.
///
/// Type: `string[]`. Examples: `["10.0.0.1", "2001:0db8:85a3:0000:0000:8a2e:0370:7334"]`.
#[cfg(feature = "semconv_experimental")]
pub const DNS_ANSWERS: &str = "dns.answers";

/// The name being queried.
///
/// Type: `string`. Examples: `"www.example.com"`, `"opentelemetry.io"`.
#[cfg(feature = "semconv_experimental")]
pub const DNS_QUESTION_NAME: &str = "dns.question.name";

/// Deprecated, use `network.local.address`.
///
/// Type: `string`. Examples: `"192.168.0.1"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `network.local.address`.")]
pub const NET_HOST_IP: &str = "net.host.ip";

/// Deprecated, use `server.address`.
///
/// Type: `string`. Examples: `"example.com"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `server.address`.")]
pub const NET_HOST_NAME: &str = "net.host.name";

/// Deprecated, use `server.port`.
///
/// Type: `int`. Examples: `8080`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `server.port`.")]
pub const NET_HOST_PORT: &str = "net.host.port";

/// Deprecated, use `network.peer.address`.
///
/// Type: `string`. Examples: `"127.0.0.1"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `network.peer.address`.")]
pub const NET_PEER_IP: &str = "net.peer.ip";

/// Deprecated, use `server.address` on client spans and `client.address` on server spans.
///
/// Type: `string`. Examples: `"example.com"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `server.address` on client spans and `client.address` on server spans.")]
pub const NET_PEER_NAME: &str = "net.peer.name";

/// Deprecated, use `server.port` on client spans and `client.port` on server spans.
///
/// Type: `int`. Examples: `8080`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `server.port` on client spans and `client.port` on server spans.")]
pub const NET_PEER_PORT: &str = "net.peer.port";

/// Deprecated, use `network.protocol.name`.
///
/// Type: `string`. Examples: `"amqp"`, `"http"`, `"mqtt"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `network.protocol.name`.")]
pub const NET_PROTOCOL_NAME: &str = "net.protocol.name";

/// Deprecated, use `network.protocol.version`.
///
/// Type: `string`. Examples: `"3.1.1"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `network.protocol.version`.")]
pub const NET_PROTOCOL_VERSION: &str = "net.protocol.version";

/// Deprecated, use `network.transport` and `network.type`.
///
/// Type: `string`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Split to `network.transport` and `network.type`.")]
pub const NET_SOCK_FAMILY: &str = "net.sock.family";

/// IPv4 address
#[cfg(feature = "semconv_experimental")]
pub const NET_SOCK_FAMILY_VALUE_INET: &str = "inet";

/// IPv6 address
#[cfg(feature = "semconv_experimental")]
pub const NET_SOCK_FAMILY_VALUE_INET6: &str = "inet6";

/// Unix domain socket path
#[cfg(feature = "semconv_experimental")]
pub const NET_SOCK_FAMILY_VALUE_UNIX: &str = "unix";

/// Deprecated, use `network.local.address`.
///
/// Type: `string`. Examples: `"/var/my.sock"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `network.local.address`.")]
pub const NET_SOCK_HOST_ADDR: &str = "net.sock.host.addr";

/// Deprecated, use `network.local.port`.
///
/// Type: `int`. Examples: `8080`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `network.local.port`.")]
pub const NET_SOCK_HOST_PORT: &str = "net.sock.host.port";

/// Deprecated, use `network.peer.address`.
///
/// Type: `string`. Examples: `"192.168.0.1"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `network.peer.address`.")]
pub const NET_SOCK_PEER_ADDR: &str = "net.sock.peer.addr";

/// Deprecated, no replacement at this time.
///
/// Type: `string`. Examples: `"/var/my.sock"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Removed. No replacement at this time.")]
pub const NET_SOCK_PEER_NAME: &str = "net.sock.peer.name";

/// Deprecated, use `network.peer.port`.
///
/// Type: `int`. Examples: `65531`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `network.peer.port`.")]
pub const NET_SOCK_PEER_PORT: &str = "net.sock.peer.port";

/// Deprecated, use `network.transport`.
///
/// Type: `string`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `network.transport`.")]
pub const NET_TRANSPORT: &str = "net.transport";

/// ip_tcp
#[cfg(feature = "semconv_experimental")]
pub const NET_TRANSPORT_VALUE_IP_TCP: &str = "ip_tcp";

/// ip_udp
#[cfg(feature = "semconv_experimental")]
pub const NET_TRANSPORT_VALUE_IP_UDP: &str = "ip_udp";

/// Named or anonymous pipe.
#[cfg(feature = "semconv_experimental")]
pub const NET_TRANSPORT_VALUE_PIPE: &str = "pipe";

/// In-process communication.
#[cfg(feature = "semconv_experimental")]
pub const NET_TRANSPORT_VALUE_INPROC: &str = "inproc";

/// Something else (non IP-based).
#[cfg(feature = "semconv_experimental")]
pub const NET_TRANSPORT_VALUE_OTHER: &str = "other";

/// The ISO 3166-1 alpha-2 2-character country code associated with the mobile carrier network.
///
/// Type: `string`. Examples: `"DE"`.
#[cfg(feature = "semconv_experimental")]
pub const NETWORK_CARRIER_ICC: &str = "network.carrier.icc";

/// The mobile carrier country code.
///
/// Type: `string`. Examples: `"310"`.
#[cfg(feature = "semconv_experimental")]
pub const NETWORK_CARRIER_MCC: &str = "network.carrier.mcc";

/// The mobile carrier network code.
///
/// Type: `string`. Examples: `"001"`.
#[cfg(feature = "semconv_experimental")]
pub const NETWORK_CARRIER_MNC: &str = "network.carrier.mnc";

/// The name of the mobile carrier.
///
/// Type: `string`. Examples: `"sprint"`.
#[cfg(feature = "semconv_experimental")]
pub const NETWORK_CARRIER_NAME: &str = "network.carrier.name";

/// The state of network connection
///
/// Type: `string`. Examples: `"close_wait"`.
#[cfg(feature = "semconv_experimental")]
pub const NETWORK_CONNECTION_STATE: &str = "network.connection.state";

/// closed
#[cfg(feature = "semconv_experimental")]
pub const NETWORK_CONNECTION_STATE_VALUE_CLOSED: &str = "closed";

/// close_wait
#[cfg(feature = "semconv_experimental")]
pub const NETWORK_CONNECTION_STATE_VALUE_CLOSE_WAIT: &str = "close_wait";

/// closing
#[cfg(feature = "semconv_experimental")]
pub const NETWORK_CONNECTION_STATE_VALUE_CLOSING: &str = "closing";

/// established
#[cfg(feature = "semconv_experimental")]
pub const NETWORK_CONNECTION_STATE_VALUE_ESTABLISHED: &str = "established";

/// fin_wait_1
#[cfg(feature = "semconv_experimental")]
pub const NETWORK_CONNECTION_STATE_VALUE_FIN_WAIT_1: &str = "fin_wait_1";

/// fin_wait_2
#[cfg(feature = "semconv_experimental")]
pub const NETWORK_CONNECTION_STATE_VALUE_FIN_WAIT_2: &str = "fin_wait_2";

/// last_ack
#[cfg(feature = "semconv_experimental")]
pub const NETWORK_CONNECTION_STATE_VALUE_LAST_ACK: &str = "last_ack";

/// listen
#[cfg(feature = "semconv_experimental")]
pub const NETWORK_CONNECTION_STATE_VALUE_LISTEN: &str = "listen";

/// syn_received
#[cfg(feature = "semconv_experimental")]
pub const NETWORK_CONNECTION_STATE_VALUE_SYN_RECEIVED: &str = "syn_received";

/// syn_sent
#[cfg(feature = "semconv_experimental")]
pub const NETWORK_CONNECTION_STATE_VALUE_SYN_SENT: &str = "syn_sent";

/// time_wait
#[cfg(feature = "semconv_experimental")]
pub const NETWORK_CONNECTION_STATE_VALUE_TIME_WAIT: &str = "time_wait";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`NETWORK_CONNECTION_STATE`].
    NetworkConnectionState for NETWORK_CONNECTION_STATE {
        /// closed
        Closed = "closed",
        /// close_wait
        CloseWait = "close_wait",
        /// closing
        Closing = "closing",
        /// established
        Established = "established",
        /// fin_wait_1
        FinWait1 = "fin_wait_1",
        /// fin_wait_2
        FinWait2 = "fin_wait_2",
        /// last_ack
        LastAck = "last_ack",
        /// listen
        Listen = "listen",
        /// syn_received
        SynReceived = "syn_received",
        /// syn_sent
        SynSent = "syn_sent",
        /// time_wait
        TimeWait = "time_wait",
    }
}

/// This describes more details regarding the connection.type. It may be the type of cell technology connection, but it could be used for describing details about a wifi connection.
///
/// Type: `string`. Examples: `"LTE"`.
#[cfg(feature = "semconv_experimental")]
pub const NETWORK_CONNECTION_SUBTYPE: &str = "network.connection.subtype";

/// GPRS
#[cfg(feature = "semconv_experimental")]
pub const NETWORK_CONNECTION_SUBTYPE_VALUE_GPRS: &str = "gprs";

/// EDGE
#[cfg(feature = "semconv_experimental")]
pub const NETWORK_CONNECTION_SUBTYPE_VALUE_EDGE: &str = "edge";

/// UMTS
#[cfg(feature = "semconv_experimental")]
pub const NETWORK_CONNECTION_SUBTYPE_VALUE_UMTS: &str = "umts";

/// CDMA
#[cfg(feature = "semconv_experimental")]
pub const NETWORK_CONNECTION_SUBTYPE_VALUE_CDMA: &str = "cdma";

/// EVDO Rel. 0
#[cfg(feature = "semconv_experimental")]
pub const NETWORK_CONNECTION_SUBTYPE_VALUE_EVDO_0: &str = "evdo_0";

/// EVDO Rev. A
#[cfg(feature = "semconv_experimental")]
pub const NETWORK_CONNECTION_SUBTYPE_VALUE_EVDO_A: &str = "evdo_a";

/// CDMA2000 1XRTT
#[cfg(feature = "semconv_experimental")]
pub const NETWORK_CONNECTION_SUBTYPE_VALUE_CDMA2000_1XRTT: &str = "cdma2000_1xrtt";

/// HSDPA
#[cfg(feature = "semconv_experimental")]
pub const NETWORK_CONNECTION_SUBTYPE_VALUE_HSDPA: &str = "hsdpa";

/// HSUPA
#[cfg(feature = "semconv_experimental")]
pub const NETWORK_CONNECTION_SUBTYPE_VALUE_HSUPA: &str = "hsupa";

/// HSPA
#[cfg(feature = "semconv_experimental")]
pub const NETWORK_CONNECTION_SUBTYPE_VALUE_HSPA: &str = "hspa";

/// IDEN
#[cfg(feature = "semconv_experimental")]
pub const NETWORK_CONNECTION_SUBTYPE_VALUE_IDEN: &str = "iden";

/// EVDO Rev. B
#[cfg(feature = "semconv_experimental")]
pub const NETWORK_CONNECTION_SUBTYPE_VALUE_EVDO_B: &str = "evdo_b";

/// LTE
#[cfg(feature = "semconv_experimental")]
pub const NETWORK_CONNECTION_SUBTYPE_VALUE_LTE: &str = "lte";

/// EHRPD
#[cfg(feature = "semconv_experimental")]
pub const NETWORK_CONNECTION_SUBTYPE_VALUE_EHRPD: &str = "ehrpd";

/// HSPAP
#[cfg(feature = "semconv_experimental")]
pub const NETWORK_CONNECTION_SUBTYPE_VALUE_HSPAP: &str = "hspap";

/// GSM
#[cfg(feature = "semconv_experimental")]
pub const NETWORK_CONNECTION_SUBTYPE_VALUE_GSM: &str = "gsm";

/// TD-SCDMA
#[cfg(feature = "semconv_experimental")]
pub const NETWORK_CONNECTION_SUBTYPE_VALUE_TD_SCDMA: &str = "td_scdma";

/// IWLAN
#[cfg(feature = "semconv_experimental")]
pub const NETWORK_CONNECTION_SUBTYPE_VALUE_IWLAN: &str = "iwlan";

/// 5G NR (New Radio)
#[cfg(feature = "semconv_experimental")]
pub const NETWORK_CONNECTION_SUBTYPE_VALUE_NR: &str = "nr";

/// 5G NRNSA (New Radio Non-Standalone)
#[cfg(feature = "semconv_experimental")]
pub const NETWORK_CONNECTION_SUBTYPE_VALUE_NRNSA: &str = "nrnsa";

/// LTE CA
#[cfg(feature = "semconv_experimental")]
pub const NETWORK_CONNECTION_SUBTYPE_VALUE_LTE_CA: &str = "lte_ca";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`NETWORK_CONNECTION_SUBTYPE`].
    NetworkConnectionSubtype for NETWORK_CONNECTION_SUBTYPE {
        /// GPRS
        Gprs = "gprs",
        /// EDGE
        Edge = "edge",
        /// UMTS
        Umts = "umts",
        /// CDMA
        Cdma = "cdma",
        /// EVDO Rel. 0
        Evdo0 = "evdo_0",
        /// EVDO Rev. A
        EvdoA = "evdo_a",
        /// CDMA2000 1XRTT
        Cdma20001xrtt = "cdma2000_1xrtt",
        /// HSDPA
        Hsdpa = "hsdpa",
        /// HSUPA
        Hsupa = "hsupa",
        /// HSPA
        Hspa = "hspa",
        /// IDEN
        Iden = "iden",
        /// EVDO Rev. B
        EvdoB = "evdo_b",
        /// LTE
        Lte = "lte",
        /// EHRPD
        Ehrpd = "ehrpd",
        /// HSPAP
        Hspap = "hspap",
        /// GSM
        Gsm = "gsm",
        /// TD-SCDMA
        TdScdma = "td_scdma",
        /// IWLAN
        Iwlan = "iwlan",
        /// 5G NR (New Radio)
        Nr = "nr",
        /// 5G NRNSA (New Radio Non-Standalone)
        Nrnsa = "nrnsa",
        /// LTE CA
        LteCa = "lte_ca",
    }
}

/// The internet connection type.
///
/// Type: `string`. Examples: `"wifi"`.
#[cfg(feature = "semconv_experimental")]
pub const NETWORK_CONNECTION_TYPE: &str = "network.connection.type";

/// wifi
#[cfg(feature = "semconv_experimental")]
pub const NETWORK_CONNECTION_TYPE_VALUE_WIFI: &str = "wifi";

/// wired
#[cfg(feature = "semconv_experimental")]
pub const NETWORK_CONNECTION_TYPE_VALUE_WIRED: &str = "wired";

/// cell
#[cfg(feature = "semconv_experimental")]
pub const NETWORK_CONNECTION_TYPE_VALUE_CELL: &str = "cell";

/// unavailable
#[cfg(feature = "semconv_experimental")]
pub const NETWORK_CONNECTION_TYPE_VALUE_UNAVAILABLE: &str = "unavailable";

/// unknown
#[cfg(feature = "semconv_experimental")]
pub const NETWORK_CONNECTION_TYPE_VALUE_UNKNOWN: &str = "unknown";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`NETWORK_CONNECTION_TYPE`].
    NetworkConnectionType for NETWORK_CONNECTION_TYPE {
        /// wifi
        Wifi = "wifi",
        /// wired
        Wired = "wired",
        /// cell
        Cell = "cell",
        /// unavailable
        Unavailable = "unavailable",
        /// unknown
        Unknown = "unknown",
    }
}

/// The network interface name.
///
/// Type: `string`. Examples: `"lo"`, `"eth0"`.
#[cfg(feature = "semconv_experimental")]
pub const NETWORK_INTERFACE_NAME: &str = "network.interface.name";

/// The network IO operation direction.
///
/// Type: `string`. Examples: `"transmit"`.
#[cfg(feature = "semconv_experimental")]
pub const NETWORK_IO_DIRECTION: &str = "network.io.direction";

/// transmit
#[cfg(feature = "semconv_experimental")]
pub const NETWORK_IO_DIRECTION_VALUE_TRANSMIT: &str = "transmit";

/// receive
#[cfg(feature = "semconv_experimental")]
pub const NETWORK_IO_DIRECTION_VALUE_RECEIVE: &str = "receive";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`NETWORK_IO_DIRECTION`].
    NetworkIoDirection for NETWORK_IO_DIRECTION {
        /// transmit
        Transmit = "transmit",
        /// receive
        Receive = "receive",
    }
}

/// Local address of the network connection - IP address or Unix domain socket name.
///
/// Type: `string`. Examples: `"10.1.2.80"`, `"/tmp/my.sock"`.
pub const NETWORK_LOCAL_ADDRESS: &str = "network.local.address";

/// Local port number of the network connection.
///
/// Type: `int`. Examples: `65123`.
pub const NETWORK_LOCAL_PORT: &str = "network.local.port";

/// Peer address of the network connection - IP address or Unix domain socket name.
///
/// Type: `string`. Examples: `"10.1.2.80"`, `"/tmp/my.sock"`.
pub const NETWORK_PEER_ADDRESS: &str = "network.peer.address";

/// Peer port number of the network connection.
///
/// Type: `int`. Examples: `65123`.
pub const NETWORK_PEER_PORT: &str = "network.peer.port";

/// [OSI application layer](https://wikipedia.org/wiki/Application_layer) or non-OSI equivalent.
///
/// Type: `string`. Examples: `"amqp"`, `"http"`, `"mqtt"`.
pub const NETWORK_PROTOCOL_NAME: &str = "network.protocol.name";

/// The actual version of the protocol used for network communication.
///
/// Type: `string`. Examples: `"1.1"`, `"2"`.
pub const NETWORK_PROTOCOL_VERSION: &str = "network.protocol.version";

/// [OSI transport layer](https://wikipedia.org/wiki/Transport_layer) or [inter-process communication method](https://wikipedia.org/wiki/Inter-process_communication).
///
/// Type: `string`. Examples: `"tcp"`, `"udp"`.
pub const NETWORK_TRANSPORT: &str = "network.transport";

/// TCP
pub const NETWORK_TRANSPORT_VALUE_TCP: &str = "tcp";

/// UDP
pub const NETWORK_TRANSPORT_VALUE_UDP: &str = "udp";

/// Named or anonymous pipe.
pub const NETWORK_TRANSPORT_VALUE_PIPE: &str = "pipe";

/// Unix domain socket
pub const NETWORK_TRANSPORT_VALUE_UNIX: &str = "unix";

/// QUIC
#[cfg(feature = "semconv_experimental")]
pub const NETWORK_TRANSPORT_VALUE_QUIC: &str = "quic";

semconv_enum! {
    /// Values of [`NETWORK_TRANSPORT`].
    NetworkTransport for NETWORK_TRANSPORT {
        /// TCP
        Tcp = "tcp",
        /// UDP
        Udp = "udp",
        /// Named or anonymous pipe.
        Pipe = "pipe",
        /// Unix domain socket
        Unix = "unix",
        /// QUIC
        Quic = "quic",
    }
}

/// [OSI network layer](https://wikipedia.org/wiki/Network_layer) or non-OSI equivalent.
///
/// Type: `string`. Examples: `"ipv4"`, `"ipv6"`.
pub const NETWORK_TYPE: &str = "network.type";

/// IPv4
pub const NETWORK_TYPE_VALUE_IPV4: &str = "ipv4";

/// IPv6
pub const NETWORK_TYPE_VALUE_IPV6: &str = "ipv6";

semconv_enum! {
    /// Values of [`NETWORK_TYPE`].
    NetworkType for NETWORK_TYPE {
        /// IPv4
        Ipv4 = "ipv4",
        /// IPv6
        Ipv6 = "ipv6",
    }
}

/// The [`service.name`](/docs/resource/README.md#service) of the remote service. SHOULD be equal to the actual `service.name` resource attribute of the remote service if any.
///
/// Type: `string`. Examples: `"AuthTokenCache"`.
#[cfg(feature = "semconv_experimental")]
pub const PEER_SERVICE: &str = "peer.service";

/// Server domain name if available without reverse DNS lookup; otherwise, IP address or Unix domain socket name.
///
/// Type: `string`. Examples: `"example.com"`, `"10.1.2.80"`, `"/tmp/my.sock"`.
pub const SERVER_ADDRESS: &str = "server.address";

/// Server port number.
///
/// Type: `int`. Examples: `80`, `8080`, `443`.
pub const SERVER_PORT: &str = "server.port";

/// Source address - domain name if available without reverse DNS lookup; otherwise, IP address or Unix domain socket name.
///
/// Type: `string`. Examples: `"source.example.com"`, `"10.1.2.80"`, `"/tmp/my.sock"`.
#[cfg(feature = "semconv_experimental")]
pub const SOURCE_ADDRESS: &str = "source.address";

/// Source port number
///
/// Type: `int`. Examples: `3389`, `2888`.
#[cfg(feature = "semconv_experimental")]
pub const SOURCE_PORT: &str = "source.port";

/// String indicating the [cipher](https://datatracker.ietf.org/doc/html/rfc5246#appendix-A.5) used during the current connection.
///
/// Type: `string`. Examples: `"TLS_RSA_WITH_3DES_EDE_CBC_SHA"`, `"TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA256"`.
#[cfg(feature = "semconv_experimental")]
pub const TLS_CIPHER: &str = "tls.cipher";

/// PEM-encoded stand-alone certificate offered by the client. This is usually mutually-exclusive of `client.certificate_chain` since this value also exists in that list.
///
/// Type: `string`. Examples: `"MII..."`.
#[cfg(feature = "semconv_experimental")]
pub const TLS_CLIENT_CERTIFICATE: &str = "tls.client.certificate";

/// Array of PEM-encoded certificates that make up the certificate chain offered by the client. This is usually mutually-exclusive of `client.certificate` since that value should be the first certificate in the chain.
///
/// Type: `string[]`. Examples: `["MII...", "MI..."]`.
#[cfg(feature = "semconv_experimental")]
pub const TLS_CLIENT_CERTIFICATE_CHAIN: &str = "tls.client.certificate_chain";

/// Certificate fingerprint using the MD5 digest of DER-encoded version of certificate offered by the client. For consistency with other hash values, this value should be formatted as an uppercase hash.
///
/// Type: `string`. Examples: `"0F76C7F2C55BFD7D8E8B8F4BFBF0C9EC"`.
#[cfg(feature = "semconv_experimental")]
pub const TLS_CLIENT_HASH_MD5: &str = "tls.client.hash.md5";

/// Certificate fingerprint using the SHA1 digest of DER-encoded version of certificate offered by the client. For consistency with other hash values, this value should be formatted as an uppercase hash.
///
/// Type: `string`. Examples: `"9E393D93138888D288266C2D915214D1D1CCEB2A"`.
#[cfg(feature = "semconv_experimental")]
pub const TLS_CLIENT_HASH_SHA1: &str = "tls.client.hash.sha1";

/// Certificate fingerprint using the SHA256 digest of DER-encoded version of certificate offered by the client. For consistency with other hash values, this value should be formatted as an uppercase hash.
///
/// Type: `string`. Examples: `"0687F666A054EF17A08E2F2162EAB4CBC0D265E1D7875BE74BF3C712CA92DAF0"`.
#[cfg(feature = "semconv_experimental")]
pub const TLS_CLIENT_HASH_SHA256: &str = "tls.client.hash.sha256";

/// Distinguished name of [subject](https://datatracker.ietf.org/doc/html/rfc5280#section-4.1.2.6) of the issuer of the x.509 certificate presented by the client.
///
/// Type: `string`. Examples: `"CN=Example Root CA, OU=Infrastructure Team, DC=example, DC=com"`.
#[cfg(feature = "semconv_experimental")]
pub const TLS_CLIENT_ISSUER: &str = "tls.client.issuer";

/// A hash that identifies clients based on how they perform an SSL/TLS handshake.
///
/// Type: `string`. Examples: `"d4e5b18d6b55c71272893221c96ba240"`.
#[cfg(feature = "semconv_experimental")]
pub const TLS_CLIENT_JA3: &str = "tls.client.ja3";

/// Date/Time indicating when client certificate is no longer considered valid.
///
/// Type: `string`. Examples: `"2021-01-01T00:00:00.000Z"`.
#[cfg(feature = "semconv_experimental")]
pub const TLS_CLIENT_NOT_AFTER: &str = "tls.client.not_after";

/// Date/Time indicating when client certificate is first considered valid.
///
/// Type: `string`. Examples: `"1970-01-01T00:00:00.000Z"`.
#[cfg(feature = "semconv_experimental")]
pub const TLS_CLIENT_NOT_BEFORE: &str = "tls.client.not_before";

/// Deprecated, use `server.address` instead.
///
/// Type: `string`. Examples: `"opentelemetry.io"`.
#[cfg(feature = "semconv_experimental")]
#[deprecated(note = "Replaced by `server.address`.")]
pub const TLS_CLIENT_SERVER_NAME: &str = "tls.client.server_name";

/// Distinguished name of subject of the x.509 certificate presented by the client.
///
/// Type: `string`. Examples: `"CN=myclient, OU=Documentation Team, DC=example, DC=com"`.
#[cfg(feature = "semconv_experimental")]
pub const TLS_CLIENT_SUBJECT: &str = "tls.client.subject";

/// Array of ciphers offered by the client during the client hello.
///
/// Type: `string[]`. Examples: `["TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384", "TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384"]`.
#[cfg(feature = "semconv_experimental")]
pub const TLS_CLIENT_SUPPORTED_CIPHERS: &str = "tls.client.supported_ciphers";

/// String indicating the curve used for the given cipher, when applicable
///
/// Type: `string`. Examples: `"secp256r1"`.
#[cfg(feature = "semconv_experimental")]
pub const TLS_CURVE: &str = "tls.curve";

/// Boolean flag indicating if the TLS negotiation was successful and transitioned to an encrypted tunnel.
///
/// Type: `boolean`. Examples: `true`.
#[cfg(feature = "semconv_experimental")]
pub const TLS_ESTABLISHED: &str = "tls.established";

/// String indicating the protocol being tunneled. Per the values in the [IANA registry](https://www.iana.org/assignments/tls-extensiontype-values/tls-extensiontype-values.xhtml#alpn-protocol-ids), this string should be lower case.
///
/// Type: `string`. Examples: `"http/1.1"`.
#[cfg(feature = "semconv_experimental")]
pub const TLS_NEXT_PROTOCOL: &str = "tls.next_protocol";

/// Normalized lowercase protocol name parsed from original string of the negotiated [SSL/TLS protocol version](https://docs.openssl.org/1.1.1/man3/SSL_get_version/#return-values)
///
/// Type: `string`.
#[cfg(feature = "semconv_experimental")]
pub const TLS_PROTOCOL_NAME: &str = "tls.protocol.name";

/// ssl
#[cfg(feature = "semconv_experimental")]
pub const TLS_PROTOCOL_NAME_VALUE_SSL: &str = "ssl";

/// tls
#[cfg(feature = "semconv_experimental")]
pub const TLS_PROTOCOL_NAME_VALUE_TLS: &str = "tls";

#[cfg(feature = "semconv_experimental")]
semconv_enum! {
    /// Values of [`TLS_PROTOCOL_NAME`].
    TlsProtocolName for TLS_PROTOCOL_NAME {
        /// ssl
        Ssl = "ssl",
        /// tls
        Tls = "tls",
    }
}

/// Numeric part of the version parsed from the original string of the negotiated [SSL/TLS protocol version](https://docs.openssl.org/1.1.1/man3/SSL_get_version/#return-values)
///
/// Type: `string`. Examples: `"1.2"`, `"3"`.
#[cfg(feature = "semconv_experimental")]
pub const TLS_PROTOCOL_VERSION: &str = "tls.protocol.version";

/// Boolean flag indicating if this TLS connection was resumed from an existing TLS negotiation.
///
/// Type: `boolean`. Examples: `true`.
#[cfg(feature = "semconv_experimental")]
pub const TLS_RESUMED: &str = "tls.resumed";

/// PEM-encoded stand-alone certificate offered by the server. This is usually mutually-exclusive of `server.certificate_chain` since this value also exists in that list.
///
/// Type: `string`. Examples: `"MII..."`.
#[cfg(feature = "semconv_experimental")]
pub const TLS_SERVER_CERTIFICATE: &str = "tls.server.certificate";

/// Array of PEM-encoded certificates that make up the certificate chain offered by the server. This is usually mutually-exclusive of `server.certificate` since that value should be the first certificate in the chain.
///
/// Type: `string[]`. Examples: `["MII...", "MI..."]`.
#[cfg(feature = "semconv_experimental")]
pub const TLS_SERVER_CERTIFICATE_CHAIN: &str = "tls.server.certificate_chain";

/// Certificate fingerprint using the MD5 digest of DER-encoded version of certificate offered by the server. For consistency with other hash values, this value should be formatted as an uppercase hash.
///
/// Type: `string`. Examples: `"0F76C7F2C55BFD7D8E8B8F4BFBF0C9EC"`.
#[cfg(feature = "semconv_experimental")]
pub const TLS_SERVER_HASH_MD5: &str = "tls.server.hash.md5";

/// Certificate fingerprint using the SHA1 digest of DER-encoded version of certificate offered by the server. For consistency with other hash values, this value should be formatted as an uppercase hash.
///
/// Type: `string`. Examples: `"9E393D93138888D288266C2D915214D1D1CCEB2A"`.
#[cfg(feature = "semconv_experimental")]
pub const TLS_SERVER_HASH_SHA1: &str = "tls.server.hash.sha1";

/// Certificate fingerprint using the SHA256 digest of DER-encoded version of certificate offered by the server. For consistency with other hash values, this value should be formatted as an uppercase hash.
///
/// Type: `string`. Examples: `"0687F666A054EF17A08E2F2162EAB4CBC0D265E1D7875BE74BF3C712CA92DAF0"`.
#[cfg(feature = "semconv_experimental")]
pub const TLS_SERVER_HASH_SHA256: &str = "tls.server.hash.sha256";

/// Distinguished name of [subject](https://datatracker.ietf.org/doc/html/rfc5280#section-4.1.2.6) of the issuer of the x.509 certificate presented by the client.
///
/// Type: `string`. Examples: `"CN=Example Root CA, OU=Infrastructure Team, DC=example, DC=com"`.
#[cfg(feature = "semconv_experimental")]
pub const TLS_SERVER_ISSUER: &str = "tls.server.issuer";

/// A hash that identifies servers based on how they perform an SSL/TLS handshake.
///
/// Type: `string`. Examples: `"d4e5b18d6b55c71272893221c96ba240"`.
#[cfg(feature = "semconv_experimental")]
pub const TLS_SERVER_JA3S: &str = "tls.server.ja3s";

/// Date/Time indicating when server certificate is no longer considered valid.
///
/// Type: `string`. Examples: `"2021-01-01T00:00:00.000Z"`.
#[cfg(feature = "semconv_experimental")]
pub const TLS_SERVER_NOT_AFTER: &str = "tls.server.not_after";

/// Date/Time indicating when server certificate is first considered valid.
///
/// Type: `string`. Examples: `"1970-01-01T00:00:00.000Z"`.
#[cfg(feature = "semconv_experimental")]
pub const TLS_SERVER_NOT_BEFORE: &str = "tls.server.not_before";

/// Distinguished name of subject of the x.509 certificate presented by the server.
///
/// Type: `string`. Examples: `"CN=myserver, OU=Documentation Team, DC=example, DC=com"`.
#[cfg(feature = "semconv_experimental")]
pub const TLS_SERVER_SUBJECT: &str = "tls.server.subject";

pub(crate) static ENTRIES: &[Entry] = &[
    Entry::attribute("CLIENT_ADDRESS", "client.address", Stable),
    Entry::attribute("CLIENT_PORT", "client.port", Stable),
    Entry::attribute("DESTINATION_ADDRESS", "destination.address", Experimental),
    Entry::attribute("DESTINATION_PORT", "destination.port", Experimental),
    Entry::attribute("DNS_ANSWERS", "dns.answers", Experimental),
    Entry::attribute("DNS_QUESTION_NAME", "dns.question.name", Experimental),
    Entry::attribute("NET_HOST_IP", "net.host.ip", Experimental)
        .deprecated(Renamed("network.local.address")),
    Entry::attribute("NET_HOST_NAME", "net.host.name", Experimental)
        .deprecated(Renamed("server.address")),
    Entry::attribute("NET_HOST_PORT", "net.host.port", Experimental)
        .deprecated(Renamed("server.port")),
    Entry::attribute("NET_PEER_IP", "net.peer.ip", Experimental)
        .deprecated(Renamed("network.peer.address")),
    Entry::attribute("NET_PEER_NAME", "net.peer.name", Experimental).deprecated(Uncategorized),
    Entry::attribute("NET_PEER_PORT", "net.peer.port", Experimental).deprecated(Uncategorized),
    Entry::attribute("NET_PROTOCOL_NAME", "net.protocol.name", Experimental)
        .deprecated(Renamed("network.protocol.name")),
    Entry::attribute("NET_PROTOCOL_VERSION", "net.protocol.version", Experimental)
        .deprecated(Renamed("network.protocol.version")),
    Entry::attribute("NET_SOCK_FAMILY", "net.sock.family", Experimental).deprecated(Uncategorized),
    Entry::value("NET_SOCK_FAMILY_VALUE_INET", "net.sock.family", "inet", Experimental),
    Entry::value("NET_SOCK_FAMILY_VALUE_INET6", "net.sock.family", "inet6", Experimental),
    Entry::value("NET_SOCK_FAMILY_VALUE_UNIX", "net.sock.family", "unix", Experimental),
    Entry::attribute("NET_SOCK_HOST_ADDR", "net.sock.host.addr", Experimental)
        .deprecated(Renamed("network.local.address")),
    Entry::attribute("NET_SOCK_HOST_PORT", "net.sock.host.port", Experimental)
        .deprecated(Renamed("network.local.port")),
    Entry::attribute("NET_SOCK_PEER_ADDR", "net.sock.peer.addr", Experimental)
        .deprecated(Renamed("network.peer.address")),
    Entry::attribute("NET_SOCK_PEER_NAME", "net.sock.peer.name", Experimental)
        .deprecated(Obsoleted),
    Entry::attribute("NET_SOCK_PEER_PORT", "net.sock.peer.port", Experimental)
        .deprecated(Renamed("network.peer.port")),
    Entry::attribute("NET_TRANSPORT", "net.transport", Experimental)
        .deprecated(Renamed("network.transport")),
    Entry::value("NET_TRANSPORT_VALUE_IP_TCP", "net.transport", "ip_tcp", Experimental),
    Entry::value("NET_TRANSPORT_VALUE_IP_UDP", "net.transport", "ip_udp", Experimental),
    Entry::value("NET_TRANSPORT_VALUE_PIPE", "net.transport", "pipe", Experimental),
    Entry::value("NET_TRANSPORT_VALUE_INPROC", "net.transport", "inproc", Experimental),
    Entry::value("NET_TRANSPORT_VALUE_OTHER", "net.transport", "other", Experimental),
    Entry::attribute("NETWORK_CARRIER_ICC", "network.carrier.icc", Experimental),
    Entry::attribute("NETWORK_CARRIER_MCC", "network.carrier.mcc", Experimental),
    Entry::attribute("NETWORK_CARRIER_MNC", "network.carrier.mnc", Experimental),
    Entry::attribute("NETWORK_CARRIER_NAME", "network.carrier.name", Experimental),
    Entry::attribute("NETWORK_CONNECTION_STATE", "network.connection.state", Experimental),
    Entry::value(
        "NETWORK_CONNECTION_STATE_VALUE_CLOSED",
        "network.connection.state",
        "closed",
        Experimental,
    ),
    Entry::value(
        "NETWORK_CONNECTION_STATE_VALUE_CLOSE_WAIT",
        "network.connection.state",
        "close_wait",
        Experimental,
    ),
    Entry::value(
        "NETWORK_CONNECTION_STATE_VALUE_CLOSING",
        "network.connection.state",
        "closing",
        Experimental,
    ),
    Entry::value(
        "NETWORK_CONNECTION_STATE_VALUE_ESTABLISHED",
        "network.connection.state",
        "established",
        Experimental,
    ),
    Entry::value(
        "NETWORK_CONNECTION_STATE_VALUE_FIN_WAIT_1",
        "network.connection.state",
        "fin_wait_1",
        Experimental,
    ),
    Entry::value(
        "NETWORK_CONNECTION_STATE_VALUE_FIN_WAIT_2",
        "network.connection.state",
        "fin_wait_2",
        Experimental,
    ),
    Entry::value(
        "NETWORK_CONNECTION_STATE_VALUE_LAST_ACK",
        "network.connection.state",
        "last_ack",
        Experimental,
    ),
    Entry::value(
        "NETWORK_CONNECTION_STATE_VALUE_LISTEN",
        "network.connection.state",
        "listen",
        Experimental,
    ),
    Entry::value(
        "NETWORK_CONNECTION_STATE_VALUE_SYN_RECEIVED",
        "network.connection.state",
        "syn_received",
        Experimental,
    ),
    Entry::value(
        "NETWORK_CONNECTION_STATE_VALUE_SYN_SENT",
        "network.connection.state",
        "syn_sent",
        Experimental,
    ),
    Entry::value(
        "NETWORK_CONNECTION_STATE_VALUE_TIME_WAIT",
        "network.connection.state",
        "time_wait",
        Experimental,
    ),
    Entry::attribute("NETWORK_CONNECTION_SUBTYPE", "network.connection.subtype", Experimental),
    Entry::value(
        "NETWORK_CONNECTION_SUBTYPE_VALUE_GPRS",
        "network.connection.subtype",
        "gprs",
        Experimental,
    ),
    Entry::value(
        "NETWORK_CONNECTION_SUBTYPE_VALUE_EDGE",
        "network.connection.subtype",
        "edge",
        Experimental,
    ),
    Entry::value(
        "NETWORK_CONNECTION_SUBTYPE_VALUE_UMTS",
        "network.connection.subtype",
        "umts",
        Experimental,
    ),
    Entry::value(
        "NETWORK_CONNECTION_SUBTYPE_VALUE_CDMA",
        "network.connection.subtype",
        "cdma",
        Experimental,
    ),
    Entry::value(
        "NETWORK_CONNECTION_SUBTYPE_VALUE_EVDO_0",
        "network.connection.subtype",
        "evdo_0",
        Experimental,
    ),
    Entry::value(
        "NETWORK_CONNECTION_SUBTYPE_VALUE_EVDO_A",
        "network.connection.subtype",
        "evdo_a",
        Experimental,
    ),
    Entry::value(
        "NETWORK_CONNECTION_SUBTYPE_VALUE_CDMA2000_1XRTT",
        "network.connection.subtype",
        "cdma2000_1xrtt",
        Experimental,
    ),
    Entry::value(
        "NETWORK_CONNECTION_SUBTYPE_VALUE_HSDPA",
        "network.connection.subtype",
        "hsdpa",
        Experimental,
    ),
    Entry::value(
        "NETWORK_CONNECTION_SUBTYPE_VALUE_HSUPA",
        "network.connection.subtype",
        "hsupa",
        Experimental,
    ),
    Entry::value(
        "NETWORK_CONNECTION_SUBTYPE_VALUE_HSPA",
        "network.connection.subtype",
        "hspa",
        Experimental,
    ),
    Entry::value(
        "NETWORK_CONNECTION_SUBTYPE_VALUE_IDEN",
        "network.connection.subtype",
        "iden",
        Experimental,
    ),
    Entry::value(
        "NETWORK_CONNECTION_SUBTYPE_VALUE_EVDO_B",
        "network.connection.subtype",
        "evdo_b",
        Experimental,
    ),
    Entry::value(
        "NETWORK_CONNECTION_SUBTYPE_VALUE_LTE",
        "network.connection.subtype",
        "lte",
        Experimental,
    ),
    Entry::value(
        "NETWORK_CONNECTION_SUBTYPE_VALUE_EHRPD",
        "network.connection.subtype",
        "ehrpd",
        Experimental,
    ),
    Entry::value(
        "NETWORK_CONNECTION_SUBTYPE_VALUE_HSPAP",
        "network.connection.subtype",
        "hspap",
        Experimental,
    ),
    Entry::value(
        "NETWORK_CONNECTION_SUBTYPE_VALUE_GSM",
        "network.connection.subtype",
        "gsm",
        Experimental,
    ),
    Entry::value(
        "NETWORK_CONNECTION_SUBTYPE_VALUE_TD_SCDMA",
        "network.connection.subtype",
        "td_scdma",
        Experimental,
    ),
    Entry::value(
        "NETWORK_CONNECTION_SUBTYPE_VALUE_IWLAN",
        "network.connection.subtype",
        "iwlan",
        Experimental,
    ),
    Entry::value(
        "NETWORK_CONNECTION_SUBTYPE_VALUE_NR",
        "network.connection.subtype",
        "nr",
        Experimental,
    ),
    Entry::value(
        "NETWORK_CONNECTION_SUBTYPE_VALUE_NRNSA",
        "network.connection.subtype",
        "nrnsa",
        Experimental,
    ),
    Entry::value(
        "NETWORK_CONNECTION_SUBTYPE_VALUE_LTE_CA",
        "network.connection.subtype",
        "lte_ca",
        Experimental,
    ),
    Entry::attribute("NETWORK_CONNECTION_TYPE", "network.connection.type", Experimental),
    Entry::value(
        "NETWORK_CONNECTION_TYPE_VALUE_WIFI",
        "network.connection.type",
        "wifi",
        Experimental,
    ),
    Entry::value(
        "NETWORK_CONNECTION_TYPE_VALUE_WIRED",
        "network.connection.type",
        "wired",
        Experimental,
    ),
    Entry::value(
        "NETWORK_CONNECTION_TYPE_VALUE_CELL",
        "network.connection.type",
        "cell",
        Experimental,
    ),
    Entry::value(
        "NETWORK_CONNECTION_TYPE_VALUE_UNAVAILABLE",
        "network.connection.type",
        "unavailable",
        Experimental,
    ),
    Entry::value(
        "NETWORK_CONNECTION_TYPE_VALUE_UNKNOWN",
        "network.connection.type",
        "unknown",
        Experimental,
    ),
    Entry::attribute("NETWORK_INTERFACE_NAME", "network.interface.name", Experimental),
    Entry::attribute("NETWORK_IO_DIRECTION", "network.io.direction", Experimental),
    Entry::value(
        "NETWORK_IO_DIRECTION_VALUE_TRANSMIT",
        "network.io.direction",
        "transmit",
        Experimental,
    ),
    Entry::value(
        "NETWORK_IO_DIRECTION_VALUE_RECEIVE",
        "network.io.direction",
        "receive",
        Experimental,
    ),
    Entry::attribute("NETWORK_LOCAL_ADDRESS", "network.local.address", Stable),
    Entry::attribute("NETWORK_LOCAL_PORT", "network.local.port", Stable),
    Entry::attribute("NETWORK_PEER_ADDRESS", "network.peer.address", Stable),
    Entry::attribute("NETWORK_PEER_PORT", "network.peer.port", Stable),
    Entry::attribute("NETWORK_PROTOCOL_NAME", "network.protocol.name", Stable),
    Entry::attribute("NETWORK_PROTOCOL_VERSION", "network.protocol.version", Stable),
    Entry::attribute("NETWORK_TRANSPORT", "network.transport", Stable),
    Entry::value("NETWORK_TRANSPORT_VALUE_TCP", "network.transport", "tcp", Stable),
    Entry::value("NETWORK_TRANSPORT_VALUE_UDP", "network.transport", "udp", Stable),
    Entry::value("NETWORK_TRANSPORT_VALUE_PIPE", "network.transport", "pipe", Stable),
    Entry::value("NETWORK_TRANSPORT_VALUE_UNIX", "network.transport", "unix", Stable),
    Entry::value("NETWORK_TRANSPORT_VALUE_QUIC", "network.transport", "quic", Experimental),
    Entry::attribute("NETWORK_TYPE", "network.type", Stable),
    Entry::value("NETWORK_TYPE_VALUE_IPV4", "network.type", "ipv4", Stable),
    Entry::value("NETWORK_TYPE_VALUE_IPV6", "network.type", "ipv6", Stable),
    Entry::attribute("PEER_SERVICE", "peer.service", Experimental),
    Entry::attribute("SERVER_ADDRESS", "server.address", Stable),
    Entry::attribute("SERVER_PORT", "server.port", Stable),
    Entry::attribute("SOURCE_ADDRESS", "source.address", Experimental),
    Entry::attribute("SOURCE_PORT", "source.port", Experimental),
    Entry::attribute("TLS_CIPHER", "tls.cipher", Experimental),
    Entry::attribute("TLS_CLIENT_CERTIFICATE", "tls.client.certificate", Experimental),
    Entry::attribute("TLS_CLIENT_CERTIFICATE_CHAIN", "tls.client.certificate_chain", Experimental),
    Entry::attribute("TLS_CLIENT_HASH_MD5", "tls.client.hash.md5", Experimental),
    Entry::attribute("TLS_CLIENT_HASH_SHA1", "tls.client.hash.sha1", Experimental),
    Entry::attribute("TLS_CLIENT_HASH_SHA256", "tls.client.hash.sha256", Experimental),
    Entry::attribute("TLS_CLIENT_ISSUER", "tls.client.issuer", Experimental),
    Entry::attribute("TLS_CLIENT_JA3", "tls.client.ja3", Experimental),
    Entry::attribute("TLS_CLIENT_NOT_AFTER", "tls.client.not_after", Experimental),
    Entry::attribute("TLS_CLIENT_NOT_BEFORE", "tls.client.not_before", Experimental),
    Entry::attribute("TLS_CLIENT_SERVER_NAME", "tls.client.server_name", Experimental)
        .deprecated(Renamed("server.address")),
    Entry::attribute("TLS_CLIENT_SUBJECT", "tls.client.subject", Experimental),
    Entry::attribute("TLS_CLIENT_SUPPORTED_CIPHERS", "tls.client.supported_ciphers", Experimental),
    Entry::attribute("TLS_CURVE", "tls.curve", Experimental),
    Entry::attribute("TLS_ESTABLISHED", "tls.established", Experimental),
    Entry::attribute("TLS_NEXT_PROTOCOL", "tls.next_protocol", Experimental),
    Entry::attribute("TLS_PROTOCOL_NAME", "tls.protocol.name", Experimental),
    Entry::value("TLS_PROTOCOL_NAME_VALUE_SSL", "tls.protocol.name", "ssl", Experimental),
    Entry::value("TLS_PROTOCOL_NAME_VALUE_TLS", "tls.protocol.name", "tls", Experimental),
    Entry::attribute("TLS_PROTOCOL_VERSION", "tls.protocol.version", Experimental),
    Entry::attribute("TLS_RESUMED", "tls.resumed", Experimental),
    Entry::attribute("TLS_SERVER_CERTIFICATE", "tls.server.certificate", Experimental),
    Entry::attribute("TLS_SERVER_CERTIFICATE_CHAIN", "tls.server.certificate_chain", Experimental),
    Entry::attribute("TLS_SERVER_HASH_MD5", "tls.server.hash.md5", Experimental),
    Entry::attribute("TLS_SERVER_HASH_SHA1", "tls.server.hash.sha1", Experimental),
    Entry::attribute("TLS_SERVER_HASH_SHA256", "tls.server.hash.sha256", Experimental),
    Entry::attribute("TLS_SERVER_ISSUER", "tls.server.issuer", Experimental),
    Entry::attribute("TLS_SERVER_JA3S", "tls.server.ja3s", Experimental),
    Entry::attribute("TLS_SERVER_NOT_AFTER", "tls.server.not_after", Experimental),
    Entry::attribute("TLS_SERVER_NOT_BEFORE", "tls.server.not_before", Experimental),
    Entry::attribute("TLS_SERVER_SUBJECT", "tls.server.subject", Experimental),
];
