use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use url::Url;

/// Sentinel value of the nameserver selector meaning "use the custom field".
pub const CUSTOM_NAMESERVER: &str = "custom";

/// Transport protocol named by the scheme of a nameserver address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Protocol {
    Udp,
    Tcp,
    Tls,
    Https,
    Quic,
    /// Any syntactically valid scheme the client has no label for.
    Other(String),
}

impl Protocol {
    pub fn from_scheme(scheme: &str) -> Self {
        match scheme {
            "udp" => Protocol::Udp,
            "tcp" => Protocol::Tcp,
            "tls" => Protocol::Tls,
            "https" => Protocol::Https,
            "quic" => Protocol::Quic,
            other => Protocol::Other(other.to_string()),
        }
    }

    pub fn scheme(&self) -> &str {
        match self {
            Protocol::Udp => "udp",
            Protocol::Tcp => "tcp",
            Protocol::Tls => "tls",
            Protocol::Https => "https",
            Protocol::Quic => "quic",
            Protocol::Other(scheme) => scheme,
        }
    }

    /// Human-readable protocol name shown in front of the address.
    pub fn label(&self) -> Cow<'_, str> {
        match self {
            Protocol::Udp => Cow::Borrowed("UDP"),
            Protocol::Tcp => Cow::Borrowed("TCP"),
            Protocol::Tls => Cow::Borrowed("DNS-over-TLS"),
            Protocol::Https => Cow::Borrowed("DNS-over-HTTPS"),
            Protocol::Quic => Cow::Borrowed("DNS-over-QUIC"),
            Protocol::Other(scheme) => Cow::Owned(scheme.to_uppercase()),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Protocol::Other(_))
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.scheme())
    }
}

/// A protocol-qualified nameserver address of the form `scheme://rest`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NameserverAddress {
    protocol: Protocol,
    address: String,
}

impl NameserverAddress {
    pub fn protocol(&self) -> &Protocol {
        &self.protocol
    }

    /// Everything after `scheme://`: host and port, or the full URL tail for HTTPS.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Hostname of an HTTPS endpoint, `None` for other protocols or when the
    /// authority part cannot be parsed.
    pub fn https_hostname(&self) -> Option<String> {
        match self.protocol {
            Protocol::Https => url_hostname(&self.address),
            _ => None,
        }
    }

    /// Display label such as `UDP: 8.8.8.8:53` or `DNS-over-HTTPS: dns.google`.
    pub fn display_label(&self) -> String {
        let label = self.protocol.label();
        match self.protocol {
            Protocol::Https => match url_hostname(&self.address) {
                Some(hostname) => format!("{}: {}", label, hostname),
                None => format!("{}: {}", label, self.address),
            },
            _ => format!("{}: {}", label, self.address),
        }
    }
}

fn is_valid_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Hostname of `https://<rest>` as a URL parser sees it (punycode, lowercase,
/// IPv6 in brackets). `None` if `rest` is not a valid URL tail.
fn url_hostname(rest: &str) -> Option<String> {
    let url = Url::parse(&format!("https://{}", rest)).ok()?;
    url.host_str().map(str::to_string)
}

impl FromStr for NameserverAddress {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (scheme, rest) = s
            .split_once("://")
            .ok_or_else(|| format!("Invalid nameserver address '{}': missing scheme", s))?;
        if !is_valid_scheme(scheme) {
            return Err(format!("Invalid scheme '{}' in nameserver address", scheme));
        }
        if rest.is_empty() {
            return Err(format!("Invalid nameserver address '{}': missing host", s));
        }
        Ok(Self {
            protocol: Protocol::from_scheme(scheme),
            address: rest.to_string(),
        })
    }
}

impl fmt::Display for NameserverAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.protocol, self.address)
    }
}

/// Well-known public resolvers offered in the nameserver selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameserverPreset {
    Google,
    Cloudflare,
    Quad9,
}

impl NameserverPreset {
    pub fn key(&self) -> &'static str {
        match self {
            NameserverPreset::Google => "google",
            NameserverPreset::Cloudflare => "cloudflare",
            NameserverPreset::Quad9 => "quad9",
        }
    }

    pub fn address(&self) -> &'static str {
        match self {
            NameserverPreset::Google => "udp://8.8.8.8:53",
            NameserverPreset::Cloudflare => "udp://1.1.1.1:53",
            NameserverPreset::Quad9 => "udp://9.9.9.9:53",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|preset| preset.key() == key)
    }

    pub fn all() -> &'static [NameserverPreset] {
        &[
            NameserverPreset::Google,
            NameserverPreset::Cloudflare,
            NameserverPreset::Quad9,
        ]
    }
}

impl fmt::Display for NameserverPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Value of the nameserver selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameserverSelection {
    Preset(NameserverPreset),
    Custom,
    /// Any other value, normally an already protocol-qualified address.
    Literal(String),
}

impl NameserverSelection {
    pub fn parse(value: &str) -> Self {
        if value == CUSTOM_NAMESERVER {
            return NameserverSelection::Custom;
        }
        match NameserverPreset::from_key(value) {
            Some(preset) => NameserverSelection::Preset(preset),
            None => NameserverSelection::Literal(value.to_string()),
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, NameserverSelection::Custom)
    }

    /// Address sent to the backend. `custom_input` is only consulted for
    /// [`NameserverSelection::Custom`] and may be blank.
    pub fn wire_address(&self, custom_input: &str) -> String {
        match self {
            NameserverSelection::Preset(preset) => preset.address().to_string(),
            NameserverSelection::Custom => custom_input.trim().to_string(),
            NameserverSelection::Literal(value) => value.clone(),
        }
    }

    /// Display label; empty while the user still has to type an address.
    pub fn display_label(&self) -> String {
        match self {
            NameserverSelection::Preset(preset) => label_for(preset.address()),
            NameserverSelection::Custom => String::new(),
            NameserverSelection::Literal(value) if value.is_empty() => String::new(),
            NameserverSelection::Literal(value) => label_for(value),
        }
    }
}

fn label_for(value: &str) -> String {
    match value.parse::<NameserverAddress>() {
        Ok(addr) => addr.display_label(),
        Err(_) => value.to_string(),
    }
}

/// Formats a selector or input value for display. Never fails: input that is
/// not a `scheme://address` string is returned unchanged.
pub fn format_nameserver(value: &str) -> String {
    NameserverSelection::parse(value).display_label()
}
