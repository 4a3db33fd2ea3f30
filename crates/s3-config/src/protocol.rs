//! Transport protocol selector

use crate::ClientError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Scheme used for outgoing requests
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Protocol {
    /// Plain HTTP
    Http,
    /// HTTP over TLS
    #[default]
    Https,
}

impl Protocol {
    /// URL scheme for this protocol
    pub fn scheme(&self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }

    /// Well-known port for this protocol
    pub fn default_port(&self) -> u16 {
        match self {
            Self::Http => 80,
            Self::Https => 443,
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.scheme())
    }
}

impl FromStr for Protocol {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "http" => Ok(Self::Http),
            "https" => Ok(Self::Https),
            _ => Err(ClientError::InvalidProtocol(s.to_string())),
        }
    }
}

// Stored as the scheme name; parsing is case-insensitive so values from
// environment variables like `HTTPS` are accepted.
impl Serialize for Protocol {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.scheme())
    }
}

impl<'de> Deserialize<'de> for Protocol {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_is_https() {
        assert_eq!(Protocol::default(), Protocol::Https);
        assert_eq!(Protocol::default().default_port(), 443);
    }

    #[rstest]
    #[case("http", Protocol::Http)]
    #[case("HTTP", Protocol::Http)]
    #[case("https", Protocol::Https)]
    #[case(" Https ", Protocol::Https)]
    fn test_parse(#[case] input: &str, #[case] expected: Protocol) {
        assert_eq!(input.parse::<Protocol>().unwrap(), expected);
    }

    #[rstest]
    #[case("ftp")]
    #[case("")]
    #[case("https://")]
    fn test_parse_rejects_unknown(#[case] input: &str) {
        let err = input.parse::<Protocol>().unwrap_err();
        assert!(matches!(err, ClientError::InvalidProtocol(ref s) if s == input));
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Protocol::Http).unwrap(), "\"http\"");
        let parsed: Protocol = serde_json::from_str("\"HTTPS\"").unwrap();
        assert_eq!(parsed, Protocol::Https);
        assert_eq!(Protocol::Http.to_string(), "http");
        assert!(serde_json::from_str::<Protocol>("\"gopher\"").is_err());
    }
}
