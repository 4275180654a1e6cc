use std::fmt::{Display, Formatter};

/// Upstream providers tickerbridge talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderId {
    SecApi,
    Finnhub,
}

impl ProviderId {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SecApi => "secapi",
            Self::Finnhub => "finnhub",
        }
    }

    /// Label stamped into response payloads (`FilingResult::source`).
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::SecApi => "SEC-API",
            Self::Finnhub => "Finnhub",
        }
    }

    /// Environment variable holding this provider's API key.
    pub const fn api_key_var(self) -> &'static str {
        match self {
            Self::SecApi => "SEC_API_KEY",
            Self::Finnhub => "FINNHUB_API_KEY",
        }
    }
}

impl Display for ProviderId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
