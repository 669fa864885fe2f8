//! Reference table of the job markets Adzuna serves.
//!
//! Informational only. Requests for other codes are forwarded unchanged and
//! rejected by the API itself.

/// A supported job market.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    /// ISO 3166-1 alpha-2 code, lowercase.
    pub code: &'static str,
    pub name: &'static str,
    /// Currency of every salary figure the API returns for this market.
    pub currency: &'static str,
}

pub const SUPPORTED_COUNTRIES: &[Country] = &[
    Country {
        code: "gb",
        name: "United Kingdom",
        currency: "GBP £",
    },
    Country {
        code: "us",
        name: "United States",
        currency: "USD $",
    },
    Country {
        code: "de",
        name: "Germany",
        currency: "EUR €",
    },
    Country {
        code: "fr",
        name: "France",
        currency: "EUR €",
    },
    Country {
        code: "au",
        name: "Australia",
        currency: "AUD $",
    },
    Country {
        code: "nz",
        name: "New Zealand",
        currency: "NZD $",
    },
    Country {
        code: "ca",
        name: "Canada",
        currency: "CAD $",
    },
    Country {
        code: "in",
        name: "India",
        currency: "INR ₹",
    },
    Country {
        code: "pl",
        name: "Poland",
        currency: "PLN zł",
    },
    Country {
        code: "br",
        name: "Brazil",
        currency: "BRL R$",
    },
    Country {
        code: "at",
        name: "Austria",
        currency: "EUR €",
    },
    Country {
        code: "za",
        name: "South Africa",
        currency: "ZAR R",
    },
];

/// Look up a market by code (case-insensitive).
pub fn find(code: &str) -> Option<&'static Country> {
    SUPPORTED_COUNTRIES
        .iter()
        .find(|c| c.code.eq_ignore_ascii_case(code))
}

pub fn is_supported(code: &str) -> bool {
    find(code).is_some()
}

impl std::fmt::Display for Country {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} ({})", self.code, self.name, self.currency)
    }
}
