/// Represents the type of search query
///
/// Some inputs fit more than one kind, so they are tried in a fixed order:
///
/// 1. Anything ending in `.kst` is a name.
/// 2. An all-digit input is a transaction ID, even when it is also a valid
///    10-char legacy hex address such as `1234567890`.
/// 3. A 10-char input shaped like an address is an address, so a bare name
///    such as `kristshops` needs its `.kst` suffix to be found as a name.
/// 4. Anything else made of name characters is a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Krist address (`k` + 9 alphanumerics, or 10 hex chars for legacy addresses)
    Address(String),
    /// Krist name, stored without the `.kst` suffix
    Name(String),
    /// Transaction ID
    Transaction(u64),
    /// Invalid or unrecognized query
    Invalid(String),
}

impl SearchQuery {
    /// Parse a search string into a typed query
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        let lower = trimmed.to_lowercase();

        if lower.is_empty() {
            return Self::Invalid("Empty query".to_string());
        }

        // An explicit .kst suffix is always a name
        if let Some(name) = lower.strip_suffix(".kst") {
            return if Self::is_valid_name(name) {
                Self::Name(name.to_string())
            } else {
                Self::Invalid(format!("Invalid name: {trimmed}"))
            };
        }

        if lower.chars().all(|c| c.is_ascii_digit()) {
            return match lower.parse::<u64>() {
                Ok(id) => Self::Transaction(id),
                Err(_) => Self::Invalid(format!("Transaction ID too large: {trimmed}")),
            };
        }

        if Self::looks_like_address(&lower) {
            return Self::Address(lower);
        }

        if Self::is_valid_name(&lower) {
            return Self::Name(lower);
        }

        Self::Invalid(format!("Unrecognized query format: {trimmed}"))
    }

    fn looks_like_address(s: &str) -> bool {
        if s.len() != 10 {
            return false;
        }

        let v2 = s.starts_with('k')
            && s[1..]
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit());
        let legacy = s.chars().all(|c| c.is_ascii_hexdigit());

        v2 || legacy
    }

    fn is_valid_name(s: &str) -> bool {
        !s.is_empty()
            && s.len() <= 64
            && s
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
    }

    /// Returns a human-readable description of the query type
    pub fn description(&self) -> String {
        match self {
            Self::Address(addr) => format!("Address: {addr}"),
            Self::Name(name) => format!("Name: {name}.kst"),
            Self::Transaction(id) => format!("Transaction: #{id}"),
            Self::Invalid(reason) => format!("Invalid: {reason}"),
        }
    }
}
