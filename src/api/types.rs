use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Constants
// ============================================================================

pub const DEFAULT_PAGE_SIZE: usize = 15;

/// Krist node lookups accept at most this many rows per page
pub const MAX_PAGE_SIZE: usize = 1000;

// ============================================================================
// Errors
// ============================================================================

/// The one failure kind of the node API: the lookup did not produce a result.
///
/// Transport errors, HTTP error statuses, `ok: false` envelopes and decode
/// failures all collapse into this, carrying only a message for display.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("lookup failed: {message}")]
pub struct LookupError {
    message: String,
}

impl LookupError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(e: reqwest::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(format!("invalid response: {e}"))
    }
}

// ============================================================================
// Records
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    #[serde(rename = "transfer")]
    Transfer,
    #[serde(rename = "mined")]
    Mined,
    #[serde(rename = "name_purchase")]
    NamePurchase,
    #[serde(rename = "name_a_record")]
    NameARecord,
    #[serde(rename = "name_transfer")]
    NameTransfer,
    #[serde(rename = "unknown", other)]
    Unknown,
}

impl TransactionType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Transfer => "Transfer",
            Self::Mined => "Mined",
            Self::NamePurchase => "Name purchase",
            Self::NameARecord => "Name A record",
            Self::NameTransfer => "Name transfer",
            Self::Unknown => "Unknown",
        }
    }

    /// Whether the `value` field means anything for this kind
    pub fn carries_value(&self) -> bool {
        matches!(self, Self::Transfer | Self::Mined | Self::NamePurchase)
    }

    /// Mined rewards come from nowhere
    pub fn has_sender(&self) -> bool {
        !matches!(self, Self::Mined)
    }

    /// Name purchases and A record updates have no counterparty
    pub fn has_recipient(&self) -> bool {
        !matches!(self, Self::NamePurchase | Self::NameARecord)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u64,
    pub from: Option<String>,
    pub to: Option<String>,
    pub value: u64,
    pub time: DateTime<Utc>,
    pub name: Option<String>,
    pub metadata: Option<String>,
    pub sent_metaname: Option<String>,
    pub sent_name: Option<String>,
    #[serde(rename = "type")]
    pub tx_type: TransactionType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KristAddress {
    pub address: String,
    pub balance: u64,
    #[serde(rename = "totalin")]
    pub total_in: u64,
    #[serde(rename = "totalout")]
    pub total_out: u64,
    #[serde(rename = "firstseen")]
    pub first_seen: DateTime<Utc>,
    /// Only present when the lookup asked for name counts
    #[serde(default)]
    pub names: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KristName {
    pub name: String,
    pub owner: String,
    pub original_owner: Option<String>,
    pub registered: DateTime<Utc>,
    pub updated: Option<DateTime<Utc>>,
    pub transferred: Option<DateTime<Utc>>,
    pub a: Option<String>,
    #[serde(default)]
    pub unpaid: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkInfo {
    pub money_supply: u64,
    pub work: u64,
}

// ============================================================================
// Lookup requests
// ============================================================================

/// API-level transaction category filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupType {
    Transactions,
    NameHistory,
    NameTransactions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    From,
    To,
    Value,
    Name,
    Time,
}

impl SortField {
    pub fn as_api_str(&self) -> &'static str {
        match self {
            Self::From => "from",
            Self::To => "to",
            Self::Value => "value",
            Self::Name => "name",
            Self::Time => "time",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_api_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Self::Asc => "↑",
            Self::Desc => "↓",
        }
    }
}

/// Pagination and sort state of a transaction listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupOptions {
    pub limit: usize,
    pub offset: usize,
    pub order_by: SortField,
    pub order: SortOrder,
}

impl LookupOptions {
    pub fn with_page_size(limit: usize) -> Self {
        Self {
            limit: limit.clamp(1, MAX_PAGE_SIZE),
            ..Self::default()
        }
    }

    /// Zero-based page index
    pub fn page(&self) -> usize {
        self.offset / self.limit.max(1)
    }
}

impl Default for LookupOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_SIZE,
            offset: 0,
            order_by: SortField::Time,
            order: SortOrder::Desc,
        }
    }
}

/// What a lookup is about: a set of addresses, or a single name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupTargets {
    Addresses(Vec<String>),
    Name(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub targets: LookupTargets,
    pub lookup_type: LookupType,
    pub options: LookupOptions,
    pub include_mined: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LookupResponse {
    pub count: usize,
    pub total: usize,
    pub transactions: Vec<Transaction>,
}

impl LookupResponse {
    pub fn total_pages(&self, limit: usize) -> usize {
        self.total.div_ceil(limit.max(1)).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== TransactionType tests ====================

    #[test]
    fn test_transaction_type_deserialize() {
        let ty: TransactionType = serde_json::from_str("\"name_a_record\"").unwrap();
        assert_eq!(ty, TransactionType::NameARecord);
        let ty: TransactionType = serde_json::from_str("\"mined\"").unwrap();
        assert_eq!(ty, TransactionType::Mined);
    }

    #[test]
    fn test_transaction_type_unrecognised_is_unknown() {
        let ty: TransactionType = serde_json::from_str("\"staking\"").unwrap();
        assert_eq!(ty, TransactionType::Unknown);
    }

    #[test]
    fn test_transaction_type_counterparties() {
        assert!(!TransactionType::Mined.has_sender());
        assert!(TransactionType::Mined.has_recipient());
        assert!(!TransactionType::NamePurchase.has_recipient());
        assert!(!TransactionType::NameARecord.has_recipient());
        assert!(TransactionType::NameTransfer.has_recipient());
        assert!(TransactionType::Transfer.has_sender());
    }

    #[test]
    fn test_transaction_type_carries_value() {
        assert!(TransactionType::Transfer.carries_value());
        assert!(TransactionType::Mined.carries_value());
        assert!(!TransactionType::NameARecord.carries_value());
        assert!(!TransactionType::NameTransfer.carries_value());
        assert!(!TransactionType::Unknown.carries_value());
    }

    // ==================== Record decoding tests ====================

    #[test]
    fn test_transaction_deserialize_mined() {
        let json = r#"{
            "id": 1234,
            "from": null,
            "to": "kre3w0i79j",
            "value": 25,
            "time": "2021-03-17T12:34:56.000Z",
            "name": null,
            "metadata": null,
            "sent_metaname": null,
            "sent_name": null,
            "type": "mined"
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.id, 1234);
        assert_eq!(tx.from, None);
        assert_eq!(tx.to.as_deref(), Some("kre3w0i79j"));
        assert_eq!(tx.tx_type, TransactionType::Mined);
    }

    #[test]
    fn test_transaction_deserialize_missing_optionals() {
        let json = r#"{
            "id": 7,
            "from": "k5ztameslf",
            "to": "kre3w0i79j",
            "value": 100,
            "time": "2022-01-01T00:00:00Z",
            "type": "transfer"
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.metadata, None);
        assert_eq!(tx.sent_name, None);
    }

    #[test]
    fn test_address_deserialize() {
        let json = r#"{
            "address": "kre3w0i79j",
            "balance": 86945,
            "totalin": 123854,
            "totalout": 36909,
            "firstseen": "2015-03-13T12:55:18.000Z",
            "names": 12
        }"#;
        let addr: KristAddress = serde_json::from_str(json).unwrap();
        assert_eq!(addr.balance, 86945);
        assert_eq!(addr.total_in, 123854);
        assert_eq!(addr.names, Some(12));
    }

    // ==================== LookupOptions tests ====================

    #[test]
    fn test_lookup_options_default_sort() {
        let options = LookupOptions::default();
        assert_eq!(options.order_by, SortField::Time);
        assert_eq!(options.order, SortOrder::Desc);
        assert_eq!(options.offset, 0);
    }

    #[test]
    fn test_lookup_options_page() {
        let options = LookupOptions {
            offset: 30,
            ..LookupOptions::with_page_size(15)
        };
        assert_eq!(options.page(), 2);
    }

    #[test]
    fn test_lookup_options_page_size_clamped() {
        assert_eq!(LookupOptions::with_page_size(0).limit, 1);
        assert_eq!(LookupOptions::with_page_size(5000).limit, MAX_PAGE_SIZE);
    }

    #[test]
    fn test_total_pages() {
        let res = LookupResponse {
            count: 0,
            total: 31,
            transactions: vec![],
        };
        assert_eq!(res.total_pages(15), 3);
        let empty = LookupResponse {
            count: 0,
            total: 0,
            transactions: vec![],
        };
        assert_eq!(empty.total_pages(15), 1);
    }
}
