use reqwest::StatusCode;
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;

use super::types::*;

// ============================================================================
// Helper Functions
// ============================================================================

/// Strip the `.kst` suffix the node API does not accept in paths
pub fn bare_name(name: &str) -> &str {
    let trimmed = name.trim();
    trimmed.strip_suffix(".kst").unwrap_or(trimmed)
}

/// Path of the lookup endpoint for a request.
///
/// Address lookups join the targets with commas; an empty address list looks
/// up the whole network.
pub fn lookup_path(request: &LookupRequest) -> String {
    let targets = match &request.targets {
        LookupTargets::Addresses(addresses) => addresses.join(","),
        LookupTargets::Name(name) => bare_name(name).to_string(),
    };

    match request.lookup_type {
        LookupType::Transactions if targets.is_empty() => "/lookup/transactions".to_string(),
        LookupType::Transactions => format!("/lookup/transactions/{targets}"),
        LookupType::NameHistory => format!("/lookup/names/{targets}/history"),
        LookupType::NameTransactions => format!("/lookup/names/{targets}/transactions"),
    }
}

pub fn lookup_query(request: &LookupRequest) -> Vec<(&'static str, String)> {
    let options = &request.options;
    vec![
        ("limit", options.limit.to_string()),
        ("offset", options.offset.to_string()),
        ("orderBy", options.order_by.as_api_str().to_string()),
        ("order", options.order.as_api_str().to_string()),
        ("includeMined", request.include_mined.to_string()),
    ]
}

/// Decode a node response body.
///
/// The node reports most failures as an `ok: false` envelope with a 4xx
/// status, so the envelope's error wins. A bare HTTP status is only reported
/// when a failed response is not JSON at all.
pub fn decode_response<T: DeserializeOwned>(
    status: StatusCode,
    path: &str,
    body: &str,
) -> Result<T, LookupError> {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => decode_value(value),
        Err(_) if !status.is_success() => {
            Err(LookupError::new(format!("HTTP {status} from {path}")))
        }
        Err(e) => Err(e.into()),
    }
}

/// Decode a `{ "ok": ..., ... }` envelope, turning `ok: false` into an error
fn decode_value<T: DeserializeOwned>(value: Value) -> Result<T, LookupError> {
    if value.get("ok").and_then(Value::as_bool) != Some(true) {
        let code = value
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or("unknown_error");
        return Err(match value.get("message").and_then(Value::as_str) {
            Some(message) => LookupError::new(format!("{code}: {message}")),
            None => LookupError::new(code),
        });
    }

    Ok(serde_json::from_value(value)?)
}

// ============================================================================
// Response envelopes
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct AddressEnvelope {
    pub address: KristAddress,
}

#[derive(Debug, Deserialize)]
pub struct TransactionEnvelope {
    pub transaction: Transaction,
}

#[derive(Debug, Deserialize)]
pub struct NameEnvelope {
    pub name: KristName,
}

#[derive(Debug, Deserialize)]
pub struct SupplyEnvelope {
    pub money_supply: u64,
}

#[derive(Debug, Deserialize)]
pub struct WorkEnvelope {
    pub work: u64,
}
