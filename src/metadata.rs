//! Transaction metadata summaries.
//!
//! Krist metadata is free text, but wallets conventionally write CommonMeta:
//! `;`-separated segments where the first may be a `metaname@name.kst`
//! recipient and the rest are `key=value` pairs.

use crate::api::Transaction;

/// `key=value` pairs of a CommonMeta string, in order. Segments without `=`
/// are skipped.
pub fn parse_common_meta(meta: &str) -> Vec<(&str, &str)> {
    meta.split(';')
        .filter_map(|segment| segment.split_once('='))
        .map(|(k, v)| (k.trim(), v.trim()))
        .filter(|(k, _)| !k.is_empty())
        .collect()
}

/// Metadata with a leading name recipient segment removed
fn strip_recipient<'a>(tx: &Transaction, meta: &'a str) -> &'a str {
    if tx.sent_name.is_none() {
        return meta;
    }

    let (first, rest) = meta.split_once(';').unwrap_or((meta, ""));
    if first.trim().ends_with(".kst") {
        rest
    } else {
        meta
    }
}

/// One-line summary of a transaction's metadata
pub fn concise(tx: &Transaction) -> Option<String> {
    let meta = tx.metadata.as_deref()?.trim();
    let body = strip_recipient(tx, meta).trim();

    let fields = parse_common_meta(body);
    let message = ["message", "error"]
        .iter()
        .find_map(|key| fields.iter().find(|(k, _)| k == key).map(|(_, v)| *v));

    let summary = message.unwrap_or(body).trim();
    if summary.is_empty() {
        None
    } else {
        Some(summary.replace(['\n', '\r'], " "))
    }
}
