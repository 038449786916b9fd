//! Column definitions of the transaction table and their cell contents.

use crate::api::{SortField, Transaction};
use crate::metadata;
use crate::wallets::WalletSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Id,
    Type,
    From,
    To,
    Value,
    Name,
    Metadata,
    Time,
}

impl Column {
    pub const ALL: [Column; 8] = [
        Column::Id,
        Column::Type,
        Column::From,
        Column::To,
        Column::Value,
        Column::Name,
        Column::Metadata,
        Column::Time,
    ];

    /// Column sorted by when a listing opens
    pub const DEFAULT_SORT: Column = Column::Time;

    pub fn title(&self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Type => "Type",
            Self::From => "From",
            Self::To => "To",
            Self::Value => "Value",
            Self::Name => "Name",
            Self::Metadata => "Metadata",
            Self::Time => "Time",
        }
    }

    /// Fixed width in cells; `None` means take the remaining space
    pub fn width(&self) -> Option<u16> {
        match self {
            Self::Id => Some(8),
            Self::Type => Some(14),
            Self::From | Self::To => Some(24),
            Self::Value => Some(12),
            Self::Name => Some(16),
            Self::Metadata => None,
            Self::Time => Some(16),
        }
    }

    /// Server-side sort key. IDs are not sortable since sorting by time is
    /// the same order.
    pub fn sort_field(&self) -> Option<SortField> {
        match self {
            Self::Id | Self::Type | Self::Metadata => None,
            Self::From => Some(SortField::From),
            Self::To => Some(SortField::To),
            Self::Value => Some(SortField::Value),
            Self::Name => Some(SortField::Name),
            Self::Time => Some(SortField::Time),
        }
    }

    pub fn for_sort_field(field: SortField) -> Option<Column> {
        Self::ALL
            .into_iter()
            .find(|c| c.sort_field() == Some(field))
    }

    /// Sortable columns in display order
    pub fn sortable() -> impl Iterator<Item = Column> {
        Self::ALL.into_iter().filter(|c| c.sort_field().is_some())
    }

    /// Columns that link somewhere (transaction detail or a name)
    pub fn is_link(&self) -> bool {
        matches!(self, Self::Id | Self::Name)
    }

    /// Text of this column for a transaction, `None` when the cell is left empty
    pub fn cell(&self, tx: &Transaction, wallets: &WalletSet) -> Option<String> {
        match self {
            Self::Id => Some(tx.id.to_string()),
            Self::Type => Some(tx.tx_type.label().to_string()),
            Self::From => {
                if !tx.tx_type.has_sender() {
                    return None;
                }
                tx.from.as_deref().map(|a| contextual_address(a, wallets))
            }
            Self::To => {
                if !tx.tx_type.has_recipient() {
                    return None;
                }
                if let Some(name) = &tx.sent_name {
                    return Some(format_name_recipient(tx.sent_metaname.as_deref(), name));
                }
                tx.to.as_deref().map(|a| contextual_address(a, wallets))
            }
            Self::Value => tx.tx_type.carries_value().then(|| format_kst(tx.value)),
            Self::Name => tx.name.as_deref().map(|n| format!("{n}.kst")),
            Self::Metadata => metadata::concise(tx),
            Self::Time => Some(format_time(tx)),
        }
    }
}

/// Address with the wallet label appended when it is one of ours
pub fn contextual_address(address: &str, wallets: &WalletSet) -> String {
    match wallets.label_for(address) {
        Some(label) => format!("{address} ({label})"),
        None => address.to_string(),
    }
}

pub fn format_name_recipient(metaname: Option<&str>, name: &str) -> String {
    match metaname {
        Some(meta) if !meta.is_empty() => format!("{meta}@{name}.kst"),
        _ => format!("{name}.kst"),
    }
}

/// Whole-number Krist amount with thousands separators
pub fn format_kst(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 4);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out.push_str(" KST");
    out
}

pub fn format_time(tx: &Transaction) -> String {
    tx.time.format("%Y/%m/%d %H:%M").to_string()
}
