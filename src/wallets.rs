use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An address the user controls, as recorded in the config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Wallet {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            label: None,
            category: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Label if set, otherwise the address
    pub fn display_name(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.address)
    }
}

/// Locally managed wallets keyed by wallet id.
///
/// Iteration follows id order, which is what "first match" refers to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WalletSet {
    wallets: BTreeMap<String, Wallet>,
}

impl WalletSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, wallet: Wallet) -> Option<Wallet> {
        self.wallets.insert(id.into(), wallet)
    }

    pub fn get(&self, id: &str) -> Option<&Wallet> {
        self.wallets.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Wallet> {
        self.wallets.get_mut(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Wallet)> {
        self.wallets.iter().map(|(id, w)| (id.as_str(), w))
    }

    pub fn len(&self) -> usize {
        self.wallets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wallets.is_empty()
    }

    /// First wallet whose address is exactly `address` (no case folding or trimming)
    pub fn find_by_address(&self, address: &str) -> Option<(&str, &Wallet)> {
        self.iter().find(|(_, w)| w.address == address)
    }

    pub fn addresses(&self) -> Vec<String> {
        self.wallets.values().map(|w| w.address.clone()).collect()
    }

    /// Label to show next to an address we own
    pub fn label_for(&self, address: &str) -> Option<&str> {
        self.find_by_address(address)
            .and_then(|(_, w)| w.label.as_deref())
    }
}

impl FromIterator<(String, Wallet)> for WalletSet {
    fn from_iter<I: IntoIterator<Item = (String, Wallet)>>(iter: I) -> Self {
        Self {
            wallets: iter.into_iter().collect(),
        }
    }
}
