//! Action buttons shown for an address.

use crate::api::KristAddress;
use crate::wallets::{Wallet, WalletSet};

/// Whether the viewer owns the address being shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressOwnership<'a> {
    Owned { wallet_id: &'a str, wallet: &'a Wallet },
    Foreign,
}

impl<'a> AddressOwnership<'a> {
    pub fn resolve(address: &str, wallets: &'a WalletSet) -> Self {
        match wallets.find_by_address(address) {
            Some((wallet_id, wallet)) => Self::Owned { wallet_id, wallet },
            None => Self::Foreign,
        }
    }

    pub fn is_owned(&self) -> bool {
        matches!(self, Self::Owned { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressAction {
    /// Send from one of our wallets to a foreign address
    Send { to: String },
    /// Move funds out of an address we own
    Transfer { from: String },
    // TODO: offer an edit action once friend status is tracked separately from wallets
    AddFriend { address: String },
    EditWallet { wallet_id: String },
}

impl AddressAction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Send { .. } => "Send Krist",
            Self::Transfer { .. } => "Transfer Krist",
            Self::AddFriend { .. } => "Add friend",
            Self::EditWallet { .. } => "Edit wallet",
        }
    }

    /// Whether activating this opens the wallet edit flow
    pub fn opens_editor(&self) -> bool {
        matches!(self, Self::EditWallet { .. })
    }
}

/// The two buttons shown under an address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressButtonRow {
    pub buttons: [AddressAction; 2],
}

impl AddressButtonRow {
    pub fn new(address: &KristAddress, wallets: &WalletSet) -> Self {
        Self::for_ownership(&address.address, AddressOwnership::resolve(&address.address, wallets))
    }

    pub fn for_ownership(address: &str, ownership: AddressOwnership<'_>) -> Self {
        let buttons = match ownership {
            AddressOwnership::Owned { wallet_id, .. } => [
                AddressAction::Transfer {
                    from: address.to_string(),
                },
                AddressAction::EditWallet {
                    wallet_id: wallet_id.to_string(),
                },
            ],
            AddressOwnership::Foreign => [
                AddressAction::Send {
                    to: address.to_string(),
                },
                AddressAction::AddFriend {
                    address: address.to_string(),
                },
            ],
        };

        Self { buttons }
    }

    pub fn get(&self, index: usize) -> Option<&AddressAction> {
        self.buttons.get(index)
    }
}
