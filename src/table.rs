//! State of a transaction listing: what to fetch, what was fetched, and how
//! user interaction with the table turns into new fetches.
//!
//! The table never performs I/O itself. Every state change that needs data
//! returns a [`FetchRequest`]; the caller runs it and hands the outcome back
//! through [`TransactionsTable::resolve`] together with the request's sequence
//! number. Only the most recently issued request is ever applied.

use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

use crate::api::{
    LookupError, LookupOptions, LookupRequest, LookupResponse, LookupTargets, LookupType,
    SortOrder, Transaction, MAX_PAGE_SIZE,
};
use crate::columns::Column;

/// Sequence numbers are shared by every table so a response can never be
/// mistaken for another table's request.
static NEXT_SEQ: AtomicU64 = AtomicU64::new(1);

fn next_seq() -> u64 {
    NEXT_SEQ.fetch_add(1, Ordering::Relaxed)
}

/// View mode of a transaction table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingType {
    /// Transactions of the user's own wallets
    Wallets,
    /// Every transaction on the network
    Network,
    /// Transactions of a single address
    Address,
    /// Purchases, transfers and record updates of a name
    NameHistory,
    /// Transactions sent to a name
    NameSent,
}

impl ListingType {
    pub fn lookup_type(self) -> LookupType {
        match self {
            Self::Wallets | Self::Network | Self::Address => LookupType::Transactions,
            Self::NameHistory => LookupType::NameHistory,
            Self::NameSent => LookupType::NameTransactions,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Wallets => "My Transactions",
            Self::Network => "Network Transactions",
            Self::Address => "Transactions",
            Self::NameHistory => "Name History",
            Self::NameSent => "Name Transactions",
        }
    }
}

/// Inputs of a table supplied by the screen that owns it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableParams {
    pub listing_type: ListingType,
    pub addresses: Vec<String>,
    pub name: Option<String>,
    pub include_mined: bool,
    /// Bumped to force a refetch with otherwise unchanged inputs
    pub refreshing_id: u64,
}

impl TableParams {
    pub fn new(listing_type: ListingType) -> Self {
        Self {
            listing_type,
            addresses: Vec::new(),
            name: None,
            include_mined: false,
            refreshing_id: 0,
        }
    }

    pub fn network() -> Self {
        Self {
            include_mined: true,
            ..Self::new(ListingType::Network)
        }
    }

    pub fn address(address: impl Into<String>) -> Self {
        Self {
            addresses: vec![address.into()],
            ..Self::new(ListingType::Address)
        }
    }

    pub fn wallets(addresses: Vec<String>) -> Self {
        Self {
            addresses,
            ..Self::new(ListingType::Wallets)
        }
    }

    pub fn name(name: impl Into<String>, listing_type: ListingType) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new(listing_type)
        }
    }

    /// A name takes precedence over the address list
    pub fn targets(&self) -> LookupTargets {
        match &self.name {
            Some(name) => LookupTargets::Name(name.clone()),
            None => LookupTargets::Addresses(self.addresses.clone()),
        }
    }
}

/// A lookup the caller must run, tagged with its sequence number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub seq: u64,
    pub request: LookupRequest,
}

/// A user interaction with the table controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableChange {
    NextPage,
    PrevPage,
    /// Zero-based page
    Page(usize),
    PageSize(usize),
    /// Sort by a column; sorting by the current column flips the order
    SortBy(Column),
    ToggleOrder,
}

#[derive(Debug, Clone)]
pub struct TransactionsTable {
    params: TableParams,
    options: LookupOptions,
    loading: bool,
    res: Option<LookupResponse>,
    latest_seq: u64,
    selected: usize,
}

impl TransactionsTable {
    /// Mount a table. The returned request is the initial fetch.
    pub fn new(params: TableParams, page_size: usize) -> (Self, FetchRequest) {
        let mut table = Self {
            params,
            options: LookupOptions::with_page_size(page_size),
            loading: true,
            res: None,
            latest_seq: 0,
            selected: 0,
        };
        let request = table.issue();
        (table, request)
    }

    pub fn params(&self) -> &TableParams {
        &self.params
    }

    pub fn options(&self) -> &LookupOptions {
        &self.options
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn response(&self) -> Option<&LookupResponse> {
        self.res.as_ref()
    }

    /// Rows of the last good response; empty before the first one arrives
    pub fn rows(&self) -> &[Transaction] {
        self.res
            .as_ref()
            .map(|r| r.transactions.as_slice())
            .unwrap_or(&[])
    }

    pub fn latest_seq(&self) -> u64 {
        self.latest_seq
    }

    pub fn sort_column(&self) -> Option<Column> {
        Column::for_sort_field(self.options.order_by)
    }

    pub fn page(&self) -> usize {
        self.options.page()
    }

    /// Known once a response has arrived
    pub fn total_pages(&self) -> Option<usize> {
        self.res
            .as_ref()
            .map(|r| r.total_pages(self.options.limit))
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_transaction(&self) -> Option<&Transaction> {
        self.rows().get(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.rows().len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn issue(&mut self) -> FetchRequest {
        self.loading = true;
        self.latest_seq = next_seq();

        let request = LookupRequest {
            targets: self.params.targets(),
            lookup_type: self.params.listing_type.lookup_type(),
            options: self.options,
            include_mined: self.params.include_mined,
        };
        debug!(seq = self.latest_seq, ?request, "issuing transaction lookup");

        FetchRequest {
            seq: self.latest_seq,
            request,
        }
    }

    /// Replace the inputs. Identical inputs do not refetch.
    pub fn set_params(&mut self, params: TableParams) -> Option<FetchRequest> {
        if params == self.params {
            return None;
        }
        self.params = params;
        self.selected = 0;
        Some(self.issue())
    }

    pub fn set_include_mined(&mut self, include_mined: bool) -> Option<FetchRequest> {
        let params = TableParams {
            include_mined,
            ..self.params.clone()
        };
        self.set_params(params)
    }

    /// Refetch the current page
    pub fn refresh(&mut self) -> FetchRequest {
        self.params.refreshing_id += 1;
        self.issue()
    }

    /// Translate a table interaction into new options. Interactions that
    /// leave the options as they were do not refetch.
    pub fn apply_change(&mut self, change: TableChange) -> Option<FetchRequest> {
        let current = self.options;
        let mut next = current;
        let limit = current.limit;
        let last_page = self.total_pages().map(|p| p - 1);

        match change {
            TableChange::NextPage => {
                let last_page = last_page?;
                if current.page() < last_page {
                    next.offset = (current.page() + 1) * limit;
                }
            }
            TableChange::PrevPage => {
                next.offset = current.page().saturating_sub(1) * limit;
            }
            TableChange::Page(page) => {
                let page = last_page.map_or(page, |last| page.min(last));
                next.offset = page * limit;
            }
            TableChange::PageSize(size) => {
                let size = size.clamp(1, MAX_PAGE_SIZE);
                next.limit = size;
                next.offset = (current.offset / size) * size;
            }
            TableChange::SortBy(column) => {
                let field = column.sort_field()?;
                if field == current.order_by {
                    next.order = current.order.toggled();
                } else {
                    next.order_by = field;
                    next.order = SortOrder::Asc;
                }
                next.offset = 0;
            }
            TableChange::ToggleOrder => {
                next.order = current.order.toggled();
                next.offset = 0;
            }
        }

        if next == current {
            return None;
        }

        self.options = next;
        self.selected = 0;
        Some(self.issue())
    }

    /// Apply the outcome of a fetch.
    ///
    /// Outcomes of anything but the latest request are dropped. A failure is
    /// handed to `on_error` and keeps the previous response on display.
    /// Returns whether the outcome was applied.
    pub fn resolve<F>(
        &mut self,
        seq: u64,
        result: Result<LookupResponse, LookupError>,
        on_error: F,
    ) -> bool
    where
        F: FnOnce(LookupError),
    {
        if seq != self.latest_seq {
            debug!(seq, latest = self.latest_seq, "discarding stale lookup result");
            return false;
        }

        self.loading = false;
        match result {
            Ok(res) => {
                self.selected = self.selected.min(res.transactions.len().saturating_sub(1));
                self.res = Some(res);
            }
            Err(e) => on_error(e),
        }
        true
    }
}
