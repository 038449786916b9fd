use anyhow::Result;
use tracing::{info, warn};
use tui_input::Input;

use crate::actions::{AddressAction, AddressButtonRow};
use crate::api::{
    KristAddress, KristClient, KristName, LookupError, LookupResponse, NetworkInfo, Transaction,
};
use crate::columns::Column;
use crate::config::Config;
use crate::table::{FetchRequest, ListingType, TableChange, TableParams, TransactionsTable};

/// Page size step for `+`/`-`
pub const PAGE_SIZE_STEP: usize = 5;

#[derive(Debug, Clone)]
pub enum Screen {
    Home,
    Loading(String),
    Address(AddressResult),
    Name(NameResult),
    Transactions(TransactionsResult),
    Tx(TxResult),
    Error(String),
}

/// Which part of a page receives ↑↓/Enter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Header,
    Table,
}

#[derive(Debug, Clone)]
pub struct AddressResult {
    pub info: KristAddress,
    pub table: TransactionsTable,
    pub focus: Focus,
    pub selected_button: usize,
}

#[derive(Debug, Clone)]
pub struct NameResult {
    pub info: KristName,
    pub table: TransactionsTable,
    pub focus: Focus,
}

#[derive(Debug, Clone)]
pub struct TransactionsResult {
    pub table: TransactionsTable,
}

#[derive(Debug, Clone)]
pub struct TxResult {
    pub info: Transaction,
    pub selected_link: usize,
}

/// Navigable links from a screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavLink {
    Address(String),
    Name(String),
    Transaction(u64),
}

/// What pressing Enter asks the event loop to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    Navigate(NavLink),
}

/// Label editor opened by the "edit wallet" button
#[derive(Debug, Clone)]
pub struct WalletEditor {
    pub wallet_id: String,
    pub input: Input,
}

/// Links of a transaction page, in display order
pub fn tx_links(tx: &Transaction) -> Vec<NavLink> {
    let mut links = Vec::new();

    if tx.tx_type.has_sender() {
        if let Some(from) = &tx.from {
            links.push(NavLink::Address(from.clone()));
        }
    }

    if tx.tx_type.has_recipient() {
        if let Some(to) = &tx.to {
            links.push(NavLink::Address(to.clone()));
        }
    }

    if let Some(name) = &tx.sent_name {
        links.push(NavLink::Name(name.clone()));
    }

    if let Some(name) = &tx.name {
        links.push(NavLink::Name(name.clone()));
    }

    links
}

pub struct App {
    pub config: Config,
    pub screen: Screen,
    pub history: Vec<Screen>,
    pub search_input: Input,
    pub selected_history_index: Option<usize>,
    pub should_quit: bool,
    pub client: KristClient,
    pub network_info: Option<NetworkInfo>,
    /// Status line of the current page; lookup failures land here
    pub status: Option<String>,
    pub wallet_editor: Option<WalletEditor>,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let sync_node = config.sync_node.clone();
        Self::with_sync_node(config, &sync_node)
    }

    /// Use a sync node other than the configured one, without persisting it
    pub fn with_sync_node(config: Config, sync_node: &str) -> Result<Self> {
        let client = KristClient::new(sync_node)?;

        Ok(Self {
            config,
            screen: Screen::Home,
            history: Vec::new(),
            search_input: Input::default(),
            selected_history_index: None,
            should_quit: false,
            client,
            network_info: None,
            status: None,
            wallet_editor: None,
        })
    }

    pub fn sync_node(&self) -> &str {
        self.client.base_url()
    }

    pub fn get_recent_searches(&self) -> &[String] {
        &self.config.recent_searches
    }

    pub fn select_history_prev(&mut self) {
        let len = self.config.recent_searches.len();
        if len == 0 {
            return;
        }

        self.selected_history_index = match self.selected_history_index {
            None => Some(0),
            Some(0) => None, // Wrap to search input
            Some(i) => Some(i - 1),
        };
    }

    pub fn select_history_next(&mut self) {
        let len = self.config.recent_searches.len();
        if len == 0 {
            return;
        }

        self.selected_history_index = match self.selected_history_index {
            None => Some(0),
            Some(i) if i >= len - 1 => None, // Wrap to search input
            Some(i) => Some(i + 1),
        };
    }

    pub fn get_selected_history_query(&self) -> Option<String> {
        self.selected_history_index
            .and_then(|i| self.config.recent_searches.get(i).cloned())
    }

    pub fn clear_history_selection(&mut self) {
        self.selected_history_index = None;
    }

    pub fn delete_selected_history(&mut self) {
        if let Some(idx) = self.selected_history_index {
            if idx < self.config.recent_searches.len() {
                self.config.recent_searches.remove(idx);
                self.persist_config();

                if self.config.recent_searches.is_empty() {
                    self.selected_history_index = None;
                } else if idx >= self.config.recent_searches.len() {
                    self.selected_history_index = Some(self.config.recent_searches.len() - 1);
                }
            }
        }
    }

    pub fn submit_search(&mut self) -> Option<String> {
        let value = self.search_input.value().trim();
        if value.is_empty() {
            return None;
        }

        let query = value.to_string();
        self.search_input.reset();
        self.remember_search(query.clone());
        Some(query)
    }

    pub fn remember_search(&mut self, query: String) {
        if let Err(e) = self.config.add_recent_search(query) {
            warn!("failed to save recent search: {e:#}");
        }
    }

    fn persist_config(&self) {
        if let Err(e) = self.config.save() {
            warn!("failed to save config: {e:#}");
        }
    }

    // ==================== Screen transitions ====================

    fn is_navigable(screen: &Screen) -> bool {
        !matches!(screen, Screen::Home | Screen::Loading(_) | Screen::Error(_))
    }

    pub fn navigate_to(&mut self, screen: Screen) {
        if Self::is_navigable(&self.screen) {
            self.history.push(self.screen.clone());
        }
        self.screen = screen;
        self.status = None;
    }

    pub fn go_back(&mut self) -> bool {
        self.status = None;
        if let Some(prev) = self.history.pop() {
            self.screen = prev;
        } else {
            self.go_home();
        }
        true
    }

    pub fn go_home(&mut self) {
        self.history.clear();
        self.screen = Screen::Home;
        self.status = None;
    }

    pub fn set_loading(&mut self, msg: &str) {
        if Self::is_navigable(&self.screen) {
            self.history.push(self.screen.clone());
        }
        self.screen = Screen::Loading(msg.to_string());
    }

    pub fn set_error(&mut self, msg: String) {
        warn!("{msg}");
        if Self::is_navigable(&self.screen) {
            self.history.push(self.screen.clone());
        }
        self.screen = Screen::Error(msg);
    }

    pub fn set_address_result(&mut self, info: KristAddress) -> FetchRequest {
        let (table, request) = TransactionsTable::new(
            TableParams::address(info.address.clone()),
            self.config.page_size,
        );
        self.navigate_to(Screen::Address(AddressResult {
            info,
            table,
            focus: Focus::Table,
            selected_button: 0,
        }));
        request
    }

    pub fn set_name_result(&mut self, info: KristName) -> FetchRequest {
        let (table, request) = TransactionsTable::new(
            TableParams::name(info.name.clone(), ListingType::NameHistory),
            self.config.page_size,
        );
        self.navigate_to(Screen::Name(NameResult {
            info,
            table,
            focus: Focus::Table,
        }));
        request
    }

    pub fn set_tx_result(&mut self, info: Transaction) {
        self.navigate_to(Screen::Tx(TxResult {
            info,
            selected_link: 0,
        }));
    }

    pub fn open_network_listing(&mut self) -> FetchRequest {
        let (table, request) = TransactionsTable::new(TableParams::network(), self.config.page_size);
        self.navigate_to(Screen::Transactions(TransactionsResult { table }));
        request
    }

    /// `None` when there are no wallets to list
    pub fn open_wallet_listing(&mut self) -> Option<FetchRequest> {
        if self.config.wallets.is_empty() {
            self.status = Some("No wallets configured".to_string());
            return None;
        }

        let (table, request) = TransactionsTable::new(
            TableParams::wallets(self.config.wallets.addresses()),
            self.config.page_size,
        );
        self.navigate_to(Screen::Transactions(TransactionsResult { table }));
        Some(request)
    }

    pub fn set_network_info(&mut self, info: NetworkInfo) {
        self.network_info = Some(info);
    }

    pub fn is_on_home(&self) -> bool {
        matches!(self.screen, Screen::Home)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.screen, Screen::Loading(_))
    }

    // ==================== Transaction tables ====================

    /// Table of the current screen, if it has one
    pub fn table(&self) -> Option<&TransactionsTable> {
        match &self.screen {
            Screen::Address(r) => Some(&r.table),
            Screen::Name(r) => Some(&r.table),
            Screen::Transactions(r) => Some(&r.table),
            _ => None,
        }
    }

    pub fn table_mut(&mut self) -> Option<&mut TransactionsTable> {
        Self::table_of(&mut self.screen)
    }

    fn table_of(screen: &mut Screen) -> Option<&mut TransactionsTable> {
        match screen {
            Screen::Address(r) => Some(&mut r.table),
            Screen::Name(r) => Some(&mut r.table),
            Screen::Transactions(r) => Some(&mut r.table),
            _ => None,
        }
    }

    /// Hand a finished lookup to whichever table issued it. Screens in the
    /// back-history still accept results so they are not left loading.
    pub fn apply_lookup(&mut self, seq: u64, result: Result<LookupResponse, LookupError>) {
        let mut failure = None;
        let mut on_current = true;

        for screen in std::iter::once(&mut self.screen).chain(self.history.iter_mut().rev()) {
            if let Some(table) = Self::table_of(screen) {
                if table.latest_seq() == seq {
                    table.resolve(seq, result, |e| failure = Some(e));
                    break;
                }
            }
            on_current = false;
        }

        if let Some(e) = failure {
            warn!(seq, "transaction lookup failed: {e}");
            if on_current {
                self.status = Some(e.to_string());
            }
        }
    }

    pub fn apply_table_change(&mut self, change: TableChange) -> Option<FetchRequest> {
        self.table_mut()?.apply_change(change)
    }

    pub fn refresh(&mut self) -> Option<FetchRequest> {
        self.status = None;
        Some(self.table_mut()?.refresh())
    }

    pub fn toggle_include_mined(&mut self) -> Option<FetchRequest> {
        let table = self.table_mut()?;
        let include_mined = !table.params().include_mined;
        table.set_include_mined(include_mined)
    }

    /// Sort by the next sortable column after the current one
    pub fn cycle_sort_column(&mut self) -> Option<FetchRequest> {
        let table = self.table_mut()?;
        let sortable: Vec<Column> = Column::sortable().collect();
        let next = match table.sort_column() {
            Some(current) => {
                let idx = sortable.iter().position(|c| *c == current).unwrap_or(0);
                sortable[(idx + 1) % sortable.len()]
            }
            None => Column::DEFAULT_SORT,
        };
        table.apply_change(TableChange::SortBy(next))
    }

    pub fn change_page_size(&mut self, grow: bool) -> Option<FetchRequest> {
        let table = self.table_mut()?;
        let limit = table.options().limit;
        let size = if grow {
            limit + PAGE_SIZE_STEP
        } else if limit > PAGE_SIZE_STEP {
            (limit - PAGE_SIZE_STEP).max(PAGE_SIZE_STEP)
        } else {
            return None;
        };
        table.apply_change(TableChange::PageSize(size))
    }

    /// Switch a name page between its history and the transactions sent to it
    pub fn toggle_name_listing(&mut self) -> Option<FetchRequest> {
        let Screen::Name(result) = &mut self.screen else {
            return None;
        };

        let listing_type = match result.table.params().listing_type {
            ListingType::NameHistory => ListingType::NameSent,
            _ => ListingType::NameHistory,
        };
        let params = TableParams {
            listing_type,
            ..result.table.params().clone()
        };
        result.table.set_params(params)
    }

    // ==================== Selection ====================

    pub fn toggle_focus(&mut self) {
        let focus = match &mut self.screen {
            Screen::Address(r) => &mut r.focus,
            Screen::Name(r) => &mut r.focus,
            _ => return,
        };
        *focus = match focus {
            Focus::Header => Focus::Table,
            Focus::Table => Focus::Header,
        };
    }

    /// Move selection up
    pub fn select_prev(&mut self) {
        match &mut self.screen {
            Screen::Address(r) if r.focus == Focus::Table => r.table.select_prev(),
            Screen::Name(r) if r.focus == Focus::Table => r.table.select_prev(),
            Screen::Transactions(r) => r.table.select_prev(),
            Screen::Tx(r) => {
                let max = tx_links(&r.info).len();
                if max > 0 {
                    r.selected_link = (r.selected_link + max - 1) % max;
                }
            }
            _ => {}
        }
    }

    /// Move selection down
    pub fn select_next(&mut self) {
        match &mut self.screen {
            Screen::Address(r) if r.focus == Focus::Table => r.table.select_next(),
            Screen::Name(r) if r.focus == Focus::Table => r.table.select_next(),
            Screen::Transactions(r) => r.table.select_next(),
            Screen::Tx(r) => {
                let max = tx_links(&r.info).len();
                if max > 0 {
                    r.selected_link = (r.selected_link + 1) % max;
                }
            }
            _ => {}
        }
    }

    /// Move between the address action buttons
    pub fn select_button(&mut self, right: bool) {
        if let Screen::Address(r) = &mut self.screen {
            r.focus = Focus::Header;
            r.selected_button = if right { 1 } else { 0 };
        }
    }

    /// Buttons for the address on screen, derived from the current wallets
    pub fn button_row(&self) -> Option<AddressButtonRow> {
        match &self.screen {
            Screen::Address(r) => Some(AddressButtonRow::new(&r.info, &self.config.wallets)),
            _ => None,
        }
    }

    /// Get the currently selected navigation link
    pub fn get_selected_link(&self) -> Option<NavLink> {
        match &self.screen {
            Screen::Name(r) if r.focus == Focus::Header => {
                Some(NavLink::Address(r.info.owner.clone()))
            }
            Screen::Tx(r) => tx_links(&r.info).get(r.selected_link).cloned(),
            _ => None,
        }
    }

    /// Handle Enter on the current screen
    pub fn activate(&mut self) -> Option<Activation> {
        if let Screen::Address(r) = &self.screen {
            if r.focus == Focus::Header {
                let action = self.button_row()?.get(r.selected_button)?.clone();
                return self.handle_action(action);
            }
        }

        if let Some(link) = self.get_selected_link() {
            return Some(Activation::Navigate(link));
        }

        // Rows already carry the whole transaction
        let tx = self.table()?.selected_transaction()?.clone();
        self.set_tx_result(tx);
        None
    }

    /// Run an address action. Only editing is possible without wallet keys.
    pub fn handle_action(&mut self, action: AddressAction) -> Option<Activation> {
        info!(?action, "address action");
        match action {
            AddressAction::EditWallet { wallet_id } => {
                self.open_wallet_editor(&wallet_id);
            }
            AddressAction::Send { to } => {
                self.status = Some(format!("Sending to {to} needs a wallet client"));
            }
            AddressAction::Transfer { from } => {
                self.status = Some(format!("Transferring from {from} needs a wallet client"));
            }
            AddressAction::AddFriend { address } => {
                self.status = Some(format!("Adding {address} as a friend needs a wallet client"));
            }
        }
        None
    }

    // ==================== Wallet editor ====================

    pub fn open_wallet_editor(&mut self, wallet_id: &str) {
        let Some(wallet) = self.config.wallets.get(wallet_id) else {
            self.status = Some(format!("Wallet {wallet_id} no longer exists"));
            return;
        };

        let input = Input::new(wallet.label.clone().unwrap_or_default());
        self.wallet_editor = Some(WalletEditor {
            wallet_id: wallet_id.to_string(),
            input,
        });
    }

    pub fn cancel_wallet_editor(&mut self) {
        self.wallet_editor = None;
    }

    pub fn submit_wallet_editor(&mut self) {
        let Some(editor) = self.wallet_editor.take() else {
            return;
        };

        let label = editor.input.value().to_string();
        self.status = Some(
            match self.config.set_wallet_label(&editor.wallet_id, &label) {
                Ok(()) => "Wallet updated".to_string(),
                Err(e) => format!("{e:#}"),
            },
        );
    }
}
