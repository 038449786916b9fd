use kex::api::{
    KristAddress, KristClient, KristName, LookupError, LookupResponse, NetworkInfo, Transaction,
};
use kex::app::{Activation, App, NavLink};
use kex::config::Config;
use kex::search::SearchQuery;
use kex::table::{FetchRequest, TableChange};
use kex::ui;

use anyhow::{Context, Result};
use clap::Parser;
use ratatui::{
    crossterm::{
        event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
        ExecutableCommand,
    },
    prelude::*,
};
use std::io::stdout;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use tui_input::backend::crossterm::EventHandler;

/// How often the home screen refreshes supply and work
const NETWORK_REFRESH: Duration = Duration::from_secs(30);

#[derive(Parser, Debug)]
#[command(name = "kex", version, about = "Terminal explorer for the Krist network")]
struct Args {
    /// Sync node to query for this session, instead of the configured one
    #[arg(long, value_name = "URL")]
    node: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let _guard = init_logging()?;

    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let app = match &args.node {
        Some(node) => App::with_sync_node(config, node)?,
        None => App::new(config)?,
    };
    info!(node = app.sync_node(), "starting kex");

    run_tui(app).await
}

/// Log to a file in the config directory; the terminal belongs to the UI
fn init_logging() -> Result<WorkerGuard> {
    let dir = Config::config_dir()?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {dir:?}"))?;

    let file_appender = tracing_appender::rolling::never(&dir, "kex.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_env("KEX_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .with(filter)
        .init();

    Ok(guard)
}

/// Messages from async tasks back to the main loop
enum AsyncMessage {
    Address(Result<KristAddress, LookupError>),
    Name(Result<KristName, LookupError>),
    Tx(Result<Transaction, LookupError>),
    Lookup {
        seq: u64,
        result: Result<LookupResponse, LookupError>,
    },
    NetworkInfo(Result<NetworkInfo, LookupError>),
}

async fn run_tui(mut app: App) -> Result<()> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let (tx, mut rx) = mpsc::channel::<AsyncMessage>(32);

    spawn_network_info(&app.client, tx.clone());

    let result = run_event_loop(&mut terminal, &mut app, tx, &mut rx).await;

    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    if let Err(e) = &result {
        error!("exiting with error: {e:#}");
    }
    result
}

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    tx: mpsc::Sender<AsyncMessage>,
    rx: &mut mpsc::Receiver<AsyncMessage>,
) -> Result<()> {
    let mut last_network_refresh = Instant::now();

    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if app.is_on_home() && last_network_refresh.elapsed() > NETWORK_REFRESH {
            last_network_refresh = Instant::now();
            spawn_network_info(&app.client, tx.clone());
        }

        // Check for async results
        while let Ok(msg) = rx.try_recv() {
            handle_message(app, msg, &tx);
        }

        // Poll for input events
        if event::poll(Duration::from_millis(50))? {
            let ev = event::read()?;

            if let Event::Key(key) = &ev {
                if key.kind == KeyEventKind::Press {
                    handle_key(app, *key, &ev, &tx);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_message(app: &mut App, msg: AsyncMessage, tx: &mpsc::Sender<AsyncMessage>) {
    match msg {
        AsyncMessage::Address(Ok(info)) => {
            let fetch = app.set_address_result(info);
            spawn_lookup(&app.client, fetch, tx.clone());
        }
        AsyncMessage::Name(Ok(info)) => {
            let fetch = app.set_name_result(info);
            spawn_lookup(&app.client, fetch, tx.clone());
        }
        AsyncMessage::Tx(Ok(info)) => app.set_tx_result(info),
        AsyncMessage::Address(Err(e)) | AsyncMessage::Name(Err(e)) | AsyncMessage::Tx(Err(e)) => {
            app.set_error(format!("{e}\n\nNode: {}", app.sync_node()));
        }
        AsyncMessage::Lookup { seq, result } => app.apply_lookup(seq, result),
        AsyncMessage::NetworkInfo(Ok(info)) => app.set_network_info(info),
        AsyncMessage::NetworkInfo(Err(e)) => {
            // Home still works without it
            info!("network info unavailable: {e}");
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent, ev: &Event, tx: &mpsc::Sender<AsyncMessage>) {
    // The label editor captures everything while open
    if let Some(editor) = app.wallet_editor.as_mut() {
        match key.code {
            KeyCode::Enter => app.submit_wallet_editor(),
            KeyCode::Esc => app.cancel_wallet_editor(),
            _ => {
                editor.input.handle_event(ev);
            }
        }
        return;
    }

    // Global keys
    match key.code {
        KeyCode::Esc => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
            return;
        }
        _ => {}
    }

    if app.is_on_home() {
        handle_home_key(app, key, ev, tx);
    } else if !app.is_loading() {
        handle_page_key(app, key, tx);
    }
}

fn handle_home_key(app: &mut App, key: KeyEvent, ev: &Event, tx: &mpsc::Sender<AsyncMessage>) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('n') if ctrl => {
            let fetch = app.open_network_listing();
            spawn_lookup(&app.client, fetch, tx.clone());
        }
        KeyCode::Char('w') if ctrl => {
            if let Some(fetch) = app.open_wallet_listing() {
                spawn_lookup(&app.client, fetch, tx.clone());
            }
        }
        KeyCode::Enter => {
            // Check if a history item is selected
            if let Some(query) = app.get_selected_history_query() {
                app.clear_history_selection();
                // Add to history again to move it to top
                app.remember_search(query.clone());
                execute_search(app, &query, tx);
            } else if let Some(query) = app.submit_search() {
                execute_search(app, &query, tx);
            }
        }
        KeyCode::Up => app.select_history_prev(),
        KeyCode::Down => app.select_history_next(),
        KeyCode::Delete | KeyCode::Backspace if app.selected_history_index.is_some() => {
            app.delete_selected_history();
        }
        _ => {
            // Any other key clears history selection and goes to search
            app.clear_history_selection();
            app.search_input.handle_event(ev);
        }
    }
}

fn handle_page_key(app: &mut App, key: KeyEvent, tx: &mpsc::Sender<AsyncMessage>) {
    let fetch = match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_prev();
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next();
            None
        }
        KeyCode::Left => {
            app.select_button(false);
            None
        }
        KeyCode::Right => {
            app.select_button(true);
            None
        }
        KeyCode::Tab => {
            app.toggle_focus();
            None
        }
        KeyCode::Enter => {
            if let Some(Activation::Navigate(link)) = app.activate() {
                navigate_to_link(app, link, tx);
            }
            None
        }
        KeyCode::Char(']') => app.apply_table_change(TableChange::NextPage),
        KeyCode::Char('[') => app.apply_table_change(TableChange::PrevPage),
        KeyCode::Char('+') | KeyCode::Char('=') => app.change_page_size(true),
        KeyCode::Char('-') => app.change_page_size(false),
        KeyCode::Char('s') => app.cycle_sort_column(),
        KeyCode::Char('o') => app.apply_table_change(TableChange::ToggleOrder),
        KeyCode::Char('m') => app.toggle_include_mined(),
        KeyCode::Char('t') => app.toggle_name_listing(),
        KeyCode::Char('r') => app.refresh(),
        KeyCode::Backspace | KeyCode::Char('b') => {
            app.go_back();
            None
        }
        KeyCode::Char('h') => {
            app.go_home();
            None
        }
        _ => None,
    };

    if let Some(fetch) = fetch {
        spawn_lookup(&app.client, fetch, tx.clone());
    }
}

fn navigate_to_link(app: &mut App, link: NavLink, tx: &mpsc::Sender<AsyncMessage>) {
    match link {
        NavLink::Address(addr) => execute_search(app, &addr, tx),
        NavLink::Name(name) => execute_search(app, &format!("{name}.kst"), tx),
        NavLink::Transaction(id) => execute_search(app, &id.to_string(), tx),
    }
}

fn execute_search(app: &mut App, query: &str, tx: &mpsc::Sender<AsyncMessage>) {
    let client = app.client.clone();
    let tx = tx.clone();

    let parsed = SearchQuery::parse(query);
    info!(query = %parsed.description(), "search");

    match parsed {
        SearchQuery::Address(addr) => {
            app.set_loading(&format!("Fetching address {addr}..."));
            tokio::spawn(async move {
                let result = client.get_address(&addr).await;
                let _ = tx.send(AsyncMessage::Address(result)).await;
            });
        }
        SearchQuery::Name(name) => {
            app.set_loading(&format!("Fetching {name}.kst..."));
            tokio::spawn(async move {
                let result = client.get_name(&name).await;
                let _ = tx.send(AsyncMessage::Name(result)).await;
            });
        }
        SearchQuery::Transaction(id) => {
            app.set_loading(&format!("Fetching transaction #{id}..."));
            tokio::spawn(async move {
                let result = client.get_transaction(id).await;
                let _ = tx.send(AsyncMessage::Tx(result)).await;
            });
        }
        SearchQuery::Invalid(reason) => app.set_error(reason),
    }
}

fn spawn_lookup(client: &KristClient, fetch: FetchRequest, tx: mpsc::Sender<AsyncMessage>) {
    let client = client.clone();
    tokio::spawn(async move {
        let result = client.lookup_transactions(&fetch.request).await;
        let _ = tx
            .send(AsyncMessage::Lookup {
                seq: fetch.seq,
                result,
            })
            .await;
    });
}

fn spawn_network_info(client: &KristClient, tx: mpsc::Sender<AsyncMessage>) {
    let client = client.clone();
    tokio::spawn(async move {
        let result = client.get_network_info().await;
        let _ = tx.send(AsyncMessage::NetworkInfo(result)).await;
    });
}
