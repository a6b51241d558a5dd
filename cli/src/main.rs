//! Browserless harness for the Thesisdesk shell.
//!
//! Drives the same route table and session store the app shell uses,
//! replacing the browser's cookie jar with a JSON file. Useful for poking at
//! route resolution and session persistence without a frontend build.

mod file_store;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use thesisdesk_shell::routes;
use thesisdesk_shell::session::SessionStore;
use thesisdesk_shell::session::cookie::CookieSessionAdapter;

use crate::file_store::FileCookieStore;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("route table is invalid: {0}")]
    Routes(#[from] thesisdesk_shell::RouterError),
    #[error("could not serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "thesisdesk", about = "Thesisdesk shell harness: resolve routes, manage the session cookie")]
struct Cli {
    /// Backing file for the cookie jar.
    #[arg(long, env = "THESISDESK_COOKIE_FILE", default_value = "thesisdesk-cookies.json")]
    cookie_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve a path against the route table and print the view and props.
    Resolve {
        /// Target path, e.g. `/thesis/42`.
        path: String,
        /// Query string, with or without the leading `?`.
        #[arg(long, default_value = "")]
        query: String,
    },
    /// Build the path for a named route from `key=value` params.
    PathFor {
        /// Route name, e.g. `StudentChapter`.
        name: String,
        /// Params as `key=value` pairs.
        params: Vec<String>,
    },
    /// Log a user in and persist the session.
    Login {
        #[arg(long)]
        user_id: String,
        #[arg(long)]
        first: String,
        #[arg(long)]
        last: String,
        /// Mark the user as a promoter (thesis supervisor).
        #[arg(long)]
        promoter: bool,
    },
    /// Log out and remove the persisted session.
    Logout,
    /// Print the current session record.
    Whoami,
}

fn main() {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Resolve { path, query } => {
            let router = routes::app_router()?;
            let resolution = router.resolve(&path, &query);
            println!("{} -> {:?}", resolution.name, resolution.view);
            println!("{}", serde_json::to_string_pretty(&resolution.props)?);
        }
        Command::PathFor { name, params } => {
            let router = routes::app_router()?;
            let params: thesisdesk_shell::Props = params
                .iter()
                .map(|pair| {
                    let (key, value) = pair.split_once('=').unwrap_or((pair.as_str(), ""));
                    (key.to_owned(), value.to_owned())
                })
                .collect();
            println!("{}", router.path_for(&name, &params)?);
        }
        Command::Login { user_id, first, last, promoter } => {
            let mut store = session_store(&cli.cookie_file);
            store.set_user(promoter, user_id, first, last);
            println!("{}", serde_json::to_string_pretty(store.record())?);
        }
        Command::Logout => {
            let mut store = session_store(&cli.cookie_file);
            store.logout();
            println!("logged out");
        }
        Command::Whoami => {
            let store = session_store(&cli.cookie_file);
            println!("{}", serde_json::to_string_pretty(store.record())?);
        }
    }
    Ok(())
}

fn session_store(path: &Path) -> SessionStore<CookieSessionAdapter<FileCookieStore>> {
    let jar = FileCookieStore::new(path.to_path_buf());
    SessionStore::initialize(CookieSessionAdapter::new(jar))
}
