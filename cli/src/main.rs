//! Trellis CLI - line-oriented storefront front end.
//!
//! # Architecture
//!
//! The CLI bridges the read-only catalog ([`trellis_catalog`]) and the cart
//! engine ([`trellis_core`]):
//!
//! ```text
//! main() -> load catalog -> run(catalog, stdin, stdout)
//!                               |
//!                               v
//!              parse line -> Command -> CartInstruction -> CartStore::apply
//!                               |
//!                               v
//!                    render snapshot to stdout
//! ```
//!
//! Shopper input never terminates the session: unknown commands, unknown
//! products, and malformed numbers print a short message and the loop
//! continues. Only startup failures (bad arguments, unreadable catalog
//! file) are fatal.

mod commands;
mod render;

use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use trellis_catalog::Catalog;
use trellis_core::{ApplyOutcome, CartStore};
use trellis_types::CartInstruction;

use crate::commands::Command;

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // Logs go to stderr so piped stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}

fn parse_args() -> Result<Option<PathBuf>> {
    let mut args = env::args().skip(1);
    let mut catalog = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--catalog" => {
                let path = args.next().context("--catalog requires a path")?;
                catalog = Some(PathBuf::from(path));
            }
            other => bail!("unknown argument: {other} (usage: trellis [--catalog <path>])"),
        }
    }
    Ok(catalog)
}

fn main() -> Result<()> {
    init_tracing();

    let catalog = match parse_args()? {
        Some(path) => Catalog::load(&path)
            .with_context(|| format!("failed to load catalog {}", path.display()))?,
        None => Catalog::builtin(),
    };
    tracing::info!(products = catalog.product_count(), "storefront ready");

    let stdin = io::stdin();
    run(&catalog, stdin.lock(), io::stdout())
}

/// The interactive loop, separated from `main` so tests can drive it with
/// in-memory readers and writers.
fn run(catalog: &Catalog, input: impl BufRead, mut out: impl Write) -> Result<()> {
    let mut store = CartStore::new();
    writeln!(out, "Welcome to Trellis. Type 'help' for commands.")?;

    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let command = match commands::parse(trimmed) {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "{err}")?;
                continue;
            }
        };
        match command {
            Command::Quit => break,
            Command::Help => writeln!(out, "{}", render::help())?,
            Command::List => write!(out, "{}", render::catalog(catalog))?,
            Command::Cart => write!(out, "{}", render::cart(&store.state()))?,
            Command::Total => writeln!(out, "{}", render::total_line(store.total()))?,
            other => dispatch(catalog, &mut store, &other, &mut out)?,
        }
    }
    Ok(())
}

/// Translate a cart-changing command into an instruction and apply it.
fn dispatch(
    catalog: &Catalog,
    store: &mut CartStore,
    command: &Command,
    out: &mut impl Write,
) -> Result<()> {
    let instruction = match command {
        Command::Add { id, quantity } => {
            let Some(product) = catalog.get(*id) else {
                writeln!(out, "No product with id {id} in the catalog.")?;
                return Ok(());
            };
            let mut draft = product.draft();
            draft.quantity = quantity.map(|q| Value::from(u64::from(q)));
            CartInstruction::AddItem(draft)
        }
        Command::Set { id, quantity } => CartInstruction::SetQuantity {
            id: *id,
            quantity: Value::from(*quantity),
        },
        Command::Increment(id) => CartInstruction::Increment { id: *id },
        Command::Decrement(id) => CartInstruction::Decrement { id: *id },
        Command::Remove(id) => CartInstruction::RemoveItem { id: *id },
        Command::List | Command::Cart | Command::Total | Command::Help | Command::Quit => {
            return Ok(());
        }
    };

    match store.apply(&instruction) {
        ApplyOutcome::Committed => write!(out, "{}", render::cart(&store.state()))?,
        ApplyOutcome::Ignored(_) => {
            writeln!(out, "Nothing in the cart with id {}.", instruction.target())?;
        }
    }
    Ok(())
}
