//! Shopper command parsing.
//!
//! One command per line, whitespace-separated. Parsing is strict about
//! shape (argument counts, integer ids) but the resulting instructions go
//! through the store's own coercion like any other collaborator's.

use anyhow::{Result, bail};

use trellis_types::ProductId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Cart,
    Total,
    Help,
    Quit,
    Add { id: ProductId, quantity: Option<u32> },
    Set { id: ProductId, quantity: i64 },
    Increment(ProductId),
    Decrement(ProductId),
    Remove(ProductId),
}

pub fn parse(line: &str) -> Result<Command> {
    let mut parts = line.split_whitespace();
    let Some(word) = parts.next() else {
        bail!("empty command");
    };

    let command = match word {
        "list" => Command::List,
        "cart" => Command::Cart,
        "total" => Command::Total,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        "add" => {
            let id = required_id(word, parts.next())?;
            let quantity = match parts.next() {
                Some(raw) => Some(parse_quantity(raw)?),
                None => None,
            };
            Command::Add { id, quantity }
        }
        "set" => {
            let id = required_id(word, parts.next())?;
            let Some(raw) = parts.next() else {
                bail!("'set' needs a quantity: set <id> <qty>");
            };
            let quantity = raw
                .parse::<i64>()
                .map_err(|_| anyhow::anyhow!("'{raw}' is not a whole number"))?;
            Command::Set { id, quantity }
        }
        "inc" => Command::Increment(required_id(word, parts.next())?),
        "dec" => Command::Decrement(required_id(word, parts.next())?),
        "rm" => Command::Remove(required_id(word, parts.next())?),
        other => bail!("unknown command '{other}' (try 'help')"),
    };

    if let Some(extra) = parts.next() {
        bail!("unexpected argument '{extra}' after '{word}'");
    }
    Ok(command)
}

fn required_id(word: &str, raw: Option<&str>) -> Result<ProductId> {
    let Some(raw) = raw else {
        bail!("'{word}' needs a product id: {word} <id>");
    };
    match raw.parse::<u64>() {
        Ok(id) => Ok(ProductId::new(id)),
        Err(_) => bail!("'{raw}' is not a product id"),
    }
}

fn parse_quantity(raw: &str) -> Result<u32> {
    match raw.parse::<u32>() {
        Ok(q) if q >= 1 => Ok(q),
        _ => bail!("'{raw}' is not a valid quantity (whole number, at least 1)"),
    }
}
