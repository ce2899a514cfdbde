//! Plain-text rendering of the catalog and the cart.
//!
//! Pure string builders so tests can assert on exact output. Money is
//! rounded to cents here and only here; stored state keeps full precision.

use std::fmt::Write;

use trellis_catalog::Catalog;
use trellis_core::projection;
use trellis_types::CartState;

const CURRENCY: &str = "R";

#[must_use]
pub fn help() -> &'static str {
    "Commands:\n  \
     list                 show the catalog\n  \
     cart                 show the cart\n  \
     add <id> [qty]       add a product to the cart\n  \
     set <id> <qty>       set a line's quantity (0 or less removes it)\n  \
     inc <id>             one more of a line\n  \
     dec <id>             one fewer of a line\n  \
     rm <id>              remove a line\n  \
     total                show the cart total\n  \
     quit                 leave the shop"
}

#[must_use]
pub fn catalog(catalog: &Catalog) -> String {
    let mut out = String::new();
    for section in catalog.sections() {
        let _ = writeln!(out, "{}", section.category);
        for product in &section.products {
            let _ = writeln!(
                out,
                "  [{:>2}] {:<16} {}{:.2}",
                product.id, product.name, CURRENCY, product.price
            );
        }
    }
    out
}

#[must_use]
pub fn cart(state: &CartState) -> String {
    if state.is_empty() {
        return "Your cart is empty\n".to_string();
    }
    let mut out = String::from("Your cart:\n");
    for item in state.items() {
        let subtotal = projection::round_to_cents(projection::line_subtotal(item));
        let _ = writeln!(
            out,
            "  {:<16} {}{:.2} x {} = {}{subtotal:.2}",
            item.display_name(),
            CURRENCY,
            item.price().get(),
            item.quantity(),
            CURRENCY,
        );
    }
    let _ = writeln!(out, "{}", total_line(projection::cart_total(state)));
    out
}

#[must_use]
pub fn total_line(total: f64) -> String {
    format!(
        "Total: {CURRENCY}{:.2}",
        projection::round_to_cents(total)
    )
}
