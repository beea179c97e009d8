//! # Order Commands
//!
//! Building an order from the menu and printing the bill split.
//!
//! ## Order Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Lifecycle                                      │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ Picking  │────►│  Party   │────►│ Summary  │       │
//! │  │  Order   │     │  Pizzas  │     │   Size   │     │ + Split  │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                    id (0 ends)      1..=1000                           │
//! │                    quantity                                             │
//! │                    continue?                                            │
//! │                                                                         │
//! │  The order is dropped after printing; nothing is persisted.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt::Write as _;
use std::io::{BufRead, Write};

use pizza_core::{BillSplit, Order, MAX_PARTY_COUNT, MAX_QUANTITY};

use crate::commands::menu::print_menu;
use crate::commands::recover;
use crate::error::AppResult;
use crate::prompt::Prompter;
use crate::state::{Session, ShellConfig};

/// Runs one order from pizza selection to the printed split.
pub fn create_order<R: BufRead, W: Write>(
    session: &Session,
    io: &mut Prompter<R, W>,
) -> AppResult<()> {
    io.say("\n=== Create Pizza Order ===")?;
    print_menu(session, io)?;

    let menu = session.menu();
    if menu.is_empty() {
        return io.say("No pizzas available to order.");
    }

    let mut order = Order::new();
    let count = menu.len() as i64;
    let id_prompt = format!("Enter pizza ID (1-{count}) or 0 to finish: ");

    loop {
        let id = io.choice(&id_prompt, 0, count)?;
        if id == 0 {
            break;
        }

        let Some(entry) = usize::try_from(id).ok().and_then(|p| menu.get_by_position(p)) else {
            io.say("Invalid pizza ID.")?;
            continue;
        };

        if !entry.is_available() {
            io.say(format!("Sorry, {} is not available.", entry.name()))?;
            continue;
        }

        let quantity = io.choice(
            &format!("Enter quantity for {}: ", entry.name()),
            1,
            MAX_QUANTITY,
        )?;

        let added = order.add_line(entry, quantity).map(|_| ());
        if added.is_ok() {
            io.say(format!("Added {quantity} x {} to order.", entry.name()))?;
        }
        recover(io, added.map_err(Into::into))?;

        if io.choice("Continue ordering? (1=Yes, 0=No): ", 0, 1)? == 0 {
            break;
        }
    }

    if order.is_empty() {
        return io.say("No items in order.");
    }

    let people = io.choice(
        "Enter number of people splitting the bill: ",
        1,
        MAX_PARTY_COUNT,
    )?;
    order.set_party_count(people)?;

    io.say(order_summary(&order, session.config()))?;
    io.say(split_table(&order.split()?, session.config()))
}

/// Renders the line table with total and party size.
pub fn order_summary(order: &Order, config: &ShellConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n=== Order Summary ===");
    let _ = writeln!(
        out,
        "Ordered at: {}",
        order.created_at().format("%Y-%m-%d %H:%M:%S UTC")
    );
    let _ = writeln!(
        out,
        "{:<25} {:<8} {:<10} {:<10}",
        "Pizza", "Qty", "Unit Price", "Subtotal"
    );
    let _ = writeln!(out, "{}", "-".repeat(55));

    for line in order.lines() {
        let _ = writeln!(
            out,
            "{:<25} {:<8} {:<10} {}",
            line.pizza_name(),
            line.quantity(),
            config.format_currency(line.unit_price()),
            config.format_currency(line.subtotal())
        );
    }

    let _ = writeln!(out, "{}", "-".repeat(55));
    let _ = writeln!(out, "Total Amount: {}", config.format_currency(order.total()));
    if let Some(people) = order.party_count() {
        let _ = write!(out, "Number of People: {people}");
    }
    out
}

/// Renders the bill split block.
///
/// ```text
/// === Bill Split Results ===
/// Total bill: €32.50
/// Number of people: 3
/// Cost per person: €10.83
/// ```
pub fn split_table(split: &BillSplit, config: &ShellConfig) -> String {
    format!(
        "\n=== Bill Split Results ===\nTotal bill: {}\nNumber of people: {}\nCost per person: {}",
        config.format_currency(split.total),
        split.party_count,
        config.format_currency(split.cost_per_person)
    )
}
