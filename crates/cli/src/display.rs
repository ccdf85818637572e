//! Rendering command feedback and the current lists to the terminal.

use std::io::Write;

use cake_collate_core::command::{
    AddCommand, AddOrderItemCommand, ClearCommand, DeleteCommand, DeleteOrderItemCommand,
    DeliveryStatusCommand, EditCommand, ExitCommand, FindCommand, HelpCommand, ListCommand,
    ListOrderItemsCommand, RemindCommand, RequestCommand,
};
use cake_collate_core::model::Model;
use cake_collate_core::order::{DeliveryStatus, Order};
use cake_collate_core::parser::CommandWord;
use crossterm::queue;
use crossterm::style::{
    Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor,
};
use itertools::Itertools;

/// What is shown after a command ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Orders,
    OrderItems,
    Nothing,
}

impl View {
    /// View for the command typed on `input`. Unknown commands show nothing.
    #[must_use]
    pub fn after(input: &str) -> Self {
        let Some(command_word) = input
            .split_whitespace()
            .next()
            .and_then(|word| word.parse::<CommandWord>().ok())
        else {
            return View::Nothing;
        };

        match command_word {
            CommandWord::Add
            | CommandWord::Delete
            | CommandWord::Edit
            | CommandWord::List
            | CommandWord::Find
            | CommandWord::Remind
            | CommandWord::Delivered
            | CommandWord::Undelivered
            | CommandWord::Cancelled
            | CommandWord::Request
            | CommandWord::Clear => View::Orders,
            CommandWord::AddItem | CommandWord::DeleteItem | CommandWord::ListItems => {
                View::OrderItems
            }
            CommandWord::Help | CommandWord::Exit => View::Nothing,
        }
    }
}

/// Prints the router's feedback for one command.
///
/// # Arguments
///
/// * `out` - Where to write, usually the locked stdout
/// * `feedback` - Success message or error text
/// * `success` - Green when true, red otherwise
///
/// # Errors
///
/// Returns an I/O error if writing to `out` fails.
pub fn print_feedback(out: &mut impl Write, feedback: &str, success: bool) -> std::io::Result<()> {
    let color = if success { Color::Green } else { Color::Red };
    queue!(
        out,
        SetForegroundColor(color),
        Print(feedback),
        ResetColor,
        Print("\n")
    )?;
    out.flush()
}

fn status_color(status: DeliveryStatus) -> Color {
    match status {
        DeliveryStatus::Undelivered => Color::Yellow,
        DeliveryStatus::Delivered => Color::DarkGreen,
        DeliveryStatus::Cancelled => Color::DarkGrey,
    }
}

fn print_order(out: &mut impl Write, number: usize, order: &Order) -> std::io::Result<()> {
    queue!(
        out,
        SetAttribute(Attribute::Bold),
        Print(format!("{number:>3}. {}", order.name)),
        SetAttribute(Attribute::Reset),
        Print("  "),
        SetForegroundColor(status_color(order.delivery_status)),
        Print(format!("[{}]", order.delivery_status)),
        ResetColor,
        Print(format!("  due {}\n", order.delivery_date)),
        Print(format!(
            "     {} | {} | {}\n",
            order.phone, order.email, order.address
        )),
        Print(format!(
            "     {}\n",
            order.order_descriptions.iter().join(", ")
        )),
    )?;

    if !order.tags.is_empty() {
        queue!(
            out,
            SetForegroundColor(Color::Cyan),
            Print(format!(
                "     {}\n",
                order.tags.iter().map(|tag| format!("#{tag}")).join(" ")
            )),
            ResetColor
        )?;
    }

    if !order.request.is_empty() {
        queue!(out, Print(format!("     Request: {}\n", order.request)))?;
    }

    Ok(())
}

/// Numbered list of the orders currently displayed.
///
/// The numbers are the indices commands such as `delete` and `edit` take.
///
/// # Errors
///
/// Returns an I/O error if writing to `out` fails.
pub fn print_orders(out: &mut impl Write, model: &Model) -> std::io::Result<()> {
    let orders = model.filtered_orders();
    if orders.is_empty() {
        queue!(out, Print("No orders to show.\n"))?;
    }

    for (i, order) in orders.into_iter().enumerate() {
        print_order(out, i + 1, order)?;
    }
    out.flush()
}

/// Numbered list of the order items catalog.
///
/// # Errors
///
/// Returns an I/O error if writing to `out` fails.
pub fn print_order_items(out: &mut impl Write, model: &Model) -> std::io::Result<()> {
    let items = model.order_items().items();
    if items.is_empty() {
        queue!(out, Print("No order items to show.\n"))?;
    }

    for (i, item) in items.iter().enumerate() {
        queue!(out, Print(format!("{:>3}. {item}\n", i + 1)))?;
    }
    out.flush()
}

/// Prints the list `view` names, or nothing.
///
/// # Arguments
///
/// * `out` - Where to write
/// * `view` - Usually [`View::after`] the command that just ran
/// * `model` - Model to read the lists from
///
/// # Errors
///
/// Returns an I/O error if writing to `out` fails.
pub fn print_view(out: &mut impl Write, view: View, model: &Model) -> std::io::Result<()> {
    match view {
        View::Orders => print_orders(out, model),
        View::OrderItems => print_order_items(out, model),
        View::Nothing => Ok(()),
    }
}

/// Usage of every command, one block each.
#[must_use]
pub fn help_text() -> String {
    let status_usages = [
        DeliveryStatus::Delivered,
        DeliveryStatus::Undelivered,
        DeliveryStatus::Cancelled,
    ]
    .map(DeliveryStatusCommand::usage);

    let help = [
        AddCommand::MESSAGE_USAGE,
        DeleteCommand::MESSAGE_USAGE,
        EditCommand::MESSAGE_USAGE,
        ListCommand::MESSAGE_USAGE,
        FindCommand::MESSAGE_USAGE,
        RemindCommand::MESSAGE_USAGE,
    ]
    .into_iter()
    .chain(status_usages.iter().map(String::as_str))
    .chain([
        RequestCommand::MESSAGE_USAGE,
        ClearCommand::MESSAGE_USAGE,
        AddOrderItemCommand::MESSAGE_USAGE,
        DeleteOrderItemCommand::MESSAGE_USAGE,
        ListOrderItemsCommand::MESSAGE_USAGE,
        HelpCommand::MESSAGE_USAGE,
        ExitCommand::MESSAGE_USAGE,
    ])
    .join("\n\n");
    help
}

/// Prints a heading followed by [`help_text`].
///
/// # Errors
///
/// Returns an I/O error if writing to `out` fails.
pub fn print_help(out: &mut impl Write) -> std::io::Result<()> {
    queue!(
        out,
        SetAttribute(Attribute::Bold),
        Print("CakeCollate commands\n\n"),
        SetAttribute(Attribute::Reset),
        Print(help_text()),
        Print("\n")
    )?;
    out.flush()
}
