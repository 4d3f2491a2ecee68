use crate::book::OrderBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{OrderpadError, Result};
use crate::model::{Column, Scope};
use crate::store::DataStore;
use crate::validate::parse_field;

/// Validate raw input for one column and replace that field of the matching
/// order. The one-shot counterpart of the interactive edit session; both go
/// through [`parse_field`], so the trim rule is identical.
pub fn run<S: DataStore>(
    store: &mut S,
    scope: Scope,
    id: u64,
    column: Column,
    raw_value: &str,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let change = match parse_field(column, raw_value) {
        Ok(change) => change,
        Err(message) => {
            result.add_message(CmdMessage::error(format!("{}: {}", column, message)));
            return Ok(result);
        }
    };

    let mut book = OrderBook::load(store, scope)?;
    let order = book
        .update(id, change)
        .ok_or(OrderpadError::OrderNotFound(id))?
        .clone();
    book.persist(store, scope)?;

    result.add_message(CmdMessage::success(format!(
        "Order updated (#{}): {} = {}",
        order.id,
        column,
        order.field_text(column)
    )));
    result.affected_orders.push(order);
    Ok(result)
}
