use crate::book::OrderBook;
use crate::commands::{CmdMessage, CmdResult, OrderDraft};
use crate::error::Result;
use crate::model::Scope;
use crate::store::DataStore;
use crate::validate;

/// Validate a draft and, if every field passes, append a new order.
///
/// All three fields are parsed even after the first failure so the result
/// carries one message per offending field. Nothing is mutated or persisted
/// unless the whole draft is valid.
pub fn run<S: DataStore>(store: &mut S, scope: Scope, draft: &OrderDraft) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let product = validate::parse_product(&draft.product)
        .map_err(|msg| result.add_message(CmdMessage::error(format!("product: {}", msg))))
        .ok();
    let quantity = validate::parse_quantity(&draft.quantity);
    if quantity.is_none() {
        result.add_message(CmdMessage::error(format!(
            "quantity: {}",
            validate::QUANTITY_ERROR
        )));
    }
    let warehouse = validate::parse_warehouse(&draft.warehouse)
        .map_err(|msg| result.add_message(CmdMessage::error(format!("warehouse: {}", msg))))
        .ok();

    let (Some(product), Some(quantity), Some(warehouse)) = (product, quantity, warehouse) else {
        return Ok(result);
    };

    let mut book = OrderBook::load(store, scope)?;
    let order = book.add(product, quantity, warehouse);
    book.persist(store, scope)?;

    result.add_message(CmdMessage::success(format!(
        "Order added (#{}): {}",
        order.id, order.product
    )));
    result.affected_orders.push(order);
    Ok(result)
}
