use crate::book::OrderBook;
use crate::commands::{CmdMessage, CmdResult, OrderpadPaths};
use crate::error::Result;
use crate::model::Scope;
use crate::store::{DataStore, ORDERS_KEY};

/// Create the scope directory and seed empty entries, unless a book already
/// exists there.
pub fn run<S: DataStore>(
    store: &mut S,
    paths: &OrderpadPaths,
    scope: Scope,
) -> Result<CmdResult> {
    let dir = paths.scope_dir(scope)?;
    let mut result = CmdResult::default();

    if store.read_entry(ORDERS_KEY, scope)?.is_some() {
        result.add_message(CmdMessage::info(format!(
            "Store already initialized at {}",
            dir.display()
        )));
        return Ok(result);
    }

    OrderBook::new().persist(store, scope)?;
    result.add_message(CmdMessage::success(format!(
        "Initialized empty order store at {}",
        dir.display()
    )));
    Ok(result)
}
