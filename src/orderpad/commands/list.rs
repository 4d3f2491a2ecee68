use crate::book::OrderBook;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Scope;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, scope: Scope) -> Result<CmdResult> {
    let book = OrderBook::load(store, scope)?;
    Ok(CmdResult::default().with_listed_orders(book.orders().to_vec()))
}
