use crate::book::OrderBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Scope;
use crate::store::DataStore;

/// Remove orders by id. Confirmation is the caller's concern: by the time
/// this runs the delete is already decided, so the core stays free of
/// blocking prompts.
///
/// Absent ids are reported as a no-op, not an error.
pub fn run<S: DataStore>(store: &mut S, scope: Scope, ids: &[u64]) -> Result<CmdResult> {
    let mut book = OrderBook::load(store, scope)?;
    let mut result = CmdResult::default();
    let mut removed_any = false;

    for &id in ids {
        match book.remove(id) {
            Some(order) => {
                removed_any = true;
                result.add_message(CmdMessage::success(format!(
                    "Order deleted (#{}): {}",
                    order.id, order.product
                )));
                result.affected_orders.push(order);
            }
            None => {
                result.add_message(CmdMessage::info(format!("No order with id {}.", id)));
            }
        }
    }

    if removed_any {
        book.persist(store, scope)?;
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, OrderDraft};
    use crate::store::memory::InMemoryStore;

    fn seed(store: &mut InMemoryStore, names: &[&str]) {
        for name in names {
            add::run(
                store,
                Scope::Project,
                &OrderDraft {
                    product: (*name).into(),
                    quantity: "1".into(),
                    warehouse: "Primary".into(),
                },
            )
            .unwrap();
        }
    }

    #[test]
    fn deletes_and_persists() {
        let mut store = InMemoryStore::new();
        seed(&mut store, &["A", "B", "C"]);

        let result = run(&mut store, Scope::Project, &[2]).unwrap();
        assert_eq!(result.affected_orders.len(), 1);
        assert_eq!(result.affected_orders[0].product, "B");

        let book = OrderBook::load(&store, Scope::Project).unwrap();
        assert!(book.get(2).is_none());
        assert_eq!(book.orders().len(), 2);
        // The counter never rolls back.
        assert_eq!(book.next_id(), 4);
    }

    #[test]
    fn absent_id_is_a_reported_noop() {
        let mut store = InMemoryStore::new();
        seed(&mut store, &["A"]);

        let result = run(&mut store, Scope::Project, &[42]).unwrap();
        assert!(result.affected_orders.is_empty());
        assert!(!result.has_errors());
        assert_eq!(result.messages.len(), 1);

        let book = OrderBook::load(&store, Scope::Project).unwrap();
        assert_eq!(book.orders().len(), 1);
    }
}
