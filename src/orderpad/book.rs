//! The in-memory order book and its persistence round-trip.
//!
//! An [`OrderBook`] is the whole persisted state: the ordered collection of
//! records (insertion order is display order) plus the next-id counter. It is
//! loaded once per operation and written back after every mutation; there is
//! no partial persistence.
//!
//! Mutators assume typed, pre-validated input ([`FieldChange`], `u32`
//! quantities). Validation happens at the boundary, in
//! [`crate::validate::parse_field`] and the add command.

use crate::error::Result;
use crate::model::{FieldChange, Order, Scope, Warehouse};
use crate::store::{DataStore, NEXT_ID_KEY, ORDERS_KEY};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBook {
    orders: Vec<Order>,
    next_id: u64,
}

impl Default for OrderBook {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderBook {
    pub fn new() -> Self {
        Self {
            orders: Vec::new(),
            next_id: 1,
        }
    }

    /// Load the book from a store, degrading on bad data.
    ///
    /// Parse failures never reach the caller: a missing, malformed or
    /// non-array orders entry yields an empty collection, a missing or
    /// non-numeric counter defaults to 1. The counter is then clamped to
    /// one past the highest loaded id, so ids are never reissued even when
    /// the counter entry was lost. I/O failures are still real errors.
    pub fn load<S: DataStore>(store: &S, scope: Scope) -> Result<Self> {
        let orders: Vec<Order> = match store.read_entry(ORDERS_KEY, scope)? {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_default(),
            None => Vec::new(),
        };

        let stored_next = store
            .read_entry(NEXT_ID_KEY, scope)?
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or(1);
        // Saturate: a hand-edited id of u64::MAX must not panic the load path.
        let floor = orders
            .iter()
            .map(|o| o.id.saturating_add(1))
            .max()
            .unwrap_or(1);

        Ok(Self {
            orders,
            next_id: stored_next.max(floor),
        })
    }

    /// Write both entries back. Last write wins; there is no merging with
    /// concurrent writers.
    pub fn persist<S: DataStore>(&self, store: &mut S, scope: Scope) -> Result<()> {
        let blob = serde_json::to_string(&self.orders)?;
        store.write_entry(ORDERS_KEY, &blob, scope)?;
        store.write_entry(NEXT_ID_KEY, &self.next_id.to_string(), scope)?;
        Ok(())
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn get(&self, id: u64) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    /// Append a new record with the next monotonic id. Inputs are assumed
    /// pre-validated (product trimmed and non-empty, quantity positive).
    pub fn add(&mut self, product: String, quantity: u32, warehouse: Warehouse) -> Order {
        let order = Order {
            id: self.next_id,
            product,
            quantity,
            warehouse,
        };
        self.next_id += 1;
        self.orders.push(order.clone());
        order
    }

    /// Remove the record with the given id. Absent ids are a no-op, not an
    /// error; the counter never rolls back.
    pub fn remove(&mut self, id: u64) -> Option<Order> {
        let pos = self.orders.iter().position(|o| o.id == id)?;
        Some(self.orders.remove(pos))
    }

    /// Replace one field of the matching record in place.
    pub fn update(&mut self, id: u64, change: FieldChange) -> Option<&Order> {
        let order = self.orders.iter_mut().find(|o| o.id == id)?;
        order.apply(change);
        Some(order)
    }
}
