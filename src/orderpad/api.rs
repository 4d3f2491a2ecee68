//! # API Facade
//!
//! A thin facade over the command layer, the single entry point for all
//! order operations regardless of the UI driving them.
//!
//! The facade dispatches and normalizes; business logic lives in
//! `commands/*.rs`. Nothing from here inward writes to stdout/stderr,
//! calls `process::exit`, or assumes a terminal — the same core could sit
//! behind a different front end unchanged.
//!
//! `OrderpadApi<S: DataStore>` is generic over the storage backend:
//! `FileStore` in production, `InMemoryStore` in tests.

use crate::commands;
use crate::error::Result;
use crate::model::{Column, Scope};
use crate::store::DataStore;

pub struct OrderpadApi<S: DataStore> {
    store: S,
    paths: commands::OrderpadPaths,
}

impl<S: DataStore> OrderpadApi<S> {
    pub fn new(store: S, paths: commands::OrderpadPaths) -> Self {
        Self { store, paths }
    }

    pub fn add_order(&mut self, scope: Scope, draft: &OrderDraft) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, scope, draft)
    }

    pub fn list_orders(&self, scope: Scope) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, scope)
    }

    /// Remove orders. Callers confirm first; see the delete command's notes.
    pub fn delete_orders(&mut self, scope: Scope, ids: &[u64]) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, scope, ids)
    }

    pub fn update_order(
        &mut self,
        scope: Scope,
        id: u64,
        column: Column,
        raw_value: &str,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, scope, id, column, raw_value)
    }

    pub fn config(&self, scope: Scope, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, scope, action)
    }

    pub fn init(&mut self, scope: Scope) -> Result<commands::CmdResult> {
        commands::init::run(&mut self.store, &self.paths, scope)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, OrderDraft, OrderpadPaths};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use std::path::PathBuf;

    fn api() -> OrderpadApi<InMemoryStore> {
        OrderpadApi::new(
            InMemoryStore::new(),
            OrderpadPaths {
                project: Some(PathBuf::from(".orderpad")),
                global: PathBuf::from("/tmp/orderpad-global"),
            },
        )
    }

    #[test]
    fn add_list_delete_flow() {
        let mut api = api();
        let draft = OrderDraft {
            product: "Bolts".into(),
            quantity: "3".into(),
            warehouse: "Primary".into(),
        };
        api.add_order(Scope::Project, &draft).unwrap();

        let listed = api.list_orders(Scope::Project).unwrap().listed_orders;
        assert_eq!(listed.len(), 1);

        api.delete_orders(Scope::Project, &[listed[0].id]).unwrap();
        assert!(api
            .list_orders(Scope::Project)
            .unwrap()
            .listed_orders
            .is_empty());
    }

    #[test]
    fn update_dispatches_to_the_right_column() {
        let mut api = api();
        api.add_order(
            Scope::Project,
            &OrderDraft {
                product: "Bolts".into(),
                quantity: "3".into(),
                warehouse: "Primary".into(),
            },
        )
        .unwrap();

        api.update_order(Scope::Project, 1, Column::Warehouse, "Temporary")
            .unwrap();
        let listed = api.list_orders(Scope::Project).unwrap().listed_orders;
        assert_eq!(listed[0].warehouse, crate::model::Warehouse::Temporary);
    }
}
