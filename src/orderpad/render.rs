//! Declarative table rendering.
//!
//! [`table_view`] is a pure function of the order collection: it describes the
//! rows without touching a terminal. Each editable cell is tagged with its
//! owning order id and column so an interaction layer can map a cell back to
//! the record it belongs to. The CLI decides how the description is printed.

use crate::model::{Column, Order};

pub const EMPTY_PLACEHOLDER: &str = "No orders recorded.";

pub const HEADERS: [&str; 5] = ["ID", "Product", "Quantity", "Warehouse", ""];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Display-only text (the id column).
    ReadOnly(String),
    /// Text the user can edit in place.
    Editable {
        order_id: u64,
        column: Column,
        text: String,
    },
    /// The per-row delete action.
    DeleteAction { order_id: u64 },
}

impl Cell {
    pub fn text(&self) -> &str {
        match self {
            Cell::ReadOnly(text) => text,
            Cell::Editable { text, .. } => text,
            Cell::DeleteAction { .. } => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub order_id: u64,
    pub cells: Vec<Cell>,
}

/// The whole table: either a single placeholder line or one row per record,
/// in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableView {
    Empty { placeholder: &'static str },
    Rows(Vec<Row>),
}

pub fn table_view(orders: &[Order]) -> TableView {
    if orders.is_empty() {
        return TableView::Empty {
            placeholder: EMPTY_PLACEHOLDER,
        };
    }

    let rows = orders
        .iter()
        .map(|order| Row {
            order_id: order.id,
            cells: vec![
                Cell::ReadOnly(order.id.to_string()),
                Cell::Editable {
                    order_id: order.id,
                    column: Column::Product,
                    text: order.product.clone(),
                },
                Cell::Editable {
                    order_id: order.id,
                    column: Column::Quantity,
                    text: order.quantity.to_string(),
                },
                Cell::Editable {
                    order_id: order.id,
                    column: Column::Warehouse,
                    text: order.warehouse.to_string(),
                },
                Cell::DeleteAction { order_id: order.id },
            ],
        })
        .collect();

    TableView::Rows(rows)
}
