use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    Project,
    Global,
}

/// The fixed set of storage locations an order can be assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Warehouse {
    Primary,
    Secondary,
    Temporary,
}

impl Warehouse {
    pub const ALL: [Warehouse; 3] = [
        Warehouse::Primary,
        Warehouse::Secondary,
        Warehouse::Temporary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Warehouse::Primary => "Primary",
            Warehouse::Secondary => "Secondary",
            Warehouse::Temporary => "Temporary",
        }
    }
}

impl fmt::Display for Warehouse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Warehouse {
    type Err = String;

    // Exact match only; membership in the fixed set is part of validation.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Primary" => Ok(Warehouse::Primary),
            "Secondary" => Ok(Warehouse::Secondary),
            "Temporary" => Ok(Warehouse::Temporary),
            other => Err(format!("Unknown warehouse: {}", other)),
        }
    }
}

/// An editable column of the order table. The id column is read-only and
/// intentionally absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Product,
    Quantity,
    Warehouse,
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Column::Product => f.write_str("product"),
            Column::Quantity => f.write_str("quantity"),
            Column::Warehouse => f.write_str("warehouse"),
        }
    }
}

impl FromStr for Column {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "product" => Ok(Column::Product),
            "quantity" => Ok(Column::Quantity),
            "warehouse" => Ok(Column::Warehouse),
            other => Err(format!(
                "Unknown column: {} (expected product, quantity or warehouse)",
                other
            )),
        }
    }
}

/// A validated single-field replacement, ready to apply to an order.
///
/// Raw user text never reaches the book: it is parsed into one of these
/// variants first, so an out-of-range quantity or an unknown warehouse is
/// unrepresentable past the validation boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldChange {
    Product(String),
    Quantity(u32),
    Warehouse(Warehouse),
}

impl FieldChange {
    pub fn column(&self) -> Column {
        match self {
            FieldChange::Product(_) => Column::Product,
            FieldChange::Quantity(_) => Column::Quantity,
            FieldChange::Warehouse(_) => Column::Warehouse,
        }
    }
}

/// One tracked order: a unique monotonic id, a product name, a positive
/// quantity and an assigned warehouse. This is exactly the persisted shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: u64,
    pub product: String,
    pub quantity: u32,
    pub warehouse: Warehouse,
}

impl Order {
    pub fn field_text(&self, column: Column) -> String {
        match column {
            Column::Product => self.product.clone(),
            Column::Quantity => self.quantity.to_string(),
            Column::Warehouse => self.warehouse.to_string(),
        }
    }

    pub fn apply(&mut self, change: FieldChange) {
        match change {
            FieldChange::Product(p) => self.product = p,
            FieldChange::Quantity(q) => self.quantity = q,
            FieldChange::Warehouse(w) => self.warehouse = w,
        }
    }
}
