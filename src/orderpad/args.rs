use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "orderpad")]
#[command(about = "Project-aware order tracking for the command line", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Operate on the global order book
    #[arg(short, long, global = true)]
    pub global: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new order
    #[command(alias = "a")]
    Add {
        /// Product name
        product: String,

        /// Quantity (positive integer)
        quantity: String,

        /// Warehouse: Primary, Secondary or Temporary
        warehouse: String,
    },

    /// List orders as a table
    #[command(alias = "ls")]
    List,

    /// Edit one field of an order
    #[command(alias = "e")]
    Edit {
        /// Order id
        id: u64,

        /// Column: product, quantity or warehouse
        column: String,

        /// New value (omit to edit interactively; Enter commits, Esc cancels)
        value: Option<String>,
    },

    /// Delete one or more orders
    #[command(alias = "rm")]
    Delete {
        /// Order ids (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        ids: Vec<u64>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Compute sine, cosine and tangent for an angle in degrees [0, 360]
    Trig {
        /// Angle in degrees
        #[arg(allow_negative_numbers = true)]
        angle: f64,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., confirm-delete)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Initialize the store
    Init,
}
