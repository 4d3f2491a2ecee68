use clap::Parser;
use colored::*;
use console::{Key, Term};
use directories::ProjectDirs;
use orderpad::api::{
    CmdMessage, ConfigAction, MessageLevel, OrderDraft, OrderpadApi, OrderpadPaths,
};
use orderpad::commands::config::parse_bool;
use orderpad::config::OrderpadConfig;
use orderpad::edit::{CommitOutcome, EditController};
use orderpad::error::{OrderpadError, Result};
use orderpad::model::{Column, Order, Scope, Warehouse};
use orderpad::render::{table_view, Cell, Row, TableView, HEADERS};
use orderpad::store::fs::FileStore;
use orderpad::trig;
use std::io::{self, Write};
use std::path::PathBuf;
use std::str::FromStr;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: OrderpadApi<FileStore>,
    scope: Scope,
    config: OrderpadConfig,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            product,
            quantity,
            warehouse,
        }) => handle_add(&mut ctx, product, quantity, warehouse),
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Edit { id, column, value }) => handle_edit(&mut ctx, id, column, value),
        Some(Commands::Delete { ids, yes }) => handle_delete(&mut ctx, ids, yes),
        Some(Commands::Trig { angle }) => handle_trig(angle),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Init) => handle_init(&mut ctx),
        None => handle_list(&ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let project_dir = cwd.join(".orderpad");

    let proj_dirs = ProjectDirs::from("com", "orderpad", "orderpad")
        .ok_or_else(|| OrderpadError::Store("Could not determine data dir".to_string()))?;
    let global_data_dir = proj_dirs.data_dir().to_path_buf();

    let scope = if cli.global {
        Scope::Global
    } else {
        Scope::Project
    };

    let config_dir = match scope {
        Scope::Project => &project_dir,
        Scope::Global => &global_data_dir,
    };
    let config = OrderpadConfig::load(config_dir).unwrap_or_default();

    let store = FileStore::new(Some(project_dir.clone()), global_data_dir.clone());
    let paths = OrderpadPaths {
        project: Some(project_dir),
        global: global_data_dir,
    };
    let api = OrderpadApi::new(store, paths);

    Ok(AppContext { api, scope, config })
}

fn handle_add(
    ctx: &mut AppContext,
    product: String,
    quantity: String,
    warehouse: String,
) -> Result<()> {
    let draft = OrderDraft {
        product,
        quantity,
        warehouse,
    };
    let result = ctx.api.add_order(ctx.scope, &draft)?;
    print_messages(&result.messages);
    if result.has_errors() {
        return Err(OrderpadError::Api("Order rejected; nothing saved".into()));
    }
    print_current_table(ctx)
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_orders(ctx.scope)?;
    print_table(&result.listed_orders);
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    id: u64,
    column: String,
    value: Option<String>,
) -> Result<()> {
    let column = Column::from_str(&column).map_err(OrderpadError::Api)?;

    let raw = match value {
        Some(v) => v,
        None => match edit_interactively(ctx, id, column)? {
            Some(v) => v,
            None => {
                println!("{}", "Edit cancelled.".dimmed());
                return Ok(());
            }
        },
    };

    let result = ctx.api.update_order(ctx.scope, id, column, &raw)?;
    print_messages(&result.messages);
    if result.has_errors() {
        return Err(OrderpadError::Api("Order unchanged".into()));
    }
    print_current_table(ctx)
}

fn handle_delete(ctx: &mut AppContext, ids: Vec<u64>, yes: bool) -> Result<()> {
    if !yes && ctx.config.confirm_delete && !confirm_delete(ctx, &ids)? {
        println!("{}", "Operation cancelled.".dimmed());
        return Ok(());
    }

    let result = ctx.api.delete_orders(ctx.scope, &ids)?;
    print_messages(&result.messages);
    if !result.affected_orders.is_empty() {
        print_current_table(ctx)?;
    }
    Ok(())
}

fn handle_trig(angle: f64) -> Result<()> {
    let reading = trig::compute(angle)?;
    let angle = reading.angle_degrees;
    println!("sin({}°) = {}", angle, reading.sin_display());
    println!("cos({}°) = {}", angle, reading.cos_display());
    println!("tan({}°) = {}", angle, reading.tan_display());
    println!(
        "rotation: {}° {}",
        angle,
        trig::rotation_glyph(angle).to_string().cyan()
    );
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.as_deref(), value) {
        (None, _) | (Some("confirm-delete"), None) => ConfigAction::ShowAll,
        (Some("confirm-delete"), Some(v)) => ConfigAction::SetConfirmDelete(parse_bool(&v)?),
        (Some(other), _) => {
            println!("Unknown config key: {}", other);
            return Ok(());
        }
    };

    let result = ctx.api.config(ctx.scope, action)?;
    if let Some(config) = &result.config {
        println!("confirm-delete = {}", config.confirm_delete);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.init(ctx.scope)?;
    print_messages(&result.messages);
    Ok(())
}

// Confirmation is decided here, before the core delete ever runs.
fn confirm_delete(ctx: &AppContext, ids: &[u64]) -> Result<bool> {
    let listed = ctx.api.list_orders(ctx.scope)?.listed_orders;
    let targets: Vec<&Order> = listed.iter().filter(|o| ids.contains(&o.id)).collect();
    if targets.is_empty() {
        // Nothing matches; let the command report the no-ops.
        return Ok(true);
    }

    println!("This will permanently remove the following orders:");
    for order in &targets {
        println!("  #{} {} ({} @ {})", order.id, order.product, order.quantity, order.warehouse);
    }
    print!("[Y] To delete: ");
    io::stdout().flush().map_err(OrderpadError::Io)?;

    let mut input = String::new();
    io::stdin().read_line(&mut input).map_err(OrderpadError::Io)?;
    Ok(input.trim() == "Y")
}

/// Run the inline-edit state machine against the terminal.
///
/// Returns the committed raw value, or `None` when the session was
/// cancelled with Esc. Validation errors keep the session alive with the
/// message shown under the prompt, like the original inline cell editor.
fn edit_interactively(ctx: &AppContext, id: u64, column: Column) -> Result<Option<String>> {
    let listed = ctx.api.list_orders(ctx.scope)?.listed_orders;
    let order = listed
        .iter()
        .find(|o| o.id == id)
        .ok_or(OrderpadError::OrderNotFound(id))?;

    let term = Term::stderr();
    if !term.is_term() {
        return Err(OrderpadError::Api(
            "Interactive edit needs a terminal; pass the new value as an argument".into(),
        ));
    }

    let mut ctrl = EditController::new();
    ctrl.begin(order, column);

    match column {
        Column::Warehouse => select_warehouse(&term, &mut ctrl, order.warehouse),
        Column::Product | Column::Quantity => edit_line(&term, &mut ctrl),
    }
}

fn edit_line(term: &Term, ctrl: &mut EditController) -> Result<Option<String>> {
    let (prompt, mut buf) = match ctrl.active() {
        Some(active) => (
            format!("{}> ", active.column),
            // Pre-fill with the current value, like a selected input control.
            active.original.clone(),
        ),
        None => return Ok(None),
    };

    loop {
        term.clear_line()?;
        term.write_str(&format!("\r{}{}", prompt, buf))?;

        match term.read_key()? {
            Key::Enter => match ctrl.commit(&buf) {
                CommitOutcome::Committed(_) => {
                    term.write_line("")?;
                    return Ok(Some(buf));
                }
                CommitOutcome::Rejected(message) => {
                    term.write_line("")?;
                    term.write_line(&format!("  {}", message.red()))?;
                }
                CommitOutcome::NotEditing => return Ok(None),
            },
            Key::Escape => {
                ctrl.cancel();
                term.write_line("")?;
                return Ok(None);
            }
            Key::Backspace => {
                buf.pop();
            }
            Key::Char(c) => buf.push(c),
            _ => {}
        }
    }
}

fn select_warehouse(
    term: &Term,
    ctrl: &mut EditController,
    current: Warehouse,
) -> Result<Option<String>> {
    let mut idx = Warehouse::ALL
        .iter()
        .position(|w| *w == current)
        .unwrap_or(0);

    loop {
        term.clear_line()?;
        term.write_str(&format!(
            "\rwarehouse> {} {}",
            Warehouse::ALL[idx],
            "(arrows cycle, Enter commits, Esc cancels)".dimmed()
        ))?;

        match term.read_key()? {
            Key::ArrowDown | Key::ArrowRight => idx = (idx + 1) % Warehouse::ALL.len(),
            Key::ArrowUp | Key::ArrowLeft => {
                idx = (idx + Warehouse::ALL.len() - 1) % Warehouse::ALL.len()
            }
            Key::Enter => match ctrl.commit(Warehouse::ALL[idx].as_str()) {
                CommitOutcome::Committed(_) => {
                    term.write_line("")?;
                    return Ok(Some(Warehouse::ALL[idx].as_str().to_string()));
                }
                CommitOutcome::Rejected(message) => {
                    term.write_line("")?;
                    term.write_line(&format!("  {}", message.red()))?;
                }
                CommitOutcome::NotEditing => return Ok(None),
            },
            Key::Escape => {
                ctrl.cancel();
                term.write_line("")?;
                return Ok(None);
            }
            _ => {}
        }
    }
}

fn print_current_table(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_orders(ctx.scope)?;
    print_table(&result.listed_orders);
    Ok(())
}

const COLUMN_GAP: usize = 2;
const DELETE_HINT: &str = "del";

fn print_table(orders: &[Order]) {
    let rows = match table_view(orders) {
        TableView::Empty { placeholder } => {
            println!("{}", placeholder.dimmed());
            return;
        }
        TableView::Rows(rows) => rows,
    };

    let widths = column_widths(&rows);

    let mut header = String::new();
    for (i, title) in HEADERS.iter().enumerate() {
        header.push_str(&pad_to_width(title, widths[i]));
        header.push_str(&" ".repeat(COLUMN_GAP));
    }
    println!("{}", header.trim_end().bold());
    println!(
        "{}",
        "-".repeat(widths.iter().sum::<usize>() + COLUMN_GAP * (HEADERS.len() - 1))
    );

    for row in &rows {
        let mut line = String::new();
        for (i, cell) in row.cells.iter().enumerate() {
            let text = match cell {
                Cell::DeleteAction { .. } => DELETE_HINT.red().to_string(),
                Cell::ReadOnly(text) => text.dimmed().to_string(),
                Cell::Editable { text, .. } => text.clone(),
            };
            // Pad against the visible width, not the ANSI-coded length.
            let visible = cell_visible_text(cell);
            let padding = widths[i].saturating_sub(visible.width());
            line.push_str(&text);
            line.push_str(&" ".repeat(padding + COLUMN_GAP));
        }
        println!("{}", line.trim_end());
    }
}

fn cell_visible_text(cell: &Cell) -> &str {
    match cell {
        Cell::DeleteAction { .. } => DELETE_HINT,
        other => other.text(),
    }
}

fn column_widths(rows: &[Row]) -> Vec<usize> {
    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.width()).collect();
    for row in rows {
        for (i, cell) in row.cells.iter().enumerate() {
            widths[i] = widths[i].max(cell_visible_text(cell).width());
        }
    }
    widths
}

fn pad_to_width(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}
