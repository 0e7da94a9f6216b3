//! CLI output formatting.
//!
//! Prints basket API responses either as raw JSON (for scripting) or as
//! short colored lines, with a table for the basket list.

use std::fmt::Display;
use std::sync::{OnceLock, RwLock};

use owo_colors::OwoColorize;
use serde_json::Value;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::adapter::inbound::controller::Response;

/// Runtime output configuration shared by CLI handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Emit machine-readable JSON output instead of human-readable text.
    pub json: bool,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool) -> Self {
        Self { json }
    }
}

static OUTPUT_CONFIG: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn config_cell() -> &'static RwLock<OutputConfig> {
    OUTPUT_CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()))
}

fn read_config() -> OutputConfig {
    match config_cell().read() {
        Ok(config) => *config,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

/// Apply output settings from global CLI flags.
pub fn configure(config: OutputConfig) {
    match config_cell().write() {
        Ok(mut current) => *current = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

/// Return whether machine-readable JSON output is enabled.
#[must_use]
pub fn is_json() -> bool {
    read_config().json
}

/// Print a success line.
pub fn success(message: &str) {
    println!("  {} {}", "✓".green(), message);
}

/// Print a warning line.
pub fn warning(message: &str) {
    println!("  {} {}", "⚠".yellow(), message);
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    println!("  {:<10} {}", label.dimmed(), value);
}

/// Print an error line to stderr.
pub fn error(message: &str) {
    if is_json() {
        eprintln!("{}", serde_json::json!({ "error": message }));
        return;
    }

    eprintln!("  {} {}", "×".red(), message);
}

#[derive(Tabled)]
struct BasketRow {
    #[tabled(rename = "")]
    marker: &'static str,
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
}

/// Print a successful basket API response.
pub fn response(response: &Response) {
    if is_json() {
        println!("{}", response.body);
        return;
    }

    let body = &response.body;
    let action = body["action"].as_str().unwrap_or_default();

    match action {
        "add" | "remove" | "clear" => contents_summary(action, body),
        "dump" => dump(body),
        "list" => list(body),
        "create" => success(&format!("Created basket {}", body["result"])),
        "delete" => success(&format!("Deleted basket {}", body["result"])),
        "rename" => success(&format!("Renamed basket {}", body["result"])),
        "select" => success(&format!("Selected basket {}", body["result"])),
        _ => println!("{body}"),
    }
}

fn item_list(value: &Value) -> String {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default()
}

fn contents_summary(action: &str, body: &Value) {
    let changed = body["result"].as_array().map_or(0, Vec::len);
    let count = &body["count"];
    let verb = match action {
        "add" => "Added",
        "remove" => "Removed",
        _ => "Cleared",
    };

    success(&format!("{verb} {changed} item(s), {count} in basket"));
    if changed > 0 {
        field("Items", item_list(&body["result"]));
    }
    if body["full"].as_bool().unwrap_or(false) {
        warning("Basket is full");
    }
}

fn dump(body: &Value) {
    field("Count", &body["count"]);
    field("Items", item_list(&body["result"]).cyan());
    if body["full"].as_bool().unwrap_or(false) {
        warning("Basket is full");
    }
}

fn list(body: &Value) {
    let current = body["current"].as_i64();
    let rows: Vec<BasketRow> = body["result"]
        .as_array()
        .map(|baskets| {
            baskets
                .iter()
                .map(|basket| {
                    let id = basket["id"].as_i64().unwrap_or_default();
                    BasketRow {
                        marker: if Some(id) == current { "*" } else { "" },
                        id,
                        name: basket["name"].as_str().unwrap_or_default().to_string(),
                    }
                })
                .collect()
        })
        .unwrap_or_default();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");
}
