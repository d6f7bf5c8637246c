//! Quotes example - drives a table of safari quotes from the terminal
//!
//! Loads quotes from an in-memory source behind a row cache, then searches,
//! sorts, pages and bulk-deletes them, printing the table after each step.
//! Engine transitions are logged to `quotes.log`.
//!
//! Run with: `cargo run -p quote-table --example quotes`

use std::fs::File;

use log::LevelFilter;
use quote_table::error::SourceError;
use quote_table::model::Record;
use quote_table::model::Value;
use quote_table::source::CachedSource;
use quote_table::source::MemorySource;
use quote_table::source::RecordSource;
use quote_table::table::Alignment;
use quote_table::table::BulkAction;
use quote_table::table::Cell;
use quote_table::table::Column;
use quote_table::table::TableEngine;
use quote_table::table::TableOptions;
use quote_table::table::Variant;
use simplelog::Config;
use simplelog::WriteLogger;

// =============================================================================
// Data
// =============================================================================

const GUESTS: [&str; 8] = [
    "Amani Otieno",
    "Lena Fischer",
    "Tom Mara",
    "Sara Lind",
    "Kofi Mensah",
    "Ines Duarte",
    "Yuki Sato",
    "Noah Becker",
];

const LODGES: [&str; 3] = ["Mara Serena", "Amboseli Camp", "Sand River"];

const OPTIONS: &str = r#"{
    "searchFields": ["guest", "lodge"],
    "itemsPerPage": 5,
    "bulkActions": [
        { "label": "Confirm", "value": "confirm" },
        { "label": "Delete", "value": "delete", "variant": "destructive" }
    ]
}"#;

fn seed() -> MemorySource {
    let rows = (1..=23i64)
        .map(|i| {
            let idx = i as usize;
            Record::new(i)
                .set("guest", GUESTS[idx % GUESTS.len()])
                .set("lodge", LODGES[idx % LODGES.len()])
                .set("nights", if i % 6 == 0 { Value::Null } else { Value::from(i % 9 + 1) })
                .set("confirmed", i % 4 == 0)
        })
        .collect();
    MemorySource::new().with_table("quotes", rows)
}

fn columns() -> Vec<Column<Record>> {
    vec![
        Column::new("id", "#").align(Alignment::Right),
        Column::new("guest", "Guest").sortable(),
        Column::new("lodge", "Lodge").sortable(),
        Column::new("nights", "Nights").sortable().align(Alignment::Right),
        Column::new("confirmed", "Status").render(|value, _| match value {
            Value::Bool(true) => Cell::badge("confirmed", Variant::Default),
            _ => Cell::badge("pending", Variant::Outline),
        }),
    ]
}

// =============================================================================
// Printing
// =============================================================================

fn print_table(title: &str, table: &TableEngine<'_, Record>) {
    println!("\n== {title} ==");

    let header: Vec<String> = table.columns().iter().map(|c| format!("{:<14}", c.label)).collect();
    println!("{}", header.join(""));

    let page = table.page();
    for row in page.rows() {
        let mark = if table.is_selected(row.id()) { "*" } else { " " };
        let cells: Vec<String> = table
            .render_row(row)
            .iter()
            .map(|cell| format!("{:<14}", cell.as_text()))
            .collect();
        println!("{mark}{}", cells.join(""));
    }

    let window: Vec<String> = table.page_window().iter().map(|item| item.to_string()).collect();
    match page.item_span() {
        Some((first, last)) => println!(
            "showing {first}-{last} of {}   pages: {}",
            page.total_items(),
            window.join(" ")
        ),
        None => println!("no matching quotes"),
    }
}

// =============================================================================
// Main
// =============================================================================

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Ok(log_file) = File::create("quotes.log") {
        let _ = WriteLogger::init(LevelFilter::Trace, Config::default(), log_file);
    }

    let source = CachedSource::new(seed());
    let rows = source.fetch("quotes").await?;
    let options: TableOptions = TableOptions::from_json(OPTIONS)?;
    let actions: Vec<BulkAction> = options.bulk_actions.clone();

    let mut requests = Vec::new();
    {
        let mut table = TableEngine::new(&rows, columns(), options)
            .on_bulk_action(|action, ids| requests.push((action.to_string(), ids.to_vec())));
        print_table("all quotes", &table);

        table.request_sort("nights");
        table.set_page(3);
        print_table("by nights, page 3", &table);

        table.set_search_query("mara");
        table.request_sort("guest");
        print_table("search \"mara\", by guest", &table);

        table.toggle_select_all();
        print_table("page selected", &table);

        let delete = actions
            .iter()
            .find(|a| a.variant == Variant::Destructive)
            .map(|a| a.value.as_str())
            .unwrap_or("delete");
        table.dispatch_bulk_action(delete);
    }

    for (action, ids) in requests {
        match action.as_str() {
            "delete" => {
                let deleted = source.delete("quotes", &ids).await?;
                println!("\ndeleted {deleted} quotes");
            }
            other => return Err(SourceError::backend(format!("unsupported action {other}")).into()),
        }
    }

    let rows = source.fetch("quotes").await?;
    let table = TableEngine::new(&rows, columns(), TableOptions::from_json(OPTIONS)?);
    print_table("after delete", &table);

    Ok(())
}
