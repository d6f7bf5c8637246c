use std::borrow::Cow;

use quote_table::model::RecordId;
use quote_table::model::TableRecord;
use quote_table::model::Value;
use quote_table::table::Alignment;
use quote_table::table::Cell;
use quote_table::table::Column;
use quote_table::table::TableEngine;
use quote_table::table::TableOptions;
use quote_table::table::Variant;

#[derive(Debug, Clone, Copy, PartialEq)]
enum QuoteField {
    Guest,
    Nights,
    Status,
}

struct Quote {
    reference: &'static str,
    guest: &'static str,
    nights: Option<i64>,
    confirmed: bool,
}

impl TableRecord for Quote {
    type Key = QuoteField;

    fn id(&self) -> RecordId {
        RecordId::from(self.reference)
    }

    fn value(&self, key: &QuoteField) -> Cow<'_, Value> {
        Cow::Owned(match key {
            QuoteField::Guest => Value::from(self.guest),
            QuoteField::Nights => Value::from(self.nights),
            QuoteField::Status => Value::from(self.confirmed),
        })
    }

    fn keys(&self) -> Vec<QuoteField> {
        vec![QuoteField::Guest, QuoteField::Nights, QuoteField::Status]
    }
}

fn quotes() -> Vec<Quote> {
    vec![
        Quote {
            reference: "Q-104",
            guest: "Lena Fischer",
            nights: Some(4),
            confirmed: true,
        },
        Quote {
            reference: "Q-101",
            guest: "Amani Otieno",
            nights: None,
            confirmed: false,
        },
        Quote {
            reference: "Q-103",
            guest: "Tom Mara",
            nights: Some(2),
            confirmed: true,
        },
        Quote {
            reference: "Q-102",
            guest: "Sara Lind",
            nights: Some(7),
            confirmed: false,
        },
    ]
}

fn columns() -> Vec<Column<Quote>> {
    vec![
        Column::new(QuoteField::Guest, "Guest").sortable(),
        Column::new(QuoteField::Nights, "Nights").sortable().align(Alignment::Right),
        Column::new(QuoteField::Status, "Status").render(|value, _| match value {
            Value::Bool(true) => Cell::badge("Confirmed", Variant::Default),
            _ => Cell::badge("Pending", Variant::Secondary),
        }),
    ]
}

fn refs(rows: &[&Quote]) -> Vec<&'static str> {
    rows.iter().map(|q| q.reference).collect()
}

#[test]
fn test_enum_keys_sort_and_search() {
    let data = quotes();
    let mut table = TableEngine::new(&data, columns(), TableOptions::new().items_per_page(3));

    table.request_sort(QuoteField::Nights);
    assert_eq!(refs(&table.processed_rows()), vec!["Q-101", "Q-103", "Q-104", "Q-102"]);
    assert_eq!(table.total_pages(), 2);

    table.set_search_fields(vec![QuoteField::Guest]);
    table.set_search_query("mara");
    assert_eq!(refs(&table.visible_rows()), vec!["Q-103"]);
}

#[test]
fn test_custom_renderer() {
    let data = quotes();
    let table = TableEngine::new(&data, columns(), TableOptions::new());

    let cells = table.render_row(&data[0]);
    assert_eq!(cells[0], Cell::text("Lena Fischer"));
    assert_eq!(cells[1], Cell::text("4"));
    assert_eq!(cells[2], Cell::badge("Confirmed", Variant::Default));

    let cells = table.render_row(&data[1]);
    assert_eq!(cells[1], Cell::Empty);
    assert_eq!(cells[2].as_text(), "Pending");
}

#[test]
fn test_text_ids_in_bulk_actions() {
    let data = quotes();
    let mut received = Vec::new();
    let mut table = TableEngine::new(&data, columns(), TableOptions::new())
        .on_bulk_action(|_, ids| received.extend_from_slice(ids));

    table.toggle_select_row("Q-104");
    table.toggle_select_row("Q-102");
    table.dispatch_bulk_action("confirm");
    drop(table);

    assert_eq!(received, vec![RecordId::from("Q-102"), RecordId::from("Q-104")]);
}
