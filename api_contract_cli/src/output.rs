use api_contract::types::{ApiError, ApiResponse, Meta};
use serde::Serialize;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Tabled)]
struct FieldErrorRow {
    #[tabled(rename = "Field")]
    field: String,
    #[tabled(rename = "Message")]
    message: String,
}

#[derive(Tabled)]
struct MetaRow {
    #[tabled(rename = "Total")]
    total: i64,
    #[tabled(rename = "Page")]
    page: i64,
    #[tabled(rename = "Limit")]
    limit: i64,
    #[tabled(rename = "Pages")]
    total_pages: i64,
    #[tabled(rename = "Next")]
    has_next: bool,
}

fn build_field_error_rows(error: &ApiError) -> Vec<FieldErrorRow> {
    let Some(errors) = error.data.as_ref().and_then(|d| d.errors.as_ref()) else {
        return Vec::new();
    };
    errors
        .iter()
        .flat_map(|(field, messages)| {
            messages.iter().map(move |message| FieldErrorRow {
                field: field.clone(),
                message: message.clone(),
            })
        })
        .collect()
}

fn build_meta_row(meta: &Meta) -> MetaRow {
    MetaRow {
        total: meta.total,
        page: meta.page,
        limit: meta.limit,
        total_pages: meta.total_pages,
        has_next: meta.has_next(),
    }
}

pub fn print_api_error(error: &ApiError, format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(error),
        OutputFormat::Table => {
            let status = error
                .status
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_else(|| "-".to_string());
            println!("Status:  {}", status);
            println!("Message: {}", error.message().unwrap_or("-"));
            let rows = build_field_error_rows(error);
            if !rows.is_empty() {
                println!("{}", Table::new(rows));
            }
        }
    }
}

pub fn print_envelope<T: Serialize>(resp: &ApiResponse<T>, format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(resp),
        OutputFormat::Table => {
            if let Some(message) = &resp.message {
                println!("Message: {}", message);
            }
            if let Some(meta) = &resp.meta {
                println!("{}", Table::new([build_meta_row(meta)]));
            }
            print_json(&resp.data);
        }
    }
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}
