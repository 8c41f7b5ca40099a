use crate::billing::ModelCatalog;
use crate::output::format::{create_styled_table, format_units, header_cell, right_cell, styled_cell, NumberFormat};

fn flag(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

/// Print the model catalog in declaration order.
pub(crate) fn print_models_table(catalog: &ModelCatalog, number_format: NumberFormat, use_color: bool) {
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Model", use_color),
        header_cell("Name", use_color),
        header_cell("Provider", use_color),
        header_cell("Units/Req", use_color),
        header_cell("Images", use_color),
        header_cell("Thinking", use_color),
    ]);

    for m in catalog.iter() {
        table.add_row(vec![
            styled_cell(m.id, None, false),
            styled_cell(m.display_name, None, false),
            styled_cell(m.provider.label(), None, false),
            right_cell(&format_units(m.units_per_request, number_format), None, false),
            styled_cell(flag(m.supports_images), None, false),
            styled_cell(flag(m.is_thinking), None, false),
        ]);
    }

    println!("\n Model Catalog ({} models)", catalog.len());
    println!("{table}");
}

pub(crate) fn output_models_json(catalog: &ModelCatalog) -> String {
    let output: Vec<serde_json::Value> = catalog
        .iter()
        .map(|m| {
            serde_json::json!({
                "id": m.id,
                "display_name": m.display_name,
                "provider": m.provider.label(),
                "units_per_request": m.units_per_request,
                "supports_images": m.supports_images,
                "is_thinking": m.is_thinking,
            })
        })
        .collect();
    serde_json::to_string_pretty(&output).unwrap_or_else(|e| {
        eprintln!("Failed to serialize JSON output: {}", e);
        "[]".to_string()
    })
}
