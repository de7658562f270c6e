//! Output formatting for the inspection commands

use comfy_table::{Cell, Color, ContentArrangement, Row, Table};
use medinest_core::{nav_descriptors, route_descriptors, Resolution};

/// Route table as a table (human) or JSON
pub fn format_route_table(json: bool, no_color: bool) -> String {
    let routes = route_descriptors();
    if json {
        return serde_json::to_string_pretty(&routes).unwrap_or_else(|_| "[]".to_string());
    }

    let mut table = new_table(&["Path", "View", "Access"], no_color);
    for route in &routes {
        let access = if route.guarded { "guarded" } else { "public" };
        table.add_row(Row::from(vec![route.path, route.view, access]));
    }

    table.to_string()
}

/// Navigation entries in sidebar order
pub fn format_nav_table(json: bool, no_color: bool) -> String {
    let entries = nav_descriptors();
    if json {
        return serde_json::to_string_pretty(&entries).unwrap_or_else(|_| "[]".to_string());
    }

    let mut table = new_table(&["#", "Label", "Path", "Icon"], no_color);
    for (i, entry) in entries.iter().enumerate() {
        let index = (i + 1).to_string();
        table.add_row(Row::from(vec![index.as_str(), entry.label, entry.path, entry.icon]));
    }

    table.to_string()
}

pub fn format_resolution(resolution: &Resolution) -> String {
    match resolution {
        Resolution::Render(route) => format!("render {}", route.view_name()),
        Resolution::Redirect { to } => format!("redirect {}", to),
        Resolution::NotFound => "not-found".to_string(),
    }
}

fn new_table(header: &[&str], no_color: bool) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    if no_color {
        table.set_header(header.to_vec());
    } else {
        table.set_header(
            header
                .iter()
                .map(|h| Cell::new(h).fg(Color::Cyan))
                .collect::<Vec<_>>(),
        );
    }

    table
}
