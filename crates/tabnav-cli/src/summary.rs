//! Terminal tables for run results and saved state files.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use tabnav_core::SavedState;

use crate::session::StackRow;

/// One row per tab: index, depth and the tags from root to top.
pub fn stack_table(rows: &[StackRow]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Tab"),
        header_cell("Depth"),
        header_cell("Stack (root first)"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);

    for row in rows {
        let tab_cell = if row.active {
            Cell::new(format!("* {}", row.tab))
                .fg(Color::Green)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new(row.tab)
        };
        table.add_row(vec![
            tab_cell,
            count_cell(row.tags.len()),
            tags_cell(&row.tags),
        ]);
    }
    table
}

/// Header fields of a saved state followed by its stacks.
pub fn state_tables(state: &SavedState) -> (Table, Table) {
    let mut fields = Table::new();
    apply_table_style(&mut fields);
    let dash = || dim_cell("-");
    fields.add_row(vec![
        header_cell("Schema version"),
        Cell::new(state.schema_version),
    ]);
    fields.add_row(vec![header_cell("Tags issued"), Cell::new(state.tag_count)]);
    fields.add_row(vec![
        header_cell("Selected tab"),
        state.selected_tab_index.map_or_else(dash, Cell::new),
    ]);
    fields.add_row(vec![
        header_cell("Current unit"),
        state.current_fragment.as_deref().map_or_else(dash, Cell::new),
    ]);
    fields.add_row(vec![
        header_cell("Tab history"),
        state.tab_history.as_ref().map_or_else(dash, |history| {
            Cell::new(
                history
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" > "),
            )
        }),
    ]);

    let rows: Vec<StackRow> = state
        .fragment_stack
        .iter()
        .enumerate()
        .map(|(tab, tags)| StackRow {
            tab,
            active: state.selected_tab_index == Some(tab),
            tags: tags.clone(),
        })
        .collect();
    (fields, stack_table(&rows))
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn tags_cell(tags: &[String]) -> Cell {
    if tags.is_empty() {
        return dim_cell("(not created)");
    }
    Cell::new(tags.join(" > "))
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stack_table_marks_the_active_tab() {
        let rows = vec![
            StackRow {
                tab: 0,
                active: true,
                tags: vec!["TabA1".into(), "Feed2".into()],
            },
            StackRow {
                tab: 1,
                active: false,
                tags: Vec::new(),
            },
        ];
        let rendered = stack_table(&rows).to_string();
        assert!(rendered.contains("* 0"));
        assert!(rendered.contains("TabA1 > Feed2"));
        assert!(rendered.contains("(not created)"));
    }

    #[test]
    fn state_tables_fill_missing_fields_with_dashes() {
        let state = SavedState::new(2, None).with_stacks(vec![vec!["TabA1".into()]]);
        let (fields, stacks) = state_tables(&state);
        let fields = fields.to_string();
        assert!(fields.contains("Tags issued"));
        assert!(fields.contains('-'));
        assert!(stacks.to_string().contains("TabA1"));
    }
}
