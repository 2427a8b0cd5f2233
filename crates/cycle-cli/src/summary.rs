//! Table rendering for command output.
//!
//! Styling lives here, keyed by phase name — the engine's results carry
//! no presentation hints.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use cycle_engine::{CycleOutlook, DayProjection};
use cycle_model::{CyclePhase, PhaseAssessment};

pub fn print_outlook(view: &CycleOutlook) {
    println!(
        "Cycle day {} on {} - {} ({})",
        view.cycle_day,
        view.reference_date,
        view.assessment.phase,
        view.assessment.description()
    );
    let mut table = Table::new();
    table.set_header(vec![header_cell(""), header_cell("Date"), header_cell("In")]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Next period").fg(phase_color(CyclePhase::Menstrual)),
        Cell::new(view.next_period),
        Cell::new(format_days(view.days_until_period)),
    ]);
    table.add_row(vec![
        Cell::new("Ovulation").fg(phase_color(CyclePhase::Ovulation)),
        Cell::new(view.ovulation),
        Cell::new(format_days((view.ovulation - view.reference_date).num_days())),
    ]);
    table.add_row(vec![
        Cell::new("Fertile window"),
        Cell::new(format!(
            "{} to {}",
            view.fertile_window.start, view.fertile_window.end
        )),
        Cell::new(format_days(view.days_until_fertile)),
    ]);
    println!("{table}");
}

pub fn print_calendar(days: &[DayProjection]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Date"),
        header_cell("Cycle day"),
        header_cell("Phase"),
        header_cell("Note"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for day in days {
        table.add_row(vec![
            Cell::new(day.date),
            Cell::new(day.cycle_day_offset + 1),
            phase_cell(&day.assessment),
            Cell::new(day.assessment.description()),
        ]);
    }
    println!("{table}");
}

pub fn print_phases(rows: &[PhaseAssessment]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Phase"),
        header_cell("Fertile"),
        header_cell("Meaning"),
    ]);
    apply_table_style(&mut table);
    for assessment in rows {
        table.add_row(vec![
            phase_cell(assessment),
            Cell::new(if assessment.fertility.is_fertile() {
                "yes"
            } else {
                "no"
            }),
            Cell::new(assessment.description()),
        ]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn phase_cell(assessment: &PhaseAssessment) -> Cell {
    Cell::new(assessment.phase.as_str()).fg(phase_color(assessment.phase))
}

/// Presentation color per phase name.
fn phase_color(phase: CyclePhase) -> Color {
    match phase {
        CyclePhase::Menstrual => Color::Red,
        CyclePhase::Follicular => Color::Cyan,
        CyclePhase::Ovulation => Color::Green,
        CyclePhase::Luteal => Color::Magenta,
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn format_days(days: i64) -> String {
    match days {
        0 => "today".to_string(),
        1 => "1 day".to_string(),
        n => format!("{n} days"),
    }
}
