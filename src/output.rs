use climaview::aggregate::ScenarioHourSummary;
use climaview::chart::{Annotation, Comfort, Scope};
use climaview::data::Reading;
use climaview::date::CalendarDate;
use climaview::scenario::{CATALOG, ScenarioId};
use climaview::view::SliderMarker;
use colored::*;

fn style_label(label: &str) -> ColoredString {
    label.bold()
}

pub(crate) fn print_error(msg: &str) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

pub(crate) fn print_warning(msg: &str) {
    eprintln!("{}: {}", "warning".yellow().bold(), msg);
}

pub(crate) fn get_display_name(filename: &str) -> &str {
    std::path::Path::new(filename)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(filename)
}

pub(crate) fn print_separator(width: usize) {
    println!("{}", "-".repeat(width));
}

fn swatch(rgb: Option<(u8, u8, u8)>) -> ColoredString {
    match rgb {
        Some((r, g, b)) => "  ".on_truecolor(r, g, b),
        None => "  ".normal(),
    }
}

fn colored_comfort(pmv: f64, label: &str) -> ColoredString {
    match Comfort::classify(pmv) {
        Comfort::Cool => label.blue(),
        Comfort::Comfortable => label.green(),
        Comfort::Warm => label.red(),
    }
}

pub(crate) fn print_file_info(name: &str, kind: &str, days: usize, readings: usize) {
    println!("File: {}", name);
    println!("  Data:     {}", kind);
    println!("  Days:     {}", days);
    println!("  Readings: {}", readings);
    println!();
}

/// Scenario catalog: swatch, label and definition
pub(crate) fn print_legend() {
    println!("Scenarios:");
    for entry in &CATALOG {
        println!(
            "  {} {:<20} {}",
            swatch(entry.swatch_rgb()),
            entry.label,
            entry.definition
        );
    }
}

pub(crate) fn print_day_header(day: CalendarDate, index: usize, count: usize) {
    println!(
        "{} (day {} of {})",
        style_label(&day.long_label()),
        index + 1,
        count
    );
}

pub(crate) fn print_scenario_hours(summary: &ScenarioHourSummary) {
    println!("[Scenario Hours]");
    for (id, hours) in summary.iter() {
        let line = format!("  {:<20} {:>2}h", id.to_string(), hours);
        if hours == 0 {
            println!("{}", line.dimmed());
        } else {
            println!("{}", line);
        }
    }
}

pub(crate) fn print_hour_table(rows: &[Reading]) {
    println!("[Hourly Readings]");
    println!("HOUR   HVAC    PMV  COMFORT      SCENARIOS");
    print_separator(60);
    for r in rows {
        let comfort = format!("{:<11}", Comfort::classify(r.comfort).hourly_label());
        let scenarios = r
            .scenarios
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "{:02}:00 {:>5.2} {:>6.2}  {}  {}",
            r.hour,
            r.energy,
            r.comfort,
            colored_comfort(r.comfort, &comfort),
            if scenarios.is_empty() { "-".to_string() } else { scenarios }
        );
    }
}

pub(crate) fn print_markers(markers: &[SliderMarker]) {
    if markers.is_empty() {
        return;
    }
    println!("[Highlights]");
    for m in markers {
        println!("  {:>5.1}%  #{:<4} {}", m.position_pct, m.index, m.label);
    }
}

/// Work and break day counts per scenario
pub(crate) fn print_year_counts(work: &[(ScenarioId, usize)], rest: &[(ScenarioId, usize)]) {
    println!("[Scenario Days]");
    println!("{:<22} {:>5} {:>6}", "", "WORK", "BREAK");
    print_separator(35);
    for ((id, w), (_, b)) in work.iter().zip(rest) {
        println!("{} {:>5} {:>6}", style_label(&format!("{:<22}", id)), w, b);
    }
}

/// Call-out texts of the active page
pub(crate) fn print_page(page: u32, annotations: &[Annotation]) {
    let callouts: Vec<&Annotation> = annotations
        .iter()
        .filter(|a| a.scope == Scope::Page)
        .collect();

    println!("[Page {}]", page);
    if callouts.is_empty() {
        println!("  {}", "(no call-outs)".dimmed());
        return;
    }
    for a in callouts {
        for line in a.text.lines() {
            println!("  {}", line.trim());
        }
    }
}
