//! Plain-text presentation of a dashboard session.

use std::fmt::Write as _;

use squadboard_shared::{Acquisition, Dashboard, ListTab, Ranked};

const TITLE: &str = "Squad Performance Dashboard";
const LOADING_TEXT: &str = "Loading...";
const BAR_WIDTH: usize = 20;

pub fn render(acquisition: &Acquisition, top_n: usize) -> String {
    match acquisition {
        Acquisition::Loading => format!("{LOADING_TEXT}\n"),
        Acquisition::Failed { message } => format!("Error: {message}\n"),
        Acquisition::Ready(dashboard) => render_dashboard(dashboard, top_n),
    }
}

pub fn render_dashboard(dashboard: &Dashboard, top_n: usize) -> String {
    let label = dashboard.view_mode().label();
    let mut out = String::new();

    let _ = writeln!(out, "{TITLE}");
    let _ = writeln!(out, "{}", "=".repeat(TITLE.len()));
    let _ = writeln!(out, "View by {label}    Total: {}", dashboard.count());
    let _ = writeln!(out);

    let _ = writeln!(out, "Performance Overview");
    let series = dashboard.chart_series();
    let scale = series
        .iter()
        .flat_map(|point| [point.performance, point.efficiency, point.quality])
        .fold(0.0_f64, f64::max);
    for point in &series {
        let _ = writeln!(out, "  {}", point.label);
        for (metric, value) in [
            ("performance", point.performance),
            ("efficiency", point.efficiency),
            ("quality", point.quality),
        ] {
            let _ = writeln!(out, "    {metric:<11} {} {value}", bar(value, scale));
        }
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "{label} List");
    let _ = writeln!(out, "  All");
    write_entries(&mut out, &dashboard.list(ListTab::All, top_n));
    let _ = writeln!(out, "  Top Performers");
    write_entries(&mut out, &dashboard.list(ListTab::TopPerformers, top_n));

    out
}

/// Rows are numbered by position in `entries`, so a ranked list shows ranks.
fn write_entries(out: &mut String, entries: &[Ranked<'_>]) {
    for (position, Ranked { entity, .. }) in entries.iter().enumerate() {
        let initial = entity.initial().unwrap_or('?');
        let squad = entity
            .squad()
            .map(|squad| format!(" ({squad})"))
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "    #{:<3} [{initial}] {}{squad}  Perf: {}  Eff: {}",
            position + 1,
            entity.name(),
            entity.performance(),
            entity.efficiency(),
        );
    }
}

fn bar(value: f64, scale: f64) -> String {
    let filled = if scale > 0.0 && value.is_finite() && value > 0.0 {
        ((value / scale) * BAR_WIDTH as f64).round() as usize
    } else {
        0
    };
    let filled = filled.min(BAR_WIDTH);
    format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

#[cfg(test)]
mod tests {
    use squadboard_shared::{FAILURE_MESSAGE, ViewMode, sample};

    use super::*;

    fn ready(mode: ViewMode) -> Acquisition {
        Acquisition::Ready(Dashboard::from_snapshot(sample::snapshot()).with_view_mode(mode))
    }

    #[test]
    fn loading_and_error_states_render_single_line() {
        assert_eq!(render(&Acquisition::Loading, 3), "Loading...\n");
        let failed = Acquisition::Failed {
            message: FAILURE_MESSAGE.to_string(),
        };
        assert_eq!(render(&failed, 3), format!("Error: {FAILURE_MESSAGE}\n"));
    }

    #[test]
    fn squad_view_shows_total_and_ranked_list() {
        let text = render(&ready(ViewMode::Squad), 3);

        assert!(text.contains("View by Squad    Total: 4"));
        assert!(text.contains("Squad List"));
        let top = text
            .split("Top Performers")
            .nth(1)
            .expect("top performers section");
        let gamma = top.find("Gamma").expect("Gamma listed");
        let alpha = top.find("Alpha").expect("Alpha listed");
        let beta = top.find("Beta").expect("Beta listed");
        assert!(gamma < alpha && alpha < beta);
        assert!(!top.contains("Delta"));
    }

    #[test]
    fn member_view_lists_squad_names() {
        let text = render(&ready(ViewMode::Member), 3);

        assert!(text.contains("View by Member    Total: 8"));
        assert!(text.contains("Alice (Alpha)"));
        assert!(text.contains("Henry (Delta)"));
    }

    #[test]
    fn custom_top_n_changes_list_length() {
        let text = render(&ready(ViewMode::Member), 1);
        let top = text
            .split("Top Performers")
            .nth(1)
            .expect("top performers section");
        assert_eq!(top.lines().filter(|line| line.contains("Perf:")).count(), 1);
        assert!(top.contains("Eve"));
    }

    #[test]
    fn top_performers_rows_are_numbered_by_rank() {
        let text = render(&ready(ViewMode::Squad), 3);
        let top = text
            .split("Top Performers")
            .nth(1)
            .expect("top performers section");
        let rows: Vec<&str> = top.lines().filter(|line| line.contains("Perf:")).collect();

        assert_eq!(rows.len(), 3);
        assert!(rows[0].trim_start().starts_with("#1 "), "first row: {}", rows[0]);
        assert!(rows[0].contains("Gamma"));
        assert!(rows[1].trim_start().starts_with("#2 ") && rows[1].contains("Alpha"));
        assert!(rows[2].trim_start().starts_with("#3 ") && rows[2].contains("Beta"));
    }

    #[test]
    fn configured_top_n_flows_through_list_tab() {
        let text = render(&ready(ViewMode::Squad), 4);
        let top = text
            .split("Top Performers")
            .nth(1)
            .expect("top performers section");
        assert_eq!(top.lines().filter(|line| line.contains("Perf:")).count(), 4);
        assert!(top.contains("#4   [D] Delta"));
    }

    #[test]
    fn rendered_lines_have_no_trailing_whitespace() {
        for mode in [ViewMode::Squad, ViewMode::Member] {
            let text = render(&ready(mode), 3);
            for line in text.lines() {
                assert_eq!(line, line.trim_end(), "trailing whitespace in {line:?}");
            }
        }
    }

    #[test]
    fn bars_scale_to_largest_value() {
        assert_eq!(bar(50.0, 100.0), format!("{}{}", "#".repeat(10), ".".repeat(10)));
        assert_eq!(bar(100.0, 100.0), "#".repeat(BAR_WIDTH));
        assert_eq!(bar(-5.0, 100.0), ".".repeat(BAR_WIDTH));
        assert_eq!(bar(5.0, 0.0), ".".repeat(BAR_WIDTH));
    }
}
