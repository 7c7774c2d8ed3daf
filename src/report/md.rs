use crate::report::ModelReport;

pub fn to_markdown(report: &ModelReport) -> String {
    let mut output = String::new();
    output.push_str(&format!("# {} ({})\n\n", report.name, report.id));
    if let Some(summary) = &report.summary {
        output.push_str(&format!("{summary}\n\n"));
    }
    if report.configured_changes.is_empty() {
        output.push_str("Configuration: base\n");
    } else {
        output.push_str(&format!(
            "Configuration: {}\n",
            report.configured_changes.join(", ")
        ));
    }
    output.push_str(&format!("Overall score: {:.1}\n\n", report.scores.overall));

    output.push_str("## Dimensions\n\n");
    output.push_str("| dimension | score | peer avg | percentile | peer group | peers |\n");
    output.push_str("|---|---|---|---|---|---|\n");
    for entry in &report.dimensions {
        let ctx = &entry.context;
        output.push_str(&format!(
            "| {} | {:.1} | {:.1} | {} | {} | {} |\n",
            ctx.dimension, ctx.score, ctx.average, ctx.percentile, ctx.group_label, ctx.peer_count
        ));
    }
    output.push('\n');
    for entry in &report.dimensions {
        output.push_str(&format!(
            "- {}: {} {}\n",
            entry.context.dimension, entry.interpretation, entry.context.comparison_text
        ));
    }
    output.push('\n');

    output.push_str("## Gaming\n\n");
    output.push_str(&format!(
        "Tier: {}{}\n\n{}\n",
        report.gaming.tier,
        if report.gaming.benchmarked {
            ""
        } else {
            " (estimated, no benchmark)"
        },
        report.gaming.advice
    ));
    if !report.gaming.fps_estimates.is_empty() {
        output.push('\n');
        for (title, fps) in &report.gaming.fps_estimates {
            output.push_str(&format!("- {title}: ~{fps} fps\n"));
        }
    }

    if let Some(linux) = &report.linux {
        output.push_str("\n## Linux\n\n");
        output.push_str(&format!("Status: {}\n", linux.status));
        if let Some(notes) = &linux.notes {
            output.push_str(&format!("{notes}\n"));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configure::ConfigState;
    use crate::data::fixtures::laptop;
    use crate::data::DataContext;
    use crate::report::build_model_report;
    use crate::types::scoring::ScoreWeights;

    #[test]
    fn markdown_report_contains_sections() {
        let data = DataContext::bundled().expect("bundled data should parse");
        let base = data.model("legion-pro-7i-g9").expect("model should exist");
        let report =
            build_model_report(&data, base, &ConfigState::default(), &ScoreWeights::DEFAULT, 3);

        let rendered = to_markdown(&report);
        assert!(rendered.contains("# "));
        assert!(rendered.contains("Overall score: "));
        assert!(rendered.contains("## Dimensions"));
        assert!(rendered.contains("| portability |"));
        assert!(rendered.contains("## Gaming"));
    }

    #[test]
    fn unbenchmarked_gpu_is_marked_estimated() {
        let data = DataContext::default();
        let model = laptop("synthetic", "X");
        let report =
            build_model_report(&data, &model, &ConfigState::default(), &ScoreWeights::DEFAULT, 3);

        let rendered = to_markdown(&report);
        assert!(rendered.contains("Tier: none (estimated, no benchmark)"));
        assert!(rendered.contains("Configuration: base"));
    }

    #[test]
    fn dimension_rows_show_group_and_peer_count() {
        let data = DataContext::bundled().expect("bundled data should parse");
        let base = data.model("x1-carbon-g12").expect("model should exist");
        let report =
            build_model_report(&data, base, &ConfigState::default(), &ScoreWeights::DEFAULT, 3);
        let first = &report.dimensions[0].context;
        assert_eq!(first.group_label, "X1 series");

        let rendered = to_markdown(&report);
        assert!(rendered.contains("| peer group | peers |"));
        let row = rendered
            .lines()
            .find(|line| line.starts_with(&format!("| {} |", first.dimension)))
            .expect("dimension row should render");
        assert!(row.ends_with(&format!("| X1 series | {} |", first.peer_count)));
        assert!(!row.ends_with("| X1 series |"));
    }
}
