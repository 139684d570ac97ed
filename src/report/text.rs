use crate::report::{
    AnalysisReport, BreakdownReport, CompareReport, GameReport, RankingsReport, SeasonReport,
    format_f64_3,
};

pub fn render_breakdown(report: &BreakdownReport) -> String {
    let mut out = String::new();
    let b = &report.breakdown;

    out.push_str("--- AQR Breakdown ---\n");
    out.push_str(&format!(
        "{} -> {} | {} | game {}\n",
        report.assister, report.shooter, report.shot_label, report.game_id
    ));
    out.push_str(&format!("Zone:            {}\n", b.zone));
    out.push_str(&format!("Creation Boost:  {}\n", format_f64_3(b.creation)));
    out.push_str(&format!("Shooter Skill:   {}\n", format_f64_3(b.skill)));
    out.push_str(&format!("Defense Factor:  {}\n", format_f64_3(b.defense)));
    out.push_str(&format!("Clutch Factor:   {}\n", format_f64_3(b.clutch)));
    out.push_str(&format!("Distance Factor: {}\n", format_f64_3(b.distance)));
    out.push_str("---------------------\n");
    out.push_str(&format!("TOTAL AQR:       {}\n", format_f64_3(b.raw)));
    out
}

pub fn render_game(report: &GameReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("Game: {}\n", report.game_id));
    out.push_str(&format!("Assists: {}\n", report.count));
    out.push_str(&format!(
        "Average AQR: {}\n",
        format_f64_3(report.mean_raw)
    ));
    if report.skipped > 0 {
        out.push_str(&format!("Skipped records: {}\n", report.skipped));
    }
    out.push_str("\nIndividual assists:\n");
    for row in &report.rows {
        out.push_str(&format!(
            "  {:<20} | {:<15} | AQR: {}\n",
            row.shooter,
            row.shot_label,
            format_f64_3(row.raw)
        ));
    }
    out
}

pub fn render_season(report: &SeasonReport) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Season Average AQR ({}): {}\n",
        report.season,
        format_f64_3(report.mean_raw)
    ));
    out.push_str(&format!("Assists: {}\n", report.count));
    if report.skipped > 0 {
        out.push_str(&format!("Skipped records: {}\n", report.skipped));
    }
    out
}

pub fn render_analysis(report: &AnalysisReport) -> String {
    let mut out = String::new();
    let s = &report.summary;

    out.push_str(&format!("{}\n", "=".repeat(50)));
    out.push_str(&format!("AQR Analysis: {} ({})\n", s.label, report.season));
    out.push_str(&format!("{}\n", "=".repeat(50)));
    out.push_str(&format!("Total Assists: {}\n", s.count));
    out.push_str(&format!("Mean AQR: {}\n", format_f64_3(s.mean_raw)));
    out.push_str(&format!(
        "Adjusted AQR: {} (rating {:.1})\n",
        format_f64_3(s.shrunk_raw),
        s.rating
    ));
    out.push_str(&format!(
        "Normalized range: {:.1} - {:.1}\n",
        s.min_normalized, s.max_normalized
    ));
    if report.skipped > 0 {
        out.push_str(&format!("Skipped records: {}\n", report.skipped));
    }

    out.push_str("\nBy Zone:\n");
    for bucket in &s.zones {
        out.push_str(&format!(
            "  {:<15} | {:>3} assists | avg rating: {:.1}\n",
            bucket.zone.as_str(),
            bucket.count,
            bucket.mean_normalized
        ));
    }

    out.push_str(&format!("\nTop {} Assists:\n", s.top.len()));
    for shot in &s.top {
        out.push_str(&format!(
            "  rating {:>5.1} | {:<20} | {:<15} | {}\n",
            shot.normalized,
            shot.shooter,
            shot.shot_label,
            shot.game_date.as_deref().unwrap_or(shot.game_id.as_str())
        ));
    }

    out.push_str(&format!(
        "\nTop Shooter Connections (min {} assists):\n",
        report.min_connection_sample
    ));
    if report.connections.is_empty() {
        out.push_str("  (none above threshold)\n");
    }
    for conn in &report.connections {
        out.push_str(&format!(
            "  {:<20} | {:>3} assists | avg AQR: {}\n",
            conn.label,
            conn.count,
            format_f64_3(conn.mean_raw)
        ));
    }
    out
}

pub fn render_compare(report: &CompareReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", "=".repeat(50)));
    out.push_str(&format!("AQR Comparison - {}\n", report.season));
    out.push_str(&format!("{}\n", "=".repeat(50)));
    out.push_str(&format!(
        "{:<25} | {:>7} | {:>8} | {:>7} | {:>6}\n",
        "Player", "Assists", "Avg AQR", "AdjAQR", "Rating"
    ));
    out.push_str(&format!("{}\n", "-".repeat(50)));
    for row in &report.rows {
        out.push_str(&format!(
            "{:<25} | {:>7} | {:>8} | {:>7} | {:>6.1}\n",
            row.name,
            row.assists,
            format_f64_3(row.mean_raw),
            format_f64_3(row.shrunk_raw),
            row.rating
        ));
    }
    out
}

pub fn render_rankings(report: &RankingsReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", "=".repeat(80)));
    out.push_str(&format!(
        "{:^80}\n",
        format!("ADJUSTED AQR PASSER RANKINGS - {}", report.season)
    ));
    out.push_str(&format!("{}\n", "=".repeat(80)));
    out.push_str(&format!(
        "Population: n={}, mean={}, sd={}, median={}\n",
        report.stats.n,
        format_f64_3(report.stats.mean),
        format_f64_3(report.stats.std_dev),
        format_f64_3(report.stats.median)
    ));
    out.push_str(&format!(
        "Minimum assists: {} | Skipped records: {}\n\n",
        report.min_assists, report.skipped
    ));

    out.push_str(&format!(
        "{:<5} | {:<22} | {:>5} | {:>6} | {:>7} | {:>6} | {:>7} | {:>6}\n",
        "Rank", "Player", "Ast", "Mean", "AdjAQR", "Rating", "Elite%", "Bad%"
    ));
    out.push_str(&format!("{}\n", "-".repeat(80)));
    for row in &report.rows {
        out.push_str(&format!(
            "{:<5} | {:<22} | {:>5} | {:>6.3} | {:>7.3} | {:>6.1} | {:>6.1}% | {:>5.1}%\n",
            row.rank,
            row.name,
            row.assists,
            row.mean_raw,
            row.shrunk_raw,
            row.rating,
            row.elite_pct,
            row.poor_pct
        ));
    }
    out
}
