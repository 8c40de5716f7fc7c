//! Smart insights command

use anyhow::{Context, Result};
use pennywise_core::{
    AnalysisContext, Config, InsightEngine, InsightGenerator, InsightKind, InsightReport,
};

use super::{load_source, print_json, resolve_as_of};
use crate::cli::RecordArgs;

/// Run the insight engine over the imported records
pub fn build_insight_report(config: &Config, records: &RecordArgs) -> Result<InsightReport> {
    let source = load_source(records, config)?;
    let as_of = resolve_as_of(records.as_of.as_deref())?;

    let generator = InsightGenerator::new().with_currency_symbol(config.display.symbol.clone());
    let engine = InsightEngine::with_generator(generator);
    let ctx = AnalysisContext::new(&source, as_of).with_analysis_config(&config.analysis);

    engine.analyze(&ctx).context("Insight analysis failed")
}

fn kind_icon(kind: InsightKind) -> &'static str {
    match kind {
        InsightKind::Prediction => "🔮",
        InsightKind::Success => "✅",
        InsightKind::Warning => "⚠️ ",
        InsightKind::Tip => "💡",
        InsightKind::Info => "ℹ️ ",
    }
}

pub fn cmd_insights(config: &Config, records: &RecordArgs) -> Result<()> {
    let report = build_insight_report(config, records)?;

    if records.json {
        return print_json(&report);
    }

    println!();
    println!("💡 Smart Insights ({})", report.current.label());
    println!(
        "   Spent {}{:.2} this month, {}{:.2} last month",
        config.display.symbol,
        report.current_month_total(),
        config.display.symbol,
        report.previous_month_total()
    );
    println!("   ─────────────────────────────────────────────────────────────");

    if report.insights.is_empty() {
        println!("   Nothing notable this month.");
        return Ok(());
    }

    for insight in &report.insights {
        println!(
            "   {} [{}] {}",
            kind_icon(insight.kind),
            insight.kind,
            insight.message
        );
    }

    println!();
    println!(
        "   Health score: {}/100 (savings rate {:.1}%)",
        report.health.overall, report.health.savings_rate
    );

    Ok(())
}
