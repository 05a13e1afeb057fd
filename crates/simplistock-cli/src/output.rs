//! Terminal output formatting.

use colored::Colorize;
use simplistock_core::analysis::StockAnalysis;

/// Print a full analysis with section headings.
pub fn print_analysis(name: &str, analysis: &StockAnalysis) {
    println!();
    println!("{}", name.cyan().bold());
    println!();

    println!("{}", "Company Summary".bold());
    println!("  {}", analysis.company_summary);
    println!();

    println!("{}", "Scorecard".bold());
    println!("  {}: {}", "Financial Health".yellow(), analysis.scorecard.financial_health);
    println!("  {}: {}", "Growth".yellow(), analysis.scorecard.growth);
    println!("  {}: {}", "Valuation".yellow(), analysis.scorecard.valuation);
    println!();

    println!("{}", "Buy Now?".bold());
    println!("  {}: {}", "Price Context".yellow(), analysis.buy_now_checklist.price_context);
    println!("  {}: {}", "Expert Opinion".yellow(), analysis.buy_now_checklist.expert_opinion);
    println!("  {}: {}", "Historical Pattern".yellow(), analysis.buy_now_checklist.historical_pattern);
    println!();

    println!("{}", "After You Buy".bold());
    println!("  {}: {}", "What to Watch".yellow(), analysis.post_buy_support.what_to_watch);
    println!("  {}: {}", "When to Reconsider".yellow(), analysis.post_buy_support.exit_logic);

    if !analysis.news.is_empty() {
        println!();
        println!("{}", "Recent News".bold());
        for item in &analysis.news {
            println!("  {} {}", "•".green(), item.title.bold());
            println!("    {}", item.summary);
            println!("    {}", item.date.dimmed());
        }
    }
    println!();
}
