// BCLS Analysis CLI Tool
// Command-line interface for Bát Cục Linh Số number analysis

use bcls::{Analyzer, AnalysisResult};
use clap::Parser;

/// Bát Cục Linh Số Analyzer - read the stars behind a digit string
#[derive(Parser, Debug)]
#[command(name = "bcls-analyze")]
#[command(about = "Analyze digit strings using the Bát Cục Linh Số method", long_about = None)]
#[command(version)]
struct Args {
    /// Digits to analyze (formatting punctuation is allowed with --phone)
    #[arg(value_name = "DIGITS")]
    digits: String,

    /// Usage purpose to score against (business, personal, wealth)
    #[arg(short, long)]
    purpose: Option<String>,

    /// Treat the input as a phone number (normalize +84, require 10 digits)
    #[arg(long)]
    phone: bool,

    /// Emit the raw result as JSON instead of formatted text
    #[arg(long)]
    json: bool,

    /// Show detailed information
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let engine = Analyzer::new();

    if args.verbose {
        println!("🔍 Analyzing: {}\n", args.digits);
    }

    let result = if args.phone {
        engine.analyze_phone(&args.digits, args.purpose.as_deref())?
    } else {
        match &args.purpose {
            Some(purpose) => engine.analyze_with_purpose(&args.digits, purpose)?,
            None => engine.analyze(&args.digits)?,
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    print_result(&result, args.verbose);
    Ok(())
}

fn print_result(result: &AnalysisResult, verbose: bool) {
    println!(
        "✅ {} → {:.2}/10 ({}) {}",
        result.input,
        result.total_score,
        result.luck_level,
        score_bar(result.total_score)
    );
    println!();

    if result.star_matches.is_empty() {
        println!("❌ No star pairs found (only neutral digits).");
    } else {
        println!("⭐ Star sequence:");
        for m in &result.star_matches {
            print!("{}. {:<6}", m.position, m.raw);
            if m.star == bcls::Star::Unknown {
                println!("→ (không xác định)");
                continue;
            }
            print!("→ {} [{:.1}]", m.name, m.adjusted_energy);
            if let Some(nature) = m.nature {
                print!(" ({})", nature);
            }
            println!();
            if verbose {
                println!("      {}", m.description);
            }
        }
        println!();
    }

    if !result.combinations.is_empty() {
        println!("🔗 Combinations:");
        for combo in &result.combinations {
            println!(
                "  {}-{}: {} - {}",
                combo.first_group, combo.second_group, combo.name, combo.description
            );
        }
        println!();
    }

    if let Some(compat) = &result.purpose_compatibility {
        println!(
            "🎯 {}: {} ({:+.2})",
            compat.purpose, compat.compatibility_level, compat.compatibility_score
        );
        println!();
    }

    if verbose && !result.key_positions.is_empty() {
        println!("📍 Key positions:");
        for reading in &result.key_positions {
            println!("  {} ({}): {}", reading.digit, reading.position, reading.meaning);
        }
        println!();
    }

    println!("💡 Recommendations:");
    for rec in &result.recommendations {
        println!("  - {}", rec);
    }
}

/// Visual bar for a 0-10 score
fn score_bar(score: f64) -> String {
    let filled = (score.clamp(0.0, 10.0) as usize).min(10);
    let mut bar = String::from("[");
    for i in 0..10 {
        bar.push(if i < filled { '█' } else { '░' });
    }
    bar.push(']');
    bar
}
