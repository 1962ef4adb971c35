use anyhow::Result;
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

use crate::billing::amortize_to_month;
use crate::import;
use crate::models::{BillingType, CalendarDate, ExpenseRow, Period};
use crate::report::{format_amount, trend, MonthlySummary};

pub fn as_cli(args: &[String]) -> Result<()> {
    if args.len() < 2 {
        print_usage();
        return Ok(());
    }
    match args[1].as_str() {
        "summary" | "s" => cli_summary(&args[2..]),
        "trend" => cli_trend(&args[2..]),
        "amortize" => cli_amortize(&args[2..]),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("despesas {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("despesas — recurring-expense amortization reports");
    println!();
    println!("Usage: despesas <command>");
    println!();
    println!("Commands:");
    println!("  summary [YYYY-MM] --file <rows.csv|rows.json>");
    println!("                                Monthly amortized summary (default: current month)");
    println!("  trend --file <rows.csv|rows.json>");
    println!("    --months <N>                Number of trailing months (default: 6)");
    println!("    --end <YYYY-MM>             Last month of the window (default: current)");
    println!("  amortize --amount <A> --type <unica|semanal|mensal|anual>");
    println!("    --date <YYYY-MM-DD>         Anchor date (required for unica/semanal)");
    println!("    --period <YYYY-MM>          Target month (default: current)");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
}

fn cli_summary(args: &[String]) -> Result<()> {
    // Default-period resolution lives here in the caller; the core always
    // receives an explicit period
    let period = match args.first().filter(|a| !a.starts_with('-')) {
        Some(raw) => Period::parse(raw)?,
        None => Period::current(),
    };
    let rows = load_rows(args)?;
    let summary = MonthlySummary::compute(&rows, period);

    println!("despesas — {period}");
    println!("{}", "─".repeat(44));
    println!("  Total:         {}", format_amount(summary.total));
    println!("  Contributing:  {}/{} expenses", summary.contributing, rows.len());

    if !summary.by_billing_type.is_empty() {
        println!();
        println!("By billing type:");
        for (billing, amount) in &summary.by_billing_type {
            println!("  {:<24} {}", billing.label(), format_amount(*amount));
        }
    }

    if !summary.by_category.is_empty() {
        println!();
        println!("By category:");
        for (category, amount) in &summary.by_category {
            println!("  {category:<24} {}", format_amount(*amount));
        }
    }

    Ok(())
}

fn cli_trend(args: &[String]) -> Result<()> {
    let months: usize = match flag_value(args, "--months") {
        Some(raw) => raw
            .parse()
            .map_err(|_| anyhow::anyhow!("Invalid --months value: {raw}"))?,
        None => 6,
    };
    let end = match flag_value(args, "--end") {
        Some(raw) => Period::parse(raw)?,
        None => Period::current(),
    };
    let rows = load_rows(args)?;

    for (period, total) in trend(&rows, end, months) {
        println!("  {period}  {}", format_amount(total));
    }
    Ok(())
}

fn cli_amortize(args: &[String]) -> Result<()> {
    let amount_raw = flag_value(args, "--amount")
        .ok_or_else(|| anyhow::anyhow!("Usage: despesas amortize --amount <A> --type <T>"))?;
    let amount = Decimal::from_str(amount_raw)
        .map_err(|_| anyhow::anyhow!("Invalid --amount value: {amount_raw}"))?;

    let billing = flag_value(args, "--type")
        .map(|s| BillingType::parse(s))
        .unwrap_or(BillingType::Unica);

    let anchor = match flag_value(args, "--date") {
        Some(raw) => Some(
            CalendarDate::parse(raw)
                .ok_or_else(|| anyhow::anyhow!("Invalid --date value: {raw} (expected YYYY-MM-DD)"))?,
        ),
        None => None,
    };

    let period = match flag_value(args, "--period") {
        Some(raw) => Period::parse(raw)?,
        None => Period::current(),
    };

    let contribution = amortize_to_month(amount, billing, anchor, period);
    println!(
        "{} {} → {} in {period}",
        format_amount(amount),
        billing,
        format_amount(contribution)
    );
    Ok(())
}

fn load_rows(args: &[String]) -> Result<Vec<ExpenseRow>> {
    let file = flag_value(args, "--file")
        .ok_or_else(|| anyhow::anyhow!("Missing --file <rows.csv|rows.json>"))?;
    let path = Path::new(file);
    if !path.exists() {
        anyhow::bail!("File not found: {file}");
    }
    if path.extension().and_then(|e| e.to_str()) == Some("json") {
        import::json_rows(path)
    } else {
        import::csv_rows(path)
    }
}

fn flag_value<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == name)
        .map(|w| w[1].as_str())
}
