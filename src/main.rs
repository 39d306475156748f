//! Investment Projection CLI
//!
//! Command-line interface for running investor return projections

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use investment_projection::{
    goal,
    params::{
        load_parameters, DEFAULT_INVESTOR_SHARE_PERCENT, DEFAULT_MONTHLY_INTEREST_RATE,
        DEFAULT_TERM_MONTHS, STANDARD_VAT_RATE,
    },
    scenario::{LabeledComparison, LabeledResult},
    BatchRunner, BatchSummary, InvestmentParameters, InvestmentResult, ReturnCalculator,
    ReturnModel, ScheduleKind,
};
use serde_json::json;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "investment-projection", version, about = "Investor return projections")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Project returns for one parameter set
    Project {
        #[command(flatten)]
        params: ParamArgs,

        #[arg(long, default_value = "compare")]
        model: ModelArg,
    },
    /// Month-by-month schedule
    Schedule {
        #[command(flatten)]
        params: ParamArgs,

        #[arg(long, default_value = "standard")]
        kind: KindArg,
    },
    /// Capital required to reach a desired payout
    Goal {
        #[command(flatten)]
        params: ParamArgs,

        #[arg(long)]
        target: TargetArg,

        /// Desired payout amount
        #[arg(long)]
        desired: f64,
    },
    /// Run a model over every row of a CSV file
    Batch {
        /// CSV with columns Id,Capital,InterestRate,TermMonths,InvestorPercentage,VatRate
        #[arg(long)]
        input: PathBuf,

        #[arg(long, default_value = "compound")]
        model: ModelArg,
    },
}

#[derive(Args)]
struct ParamArgs {
    /// Principal invested
    #[arg(long, env = "INVESTMENT_CAPITAL", default_value_t = 0.0)]
    capital: f64,

    /// Monthly interest rate in percent (1.5 = 1.5 %)
    #[arg(long, env = "INVESTMENT_RATE", default_value_t = DEFAULT_MONTHLY_INTEREST_RATE)]
    rate: f64,

    /// Term in months
    #[arg(long, env = "INVESTMENT_TERM", default_value_t = DEFAULT_TERM_MONTHS)]
    term: u32,

    /// Investor share of interest in percent
    #[arg(long, env = "INVESTOR_SHARE", default_value_t = DEFAULT_INVESTOR_SHARE_PERCENT)]
    share: f64,

    /// VAT withheld as a fraction (0.12 = 12 %)
    #[arg(long, env = "INVESTMENT_VAT_RATE", default_value_t = STANDARD_VAT_RATE)]
    vat: f64,
}

impl ParamArgs {
    fn to_params(&self) -> Result<InvestmentParameters> {
        InvestmentParameters::new(self.capital, self.rate, self.term, self.share, self.vat)
            .context("invalid investment parameters")
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModelArg {
    Compound,
    CompoundNet,
    Traditional,
    Compare,
}

/// What a `--model` choice runs
#[derive(Debug, Clone, Copy, PartialEq)]
enum Run {
    Single(ReturnModel),
    Compare,
}

impl ModelArg {
    fn run(self) -> Run {
        match self {
            ModelArg::Compound => Run::Single(ReturnModel::CompoundReinvestment),
            ModelArg::CompoundNet => Run::Single(ReturnModel::CompoundNetReinvestment),
            ModelArg::Traditional => Run::Single(ReturnModel::TraditionalFixedInstallment),
            ModelArg::Compare => Run::Compare,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindArg {
    Standard,
    InterestOnly,
    Compound,
}

impl From<KindArg> for ScheduleKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Standard => ScheduleKind::Standard,
            KindArg::InterestOnly => ScheduleKind::InterestOnly,
            KindArg::Compound => ScheduleKind::Compound,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TargetArg {
    Monthly,
    Compound,
    InterestOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
enum OutputFormat {
    Json,
    Table,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let calculator = ReturnCalculator::new();

    match cli.command {
        Commands::Project { params, model } => {
            let params = params.to_params()?;
            match model.run() {
                Run::Single(model) => {
                    let result = calculator.calculate(model, &params)?;
                    if cli.format == OutputFormat::Json {
                        print_json(&result)?;
                    } else {
                        print_result(&format!("{:?}", model), &result);
                    }
                }
                Run::Compare => {
                    let comparison = calculator.compare(&params)?;
                    if cli.format == OutputFormat::Json {
                        print_json(&json!({
                            "compound": comparison.compound,
                            "traditional": comparison.traditional,
                            "advantage": comparison.advantage(),
                        }))?;
                    } else {
                        print_result("Compound reinvestment", &comparison.compound);
                        print_result("Traditional fixed installment", &comparison.traditional);
                        println!("Compound advantage: {:.2}", comparison.advantage());
                    }
                }
            }
        }
        Commands::Schedule { params, kind } => {
            let params = params.to_params()?;
            let (rows, summary) = calculator.schedule(kind.into(), &params)?;
            if cli.format == OutputFormat::Json {
                print_json(&json!({ "rows": rows, "summary": summary }))?;
            } else {
                println!(
                    "{:>5} {:>14} {:>12} {:>10} {:>12} {:>12} {:>12} {:>12} {:>14}",
                    "Month", "Initial", "Interest", "VAT", "Int+VAT", "Payment", "Investor", "Amort", "Final",
                );
                println!("{}", "-".repeat(113));
                for row in &rows {
                    println!(
                        "{:>5} {:>14.2} {:>12.2} {:>10.2} {:>12.2} {:>12.2} {:>12.2} {:>12.2} {:>14.2}",
                        row.month,
                        row.initial_balance,
                        row.interest,
                        row.vat,
                        row.interest_plus_vat,
                        row.payment,
                        row.investor_payment,
                        row.amortization,
                        row.final_balance,
                    );
                }
                println!("\nSummary:");
                println!("  Total Interest + VAT: {:.2}", summary.total_interest);
                println!("  Total VAT: {:.2}", summary.total_vat);
                println!("  Net Profit: {:.2}", summary.net_profit);
                println!("  Total To Receive: {:.2}", summary.total_to_receive);
            }
        }
        Commands::Goal { params, target, desired } => {
            let capital = match target {
                TargetArg::Monthly => {
                    goal::required_capital_for_monthly(desired, params.rate, params.share, params.vat)?
                }
                TargetArg::Compound => goal::required_capital_for_compound(
                    desired,
                    params.rate,
                    params.term,
                    params.share,
                    params.vat,
                )?,
                TargetArg::InterestOnly => goal::required_capital_for_interest_only(
                    desired,
                    params.rate,
                    params.share,
                    params.vat,
                )?,
            };
            if cli.format == OutputFormat::Json {
                print_json(&json!({ "requiredCapital": capital }))?;
            } else {
                println!("Required capital: {:.2}", capital);
            }
        }
        Commands::Batch { input, model } => {
            let rows = load_parameters(&input)
                .with_context(|| format!("failed to load {}", input.display()))?;
            match model.run() {
                Run::Single(model) => {
                    print_batch_results(&BatchRunner::new(model).run_labeled(&rows), cli.format)?
                }
                Run::Compare => {
                    let runner = BatchRunner::new(ReturnModel::CompoundReinvestment);
                    print_batch_comparisons(&runner.compare_labeled(&rows), cli.format)?
                }
            }
        }
    }

    Ok(())
}

fn print_result(title: &str, result: &InvestmentResult) {
    println!("{}:", title);
    println!("  Final Capital: {:.2}", result.final_capital);
    println!("  Gross Profit: {:.2}", result.gross_profit);
    println!("  VAT Paid: {:.2}", result.vat_paid);
    println!("  Net Profit: {:.2}", result.net_profit);
    println!("  Total To Receive: {:.2}", result.total_to_receive);
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn rejected_messages<T>(results: &[investment_projection::Result<T>]) -> Vec<String> {
    results
        .iter()
        .filter_map(|item| item.as_ref().err().map(|e| e.to_string()))
        .collect()
}

fn print_batch_results(
    results: &[investment_projection::Result<LabeledResult>],
    format: OutputFormat,
) -> Result<()> {
    let summary = BatchSummary::from_labeled(results);
    let accepted: Vec<&LabeledResult> =
        results.iter().filter_map(|item| item.as_ref().ok()).collect();
    let rejected = rejected_messages(results);

    if format == OutputFormat::Json {
        return print_json(&json!({ "results": accepted, "rejected": rejected, "summary": summary }));
    }

    println!(
        "{:>6} {:>14} {:>12} {:>10} {:>12} {:>14}",
        "Id", "Capital", "Gross", "VAT", "Net", "Total",
    );
    println!("{}", "-".repeat(73));
    for row in &accepted {
        println!(
            "{:>6} {:>14.2} {:>12.2} {:>10.2} {:>12.2} {:>14.2}",
            row.id,
            row.params.capital,
            row.result.gross_profit,
            row.result.vat_paid,
            row.result.net_profit,
            row.result.total_to_receive,
        );
    }
    for message in &rejected {
        eprintln!("rejected: {}", message);
    }
    println!(
        "\n{} rows, {} rejected, total to receive {:.2}",
        summary.evaluated, summary.rejected, summary.total_to_receive,
    );
    Ok(())
}

fn print_batch_comparisons(
    results: &[investment_projection::Result<LabeledComparison>],
    format: OutputFormat,
) -> Result<()> {
    let accepted: Vec<&LabeledComparison> =
        results.iter().filter_map(|item| item.as_ref().ok()).collect();
    let rejected = rejected_messages(results);

    if format == OutputFormat::Json {
        let comparisons: Vec<_> = accepted
            .iter()
            .map(|row| {
                json!({
                    "id": row.id,
                    "params": row.params,
                    "compound": row.comparison.compound,
                    "traditional": row.comparison.traditional,
                    "advantage": row.comparison.advantage(),
                })
            })
            .collect();
        return print_json(&json!({ "comparisons": comparisons, "rejected": rejected }));
    }

    println!(
        "{:>6} {:>14} {:>14} {:>14} {:>12}",
        "Id", "Capital", "Compound", "Traditional", "Advantage",
    );
    println!("{}", "-".repeat(64));
    for row in &accepted {
        println!(
            "{:>6} {:>14.2} {:>14.2} {:>14.2} {:>12.2}",
            row.id,
            row.params.capital,
            row.comparison.compound.total_to_receive,
            row.comparison.traditional.total_to_receive,
            row.comparison.advantage(),
        );
    }
    for message in &rejected {
        eprintln!("rejected: {}", message);
    }
    Ok(())
}
