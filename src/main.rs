//! Mortgage Calculator CLI
//!
//! Command-line presentation layer over the amortization engine

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

use mortgage_calculator::format::{format_currency, format_percentage};
use mortgage_calculator::i18n::{translations, Language, Translations};
use mortgage_calculator::loan::load_parameters_csv;
use mortgage_calculator::loan::load_parameters_json;
use mortgage_calculator::{LoanParameters, RepaymentType, ScheduleEngine, ScheduleResult};

/// Mortgage amortization with inflation, interest deduction and repayment comparison
#[derive(Parser)]
#[command(name = "mortgage-calc", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Display language (nl or en)
    #[arg(long, default_value = "nl", global = true)]
    lang: Language,

    /// ISO currency code used for display only
    #[arg(long, default_value = "EUR", global = true)]
    currency: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the schedule for one loan
    Calculate(CalculateArgs),
    /// Compute a summary line for every loan in a CSV file
    Batch {
        /// CSV file with one parameter set per row
        file: PathBuf,
    },
}

#[derive(Args)]
struct CalculateArgs {
    /// Read parameters from a JSON file; the flags below are ignored
    #[arg(long)]
    params: Option<PathBuf>,

    /// Loan amount
    #[arg(long, default_value_t = 670_000.0)]
    principal: f64,

    /// Annual interest rate in percent (4.32 = 4.32%)
    #[arg(long, default_value_t = 4.32)]
    rate: f64,

    /// Term in years
    #[arg(long, default_value_t = 30)]
    term_years: u32,

    /// Annual inflation in percent
    #[arg(long, default_value_t = 2.0)]
    inflation: f64,

    /// Years of mortgage interest deduction
    #[arg(long, default_value_t = 10)]
    deduction_years: u32,

    /// Tax rate for the deduction benefit in percent
    #[arg(long, default_value_t = 36.93)]
    tax_rate: f64,

    /// Phase the deduction rate out linearly
    #[arg(long)]
    phase_out: bool,

    /// Deduction rate at the end of the phase-out in percent
    #[arg(long, default_value_t = 0.0)]
    deduction_end_rate: f64,

    /// annuity or linear
    #[arg(long, default_value = "annuity")]
    repayment: RepaymentType,

    /// Annual return on the investment account in percent
    #[arg(long, default_value_t = 5.0)]
    investment_return: f64,

    /// Annual wealth tax on a positive balance in percent
    #[arg(long, default_value_t = 1.2)]
    wealth_tax: f64,

    /// Annual borrowing cost on a negative balance in percent
    #[arg(long, default_value_t = 6.0)]
    borrowing_cost: f64,

    /// Number of months to print
    #[arg(long, default_value_t = 24)]
    months: usize,

    /// Write the full month schedule to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Print the full result as JSON instead of tables
    #[arg(long)]
    json: bool,
}

impl CalculateArgs {
    fn parameters(&self) -> Result<LoanParameters> {
        if let Some(path) = &self.params {
            return load_parameters_json(path)
                .with_context(|| format!("reading parameters from {}", path.display()));
        }

        Ok(LoanParameters {
            principal: self.principal,
            annual_interest_rate: self.rate,
            term_years: self.term_years,
            annual_inflation_rate: self.inflation,
            deduction_years: self.deduction_years,
            tax_rate: self.tax_rate,
            deduction_linear_phase_out: self.phase_out,
            deduction_end_rate: self.deduction_end_rate,
            repayment_type: self.repayment,
            investment_return_rate: self.investment_return,
            wealth_tax_rate: self.wealth_tax,
            borrowing_cost_rate: self.borrowing_cost,
        })
    }
}

/// Formats amounts for the selected language and currency
struct Presenter<'a> {
    t: &'static Translations,
    locale: &'static str,
    currency: &'a str,
}

impl Presenter<'_> {
    fn money(&self, amount: f64) -> Result<String> {
        Ok(format_currency(amount, self.locale, self.currency)?)
    }

    fn repayment_label(&self, repayment_type: RepaymentType) -> &'static str {
        match repayment_type {
            RepaymentType::Annuity => self.t.annuity,
            RepaymentType::Linear => self.t.linear,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let display = Presenter {
        t: translations(cli.lang),
        locale: cli.lang.locale(),
        currency: &cli.currency,
    };

    match cli.command {
        Commands::Calculate(args) => run_calculate(&args, &display),
        Commands::Batch { file } => run_batch(&file, &display),
    }
}

fn run_calculate(args: &CalculateArgs, display: &Presenter) -> Result<()> {
    let params = args.parameters()?;
    params.validate()?;

    let result = ScheduleEngine::default().compute(&params);

    if let Some(path) = &args.csv {
        write_schedule_csv(path, &result)
            .with_context(|| format!("writing schedule to {}", path.display()))?;
        log::info!("schedule written to {}", path.display());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    print_summary(&params, &result, display)?;
    print_months(&result, args.months, display)?;
    print_yearly(&result, display)?;
    print_comparison(&result, display)?;

    println!("\n{}", display.t.disclaimer);
    Ok(())
}

fn run_batch(file: &Path, display: &Presenter) -> Result<()> {
    let loans = load_parameters_csv(file)
        .with_context(|| format!("reading loans from {}", file.display()))?;
    let engine = ScheduleEngine::default();
    let t = display.t;

    println!(
        "{:>4} {:>12} {:>16} {:>14} {:>14} {:>14}",
        "#", t.mortgage_type, t.first_monthly_payment, t.total_paid, t.real, t.extra_costs_total
    );
    println!("{}", "-".repeat(80));

    for (index, params) in loans.iter().enumerate() {
        if let Err(e) = params.validate() {
            log::warn!("skipping loan {}: {}", index + 1, e);
            continue;
        }
        let result = engine.compute(params);
        println!(
            "{:>4} {:>12} {:>16} {:>14} {:>14} {:>14}",
            index + 1,
            display.repayment_label(result.repayment_type),
            display.money(result.first_month_payment)?,
            display.money(result.total_nominal)?,
            display.money(result.total_real)?,
            display.money(result.surplus_nominal)?,
        );
    }

    Ok(())
}

fn print_summary(params: &LoanParameters, result: &ScheduleResult, display: &Presenter) -> Result<()> {
    let t = display.t;

    println!("{}", t.title);
    println!("{}\n", "=".repeat(t.title.chars().count()));

    println!("{}:", t.parameters);
    println!("  {}: {}", t.loan_amount, display.money(params.principal)?);
    println!("  {}: {}", t.interest_rate, params.annual_interest_rate);
    println!("  {}: {}", t.duration, params.term_years);
    println!("  {}: {}", t.inflation, params.annual_inflation_rate);
    println!("  {}: {}", t.deduction_years, params.deduction_years);
    println!("  {}: {}", t.tax_rate, params.tax_rate);
    println!("  {}: {}", t.mortgage_type, display.repayment_label(params.repayment_type));
    println!();

    println!("{}:", t.results);
    println!("  {:<24} {:>14} {:>14}", t.metric, t.nominal, t.real);
    println!("  {}", "-".repeat(54));
    println!(
        "  {:<24} {:>14} {:>14}",
        t.first_monthly_payment,
        display.money(result.first_month_payment)?,
        display.money(result.real_average_payment)?,
    );
    println!(
        "  {:<24} {:>14} {:>14}",
        t.total_paid,
        display.money(result.total_nominal)?,
        display.money(result.total_real)?,
    );
    println!(
        "  {:<24} {:>14} {:>14}",
        t.extra_costs_total,
        display.money(result.surplus_nominal)?,
        display.money(result.surplus_real)?,
    );
    println!(
        "  {:<24} {:>14} {:>14}",
        t.extra_costs_monthly,
        display.money(result.surplus_nominal_per_month)?,
        display.money(result.surplus_real_per_month)?,
    );

    Ok(())
}

fn print_months(result: &ScheduleResult, count: usize, display: &Presenter) -> Result<()> {
    let t = display.t;

    println!();
    println!(
        "{:>5} {:>12} {:>12} {:>12} {:>12} {:>20} {:>12}",
        t.month, t.repayment, t.net_interest, t.deduction_benefit, t.real, t.cumulative_inflation, t.difference
    );
    println!("{}", "-".repeat(92));

    for row in result.months.iter().take(count) {
        println!(
            "{:>5} {:>12} {:>12} {:>12} {:>12} {:>20} {:>12}",
            row.month,
            display.money(row.principal_paid)?,
            display.money(row.net_interest)?,
            display.money(row.tax_benefit)?,
            display.money(row.net_payment_real)?,
            format_percentage(row.cumulative_inflation_percent),
            display.money(row.delta)?,
        );
    }

    if result.months.len() > count {
        println!("... ({} more)", result.months.len() - count);
    }

    Ok(())
}

fn print_yearly(result: &ScheduleResult, display: &Presenter) -> Result<()> {
    let t = display.t;

    println!("\n{}:", t.yearly_overview);
    println!(
        "{:>5} {:>12} {:>12} {:>12} {:>12} {:>20}",
        t.year, t.repayment, t.net_interest, t.deduction_benefit, t.real, t.cumulative_inflation
    );
    println!("{}", "-".repeat(78));

    for year in result.yearly_overview() {
        println!(
            "{:>5} {:>12} {:>12} {:>12} {:>12} {:>20}",
            year.year,
            display.money(year.principal_paid)?,
            display.money(year.net_interest)?,
            display.money(year.tax_benefit)?,
            display.money(year.total_real())?,
            format_percentage(year.cumulative_inflation_percent),
        );
    }

    Ok(())
}

fn print_comparison(result: &ScheduleResult, display: &Presenter) -> Result<()> {
    let t = display.t;

    if let Some(linear) = &result.linear_comparison {
        println!("\n{}:", t.comparison_with_linear);
        println!(
            "  {:<24} {:>14} {:>14}",
            t.extra_costs_total,
            display.money(linear.extra_costs)?,
            display.money(linear.extra_costs_real)?,
        );
        println!(
            "  {:<24} {:>14} {:>14}",
            t.extra_costs_monthly,
            display.money(linear.extra_costs_monthly)?,
            display.money(linear.extra_costs_real_monthly)?,
        );
    }

    if let Some(investment) = &result.investment {
        println!("\n{}:", t.investment_account_simulation);
        println!(
            "{:>5} {:>12} {:>12} {:>12} {:>12}",
            t.year, t.difference, t.return_label, t.tax, t.balance
        );
        for year in &investment.years {
            println!(
                "{:>5} {:>12} {:>12} {:>12} {:>12}",
                year.year,
                display.money(year.delta)?,
                display.money(year.return_earned)?,
                display.money(year.wealth_tax + year.borrowing_cost)?,
                display.money(year.balance)?,
            );
        }
        println!(
            "  {}: {} ({} {})",
            t.investment_account_balance,
            display.money(investment.balance_nominal)?,
            display.money(investment.balance_real)?,
            t.real.to_lowercase(),
        );
    }

    Ok(())
}

fn write_schedule_csv(path: &Path, result: &ScheduleResult) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in &result.months {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
