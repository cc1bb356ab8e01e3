use std::{error::Error, path::PathBuf, process::exit};

use clap::{Args, Parser, Subcommand};
use time::Date;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use expense_ledger::{
    Category, CategoryFilter, DEFAULT_WINDOW_MONTHS, FileStore, FilterCriteria, Ledger,
    LedgerView, TransactionForm, TransactionId, TransactionKind, TypeFilter, dashboard_charts,
    format_currency, format_date, format_signed_amount, local_today, parse_date,
};

/// A command line personal expense ledger.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory the ledger is stored in.
    #[arg(long, env = "LEDGER_DATA_DIR", default_value = ".ledger")]
    data_dir: PathBuf,

    /// The number of months covered by the monthly trend.
    #[arg(long, default_value_t = DEFAULT_WINDOW_MONTHS)]
    months: u32,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Record a new income or expense.
    Add {
        /// What the transaction was for.
        #[arg(long, short)]
        description: String,

        /// The amount, without a sign.
        #[arg(long, short, allow_hyphen_values = true)]
        amount: String,

        /// Either "income" or "expense".
        #[arg(long, short, default_value = "expense")]
        kind: TransactionKind,

        #[arg(long, short, default_value = "Other")]
        category: Category,

        /// The date as YYYY-MM-DD, defaults to today.
        #[arg(long)]
        date: Option<String>,
    },
    /// Delete a transaction by its ID.
    Delete { id: String },
    /// Delete every transaction.
    Clear {
        /// Confirm that every transaction should be deleted.
        #[arg(long)]
        yes: bool,
    },
    /// List the transactions matching the filters.
    List(FilterArgs),
    /// Show totals for the transactions matching the filters.
    Summary(FilterArgs),
    /// Print the chart configurations as ECharts JSON.
    Charts {
        #[command(flatten)]
        filters: FilterArgs,

        /// The last month of the monthly trend, defaults to today.
        #[arg(long, value_parser = parse_date)]
        anchor: Option<Date>,
    },
}

#[derive(Args, Debug)]
struct FilterArgs {
    /// Only show transactions whose description contains this text.
    #[arg(long, short, default_value = "")]
    search: String,

    /// One of "all", "income" or "expense".
    #[arg(long = "type", short = 't', default_value = "all")]
    type_filter: TypeFilter,

    /// A category name, or "all".
    #[arg(long, short, default_value = "all")]
    category: CategoryFilter,

    /// The earliest date to show, as YYYY-MM-DD.
    #[arg(long, value_parser = parse_date)]
    from: Option<Date>,

    /// The latest date to show, as YYYY-MM-DD.
    #[arg(long, value_parser = parse_date)]
    to: Option<Date>,
}

impl From<FilterArgs> for FilterCriteria {
    fn from(args: FilterArgs) -> Self {
        FilterCriteria::default()
            .search(&args.search)
            .type_filter(args.type_filter)
            .category(args.category)
            .from(args.from)
            .to(args.to)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    setup_logging();

    let cli = Cli::parse();
    let today = local_today();

    let mut ledger = Ledger::open(FileStore::new(&cli.data_dir)).with_window_months(cli.months);

    match cli.command {
        Command::Add {
            description,
            amount,
            kind,
            category,
            date,
        } => {
            let form = TransactionForm {
                description,
                amount,
                kind,
                category,
                date: date.unwrap_or_else(|| today.to_string()),
            };

            match ledger.add(form) {
                Ok(transaction) => println!("Added {}", transaction.id),
                Err(error) if error.is_validation_error() => {
                    eprintln!("Please fill description, amount and date: {error}");
                    exit(1);
                }
                Err(error) => return Err(error.into()),
            }
        }
        Command::Delete { id } => {
            if ledger.delete(&TransactionId::from(id.as_str()))? {
                println!("Deleted {id}");
            } else {
                println!("No transaction with ID {id}");
            }
        }
        Command::Clear { yes } => {
            if !yes {
                eprintln!("Refusing to clear all transactions without --yes.");
                exit(1);
            }

            ledger.clear()?;
            println!("Cleared all transactions");
        }
        Command::List(filters) => {
            let view = ledger.view(&filters.into(), today);
            print_list(&view);
        }
        Command::Summary(filters) => {
            let view = ledger.view(&filters.into(), today);
            print_summary(&view);
        }
        Command::Charts { filters, anchor } => {
            let view = ledger.view(&filters.into(), anchor.unwrap_or(today));

            for chart in dashboard_charts(&view.category_totals, &view.monthly_series) {
                println!("{}\n{}", chart.id, chart.options);
            }
        }
    }

    Ok(())
}

fn print_list(view: &LedgerView) {
    if view.transactions.is_empty() {
        println!("No transactions");
    }

    for transaction in &view.transactions {
        println!(
            "{:>12}  {}  {} • {}  {}",
            format_signed_amount(transaction.amount),
            transaction.description,
            transaction.category,
            format_date(transaction.date),
            transaction.id,
        );
    }

    println!("{}", view.status);
}

fn print_summary(view: &LedgerView) {
    let summary = &view.summary;

    println!("Balance:      {}", format_currency(summary.balance));
    println!("Income:       {}", format_currency(summary.income));
    println!("Expense:      {}", format_currency(summary.expense));
    println!("Transactions: {}", summary.count);
    println!("Categories:   {}", summary.category_count);
    println!("{}", view.status);
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(filter),
        )
        .init();
}
