use std::{path::PathBuf, sync::Arc};

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use dashboard_core::{
    AnalyticsReport, AttributeAssigner, EmployeeStore, HttpEmployeeSource, RandomAssigner,
    SearchFilters, SearchState,
};
use rand::{rngs::StdRng, SeedableRng};
use render::EmployeeView;
use shared::domain::{Department, Employee, EmployeeId};
use tracing::{error, info};

mod config;
mod render;

use config::{load_settings, validate, Settings};

#[derive(Parser, Debug)]
#[command(about = "Terminal front end for the HR employee dashboard")]
struct Cli {
    /// Path to a TOML config file (defaults to ./dashboard.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    source_url: Option<String>,
    /// Seed for department/rating assignment and sample chart data.
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search and filter the directory.
    List {
        #[command(flatten)]
        search: SearchArgs,
        /// Toggle a bookmark before listing; repeatable.
        #[arg(long = "bookmark")]
        bookmarks: Vec<i64>,
        /// Promote an employee after filtering; repeatable.
        #[arg(long = "promote")]
        promotions: Vec<i64>,
    },
    /// Toggle the given bookmarks, then list bookmarked employees.
    Bookmarks {
        ids: Vec<i64>,
        #[arg(long = "promote")]
        promotions: Vec<i64>,
    },
    Show {
        id: i64,
    },
    Analytics,
}

#[derive(Args, Debug)]
struct SearchArgs {
    #[arg(long, default_value = "")]
    query: String,
    #[arg(long)]
    department: Option<Department>,
    #[arg(long)]
    min_performance: Option<u8>,
    #[arg(long)]
    max_performance: Option<u8>,
    #[arg(long)]
    min_age: Option<u32>,
    #[arg(long)]
    max_age: Option<u32>,
}

impl SearchArgs {
    fn into_state(self) -> SearchState {
        let mut state = SearchState::default();
        state.set_query(self.query);
        state.set_filter(SearchFilters {
            department: self.department,
            min_performance: self.min_performance,
            max_performance: self.max_performance,
            min_age: self.min_age,
            max_age: self.max_age,
        });
        state
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = load_settings(cli.config.as_deref())?;
    if let Some(source_url) = cli.source_url.clone() {
        settings.source_url = source_url;
    }
    if let Some(seed) = cli.seed {
        settings.rng_seed = Some(seed);
    }
    validate(&settings)?;

    tracing_subscriber::fmt()
        .with_env_filter(settings.log_filter.as_str())
        .init();

    let mut store = build_store(&settings);
    info!(
        source_url = %settings.source_url,
        limit = settings.fetch_limit,
        "loading employee directory"
    );
    store.fetch_employees().await;
    if let Some(message) = store.error() {
        error!(error = %message, "employee fetch failed");
        bail!("could not load employees: {message}");
    }

    run(cli.command, cli.json, &settings, &mut store)
}

fn build_store(settings: &Settings) -> EmployeeStore {
    let assigner: Box<dyn AttributeAssigner> = match settings.rng_seed {
        Some(seed) => Box::new(RandomAssigner::seeded(seed)),
        None => Box::new(RandomAssigner::from_entropy()),
    };
    let source = HttpEmployeeSource::new(settings.source_url.clone(), settings.fetch_limit);
    EmployeeStore::new(Arc::new(source), assigner)
}

fn run(command: Command, json: bool, settings: &Settings, store: &mut EmployeeStore) -> Result<()> {
    match command {
        Command::List {
            search,
            bookmarks,
            promotions,
        } => {
            for id in bookmarks {
                store.toggle_bookmark(EmployeeId(id));
            }
            search.into_state().apply(store);
            for id in promotions {
                store.promote_employee(EmployeeId(id));
            }
            let views = employee_views(store, store.filtered_employees());
            print_employees(&views, json)?;
        }
        Command::Bookmarks { ids, promotions } => {
            for id in ids {
                store.toggle_bookmark(EmployeeId(id));
            }
            for id in promotions {
                store.promote_employee(EmployeeId(id));
            }
            let bookmarked: Vec<_> = store.bookmarked_employees().into_iter().cloned().collect();
            let views = employee_views(store, &bookmarked);
            print_employees(&views, json)?;
        }
        Command::Show { id } => {
            let id = EmployeeId(id);
            let Some(employee) = store.employee(id) else {
                bail!("employee {id} not found");
            };
            let view = EmployeeView::new(employee, store.is_bookmarked(id));
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print!("{}", render::employee_detail(&view));
            }
        }
        Command::Analytics => {
            let mut rng = match settings.rng_seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let today = chrono::Local::now().date_naive();
            let report = AnalyticsReport::build(store.employees(), &mut rng, today);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", render::analytics(&report));
            }
        }
    }
    Ok(())
}

fn employee_views<'a>(store: &EmployeeStore, employees: &'a [Employee]) -> Vec<EmployeeView<'a>> {
    employees
        .iter()
        .map(|employee| EmployeeView::new(employee, store.is_bookmarked(employee.id)))
        .collect()
}

fn print_employees(views: &[EmployeeView<'_>], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(views)?);
    } else {
        print!("{}", render::employee_table(views));
    }
    Ok(())
}
