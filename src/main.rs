use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use zapgenius::usage;
use zapgenius::{Query, RankingEngine, RecommendationResult, ResultView, SortBy, TfIdfVectorizer};

/// Recommend automation templates for a repetitive task
#[derive(Parser, Debug)]
#[command(name = "zapgenius", version)]
#[command(about = "Recommend zaps for a task you do frequently", long_about = None)]
struct Args {
    /// Task description; prompts interactively when omitted
    query: Vec<String>,

    /// Path to the template catalog (JSON array)
    #[arg(short, long, default_value = "zaps/zap_database.json")]
    catalog: PathBuf,

    /// Usage data used when no query is given
    #[arg(short, long, default_value = "data/sample_user_data.json")]
    usage: PathBuf,

    /// Number of results
    #[arg(short = 'k', long, default_value_t = 5)]
    top_k: usize,

    /// Hide results scoring below this value
    #[arg(long, default_value_t = 0.0)]
    min_score: f64,

    /// Keep results whose name or apps contain this text
    #[arg(short, long)]
    filter: Option<String>,

    /// Result ordering
    #[arg(short, long, value_enum, default_value_t = SortBy::Relevance)]
    sort: SortBy,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Loading catalog from {:?}", args.catalog);
    let engine = RankingEngine::from_path(TfIdfVectorizer::new(), &args.catalog)
        .with_context(|| format!("failed to build engine from {}", args.catalog.display()))?;
    info!("Engine ready with {} templates", engine.len());

    let mut query = args.query.join(" ").trim().to_string();
    if query.is_empty() && !args.json {
        query = prompt("Describe a task you do frequently (press Enter to use your usage data): ")?;
    }

    let actions = if query.is_empty() {
        usage::load_actions(&args.usage)
    } else {
        vec![query]
    };

    let results = engine.recommend(Query::Actions(actions.clone()), args.top_k)?;
    let view = ResultView {
        min_score: args.min_score,
        filter: args.filter.clone(),
        sort: args.sort,
    };
    let results = view.apply(results);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print_results(&actions, &results);
    }
    Ok(())
}

/// Read one line; EOF counts as an empty answer
fn prompt(message: &str) -> anyhow::Result<String> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn print_results(actions: &[String], results: &[RecommendationResult]) {
    println!("\nZapGenius Recommendations\n");
    println!("Based on: {}", actions.join(", "));
    println!("\nTop Results:\n");

    if results.is_empty() {
        println!("No results to show. Try lowering the minimum score or clearing the filter.");
        return;
    }

    for (i, r) in results.iter().enumerate() {
        println!("{}. {}  (score: {:.3})", i + 1, r.zap, r.score);
        if !r.description.is_empty() {
            println!("   {}", r.description);
        }
        if !r.apps_involved.is_empty() {
            println!("   Apps: {}", r.apps_involved.join(", "));
        }
        if !r.zapier_url.is_empty() {
            println!("   {}", r.zapier_url);
        }
        println!("   Business Value: {}\n", r.business_value);
    }
}
