use clap::{Parser, Subcommand};
use serde_json::{json, Map, Value};

#[derive(Parser)]
#[command(name = "catalog-cli")]
#[command(about = "Command-line client for the University Catalog API", long_about = None)]
struct Cli {
    #[arg(short, long, env = "CATALOG_URL", default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check service health
    Health,
    /// List all universities
    List,
    /// Show one university
    Get { id: String },
    /// List universities of one type (public, private, national, azhar)
    ByType { category: String },
    /// Search universities
    Search {
        #[arg(short, long)]
        query: Option<String>,
        #[arg(short = 't', long = "type")]
        category: Option<String>,
        #[arg(short, long)]
        region: Option<String>,
        #[arg(long)]
        max_fees: Option<i64>,
        #[arg(long)]
        max_grade: Option<i64>,
        #[arg(long)]
        sort_by: Option<String>,
        #[arg(long)]
        order: Option<String>,
        #[arg(long)]
        page: Option<i64>,
        #[arg(long)]
        page_size: Option<i64>,
    },
    /// Show overall statistics, or one region's
    Stats {
        #[arg(short, long)]
        region: Option<String>,
    },
    /// List distinct faculties
    Faculties,
    /// Look a faculty up by slug (e.g. computer-science)
    Faculty { slug: String },
}

fn search_body(command: &Commands) -> Value {
    let Commands::Search {
        query,
        category,
        region,
        max_fees,
        max_grade,
        sort_by,
        order,
        page,
        page_size,
    } = command
    else {
        return Value::Null;
    };

    let mut body = Map::new();
    let mut put = |key: &str, value: Value| {
        if !value.is_null() {
            body.insert(key.to_string(), value);
        }
    };
    put("searchQuery", json!(query));
    put("selectedType", json!(category));
    put("selectedRegion", json!(region));
    put("filterByFees", json!(max_fees));
    put("filterByGrade", json!(max_grade));
    put("sortBy", json!(sort_by));
    put("sortOrder", json!(order));
    put("page", json!(page));
    put("pageSize", json!(page_size));
    Value::Object(body)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = format!("{}/api/v1", cli.url.trim_end_matches('/'));

    let request = match &cli.command {
        Commands::Health => client.get(format!("{base}/health")),
        Commands::List => client.get(format!("{base}/universities")),
        Commands::Get { id } => client.get(format!("{base}/universities/{id}")),
        Commands::ByType { category } => client.get(format!("{base}/universities/type/{category}")),
        Commands::Search { .. } => client
            .post(format!("{base}/universities/search"))
            .json(&search_body(&cli.command)),
        Commands::Stats { region: None } => client.get(format!("{base}/stats")),
        Commands::Stats { region: Some(region) } => {
            client.get(format!("{base}/stats/region/{region}"))
        }
        Commands::Faculties => client.get(format!("{base}/faculties")),
        Commands::Faculty { slug } => client.get(format!("{base}/faculties/{slug}")),
    };

    print_response(request.send().await?).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;

    let rendered = match serde_json::from_str::<Value>(&text) {
        Ok(json) => serde_json::to_string_pretty(&json)?,
        Err(_) => text,
    };

    if status.is_success() {
        println!("{}", rendered);
    } else {
        eprintln!("Error: API returned status {}", status);
        eprintln!("{}", rendered);
        std::process::exit(1);
    }
    Ok(())
}
