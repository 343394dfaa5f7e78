use std::net::SocketAddr;
use std::process;

use clap::{Args, Parser, Subcommand};
use comfy_table::{modifiers, presets, ContentArrangement, Table};
use terminal_size::{terminal_size, Width};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use eoseoogae::config::{self, DEFAULT_RECOMMENDED_LIMIT};
use eoseoogae::geo::Coordinates;
use eoseoogae::models::{AppState, GeoRadius, PetSize, Place, PlaceCategory, PlaceFilter, PriceRange};
use eoseoogae::routes::build_router;
use eoseoogae::services::{build_place_store, load_places_from_file, sample_regions, PlaceStore};

async fn build_state(env_file: Option<&str>, places_file: Option<String>) -> AppState {
    config::load_env_file(env_file);
    let places_file = places_file.or_else(config::get_places_file);
    let store = match build_place_store(places_file.as_deref()).await {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(%e, "Failed to seed place store");
            eprintln!("{}: {}", yansi::Paint::red("Failed to load places"), e);
            process::exit(1);
        }
    };
    AppState::new(store, sample_regions())
}

async fn start_server(state: AppState, host: &str, port: u16) {
    let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(%e, "Invalid host/port format");
            eprintln!("{}: {}", yansi::Paint::red("Invalid host/port format"), e);
            process::exit(1);
        }
    };
    let places = state.places.len().unwrap_or_default();
    let app = build_router(state);
    tracing::info!(%addr, places, "Starting server");
    println!(
        "{} {}",
        yansi::Paint::new("Web server running on").green(),
        yansi::Paint::new(format!("http://{}", addr)).cyan()
    );
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(%e, "Server encountered an error while running");
                eprintln!("{}: {}", yansi::Paint::new("Server error").red(), e);
                process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!(%e, "Failed to bind to address; is the port already in use?");
            eprintln!(
                "{}: {}\n{}",
                yansi::Paint::new(format!("Failed to bind to {}", addr)).red(),
                e,
                yansi::Paint::new("Stop the process using this port, or pass a different --port value.").yellow()
            );
            process::exit(1);
        }
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }
    table
}

fn print_places(places: &[Place]) {
    if places.is_empty() {
        println!("(no places)");
        return;
    }
    let mut table = new_table();
    table.set_header(vec!["ID", "Name", "Category", "Region", "Dogs", "Rating"]);
    for p in places {
        table.add_row(vec![
            p.id.clone(),
            p.name.clone(),
            p.category.label().to_string(),
            format!("{} {}", p.location.sido, p.location.sigungu),
            p.pet_policy.size_restriction.label().to_string(),
            format!("{:.1} ({})", p.rating.overall, p.rating.review_count),
        ]);
    }
    println!("\n{table}");
}

fn print_place(place: &Place) {
    let mut table = new_table();
    table.set_header(vec!["Field", "Value"]);
    let coordinates = place
        .coordinates()
        .map(|c| format!("{:.5}, {:.5}", c.latitude, c.longitude))
        .unwrap_or_default();
    let rows: Vec<(&str, String)> = vec![
        ("id", place.id.clone()),
        ("slug", place.slug.clone()),
        ("name", place.name.clone()),
        ("category", place.category.label().to_string()),
        ("address", place.location.address.clone()),
        ("coordinates", coordinates),
        ("dogs", place.pet_policy.size_restriction.label().to_string()),
        ("facilities", place.pet_policy.facilities.join(", ")),
        ("price", place.pricing.range.label().to_string()),
        ("rating", format!("{:.1} ({} reviews)", place.rating.overall, place.rating.review_count)),
        ("verified", place.metadata.verified.to_string()),
        ("featured", place.metadata.featured.to_string()),
        ("description", place.description.clone()),
    ];
    for (k, v) in rows {
        table.add_row(vec![k.to_string(), v]);
    }
    println!("\n{table}\n");
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("{}", yansi::Paint::new(message.to_string()).red());
    process::exit(1);
}

#[derive(Parser)]
#[command(
    name = "eoseoogae",
    author,
    version,
    about = "어서오개: dog-friendly places in Korea",
    long_about = r#"어서오개 serves a searchable directory of dog-friendly cafes, restaurants, stays and parks.

Places are seeded at startup from the bundled sample data, or from a JSON file given with
`--places-file` / PLACES_FILE. Nothing is written back to disk.

Examples:
  1) Run the web server:
      eoseoogae serve --port 8080
  2) Search from the terminal:
      eoseoogae places list --sido 서울특별시 --category cafe,park
      eoseoogae places list --lat 37.5663 --lng 126.9779 --radius 10
"#,
    after_help = "Use `eoseoogae <subcommand> --help` to get subcommand specific options and usage examples."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Host to bind to (defaults to HOST or 127.0.0.1)
        #[arg(long)]
        host: Option<String>,
        /// Port to bind to (defaults to PORT or 8080)
        #[arg(long)]
        port: Option<u16>,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
        /// JSON file with places to seed instead of the sample data
        #[arg(long)]
        places_file: Option<String>,
    },
    /// Validate configuration and the seed file
    #[command(
        about = "Validate configuration and the configured places file.",
        long_about = "Print the effective configuration and, when PLACES_FILE is set, parse it and report how many places it holds."
    )]
    CheckConfig {
        #[arg(long)]
        env_file: Option<String>,
    },
    /// Query places from the terminal
    Places {
        #[command(subcommand)]
        sub: PlaceCommands,
        #[arg(long, global = true)]
        env_file: Option<String>,
        #[arg(long, global = true)]
        places_file: Option<String>,
    },
}

#[derive(Subcommand)]
enum PlaceCommands {
    #[command(about = "Search places", long_about = "Filter, rank by rating and paginate places. Every filter is optional; supplied filters must all match.")]
    List {
        #[command(flatten)]
        filter: FilterArgs,
        /// Page number to display (1-indexed)
        #[arg(long, short = 'p', default_value = "1")]
        page: usize,
        /// Number of places per page
        #[arg(long, default_value = "20")]
        per_page: usize,
    },
    #[command(about = "Show one place", long_about = "Look a place up by id, falling back to its slug.")]
    Show { key: String },
    #[command(about = "List featured places")]
    Recommended {
        #[arg(long, default_value_t = DEFAULT_RECOMMENDED_LIMIT)]
        limit: usize,
    },
    #[command(about = "Count places per sido")]
    Regions,
}

#[derive(Args)]
struct FilterArgs {
    /// Comma-separated categories (cafe, restaurant, accommodation, park, ...)
    #[arg(long)]
    category: Option<String>,
    #[arg(long)]
    sido: Option<String>,
    #[arg(long)]
    sigungu: Option<String>,
    /// small, medium, large or all
    #[arg(long)]
    pet_size: Option<String>,
    /// budget, moderate, expensive or luxury
    #[arg(long)]
    price_range: Option<String>,
    /// Comma-separated facility tags; all must be present
    #[arg(long)]
    amenities: Option<String>,
    #[arg(long)]
    min_rating: Option<f64>,
    #[arg(long)]
    verified: Option<bool>,
    #[arg(long)]
    featured: Option<bool>,
    #[arg(long, requires_all = ["lng", "radius"])]
    lat: Option<f64>,
    #[arg(long, requires_all = ["lat", "radius"])]
    lng: Option<f64>,
    /// Search radius in kilometers
    #[arg(long, requires_all = ["lat", "lng"])]
    radius: Option<f64>,
}

impl FilterArgs {
    fn into_filter(self) -> Result<PlaceFilter, String> {
        let split = |raw: Option<String>| -> Vec<String> {
            raw.map(|r| {
                r.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
        };
        let mut categories = Vec::new();
        for raw in split(self.category) {
            categories.push(PlaceCategory::from_str(&raw).ok_or(format!("Unknown category '{raw}'"))?);
        }
        let pet_size = match self.pet_size {
            Some(raw) => Some(PetSize::from_str(&raw).ok_or(format!("Unknown pet size '{raw}'"))?),
            None => None,
        };
        let price_range = match self.price_range {
            Some(raw) => Some(PriceRange::from_str(&raw).ok_or(format!("Unknown price range '{raw}'"))?),
            None => None,
        };
        let near = match (self.lat, self.lng, self.radius) {
            (Some(lat), Some(lng), Some(radius_km)) => {
                let center = Coordinates::new(lat, lng);
                if !center.is_valid() {
                    return Err("Latitude/longitude out of range".to_string());
                }
                if radius_km.is_nan() || radius_km < 0.0 {
                    return Err(format!("Radius must be a non-negative number of kilometers, got {radius_km}"));
                }
                Some(GeoRadius { center, radius_km })
            }
            _ => None,
        };
        Ok(PlaceFilter {
            categories,
            sido: self.sido,
            sigungu: self.sigungu,
            pet_size,
            price_range,
            amenities: split(self.amenities),
            min_rating: self.min_rating,
            verified: self.verified,
            featured: self.featured,
            near,
        })
    }
}

fn run_place_command(store: &PlaceStore, sub: PlaceCommands) -> Result<(), String> {
    match sub {
        PlaceCommands::List { filter, page, per_page } => {
            let filter = filter.into_filter()?;
            let result = store.search(&filter, page, per_page).map_err(|e| e.to_string())?;
            print_places(&result.items);
            let total_pages = result.total_pages().max(1);
            println!(
                "\n{}",
                yansi::Paint::new(format!(
                    "Page {} of {} | Showing {} of {} matching places",
                    result.page,
                    total_pages,
                    result.items.len(),
                    result.total
                ))
                .cyan()
            );
            if result.page > 1 {
                println!(
                    "{} {}",
                    yansi::Paint::new("←").bold(),
                    yansi::Paint::new(format!("Previous page: --page {} --per-page {}", result.page - 1, result.limit)).dim()
                );
            }
            if result.has_more {
                println!(
                    "{} {}",
                    yansi::Paint::new("→").bold(),
                    yansi::Paint::new(format!("Next page: --page {} --per-page {}", result.page + 1, result.limit)).dim()
                );
            }
            println!();
        }
        PlaceCommands::Show { key } => {
            let found = match store.get_by_id(&key).map_err(|e| e.to_string())? {
                Some(p) => Some(p),
                None => store.get_by_slug(&key).map_err(|e| e.to_string())?,
            };
            match found {
                Some(place) => print_place(&place),
                None => return Err(format!("Place '{key}' not found")),
            }
        }
        PlaceCommands::Recommended { limit } => {
            let places = store.get_recommended(limit).map_err(|e| e.to_string())?;
            print_places(&places);
        }
        PlaceCommands::Regions => {
            let counts = store.region_counts().map_err(|e| e.to_string())?;
            let mut table = new_table();
            table.set_header(vec!["Sido", "Places"]);
            for c in counts {
                table.add_row(vec![c.sido, c.count.to_string()]);
            }
            println!("\n{table}\n");
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    // No subcommand: serve with environment defaults.
    let Some(command) = cli.command else {
        let state = build_state(None, None).await;
        start_server(state, &config::get_host(), config::get_port()).await;
        return;
    };

    match command {
        Commands::Serve { host, port, env_file, places_file } => {
            let state = build_state(env_file.as_deref(), places_file).await;
            let host = host.unwrap_or_else(config::get_host);
            let port = port.unwrap_or_else(config::get_port);
            start_server(state, &host, port).await;
        }
        Commands::CheckConfig { env_file } => {
            config::load_env_file(env_file.as_deref());
            println!("{}", yansi::Paint::new("Effective configuration").bold().underline());
            println!("HOST\t\t{}", config::get_host());
            println!("PORT\t\t{}", config::get_port());
            println!("PUBLIC_BASE_URL\t{}", config::get_public_base_url());
            println!("DEFAULT_PAGE_SIZE\t{}", config::get_default_page_size());
            println!("MAX_PAGE_SIZE\t{}", config::get_max_page_size());
            match config::get_places_file() {
                Some(path) => match load_places_from_file(&path).await {
                    Ok(places) => match PlaceStore::with_places(places) {
                        Ok(store) => println!(
                            "{}",
                            yansi::Paint::new(format!(
                                "PLACES_FILE {} loaded ({} places)",
                                path,
                                store.len().unwrap_or_default()
                            ))
                            .green()
                        ),
                        Err(e) => fail(format!("PLACES_FILE {} is inconsistent: {}", path, e)),
                    },
                    Err(e) => fail(e),
                },
                None => println!(
                    "{}",
                    yansi::Paint::new("PLACES_FILE not set; the bundled sample data will be used").dim()
                ),
            }
        }
        Commands::Places { sub, env_file, places_file } => {
            let state = build_state(env_file.as_deref(), places_file).await;
            if let Err(e) = run_place_command(&state.places, sub) {
                fail(e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter_args(args: &[&str]) -> FilterArgs {
        #[derive(Parser)]
        struct Wrapper {
            #[command(flatten)]
            filter: FilterArgs,
        }
        let argv = std::iter::once("eoseoogae").chain(args.iter().copied());
        Wrapper::try_parse_from(argv).unwrap().filter
    }

    #[test]
    fn radius_must_be_non_negative() {
        let err = filter_args(&["--lat", "37.5", "--lng", "127.0", "--radius=-1"]).into_filter().unwrap_err();
        assert!(err.contains("Radius"));
        assert!(filter_args(&["--lat", "37.5", "--lng", "127.0", "--radius", "NaN"]).into_filter().is_err());

        let filter = filter_args(&["--lat", "37.5", "--lng", "127.0", "--radius", "0"]).into_filter().unwrap();
        assert_eq!(filter.near.map(|n| n.radius_km), Some(0.0));
    }

    #[test]
    fn categories_are_parsed_from_csv() {
        let filter = filter_args(&["--category", "cafe, park"]).into_filter().unwrap();
        assert_eq!(filter.categories, vec![PlaceCategory::Cafe, PlaceCategory::Park]);
        assert!(filter_args(&["--category", "bar"]).into_filter().is_err());
    }
}
