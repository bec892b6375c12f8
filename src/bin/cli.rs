use clap::{Parser, Subcommand};
use related_games_engine::{EngineOptions, JsonFileSource, RelatedGamesEngine, RelatedResponse};

#[derive(Parser)]
#[command(name = "related-games-cli")]
#[command(about = "Related Games Engine CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Catalog JSON path
    #[arg(short, long, default_value = "catalog.json")]
    catalog: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Related games panel (developer first, up to 6)
    Related {
        /// Game id or title
        game: String,
    },

    /// Full "more like this" listing
    MoreLikeThis {
        /// Game id or title
        game: String,

        /// Maximum results
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Fuzzy search by title
    Search {
        query: String,

        #[arg(short, long, default_value = "5")]
        max_results: usize,
    },

    /// Games by developer slug
    Developer { slug: String },

    /// Games by genre slug
    Genre {
        slug: String,

        #[arg(short, long, default_value = "1")]
        page: usize,
    },

    /// Games by platform slug
    Platform {
        slug: String,

        #[arg(short, long, default_value = "1")]
        page: usize,
    },
}

fn print_related(response: &RelatedResponse) {
    println!("\n✅ {}", response.summary());
    for (i, entry) in response.games.iter().enumerate() {
        println!(
            "   {}. {} [{}] score={} genres={} {:?}",
            i + 1,
            entry.game.display_name(),
            entry.game.id,
            entry.score,
            entry.matching_genres,
            entry.reason
        );
    }
    println!("   Latency: {:.3}ms", response.latency_ms);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let mut options = EngineOptions::default();
    if let Commands::MoreLikeThis { limit, .. } = &cli.command {
        options.more_like_this_limit = *limit;
    }

    let source = JsonFileSource::new(&cli.catalog);
    let engine = RelatedGamesEngine::from_source(&source, options).await?;

    match cli.command {
        Commands::Related { game } => {
            let target = engine.resolve(&game)?;
            println!("🎮 Related to: {}", target.display_name());
            print_related(&engine.related(&target.id)?);
        }

        Commands::MoreLikeThis { game, .. } => {
            let target = engine.resolve(&game)?;
            println!("🎮 More like: {}", target.display_name());
            print_related(&engine.more_like_this(&target.id)?);
        }

        Commands::Search { query, max_results } => {
            println!("🔍 Searching for: {}", query);

            let matches = engine.search(&query, max_results);
            if matches.is_empty() {
                println!("\n❌ No matches");
            }
            for (i, m) in matches.iter().enumerate() {
                println!("   {}. {} [{}] {:.1}%", i + 1, m.game.display_name(), m.game.id, m.score);
            }
        }

        Commands::Developer { slug } => {
            let (summary, games) = engine.developer(&slug);

            println!("🏢 {}", summary.name);
            println!(
                "   {} {}, avg rating {}",
                summary.game_count,
                if summary.game_count == 1 { "game" } else { "games" },
                summary.formatted_average_rating()
            );
            for game in &games {
                println!("   - {}", game.display_name());
            }
        }

        Commands::Genre { slug, page } => {
            let listing = engine.genre(&slug, page);
            println!(
                "📚 {} games: {} found (page {}/{})",
                related_games_engine::catalog::unslug(&slug),
                listing.total_items,
                listing.page,
                listing.total_pages
            );
            for game in &listing.items {
                println!("   - {}", game.display_name());
            }
        }

        Commands::Platform { slug, page } => {
            let listing = engine.platform(&slug, page);
            println!(
                "🕹️ {}: {} games (page {}/{})",
                slug, listing.total_items, listing.page, listing.total_pages
            );
            for game in &listing.items {
                println!("   - {}", game.display_name());
            }
        }
    }

    Ok(())
}
