use clap::{Parser, Subcommand};
use gofer::domain::model::MediaKind;
use gofer::utils::error::ErrorSeverity;
use gofer::utils::{logger, validation::Validate};
use gofer::{
    ApiConfig, Fetcher, GithubLookup, NewsLookup, Recommender, TitleLookup, TmdbSource,
    Translator, WeatherLookup,
};

#[derive(Parser)]
#[command(name = "gofer")]
#[command(about = "Fetches movie picks, titles, weather, news, GitHub profiles and translations")]
struct Cli {
    /// Path to TOML configuration file (falls back to environment variables)
    #[arg(short, long)]
    config: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Recommend top-rated movies for a genre
    Recommend {
        /// Genre label, e.g. "Comedy"
        #[arg(long)]
        genre: String,
    },
    /// Look up a movie by title
    Movie {
        #[arg(long)]
        title: String,
    },
    /// Look up a series by title
    Series {
        #[arg(long)]
        title: String,
    },
    /// Current weather for a location
    Weather {
        #[arg(long)]
        location: String,
    },
    /// Latest headlines for a search term
    News {
        #[arg(long)]
        search: String,
    },
    /// GitHub profile summary
    Github {
        #[arg(long)]
        user: String,
    },
    /// Translate text to a target language
    Translate {
        #[arg(long)]
        text: String,
        #[arg(long)]
        lang: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("🚀 Starting gofer");

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            match ApiConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("💡 {}", e.recovery_suggestion());
                    std::process::exit(1);
                }
            }
        }
        None => ApiConfig::from_env(),
    };

    // 驗證設定
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = run(&cli.command, &config).await {
        // 記錄詳細錯誤信息
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        // 輸出用戶友好的錯誤信息
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn run(command: &Command, config: &ApiConfig) -> gofer::Result<()> {
    let fetcher = Fetcher::new(&config.fetch)?;

    match command {
        Command::Recommend { genre } => {
            let source = TmdbSource::new(fetcher, &config.tmdb)?;
            let recommender = Recommender::new(source).with_top_n(config.tmdb.top_n);
            let picks = recommender.recommend(genre).await?;

            println!("🎬 {} movie recommendations:", genre);
            for (index, pick) in picks.iter().enumerate() {
                println!();
                println!(
                    "{}. {} ({:.1}/10)",
                    index + 1,
                    text_or(&pick.title, "No title available"),
                    pick.score
                );
                if pick.genres.is_empty() {
                    println!("   Genres: -");
                } else {
                    println!("   Genres: {}", pick.genres.join(", "));
                }
                println!(
                    "   Release date: {}",
                    opt_or(&pick.release_date, "No release date available")
                );
                println!("   Plot: {}", opt_or(&pick.overview, "No plot available"));
            }
        }
        Command::Movie { title } => {
            let lookup = TitleLookup::new(fetcher, &config.omdb)?;
            let info = lookup.find(title, MediaKind::Movie).await?;
            print_title_info(&info);
        }
        Command::Series { title } => {
            let lookup = TitleLookup::new(fetcher, &config.omdb)?;
            let info = lookup.find(title, MediaKind::Series).await?;
            print_title_info(&info);
        }
        Command::Weather { location } => {
            let lookup = WeatherLookup::new(fetcher, &config.weather)?;
            let report = lookup.current(location).await?;

            println!("🌤️ Weather in {}", report.location);
            println!("  Temperature: {:.1}°C", report.temperature_c);
            println!("  Feels like: {:.1}°C", report.feels_like_c);
            println!("  Conditions: {}", report.description);
            println!("  Humidity: {}%", report.humidity_percent);
            println!("  Wind speed: {} m/s", report.wind_speed_ms);
        }
        Command::News { search } => {
            let lookup = NewsLookup::new(fetcher, &config.news)?;
            let articles = lookup.top_headlines(search).await?;

            println!("📰 Headlines for \"{}\":", search);
            for article in &articles {
                println!();
                println!("  {}", article.title);
                if let Some(description) = &article.description {
                    println!("  {}", description);
                }
                if let Some(url) = &article.url {
                    println!("  {}", url);
                }
            }
        }
        Command::Github { user } => {
            let lookup = GithubLookup::new(fetcher, &config.github)?;
            let summary = lookup.profile(user).await?;

            println!("🐙 GitHub profile for {}", summary.login);
            if let Some(name) = &summary.name {
                println!("  Name: {}", name);
            }
            println!("  Member since: {}", summary.created_at.format("%Y-%m-%d"));
            println!("  Repositories: {}", summary.repo_count);
            println!("  Recent public events: {}", summary.recent_event_count);
            match &summary.last_event_at {
                Some(date) => println!("  Last activity: {}", date.format("%Y-%m-%d")),
                None => println!("  Last activity: none"),
            }
        }
        Command::Translate { text, lang } => {
            let translator = Translator::new(fetcher, &config.deepl)?;
            let translation = translator.translate(text, lang).await?;

            println!("🌐 Translated to {}:", translation.target_lang);
            println!("  Original: {}", translation.source_text);
            println!("  Translation: {}", translation.translated_text);
        }
    }

    Ok(())
}

fn print_title_info(info: &gofer::domain::model::TitleInfo) {
    println!("🎬 {}", text_or(&info.title, "No title available"));
    println!("  Plot: {}", opt_or(&info.plot, "No plot available"));
    println!(
        "  Release date: {}",
        opt_or(&info.released, "No release date available")
    );
    println!("  Rating: {}", opt_or(&info.imdb_rating, "N/A"));
    println!("  Genre: {}", opt_or(&info.genre, "No genre available"));
    println!(
        "  Director: {}",
        opt_or(&info.director, "No director available")
    );
}

fn opt_or<'a>(value: &'a Option<String>, fallback: &'a str) -> &'a str {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(fallback)
}

fn text_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}
