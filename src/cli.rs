use clap::{Args, Parser, Subcommand};

use crate::types::{AnswerLevel, ContentFormat, Depth, OutputFormat, TimeRange, Topic};

/// Tavily CLI - AI-powered search from the command line.
///
/// Get your free API key at: https://app.tavily.com
#[derive(Debug, Parser)]
#[command(name = "tavily", version)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Args)]
pub struct GlobalOptions {
    /// Tavily API key (default: $TAVILY_API_KEY)
    #[arg(short = 'k', long, global = true)]
    pub api_key: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Enable debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Execute a web search query.
    ///
    /// Example: tavily search "who is Leo Messi?" -d advanced -a
    Search(SearchArgs),

    /// Extract content from one or more URLs.
    ///
    /// Example: tavily extract https://example.com https://example.org
    Extract(ExtractArgs),

    /// Crawl a website and extract content from discovered pages.
    ///
    /// Example: tavily crawl https://docs.example.com -i "Find API docs" --limit 20
    Crawl(CrawlArgs),

    /// Generate a site map (URLs only, no content extraction).
    ///
    /// Example: tavily map https://example.com --max-depth 2
    Map(MapArgs),

    /// Show API key and account usage statistics.
    Usage,
}

#[derive(Debug, Clone, Args)]
pub struct SearchArgs {
    pub query: String,

    /// Search depth (basic=1 credit, advanced=2 credits)
    #[arg(short, long, value_enum, default_value_t = Depth::Basic)]
    pub depth: Depth,

    /// Search topic
    #[arg(short, long, value_enum, default_value_t = Topic::General)]
    pub topic: Topic,

    /// Maximum results (1-20)
    #[arg(
        short = 'n',
        long,
        default_value_t = 5,
        value_parser = clap::value_parser!(u8).range(1..=20)
    )]
    pub max_results: u8,

    /// Filter by time range
    #[arg(long, value_enum)]
    pub time_range: Option<TimeRange>,

    /// Include LLM answer (basic or advanced)
    #[arg(
        short = 'a',
        long,
        value_enum,
        num_args = 0..=1,
        default_missing_value = "basic"
    )]
    pub include_answer: Option<AnswerLevel>,

    /// Include raw content (markdown or text)
    #[arg(
        short = 'r',
        long,
        value_enum,
        num_args = 0..=1,
        default_missing_value = "markdown"
    )]
    pub include_raw: Option<ContentFormat>,

    /// Include image results
    #[arg(long)]
    pub include_images: bool,

    /// Comma-separated domains to include
    #[arg(long, value_name = "DOMAINS")]
    pub include_domains: Vec<String>,

    /// Comma-separated domains to exclude
    #[arg(long, value_name = "DOMAINS")]
    pub exclude_domains: Vec<String>,

    /// Boost results from country
    #[arg(long)]
    pub country: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct ExtractArgs {
    #[arg(required = true, num_args = 1..)]
    pub urls: Vec<String>,

    /// Extraction depth
    #[arg(short, long, value_enum, default_value_t = Depth::Basic)]
    pub depth: Depth,

    /// Content format
    #[arg(long, value_enum, default_value_t = ContentFormat::Markdown)]
    pub output_format: ContentFormat,

    /// Include images
    #[arg(long)]
    pub include_images: bool,

    /// Timeout in seconds (1-60)
    #[arg(long, value_parser = extract_timeout)]
    pub timeout: Option<f64>,
}

/// Link-following limits and filters shared by `crawl` and `map`.
#[derive(Debug, Clone, Args)]
pub struct ScopeArgs {
    /// Natural language crawl instructions
    #[arg(short, long)]
    pub instructions: Option<String>,

    /// Max crawl depth (1-5)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub max_depth: u8,

    /// Links per page
    #[arg(long, default_value_t = 20)]
    pub max_breadth: u32,

    /// Total pages to process
    #[arg(short = 'n', long, default_value_t = 50)]
    pub limit: u32,

    /// Comma-separated regex patterns for paths to include
    #[arg(long, value_name = "PATTERNS")]
    pub select_paths: Vec<String>,

    /// Comma-separated regex patterns for paths to exclude
    #[arg(long, value_name = "PATTERNS")]
    pub exclude_paths: Vec<String>,

    /// Comma-separated regex patterns for domains to include
    #[arg(long, value_name = "PATTERNS")]
    pub select_domains: Vec<String>,

    /// Comma-separated regex patterns for domains to exclude
    #[arg(long, value_name = "PATTERNS")]
    pub exclude_domains: Vec<String>,

    /// Exclude external links
    #[arg(long)]
    pub no_external: bool,

    /// Timeout in seconds (10-150)
    #[arg(long, value_parser = crawl_timeout)]
    pub timeout: Option<f64>,
}

#[derive(Debug, Clone, Args)]
pub struct CrawlArgs {
    pub url: String,

    #[command(flatten)]
    pub scope: ScopeArgs,

    /// Extraction depth
    #[arg(short, long, value_enum, default_value_t = Depth::Basic)]
    pub depth: Depth,

    /// Include images
    #[arg(long)]
    pub include_images: bool,
}

#[derive(Debug, Clone, Args)]
pub struct MapArgs {
    pub url: String,

    #[command(flatten)]
    pub scope: ScopeArgs,
}

fn extract_timeout(value: &str) -> Result<f64, String> {
    seconds_between(value, 1.0, 60.0)
}

fn crawl_timeout(value: &str) -> Result<f64, String> {
    seconds_between(value, 10.0, 150.0)
}

fn seconds_between(value: &str, min: f64, max: f64) -> Result<f64, String> {
    let seconds: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("`{value}` is not a number of seconds"))?;
    if (min..=max).contains(&seconds) {
        Ok(seconds)
    } else {
        Err(format!("{seconds} is not in {min}..={max}"))
    }
}
