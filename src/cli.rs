use crate::{
    parse_delay, validate_config, Classifier, Config, Dispatcher, FilterSpec, HttpProber, InputSource,
    InspectorError, JsonStyle, OutputFormat, OutputSink, OutputTarget, RunSummary,
};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::fs;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "link-inspector")]
#[command(about = "Analyze URLs to retrieve HTTP status codes, content lengths, and content types")]
#[command(version)]
pub struct Cli {
    #[arg(short = 'u', long, help = "Single URL to check")]
    pub target: Option<String>,

    #[arg(short = 'l', long, conflicts_with = "target", help = "File containing list of URLs to check")]
    pub list: Option<PathBuf>,

    #[arg(long, help = "Skip requests for URLs with a known extension")]
    pub passive: bool,

    #[arg(long = "match-code", visible_alias = "mc", value_name = "CODES", help = "Match response with specified status code (e.g. 200,302)")]
    pub match_code: Option<String>,

    #[arg(long = "match-length", visible_alias = "ml", value_name = "LENGTHS", help = "Match response with specified content length (e.g. 100,102)")]
    pub match_length: Option<String>,

    #[arg(long = "match-type", visible_alias = "mt", value_name = "TYPES", help = "Match response with specified content type (e.g. \"application/octet-stream,text/html\")")]
    pub match_type: Option<String>,

    #[arg(long = "match-suffix", visible_alias = "ms", value_name = "LABELS", help = "Match response with specified suffix name (e.g. \"zip,php,7z\")")]
    pub match_suffix: Option<String>,

    #[arg(short, long, help = "File to write output results")]
    pub output: Option<PathBuf>,

    #[arg(long, conflicts_with = "output", help = "File to append output results instead of overwriting")]
    pub append_output: Option<PathBuf>,

    #[arg(long, help = "Output in JSON format")]
    pub json: bool,

    #[arg(long, value_name = "TYPE", help = "JSON layout: pretty (MarshalIndent) or compact (Marshal)")]
    pub json_type: Option<JsonStyle>,

    #[arg(short, long, visible_alias = "concurrency", help = "Number of concurrent probes")]
    pub threads: Option<usize>,

    #[arg(short = 'H', long = "user-agent", help = "Custom User-Agent header for HTTP requests")]
    pub user_agent: Option<String>,

    #[arg(long, help = "Prefix each line with how it was classified")]
    pub verbose: bool,

    #[arg(long = "no-color", visible_alias = "nc", help = "Disable colors in output")]
    pub no_color: bool,

    #[arg(long, value_name = "SECS", help = "HTTP request timeout in seconds")]
    pub timeout: Option<u64>,

    #[arg(long, help = "Disable TLS certificate verification")]
    pub insecure: bool,

    #[arg(long, allow_hyphen_values = true, value_name = "DURATION", help = "Delay after each probe (e.g. 200ms, 1s)")]
    pub delay: Option<String>,

    #[arg(long, help = "Configuration file path (JSON)")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable debug logging")]
    pub debug: bool,

    #[arg(long, conflicts_with = "debug", help = "Only log warnings and errors")]
    pub silent: bool,
}

impl Cli {
    pub fn input_source(&self) -> InputSource {
        if let Some(target) = &self.target {
            InputSource::Target(target.clone())
        } else if let Some(list) = &self.list {
            InputSource::File(list.clone())
        } else {
            InputSource::Stdin
        }
    }
}

/// Load the optional config file and apply command-line overrides.
pub async fn load_config(args: &Cli) -> Result<Config, InspectorError> {
    let mut config = if let Some(config_path) = &args.config {
        let config_content = fs::read_to_string(config_path)
            .await
            .map_err(|e| InspectorError::Configuration(format!("{}: {e}", config_path.display())))?;
        serde_json::from_str(&config_content)?
    } else {
        Config::default()
    };

    apply_overrides(&mut config, args)?;
    validate_config(&config)?;

    info!("Configuration loaded successfully");
    info!("Concurrency: {}", config.concurrency);
    info!("Timeout: {:?}", config.timeout);
    info!("Passive mode: {}", config.passive);

    Ok(config)
}

pub fn apply_overrides(config: &mut Config, args: &Cli) -> Result<(), InspectorError> {
    if let Some(threads) = args.threads {
        config.concurrency = threads;
    }
    if let Some(timeout) = args.timeout {
        config.timeout = Duration::from_secs(timeout);
    }
    if let Some(user_agent) = &args.user_agent {
        config.user_agent = user_agent.clone();
    }
    if let Some(delay) = &args.delay {
        config.delay = parse_delay(delay)?;
    }
    config.insecure |= args.insecure;
    config.passive |= args.passive;

    let filters = &mut config.filters;
    let parsed = FilterSpec::parse(
        args.match_code.as_deref().unwrap_or_default(),
        args.match_length.as_deref().unwrap_or_default(),
        args.match_type.as_deref().unwrap_or_default(),
        args.match_suffix.as_deref().unwrap_or_default(),
    );
    if args.match_code.is_some() {
        filters.status_codes = parsed.status_codes;
    }
    if args.match_length.is_some() {
        filters.content_lengths = parsed.content_lengths;
    }
    if args.match_type.is_some() {
        filters.content_types = parsed.content_types;
    }
    if args.match_suffix.is_some() {
        filters.suffixes = parsed.suffixes;
    }

    let output = &mut config.output;
    if args.json {
        output.format = OutputFormat::Json;
    } else if args.no_color {
        output.format = OutputFormat::Plain;
    }
    if let Some(style) = args.json_type {
        output.json_style = style;
    }
    output.verbose |= args.verbose;
    if let Some(path) = &args.append_output {
        output.target = Some(OutputTarget::Append(path.clone()));
    } else if let Some(path) = &args.output {
        output.target = Some(OutputTarget::Overwrite(path.clone()));
    }

    Ok(())
}

pub struct CliRunner {
    pub sink: Arc<OutputSink>,
    pub dispatcher: Dispatcher,
}

impl CliRunner {
    /// Build the shared pieces of a run. Opening the output file happens here,
    /// so a bad path aborts before any URL is read.
    pub async fn new(config: Config) -> Result<Self, InspectorError> {
        let prober = Arc::new(HttpProber::new(&config)?);
        let sink = Arc::new(OutputSink::open(config.output.clone()).await?);
        let dispatcher = Dispatcher::new(config, Classifier::default(), prober, sink.clone());

        Ok(Self {
            sink,
            dispatcher,
        })
    }

    pub async fn run(&self, input: InputSource) -> Result<RunSummary, InspectorError> {
        info!("Reading URLs from {:?}", input);
        let urls = input.open().await?;

        let summary = self.dispatcher.run(urls).await;
        self.sink.finish().await?;

        Ok(summary)
    }
}

pub fn setup_logging(debug: bool, silent: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let level = if debug {
        tracing::Level::DEBUG
    } else if silent {
        tracing::Level::WARN
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
}
