//! # Link Inspector
//!
//! Concurrent URL reconnaissance: every input URL is reported with its HTTP
//! status code, advertised content length, media type and a short
//! human-readable label such as `HTML`, `zip` or `PHP`.
//!
//! ## How a URL is classified
//!
//! | Mode | Trigger | Network | Label source |
//! |------|---------|---------|--------------|
//! | **Extension based** (passive) | `--passive` and a known path suffix | none | suffix table |
//! | **Request based** (active) | everything else | one `HEAD` request | content-type table |
//!
//! Passive mode is opportunistic: a URL whose suffix is not in the table still
//! gets a `HEAD` request. Suffix groups are tried in their declared order and
//! the first group containing a matching suffix wins, so `archive.tar.gz`
//! resolves through the `.gz` group.
//!
//! ## Filters
//!
//! Request-based results can be narrowed with comma-separated filters for
//! status code, content length, media type and label. Dimensions combine with
//! AND, values within one dimension with OR, and an empty filter matches
//! everything. Extension-based results are never filtered.
//!
//! ## Concurrency
//!
//! One task is launched per URL as the input is read; a semaphore caps how many
//! of them probe at once (50 by default). Output order follows completion, not
//! input order.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use link_inspector::{Classifier, Config, Dispatcher, HttpProber, InputSource, OutputSink};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let prober = Arc::new(HttpProber::new(&config)?);
//!     let sink = Arc::new(OutputSink::open(config.output.clone()).await?);
//!     let dispatcher = Dispatcher::new(config, Classifier::default(), prober, sink);
//!
//!     let urls = InputSource::Target("https://example.com/".to_string()).open().await?;
//!     let summary = dispatcher.run(urls).await;
//!     println!("{} results", summary.emitted);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! cat urls.txt | link-inspector --passive --mc 200,302 -o results.txt
//! link-inspector -l urls.txt --json --json-type compact --threads 20
//! ```

/// Runtime configuration and its defaults
pub mod config;

/// Error types
pub mod error;

/// Built-in content-type and suffix label data
pub mod table;

/// URL classification by suffix or by response media type
pub mod classifier;

/// Comma-separated result filters
pub mod matcher;

/// HEAD request probing
pub mod prober;

/// Plain, colored and JSON output
pub mod sink;

/// Where URLs come from
pub mod input;

/// Bounded concurrent processing of the URL stream
pub mod dispatcher;

/// Command-line interface implementation
pub mod cli;


pub use classifier::*;
pub use cli::*;
pub use config::*;
pub use dispatcher::*;
pub use error::*;
pub use input::*;
pub use matcher::*;
pub use prober::*;
pub use sink::*;
