//! Command definitions and execution for the `arbor` binary.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use arbor_core::{ForestError, Graph, Objective, SpanningForest, SpanningForestBuilder};
use arbor_providers_json::{JsonGraphError, JsonGraphProvider, NodeId};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use thiserror::Error;
use tracing::{field, info, instrument};

use super::narration::Narrator;

const DEMO_GRAPH_NAME: &str = "example_graph";
const DEMO_GRAPH: &str = include_str!("../../graphs/example_graph.json");

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "arbor",
    about = "Build and narrate minimum or maximum spanning forests with Kruskal's algorithm."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Build the spanning forest of a JSON graph file.
    Run(RunCommand),
    /// Build the spanning forest of the bundled example graph.
    Demo(RunOptions),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Path to a JSON graph document.
    pub path: PathBuf,

    /// Override name for the graph (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,

    /// Options shared with `demo`.
    #[command(flatten)]
    pub options: RunOptions,
}

/// Options shared by every command.
#[derive(Debug, Args, Clone, Default)]
pub struct RunOptions {
    /// Build a maximum spanning forest instead of a minimum one.
    #[arg(long)]
    pub maximize: bool,

    /// Skip the step-by-step narration.
    #[arg(long, conflicts_with = "pause")]
    pub quiet: bool,

    /// Wait for Enter after each step; entering `q` stops the run.
    #[arg(long)]
    pub pause: bool,

    /// Format of the final summary.
    #[arg(long, value_enum, default_value_t = SummaryFormat::Human)]
    pub format: SummaryFormat,
}

/// Formats available for the final summary.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, ValueEnum)]
pub enum SummaryFormat {
    /// Plain text listing of the accepted edges.
    #[default]
    Human,
    /// A single JSON document.
    Json,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while opening the graph document.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The graph document could not be loaded.
    #[error(transparent)]
    Graph(#[from] JsonGraphError),
    /// The spanning forest could not be built.
    #[error(transparent)]
    Forest(#[from] ForestError),
    /// Writing the narration or reading the pause input failed.
    #[error("narration failed: {source}")]
    Narration {
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl CliError {
    /// Returns the stable code of the underlying library error, if any.
    #[must_use]
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::Graph(err) => Some(err.code().as_str()),
            Self::Forest(err) => Some(err.code().as_str()),
            Self::Io { .. } | Self::Narration { .. } => None,
        }
    }
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name of the graph the forest was built from.
    pub graph: String,
    /// The resulting spanning forest.
    pub forest: SpanningForest<NodeId>,
    /// Requested summary format.
    pub format: SummaryFormat,
}

/// Executes `cli`, narrating to standard output and pausing on standard
/// input.
///
/// # Errors
/// Returns [`CliError`] when loading, building, or narrating fails.
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let stdout = io::stdout();
    let stdin = io::stdin();
    run_cli_with(cli, stdout.lock(), stdin.lock())
}

/// Executes `cli`, narrating to `writer` and reading pause responses from
/// `input`.
///
/// # Errors
/// Returns [`CliError`] when loading, building, or narrating fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use arbor_cli::cli::{Cli, Command, RunOptions, run_cli_with};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let cli = Cli {
///     command: Command::Demo(RunOptions {
///         quiet: true,
///         ..RunOptions::default()
///     }),
/// };
/// let summary = run_cli_with(cli, Vec::new(), std::io::empty())?;
/// assert_eq!(summary.forest.total_weight(), 39.0);
/// # Ok(())
/// # }
/// ```
pub fn run_cli_with<W: Write, R: BufRead>(
    cli: Cli,
    writer: W,
    input: R,
) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(command) => {
            let name = derive_graph_name(&command.path, command.name.as_deref());
            let reader = open_graph_reader(&command.path)?;
            let provider = JsonGraphProvider::try_from_reader(name, reader)?;
            execute(&provider, &command.options, writer, input)
        }
        Command::Demo(options) => {
            let provider = JsonGraphProvider::try_from_str(DEMO_GRAPH_NAME, DEMO_GRAPH)?;
            execute(&provider, &options, writer, input)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip_all,
    fields(
        graph = provider.name(),
        maximize = options.maximize,
        narrated = !options.quiet,
        completed = field::Empty,
    ),
)]
fn execute<W: Write, R: BufRead>(
    provider: &JsonGraphProvider,
    options: &RunOptions,
    writer: W,
    input: R,
) -> Result<ExecutionSummary, CliError> {
    let builder =
        SpanningForestBuilder::new().with_objective(Objective::from_maximize(options.maximize));
    info!(
        nodes = provider.graph().node_count(),
        edges = provider.graph().edge_count(),
        "graph loaded"
    );

    let forest = if options.quiet {
        builder.build(provider.graph())?
    } else if options.pause {
        narrate(&builder, provider.graph(), Narrator::pausing(writer, input))?
    } else {
        narrate(&builder, provider.graph(), Narrator::new(writer))?
    };
    tracing::Span::current().record("completed", forest.is_complete());

    let graph = provider.name().to_owned();
    Ok(ExecutionSummary {
        graph,
        forest,
        format: options.format,
    })
}

fn narrate<W: Write, R: BufRead>(
    builder: &SpanningForestBuilder,
    graph: &Graph<NodeId>,
    mut narrator: Narrator<W, R, NodeId>,
) -> Result<SpanningForest<NodeId>, CliError> {
    let order = builder.processing_order(graph)?;
    narrator
        .introduce(graph, builder.objective(), &order)
        .map_err(|source| CliError::Narration { source })?;
    let forest = builder.build_observed(graph, &mut narrator)?;
    narrator
        .conclude(&forest)
        .map_err(|source| CliError::Narration { source })?;
    Ok(forest)
}

fn open_graph_reader(path: &Path) -> Result<BufReader<File>, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

pub(super) fn derive_graph_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map_or_else(|| "graph".to_owned(), ToOwned::to_owned)
}

#[derive(Serialize)]
struct SummaryDocument<'a> {
    graph: &'a str,
    objective: &'static str,
    edges: Vec<SummaryEdge<'a>>,
    total_weight: f64,
    components: usize,
    tree: bool,
    completed: bool,
}

#[derive(Serialize)]
struct SummaryEdge<'a> {
    u: &'a NodeId,
    v: &'a NodeId,
    w: f64,
}

/// Renders `summary` to `writer` in the format it requests.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use arbor_cli::cli::{ExecutionSummary, SummaryFormat, render_summary};
/// # use arbor_core::{Edge, Graph, SpanningForestBuilder};
/// # use arbor_providers_json::NodeId;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let graph = Graph::from_edges(vec![Edge::new(NodeId::from(1), NodeId::from(2), 2.5)]);
/// let summary = ExecutionSummary {
///     graph: "demo".into(),
///     forest: SpanningForestBuilder::new().build(&graph)?,
///     format: SummaryFormat::Human,
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert!(String::from_utf8(buffer)?.ends_with("Total weight: 2.5\n"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary.format {
        SummaryFormat::Human => render_human(summary, &mut writer),
        SummaryFormat::Json => render_json(summary, &mut writer),
    }
}

fn render_human(summary: &ExecutionSummary, writer: &mut impl Write) -> io::Result<()> {
    let forest = &summary.forest;
    writeln!(writer, "graph: {}", summary.graph)?;
    writeln!(writer, "objective: {}", forest.objective())?;
    writeln!(writer, "components: {}", forest.component_count())?;
    if forest.edges().is_empty() {
        writeln!(writer, "No edges selected.")?;
        return Ok(());
    }
    writeln!(writer, "Final result:")?;
    for edge in forest.edges() {
        writeln!(
            writer,
            "  - ({}, {}) weight {}",
            edge.source(),
            edge.target(),
            edge.weight()
        )?;
    }
    writeln!(writer, "Total weight: {}", forest.total_weight())
}

fn render_json(summary: &ExecutionSummary, writer: &mut impl Write) -> io::Result<()> {
    let forest = &summary.forest;
    let document = SummaryDocument {
        graph: &summary.graph,
        objective: forest.objective().as_str(),
        edges: forest
            .edges()
            .iter()
            .map(|edge| SummaryEdge {
                u: edge.source(),
                v: edge.target(),
                w: edge.weight(),
            })
            .collect(),
        total_weight: forest.total_weight(),
        components: forest.component_count(),
        tree: forest.is_tree(),
        completed: forest.is_complete(),
    };
    serde_json::to_writer(&mut *writer, &document)?;
    writeln!(writer)
}
