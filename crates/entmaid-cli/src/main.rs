use entmaid_core::{GenerateOptions, OutputKind, SchemaGraph};
use std::io::Write;
use std::path::PathBuf;

const DEFAULT_SCHEMA_PATH: &str = "ent/schema.json";
const DEFAULT_TARGET_PATH: &str = "README.md";

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Entmaid(entmaid_core::Error),
    Config {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Entmaid(
                err @ (entmaid_core::Error::MarkerNotFound { .. } | entmaid_core::Error::Io(_)),
            ) => write!(f, "failed to insert Mermaid code into the file: {err}"),
            CliError::Entmaid(err) => write!(f, "{err}"),
            CliError::Config { path, source } => {
                write!(f, "invalid config file {}: {source}", path.display())
            }
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<entmaid_core::Error> for CliError {
    fn from(value: entmaid_core::Error) -> Self {
        Self::Entmaid(value)
    }
}

#[derive(Debug, Default)]
struct Args {
    schema: Option<PathBuf>,
    target: Option<PathBuf>,
    config: Option<PathBuf>,
    output: Option<OutputKind>,
    start_pattern: Option<String>,
    end_pattern: Option<String>,
    print: bool,
}

fn usage() -> &'static str {
    "entmaid\n\
\n\
USAGE:\n\
  entmaid [--schema <path>] [--target <path>] [--output-type markdown|plain]\n\
          [--start-pattern <text>] [--end-pattern <text>] [--config <path>] [--print]\n\
\n\
OPTIONS:\n\
  --schema <path>          JSON schema graph snapshot (default: ent/schema.json)\n\
  --target <path>          document to update in place (default: README.md)\n\
  --output-type <kind>     markdown wraps the diagram in a ```mermaid fence; anything else is plain\n\
  --start-pattern <text>   start marker (default: <!-- #start:entmaid -->)\n\
  --end-pattern <text>     end marker (default: <!-- #end:entmaid -->)\n\
  --config <path>          JSON file with output/startMarker/endMarker defaults\n\
  --print                  write the diagram to stdout instead of the target\n\
\n\
NOTES:\n\
  - Flags override values read from --config.\n\
  - Log verbosity follows RUST_LOG (default: info).\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "--print" => args.print = true,
            "--schema" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.schema = Some(PathBuf::from(path));
            }
            "--target" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.target = Some(PathBuf::from(path));
            }
            "--config" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.config = Some(PathBuf::from(path));
            }
            "--output-type" => {
                let Some(kind) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                let Ok(kind) = kind.parse::<OutputKind>();
                args.output = Some(kind);
            }
            "--start-pattern" => {
                let Some(pattern) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.start_pattern = Some(pattern.clone());
            }
            "--end-pattern" => {
                let Some(pattern) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.end_pattern = Some(pattern.clone());
            }
            _ => return Err(CliError::Usage(usage())),
        }
    }

    Ok(args)
}

fn load_options(args: &Args) -> Result<GenerateOptions, CliError> {
    let mut options = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            GenerateOptions::from_json_str(&text).map_err(|source| CliError::Config {
                path: path.clone(),
                source,
            })?
        }
        None => GenerateOptions::default(),
    };

    if let Some(output) = args.output {
        options.output = output;
    }
    if let Some(start) = &args.start_pattern {
        options.start_marker = start.clone();
    }
    if let Some(end) = &args.end_pattern {
        options.end_marker = end.clone();
    }
    Ok(options)
}

fn run(args: Args) -> Result<(), CliError> {
    let options = load_options(&args)?;
    let schema = args
        .schema
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SCHEMA_PATH));
    let graph = SchemaGraph::load(&schema)?;

    if args.print {
        let diagram = entmaid_core::render_er_diagram(&graph)?;
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", options.output.wrap(&diagram))?;
        return Ok(());
    }

    let target = args
        .target
        .unwrap_or_else(|| PathBuf::from(DEFAULT_TARGET_PATH));
    entmaid_core::generate_diagram(&graph, &target, &options)?;
    println!("Mermaid file generated successfully.");
    Ok(())
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "entmaid=info,entmaid_core=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();

    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(args) {
        tracing::debug!(error = ?err, "entmaid failed");
        eprintln!("{err}");
        std::process::exit(1);
    }
}
