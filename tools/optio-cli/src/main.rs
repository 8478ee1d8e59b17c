// optio command line generator
//
// `optio generate` compiles an option schema into a Rust config module,
// optionally rendering a documentation template alongside it. `optio
// check` dry-runs a config file against a schema and prints the resolved
// record. Both commands surface library errors as fatal diagnostics with
// a nonzero exit, matching the build-step contract: no partial output.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use optio::codegen::{render_options, CompileContext, EmitConfig};
use optio::runtime::load_config;
use optio::schema::{read_schema, validate_schema};

#[derive(Parser)]
#[command(name = "optio", version, about = "Schema-driven config record and parser generator")]
struct Cli {
    /// Enable debug logging of the compile pipeline
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile a schema into a generated Rust config module
    Generate {
        /// Path to the option schema
        schema: PathBuf,

        /// Path the generated module is written to
        #[arg(short, long)]
        output: PathBuf,

        /// Name of the emitted record struct
        #[arg(long, default_value = "Config")]
        struct_name: String,

        /// Name of the emitted parse entry point
        #[arg(long, default_value = "parse_config")]
        entry_point: String,

        /// Documentation template with {opts} placeholders
        #[arg(long, requires = "doc_output")]
        doc_template: Option<PathBuf>,

        /// Path the rendered documentation is written to
        #[arg(long, requires = "doc_template")]
        doc_output: Option<PathBuf>,
    },

    /// Resolve a config file against a schema and print the record
    Check {
        /// Path to the option schema
        schema: PathBuf,

        /// Path to the config file to resolve
        config: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    match cli.command {
        Command::Generate {
            schema,
            output,
            struct_name,
            entry_point,
            doc_template,
            doc_output,
        } => generate(schema, output, struct_name, entry_point, doc_template, doc_output),
        Command::Check { schema, config } => check(schema, config),
    }
}

fn generate(
    schema_path: PathBuf,
    output: PathBuf,
    struct_name: String,
    entry_point: String,
    doc_template: Option<PathBuf>,
    doc_output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let schema_text = fs::read_to_string(&schema_path)
        .with_context(|| format!("reading schema {}", schema_path.display()))?;

    let emit = EmitConfig {
        struct_name,
        entry_point,
    };
    let module = CompileContext::new(schema_text, emit)
        .run()
        .with_context(|| format!("compiling schema {}", schema_path.display()))?;

    fs::write(&output, &module.source)
        .with_context(|| format!("writing generated module {}", output.display()))?;
    tracing::info!(path = %output.display(), "wrote generated module");

    if let (Some(template_path), Some(doc_path)) = (doc_template, doc_output) {
        let template = fs::read_to_string(&template_path)
            .with_context(|| format!("reading template {}", template_path.display()))?;
        let rendered = render_options(&template, &module.schema);
        fs::write(&doc_path, rendered)
            .with_context(|| format!("writing documentation {}", doc_path.display()))?;
        tracing::info!(path = %doc_path.display(), "wrote documentation");
    }

    Ok(())
}

fn check(schema_path: PathBuf, config_path: PathBuf) -> anyhow::Result<()> {
    let schema_text = fs::read_to_string(&schema_path)
        .with_context(|| format!("reading schema {}", schema_path.display()))?;

    let schema = read_schema(&schema_text)?;
    validate_schema(&schema)?;

    let instance = load_config(&schema, &config_path)?;
    for (name, value) in instance.iter() {
        println!("{} = {}", name, value);
    }

    Ok(())
}
