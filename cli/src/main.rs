use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

use enumwire_compiler::{artifact_file_name, compile_source, render_converter, Extraction};
use enumwire_compiler::error::WireError;

#[derive(Parser)]
#[command(name = "enumwire")]
#[command(about = "Generate wire-string converters from annotated enum declarations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one converter `.rs` file per marked enum in a `.wire` file
    Gen {
        /// Input `.wire` file
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory (if omitted, prints the artifacts to stdout)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },

    /// Parse and validate a `.wire` file without generating anything
    Check {
        /// Input `.wire` file
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Print the extracted enum descriptors as JSON
    Dump {
        /// Input `.wire` file
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn compile_file(input: &PathBuf) -> Result<Extraction, WireError> {
    let text = fs::read_to_string(input).map_err(WireError::Io)?;
    compile_source(&text)
}

fn report_diagnostics(extraction: &Extraction) {
    for diagnostic in &extraction.diagnostics {
        eprintln!("error: {}", diagnostic);
    }
}

fn main() -> Result<(), WireError> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Gen { input, out_dir } => {
            let extraction = compile_file(input)?;
            report_diagnostics(&extraction);

            // Enums that extracted cleanly are generated even when others
            // in the same file failed.
            for descriptor in &extraction.descriptors {
                let code = render_converter(descriptor);
                if let Some(dir) = out_dir {
                    fs::create_dir_all(dir).map_err(WireError::Io)?;
                    let out_path = dir.join(artifact_file_name(descriptor));
                    fs::write(&out_path, &code).map_err(WireError::Io)?;
                    println!("Generated {}", out_path.display());
                } else {
                    println!("{}", code);
                }
            }

            if !extraction.is_clean() {
                return Err(WireError::ExtractionFailed(extraction.diagnostics.len()));
            }
            Ok(())
        }

        Commands::Check { input } => {
            let extraction = compile_file(input)?;
            report_diagnostics(&extraction);
            if !extraction.is_clean() {
                return Err(WireError::ExtractionFailed(extraction.diagnostics.len()));
            }
            println!(
                "{}: {} enum(s) ready for generation",
                input.display(),
                extraction.descriptors.len()
            );
            Ok(())
        }

        Commands::Dump { input } => {
            let extraction = compile_file(input)?;
            report_diagnostics(&extraction);
            let json = serde_json::to_string_pretty(&extraction.descriptors)
                .map_err(WireError::Json)?;
            println!("{}", json);
            if !extraction.is_clean() {
                return Err(WireError::ExtractionFailed(extraction.diagnostics.len()));
            }
            Ok(())
        }
    }
}
