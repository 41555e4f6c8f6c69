// Command-line interface for svgx
//
// This binary extracts SVG components from JSX/TSX source files, converts
// them to standard SVG markup, and renders browser-ready preview documents.
//
// The core capabilities live in the svgx-extract crate; this crate is the
// interface layer: argument parsing, configuration layering, file IO, and
// exit codes.
//
// Usage:
//  svgx <input>                          - Render a preview document (default)
//  svgx preview <input> [-o <file>]      - Same as above (explicit)
//  svgx extract <input> [--json]         - List the extracted components
//  svgx fragment <input> [--index N]     - Print one converted SVG fragment
//  svgx generate-css                     - Print the baseline preview CSS

use clap::{Arg, ArgAction, Command, ValueHint};
use std::fs;
use std::path::Path;
use svgx_config::{Loader, SvgxConfig};
use svgx_extract::{
    extract_with_options, render_document, render_fragment, ConvertOptions, ExtractOptions,
    Extraction, PreviewOptions, Skip,
};

const SUBCOMMANDS: &[&str] = &["extract", "preview", "fragment", "generate-css", "help"];

fn build_cli() -> Command {
    Command::new("svgx")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for extracting and previewing SVG components in JSX/TSX files")
        .long_about(
            "svgx is a command-line tool for working with SVG components embedded\n\
            in JSX/TSX source files.\n\n\
            Commands:\n  \
            - extract:  List the SVG components found in a file\n  \
            - preview:  Render an HTML preview document (default)\n  \
            - fragment: Print a single component as standard SVG markup\n\n\
            Malformed components are skipped with a warning on stderr; the\n\
            remaining components are still processed.\n\n\
            Examples:\n  \
            svgx Icon.tsx                        # Preview to stdout\n  \
            svgx Icon.tsx -o preview.html        # Preview to a file\n  \
            svgx extract Icon.tsx --json         # Component records as JSON\n  \
            svgx fragment Icon.tsx --index 1     # Second component as SVG",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a svgx.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("extract")
                .about("List the SVG components found in a file")
                .long_about(
                    "Scan a source file for SVG components and list what was found.\n\n\
                    The default output is a human-readable summary. With --json the\n\
                    full component records are emitted: element kind, attributes\n\
                    (with numeric values as numbers and {expr} values as a\n\
                    placeholder), inner content, source span, and the skipped\n\
                    element diagnostics.\n\n\
                    Examples:\n  \
                    svgx extract Icon.tsx                # Summary listing\n  \
                    svgx extract Icon.tsx --json         # Full records as JSON\n  \
                    svgx extract Icon.tsx --recursive    # Include nested children",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Emit the full component records as JSON")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("recursive")
                        .long("recursive")
                        .help("Extract nested components inside each match")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("preview")
                .about("Render an HTML preview document (default command)")
                .long_about(
                    "Render all SVG components in a file into a standalone HTML\n\
                    preview document with embedded CSS.\n\n\
                    Output goes to stdout by default, or use -o to write a file.\n\n\
                    Examples:\n  \
                    svgx preview Icon.tsx                    # Preview to stdout\n  \
                    svgx preview Icon.tsx -o out.html        # Preview to a file\n  \
                    svgx preview Icon.tsx --theme dark       # Dark palette\n  \
                    svgx Icon.tsx                            # 'preview' is optional",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("theme")
                        .long("theme")
                        .value_name("NAME")
                        .help("Color theme: light or dark (overrides configuration)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("recursive")
                        .long("recursive")
                        .help("Convert nested components instead of splicing inner content verbatim")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("fragment")
                .about("Print a single component as standard SVG markup")
                .long_about(
                    "Convert one extracted component to standard SVG markup and print\n\
                    it, without any document chrome.\n\n\
                    Components are addressed by extraction order, starting at 0.\n\n\
                    Examples:\n  \
                    svgx fragment Icon.tsx               # First component\n  \
                    svgx fragment Icon.tsx --index 2     # Third component",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("index")
                        .long("index")
                        .help("Component index in extraction order (0-based)")
                        .default_value("0")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("recursive")
                        .long("recursive")
                        .help("Convert nested components instead of splicing inner content verbatim")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("generate-css")
                .about("Output the baseline CSS used in preview documents")
                .long_about(
                    "Outputs the baseline CSS embedded in every preview document.\n\n\
                    Use this as a starting point for custom styling.\n\n\
                    Examples:\n  \
                    svgx generate-css                    # Print CSS to stdout\n  \
                    svgx generate-css > custom.css       # Save to file for editing",
                ),
        )
}

fn main() {
    // Try to parse args. If the first argument looks like a file rather than
    // a subcommand, inject "preview".
    let args: Vec<String> = std::env::args().collect();

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&args) {
        Ok(m) => m,
        Err(e) => {
            if should_inject_preview(&args) {
                let mut new_args = vec![args[0].clone(), "preview".to_string()];
                new_args.extend_from_slice(&args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));

    match matches.subcommand() {
        Some(("extract", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let json = sub_matches.get_flag("json");
            let recursive = sub_matches.get_flag("recursive");
            handle_extract_command(input, json, recursive, &config);
        }
        Some(("preview", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            let theme = sub_matches.get_one::<String>("theme").map(|s| s.as_str());
            let recursive = sub_matches.get_flag("recursive");
            handle_preview_command(input, output, theme, recursive, &config);
        }
        Some(("fragment", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let index = *sub_matches
                .get_one::<usize>("index")
                .expect("index has a default");
            let recursive = sub_matches.get_flag("recursive");
            handle_fragment_command(input, index, recursive, &config);
        }
        Some(("generate-css", _)) => {
            print!("{}", svgx_extract::default_css());
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// The default-subcommand heuristic: a first argument that is neither a flag
/// nor a known subcommand is treated as an input file for `preview`.
fn should_inject_preview(args: &[String]) -> bool {
    args.len() > 1 && !args[1].starts_with('-') && !SUBCOMMANDS.contains(&args[1].as_str())
}

/// Handle the extract command
fn handle_extract_command(input: &str, json: bool, recursive: bool, config: &SvgxConfig) {
    let extraction = run_extraction(input, extract_options(config, recursive));
    warn_skipped(&extraction.skipped);

    if json {
        let payload = serde_json::json!({
            "components": extraction.records,
            "skipped": extraction.skipped,
        });
        let text = serde_json::to_string_pretty(&payload).unwrap_or_else(|e| {
            eprintln!("Error serializing records: {e}");
            std::process::exit(1);
        });
        println!("{text}");
        return;
    }

    println!(
        "{} component(s) in {input}",
        extraction.records.len()
    );
    for (index, record) in extraction.records.iter().enumerate() {
        println!(
            "[{index}] {} ({} attribute(s), bytes {}..{})",
            record.kind,
            record.attributes.len(),
            record.span.start,
            record.span.end
        );
        for (name, value) in record.attributes.iter() {
            println!("      {name} = {value}");
        }
    }
}

/// Handle the preview command
fn handle_preview_command(
    input: &str,
    output: Option<&str>,
    theme: Option<&str>,
    recursive: bool,
    config: &SvgxConfig,
) {
    let extraction = run_extraction(input, ExtractOptions::default());
    warn_skipped(&extraction.skipped);

    let options = preview_options(config, theme, recursive);
    let display_id = Path::new(input)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(input);
    let html = render_document(&extraction.records, display_id, &options);

    match output {
        Some(path) => {
            fs::write(path, html).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => print!("{html}"),
    }
}

/// Handle the fragment command
fn handle_fragment_command(input: &str, index: usize, recursive: bool, config: &SvgxConfig) {
    let extraction = run_extraction(input, ExtractOptions::default());
    warn_skipped(&extraction.skipped);

    let fragment = render_fragment(
        &extraction.records,
        index,
        &convert_options(config, recursive),
    )
    .unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
    println!("{fragment}");
}

fn run_extraction(input: &str, options: ExtractOptions) -> Extraction {
    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });
    extract_with_options(&source, &options)
}

fn warn_skipped(skipped: &[Skip]) {
    for skip in skipped {
        eprintln!(
            "Warning: skipped {} at byte {}",
            skip.reason, skip.offset
        );
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> SvgxConfig {
    let loader = Loader::new().with_optional_file("svgx.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

/// CLI flags win over the layered configuration; the --recursive flag can
/// only turn recursion on, never off.
fn extract_options(config: &SvgxConfig, recursive_flag: bool) -> ExtractOptions {
    ExtractOptions {
        recursive: recursive_flag || config.extract.recursive,
    }
}

fn convert_options(config: &SvgxConfig, recursive_flag: bool) -> ConvertOptions {
    ConvertOptions {
        recursive: recursive_flag || config.extract.recursive,
    }
}

fn preview_options(
    config: &SvgxConfig,
    theme_flag: Option<&str>,
    recursive_flag: bool,
) -> PreviewOptions {
    let mut preview = config.preview.clone();
    if let Some(name) = theme_flag {
        preview.theme = name.to_string();
    }

    preview
        .options(convert_options(config, recursive_flag))
        .unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            std::process::exit(1);
        })
}
