// Command-line interface for mdpreview
//
// Converts a Markdown file to HTML with the mdpreview-filters pipeline, writes it to a sibling
// `html/` directory and opens the result in a browser.
//
// Usage:
//  mdpreview --file <input.md>              - Convert, write html/<input>.html and open it
//  mdpreview --file <input.md> --no-open    - Convert and write only
//  mdpreview --file <input.md> --stdout     - Print the HTML instead of writing it
//  mdpreview --list-filters                 - Show the filter pipeline in order
//  mdpreview print-config                   - Print the default configuration
//
// Extra Parameters:
//
// Configuration keys can be overridden with --extra-<name> <value>:
//  --extra-open false          Do not open the browser
//  --extra-browser firefox     Browser command used for the preview
//  --extra-output-dir site     Directory created next to the input
//  --extra-extension htm       Extension of the written file

use clap::{Arg, ArgAction, Command, ValueHint};
use mdpreview_config::{default_toml, Loader, MdPreviewConfig};
use mdpreview_filters::preview::open_in_browser;
use mdpreview_filters::publish::render;
use mdpreview_filters::{publish, FilterKind, PublishSpec, PIPELINE_ORDER};
use std::collections::HashMap;
use tracing_subscriber::EnvFilter;

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        if let Some(key) = arg.strip_prefix("--extra-") {
            let has_value = args
                .get(i + 1)
                .is_some_and(|next| !next.starts_with('-'));

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn filter_names() -> Vec<&'static str> {
    PIPELINE_ORDER.iter().map(|kind| kind.name()).collect()
}

fn build_cli() -> Command {
    Command::new("mdpreview")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert a Markdown file to HTML and preview it in a browser")
        .long_about(
            "mdpreview converts a Markdown file to HTML by running its lines through a fixed\n\
            pipeline of filters (paragraph, code-fence, inline-code, list, header, bold,\n\
            emphasis), writes the result to a sibling html/ directory and opens it.\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to override configuration keys\n  \
            (open, browser, output-dir, extension).\n\n\
            Examples:\n  \
            mdpreview --file README.md                 # Writes html/README.html and opens it\n  \
            mdpreview --file README.md --no-open       # Only writes the file\n  \
            mdpreview --file README.md --stdout        # Prints the HTML\n  \
            mdpreview --file notes.md --skip paragraph # Leaves blank lines alone",
        )
        .arg_required_else_help(true)
        .subcommand_negates_reqs(true)
        .arg(
            Arg::new("file")
                .long("file")
                .short('f')
                .value_name("PATH")
                .help("Markdown file to convert")
                .required_unless_present("list-filters")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("no-open")
                .long("no-open")
                .help("Write the HTML file without opening a browser")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("stdout")
                .long("stdout")
                .help("Print the HTML to stdout instead of writing a file")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("skip")
                .long("skip")
                .value_name("FILTER")
                .help("Leave a filter out of the pipeline (repeatable)")
                .action(ArgAction::Append)
                .value_parser(clap::builder::PossibleValuesParser::new(filter_names())),
        )
        .arg(
            Arg::new("list-filters")
                .long("list-filters")
                .help("List the filters in pipeline order")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a mdpreview.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log conversion steps to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("print-config")
                .about("Output the default configuration")
                .long_about(
                    "Outputs the built-in configuration, including the default HTML header\n\
                    and footer. Save it as mdpreview.toml and edit it to customize the output.\n\n\
                    Examples:\n  \
                    mdpreview print-config > mdpreview.toml",
                ),
        )
}

fn init_tracing(verbose: bool) {
    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);
    let matches = build_cli().get_matches_from(&cleaned_args);

    init_tracing(matches.get_flag("verbose"));

    if matches.get_flag("list-filters") {
        handle_list_filters_command();
        return;
    }

    if let Some(("print-config", _)) = matches.subcommand() {
        print!("{}", default_toml());
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);
    if !extra_params.is_empty() {
        let mut unknown: Vec<_> = extra_params.keys().cloned().collect();
        unknown.sort();
        eprintln!("Unknown extra parameters: {}", unknown.join(", "));
        std::process::exit(1);
    }

    let input = matches
        .get_one::<String>("file")
        .expect("file is required");
    let skip: Vec<FilterKind> = matches
        .get_many::<String>("skip")
        .unwrap_or_default()
        .filter_map(|name| FilterKind::from_name(name))
        .collect();

    if matches.get_flag("stdout") {
        handle_stdout_command(input, &skip, &config);
        return;
    }

    let open = config.preview.open && !matches.get_flag("no-open");
    handle_convert_command(input, &skip, open, &config);
}

fn build_spec(input: &str, skip: &[FilterKind], config: &MdPreviewConfig) -> PublishSpec {
    let template = config.template.resolve().unwrap_or_else(|err| {
        eprintln!("Failed to load template: {err}");
        std::process::exit(1);
    });

    skip.iter().fold(
        PublishSpec::new(input)
            .with_template(template)
            .with_output_dir(config.output.directory.clone())
            .with_extension(config.output.extension.clone()),
        |spec, kind| spec.skipping(*kind),
    )
}

/// Handle conversion to a file, then the optional preview
fn handle_convert_command(input: &str, skip: &[FilterKind], open: bool, config: &MdPreviewConfig) {
    let spec = build_spec(input, skip, config);

    let result = publish(spec).unwrap_or_else(|err| {
        eprintln!("{err}");
        std::process::exit(1);
    });
    println!("{}", result.path.display());

    if open {
        // The file is already written; a missing browser does not fail the run.
        if let Err(err) = open_in_browser(&result.path, config.preview.browser()) {
            tracing::warn!(error = %err, "preview not opened");
            eprintln!("Could not open preview: {err}");
        }
    }
}

/// Handle --stdout: convert and print, nothing written
fn handle_stdout_command(input: &str, skip: &[FilterKind], config: &MdPreviewConfig) {
    let spec = build_spec(input, skip, config);
    let html = render(&spec).unwrap_or_else(|err| {
        eprintln!("{err}");
        std::process::exit(1);
    });
    print!("{html}");
}

/// Handle the list-filters command
fn handle_list_filters_command() {
    println!("Filters, in pipeline order:\n");
    for (position, kind) in PIPELINE_ORDER.iter().enumerate() {
        println!("  {}. {:<12} {}", position + 1, kind.name(), kind.description());
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> MdPreviewConfig {
    let loader = Loader::new().with_optional_file("mdpreview.toml");
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

fn apply_config_overrides(
    config: &mut MdPreviewConfig,
    extra_params: &mut HashMap<String, String>,
) {
    if let Some(raw) = extra_params.remove("open") {
        config.preview.open = parse_bool_arg("open", &raw);
    }
    if let Some(raw) = extra_params.remove("browser") {
        config.preview.browser = raw;
    }
    if let Some(raw) = take_override(extra_params, &["output-dir", "output-directory"]) {
        config.output.directory = raw;
    }
    if let Some(raw) = extra_params.remove("extension") {
        config.output.extension = raw.trim_start_matches('.').to_string();
    }
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_extra_args_empty() {
        let input = args(&["mdpreview", "--file", "doc.md"]);
        let (cleaned, extra) = parse_extra_args(&input);

        assert_eq!(cleaned, input);
        assert!(extra.is_empty());
    }

    #[test]
    fn test_parse_extra_args_with_value() {
        let (cleaned, extra) =
            parse_extra_args(&args(&["mdpreview", "--extra-browser", "firefox", "--file", "a.md"]));

        assert_eq!(cleaned, args(&["mdpreview", "--file", "a.md"]));
        assert_eq!(extra.get("browser"), Some(&"firefox".to_string()));
    }

    #[test]
    fn test_parse_extra_args_boolean_flag_at_end() {
        let (cleaned, extra) = parse_extra_args(&args(&["mdpreview", "--file", "a.md", "--extra-open"]));

        assert_eq!(cleaned, args(&["mdpreview", "--file", "a.md"]));
        assert_eq!(extra.get("open"), Some(&"true".to_string()));
    }

    #[test]
    fn test_parse_extra_args_boolean_before_flag() {
        let (cleaned, extra) =
            parse_extra_args(&args(&["mdpreview", "--extra-open", "--no-open", "--file", "a.md"]));

        assert_eq!(cleaned, args(&["mdpreview", "--no-open", "--file", "a.md"]));
        assert_eq!(extra.get("open"), Some(&"true".to_string()));
    }

    #[test]
    fn apply_config_overrides_updates_known_keys() {
        let mut config = load_cli_config(None);
        let mut extras = HashMap::new();
        extras.insert("open".to_string(), "no".to_string());
        extras.insert("browser".to_string(), "firefox".to_string());
        extras.insert("output-dir".to_string(), "site".to_string());
        extras.insert("extension".to_string(), ".htm".to_string());

        apply_config_overrides(&mut config, &mut extras);

        assert!(!config.preview.open);
        assert_eq!(config.preview.browser(), Some("firefox"));
        assert_eq!(config.output.directory, "site");
        assert_eq!(config.output.extension, "htm");
        assert!(extras.is_empty());
    }

    #[test]
    fn apply_config_overrides_leaves_unknown_keys() {
        let mut config = load_cli_config(None);
        let mut extras = HashMap::new();
        extras.insert("theme".to_string(), "dark".to_string());

        apply_config_overrides(&mut config, &mut extras);

        assert_eq!(extras.len(), 1);
    }

    #[test]
    fn build_spec_follows_config_and_skips() {
        let mut config = load_cli_config(None);
        config.output.directory = "out".to_string();
        let spec = build_spec("docs/a.md", &[FilterKind::Bold, FilterKind::Bold], &config);

        assert_eq!(spec.skip, vec![FilterKind::Bold]);
        assert_eq!(
            spec.output_path().unwrap(),
            std::path::PathBuf::from("docs/out/a.html")
        );
    }

    #[test]
    fn cli_definition_is_valid() {
        build_cli().debug_assert();
    }

    #[test]
    fn skip_accepts_only_known_filters() {
        let ok = build_cli().try_get_matches_from(["mdpreview", "--file", "a.md", "--skip", "bold"]);
        assert!(ok.is_ok());
        let err = build_cli().try_get_matches_from(["mdpreview", "--file", "a.md", "--skip", "tables"]);
        assert!(err.is_err());
    }
}
