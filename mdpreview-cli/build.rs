use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the filter names from mdpreview-filters/src/filter.rs
// We need to duplicate this here since build scripts can't access the library
const FILTER_NAMES: &[&str] = &[
    "paragraph",
    "code-fence",
    "inline-code",
    "list",
    "header",
    "bold",
    "emphasis",
];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("mdpreview")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert a Markdown file to HTML and preview it in a browser")
        .arg_required_else_help(true)
        .arg(
            Arg::new("file")
                .long("file")
                .short('f')
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
                .help("Leave a filter out of the pipeline (repeatable)")
                .action(ArgAction::Append)
                .value_parser(clap::builder::PossibleValuesParser::new(FILTER_NAMES)),
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
                .help("Path to a mdpreview.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .subcommand(Command::new("print-config").about("Output the default configuration"));

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "mdpreview", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "mdpreview", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "mdpreview", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
