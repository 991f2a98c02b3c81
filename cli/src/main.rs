//! Demonstration binary for the argmatch option parser.
//!
//! Defines a small option table in code, parses the process argument vector
//! with `argmatch-core`, and prints what it found. Run with `--help` to see
//! the rendered help text.

use argmatch_core::{
    AppInfo, HelpSections, OptionParser, OptionSpec, ParseOutcome, ParserConfig, render_help,
    render_version, to_integer,
};

const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");
const PROJECT_URL: &str = "https://github.com/ex1tium/argmatch";

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(args: &[String]) -> Result<(), String> {
    let mut parser =
        OptionParser::new(demo_specs(), demo_config()).map_err(|err| err.to_string())?;
    let info = app_info();

    match parser.parse(args).map_err(|err| err.to_string())? {
        ParseOutcome::HelpRequested => {
            print!("{}", render_help(parser.specs(), parser.config(), &info));
        }
        ParseOutcome::VersionRequested => {
            print!("{}", render_version(&info, parser.config()));
        }
        ParseOutcome::Parsed => report(&parser),
    }

    Ok(())
}

fn demo_specs() -> Vec<OptionSpec> {
    vec![
        OptionSpec::help(None, Some("help")).with_description("Display help information"),
        OptionSpec::version(Some("v"), None).with_description("Display version information"),
        OptionSpec::with_value(Some("o"), Some("output"))
            .with_default("output.txt")
            .with_description("Specify output file"),
        OptionSpec::with_list(Some("l"), Some("list"))
            .with_default("a,b")
            .with_description("Specify a list of values (comma-separated)"),
        OptionSpec::flag(Some("d"), Some("debug")).with_description("Enable debug mode"),
        OptionSpec::with_value(Some("n"), Some("count"))
            .with_default("1")
            .with_description("Number of repetitions"),
    ]
}

fn demo_config() -> ParserConfig {
    // Help shows header, rows, footer, and license; the name and version
    // lines are left to the version flag.
    let sections = HelpSections {
        header: true,
        app_name: false,
        version: false,
        footer: true,
        license: true,
    };
    ParserConfig::default()
        .with_list_separator(',')
        .with_help_sections(sections)
        .with_version_footer()
}

fn app_info() -> AppInfo {
    AppInfo::new("argmatch-demo")
        .with_version(PACKAGE_VERSION)
        .with_help_header("Usage:\n  argmatch-demo [options]\n")
        .with_help_footer(&format!("\nMaintained at {PROJECT_URL}."))
        .with_version_footer(&format!("Maintained at {PROJECT_URL}."))
        .with_license("Licensed under the MIT License.")
}

fn report(parser: &OptionParser) {
    if parser.parsed_options().is_empty() {
        println!("No options recognized; defaults in effect:");
        println!("  output = {}", parser.value_of("output"));
        println!("  count = {}", parser.value_of("count"));
        return;
    }

    if parser.has_option("debug") {
        println!("Debug mode enabled.");
    }
    if parser.has_option("output") {
        println!("Output file: {}", parser.value_of("output"));
    }
    if parser.has_option("list") {
        println!("List values: {}", parser.values_of("list").join(", "));
    }
    if parser.has_option("count") {
        let count = to_integer(parser.value_of("count")).unwrap_or(0);
        println!("Count: {count}");
    }
}
