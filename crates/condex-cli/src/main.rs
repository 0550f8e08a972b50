use clap::{Parser, Subcommand};
use condex_parser::ConditionParser;
use condex_registry::FunctionRegistry;
use std::path::Path;

#[derive(Parser)]
#[command(name = "condex")]
#[command(about = "condex — gateway condition script toolkit")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a condition script and print the condition as JSON
    Parse {
        /// Input script file
        path: String,
    },

    /// Check a condition script for errors without printing the result
    Check {
        /// Input script file
        path: String,
    },

    /// Generate a condition script from a JSON condition
    Generate {
        /// Input JSON file ({"function": ..., "params": [...]})
        path: String,
    },

    /// List the function signatures known to the standard registry
    Functions,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Parse { path } => cmd_parse(&path),
        Command::Check { path } => cmd_check(&path),
        Command::Generate { path } => cmd_generate(&path),
        Command::Functions => cmd_functions(),
    }
}

fn read_source(path: &str) -> String {
    let p = Path::new(path);
    if !p.exists() {
        eprintln!("Error: file not found: {path}");
        std::process::exit(1);
    }
    match std::fs::read_to_string(p) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {path}: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_parse(path: &str) {
    let source = read_source(path);
    let registry = FunctionRegistry::standard();

    let condition = match ConditionParser::parse(&source, &registry) {
        Ok(condition) => condition,
        Err(e) => {
            eprintln!("Parse error: {e}");
            std::process::exit(1);
        }
    };

    match serde_json::to_string_pretty(&condition) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error encoding condition: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_check(path: &str) {
    let source = read_source(path);
    let registry = FunctionRegistry::standard();

    if let Err(e) = ConditionParser::parse(&source, &registry) {
        eprintln!("Parse error: {e}");
        std::process::exit(1);
    }

    eprintln!("OK: {path}");
}

fn cmd_generate(path: &str) {
    let source = read_source(path);
    let registry = FunctionRegistry::standard();

    let condition = match serde_json::from_str(&source) {
        Ok(condition) => condition,
        Err(e) => {
            eprintln!("Error decoding {path}: {e}");
            std::process::exit(1);
        }
    };

    match condex_codegen::generate(&condition, &registry) {
        Ok(script) => println!("{script}"),
        Err(e) => {
            eprintln!("Generate error: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_functions() {
    let registry = FunctionRegistry::standard();
    for def in registry.functions() {
        println!("{def}");
    }
}
