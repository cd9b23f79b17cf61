//! Verdict CLI
//!
//! Inspect, compile, format, and evaluate expressions from the shell.

use verdict::commands::{self, CliOptions, CommandResult};
use verdict::init_tracing;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = args[1].as_str();
    let handler: fn(&CliOptions) -> CommandResult = match command {
        "lex" => commands::lex,
        "parse" => commands::parse,
        "compile" => commands::compile,
        "fmt" => commands::fmt,
        "eval" => commands::eval,
        "run" => commands::run,
        "batch" => commands::batch,
        "help" | "--help" | "-h" => {
            print_usage();
            return;
        }
        "version" | "--version" | "-v" => {
            println!("Verdict {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    let options = match commands::parse_options(&args[2..]) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!("Run 'verdict help' for usage.");
            std::process::exit(1);
        }
    };

    match handler(&options) {
        Ok(output) => print!("{output}"),
        Err(failure) => {
            tracing::debug!(command, "command failed");
            failure.exit(options.color);
        }
    }
}

fn print_usage() {
    println!("Verdict expression engine");
    println!();
    println!("Usage: verdict <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <expr>                 Tokenize and display tokens");
    println!("  parse <expr>               Parse and display the syntax tree");
    println!("  compile <expr>             Compile to wire-format JSON");
    println!("  fmt <expr>                 Print the canonical form");
    println!("  eval <expr>                Compile and evaluate");
    println!("  run <program.json>         Evaluate a wire-format program");
    println!("  batch <expr> <ctx.jsonl>   Evaluate against each context line, in parallel");
    println!("  help                       Show this help message");
    println!("  version                    Show version information");
    println!();
    println!("<expr> is inline text, or @path to read it from a file.");
    println!();
    println!("Evaluation options:");
    println!("  --context=<json|@file>     Variables as a JSON object");
    println!("  --strict                   Fail on undefined variables");
    println!("  --now=<datetime>           Clock for 'ago' / 'from now'");
    println!();
    println!("Output options:");
    println!("  --listing                  compile: one instruction per line");
    println!("  --parens=<mode>            fmt: minimal, explicit, none");
    println!("  --spacing=<mode>           fmt: normal, compact, verbose");
    println!("  --color=<mode>             Diagnostics: auto, always, never");
    println!();
    println!("Logging:");
    println!("  VERDICT_LOG=<filter>       Enable tracing (e.g. verdict_eval=trace)");
    println!("  VERDICT_LOG_TREE=1         Hierarchical trace output");
    println!();
    println!("Examples:");
    println!("  verdict eval 'score > 85' --context='{{\"score\": 90}}'");
    println!("  verdict compile '2 + 3 * 4'");
    println!("  verdict fmt 'a AND (b OR c)' --parens=explicit");
    println!("  verdict batch @rule.vd users.jsonl");
}
