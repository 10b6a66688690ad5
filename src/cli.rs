use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use std::io::{self, Read};

use tagscope::algo::analyze::TagCorpusAnalyzer;
use tagscope::ops::{self, ItemFields};
use tagscope::report;

#[derive(Parser)]
#[command(
    name = "tagscope",
    version,
    about = "Tag corpus quality, distribution, and relationship analysis"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full analysis over JSON records from stdin
    Analyze {
        /// Output format: summary, detailed, json
        #[arg(short = 'F', long, default_value = "summary")]
        format: String,
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Basic and distribution statistics only
    Stats {
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Show evidence snippets for one tag
    Contexts {
        /// Tag to look up (exact, case-sensitive)
        tag: String,
        /// Maximum snippets to show
        #[arg(short = 'n', long, default_value_t = 10)]
        limit: usize,
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Score two tags with the duplicate-detection measure
    Similarity {
        /// First tag
        a: String,
        /// Second tag
        b: String,
        /// Also compute reference string metrics
        #[arg(short, long)]
        all: bool,
    },
}

#[derive(Args)]
struct FieldArgs {
    /// JSON field holding the tag list
    #[arg(long, default_value = "tags")]
    tags_field: String,
    /// JSON field holding the item title
    #[arg(long, default_value = "title")]
    title_field: String,
    /// JSON field holding the item description
    #[arg(long, default_value = "safe_description")]
    description_field: String,
}

impl FieldArgs {
    fn into_fields(self) -> ItemFields {
        ItemFields {
            title: self.title_field,
            description: self.description_field,
            tags: self.tags_field,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { format, fields } => cmd_analyze(&format, &fields.into_fields()),
        Commands::Stats { fields } => cmd_stats(&fields.into_fields()),
        Commands::Contexts { tag, limit, fields } => {
            cmd_contexts(&tag, limit, &fields.into_fields())
        }
        Commands::Similarity { a, b, all } => cmd_similarity(&a, &b, all),
    }
}

fn read_stdin_json() -> Vec<Value> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .expect("failed to read stdin");
    let parsed: Value = serde_json::from_str(&buf).expect("invalid JSON on stdin");
    match parsed {
        Value::Array(arr) => arr,
        single => vec![single],
    }
}

fn cmd_analyze(format: &str, fields: &ItemFields) {
    let fmt = report::Format::from_str(format).unwrap_or_else(|| {
        eprintln!(
            "Unknown format '{format}'. Use: {}",
            report::Format::all_names().join(", ")
        );
        std::process::exit(1);
    });

    let rows = read_stdin_json();
    match fmt {
        report::Format::Json => {
            let value = ops::op_analyze(&rows, fields);
            println!("{}", serde_json::to_string_pretty(&value).unwrap());
        }
        report::Format::Summary => {
            let items = ops::parse_items(&rows, fields);
            let analysis = TagCorpusAnalyzer::new(items).analyze();
            print!("{}", report::summary(&analysis));
        }
        report::Format::Detailed => {
            let items = ops::parse_items(&rows, fields);
            let analysis = TagCorpusAnalyzer::new(items).analyze();
            print!("{}", report::detailed(&analysis));
        }
    }
}

fn cmd_stats(fields: &ItemFields) {
    let rows = read_stdin_json();
    let value = ops::op_stats(&rows, fields);
    println!("{}", serde_json::to_string_pretty(&value).unwrap());
}

fn cmd_contexts(tag: &str, limit: usize, fields: &ItemFields) {
    let rows = read_stdin_json();
    match ops::op_contexts(&rows, fields, tag, limit) {
        Ok(value) => println!("{}", serde_json::to_string_pretty(&value).unwrap()),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn cmd_similarity(a: &str, b: &str, all: bool) {
    let value = ops::op_similarity(a, b, all);
    println!("{}", serde_json::to_string_pretty(&value).unwrap());
}
