//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Composite text tree: parse text, evaluate embedded expressions and run analytics
#[derive(Parser, Debug)]
#[command(name = "textree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output, repeat for more (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Directory holding a local .textree.toml (default: cwd)
    #[arg(short = 'C', long, global = true, value_hint = ValueHint::DirPath)]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the parsed document, one paragraph per line
    Parse {
        /// Input file (default: settings.input_path)
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },

    /// Print the node structure as a tree
    Tree {
        /// Input file (default: settings.input_path)
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
        /// Maximum depth below the document node
        #[arg(long)]
        depth: Option<usize>,
    },

    /// Print the text after expression substitution
    Preprocess {
        /// Input file (default: settings.input_path)
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },

    /// Show postfix form and value of an infix expression
    Eval {
        /// Infix expression, e.g. "(3+4)*2"
        #[arg(allow_hyphen_values = true)]
        expression: String,
    },

    /// Paragraphs ordered by number of sentences
    SortParagraphs {
        /// Input file (default: settings.input_path)
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },

    /// Words of each sentence ordered by length, signs last
    SortWords {
        /// Input file (default: settings.input_path)
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },

    /// Lexemes reverse-sorted by occurrences of a symbol
    SortLexemes {
        /// Input file (default: settings.input_path)
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
        /// Symbol to count (default: settings.order_symbol)
        #[arg(short, long)]
        symbol: Option<char>,
    },

    /// Sentences containing the longest word
    Longest {
        /// Input file (default: settings.input_path)
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },

    /// Drop sentences with too few words
    Filter {
        /// Input file (default: settings.input_path)
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
        /// Minimum number of words (default: settings.min_words)
        #[arg(short, long)]
        min_words: Option<usize>,
    },

    /// Words appearing more than once
    Duplicates {
        /// Input file (default: settings.input_path)
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },

    /// Vowel and consonant counts per sentence
    Vowels {
        /// Input file (default: settings.input_path)
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },

    /// Run every analytic in sequence
    Run {
        /// Input file (default: settings.input_path)
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Print a commented config template
    Template,

    /// Show config paths
    Path,
}
