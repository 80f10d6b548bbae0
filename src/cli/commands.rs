//! Command dispatch: loads settings, wires services and prints results.

use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::analytics;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, local_config_path, Settings};
use crate::domain::{evaluate, layout, to_postfix, NodeRef, TextNode, TreeView};
use crate::infrastructure::di::ServiceContainer;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let Some(command) = &cli.command else {
        return Err(CliError::Usage(
            "no command given, see `textree --help`".into(),
        ));
    };

    let config_dir = config_dir(cli);
    let container = || load_container(config_dir.as_deref());

    match command {
        Commands::Completion { shell } => cmd_completion(*shell),
        Commands::Eval { expression } => cmd_eval(expression),
        Commands::Parse { file } => cmd_parse(&container()?, file.as_deref()),
        Commands::Tree { file, depth } => cmd_tree(&container()?, file.as_deref(), *depth),
        Commands::Preprocess { file } => cmd_preprocess(&container()?, file.as_deref()),
        Commands::SortParagraphs { file } => cmd_sort_paragraphs(&container()?, file.as_deref()),
        Commands::SortWords { file } => cmd_sort_words(&container()?, file.as_deref()),
        Commands::SortLexemes { file, symbol } => {
            cmd_sort_lexemes(&container()?, file.as_deref(), *symbol)
        }
        Commands::Longest { file } => cmd_longest(&container()?, file.as_deref()),
        Commands::Filter { file, min_words } => {
            cmd_filter(&container()?, file.as_deref(), *min_words)
        }
        Commands::Duplicates { file } => cmd_duplicates(&container()?, file.as_deref()),
        Commands::Vowels { file } => cmd_vowels(&container()?, file.as_deref()),
        Commands::Run { file } => cmd_run(&container()?, file.as_deref()),
        Commands::Config { command } => {
            cmd_config(&container()?, config_dir.as_deref(), command)
        }
    }
}

/// Loads layered settings and wires the services around them.
fn load_container(config_dir: Option<&Path>) -> CliResult<ServiceContainer> {
    let settings = Settings::load(config_dir)?;
    debug!("load_container: settings={settings:?}");
    Ok(ServiceContainer::new(settings))
}

fn config_dir(cli: &Cli) -> Option<PathBuf> {
    cli.config_dir
        .clone()
        .or_else(|| std::env::current_dir().ok())
}

fn input_path<'a>(container: &'a ServiceContainer, file: Option<&'a Path>) -> &'a Path {
    file.unwrap_or(container.settings.input_path.as_path())
}

/// Runs the full pipeline over the selected input.
fn load_document(container: &ServiceContainer, file: Option<&Path>) -> CliResult<TextNode> {
    let service = container.text_service()?;
    Ok(service.create(input_path(container, file))?)
}

fn print_sentences(sentences: &[NodeRef]) {
    for sentence in sentences {
        output::detail(sentence);
    }
}

fn cmd_completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}

#[instrument]
fn cmd_eval(expression: &str) -> CliResult<()> {
    let postfix = to_postfix(expression)?;
    let value = evaluate(&postfix)?;
    output::action("postfix", &postfix);
    output::action("value", &value);
    Ok(())
}

fn cmd_parse(container: &ServiceContainer, file: Option<&Path>) -> CliResult<()> {
    let document = load_document(container, file)?;
    output::info(&layout(&document));
    Ok(())
}

fn cmd_tree(container: &ServiceContainer, file: Option<&Path>, depth: Option<usize>) -> CliResult<()> {
    let document = load_document(container, file)?;
    output::info(&document.to_tree(depth));
    Ok(())
}

fn cmd_preprocess(container: &ServiceContainer, file: Option<&Path>) -> CliResult<()> {
    let service = container.text_service()?;
    let raw = service.read_all_text(input_path(container, file))?;
    output::info(&service.preprocess(&raw));
    Ok(())
}

fn cmd_sort_paragraphs(container: &ServiceContainer, file: Option<&Path>) -> CliResult<()> {
    let document = load_document(container, file)?;
    output::info(&layout(&analytics::sort_paragraphs_by_sentence_count(&document)));
    Ok(())
}

fn cmd_sort_words(container: &ServiceContainer, file: Option<&Path>) -> CliResult<()> {
    let document = load_document(container, file)?;
    output::info(&layout(&analytics::sort_words_by_length(&document)));
    Ok(())
}

fn cmd_sort_lexemes(
    container: &ServiceContainer,
    file: Option<&Path>,
    symbol: Option<char>,
) -> CliResult<()> {
    let symbol = symbol.unwrap_or(container.settings.order_symbol);
    let document = load_document(container, file)?;
    output::info(&layout(&analytics::reverse_sort_lexemes_by_symbol(
        &document, symbol,
    )));
    Ok(())
}

fn cmd_longest(container: &ServiceContainer, file: Option<&Path>) -> CliResult<()> {
    let document = load_document(container, file)?;
    let found = analytics::sentences_with_longest_word(&document);
    if found.is_empty() {
        output::warning("no words found");
    }
    print_sentences(&found);
    Ok(())
}

fn cmd_filter(
    container: &ServiceContainer,
    file: Option<&Path>,
    min_words: Option<usize>,
) -> CliResult<()> {
    let min_words = min_words.unwrap_or(container.settings.min_words);
    let document = load_document(container, file)?;
    output::info(&layout(&analytics::remove_sentences_with_fewer_words(
        &document, min_words,
    )));
    Ok(())
}

fn cmd_duplicates(container: &ServiceContainer, file: Option<&Path>) -> CliResult<()> {
    let document = load_document(container, file)?;
    print_duplicates(&document);
    Ok(())
}

fn print_duplicates(document: &TextNode) {
    let duplicates = analytics::count_duplicate_words(document);
    if duplicates.is_empty() {
        output::warning("no duplicate words");
    }
    for (word, count) in duplicates {
        output::detail(&format!("{word}: {count}"));
    }
}

fn cmd_vowels(container: &ServiceContainer, file: Option<&Path>) -> CliResult<()> {
    let document = load_document(container, file)?;
    print_vowels(container, &document);
    Ok(())
}

fn print_vowels(container: &ServiceContainer, document: &TextNode) {
    for counts in analytics::count_vowels_and_consonants(document, &container.vowel_set()) {
        output::detail(&counts.sentence);
        output::detail(&format!(
            "  vowels: {}, consonants: {}",
            counts.vowels, counts.consonants
        ));
    }
}

/// Original text followed by every analytic.
fn cmd_run(container: &ServiceContainer, file: Option<&Path>) -> CliResult<()> {
    let settings = &container.settings;
    let document = load_document(container, file)?;

    output::header("=== Original text ===");
    output::info(&layout(&document));

    output::header("=== Paragraphs sorted by number of sentences ===");
    output::info(&layout(&analytics::sort_paragraphs_by_sentence_count(&document)));

    output::header("=== Words sorted by length ===");
    output::info(&layout(&analytics::sort_words_by_length(&document)));

    output::header(&format!(
        "=== Lexemes reverse-sorted by occurrences of {:?} ===",
        settings.order_symbol
    ));
    output::info(&layout(&analytics::reverse_sort_lexemes_by_symbol(
        &document,
        settings.order_symbol,
    )));

    output::header("=== Sentences with the longest word ===");
    print_sentences(&analytics::sentences_with_longest_word(&document));

    output::header(&format!(
        "=== Sentences with at least {} words ===",
        settings.min_words
    ));
    output::info(&layout(&analytics::remove_sentences_with_fewer_words(
        &document,
        settings.min_words,
    )));

    output::header("=== Duplicate words ===");
    print_duplicates(&document);

    output::header("=== Vowels and consonants per sentence ===");
    print_vowels(container, &document);

    output::success("text processing completed");
    Ok(())
}

fn cmd_config(
    container: &ServiceContainer,
    config_dir: Option<&Path>,
    command: &ConfigCommands,
) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            output::info(&container.settings.to_toml()?);
        }
        ConfigCommands::Template => {
            output::info(&Settings::template());
        }
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => output::action("global", &path.display()),
                None => output::warning("no global config directory"),
            }
            if let Some(dir) = config_dir {
                output::action("local", &local_config_path(dir).display());
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn broken_config_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(local_config_path(dir.path()), "min_words = [").unwrap();
        dir
    }

    #[test]
    fn given_broken_local_config_when_evaluating_then_settings_not_needed() {
        // Arrange
        let dir = broken_config_dir();
        let cli = Cli::parse_from(["textree", "-C", dir.path().to_str().unwrap(), "eval", "13<<2"]);

        // Act
        let result = execute_command(&cli);

        // Assert
        assert!(result.is_ok());
    }

    #[test]
    fn given_broken_local_config_when_parsing_then_config_error() {
        // Arrange
        let dir = broken_config_dir();
        let cli = Cli::parse_from(["textree", "-C", dir.path().to_str().unwrap(), "parse"]);

        // Act
        let result = execute_command(&cli);

        // Assert
        assert_eq!(result.unwrap_err().exit_code(), crate::exitcode::CONFIG);
    }

    #[test]
    fn given_malformed_expression_when_evaluating_then_data_error() {
        let cli = Cli::parse_from(["textree", "eval", "1+2+"]);

        assert_eq!(
            execute_command(&cli).unwrap_err().exit_code(),
            crate::exitcode::DATAERR
        );
    }
}
