use std::io::{self, BufRead, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use gumdrop::Options;
use serde::Serialize;

use triespell::dictionary;
use triespell::paths::{default_dictionary_path, DEFAULT_DICTIONARY_PATHS};
use triespell::speller::{Correction, Speller, SpellerConfig, TrieSpeller};
use triespell::tokenizer::Tokenize;

trait OutputWriter {
    fn write_correction(&mut self, word: &str, correction: &Correction);
    fn finish(&mut self) -> anyhow::Result<()>;
}

struct StdoutWriter;

impl OutputWriter for StdoutWriter {
    fn write_correction(&mut self, word: &str, correction: &Correction) {
        println!(
            "Input: {}\t\t[{}]",
            &word,
            if correction.is_correct() {
                "CORRECT"
            } else {
                "INCORRECT"
            }
        );

        if !correction.is_correct() {
            println!("{}", correction);
        }
        println!();
    }

    fn finish(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CorrectionRequest {
    word: String,
    is_correct: bool,
    correction: Correction,
}

#[derive(Serialize)]
struct JsonWriter {
    results: Vec<CorrectionRequest>,
}

impl JsonWriter {
    pub fn new() -> JsonWriter {
        JsonWriter { results: vec![] }
    }
}

impl OutputWriter for JsonWriter {
    fn write_correction(&mut self, word: &str, correction: &Correction) {
        self.results.push(CorrectionRequest {
            word: word.to_owned(),
            is_correct: correction.is_correct(),
            correction: correction.clone(),
        });
    }

    fn finish(&mut self) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string_pretty(self)?);
        Ok(())
    }
}

fn run(
    speller: &dyn Speller,
    words: Vec<String>,
    writer: &mut dyn OutputWriter,
    config: &SpellerConfig,
) {
    for word in words {
        let correction = speller.correct_with_config(&word, config);
        writer.write_correction(&word, &correction);
    }
}

#[derive(Debug, Options)]
struct Args {
    #[options(help = "print help message")]
    help: bool,

    #[options(command)]
    command: Option<Command>,
}

#[derive(Debug, Options)]
enum Command {
    #[options(help = "correct lines typed at a prompt (default)")]
    Repl(ReplArgs),

    #[options(help = "get corrections for provided input")]
    Suggest(SuggestArgs),

    #[options(help = "print input in word-separated tokenized form")]
    Tokenize(TokenizeArgs),
}

#[derive(Debug, Default, Options)]
struct ReplArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(help = "word list to be used, one word per line")]
    dictionary: Option<PathBuf>,

    #[options(help = "JSON file overriding the default search settings")]
    config: Option<PathBuf>,
}

#[derive(Debug, Options)]
struct SuggestArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(help = "word list to be used, one word per line")]
    dictionary: Option<PathBuf>,

    #[options(help = "JSON file overriding the default search settings")]
    config: Option<PathBuf>,

    #[options(no_short, long = "json", help = "output in JSON format")]
    use_json: bool,

    #[options(no_short, help = "split inputs into words before correcting")]
    text: bool,

    #[options(free, help = "words to be processed")]
    inputs: Vec<String>,
}

#[derive(Debug, Options)]
struct TokenizeArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(short = "w", long = "words", help = "show words only")]
    is_words_only: bool,

    #[options(free, help = "text to be tokenized")]
    inputs: Vec<String>,
}

fn read_stdin() -> anyhow::Result<String> {
    eprintln!("Reading from stdin...");
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("reading stdin")?;
    Ok(buffer)
}

fn load_dictionary(path: Option<PathBuf>) -> anyhow::Result<TrieSpeller> {
    let path = match path.or_else(default_dictionary_path) {
        Some(v) => v,
        None => anyhow::bail!(
            "No dictionary given and none found at {}",
            DEFAULT_DICTIONARY_PATHS.join(", ")
        ),
    };

    log::info!("Loading dictionary from {}", path.display());
    Ok(dictionary::load(&path)?)
}

fn load_config(path: Option<&Path>) -> anyhow::Result<SpellerConfig> {
    match path {
        Some(path) => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("opening config {}", path.display()))?;
            let config = serde_json::from_reader(io::BufReader::new(file))
                .with_context(|| format!("parsing config {}", path.display()))?;
            Ok(config)
        }
        None => Ok(SpellerConfig::default()),
    }
}

fn tokenize(args: TokenizeArgs) -> anyhow::Result<()> {
    let inputs: String = if args.inputs.is_empty() {
        read_stdin()?
    } else {
        args.inputs.join(" ")
    };

    if args.is_words_only {
        for token in inputs.words() {
            println!("\"{}\"", token);
        }
    } else {
        for (index, token) in inputs.word_bound_indices() {
            println!("{:>4}: \"{}\"", index, token);
        }
    }

    Ok(())
}

fn suggest(args: SuggestArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    let speller = load_dictionary(args.dictionary)?;

    let mut writer: Box<dyn OutputWriter> = if args.use_json {
        Box::new(JsonWriter::new())
    } else {
        Box::new(StdoutWriter)
    };

    let inputs: Vec<String> = if args.inputs.is_empty() {
        read_stdin()?
            .trim()
            .split('\n')
            .map(|x| x.trim().to_string())
            .collect()
    } else {
        args.inputs
    };

    let words = if args.text {
        inputs
            .iter()
            .flat_map(|x| x.words())
            .map(str::to_string)
            .collect()
    } else {
        inputs
    };

    run(&speller, words, &mut *writer, &config);

    writer.finish()
}

fn repl(args: ReplArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    let speller = load_dictionary(args.dictionary)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            println!();
            return Ok(());
        }

        let word = line.trim_end_matches(&['\r', '\n'][..]);
        println!("{}", speller.correct_with_config(word, &config));
    }
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let args = Args::parse_args_default_or_exit();

    match args.command {
        None => repl(ReplArgs::default()),
        Some(Command::Repl(args)) => repl(args),
        Some(Command::Suggest(args)) => suggest(args),
        Some(Command::Tokenize(args)) => tokenize(args),
    }
}
