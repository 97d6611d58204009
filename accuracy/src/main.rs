use chrono::prelude::*;
use std::error::Error;
use std::{
    io::Write,
    time::{Duration, Instant, SystemTime},
};

use distance::damerau_levenshtein;
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use serde::Serialize;
use structopt::clap::{App, AppSettings, Arg};
use triespell::speller::{Correction, Speller, SpellerConfig};

fn load_words(
    path: &str,
    max_words: Option<usize>,
) -> Result<Vec<(String, String)>, Box<dyn Error>> {
    let mut rdr = csv::ReaderBuilder::new()
        .comment(Some(b'#'))
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    Ok(rdr
        .records()
        .filter_map(Result::ok)
        .filter_map(|r| {
            r.get(0)
                .and_then(|x| r.get(1).map(|y| (x.to_string(), y.to_string())))
        })
        .take(max_words.unwrap_or(usize::MAX))
        .collect())
}

#[derive(Debug, Default, Serialize, PartialOrd, Ord, PartialEq, Eq, Clone, Copy)]
struct Time {
    secs: u64,
    subsec_nanos: u32,
}

impl From<Duration> for Time {
    fn from(d: Duration) -> Time {
        Time {
            secs: d.as_secs(),
            subsec_nanos: d.subsec_nanos(),
        }
    }
}

impl Time {
    fn as_nanos(&self) -> u128 {
        self.secs as u128 * 1_000_000_000 + self.subsec_nanos as u128
    }
}

impl std::fmt::Display for Time {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        let us = self.as_nanos() / 1_000;
        write!(f, "{}µs", us)
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
enum Outcome {
    /// the input was already the expected word
    Correct,
    /// corrected to the expected word
    Fixed,
    /// corrected to some other word
    Wrong,
    /// no correction found
    NoCorrection,
}

impl Outcome {
    fn new(correction: &Correction, expected: &str) -> Outcome {
        match correction {
            Correction::Correct(v) if v == expected => Outcome::Correct,
            Correction::Suggested(v) if v == expected => Outcome::Fixed,
            Correction::NotFound => Outcome::NoCorrection,
            _ => Outcome::Wrong,
        }
    }
}

#[derive(Debug, Serialize)]
struct AccuracyResult<'a> {
    input: &'a str,
    expected: &'a str,
    distance: usize,
    correction: Correction,
    outcome: Outcome,
    time: Time,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    dictionary: &'a str,
    dictionary_words: usize,
    config: &'a SpellerConfig,
    summary: Summary,
    results: Vec<AccuracyResult<'a>>,
    start_timestamp: Time,
    total_time: Time,
}

#[derive(Serialize, Default, Debug, Clone)]
struct Summary {
    total_words: u32,
    correct: u32,
    fixed: u32,
    wrong: u32,
    no_correction: u32,
    slowest_lookup: Time,
    fastest_lookup: Time,
    average_time: Time,
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        let percent =
            |v: u32| -> String { format!("{:.2}%", v as f32 / self.total_words as f32 * 100f32) };

        write!(
            f,
            "[ok] {} [fixed] {} [wrong] {} [none] {} [fast] {} [slow] {} [avg] {}",
            percent(self.correct + self.fixed),
            percent(self.fixed),
            percent(self.wrong),
            percent(self.no_correction),
            self.fastest_lookup,
            self.slowest_lookup,
            self.average_time
        )
    }
}

impl Summary {
    fn new<'a>(results: &[AccuracyResult<'a>]) -> Summary {
        let mut summary = Summary::default();

        results.iter().for_each(|result| {
            summary.total_words += 1;

            match result.outcome {
                Outcome::Correct => summary.correct += 1,
                Outcome::Fixed => summary.fixed += 1,
                Outcome::Wrong => summary.wrong += 1,
                Outcome::NoCorrection => summary.no_correction += 1,
            }
        });

        summary.slowest_lookup = results.iter().map(|x| x.time).max().unwrap_or_default();
        summary.fastest_lookup = results.iter().map(|x| x.time).min().unwrap_or_default();

        if !results.is_empty() {
            let total: u128 = results.iter().map(|x| x.time.as_nanos()).sum();
            let average = total / results.len() as u128;
            summary.average_time = Duration::from_nanos(average as u64).into();
        }

        summary
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    pretty_env_logger::init();

    let matches = App::new("triespell-accuracy")
        .setting(AppSettings::ArgRequiredElseHelp)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Accuracy testing for triespell.")
        .arg(
            Arg::with_name("config")
                .short("c")
                .takes_value(true)
                .help("Provide JSON config file to override test defaults"),
        )
        .arg(
            Arg::with_name("words")
                .value_name("WORDS")
                .help("The 'input -> expected' list in tab-delimited value file (TSV)"),
        )
        .arg(
            Arg::with_name("dictionary")
                .value_name("DICTIONARY")
                .help("Use the given word list, one word per line"),
        )
        .arg(
            Arg::with_name("json-output")
                .short("o")
                .value_name("JSON-OUTPUT")
                .help("The file path for the JSON report output"),
        )
        .arg(
            Arg::with_name("tsv-output")
                .short("t")
                .value_name("TSV-OUTPUT")
                .help("The file path for the TSV line append"),
        )
        .arg(
            Arg::with_name("max-words")
                .short("w")
                .takes_value(true)
                .help("Truncate typos list to max number of words specified"),
        )
        .get_matches();

    let cfg: SpellerConfig = match matches.value_of("config") {
        Some(path) => {
            let file = std::fs::File::open(path)?;
            serde_json::from_reader(file)?
        }
        None => SpellerConfig::default(),
    };

    let dictionary_path = match matches.value_of("dictionary") {
        Some(path) => path,
        None => {
            eprintln!("No dictionary given; aborting.");
            std::process::exit(1);
        }
    };
    let speller = triespell::dictionary::load(dictionary_path)?;

    let words = match matches.value_of("words") {
        Some(path) => load_words(
            path,
            matches
                .value_of("max-words")
                .and_then(|x| x.parse::<usize>().ok()),
        )?,
        None => {
            eprintln!("No word list for given path; aborting.");
            std::process::exit(1);
        }
    };

    if words.is_empty() {
        return Err("No words found in word list".into());
    }

    let pb = ProgressBar::new(words.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{pos}/{len} [{percent}%] {wide_bar} {elapsed_precise}"),
    );

    let start_time = Instant::now();
    let results = words
        .par_iter()
        .progress_with(pb)
        .map(|(input, expected)| {
            let now = Instant::now();
            let correction = speller.correct_with_config(input, &cfg);
            let time = now.elapsed().into();

            let outcome = Outcome::new(&correction, expected);
            let distance = damerau_levenshtein(input, expected);
            AccuracyResult {
                input,
                expected,
                distance,
                correction,
                outcome,
                time,
            }
        })
        .collect::<Vec<_>>();

    let total_time = start_time.elapsed().into();
    let start_timestamp = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)?
        .into();

    let summary = Summary::new(&results);
    println!("{}", summary);

    if let Some(path) = matches.value_of("json-output") {
        let output = std::fs::File::create(path)?;
        let report = Report {
            dictionary: dictionary_path,
            dictionary_words: speller.trie().len(),
            config: &cfg,
            summary,
            results,
            start_timestamp,
            total_time,
        };
        println!("Writing JSON report…");
        serde_json::to_writer_pretty(output, &report)?;
    } else if let Some(path) = matches.value_of("tsv-output") {
        let mut output = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        let md = output.metadata()?;
        if md.len() == 0 {
            // new file, write headers:
            output.write_all(b"date\tdictionary\ttotal\tok\tfixed\twrong\tnone\n")?;
        }
        writeln!(
            output,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            Local::now().to_rfc3339(),
            dictionary_path,
            summary.total_words,
            summary.correct + summary.fixed,
            summary.fixed,
            summary.wrong,
            summary.no_correction
        )?;
    };

    println!("Done!");
    Ok(())
}
