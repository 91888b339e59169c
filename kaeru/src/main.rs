use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use kaeru_lib::types::{BaseForm, Polarity, Politeness, Tense};
use kaeru_lib::{
    conjugate, output, sample, vocab, AdjectiveInflection, Inflection, Question, TableOracle,
    VerbInflection, WordCategory,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kaeru", about = "Japanese adjective & verb inflection")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Conjugate a word. If WORD is omitted, reads `word<TAB>type` lines from stdin.
    Conjugate(ConjugateArgs),
    /// Sample a random quiz descriptor for a word category.
    Sample {
        /// Word category tag (e.g., adjective-na, verb-godan).
        #[arg(long = "type")]
        category: WordCategory,

        /// Seed for reproducible samples.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Build quiz questions from a vocabulary file.
    Question(QuestionArgs),
}

#[derive(Args)]
struct ConjugateArgs {
    /// Dictionary-form word.
    word: Option<String>,

    /// Word category tag. Required when WORD is given.
    #[arg(long = "type")]
    category: Option<WordCategory>,

    #[arg(long)]
    past: bool,

    #[arg(long)]
    negative: bool,

    /// Polite register (です / ます).
    #[arg(long, conflicts_with = "plain")]
    polite: bool,

    /// Explicit plain copula (な-adjectives only).
    #[arg(long)]
    plain: bool,

    /// て-form (verbs only; excludes --past).
    #[arg(long, conflicts_with_all = ["past", "polite"])]
    te: bool,

    /// JSON table of precomputed verb conjugations.
    #[arg(long)]
    oracle_table: Option<PathBuf>,
}

#[derive(Args)]
struct QuestionArgs {
    /// Vocabulary file: a JSON array of {word, kana, type} records.
    #[arg(long, default_value = "vocab.json")]
    vocab: PathBuf,

    /// JSON table of precomputed verb conjugations.
    #[arg(long)]
    oracle_table: Option<PathBuf>,

    /// Number of questions to emit.
    #[arg(short = 'n', long, default_value = "1")]
    count: usize,

    /// Seed for reproducible questions.
    #[arg(long)]
    seed: Option<u64>,

    /// Don't include kana readings.
    #[arg(short = 'K', long)]
    hide_kana: bool,

    /// Don't include the word type.
    #[arg(short = 'T', long)]
    hide_type: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Conjugate(ref args) => run_conjugate(args, cli.pretty),
        Command::Sample { category, seed } => {
            let inflection = sample::sample_with(category, &mut rng(seed));
            let doc = json!({
                "type": category,
                "label": category.label(),
                "inflection": inflection,
                "prompt": output::to_bracketed(&inflection),
            });
            print_json(&doc, cli.pretty)
        }
        Command::Question(ref args) => run_question(args, cli.pretty),
    }
}

fn run_conjugate(args: &ConjugateArgs, pretty: bool) -> Result<()> {
    let oracle = load_oracle(args.oracle_table.as_deref())?;

    match args.word {
        Some(ref word) => {
            let Some(category) = args.category else {
                bail!("--type is required when a word is given");
            };
            conjugate_one(word, category, args, &oracle, pretty)
        }
        None => {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let line = line.context("failed to read stdin")?;
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let Some((word, tag)) = line.split_once('\t') else {
                    bail!("expected `word<TAB>type`, got {line:?}");
                };
                let category: WordCategory = tag.trim().parse()?;
                conjugate_one(word.trim(), category, args, &oracle, pretty)?;
            }
            Ok(())
        }
    }
}

fn conjugate_one(
    word: &str,
    category: WordCategory,
    args: &ConjugateArgs,
    oracle: &TableOracle,
    pretty: bool,
) -> Result<()> {
    let inflection = inflection_from_flags(category, args)?;
    let conjugated = conjugate(word, category, &inflection, oracle)
        .with_context(|| format!("cannot conjugate {word} as {category}"))?;
    let doc = json!({
        "word": word,
        "type": category,
        "inflection": inflection,
        "conjugated": conjugated,
    });
    print_json(&doc, pretty)
}

fn inflection_from_flags(category: WordCategory, args: &ConjugateArgs) -> Result<Inflection> {
    let tense = if args.past { Tense::Past } else { Tense::NonPast };
    let polarity = if args.negative {
        Polarity::Negative
    } else {
        Polarity::Positive
    };
    match category {
        WordCategory::Adjective(_) => {
            if args.te {
                bail!("--te only applies to verbs");
            }
            let politeness = match (args.polite, args.plain) {
                (true, _) => Politeness::Polite,
                (false, true) => Politeness::Plain,
                (false, false) => Politeness::Unmarked,
            };
            Ok(AdjectiveInflection::new(tense, polarity, politeness).into())
        }
        WordCategory::Verb(_) => {
            if args.plain {
                bail!("--plain only applies to な-adjectives");
            }
            let (base_form, tense) = match (args.te, args.polite) {
                (true, _) => (BaseForm::Te, None),
                (false, true) => (BaseForm::Polite, Some(tense)),
                (false, false) => (BaseForm::Plain, Some(tense)),
            };
            Ok(VerbInflection::new(base_form, tense, polarity)?.into())
        }
    }
}

fn run_question(args: &QuestionArgs, pretty: bool) -> Result<()> {
    let file = File::open(&args.vocab).with_context(|| {
        format!(
            "cannot open {}; build it with the vocabulary builder first",
            args.vocab.display()
        )
    })?;
    let records = vocab::read_vocabulary(BufReader::new(file))
        .with_context(|| format!("{} is malformed; rebuild it", args.vocab.display()))?;
    info!(words = records.len(), "vocabulary loaded");

    let oracle = load_oracle(args.oracle_table.as_deref())?;
    let mut rng = rng(args.seed);
    for _ in 0..args.count {
        let mut question = Question::pick(&records, &mut rng, &oracle)?;
        if args.hide_kana {
            question = question.hide_kana();
        }
        if args.hide_type {
            question = question.hide_category();
        }
        print_json(&question, pretty)?;
    }
    Ok(())
}

fn load_oracle(path: Option<&Path>) -> Result<TableOracle> {
    let Some(path) = path else {
        return Ok(TableOracle::default());
    };
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    let oracle = TableOracle::from_reader(BufReader::new(file))
        .with_context(|| format!("cannot load oracle table {}", path.display()))?;
    debug!(rows = oracle.len(), "oracle table loaded");
    Ok(oracle)
}

fn rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    println!("{}", json.context("JSON serialization failed")?);
    Ok(())
}
