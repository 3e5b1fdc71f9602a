use std::borrow::Cow;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use env_logger::Env;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use serde_json::{self, json};
use wordpiece::{
    basic_tokenize, normalize, TokenizerConfig, Vocabulary, WordPiece, CONTINUATION_PREFIX,
    DEFAULT_MAX_TOKEN_LENGTH, DEFAULT_UNKNOWN_TOKEN,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "WordPiece tokenization toolkit", long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (-q, -qq)
    #[arg(short = 'q', long, global = true, action = ArgAction::Count)]
    quiet: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Tokenize text into subword pieces with a vocabulary
    Tokenize(TokenizeArgs),
    /// Run the basic (word-level) stage only
    Basic(BasicArgs),
    /// Inspect a vocabulary file
    Vocab(VocabArgs),
}

#[derive(Args, Debug)]
struct TokenizeArgs {
    /// Vocabulary file, one token per line
    #[arg(long, value_name = "PATH")]
    vocab: PathBuf,

    /// Text to tokenize; reads --input or stdin when omitted
    #[arg(value_name = "TEXT")]
    text: Option<String>,

    /// Read input lines from a file
    #[arg(short = 'i', long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Unknown-token sentinel
    #[arg(long, value_name = "TOKEN", default_value = DEFAULT_UNKNOWN_TOKEN)]
    unk: String,

    /// Preserve letter case instead of lowercasing
    #[arg(long)]
    keep_case: bool,

    /// Maximum word length in bytes before the sentinel is substituted
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_MAX_TOKEN_LENGTH)]
    max_token_length: usize,

    /// Emit vocabulary ids alongside tokens
    #[arg(long)]
    ids: bool,

    /// Emit one JSON object per input line
    #[arg(long)]
    json: bool,

    /// Disable the progress spinner for file input
    #[arg(long)]
    no_progress: bool,
}

#[derive(Args, Debug)]
struct BasicArgs {
    /// Text to tokenize; reads --input or stdin when omitted
    #[arg(value_name = "TEXT")]
    text: Option<String>,

    /// Read input lines from a file
    #[arg(short = 'i', long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Preserve letter case instead of lowercasing
    #[arg(long)]
    keep_case: bool,

    /// Emit one JSON object per input line
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct VocabArgs {
    /// Vocabulary file to inspect
    #[arg(long, value_name = "PATH")]
    vocab: PathBuf,

    /// Emit machine-readable JSON summary
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Tokenize(args) => run_tokenize(args, cli.quiet > 0),
        Commands::Basic(args) => run_basic(args),
        Commands::Vocab(args) => run_vocab(args),
    }
}

fn init_logging(verbose: u8, quiet: u8) {
    use log::LevelFilter;

    let level = if quiet > 0 {
        match quiet {
            0 => LevelFilter::Info,
            1 => LevelFilter::Warn,
            _ => LevelFilter::Error,
        }
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
    builder.format_timestamp_millis();
    builder.filter_level(level);
    let _ = builder.try_init();
}

fn run_tokenize(args: TokenizeArgs, quiet: bool) -> Result<()> {
    let cfg = TokenizerConfig::builder()
        .unknown_token(args.unk.clone())
        .lowercase(!args.keep_case)
        .max_token_length(args.max_token_length)
        .build()?;

    let vocab = Vocabulary::from_file(&args.vocab)
        .with_context(|| format!("failed to load vocabulary from {}", args.vocab.display()))?;
    let tokenizer = WordPiece::new(vocab, cfg)?;

    let lines = gather_lines(args.text, args.input.as_ref())?;
    let normalized: Vec<Cow<'_, str>> = lines.iter().map(|line| normalize(line)).collect();

    let spinner = if args.no_progress || quiet || args.input.is_none() {
        None
    } else {
        let pb = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("{spinner} tokenizing lines... {elapsed}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");
        pb.set_style(style);
        pb.enable_steady_tick(Duration::from_millis(80));
        Some(pb)
    };

    let outputs = tokenizer.tokenize_batch(&normalized);
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    for (line, pieces) in lines.iter().zip(&outputs) {
        let ids = if args.ids {
            let mut resolved = Vec::with_capacity(pieces.len());
            for piece in pieces {
                let id = tokenizer.vocab().id(piece).ok_or_else(|| {
                    anyhow!(
                        "token {piece:?} has no vocabulary id; add the sentinel {:?} to the vocabulary",
                        tokenizer.config().unknown_token
                    )
                })?;
                resolved.push(id);
            }
            Some(resolved)
        } else {
            None
        };

        if args.json {
            let record = match &ids {
                Some(ids) => json!({ "text": line, "tokens": pieces, "ids": ids }),
                None => json!({ "text": line, "tokens": pieces }),
            };
            println!("{}", serde_json::to_string(&record)?);
        } else if let Some(ids) = &ids {
            for (id, piece) in ids.iter().zip(pieces) {
                println!("{id}\t{piece}");
            }
        } else {
            for piece in pieces {
                println!("{piece}");
            }
        }
    }

    let token_count: usize = outputs.iter().map(Vec::len).sum();
    info!(
        "tokenized {} lines into {} tokens",
        outputs.len(),
        token_count
    );

    Ok(())
}

fn run_basic(args: BasicArgs) -> Result<()> {
    let lines = gather_lines(args.text, args.input.as_ref())?;

    for line in &lines {
        let text = normalize(line);
        let tokens = basic_tokenize(&text, !args.keep_case);
        if args.json {
            let record = json!({ "text": line, "tokens": tokens });
            println!("{}", serde_json::to_string(&record)?);
        } else {
            for token in &tokens {
                println!("{token}");
            }
        }
    }

    Ok(())
}

fn run_vocab(args: VocabArgs) -> Result<()> {
    let vocab = Vocabulary::from_file(&args.vocab)
        .with_context(|| format!("failed to load vocabulary from {}", args.vocab.display()))?;

    let continuations = vocab
        .tokens()
        .filter(|token| token.starts_with(CONTINUATION_PREFIX))
        .count();
    let has_sentinel = vocab.contains(DEFAULT_UNKNOWN_TOKEN);
    let preview: Vec<&str> = vocab.tokens().take(8).collect();

    let summary = json!({
        "path": args.vocab.display().to_string(),
        "entries": vocab.len(),
        "continuation_pieces": continuations,
        "has_default_sentinel": has_sentinel,
        "preview": preview,
    });

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("Path             : {}", args.vocab.display());
        println!("Entries          : {}", vocab.len());
        println!("Continuations    : {continuations}");
        println!(
            "Unknown sentinel : {}",
            if has_sentinel { "present" } else { "absent" }
        );
        if !preview.is_empty() {
            println!("First entries    : {}", preview.join(", "));
        }
    }

    Ok(())
}

fn gather_lines(text: Option<String>, input: Option<&PathBuf>) -> Result<Vec<String>> {
    if let Some(text) = text {
        return Ok(vec![text]);
    }
    let contents = match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            buffer
        }
    };
    Ok(contents.lines().map(str::to_owned).collect())
}
