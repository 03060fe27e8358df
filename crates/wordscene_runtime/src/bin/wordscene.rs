//! wordscene CLI entry point.

use std::env;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tracing::{debug, info};
use wordscene_foundation::{Error, ErrorContext, ErrorKind};
use wordscene_parser::{VocabularyLineParser, word_list};
use wordscene_runtime::render::{
    format_entries, format_explain, format_history, format_json, format_summary,
};
use wordscene_runtime::{Preview, RuntimeConfig, init_logging};
use wordscene_session::{
    FileHistoryStore, GenerateResponse, MemoryHistoryStore, Session, Submission,
};

/// How parsed words are printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum OutputFormat {
    #[default]
    Table,
    Json,
    Words,
    Explain,
}

/// CLI configuration parsed from arguments.
#[derive(Debug, Default)]
struct CliConfig {
    files: Vec<PathBuf>,
    format: OutputFormat,
    interactive: bool,
    guest: bool,
    request: Option<String>,
    continuation: bool,
    record: Option<PathBuf>,
    history: bool,
    remove_history: Option<usize>,
    show_help: bool,
    show_version: bool,
    verbosity: u8,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut args = args.into_iter().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-i" | "--interactive" => config.interactive = true,
            "--json" => config.format = OutputFormat::Json,
            "--words" => config.format = OutputFormat::Words,
            "--explain" => config.format = OutputFormat::Explain,
            "--guest" => config.guest = true,
            "--continue" => config.continuation = true,
            "--history" => config.history = true,
            "--request" => {
                let name = args.next().ok_or("--request requires a list name")?;
                config.request = Some(name);
            }
            "--record" => {
                let path = args.next().ok_or("--record requires a response file")?;
                config.record = Some(PathBuf::from(path));
            }
            "--remove-history" => {
                let index = args.next().ok_or("--remove-history requires an index")?;
                config.remove_history = Some(
                    index
                        .parse()
                        .map_err(|_| format!("invalid --remove-history value: {index}"))?,
                );
            }
            flag if is_verbosity_flag(flag) => {
                let count = u8::try_from(flag.len() - 1).unwrap_or(u8::MAX);
                config.verbosity = config.verbosity.saturating_add(count);
            }
            flag if flag.starts_with('-') && flag != "-" => {
                return Err(format!("unknown option: {flag}").into());
            }
            path => config.files.push(PathBuf::from(path)),
        }
    }

    let modes = [
        config.guest,
        config.request.is_some(),
        config.continuation,
        config.history,
        config.remove_history.is_some(),
        config.interactive,
    ];
    if modes.iter().filter(|&&on| on).count() > 1 {
        return Err("choose one of --guest, --request, --continue, --history, \
                    --remove-history and --interactive"
            .into());
    }
    if config.record.is_some() && config.request.is_none() && !config.continuation {
        return Err("--record needs --request or --continue".into());
    }

    Ok(config)
}

/// True for `-v`, `-vv`, `-vvv` and longer runs of `v`.
fn is_verbosity_flag(arg: &str) -> bool {
    arg.strip_prefix('-')
        .is_some_and(|rest| !rest.is_empty() && rest.chars().all(|c| c == 'v'))
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let cli = parse_args(args)?;

    if cli.show_help {
        print_help();
        return Ok(());
    }

    if cli.show_version {
        println!("wordscene {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = RuntimeConfig::from_env()?.with_verbosity(cli.verbosity);
    init_logging(config.verbosity);
    debug!(?config, "loaded configuration");

    if cli.history {
        let store = open_store(&config)?;
        let session = Session::new(store, config.session);
        println!("{}", format_history(&session.history()));
        if let Some(pending) = session.pending() {
            println!(
                "\n{} words of {} are waiting, run with --continue",
                pending.words.len(),
                pending.original_name
            );
        }
        return Ok(());
    }

    if let Some(index) = cli.remove_history {
        let mut session = Session::new(open_store(&config)?, config.session);
        let removed = session.remove_history(index)?;
        println!("removed {}", removed.name);
        return Ok(());
    }

    if cli.continuation {
        let mut session = Session::new(open_store(&config)?, config.session);
        let submission = session.prepare_continuation()?;
        return submit(&mut session, &submission, cli.record.as_deref());
    }

    if cli.interactive {
        let text = if cli.files.is_empty() {
            String::new()
        } else {
            read_input(&cli.files)?
        };
        let mut preview = Preview::new(&config)?.with_text(text);
        preview.run()?;
        return Ok(());
    }

    let text = read_input(&cli.files)?;

    if cli.guest {
        let session = Session::new(MemoryHistoryStore::new(), config.session);
        let submission = session.prepare_guest(&text)?;
        println!("{}", submission.request.to_json_pretty()?);
        return Ok(());
    }

    if let Some(name) = &cli.request {
        let mut session = Session::new(open_store(&config)?, config.session);
        let submission = session.prepare(name, &text)?;
        return submit(&mut session, &submission, cli.record.as_deref());
    }

    let report = VocabularyLineParser::parse_with_report(&text);
    if cli.format == OutputFormat::Explain {
        println!("{}", format_explain(&text));
        eprintln!("{}", format_summary(&report));
        return Ok(());
    }
    if report.is_empty() {
        return Err(Error::no_words().into());
    }

    match cli.format {
        OutputFormat::Table => println!("{}", format_entries(&report.entries)),
        OutputFormat::Json => println!("{}", format_json(&report.entries)?),
        OutputFormat::Words => println!("{}", word_list(&report.entries)),
        OutputFormat::Explain => {}
    }
    eprintln!("{}", format_summary(&report));

    Ok(())
}

/// Prints the request body, or records the backend's response to it.
fn submit(
    session: &mut Session<FileHistoryStore>,
    submission: &Submission,
    record: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(path) = record else {
        eprintln!("{}", submission.status_message());
        println!("{}", submission.request.to_json_pretty()?);
        return Ok(());
    };

    let body = fs::read_to_string(path).map_err(|e| read_error(path, &e))?;
    let response = GenerateResponse::from_json(&body)?;
    if !response.message.is_empty() {
        info!(message = %response.message, "backend response");
    }

    let record = session.record(submission, response)?;
    println!(
        "saved {} ({} scenes, {} words)",
        record.name,
        record.scenes.len(),
        record.word_count
    );
    if let Some(pending) = session.pending() {
        println!(
            "{} words are waiting, run with --continue",
            pending.words.len()
        );
    }
    Ok(())
}

fn open_store(config: &RuntimeConfig) -> Result<FileHistoryStore, Error> {
    FileHistoryStore::open(&config.history_path, config.session.history_capacity)
}

/// Reads and joins the given files, or stdin when there are none.
fn read_input(files: &[PathBuf]) -> Result<String, Error> {
    if files.is_empty() || files.iter().all(|f| f.as_os_str() == "-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| read_error(Path::new("<stdin>"), &e))?;
        return Ok(text);
    }

    let mut texts = Vec::with_capacity(files.len());
    for file in files {
        texts.push(fs::read_to_string(file).map_err(|e| read_error(file, &e))?);
    }
    Ok(texts.join("\n"))
}

fn read_error(path: &Path, error: &io::Error) -> Error {
    Error::new(ErrorKind::IoError(error.to_string()))
        .with_context(ErrorContext::new().with_source(path.display().to_string()))
}

fn print_help() {
    println!(
        "\x1b[1mwordscene\x1b[0m - Turn pasted vocabulary lists into scene requests

\x1b[1mUSAGE:\x1b[0m
    wordscene [OPTIONS] [FILES...]

\x1b[1mARGUMENTS:\x1b[0m
    [FILES...]    Text files to parse (stdin when omitted)

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    -v, -vv, -vvv      More log output on stderr (RUST_LOG overrides)
    -i, --interactive  Live preview REPL, starting from FILES if given

\x1b[1mOUTPUT OPTIONS:\x1b[0m
    --json             Print recognized words as JSON
    --words            Print one word per line
    --explain          Show how each line was classified

\x1b[1mSUBMISSION OPTIONS:\x1b[0m
    --request NAME     Print the request body for the first batch
    --guest            Print a guest request body (word limit applies)
    --continue         Print the request body for the waiting words
    --record FILE      With --request or --continue, store the backend
                       response from FILE in the history
    --history          List saved scene history
    --remove-history N Delete history entry N

\x1b[1mENVIRONMENT:\x1b[0m
    WORDSCENE_BATCH_LIMIT       Words per request (default 200)
    WORDSCENE_GUEST_LIMIT       Guest word limit (default 50)
    WORDSCENE_HISTORY_CAPACITY  History entries kept (default 10)
    WORDSCENE_HISTORY_PATH      History file (default wordscene-history.msgpack)

\x1b[1mEXAMPLES:\x1b[0m
    pbpaste | wordscene                      Preview recognized words
    wordscene --explain list.txt             Debug a stubborn list
    wordscene --request Unit3 list.txt       Request body for Unit3
    wordscene --request Unit3 list.txt --record reply.json
    wordscene --continue --record reply2.json"
    );
}
