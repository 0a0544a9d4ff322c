use chrono::NaiveDate;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use swepin::{GenerateOptions, ParseOptions, PersonalIdentityNumber, PinFormat, options};
use tracing_subscriber::EnvFilter;

use swepin_cli::{
    formats::{FormatArg, LanguageArg, OutputFormat},
    generate::{generate_batch, render_batch},
    inspect,
    validate::run_validate_command,
    validation::{collect_inputs, parse_reference_date},
};

#[derive(Parser, Debug)]
#[command(name = "swepin", author, version, about, long_about = None)]
struct Args {
    /// Log pipeline decisions to stderr (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate one or more personal identity numbers.
    Validate {
        /// Numbers to validate
        pins: Vec<String>,

        /// Read additional numbers from a file, one per line
        #[arg(short, long)]
        file: Option<String>,

        /// Accept only the YYYYMMDD-NNNN layout
        #[arg(long)]
        strict: bool,

        /// Reference date (YYYY-MM-DD) instead of today
        #[arg(long, value_parser = parse_reference_date)]
        today: Option<NaiveDate>,

        /// Print a JSON report instead of OK/ERR lines
        #[arg(long)]
        json: bool,
    },

    /// Show every property of a personal identity number.
    Inspect {
        /// The number to inspect
        pin: String,

        /// Language of labels and keys
        #[arg(short, long, value_enum, default_value_t = LanguageArg::En)]
        lang: LanguageArg,

        /// Reference date (YYYY-MM-DD) instead of today
        #[arg(long, value_parser = parse_reference_date)]
        today: Option<NaiveDate>,

        /// Print the JSON projection
        #[arg(long, conflicts_with = "yaml")]
        json: bool,

        /// Print the YAML projection
        #[arg(long)]
        yaml: bool,
    },

    /// Print a personal identity number in a canonical layout.
    Format {
        /// The number to format
        pin: String,

        /// Target layout
        #[arg(short, long, value_enum, default_value_t = FormatArg::ShortSeparated)]
        format: FormatArg,

        /// Reference date (YYYY-MM-DD) instead of today
        #[arg(long, value_parser = parse_reference_date)]
        today: Option<NaiveDate>,
    },

    /// Generate random valid personal identity numbers.
    Generate {
        /// How many numbers to generate
        #[arg(short, long, default_value_t = options::DEFAULT_COUNT)]
        count: usize,

        /// First birth year, inclusive
        #[arg(long, default_value_t = options::DEFAULT_START_YEAR)]
        start_year: i32,

        /// Last birth year, inclusive
        #[arg(long, default_value_t = options::DEFAULT_END_YEAR)]
        end_year: i32,

        /// Share of men, between 0 and 1
        #[arg(long, default_value_t = options::DEFAULT_MALE_RATIO)]
        male_ratio: f64,

        /// Share of coordination numbers, between 0 and 1
        #[arg(long, default_value_t = options::DEFAULT_COORDINATION_PROBABILITY)]
        coordination_probability: f64,

        /// Never generate coordination numbers
        #[arg(long)]
        no_coordination: bool,

        /// Never generate anyone aged 100 or more
        #[arg(long)]
        no_centenarians: bool,

        /// Reference date (YYYY-MM-DD) instead of today
        #[arg(long, value_parser = parse_reference_date)]
        today: Option<NaiveDate>,

        /// Seed for a reproducible batch
        #[arg(long)]
        seed: Option<u64>,

        /// Layout of text output
        #[arg(short, long, value_enum, default_value_t = FormatArg::ShortSeparated)]
        format: FormatArg,

        /// Output as text, json or yaml
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,

        /// Language of JSON/YAML keys
        #[arg(short, long, value_enum, default_value_t = LanguageArg::En)]
        lang: LanguageArg,
    },

    /// Print shell completions.
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_pin(input: &str, today: Option<NaiveDate>) -> PersonalIdentityNumber {
    let options = ParseOptions::new().with_reference_date(today);
    PersonalIdentityNumber::parse_with(input, &options).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    })
}

fn fail(message: String) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.commands {
        Commands::Validate {
            pins,
            file,
            strict,
            today,
            json,
        } => {
            let inputs = collect_inputs(&pins, file.as_deref()).unwrap_or_else(|e| fail(e));
            let options = ParseOptions::new()
                .with_reference_date(today)
                .with_strict(strict);
            match run_validate_command(&inputs, &options, json) {
                Ok(true) => {}
                Ok(false) => std::process::exit(1),
                Err(e) => fail(e),
            }
        }
        Commands::Inspect {
            pin,
            lang,
            today,
            json,
            yaml,
        } => {
            let parsed = parse_pin(&pin, today);
            let output = if json {
                OutputFormat::Json
            } else if yaml {
                OutputFormat::Yaml
            } else {
                OutputFormat::Text
            };
            let reference = parsed.reference_date();
            match inspect::render(&parsed, lang.into(), reference, output) {
                Ok(text) => println!("{}", text),
                Err(e) => fail(e),
            }
        }
        Commands::Format { pin, format, today } => {
            let parsed = parse_pin(&pin, today);
            println!("{}", parsed.format(PinFormat::from(format)));
        }
        Commands::Generate {
            count,
            start_year,
            end_year,
            male_ratio,
            coordination_probability,
            no_coordination,
            no_centenarians,
            today,
            seed,
            format,
            output,
            lang,
        } => {
            let options = GenerateOptions::new()
                .with_count(count)
                .with_years(start_year, end_year)
                .with_male_ratio(male_ratio)
                .with_coordination_numbers(!no_coordination)
                .with_coordination_probability(coordination_probability)
                .with_centenarians(!no_centenarians)
                .with_reference_date(today);

            let pins = generate_batch(&options, seed).unwrap_or_else(|e| fail(e));
            match render_batch(&pins, format.into(), output, lang.into(), &options) {
                Ok(text) => println!("{}", text),
                Err(e) => fail(e),
            }
        }
        Commands::Completions { shell } => {
            let mut command = Args::command();
            clap_complete::generate(shell, &mut command, "swepin", &mut std::io::stdout());
        }
    }
}
