use anyhow::Result;
use clap::Parser;
use delta_review::areas::review::Review;
use delta_review::commands::prompt::ComparePaths;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_ENV: &str = "DELTA_REVIEW_LOG";

#[derive(Parser)]
#[command(
    name = "delta-review",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Side-by-side line diff of two text files, rendered as a spreadsheet",
    long_about = "Compares an old and a new version of a text file line by line and writes \
    an .xlsx spreadsheet with both versions next to each other, line-numbered, \
    with added lines highlighted green and removed lines highlighted red. \
    Any path not given as an argument is prompted for.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(index = 1, help = "The path to the new version of the file")]
    new_file: Option<String>,
    #[arg(index = 2, help = "The path to the old version of the file")]
    old_file: Option<String>,
    #[arg(index = 3, help = "The path of the .xlsx file to create")]
    output_file: Option<String>,
}

fn init_logging() {
    let level = std::env::var(LOG_ENV)
        .ok()
        .and_then(|value| value.parse::<tracing::Level>().ok())
        .unwrap_or(tracing::Level::WARN);

    let _ = tracing_subscriber::fmt::Subscriber::builder()
        .with_target(false)
        .without_time()
        .with_level(true)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish()
        .try_init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let paths = ComparePaths::collect(
        cli.new_file,
        cli.old_file,
        cli.output_file,
        &mut std::io::stdin().lock(),
        &mut std::io::stdout(),
    )?;

    let pwd = std::env::current_dir()?;
    let review = Review::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?;

    review.compare(&paths.new_file, &paths.old_file, &paths.output_file)?;

    Ok(())
}
