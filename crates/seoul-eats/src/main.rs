//! The SeoulEats terminal front end.

#[macro_use]
extern crate tracing;

use std::io::Write as _;
use std::process::ExitCode;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use seoul_eats::core::TurnOutcome;
use tokio::io::{self, AsyncBufReadExt, BufReader, Lines, Stdin};

const BAR_CHAR: &str = "▎";
const TITLE: &str = "🍲 Based on the weather and your cravings, I'll recommend \
                     the best Korean food in Seoul!";
const PLACEHOLDER: &str = "Ask about food, weather, or places in Seoul...";

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = match seoul_eats::config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    let mut session = seoul_eats::new_session(config);

    let progress_style = ProgressStyle::with_template("{spinner} {wide_msg}")
        .unwrap()
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");

    println!("{}", TITLE.bold());
    println!("{}\n", PLACEHOLDER.dimmed());

    let mut lines = BufReader::new(io::stdin()).lines();
    loop {
        print!("{}🙂 ", BAR_CHAR.bright_green());
        std::io::stdout().flush().ok();

        let Some(line) = read_line(&mut lines).await else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let progress_bar = ProgressBar::new_spinner();
        progress_bar.set_style(progress_style.clone());
        progress_bar.set_message("SeoulEats is typing...");
        progress_bar.enable_steady_tick(Duration::from_millis(100));

        let outcome = session.send_message(line).await;

        // Finish the progress bar before printing anything else.
        progress_bar.finish_and_clear();

        match outcome {
            TurnOutcome::Answered(answer) => {
                println!(
                    "{}🤖 {}\n",
                    BAR_CHAR.bright_cyan(),
                    answer.bright_white()
                );
            }
            TurnOutcome::Failed => {
                println!(
                    "{}⚠️  {}\n",
                    BAR_CHAR.bright_red(),
                    "Failed to get a response.".bright_red()
                );
            }
        }
    }

    ExitCode::SUCCESS
}

async fn read_line(lines: &mut Lines<BufReader<Stdin>>) -> Option<String> {
    match lines.next_line().await {
        Ok(line) => line,
        Err(err) => {
            error!("error reading input: {}", err);
            None
        }
    }
}
