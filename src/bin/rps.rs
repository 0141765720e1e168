//! Play Rock Paper Scissors in the terminal.

use clap::Parser;
use log::{info, warn, LevelFilter};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

use rust_rps::core::DEFAULT_RESOLVE_DELAY_MS;
use rust_rps::ui::{self, Command};
use rust_rps::{logging, LogNotifier, Notifier, RoundController, SessionConfig, SessionSnapshot, SoundNotifier};

#[derive(Parser, Debug)]
#[command(name = "rps", version, about = "Play Rock Paper Scissors against the computer")]
struct Args {
    /// Seed for the computer's choices (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Milliseconds the computer "thinks" before revealing its choice
    #[arg(long, default_value_t = DEFAULT_RESOLVE_DELAY_MS)]
    delay_ms: u64,

    /// Audio player command used for outcome cues (e.g. aplay, afplay)
    #[arg(long)]
    sound_command: Option<String>,

    /// Directory holding win.mp3, lose.mp3 and tie.mp3
    #[arg(long, default_value = "sounds")]
    sound_dir: PathBuf,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Log level for stderr (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", value_parser = parse_level)]
    log_level: LevelFilter,
}

fn parse_level(s: &str) -> Result<LevelFilter, String> {
    s.parse::<LevelFilter>()
        .map_err(|_| format!("unknown log level {:?}", s))
}

impl Args {
    fn config(&self) -> SessionConfig {
        let mut config = SessionConfig::new()
            .with_resolve_delay_ms(self.delay_ms)
            .with_color(!self.no_color)
            .with_sound_dir(self.sound_dir.clone());
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(command) = &self.sound_command {
            config = config.with_sound_command(command.clone());
        }
        config
    }
}

fn draw(snapshot: &SessionSnapshot, color: bool) -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout)?;
    write!(stdout, "{}", ui::render(snapshot, color))?;
    stdout.flush()
}

#[tokio::main]
async fn main() -> rust_rps::Result<()> {
    let args = Args::parse();
    logging::init(args.log_level)?;

    let config = args.config();
    let notifier: Arc<dyn Notifier> = match SoundNotifier::from_config(&config.sound) {
        Some(sound) => Arc::new(sound),
        None => Arc::new(LogNotifier),
    };

    let mut controller = RoundController::from_config(&config, notifier);
    let mut updates = controller.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    info!("Session started ({:?} delay)", controller.delay());
    draw(&controller.snapshot(), config.color)?;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match Command::parse(&line) {
                    Command::Choose(choice) => {
                        controller.submit(choice);
                    }
                    Command::PlayAgain => {
                        controller.play_again();
                    }
                    Command::Quit => break,
                    Command::Empty => {}
                    Command::Unknown(input) => warn!("Unrecognized input {:?}", input),
                }
            }
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = *updates.borrow_and_update();
                draw(&snapshot, config.color)?;
            }
        }
    }

    controller.shutdown();
    info!("Final score: {}", controller.snapshot().tally);
    Ok(())
}
