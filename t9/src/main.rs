use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use t9::{
    create_host, glyphs, Command, Cyclic, DigitEcho, DispatchOutcome, Host, InputEvent,
    KeypadView, LayoutMode, LoggingBackend, Notification, T9Config, ToneTable, CanonicalSymbol,
};

#[derive(Parser)]
#[command(name = "t9")]
#[command(about = "Drive a T9 keypad from the terminal")]
#[command(version)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive REPL mode (default)
    Repl,
    /// Print the key glyphs of every layout
    Layouts,
    /// Print the DTMF tone table
    Tones,
    /// Print the effective configuration as TOML
    Config,
}

fn init_tracing(default_filter: Option<&str>) {
    let builder = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .with_env_var("T9_LOG");
    let filter = match (std::env::var_os("T9_LOG"), default_filter) {
        (None, Some(directives)) => builder.parse_lossy(directives),
        _ => builder.from_env_lossy(),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<T9Config> {
    match path {
        Some(path) => T9Config::load_toml(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(T9Config::default()),
    }
}

fn print_view(view: &KeypadView) {
    let slots: Vec<String> = view
        .suggestions
        .iter()
        .enumerate()
        .map(|(i, s)| if i == view.selected { format!("[{s}]") } else { format!(" {s} ") })
        .collect();
    println!(
        "{}|{}|{}  text: {:?}  suggestions: {}",
        view.language,
        view.layout,
        view.mode,
        view.display_text(),
        slots.join(" ")
    );
}

fn print_notifications(config: &T9Config, notifications: &[Notification]) {
    if config.echo_notifications {
        for n in notifications {
            println!("-> {n}");
        }
    }
}

fn run_command(
    host: &mut Host<LoggingBackend, DigitEcho>,
    config: &T9Config,
    command: Command,
) -> Result<()> {
    match command {
        Command::Keys(keys) => {
            for key in keys {
                let (outcome, sent) = host.handle(InputEvent::from_key_name(&key));
                if let DispatchOutcome::Resolved { tone: Err(e), .. } = &outcome {
                    eprintln!("warning: {e}");
                }
                print_notifications(config, &sent);
            }
        }
        Command::Button(position) => {
            let (_, sent) = host.handle(InputEvent::Button(position));
            print_notifications(config, &sent);
        }
        Command::Cancel => {
            host.handle(InputEvent::Cancel);
        }
        Command::Language => print_notifications(config, &host.next_language()),
        Command::Mode => print_notifications(config, &host.next_mode()),
        Command::Layout => {
            host.next_layout();
            println!("keys: {}", host.view().keys.join(" "));
        }
        Command::Suggest(slots) => host.set_suggestions(slots),
        Command::Show => {}
        Command::Json => {
            println!("{}", serde_json::to_string_pretty(&host.view())?);
            return Ok(());
        }
    }
    print_view(&host.view());
    Ok(())
}

fn run_repl(config: &T9Config) -> Result<()> {
    let mut host = create_host(config);

    println!("t9 keypad REPL. Type key names separated by spaces (e.g. `4 4 * 0`).");
    println!("Commands: :lang :mode :layout :esc :btn <n> :suggest a|b|c :show :json");
    println!("Ctrl-D to exit.");
    print_view(&host.view());

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        match line.parse::<Command>() {
            Ok(command) => run_command(&mut host, config, command)?,
            Err(e) => eprintln!("error: {e}"),
        }
        io::stdout().flush()?;
    }
    Ok(())
}

fn print_layouts() {
    for layout in LayoutMode::ALL {
        println!("{}:", layout.label());
        for row in glyphs(*layout).chunks(3) {
            println!("  {}", row.join(" "));
        }
    }
}

fn print_tones(table: &ToneTable) -> Result<()> {
    for symbol in CanonicalSymbol::ALL {
        let spec = table.get(symbol)?;
        println!("{symbol}  {:>6.1} Hz + {:>6.1} Hz", spec.low, spec.high);
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;
    init_tracing(config.log_filter.as_deref());

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => run_repl(&config),
        Commands::Layouts => {
            print_layouts();
            Ok(())
        }
        Commands::Tones => print_tones(&config.base().tone_table()),
        Commands::Config => {
            print!("{}", config.to_toml_string()?);
            Ok(())
        }
    }
}
