use argh::FromArgs;
use learn_aliases::app::{App, load_or_report};
use learn_aliases::console::Terminal;
use learn_aliases::env::{Config, Environment, LOG_VAR};
use learn_aliases::render::{self, Palette};
use learn_aliases::select::Selection;
use learn_aliases::stats::compute_stats;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(FromArgs)]
/// Interactive quiz to master your mac-dev-setup shortcuts. Run without flags for the menu.
struct Args {
    #[argh(switch)]
    /// show statistics and exit
    stats: bool,

    #[argh(switch)]
    /// start a quiz over all items immediately
    quick: bool,

    #[argh(switch)]
    /// disable colored output
    no_color: bool,

    #[argh(option)]
    /// definitions file to read instead of ~/.mac-dev-setup-aliases
    file: Option<PathBuf>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Args = argh::from_env();

    let env = Environment::new();
    let config = Config::resolve(&env, args.file.as_deref(), args.no_color);
    let palette = Palette::new(config.color);
    let mut stdout = io::stdout();

    let items = load_or_report(config.source.as_deref(), &mut stdout, &palette)?;
    if items.is_empty() {
        return Ok(());
    }

    if args.stats {
        render::stats(&mut stdout, &palette, &compute_stats(&items))?;
        return Ok(());
    }

    let mut app = App::new(items, palette, Box::new(Terminal::new()?), Box::new(stdout));
    if args.quick {
        app.quiz(&Selection::All)?;
    } else {
        app.run_menu()?;
    }
    Ok(())
}
