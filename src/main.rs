use std::path::PathBuf;
use std::sync::Arc;

use color_eyre::Result;
use tracing_subscriber::EnvFilter;

use optswitch::app::{self, App};
use optswitch::cli::{parse_args, usage, CliCommand};
use optswitch::scene;
use optswitch::terminal;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<()> {
    color_eyre::install()?;

    match parse_args(std::env::args()) {
        CliCommand::Version => {
            println!("optswitch {}", VERSION);
            Ok(())
        }
        CliCommand::Usage => {
            println!("{}", usage());
            Ok(())
        }
        CliCommand::Run { scene } => run_viewer(scene),
    }
}

/// Set up file logging. The TUI owns stdout, so tracing output goes to a
/// log file under the user's data directory; `OPTSWITCH_LOG` tunes the
/// filter. Logging is best-effort: the viewer still runs without it.
fn init_logging() {
    let Some(log_dir) = dirs::data_local_dir().map(|d| d.join("optswitch")) else {
        return;
    };
    if std::fs::create_dir_all(&log_dir).is_err() {
        return;
    }
    let Ok(log_file) = std::fs::File::options()
        .create(true)
        .append(true)
        .open(log_dir.join("optswitch.log"))
    else {
        return;
    };

    let filter = EnvFilter::try_from_env("OPTSWITCH_LOG")
        .unwrap_or_else(|_| EnvFilter::new("optswitch=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();
}

fn run_viewer(scene_path: Option<PathBuf>) -> Result<()> {
    init_logging();

    let scene = match &scene_path {
        Some(path) => scene::load_scene(path)?,
        None => scene::sample_scene(),
    };

    terminal::setup_panic_hook();
    let mut term = terminal::enter()?;

    let mut app = App::new(scene);
    let result = app::run(&mut term, &mut app);

    terminal::restore();
    result
}
