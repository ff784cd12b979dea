use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::Parser;
use room_profile::{Demo, DemoConfig, User};

/// Render one of the demo screens as markup and drive it from stdin.
///
/// Commands: `show`, `click <label> [n]`, `quit`.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Which screen to mount.
    #[arg(long, value_enum, default_value_t = Demo::Room)]
    demo: Demo,

    /// Start the room with the light on.
    #[arg(long)]
    lit: bool,

    /// JSON file with the profile user (avatar, name, followers, following).
    #[arg(long, value_name = "PATH")]
    user: Option<PathBuf>,

    /// Print the first frame and exit without reading commands.
    #[arg(long)]
    once: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let user = match &cli.user {
        Some(path) => User::from_json_file(path)?,
        None => User::default(),
    };
    let config = DemoConfig {
        user,
        initial_lit: cli.lit,
    };

    let root = room_profile::root(cli.demo, &config);
    let stdin = io::stdin();
    let input: Box<dyn BufRead> = if cli.once {
        Box::new(io::empty())
    } else {
        Box::new(stdin.lock())
    };
    lumen_platform::run_headless_app(root, input, io::stdout().lock())
}
