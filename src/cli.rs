#[derive(clap::Subcommand, Debug, Clone)]
pub enum Command {
    /// Render the profile block to the terminal
    Preview {
        /// Query GitHub live instead of reading the cached snapshot
        #[arg(long)]
        fetch: bool,
    },
    /// Write dark_mode.svg and light_mode.svg
    Svg {
        /// Directory the SVG files are written into
        #[arg(long, default_value = ".")]
        out_dir: String,
    },
    /// Aggregate fresh stats and persist them to the snapshot store
    Save,
}

#[derive(clap::Parser, Debug)]
#[command(version, about = "NFO-style profile stats from Claude Code logs and GitHub")]
pub struct Args {
    /// GitHub login the remote stats are aggregated for
    #[arg(long, env = "NFOGEN_LOGIN", default_value = "octocat")]
    pub login: String,

    /// Claude Code projects directory. Defaults to ~/.claude/projects
    #[arg(long, env = "NFOGEN_CLAUDE_DIR")]
    pub claude_dir: Option<String>,

    /// Snapshot database path. Defaults to the user cache directory
    #[arg(long, env = "NFOGEN_DB_PATH")]
    pub db_path: Option<String>,

    /// Disable ANSI colors in terminal output
    #[arg(long)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Args {
    pub fn parse() -> Self {
        <Args as clap::Parser>::parse()
    }
}
