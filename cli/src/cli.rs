use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "shipit")]
#[command(
    author,
    version,
    about = "Publishes package releases: version bump, changelog, tag, GitHub release, announcement"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Publish a new release end to end
    Release {
        /// Version increment to apply without prompting
        #[clap(value_enum)]
        version_type: Option<VersionType>,

        /// Force the release even if the repository is not clean (development only)
        #[clap(long, default_value_t = false)]
        force: bool,

        /// Enable verbose output with additional information
        #[clap(short, long, default_value_t = false)]
        verbose: bool,
    },

    /// Render the release notes for the commits since the last tag, without releasing
    Notes {
        /// Version label for the section heading (defaults to the next patch version)
        #[clap(long)]
        version: Option<String>,

        /// Enable verbose output with additional information
        #[clap(short, long, default_value_t = false)]
        verbose: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum VersionType {
    Major,
    Minor,
    Patch,
}
