use crate::commands::ProfileArgs;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Show a profile
    Get {
        /// Identity ID (UUID)
        #[arg(long)]
        id: String,
    },

    /// Change profile fields; omitted flags are left as they are
    Update {
        /// Identity ID (UUID)
        #[arg(long)]
        id: String,

        #[arg(long)]
        handle: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[command(flatten)]
        profile: ProfileArgs,
    },
}
