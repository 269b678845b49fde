use clap::Subcommand;

#[derive(Subcommand)]
pub enum PointsCommands {
    /// Replace the balance
    Set {
        /// Identity ID (UUID)
        #[arg(long)]
        id: String,

        /// New balance (not negative)
        #[arg(long)]
        value: i64,
    },

    /// Add a signed amount to the balance
    Add {
        /// Identity ID (UUID)
        #[arg(long)]
        id: String,

        /// Amount to add; negative values spend points
        #[arg(long, allow_hyphen_values = true)]
        value: i64,
    },
}
