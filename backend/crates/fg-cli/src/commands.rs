use crate::{points_commands::PointsCommands, profile_commands::ProfileCommands};

use std::path::PathBuf;

use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Enroll a new identity (face signup when --descriptor is given)
    Enroll {
        #[arg(long)]
        handle: String,

        #[arg(long)]
        email: String,

        /// JSON file holding a 128-element descriptor
        #[arg(long)]
        descriptor: Option<PathBuf>,

        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Log in with a captured descriptor
    Login {
        /// JSON file holding a 128-element descriptor
        #[arg(long)]
        descriptor: PathBuf,
    },

    /// Show the identity behind --token
    Session,

    /// Profile operations
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },

    /// Points operations
    Points {
        #[command(subcommand)]
        action: PointsCommands,
    },
}

/// Optional profile attributes shared by enroll and profile update
#[derive(Args)]
pub(crate) struct ProfileArgs {
    #[arg(long)]
    pub(crate) display_name: Option<String>,

    /// Avatar URL or asset key
    #[arg(long)]
    pub(crate) avatar: Option<String>,

    #[arg(long)]
    pub(crate) pronouns: Option<String>,

    /// child, teen, adult or senior
    #[arg(long)]
    pub(crate) age_group: Option<String>,

    /// inattentive, hyperactive or combined
    #[arg(long)]
    pub(crate) adhd_subtype: Option<String>,
}
