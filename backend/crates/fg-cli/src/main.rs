//! facegate - fg-server command-line client
//!
//! # Examples
//!
//! ```bash
//! # Enroll with a captured descriptor
//! facegate enroll --handle alice --email alice@example.com --descriptor face.json
//!
//! # Log in and keep the token
//! facegate login --descriptor face.json --pretty
//!
//! # Spend points
//! facegate points add --id <id> --value -5 --token <token>
//! ```

mod cli;
mod commands;
mod points_commands;
mod profile_commands;

use crate::{
    cli::Cli,
    commands::{Commands, ProfileArgs},
    points_commands::PointsCommands,
    profile_commands::ProfileCommands,
};

use fg_cli::{
    CliClientResult, Client, ProfileUpdate, SignupDetails, read_descriptor_file,
};

use std::process::ExitCode;

use clap::Parser;
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let client = Client::new(&cli.server, cli.token.as_deref());

    let result = run(&client, cli.command).await;

    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(client: &Client, command: Commands) -> CliClientResult<Value> {
    match command {
        Commands::Enroll {
            handle,
            email,
            descriptor,
            profile,
        } => {
            let details = SignupDetails {
                handle,
                email,
                display_name: profile.display_name,
                avatar: profile.avatar,
                pronouns: profile.pronouns,
                age_group: profile.age_group,
                adhd_subtype: profile.adhd_subtype,
            };

            match descriptor {
                Some(path) => {
                    let descriptor = read_descriptor_file(path).await?;
                    client.signup_face(&details, descriptor.as_slice()).await
                }
                None => client.signup_email(&details).await,
            }
        }

        Commands::Login { descriptor } => {
            let descriptor = read_descriptor_file(descriptor).await?;
            client.login_face(descriptor.as_slice()).await
        }

        Commands::Session => client.current_session().await,

        Commands::Profile { action } => match action {
            ProfileCommands::Get { id } => client.get_profile(&id).await,
            ProfileCommands::Update {
                id,
                handle,
                email,
                profile,
            } => {
                let update = profile_update(handle, email, profile);
                client.update_profile(&id, &update).await
            }
        },

        Commands::Points { action } => match action {
            PointsCommands::Set { id, value } => client.set_points(&id, value).await,
            PointsCommands::Add { id, value } => client.add_points(&id, value).await,
        },
    }
}

fn profile_update(
    handle: Option<String>,
    email: Option<String>,
    profile: ProfileArgs,
) -> ProfileUpdate {
    ProfileUpdate {
        handle,
        email,
        display_name: profile.display_name,
        avatar: profile.avatar,
        pronouns: profile.pronouns,
        age_group: profile.age_group,
        adhd_subtype: profile.adhd_subtype,
    }
}
