//! folderauth - folder-scoped delegated role administration
//!
//! Usage:
//!   folderauth permissions              - List permissions delegable to folder roles
//!   folderauth roles --folder <F>       - List roles a delegate of F can see
//!   folderauth create-role ...          - Create a folder role
//!   folderauth delete-role <ROLE>       - Delete a folder role
//!   folderauth assign <ROLE> <SID>      - Assign a sid to a role
//!   folderauth unassign <ROLE> <SID>    - Remove a sid from a role
//!   folderauth check <SID> <PERM> <F>   - Check a permission on a folder

#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use folderauth::{
    Config, FolderAuthError, FolderAuthService, FolderPath, FolderRoleCreationRequest, Result,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "folderauth")]
#[command(version)]
#[command(about = "Folder-scoped delegated role administration", long_about = None)]
struct Cli {
    /// Configuration file (YAML); environment variables are used otherwise
    #[arg(short, long, env = "FOLDERAUTH_CONFIG")]
    config: Option<PathBuf>,

    /// Act as this sid through the delegated folder surface
    #[arg(long, global = true)]
    actor: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List permissions delegable to folder roles
    Permissions,

    /// List the roles a delegate of a folder can see
    Roles {
        /// Full folder name
        #[arg(long)]
        folder: String,
    },

    /// Create a folder role
    CreateRole {
        /// Role name
        name: String,
        /// Folder the role applies to (repeatable)
        #[arg(long = "folder", required = true)]
        folders: Vec<String>,
        /// Permission granted by the role (repeatable)
        #[arg(long = "permission")]
        permissions: Vec<String>,
    },

    /// Delete a folder role
    DeleteRole {
        /// Role name
        name: String,
        /// Folder to act on when delegating
        #[arg(long)]
        folder: Option<String>,
    },

    /// Assign a sid to a role
    Assign {
        role: String,
        sid: String,
        /// Folder to act on when delegating
        #[arg(long)]
        folder: Option<String>,
    },

    /// Remove a sid from a role
    Unassign {
        role: String,
        sid: String,
        /// Folder to act on when delegating
        #[arg(long)]
        folder: Option<String>,
    },

    /// Check whether a sid holds a permission on a folder
    Check {
        sid: String,
        permission: String,
        folder: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path).await?,
        None => Config::from_env()?,
    };

    let service = FolderAuthService::start(config.folder_auth()).await?;
    execute(&service, cli.actor.as_deref(), cli.command)?;
    service.shutdown().await
}

/// Run one command against the service
///
/// Folder arguments are canonicalised the same way on the admin and the
/// delegated path, so both address the same roles.
fn execute(service: &FolderAuthService, actor: Option<&str>, command: Commands) -> Result<()> {
    match command {
        Commands::Permissions => {
            for permission in service.safe_permissions() {
                println!("{}", permission);
            }
        }
        Commands::Roles { folder } => {
            let folder = FolderPath::canonical_name(&folder);
            let roles = match actor {
                Some(actor) => service.delegate_for(&folder)?.folder_roles(actor)?,
                None => service.list_visible_roles(&folder),
            };
            for role in roles {
                println!(
                    "{}\t[{}]\t{}",
                    role.name,
                    role.permissions.iter().cloned().collect::<Vec<_>>().join(","),
                    role.sids.iter().cloned().collect::<Vec<_>>().join(","),
                );
            }
        }
        Commands::CreateRole {
            name,
            folders,
            permissions,
        } => {
            let folders: Vec<String> = folders
                .iter()
                .map(|folder| FolderPath::canonical_name(folder))
                .collect();
            match actor {
                Some(actor) => {
                    let folder = delegated_folder(&folders)?;
                    service.delegate_for(folder)?.add_folder_role(
                        actor,
                        FolderRoleCreationRequest::new(name, Vec::<String>::new(), permissions),
                    )?;
                }
                None => service.create_role(&name, folders, permissions)?,
            }
        }
        Commands::DeleteRole { name, folder } => match actor {
            Some(actor) => {
                let folder = required_folder(folder)?;
                service
                    .delegate_for(&folder)?
                    .delete_folder_role(actor, &name)?;
            }
            None => service.delete_role(&name)?,
        },
        Commands::Assign { role, sid, folder } => match actor {
            Some(actor) => {
                let folder = required_folder(folder)?;
                service
                    .delegate_for(&folder)?
                    .assign_sid(actor, &role, &sid)?;
            }
            None => service.assign_sid(&role, &sid)?,
        },
        Commands::Unassign { role, sid, folder } => match actor {
            Some(actor) => {
                let folder = required_folder(folder)?;
                service
                    .delegate_for(&folder)?
                    .remove_sid(actor, &role, &sid)?;
            }
            None => service.remove_sid(&role, &sid)?,
        },
        Commands::Check {
            sid,
            permission,
            folder,
        } => {
            let folder = FolderPath::canonical_name(&folder);
            let granted = service.has_permission(&sid, &permission, &folder);
            println!("{}", if granted { "granted" } else { "denied" });
        }
    }

    Ok(())
}

/// Delegated creation names exactly one folder
fn delegated_folder(folders: &[String]) -> Result<&str> {
    match folders {
        [folder] => Ok(folder),
        _ => Err(FolderAuthError::invalid_argument(
            "Delegated roles apply to exactly one folder",
        )),
    }
}

fn required_folder(folder: Option<String>) -> Result<String> {
    folder
        .map(|f| FolderPath::canonical_name(&f))
        .ok_or_else(|| FolderAuthError::invalid_argument("--folder is required with --actor"))
}
