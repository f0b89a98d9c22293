use clap::{Args, Subcommand};

use crate::cli::subcommands::RenderCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Log in and store the session token.
    Login(LoginArgs),
    /// Change a password the server requires to be changed.
    ChangePassword(ChangePasswordArgs),
    /// End the session.
    Logout,
    /// Show the dashboard for the current session.
    Status,
    /// Update the current user's profile.
    Profile(ProfileArgs),
    /// Show server build information.
    Version,
    /// Search projects, components, vulnerabilities and licenses.
    Search(SearchArgs),
    /// Render dashboard fragments offline.
    Render {
        #[command(subcommand)]
        action: RenderCommands,
    },
}

#[derive(Clone, Debug, Args)]
pub struct LoginArgs {
    #[arg(short, long)]
    pub username: String,
    /// Password; read from stdin when omitted.
    #[arg(short, long)]
    pub password: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ChangePasswordArgs {
    #[arg(short, long)]
    pub username: String,
    /// Current password.
    #[arg(short, long)]
    pub password: String,
    #[arg(long)]
    pub new_password: String,
    /// Defaults to the new password.
    #[arg(long)]
    pub confirm_password: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ProfileArgs {
    #[arg(long)]
    pub fullname: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub new_password: Option<String>,
    #[arg(long, requires = "new_password")]
    pub confirm_password: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SearchArgs {
    /// Search text.
    pub query: String,
}
