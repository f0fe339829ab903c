mod admin;
mod dashboard;
mod stats;

use affidash_core::{
    normalize_username, AdminUseCase, FileProfileRepository, FileReferralRepository,
    FileSessionStore, MonthKey, OverviewUseCase, ProfileRepository, ReferralRecord,
    ReferralRepository, Role, Session, SessionProvider, DEFAULT_REF_BASE_URL,
};
use anyhow::{anyhow, Result};
use chrono::Local;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "affidash")]
#[command(about = "Affiliate referral dashboard", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in as an existing account
    Login { username: String },
    /// Sign out of the current session
    Logout,
    /// Show the signed-in account
    Whoami,
    /// Print the referral overview for the signed-in account
    Dashboard,
    /// Open the monthly referral chart
    Stats,
    /// Manage monthly referral rows
    Record {
        #[command(subcommand)]
        command: RecordCommands,
    },
    /// Account administration (admin only)
    Admin {
        #[command(subcommand)]
        command: AdminCommands,
    },
}

#[derive(Subcommand)]
enum RecordCommands {
    /// Insert or replace a month's referral count (month: YYYY-MM or YYYY-MM-01)
    Set {
        month: String,
        count: u32,
        /// Target account; defaults to the signed-in one
        #[arg(long)]
        user: Option<String>,
    },
}

#[derive(Subcommand)]
enum AdminCommands {
    /// Provision a new account and print its temporary credentials
    Create {
        username: String,
        #[arg(long, default_value = "affiliate")]
        role: String,
    },
    /// List all accounts with their referral totals
    Users,
}

fn parse_role(role_str: &str) -> Result<Role> {
    match role_str.to_lowercase().as_str() {
        "admin" => Ok(Role::Admin),
        "affiliate" | "aff" => Ok(Role::Affiliate),
        _ => Err(anyhow!("Unknown role: {}", role_str)),
    }
}

fn require_session(sessions: &FileSessionStore) -> Result<Session> {
    sessions
        .current()?
        .ok_or_else(|| anyhow!("Not signed in. Run `affidash login <username>` first."))
}

fn require_admin(sessions: &FileSessionStore, profiles: &FileProfileRepository) -> Result<Session> {
    let session = require_session(sessions)?;
    let profile = profiles.get(&session.user_id)?;
    if profile.role != Role::Admin {
        return Err(anyhow!("'{}' is not an admin account", profile.username));
    }
    Ok(session)
}

fn ref_base_url() -> String {
    std::env::var("AFFIDASH_REF_BASE_URL").unwrap_or_else(|_| DEFAULT_REF_BASE_URL.to_string())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let profiles = FileProfileRepository::new(None)?;
    let referrals = FileReferralRepository::new(None)?;
    let sessions = FileSessionStore::new(None)?;

    match cli.command {
        Commands::Login { username } => {
            let normalized = normalize_username(&username);
            let profile = profiles
                .find_by_username(&normalized)?
                .ok_or_else(|| anyhow!("Unknown username: {}", normalized))?;
            sessions.sign_in(Session {
                user_id: profile.id,
                username: profile.username.clone(),
            })?;
            println!("Signed in as {} ({})", profile.username, profile.role);
        }
        Commands::Logout => {
            sessions.sign_out()?;
            println!("Signed out.");
        }
        Commands::Whoami => match sessions.current()? {
            Some(session) => println!("{}", session.username),
            None => println!("Not signed in."),
        },
        Commands::Dashboard => {
            let session = require_session(&sessions)?;
            let usecase = OverviewUseCase::new(&referrals, &profiles, ref_base_url());
            let overview = usecase.overview(&session.user_id, Local::now().date_naive())?;
            dashboard::show_overview(&overview);
        }
        Commands::Stats => {
            let session = require_session(&sessions)?;
            let usecase = OverviewUseCase::new(&referrals, &profiles, ref_base_url());
            let overview = usecase.overview(&session.user_id, Local::now().date_naive())?;
            stats::run(&overview)?;
        }
        Commands::Record { command } => match command {
            RecordCommands::Set { month, count, user } => {
                let user_id = match user {
                    Some(name) => {
                        require_admin(&sessions, &profiles)?;
                        let normalized = normalize_username(&name);
                        profiles
                            .find_by_username(&normalized)?
                            .ok_or_else(|| anyhow!("Unknown username: {}", normalized))?
                            .id
                    }
                    None => require_session(&sessions)?.user_id,
                };
                let month = MonthKey::parse(&month)?;
                referrals.upsert(&user_id, ReferralRecord::new(month, count))?;
                println!("Recorded {} referrals for {}", count, month);
            }
        },
        Commands::Admin { command } => {
            // First run has no accounts yet, so the initial admin can
            // be created without a session.
            if !profiles.list()?.is_empty() {
                require_admin(&sessions, &profiles)?;
            }
            let admin = AdminUseCase::new(&profiles, &referrals);
            match command {
                AdminCommands::Create { username, role } => {
                    let role = parse_role(&role)?;
                    let created = admin.create_account(&username, role)?;
                    println!("Account created: {}", created.profile.username);
                    println!("  Login:              {}", created.email);
                    println!("  Temporary password: {}", created.temp_password);
                    println!("The password must be changed on first sign-in.");
                }
                AdminCommands::Users => {
                    admin::show_users(admin.list_accounts()?);
                }
            }
        }
    }
    Ok(())
}
