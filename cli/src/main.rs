//! Warbler — command-line front end
//!
//! Drives the Warbler data model without a web layer.
//!
//! ```sh
//! # Create the schema in the configured database
//! warbler migrate
//!
//! # Sign up and log in
//! warbler signup testuser1 testuser1@test.com secret --location canada
//! warbler login testuser1 secret
//!
//! # Follow and read the home timeline
//! warbler follow testuser1 testuser2
//! warbler timeline testuser1
//!
//! # Use a throwaway database
//! warbler --database-url "sqlite://./warbler-test.db?mode=rwc" migrate
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info};

use warbler::domain::{Message, SignupDto, UpdateProfileDto, User};
use warbler::{init_tracing, AppConfig, AppError, Warbler};

/// Warbler — users, follows and messages from the command line.
#[derive(Parser, Debug)]
#[command(
    name = "warbler",
    version,
    about = "Command-line front end for the Warbler data model",
    long_about = "Command-line front end for the Warbler data model.\n\n\
                  Default config: ~/.config/warbler/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "WARBLER_CONFIG")]
    config: Option<PathBuf>,

    /// Override the database URL.
    #[arg(long)]
    database_url: Option<String>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run pending database migrations and exit.
    Migrate,
    /// Create a user with a hashed password.
    Signup {
        username: String,
        email: String,
        password: String,
        #[arg(long)]
        image_url: Option<String>,
        #[arg(long)]
        header_image_url: Option<String>,
        #[arg(long)]
        bio: Option<String>,
        #[arg(long)]
        location: Option<String>,
    },
    /// Check a username/password pair.
    Login { username: String, password: String },
    /// Print a user's profile as JSON.
    Show { username: String },
    /// Edit profile fields.
    UpdateProfile {
        username: String,
        #[arg(long)]
        new_username: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        image_url: Option<String>,
        #[arg(long)]
        header_image_url: Option<String>,
        #[arg(long)]
        bio: Option<String>,
        #[arg(long)]
        location: Option<String>,
    },
    /// FOLLOWER starts following FOLLOWED.
    Follow { follower: String, followed: String },
    /// FOLLOWER stops following FOLLOWED.
    Unfollow { follower: String, followed: String },
    /// List who a user follows.
    Following { username: String },
    /// List a user's followers.
    Followers { username: String },
    /// Post a message (at most 140 characters).
    Post { username: String, text: String },
    /// Show a user's home timeline.
    Timeline {
        username: String,
        #[arg(long)]
        limit: Option<u64>,
    },
    /// Like or unlike a message.
    Like { username: String, message_id: i32 },
    /// Delete a user together with their messages, likes and follows.
    DeleteUser { username: String },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(warbler::default_config_path);

    let mut config = match AppConfig::load(&config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load config from {}: {}", config_path.display(), e);
            return ExitCode::FAILURE;
        }
    };

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(ref url) = cli.database_url {
        config.database.url = url.clone();
    }
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }

    init_tracing(&config);
    info!("Configuration loaded from {}", config_path.display());

    let app = match Warbler::connect(&config).await {
        Ok(app) => app,
        Err(e) => {
            error!("Failed to start: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&app, cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(app: &Warbler, command: Command) -> Result<(), AppError> {
    match command {
        Command::Migrate => {
            println!("Database is up to date");
        }
        Command::Signup {
            username,
            email,
            password,
            image_url,
            header_image_url,
            bio,
            location,
        } => {
            let user = app
                .users
                .signup(SignupDto {
                    username: Some(username),
                    email: Some(email),
                    password,
                    image_url,
                    location,
                    bio,
                    header_image_url,
                })
                .await?;
            println!("{}", user);
        }
        Command::Login { username, password } => {
            match app.users.authenticate(&username, &password).await? {
                Some(user) => println!("Hello, {}!", user.username),
                None => println!("Invalid credentials."),
            }
        }
        Command::Show { username } => {
            let user = app.users.require_user(&username).await?;
            let counts = app.follows.follow_counts(user.id).await?;
            let messages = app.messages.messages_for_user(user.id).await?;
            let profile = serde_json::json!({
                "user": user,
                "following": counts.following,
                "followers": counts.followers,
                "messages": messages.len(),
            });
            println!(
                "{}",
                serde_json::to_string_pretty(&profile).unwrap_or_else(|_| profile.to_string())
            );
        }
        Command::UpdateProfile {
            username,
            new_username,
            email,
            image_url,
            header_image_url,
            bio,
            location,
        } => {
            let user = app.users.require_user(&username).await?;
            let updated = app
                .users
                .update_profile(
                    user.id,
                    UpdateProfileDto {
                        username: new_username,
                        email,
                        image_url,
                        header_image_url,
                        bio,
                        location,
                    },
                )
                .await?;
            println!("{}", updated);
        }
        Command::Follow { follower, followed } => {
            let (a, b) = resolve_pair(app, &follower, &followed).await?;
            app.follows.follow(a.id, b.id).await?;
            println!("{} now follows {}", a.username, b.username);
        }
        Command::Unfollow { follower, followed } => {
            let (a, b) = resolve_pair(app, &follower, &followed).await?;
            app.follows.unfollow(a.id, b.id).await?;
            println!("{} no longer follows {}", a.username, b.username);
        }
        Command::Following { username } => {
            let user = app.users.require_user(&username).await?;
            print_users(&app.follows.following(user.id).await?);
        }
        Command::Followers { username } => {
            let user = app.users.require_user(&username).await?;
            print_users(&app.follows.followers(user.id).await?);
        }
        Command::Post { username, text } => {
            let user = app.users.require_user(&username).await?;
            let message = app.messages.post(user.id, &text).await?;
            print_messages(&[message]);
        }
        Command::Timeline { username, limit } => {
            let user = app.users.require_user(&username).await?;
            print_messages(&app.messages.timeline(user.id, limit).await?);
        }
        Command::Like {
            username,
            message_id,
        } => {
            let user = app.users.require_user(&username).await?;
            let liked = app.messages.toggle_like(user.id, message_id).await?;
            println!(
                "Message {} {}",
                message_id,
                if liked { "liked" } else { "unliked" }
            );
        }
        Command::DeleteUser { username } => {
            let user = app.users.require_user(&username).await?;
            app.users.delete_user(user.id).await?;
            println!("Deleted {}", user);
        }
    }

    Ok(())
}

async fn resolve_pair(app: &Warbler, first: &str, second: &str) -> Result<(User, User), AppError> {
    Ok((
        app.users.require_user(first).await?,
        app.users.require_user(second).await?,
    ))
}

fn print_users(users: &[User]) {
    if users.is_empty() {
        println!("(none)");
    }
    for user in users {
        println!("{}", user);
    }
}

fn print_messages(messages: &[Message]) {
    if messages.is_empty() {
        println!("(no messages)");
    }
    for m in messages {
        println!(
            "#{} [{}] user {}: {}",
            m.id,
            m.timestamp.format("%Y-%m-%d %H:%M"),
            m.user_id,
            m.text
        );
    }
}
