/**
 * Mind Vault CLI
 *
 * Command-line client for a Mind Vault server. Signs in, stores the session
 * token under ~/.mindvault/token, and exposes the content and sharing
 * endpoints as subcommands.
 */

use clap::{Parser, Subcommand};
use uuid::Uuid;

use mindvault::backend::content::types::CreateContentRequest;
use mindvault::client::api::{
    default_token_path, read_token_file, write_token_file, VaultClient,
};

const DEFAULT_API_URL: &str = "http://localhost:3000";

#[derive(Parser)]
#[command(name = "mindvault")]
#[command(about = "A personal bookmark/note vault", long_about = None)]
struct Cli {
    /// Server base URL (overrides MINDVAULT_URL)
    #[arg(long)]
    url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Register a new account")]
    Signup {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        password: String,
    },

    #[command(about = "Sign in and store the session token")]
    Signin {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        password: String,
    },

    #[command(about = "Add a content record")]
    Add {
        #[arg(short = 't', long, help = "One of: document, tweet, youtube, link")]
        content_type: String,
        #[arg(short, long)]
        link: String,
        #[arg(long)]
        title: String,
        #[arg(long, value_delimiter = ',', help = "Comma-separated tag titles")]
        tags: Vec<String>,
    },

    #[command(about = "List your content")]
    List,

    #[command(about = "Delete a content record by id")]
    Delete { id: Uuid },

    #[command(about = "Enable or disable sharing")]
    Share {
        #[arg(value_parser = ["on", "off"])]
        state: String,
    },

    #[command(about = "View a shared collection by its token")]
    View { token: String },
}

fn base_url(cli: &Cli) -> String {
    cli.url
        .clone()
        .or_else(|| std::env::var("MINDVAULT_URL").ok())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

fn client_with_stored_token(url: String) -> VaultClient {
    let token = default_token_path().and_then(|p| read_token_file(&p));
    match token {
        Some(token) => VaultClient::new(url).with_token(token),
        None => VaultClient::new(url),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let url = base_url(&cli);

    let result = match cli.command {
        Commands::Signup { username, password } => {
            let client = VaultClient::new(url);
            client.signup(&username, &password).await.map(|_| {
                println!("Account created. Sign in with `mindvault signin`.");
            })
        }
        Commands::Signin { username, password } => {
            let client = VaultClient::new(url);
            match client.signin(&username, &password).await {
                Ok(token) => {
                    let saved = default_token_path()
                        .ok_or_else(|| std::io::Error::other("no home directory"))
                        .and_then(|p| write_token_file(&p, &token));
                    match saved {
                        Ok(()) => {
                            println!("Signed in as {}.", username);
                            Ok(())
                        }
                        Err(e) => Err(e.into()),
                    }
                }
                Err(e) => Err(e),
            }
        }
        Commands::Add {
            content_type,
            link,
            title,
            tags,
        } => {
            let client = client_with_stored_token(url);
            let request = CreateContentRequest {
                content_type,
                link,
                title,
                tags,
            };
            client.create_content(&request).await.map(|_| {
                println!("Content created.");
            })
        }
        Commands::List => {
            let client = client_with_stored_token(url);
            client.list_content().await.map(|mut items| {
                // Server order is unspecified; newest first for display.
                items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                if items.is_empty() {
                    println!("No content yet.");
                }
                for item in items {
                    println!(
                        "{}  [{}] {} - {} (tags: {})",
                        item.id,
                        item.content_type,
                        item.title,
                        item.link,
                        item.tags.join(", ")
                    );
                }
            })
        }
        Commands::Delete { id } => {
            let client = client_with_stored_token(url);
            client.delete_content(id).await.map(|_| {
                println!("Content deleted.");
            })
        }
        Commands::Share { state } => {
            let client = client_with_stored_token(url);
            client.set_sharing(state == "on").await.map(|link| match link {
                Some(link) => println!("Sharing enabled: {}", link),
                None => println!("Sharing disabled."),
            })
        }
        Commands::View { token } => {
            let client = VaultClient::new(url);
            client.view_brain(&token).await.map(|brain| {
                println!("Shared by {}:", brain.shared_by);
                for item in brain.content {
                    println!("  [{}] {} - {}", item.content_type, item.title, item.link);
                }
            })
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
