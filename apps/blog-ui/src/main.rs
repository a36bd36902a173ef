//! # Blog UI
//!
//! Line-oriented terminal front end over the blog API.

use blog_client::{BlogApp, HttpPostsApi, PostDraft, PostsApi, view};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

mod command;

use command::{Command, HELP};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the rendered screen.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let api_url = std::env::var("API_URL").unwrap_or_else(|_| "http://127.0.0.1:8080".to_string());
    tracing::info!(api_url = %api_url, "Starting blog UI");

    let mut app = BlogApp::new(HttpPostsApi::new(api_url));
    app.load().await;
    print!("{}", view::render(app.state()));
    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => {
                println!("{HELP}");
                continue;
            }
            other => {
                if let Err(message) = dispatch(&mut app, other).await {
                    println!("{message}");
                    continue;
                }
            }
        }

        print!("{}", view::render(app.state()));
    }

    Ok(())
}

/// Apply one command to the app. `Err` carries a message for the user that
/// does not belong in the error slot.
async fn dispatch<A: PostsApi>(app: &mut BlogApp<A>, command: Command) -> Result<(), String> {
    match command {
        Command::Title(text) => app.new_post_mut().title = text,
        Command::Content(text) => app.new_post_mut().content = text,
        Command::Add => app.submit_new_post().await,
        Command::Edit(n) => {
            let id = post_at(app, n)?;
            app.start_editing(id);
        }
        Command::EditTitle(text) => edit_draft(app)?.title = text,
        Command::EditContent(text) => edit_draft(app)?.content = text,
        Command::Update => app.submit_edit().await,
        Command::Cancel => app.cancel_edit(),
        Command::Delete(n) => {
            let id = post_at(app, n)?;
            app.delete_post(id).await;
        }
        Command::Refresh => app.load().await,
        Command::Help | Command::Quit => {}
    }
    Ok(())
}

fn post_at<A: PostsApi>(app: &BlogApp<A>, n: usize) -> Result<Uuid, String> {
    app.state()
        .posts
        .get(n)
        .map(|p| p.id)
        .ok_or_else(|| format!("No post numbered {}", n + 1))
}

fn edit_draft<A: PostsApi>(app: &mut BlogApp<A>) -> Result<&mut PostDraft, String> {
    app.edit_draft_mut()
        .ok_or_else(|| "No post is being edited (use `edit <n>`)".to_string())
}
