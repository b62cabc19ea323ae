//! Posts CRUD walkthrough against a live API.
//!
//! Run with: cargo run --example crud
//!
//! Talks to jsonplaceholder.typicode.com, which fakes writes: created and
//! updated posts are echoed back but not persisted.

use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use postboard_lib::PostboardClient;
use postboard_lib::error::{ApiError, Error};
use postboard_lib::model::PostDraft;
use postboard_lib::outcome::try_catch;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );

    let client = PostboardClient::builder()
        .url("https://jsonplaceholder.typicode.com")
        .build()?;

    let posts = client.list_posts().await?;
    println!("Fetched {} posts; first title: {:?}", posts.len(), posts[0].title);

    let users = client.list_users().await?;
    println!("Fetched {} users", users.len());

    let draft = PostDraft {
        title: "Postboard demo".to_string(),
        body: "A body long enough to satisfy the thirty character rule.".to_string(),
        user_id: users.first().map(|u| u.id).unwrap_or(1),
    };

    // Submit-time validation before any request goes out.
    let mut form = draft.validation();
    if !form.validate_all_fields() {
        let error = form.validation_error().expect("form reported invalid");
        return Err(Error::Validation(error).into());
    }

    let created = client.create_post(&draft).await?;
    println!("Created post with id {}", created.id);

    let updated = client.update_post(1, &draft).await?;
    println!("Updated post 1: {:?}", updated.title);

    client.delete_post(1).await?;
    println!("Deleted post 1");

    // A miss classifies into the typed taxonomy instead of raising.
    let outcome = try_catch(|| async { client.get_post(9999).await }).await;
    match outcome {
        Ok(post) => println!("Unexpectedly found post: {:?}", post.title),
        Err(Error::Api(ApiError::NotFound { message })) => {
            println!("Post 9999 not found: {}", message)
        }
        Err(err) => println!("Request failed: {}", err),
    }

    Ok(())
}
