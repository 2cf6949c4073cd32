mod client;
mod error;
mod resource;

pub use error::BoardError;
pub use resource::*;

use client::Client;
use log::*;

const POSTS_PATH: &str = "api/posts";

/// Responsible for asynchronous interaction with the board API including
/// validation of response data against explicitly-defined types.
///
pub struct Board {
    client: Client,
}

impl Board {
    /// Returns a new instance for the API at the given base URL.
    ///
    pub fn new(api_url: &str) -> Board {
        debug!("Initializing board client for {}...", api_url);
        Board {
            client: Client::new(api_url),
        }
    }

    /// Returns every post in server order.
    ///
    pub async fn posts(&self) -> Result<Vec<Post>, BoardError> {
        debug!("Requesting posts...");
        let posts: Vec<Post> = self.client.get(POSTS_PATH).await?;
        debug!("Retrieved {} posts", posts.len());
        Ok(posts)
    }

    /// Creates a post and returns the server's representation of it.
    ///
    pub async fn create_post(&self, new_post: &NewPost) -> Result<Post, BoardError> {
        debug!(
            "Creating post '{}' (image: {})...",
            new_post.title,
            new_post.image.is_some()
        );
        self.client.post(POSTS_PATH, new_post).await
    }
}
