use crate::board::{Board, BoardError, NewPost};
use crate::state::{Draft, State};
use crate::utils::image::{encode_data_url, ImageError};
use log::*;
use std::error::Error as _;
use std::sync::Arc;
use tokio::{sync::Mutex, task::JoinHandle};

/// Specify different network event types.
///
#[derive(Debug, Clone)]
pub enum Event {
    FetchPosts,
    CreatePost { draft: Draft },
}

/// Failures of network events. `Fetch` leaves the post list as it was;
/// the create variants leave the list, the draft and the overlay as they were.
///
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("Failed to fetch posts: {0}")]
    Fetch(#[source] BoardError),

    #[error("Failed to create post: {0}")]
    Create(#[source] BoardError),

    #[error("Failed to encode post image: {0}")]
    EncodeImage(#[source] ImageError),
}

impl NetworkError {
    pub fn is_create_failure(&self) -> bool {
        matches!(self, NetworkError::Create(_) | NetworkError::EncodeImage(_))
    }
}

/// Specify struct for managing state with network events. Clones share the
/// same state and board.
///
#[derive(Clone)]
pub struct Handler {
    state: Arc<Mutex<State>>,
    board: Arc<Board>,
}

impl Handler {
    /// Return new instance with reference to state.
    ///
    pub fn new(state: Arc<Mutex<State>>, board: Arc<Board>) -> Self {
        Handler { state, board }
    }

    /// Run the event as its own task on the current runtime and log any
    /// failure.
    ///
    pub fn spawn(&self, event: Event) -> JoinHandle<()> {
        let handler = self.clone();
        tokio::spawn(async move {
            if let Err(e) = handler.handle(event).await {
                report(&e);
            }
        })
    }

    /// Handle network events by type.
    ///
    pub async fn handle(&self, event: Event) -> Result<(), NetworkError> {
        debug!("Processing network event '{:?}'...", event);
        match event {
            Event::FetchPosts => self.fetch_posts().await?,
            Event::CreatePost { draft } => self.create_post(draft).await?,
        }
        Ok(())
    }

    /// Replace the post list with the server's.
    ///
    async fn fetch_posts(&self) -> Result<(), NetworkError> {
        info!("Fetching posts...");
        let posts = self.board.posts().await.map_err(NetworkError::Fetch)?;
        info!("Received {} posts.", posts.len());
        let mut state = self.state.lock().await;
        state.set_posts(posts);
        Ok(())
    }

    /// Encode the draft image if one was chosen, create the post and append
    /// it. The state lock is only taken once the post exists.
    ///
    async fn create_post(&self, draft: Draft) -> Result<(), NetworkError> {
        let image = match draft.image() {
            Some(file) => {
                debug!("Encoding image {}...", file.0.display());
                Some(
                    encode_data_url(&file.0)
                        .await
                        .map_err(NetworkError::EncodeImage)?,
                )
            }
            None => None,
        };
        let new_post = NewPost {
            title: draft.title,
            content: draft.content,
            image,
        };

        let post = self
            .board
            .create_post(&new_post)
            .await
            .map_err(NetworkError::Create)?;
        info!("Post '{}' created.", post.title);

        let mut state = self.state.lock().await;
        state.append_post(post);
        state.finish_submission();
        Ok(())
    }
}

/// Log a failed event with its causes.
///
fn report(e: &NetworkError) {
    error!("Failed to handle network event: {}", e);
    let mut source = e.source();
    while let Some(err) = source {
        error!("  Caused by: {}", err);
        source = err.source();
    }
    if e.is_create_failure() {
        warn!("Post was not created; the draft is kept for another attempt.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Post;
    use crate::state::DraftField;
    use fake::{Fake, Faker};
    use httpmock::MockServer;
    use serde_json::json;
    use std::io::Write;
    use std::time::Duration;

    fn typed_draft(title: &str, content: &str) -> Draft {
        let mut draft = Draft::default();
        for c in title.chars() {
            draft.push_char(DraftField::Title, c);
        }
        for c in content.chars() {
            draft.push_char(DraftField::Content, c);
        }
        draft
    }

    /// State with the create overlay open and the draft typed in.
    async fn composing_state(draft: &Draft) -> Arc<Mutex<State>> {
        let state = Arc::new(Mutex::new(State::default()));
        {
            let mut guard = state.lock().await;
            guard.open_create_overlay();
            for c in draft.title.chars() {
                guard.add_draft_char(c);
            }
            guard.set_draft_field(DraftField::Image);
            for c in draft.image_path().chars() {
                guard.add_draft_char(c);
            }
            guard.set_draft_field(DraftField::Content);
            for c in draft.content.chars() {
                guard.add_draft_char(c);
            }
        }
        state
    }

    #[tokio::test]
    async fn fetch_replaces_posts() {
        let posts: [Post; 2] = Faker.fake();
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/api/posts");
                then.status(200).json_body(json!([
                    { "title": posts[0].title, "content": posts[0].content, "image": posts[0].image },
                    { "title": posts[1].title, "content": posts[1].content, "image": posts[1].image },
                ]));
            })
            .await;

        let state = Arc::new(Mutex::new(State::default()));
        let board = Arc::new(Board::new(&server.base_url()));
        let handler = Handler::new(Arc::clone(&state), board);
        handler.handle(Event::FetchPosts).await.unwrap();
        handler.handle(Event::FetchPosts).await.unwrap();

        assert_eq!(state.lock().await.get_posts().as_slice(), posts.as_slice());
        mock.assert_hits_async(2).await;
    }

    #[tokio::test]
    async fn fetch_failure_keeps_list() {
        let existing: Post = Faker.fake();
        let server = MockServer::start();
        server
            .mock_async(|when, then| {
                when.method("GET").path("/api/posts");
                then.status(502);
            })
            .await;

        let state = Arc::new(Mutex::new(State::default()));
        state.lock().await.set_posts(vec![existing.to_owned()]);
        let board = Arc::new(Board::new(&server.base_url()));
        let err = Handler::new(Arc::clone(&state), board)
            .handle(Event::FetchPosts)
            .await
            .unwrap_err();

        assert!(matches!(err, NetworkError::Fetch(_)));
        assert!(!err.is_create_failure());
        assert_eq!(state.lock().await.get_posts().as_slice(), &[existing]);
    }

    #[tokio::test]
    async fn fetch_shape_mismatch_is_failure() {
        let server = MockServer::start();
        server
            .mock_async(|when, then| {
                when.method("GET").path("/api/posts");
                then.status(200).json_body(json!([{ "title": 5 }]));
            })
            .await;

        let state = Arc::new(Mutex::new(State::default()));
        let board = Arc::new(Board::new(&server.base_url()));
        let err = Handler::new(Arc::clone(&state), board)
            .handle(Event::FetchPosts)
            .await
            .unwrap_err();
        assert!(matches!(err, NetworkError::Fetch(BoardError::Deserialization(_))));
        assert!(state.lock().await.get_posts().is_empty());
    }

    #[tokio::test]
    async fn create_without_image_omits_field() {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("POST")
                    .path("/api/posts")
                    .json_body(json!({ "title": "A", "content": "short" }));
                then.status(201)
                    .json_body(json!({ "title": "A", "content": "short", "image": null }));
            })
            .await;

        let draft = typed_draft("A", "short");
        let state = composing_state(&draft).await;
        state.lock().await.set_posts(vec![Faker.fake()]);
        let board = Arc::new(Board::new(&server.base_url()));
        Handler::new(Arc::clone(&state), board)
            .handle(Event::CreatePost { draft })
            .await
            .unwrap();

        mock.assert_async().await;
        let state = state.lock().await;
        assert_eq!(state.get_posts().len(), 2);
        assert_eq!(state.get_posts().get(1).map(|p| p.title.as_str()), Some("A"));
        assert!(state.get_draft().is_empty());
        assert!(!state.is_create_open());
    }

    #[tokio::test]
    async fn create_with_image_sends_data_url() {
        let mut file = tempfile::Builder::new().suffix(".gif").tempfile().unwrap();
        file.write_all(b"GIF89a").unwrap();
        let data_url = "data:image/gif;base64,R0lGODlh";

        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("POST").path("/api/posts").json_body(json!({
                    "title": "Cat",
                    "content": "look",
                    "image": data_url,
                }));
                then.status(201).json_body(json!({
                    "title": "Cat",
                    "content": "look",
                    "image": data_url,
                }));
            })
            .await;

        let mut draft = typed_draft("Cat", "look");
        draft.set_image_path(&file.path().to_string_lossy());
        let state = composing_state(&draft).await;
        let board = Arc::new(Board::new(&server.base_url()));
        Handler::new(Arc::clone(&state), board)
            .handle(Event::CreatePost { draft })
            .await
            .unwrap();

        mock.assert_async().await;
        let state = state.lock().await;
        assert_eq!(
            state.get_posts().get(0).and_then(|p| p.image()),
            Some(data_url)
        );
    }

    #[tokio::test]
    async fn unreadable_image_aborts_before_request() {
        let dir = tempfile::tempdir().unwrap();
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("POST").path("/api/posts");
                then.status(201).json_body(json!({ "title": "A", "content": "b" }));
            })
            .await;

        let mut draft = typed_draft("A", "b");
        draft.set_image_path(&dir.path().join("gone.png").to_string_lossy());
        let state = composing_state(&draft).await;
        let board = Arc::new(Board::new(&server.base_url()));
        let err = Handler::new(Arc::clone(&state), board)
            .handle(Event::CreatePost { draft: draft.to_owned() })
            .await
            .unwrap_err();

        assert!(matches!(err, NetworkError::EncodeImage(_)));
        assert!(err.is_create_failure());
        assert_eq!(mock.hits_async().await, 0);
        let state = state.lock().await;
        assert!(state.get_posts().is_empty());
        assert_eq!(state.get_draft(), &draft);
        assert!(state.is_create_open());
    }

    #[tokio::test]
    async fn create_failure_keeps_draft_and_overlay() {
        let server = MockServer::start();
        server
            .mock_async(|when, then| {
                when.method("POST").path("/api/posts");
                then.status(500);
            })
            .await;

        let draft = typed_draft("A", "b");
        let state = composing_state(&draft).await;
        let board = Arc::new(Board::new(&server.base_url()));
        let err = Handler::new(Arc::clone(&state), board)
            .handle(Event::CreatePost { draft: draft.to_owned() })
            .await
            .unwrap_err();

        assert!(matches!(err, NetworkError::Create(BoardError::ApiError { status: 500, .. })));
        let state = state.lock().await;
        assert!(state.get_posts().is_empty());
        assert_eq!(state.get_draft(), &draft);
        assert!(state.is_create_open());
    }

    #[tokio::test]
    async fn duplicate_submissions_create_two_posts() {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("POST").path("/api/posts");
                then.status(201).json_body(json!({ "title": "A", "content": "b" }));
            })
            .await;

        let draft = typed_draft("A", "b");
        let state = composing_state(&draft).await;
        let board = Arc::new(Board::new(&server.base_url()));
        let handler = Handler::new(Arc::clone(&state), board);
        handler
            .handle(Event::CreatePost { draft: draft.to_owned() })
            .await
            .unwrap();
        handler.handle(Event::CreatePost { draft }).await.unwrap();

        mock.assert_hits_async(2).await;
        assert_eq!(state.lock().await.get_posts().len(), 2);
    }

    #[tokio::test]
    async fn slow_fetch_does_not_hold_back_create() {
        let server = MockServer::start();
        server
            .mock_async(|when, then| {
                when.method("GET").path("/api/posts");
                then.status(200)
                    .delay(Duration::from_secs(5))
                    .json_body(json!([]));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method("POST").path("/api/posts");
                then.status(201).json_body(json!({ "title": "A", "content": "b" }));
            })
            .await;

        let draft = typed_draft("A", "b");
        let state = composing_state(&draft).await;
        let board = Arc::new(Board::new(&server.base_url()));
        let handler = Handler::new(Arc::clone(&state), board);
        let fetch = handler.spawn(Event::FetchPosts);
        let create = handler.spawn(Event::CreatePost { draft });

        tokio::time::timeout(Duration::from_secs(2), create)
            .await
            .expect("create waited for the fetch")
            .unwrap();
        {
            let state = state.lock().await;
            assert_eq!(state.get_posts().len(), 1);
            assert!(!state.is_create_open());
        }
        fetch.abort();
    }
}
