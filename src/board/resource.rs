#[cfg(test)]
use fake::Dummy;
use serde::{Deserialize, Serialize};

/// Defines post data structure.
///
/// A post has no stable key on the client; its identity is its position in
/// the board list.
///
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[cfg_attr(test, derive(Dummy))]
pub struct Post {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl Post {
    /// Returns the image reference if the post carries a non-empty one.
    ///
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref().filter(|image| !image.is_empty())
    }
}

/// Defines the request body for creating a post.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn post_ignores_unknown_fields() {
        let post: Post = serde_json::from_value(json!({
            "_id": "65f1",
            "title": "A",
            "content": "short",
            "createdAt": "2024-03-01T00:00:00Z",
        }))
        .unwrap();
        assert_eq!(post.title, "A");
        assert_eq!(post.image, None);
    }

    #[test]
    fn post_accepts_null_image() {
        let post: Post =
            serde_json::from_value(json!({ "title": "A", "content": "b", "image": null }))
                .unwrap();
        assert_eq!(post.image(), None);
    }

    #[test]
    fn post_without_content_is_rejected() {
        assert!(serde_json::from_value::<Post>(json!({ "title": "A" })).is_err());
    }

    #[test]
    fn empty_image_is_treated_as_absent() {
        let post = Post {
            title: "A".to_string(),
            content: "b".to_string(),
            image: Some(String::new()),
        };
        assert_eq!(post.image(), None);
    }

    #[test]
    fn new_post_omits_missing_image() {
        let body = serde_json::to_value(NewPost {
            title: "A".to_string(),
            content: "b".to_string(),
            image: None,
        })
        .unwrap();
        assert_eq!(body, json!({ "title": "A", "content": "b" }));
    }
}
