//! The board's in-memory post collection.

use crate::board::Post;

/// Holds the authoritative list of posts for the session.
///
/// The list changes only through [`PostStore::replace_all`] after a fetch
/// and [`PostStore::append`] after a create.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostStore {
    posts: Vec<Post>,
}

impl PostStore {
    /// Replace the list wholesale, keeping the given order.
    ///
    pub fn replace_all(&mut self, posts: Vec<Post>) -> &mut Self {
        self.posts = posts;
        self
    }

    /// Append a created post to the end of the list. No deduplication.
    ///
    pub fn append(&mut self, post: Post) -> &mut Self {
        self.posts.push(post);
        self
    }

    pub fn get(&self, index: usize) -> Option<&Post> {
        self.posts.get(index)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Post> {
        self.posts.iter()
    }

    pub fn as_slice(&self) -> &[Post] {
        &self.posts
    }
}
