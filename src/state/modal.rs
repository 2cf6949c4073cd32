//! Overlay visibility.

use crate::board::Post;

/// Tracks the create overlay and the post detail overlay.
///
/// The two slots are independent: nothing stops both from being open at
/// once, the UI just never surfaces a way to do it from the keyboard.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalCoordinator {
    create_open: bool,
    viewed_post: Option<Post>,
}

impl ModalCoordinator {
    pub fn open_create(&mut self) {
        self.create_open = true;
    }

    pub fn close_create(&mut self) {
        self.create_open = false;
    }

    pub fn is_create_open(&self) -> bool {
        self.create_open
    }

    /// Show the post in the detail overlay. The post is stored by value.
    ///
    pub fn show(&mut self, post: Post) {
        self.viewed_post = Some(post);
    }

    pub fn close_detail(&mut self) {
        self.viewed_post = None;
    }

    pub fn viewed_post(&self) -> Option<&Post> {
        self.viewed_post.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::{Fake, Faker};

    #[test]
    fn initially_closed() {
        let modals = ModalCoordinator::default();
        assert!(!modals.is_create_open());
        assert!(modals.viewed_post().is_none());
    }

    #[test]
    fn create_open_close() {
        let mut modals = ModalCoordinator::default();
        modals.open_create();
        assert!(modals.is_create_open());
        modals.close_create();
        assert!(!modals.is_create_open());
    }

    #[test]
    fn show_then_show_other() {
        let mut modals = ModalCoordinator::default();
        let first: Post = Faker.fake();
        let second: Post = Faker.fake();
        modals.show(first);
        modals.close_detail();
        modals.show(second.to_owned());
        assert_eq!(modals.viewed_post(), Some(&second));
    }

    #[test]
    fn overlays_are_independent() {
        let mut modals = ModalCoordinator::default();
        let post: Post = Faker.fake();
        modals.open_create();
        modals.show(post.to_owned());
        assert!(modals.is_create_open());
        assert_eq!(modals.viewed_post(), Some(&post));
        modals.close_detail();
        assert!(modals.is_create_open());
    }
}
