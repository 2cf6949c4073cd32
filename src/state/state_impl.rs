use crate::app::NetworkEventSender;
use crate::board::Post;
use crate::events::network::Event as NetworkEvent;
use crate::logger::LogEntries;
use crate::utils::truncate::DEFAULT_PREVIEW_LENGTH;
use log::*;

use super::{Clickable, Draft, DraftField, HitMap, ModalCoordinator, PostStore, StateError};

/// Houses data representative of application state.
///
pub struct State {
    net_sender: Option<NetworkEventSender>,
    posts: PostStore,
    selected: Option<usize>,
    draft: Draft,
    draft_field: DraftField,
    modals: ModalCoordinator,
    detail_scroll: u16,
    hits: HitMap,
    log_entries: LogEntries,
    preview_length: usize,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            net_sender: None,
            posts: PostStore::default(),
            selected: None,
            draft: Draft::default(),
            draft_field: DraftField::Title,
            modals: ModalCoordinator::default(),
            detail_scroll: 0,
            hits: HitMap::default(),
            log_entries: LogEntries::default(),
            preview_length: DEFAULT_PREVIEW_LENGTH,
        }
    }
}

impl State {
    pub fn new(net_sender: NetworkEventSender, log_entries: LogEntries, preview_length: usize) -> Self {
        State {
            net_sender: Some(net_sender),
            log_entries,
            preview_length,
            ..State::default()
        }
    }

    /// Number of characters of content shown per post in the list.
    ///
    pub fn get_preview_length(&self) -> usize {
        self.preview_length
    }

    /// Returns the formatted log entries captured so far.
    ///
    pub fn get_log_entries(&self) -> Vec<String> {
        self.log_entries.snapshot()
    }

    /// Queue a request for the network worker.
    ///
    fn dispatch(&self, event: NetworkEvent) -> Result<(), StateError> {
        let sender = self
            .net_sender
            .as_ref()
            .ok_or(StateError::NetworkUnavailable)?;
        sender
            .send(event)
            .map_err(|_| StateError::NetworkUnavailable)
    }

    // Posts

    pub fn get_posts(&self) -> &PostStore {
        &self.posts
    }

    /// Replace the post list after a fetch, keeping the selection in range.
    ///
    pub fn set_posts(&mut self, posts: Vec<Post>) -> &mut Self {
        self.posts.replace_all(posts);
        self.clamp_selection();
        self
    }

    /// Append a created post to the end of the list.
    ///
    pub fn append_post(&mut self, post: Post) -> &mut Self {
        self.posts.append(post);
        self.clamp_selection();
        self
    }

    fn clamp_selection(&mut self) {
        let len = self.posts.len();
        self.selected = match self.selected {
            _ if len == 0 => None,
            Some(i) => Some(i.min(len - 1)),
            None => Some(0),
        };
    }

    /// Ask the network worker to reload every post.
    ///
    pub fn refresh_posts(&self) -> Result<(), StateError> {
        debug!("Requesting post list refresh...");
        self.dispatch(NetworkEvent::FetchPosts)
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn select_next_post(&mut self) {
        if self.posts.is_empty() {
            return;
        }
        let next = match self.selected {
            Some(i) if i + 1 < self.posts.len() => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.selected = Some(next);
    }

    pub fn select_previous_post(&mut self) {
        if self.posts.is_empty() {
            return;
        }
        self.selected = Some(self.selected.map(|i| i.saturating_sub(1)).unwrap_or(0));
    }

    // Detail overlay

    /// Show the post at the list position in the detail overlay. The post is
    /// copied so later list changes do not alter what is displayed.
    ///
    pub fn open_post(&mut self, index: usize) -> Result<(), StateError> {
        let post = self
            .posts
            .get(index)
            .cloned()
            .ok_or(StateError::PostNotFound { index })?;
        debug!("Opening post {} '{}'", index, post.title);
        self.selected = Some(index);
        self.detail_scroll = 0;
        self.modals.show(post);
        Ok(())
    }

    pub fn open_selected_post(&mut self) -> Result<(), StateError> {
        match self.selected {
            Some(index) => self.open_post(index),
            None => Ok(()),
        }
    }

    pub fn close_post(&mut self) {
        self.modals.close_detail();
    }

    pub fn get_viewed_post(&self) -> Option<&Post> {
        self.modals.viewed_post()
    }

    pub fn scroll_detail_down(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_add(1);
    }

    pub fn scroll_detail_up(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_sub(1);
    }

    pub fn get_detail_scroll(&self) -> u16 {
        self.detail_scroll
    }

    // Create overlay

    pub fn open_create_overlay(&mut self) {
        self.draft_field = DraftField::Title;
        self.modals.open_create();
    }

    /// Close the create overlay and discard the draft.
    ///
    pub fn cancel_create(&mut self) {
        self.modals.close_create();
        self.draft.reset();
        self.draft_field = DraftField::Title;
    }

    pub fn is_create_open(&self) -> bool {
        self.modals.is_create_open()
    }

    pub fn get_draft(&self) -> &Draft {
        &self.draft
    }

    pub fn get_draft_field(&self) -> DraftField {
        self.draft_field
    }

    pub fn set_draft_field(&mut self, field: DraftField) {
        self.draft_field = field;
    }

    pub fn next_draft_field(&mut self) {
        self.draft_field = self.draft_field.next();
    }

    pub fn previous_draft_field(&mut self) {
        self.draft_field = self.draft_field.previous();
    }

    pub fn add_draft_char(&mut self, c: char) {
        self.draft.push_char(self.draft_field, c);
    }

    pub fn remove_draft_char(&mut self) {
        self.draft.pop_char(self.draft_field);
    }

    /// Queue creation of a post from a snapshot of the current draft. The
    /// draft stays as typed until the worker reports success.
    ///
    pub fn submit_draft(&self) -> Result<(), StateError> {
        info!("Submitting post '{}'...", self.draft.title);
        self.dispatch(NetworkEvent::CreatePost {
            draft: self.draft.clone(),
        })
    }

    /// Reset the draft and close the create overlay after a post was created.
    ///
    pub fn finish_submission(&mut self) {
        self.draft.reset();
        self.draft_field = DraftField::Title;
        self.modals.close_create();
    }

    // Mouse

    pub fn get_hits_mut(&mut self) -> &mut HitMap {
        &mut self.hits
    }

    /// Activate whatever is drawn topmost at the cell.
    ///
    pub fn click_at(&mut self, column: u16, row: u16) -> Result<(), StateError> {
        match self.hits.target_at(column, row) {
            Some(target) => self.click(target),
            None => Ok(()),
        }
    }

    pub fn click(&mut self, target: Clickable) -> Result<(), StateError> {
        debug!("Click on {:?}", target);
        match target {
            Clickable::CreateButton => self.open_create_overlay(),
            Clickable::Post(index) | Clickable::ReadMore(index) => self.open_post(index)?,
            Clickable::DraftField(DraftField::Submit) => self.submit_draft()?,
            Clickable::DraftField(DraftField::Cancel) => self.cancel_create(),
            Clickable::DraftField(field) => self.set_draft_field(field),
            Clickable::DetailBackdrop | Clickable::DetailClose => self.close_post(),
            Clickable::CreateBackdrop | Clickable::DetailContent => {}
        }
        Ok(())
    }
}
