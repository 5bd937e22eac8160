//! Scene-scoped publish/subscribe channel.
//!
//! The tick loop publishes interaction requests here instead of reaching into
//! dialog state directly. Each subscriber has its own mailbox filtered by
//! event kind; [`EventBus::teardown`] drops every mailbox at once.

use std::collections::VecDeque;

use super::entity::Character;
use super::layout::CardId;

/// Something the scene loop wants the dialog layer to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneEvent {
    /// Open this card's dialog.
    OpenCard(CardId),
    /// Start the NPC conversation.
    InteractNpc,
    /// The controlled character changed to this one.
    CharacterSwitch(Character),
}

/// Payload-free discriminant of [`SceneEvent`], used for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// [`SceneEvent::OpenCard`].
    OpenCard,
    /// [`SceneEvent::InteractNpc`].
    InteractNpc,
    /// [`SceneEvent::CharacterSwitch`].
    CharacterSwitch,
}

impl SceneEvent {
    /// Discriminant.
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            SceneEvent::OpenCard(_) => EventKind::OpenCard,
            SceneEvent::InteractNpc => EventKind::InteractNpc,
            SceneEvent::CharacterSwitch(_) => EventKind::CharacterSwitch,
        }
    }
}

/// Handle returned by [`EventBus::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u32);

#[derive(Debug)]
struct Mailbox {
    id: u32,
    kinds: Vec<EventKind>,
    queue: VecDeque<SceneEvent>,
}

/// In-process event channel owned by one scene.
#[derive(Debug, Default)]
pub struct EventBus {
    next_id: u32,
    mailboxes: Vec<Mailbox>,
}

impl EventBus {
    /// Empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a mailbox receiving events of the given kinds.
    pub fn subscribe(&mut self, kinds: &[EventKind]) -> Subscription {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.mailboxes.push(Mailbox {
            id,
            kinds: kinds.to_vec(),
            queue: VecDeque::new(),
        });
        Subscription(id)
    }

    /// Close a mailbox, discarding anything still queued. Returns whether it
    /// was open.
    pub fn unsubscribe(&mut self, sub: Subscription) -> bool {
        let before = self.mailboxes.len();
        self.mailboxes.retain(|m| m.id != sub.0);
        self.mailboxes.len() != before
    }

    /// Queue `event` for every interested subscriber. Returns how many
    /// mailboxes received it.
    pub fn publish(&mut self, event: SceneEvent) -> usize {
        let kind = event.kind();
        let mut delivered = 0;
        for mailbox in &mut self.mailboxes {
            if mailbox.kinds.contains(&kind) {
                mailbox.queue.push_back(event);
                delivered += 1;
            }
        }
        delivered
    }

    /// Take every queued event for `sub`, oldest first.
    pub fn drain(&mut self, sub: Subscription) -> Vec<SceneEvent> {
        self.mailboxes
            .iter_mut()
            .find(|m| m.id == sub.0)
            .map(|m| m.queue.drain(..).collect())
            .unwrap_or_default()
    }

    /// Number of open mailboxes.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.mailboxes.len()
    }

    /// Close every mailbox.
    pub fn teardown(&mut self) {
        self.mailboxes.clear();
    }
}
