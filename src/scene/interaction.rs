//! Per-tick collision resolution between the player, the cards and the NPC.

use crate::constants::{CARD_COLLISION_PADDING, NPC_INTERACTION_DISTANCE};
use crate::geometry::{circular_interact, rect_overlap};

use super::entity::{Character, Entity};
use super::layout::{Card, CardId};

/// What the player can interact with right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Interaction {
    /// First card, in layout order, the player overlaps.
    pub active_card: Option<CardId>,
    /// Whether the NPC is close enough to talk to.
    pub npc_interactable: bool,
}

/// Resolve the interaction state for `player`.
///
/// NPC proximity is only evaluated when playing the primary character; the
/// secondary character never talks to itself.
#[must_use]
pub fn resolve_interaction(
    player: &Entity,
    npc: &Entity,
    character: Character,
    cards: &[Card],
) -> Interaction {
    let body = player.rect();
    let active_card = cards
        .iter()
        .find(|card| rect_overlap(&body, &card.rect, CARD_COLLISION_PADDING))
        .map(|card| card.id);
    let npc_interactable = character == Character::Frisk
        && circular_interact(&body, &npc.rect(), NPC_INTERACTION_DISTANCE);
    Interaction {
        active_card,
        npc_interactable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Language;
    use crate::geometry::{Point, Rect};
    use crate::scene::layout::compute_card_layout;

    fn card(id: CardId, rect: Rect) -> Card {
        Card {
            id,
            rect,
            title: "",
            lines: Vec::new(),
            icon: "",
        }
    }

    #[test]
    fn test_padding_extends_the_hit_box() {
        let cards = vec![card(CardId::Skills, Rect::new(100.0, 100.0, 50.0, 50.0))];
        let npc = Entity::at(Point::new(1000.0, 1000.0));
        // Right edge at 92: inside the 10px pad.
        let player = Entity::at(Point::new(60.0, 110.0));
        let hit = resolve_interaction(&player, &npc, Character::Frisk, &cards);
        assert_eq!(hit.active_card, Some(CardId::Skills));

        // Right edge at 90: touching the padded edge only.
        let player = Entity::at(Point::new(58.0, 110.0));
        let miss = resolve_interaction(&player, &npc, Character::Frisk, &cards);
        assert_eq!(miss.active_card, None);
    }

    #[test]
    fn test_first_card_in_list_order_wins() {
        let cards = vec![
            card(CardId::Projects, Rect::new(0.0, 0.0, 100.0, 100.0)),
            card(CardId::Profile, Rect::new(0.0, 0.0, 100.0, 100.0)),
        ];
        let player = Entity::at(Point::new(10.0, 10.0));
        let npc = Entity::at(Point::new(900.0, 900.0));
        let hit = resolve_interaction(&player, &npc, Character::Frisk, &cards);
        assert_eq!(hit.active_card, Some(CardId::Projects));
    }

    #[test]
    fn test_npc_only_for_primary_character() {
        let player = Entity::at(Point::new(0.0, 0.0));
        let npc = Entity::at(Point::new(40.0, 0.0));
        assert!(resolve_interaction(&player, &npc, Character::Frisk, &[]).npc_interactable);
        assert!(!resolve_interaction(&player, &npc, Character::Sans, &[]).npc_interactable);
    }

    #[test]
    fn test_npc_radius_is_strict() {
        let player = Entity::at(Point::new(0.0, 0.0));
        let npc = Entity::at(Point::new(100.0, 0.0));
        assert!(!resolve_interaction(&player, &npc, Character::Frisk, &[]).npc_interactable);
        let npc = Entity::at(Point::new(99.5, 0.0));
        assert!(resolve_interaction(&player, &npc, Character::Frisk, &[]).npc_interactable);
    }

    #[test]
    fn test_open_floor_has_no_card() {
        let cards = compute_card_layout(1200.0, Language::En);
        let player = Entity::at(Point::new(0.0, 0.0));
        let npc = Entity::at(Point::new(600.0, 900.0));
        assert_eq!(
            resolve_interaction(&player, &npc, Character::Frisk, &cards),
            Interaction::default()
        );
    }
}
