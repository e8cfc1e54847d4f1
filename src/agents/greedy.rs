//! A simple rule-based player.

use crate::cards::{Card, Color};
use crate::core::ActionRequest;
use crate::rules::BroadcastContext;

use super::{Agent, Reply};

/// Plays the first legal card it holds.
///
/// Priorities, highest first:
/// 1. On its turn with one legal card left and nothing owed: play it and win.
/// 2. Holding one card and unshielded: yell UNO.
/// 3. If vigilant, an opponent holds one unshielded card: yell UNO.
/// 4. Not its turn: pass.
/// 5. Cards owed: draw.
/// 6. Play the first legal non-wild card, else the first wild, naming the
///    color it holds most of.
/// 7. Draw.
#[derive(Clone, Copy, Debug)]
pub struct GreedyAgent {
    vigilant: bool,
}

impl Default for GreedyAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl GreedyAgent {
    /// A greedy agent that calls out opponents.
    #[must_use]
    pub const fn new() -> Self {
        Self { vigilant: true }
    }

    /// A greedy agent that only ever shields itself.
    #[must_use]
    pub const fn relaxed() -> Self {
        Self { vigilant: false }
    }

    #[must_use]
    pub const fn is_vigilant(&self) -> bool {
        self.vigilant
    }

    /// Pick a card to play, if any is legal.
    #[must_use]
    pub fn choose_card(context: &BroadcastContext) -> Option<ActionRequest> {
        let playable: Vec<Card> = context.playable().collect();
        let card = playable
            .iter()
            .copied()
            .find(|c| !c.is_wild())
            .or_else(|| playable.first().copied())?;

        if card.is_wild() {
            Some(ActionRequest::play_wild(card, Self::favorite_color(&context.hand, card)))
        } else {
            Some(ActionRequest::play(card))
        }
    }

    /// The color most common in `hand` once `playing` has left it.
    fn favorite_color(hand: &[Card], playing: Card) -> Color {
        let mut counts = [0usize; 4];
        let mut skipped = false;
        for &card in hand {
            if card == playing && !skipped {
                skipped = true;
                continue;
            }
            if let Some(color) = card.color() {
                counts[color as usize] += 1;
            }
        }

        Color::ALL
            .into_iter()
            .zip(counts)
            .fold((Color::ALL[0], 0), |best, (color, n)| if n > best.1 { (color, n) } else { best })
            .0
    }

    fn should_shield(context: &BroadcastContext) -> bool {
        context
            .seat(context.player)
            .is_some_and(|me| me.hand_size == 1 && !me.shielded)
    }

    fn can_catch(context: &BroadcastContext) -> bool {
        context
            .table
            .iter()
            .any(|s| s.player != context.player && s.hand_size == 1 && !s.shielded)
    }
}

impl Agent for GreedyAgent {
    fn act(&mut self, context: &BroadcastContext) -> Reply {
        let owes = context.must_draw > 0;

        if context.is_turn && !owes && context.hand.len() == 1 {
            if let Some(request) = Self::choose_card(context) {
                return request.into();
            }
        }

        if Self::should_shield(context) || (self.vigilant && Self::can_catch(context)) {
            return ActionRequest::yell_uno().into();
        }

        if !context.is_turn {
            return Reply::Pass;
        }

        if owes {
            return ActionRequest::draw().into();
        }

        Self::choose_card(context)
            .unwrap_or_else(ActionRequest::draw)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;
    use crate::rules::SeatSummary;

    fn card(code: &str) -> Card {
        code.parse().unwrap()
    }

    fn context(hand: &[&str], top: &str, is_turn: bool) -> BroadcastContext {
        let top = card(top);
        BroadcastContext {
            player: PlayerId::new(1),
            is_turn,
            hand: hand.iter().map(|c| card(c)).collect(),
            table: vec![
                SeatSummary {
                    player: PlayerId::new(1),
                    hand_size: hand.len(),
                    shielded: false,
                },
                SeatSummary {
                    player: PlayerId::new(2),
                    hand_size: 5,
                    shielded: false,
                },
            ],
            draw_pile_size: 50,
            top_card: top,
            active_color: top.color(),
            must_draw: 0,
            messages: Vec::new(),
        }
    }

    #[test]
    fn test_plays_matching_card_before_wild() {
        let ctx = context(&["WW", "B3", "Y9"], "Y5", true);
        assert_eq!(GreedyAgent::new().act(&ctx), ActionRequest::play(card("Y9")).into());
    }

    #[test]
    fn test_wild_names_most_common_color() {
        let ctx = context(&["WF", "G1", "G2", "R3"], "Y5", true);
        assert_eq!(
            GreedyAgent::new().act(&ctx),
            ActionRequest::play_wild(Card::wild_draw_four(), Color::Green).into()
        );
    }

    #[test]
    fn test_draws_when_stuck_or_owing() {
        let ctx = context(&["B3", "G1"], "Y5", true);
        assert_eq!(GreedyAgent::new().act(&ctx), ActionRequest::draw().into());

        let mut owing = context(&["Y3", "G1"], "YD", true);
        owing.must_draw = 2;
        assert_eq!(GreedyAgent::new().act(&owing), ActionRequest::draw().into());
    }

    #[test]
    fn test_passes_off_turn() {
        let ctx = context(&["Y3", "G1"], "Y5", false);
        assert_eq!(GreedyAgent::new().act(&ctx), Reply::Pass);
    }

    #[test]
    fn test_wins_before_shielding() {
        let ctx = context(&["Y3"], "Y5", true);
        assert_eq!(GreedyAgent::new().act(&ctx), ActionRequest::play(card("Y3")).into());

        let stuck = context(&["G3"], "Y5", true);
        assert_eq!(GreedyAgent::new().act(&stuck), ActionRequest::yell_uno().into());
    }

    #[test]
    fn test_catching_depends_on_vigilance() {
        let mut ctx = context(&["Y3", "G1"], "Y5", false);
        ctx.table[1].hand_size = 1;

        assert_eq!(GreedyAgent::new().act(&ctx), ActionRequest::yell_uno().into());
        assert_eq!(GreedyAgent::relaxed().act(&ctx), Reply::Pass);

        ctx.table[1].shielded = true;
        assert_eq!(GreedyAgent::new().act(&ctx), Reply::Pass);
    }
}
