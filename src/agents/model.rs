//! Agents backed by a text model.
//!
//! The model itself sits behind `TextModel`: anything that turns a prompt
//! into a completion. Inference can be slow; the engine simply waits.

use crate::rules::BroadcastContext;

use super::{Agent, Reply};

/// Game rules shown to text-driven agents.
pub const RULES: &str = include_str!("../../resources/rules.txt");

/// Reply-format instructions shown to text-driven agents.
pub const INSTRUCTIONS: &str = include_str!("../../resources/instructions.txt");

/// Strategy used when none is given.
pub const DEFAULT_STRATEGY: &str = "Do what you need to do to win the game.";

/// A text completion backend.
pub trait TextModel {
    /// Complete `prompt`. The reply should hold a single JSON request.
    fn complete(&mut self, prompt: &str) -> String;
}

impl<F> TextModel for F
where
    F: FnMut(&str) -> String,
{
    fn complete(&mut self, prompt: &str) -> String {
        self(prompt)
    }
}

/// Everything a text model is shown for one decision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prompt<'a> {
    pub rules: &'a str,
    pub instructions: &'a str,
    pub strategy: &'a str,
    pub context: Vec<String>,
}

impl<'a> Prompt<'a> {
    /// Prompt with the bundled rules and instructions.
    #[must_use]
    pub fn new(strategy: &'a str, context: &BroadcastContext) -> Self {
        Self {
            rules: RULES,
            instructions: INSTRUCTIONS,
            strategy,
            context: context.lines(),
        }
    }

    /// Render as one string, section by section.
    #[must_use]
    pub fn render(&self) -> String {
        let sections = [
            ("RULES", self.rules),
            ("INSTRUCTIONS", self.instructions),
            ("STRATEGY", self.strategy),
        ];

        let mut out = String::new();
        for (title, body) in sections {
            out.push_str("=== ");
            out.push_str(title);
            out.push_str(" ===\n");
            out.push_str(body.trim_end());
            out.push_str("\n\n");
        }
        out.push_str("Current Context:\n");
        out.push_str(&self.context.join("\n"));
        out.push('\n');
        out
    }
}

/// Asks a `TextModel` what to do and forwards its raw answer.
#[derive(Clone, Debug)]
pub struct ModelAgent<M> {
    model: M,
    strategy: String,
}

impl<M: TextModel> ModelAgent<M> {
    #[must_use]
    pub fn new(model: M) -> Self {
        Self {
            model,
            strategy: DEFAULT_STRATEGY.to_string(),
        }
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.strategy = strategy.into();
        self
    }

    #[must_use]
    pub fn strategy(&self) -> &str {
        &self.strategy
    }

    /// The prompt this agent would send for `context`.
    #[must_use]
    pub fn prompt(&self, context: &BroadcastContext) -> String {
        Prompt::new(&self.strategy, context).render()
    }
}

impl<M: TextModel> Agent for ModelAgent<M> {
    fn act(&mut self, context: &BroadcastContext) -> Reply {
        let prompt = self.prompt(context);
        let completion = self.model.complete(&prompt);
        tracing::trace!(player = context.player.0, %completion, "model replied");
        Reply::Text(completion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Color};
    use crate::core::PlayerId;
    use crate::rules::SeatSummary;

    fn context() -> BroadcastContext {
        BroadcastContext {
            player: PlayerId::new(2),
            is_turn: true,
            hand: vec!["R4".parse().unwrap()],
            table: vec![SeatSummary {
                player: PlayerId::new(2),
                hand_size: 1,
                shielded: false,
            }],
            draw_pile_size: 12,
            top_card: "R9".parse::<Card>().unwrap(),
            active_color: Some(Color::Red),
            must_draw: 0,
            messages: Vec::new(),
        }
    }

    #[test]
    fn test_prompt_sections() {
        let text = Prompt::new(DEFAULT_STRATEGY, &context()).render();
        assert!(text.starts_with("=== RULES ===\n"));
        assert!(text.contains("=== INSTRUCTIONS ===\n"));
        assert!(text.contains("=== STRATEGY ===\nDo what you need to do to win the game.\n"));
        assert!(text.ends_with("Current Context:\nCards\nR4\nPlayer | Cards | shielded:\n2 1 F\n12 card(s) in draw deck.\nTop card: R9\nMessages:\n"));
    }

    #[test]
    fn test_agent_forwards_completion() {
        let mut prompts = Vec::new();
        let mut agent = ModelAgent::new(|prompt: &str| {
            prompts.push(prompt.len());
            r#"{"action": "Play card", "card": "R4"}"#.to_string()
        })
        .with_strategy("Hold wild cards.");

        let reply = agent.act(&context());
        assert_eq!(reply, Reply::Text(r#"{"action": "Play card", "card": "R4"}"#.to_string()));
        assert_eq!(agent.strategy(), "Hold wild cards.");
        drop(agent);
        assert_eq!(prompts.len(), 1);
    }
}
