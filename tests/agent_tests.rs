//! Agents plugged into a live engine.

use std::io::Cursor;

use uno_engine::agents::{
    Agent, GreedyAgent, HumanAgent, ModelAgent, PassiveAgent, Reply, ScriptedAgent,
};
use uno_engine::cards::Card;
use uno_engine::core::{ActionRequest, GameConfig, Outcome, PlayerId};
use uno_engine::events::NullSink;
use uno_engine::rules::{Engine, Submission};

fn card(code: &str) -> Card {
    code.parse().unwrap()
}

fn p(id: u32) -> PlayerId {
    PlayerId::new(id)
}

/// Blank-slate table with a chosen top card and hands.
fn arranged(players: usize, top: &str, hands: &[(u32, &[&str])]) -> Engine {
    let config = GameConfig::new(players).blank_slate().with_seed(11);
    let mut engine = Engine::with_sink(config, NullSink).unwrap();
    engine.set_top_card(card(top)).unwrap();
    for (id, codes) in hands {
        let cards: Vec<Card> = codes.iter().map(|c| card(c)).collect();
        engine.set_hand(p(*id), &cards).unwrap();
    }
    engine
}

/// Typed terminal commands become requests for the seat.
#[test]
fn test_human_agent_plays_from_input() {
    let mut engine = arranged(2, "R4", &[(1, &["R9", "B2"]), (2, &["G1", "G2"])]);
    let human = HumanAgent::new(Cursor::new(b"play r9\n".to_vec()), Vec::new());
    let mut agents: Vec<Box<dyn Agent>> = vec![Box::new(human), Box::new(PassiveAgent)];

    let outcomes = engine.play_round(&mut agents).unwrap();

    assert_eq!(outcomes, vec![Outcome::Played(card("R9"))]);
    assert_eq!(engine.top_card(), card("R9"));
    assert_eq!(engine.current_player(), p(2));
}

/// Running out of input means passing, not an error.
#[test]
fn test_human_agent_eof_passes() {
    let mut engine = arranged(2, "R4", &[(1, &["R9"]), (2, &["G1"])]);
    let mut human = HumanAgent::new(Cursor::new(Vec::new()), Vec::new());

    let ctx = engine.broadcast(p(1)).unwrap();
    let reply = human.act(&ctx);

    assert!(matches!(reply, Reply::Pass));
    assert_eq!(engine.submit_reply(p(1), reply).unwrap(), Submission::Passed);
    assert_eq!(engine.queue_len(), 0);
}

/// The model sees the rendered prompt including its own hand.
#[test]
fn test_model_agent_sees_table() {
    let mut engine = arranged(2, "Y5", &[(1, &["Y8", "WW"]), (2, &["B3"])]);
    let mut prompts = Vec::new();
    let mut model = ModelAgent::new(|prompt: &str| {
        prompts.push(prompt.to_string());
        r#"{"action": "Play card", "card": "Y8"}"#.to_string()
    });

    let ctx = engine.broadcast(p(1)).unwrap();
    let reply = model.act(&ctx);
    drop(model);

    assert_eq!(engine.submit_reply(p(1), reply).unwrap(), Submission::Queued);
    assert_eq!(engine.process_next().unwrap(), Some(Outcome::Played(card("Y8"))));

    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("=== RULES ==="));
    assert!(prompts[0].contains("Y8 WW"));
    assert!(prompts[0].contains("Top card: Y5"));
}

/// A model naming a card it does not hold is told so.
#[test]
fn test_model_agent_missing_card() {
    let mut engine = arranged(2, "Y5", &[(1, &["Y8"]), (2, &["B3"])]);
    let mut model =
        ModelAgent::new(|_: &str| r#"{"action": "Play card", "card": "Y9"}"#.to_string());

    let ctx = engine.broadcast(p(1)).unwrap();
    let submission = engine.submit_reply(p(1), model.act(&ctx)).unwrap();

    assert!(matches!(submission, Submission::Rejected(_)));
    let ctx = engine.broadcast(p(1)).unwrap();
    assert_eq!(ctx.messages, vec!["You do not have card Y9 in your hand.".to_string()]);
    assert_eq!(ctx.hand, vec![card("Y8")]);
}

/// Greedy agents answer the owed draw before anything else.
#[test]
fn test_greedy_agent_pays_draw_debt() {
    let mut engine = arranged(2, "Y5", &[(1, &["Y8", "B2"]), (2, &["B3"])]);
    engine.set_pending_draw(2);
    let mut agents: Vec<Box<dyn Agent>> =
        vec![Box::new(GreedyAgent::relaxed()), Box::new(PassiveAgent)];

    assert_eq!(engine.play_round(&mut agents).unwrap(), vec![Outcome::Drew]);
    assert_eq!(engine.play_round(&mut agents).unwrap(), vec![Outcome::Drew]);
    assert_eq!(engine.pending_draw_count(), 0);
    assert_eq!(
        engine.play_round(&mut agents).unwrap(),
        vec![Outcome::Played(card("Y8"))]
    );
}

/// A vigilant greedy agent catches an opponent left on one card.
#[test]
fn test_vigilant_greedy_catches() {
    let mut engine = arranged(2, "Y5", &[(1, &["Y8", "B2"]), (2, &["B3"])]);
    let mut agents: Vec<Box<dyn Agent>> =
        vec![Box::new(GreedyAgent::new()), Box::new(PassiveAgent)];

    let outcomes = engine.play_round(&mut agents).unwrap();

    assert_eq!(
        outcomes,
        vec![Outcome::Caught {
            target: p(2),
            penalty: 7
        }]
    );
    assert_eq!(engine.player(p(2)).unwrap().hand_size(), 8);
}

/// Passing and "Do nothing" differ only in whether a request is queued.
#[test]
fn test_pass_versus_do_nothing() {
    let mut engine = arranged(2, "Y5", &[(1, &["Y8"]), (2, &["B3"])]);
    let mut agents: Vec<Box<dyn Agent>> = vec![
        Box::new(ScriptedAgent::new([Reply::Pass, ActionRequest::nothing().into()])),
        Box::new(PassiveAgent),
    ];

    assert!(engine.play_round(&mut agents).unwrap().is_empty());
    assert!(engine.history().is_empty());

    assert_eq!(engine.play_round(&mut agents).unwrap(), vec![Outcome::NoEffect]);
    assert_eq!(engine.history().len(), 1);
    assert_eq!(engine.current_player(), p(1));
}
