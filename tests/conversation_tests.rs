//! Integration tests for the conversation controller.
//!
//! These tests drive `Conversation` against scripted in-memory backends, so
//! they exercise the full turn cycle without a running server.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use cosmos::conversation::{DISRUPTION_MESSAGE, PLAN_NOTICE};
use cosmos::{
    ChatMessage, Conversation, Error, FinalPlanTurn, MessageKind, NavigatorApi, NavigatorTurn,
    PlainTurn, QuestionTurn, Renderer, Result, Sender, TurnOutcome, UserProfile,
    render_transcript,
};

/// A backend double that replays a fixed script of turns and profiles.
struct ScriptedApi {
    turns: Mutex<VecDeque<Result<NavigatorTurn>>>,
    profiles: Mutex<VecDeque<Result<UserProfile>>>,
    turn_calls: AtomicUsize,
    profile_calls: AtomicUsize,
}

impl ScriptedApi {
    fn new(turns: Vec<Result<NavigatorTurn>>) -> Self {
        Self {
            turns: Mutex::new(turns.into()),
            profiles: Mutex::new(VecDeque::new()),
            turn_calls: AtomicUsize::new(0),
            profile_calls: AtomicUsize::new(0),
        }
    }

    fn with_profiles(mut self, profiles: Vec<Result<UserProfile>>) -> Self {
        self.profiles = Mutex::new(profiles.into());
        self
    }

    fn turn_calls(&self) -> usize {
        self.turn_calls.load(Ordering::SeqCst)
    }

    fn profile_calls(&self) -> usize {
        self.profile_calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl NavigatorApi for ScriptedApi {
    async fn navigator_turn(&self, _message: &str) -> Result<NavigatorTurn> {
        self.turn_calls.fetch_add(1, Ordering::SeqCst);
        self.turns
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Error::unknown("turn script exhausted")))
    }

    async fn fetch_profile(&self) -> Result<UserProfile> {
        self.profile_calls.fetch_add(1, Ordering::SeqCst);
        self.profiles
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(UserProfile::default()))
    }
}

/// A renderer that records everything it is asked to display.
#[derive(Default)]
struct RecordingRenderer {
    lines: Vec<String>,
    notices: Vec<String>,
    errors: Vec<String>,
}

impl Renderer for RecordingRenderer {
    fn print_message(&mut self, message: &ChatMessage) {
        let sender = match message.sender {
            Sender::User => "user",
            Sender::Agent => "agent",
        };
        match &message.kind {
            MessageKind::Plain => {
                self.lines.push(format!("{sender}: {}", message.text));
            }
            MessageKind::Question { options } => {
                self.lines.push(format!("{sender}: {}", message.text));
                for option in options {
                    self.lines.push(format!("option: {option}"));
                }
            }
            MessageKind::FinalPlan => {
                for line in message.text.lines() {
                    self.lines.push(format!("{sender}: {line}"));
                }
            }
        }
    }

    fn print_notice(&mut self, notice: &str) {
        self.notices.push(notice.to_string());
    }

    fn print_error(&mut self, error: &str) {
        self.errors.push(error.to_string());
    }
}

fn transcript_texts(conversation: &Conversation<ScriptedApi>) -> Vec<(Sender, String)> {
    conversation
        .transcript()
        .messages()
        .iter()
        .map(|m| (m.sender, m.text.clone()))
        .collect()
}

#[tokio::test]
async fn user_message_is_echoed_before_any_response() {
    // Even when the backend errors, the trimmed user message is in the
    // transcript first.
    let api = ScriptedApi::new(vec![Err(Error::connection("refused", None))]);
    let mut conversation = Conversation::new(api);
    let mut renderer = RecordingRenderer::default();

    conversation
        .submit_text("  What skills do I need?  ", &mut renderer)
        .await;

    let messages = conversation.transcript().messages();
    assert_eq!(messages[0].sender, Sender::User);
    assert_eq!(messages[0].text, "What skills do I need?");
}

#[tokio::test]
async fn empty_input_is_a_no_op() {
    let api = ScriptedApi::new(vec![]);
    let mut conversation = Conversation::new(api);
    let mut renderer = RecordingRenderer::default();

    for input in ["", "   ", "\t\n"] {
        let outcome = conversation.submit_text(input, &mut renderer).await;
        assert_eq!(outcome, TurnOutcome::Ignored);
    }

    assert_eq!(conversation.message_count(), 0);
    assert_eq!(conversation.api().turn_calls(), 0);
    assert!(renderer.lines.is_empty());
}

#[tokio::test]
async fn question_turn_exposes_options_in_order() {
    let api = ScriptedApi::new(vec![Ok(NavigatorTurn::Question(QuestionTurn::new(
        "Pick one",
        vec!["A".to_string(), "B".to_string()],
    )))]);
    let mut conversation = Conversation::new(api);
    let mut renderer = RecordingRenderer::default();

    let outcome = conversation.submit_text("hi", &mut renderer).await;
    assert_eq!(outcome, TurnOutcome::Question);

    let last = conversation.transcript().last().unwrap();
    assert_eq!(
        last.kind.options(),
        Some(&["A".to_string(), "B".to_string()][..])
    );
    assert_eq!(
        conversation.transcript().pending_options(),
        Some(&["A".to_string(), "B".to_string()][..])
    );
}

#[tokio::test]
async fn option_selection_equals_free_text_submission() {
    let script = || {
        vec![Ok(NavigatorTurn::Plain(PlainTurn::new(
            "Great choice!",
        )))]
    };

    let mut by_option = Conversation::new(ScriptedApi::new(script()));
    let mut by_text = Conversation::new(ScriptedApi::new(script()));
    let mut renderer_a = RecordingRenderer::default();
    let mut renderer_b = RecordingRenderer::default();

    let outcome_a = by_option.submit_option("B", &mut renderer_a).await;
    let outcome_b = by_text.submit_text("B", &mut renderer_b).await;

    assert_eq!(outcome_a, outcome_b);
    assert_eq!(transcript_texts(&by_option), transcript_texts(&by_text));
    assert_eq!(renderer_a.lines, renderer_b.lines);
}

#[tokio::test]
async fn final_plan_renders_lines_and_reloads_profile_once() {
    let reloaded = UserProfile {
        level: 5,
        xp: 900,
        ..UserProfile::default()
    };
    let api = ScriptedApi::new(vec![Ok(NavigatorTurn::FinalPlan(FinalPlanTurn::new(
        "Step 1\nStep 2",
    )))])
    .with_profiles(vec![Ok(reloaded.clone())]);
    let mut conversation = Conversation::new(api);
    let mut renderer = RecordingRenderer::default();

    let outcome = conversation.submit_text("promotion", &mut renderer).await;
    assert_eq!(outcome, TurnOutcome::PlanDelivered);

    // The plan renders as two separated lines.
    assert!(renderer.lines.contains(&"agent: Step 1".to_string()));
    assert!(renderer.lines.contains(&"agent: Step 2".to_string()));
    assert!(!renderer.lines.iter().any(|l| l.contains("Step 1\nStep 2")));

    // Exactly one profile reload, and it replaced the snapshot.
    assert_eq!(conversation.api().profile_calls(), 1);
    assert_eq!(conversation.profile(), &reloaded);
    assert_eq!(renderer.notices, vec![PLAN_NOTICE.to_string()]);
}

#[tokio::test]
async fn transport_failure_appends_one_fallback_message() {
    let api = ScriptedApi::new(vec![Err(Error::internal_server("boom"))]);
    let mut conversation = Conversation::new(api);
    let mut renderer = RecordingRenderer::default();

    let outcome = conversation.submit_text("hello", &mut renderer).await;
    assert_eq!(outcome, TurnOutcome::Failed);

    let texts = transcript_texts(&conversation);
    assert_eq!(
        texts,
        vec![
            (Sender::User, "hello".to_string()),
            (Sender::Agent, DISRUPTION_MESSAGE.to_string()),
        ]
    );
    assert_eq!(conversation.api().profile_calls(), 0);

    // The user may simply submit again.
    let outcome = conversation.submit_text("hello again", &mut renderer).await;
    assert_eq!(outcome, TurnOutcome::Failed);
    assert_eq!(conversation.message_count(), 4);
}

#[tokio::test]
async fn plain_response_scenario() {
    let api = ScriptedApi::new(vec![Ok(NavigatorTurn::Plain(PlainTurn::new(
        "Focus on Python and SQL.",
    )))]);
    let mut conversation = Conversation::new(api);
    let mut renderer = RecordingRenderer::default();

    let outcome = conversation
        .submit_text("What skills do I need?", &mut renderer)
        .await;
    assert_eq!(outcome, TurnOutcome::Answered);

    let texts = transcript_texts(&conversation);
    assert_eq!(
        texts,
        vec![
            (Sender::User, "What skills do I need?".to_string()),
            (Sender::Agent, "Focus on Python and SQL.".to_string()),
        ]
    );
}

#[tokio::test]
async fn transcript_replay_is_idempotent() {
    let api = ScriptedApi::new(vec![
        Ok(NavigatorTurn::Question(QuestionTurn::new(
            "Pick one",
            vec!["A".to_string(), "B".to_string()],
        ))),
        Ok(NavigatorTurn::Plain(PlainTurn::new("Noted."))),
    ]);
    let mut conversation = Conversation::new(api);
    let mut renderer = RecordingRenderer::default();
    conversation.submit_text("hi", &mut renderer).await;
    conversation.submit_option("A", &mut renderer).await;

    let mut first = RecordingRenderer::default();
    render_transcript(conversation.transcript().messages(), &mut first);
    let mut second = RecordingRenderer::default();
    render_transcript(conversation.transcript().messages(), &mut second);

    assert!(!first.lines.is_empty());
    assert_eq!(first.lines, second.lines);
}

#[tokio::test]
async fn failed_profile_reload_keeps_previous_profile() {
    let seeded = UserProfile {
        level: 2,
        coins: 100,
        ..UserProfile::default()
    };
    let api = ScriptedApi::new(vec![Ok(NavigatorTurn::FinalPlan(FinalPlanTurn::new(
        "Step 1",
    )))])
    .with_profiles(vec![Err(Error::service_unavailable("down"))]);
    let mut conversation = Conversation::with_profile(api, seeded.clone());
    let mut renderer = RecordingRenderer::default();

    let outcome = conversation.submit_text("promotion", &mut renderer).await;
    assert_eq!(outcome, TurnOutcome::PlanDelivered);
    assert_eq!(conversation.profile(), &seeded);
    assert_eq!(renderer.errors.len(), 1);

    // The plan message itself still landed.
    assert!(conversation.transcript().last().unwrap().kind.is_final_plan());
}
