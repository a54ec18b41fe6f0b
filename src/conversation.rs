//! The conversation controller.
//!
//! This module owns the guided dialogue with the AI navigator: it appends the
//! user's message to the transcript before the network round-trip, dispatches
//! on the response variant, and reloads the user profile when a turn delivers
//! the final plan. Failures never escape the controller; they become a short
//! in-character message in the transcript.

use crate::error::Result;
use crate::observability::{
    PROFILE_RELOAD_FAILURES, PROFILE_RELOADS, TURN_FAILURES, TURNS, TURNS_REJECTED,
};
use crate::render::Renderer;
use crate::transcript::Transcript;
use crate::types::{NavigatorTurn, UserProfile};

/// Shown in the transcript when a conversational turn fails.
pub const DISRUPTION_MESSAGE: &str =
    "Sorry, I encountered a cosmic disturbance. Please try again.";

/// Shown as a notice when a final plan arrives.
pub const PLAN_NOTICE: &str = "Cosmic career plan generated! Check your mission control.";

/// Backend operations the conversation controller depends on.
///
/// The HTTP client implements this; tests substitute scripted doubles.
#[async_trait::async_trait]
pub trait NavigatorApi: Send + Sync {
    /// Sends one message to the conversational endpoint and returns the
    /// navigator's turn.
    async fn navigator_turn(&self, message: &str) -> Result<NavigatorTurn>;

    /// Fetches the full user profile aggregate.
    async fn fetch_profile(&self) -> Result<UserProfile>;
}

/// How a submission was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The input was empty after trimming; nothing happened.
    Ignored,

    /// A turn was already in flight; the submission was dropped.
    Rejected,

    /// The navigator replied with a plain message.
    Answered,

    /// The navigator replied with a follow-up question.
    Question,

    /// The navigator delivered the final plan.
    PlanDelivered,

    /// The turn failed; the fallback message was appended.
    Failed,
}

/// Drives the request/response cycle with the navigator endpoint.
///
/// The controller owns the transcript and the current profile snapshot. At
/// most one conversational turn is in flight at a time; a submission made
/// while one is outstanding is rejected without side effects.
///
/// # Example
///
/// ```
/// use cosmos::{
///     Conversation, NavigatorApi, PlainTurn, NavigatorTurn, Renderer, TurnOutcome, UserProfile,
/// };
///
/// struct CannedApi;
///
/// #[async_trait::async_trait]
/// impl NavigatorApi for CannedApi {
///     async fn navigator_turn(&self, _message: &str) -> cosmos::Result<NavigatorTurn> {
///         Ok(NavigatorTurn::Plain(PlainTurn::new("Focus on Python and SQL.")))
///     }
///
///     async fn fetch_profile(&self) -> cosmos::Result<UserProfile> {
///         Ok(UserProfile::default())
///     }
/// }
///
/// struct Silent;
///
/// impl Renderer for Silent {
///     fn print_message(&mut self, _message: &cosmos::ChatMessage) {}
///     fn print_notice(&mut self, _notice: &str) {}
///     fn print_error(&mut self, _error: &str) {}
/// }
///
/// # tokio_test::block_on(async {
/// let mut conversation = Conversation::new(CannedApi);
/// let outcome = conversation
///     .submit_text("What skills do I need?", &mut Silent)
///     .await;
/// assert_eq!(outcome, TurnOutcome::Answered);
/// assert_eq!(conversation.message_count(), 2);
/// # });
/// ```
pub struct Conversation<A: NavigatorApi> {
    api: A,
    transcript: Transcript,
    profile: UserProfile,
    in_flight: bool,
}

impl<A: NavigatorApi> Conversation<A> {
    /// Creates a new conversation with the fallback profile.
    pub fn new(api: A) -> Self {
        Self::with_profile(api, UserProfile::default())
    }

    /// Creates a new conversation seeded with a known profile.
    pub fn with_profile(api: A, profile: UserProfile) -> Self {
        Self {
            api,
            transcript: Transcript::new(),
            profile,
            in_flight: false,
        }
    }

    /// Returns the underlying backend handle.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Returns the transcript.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Returns the current profile snapshot.
    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Returns the number of transcript messages.
    pub fn message_count(&self) -> usize {
        self.transcript.len()
    }

    /// Submits free-text input.
    ///
    /// Empty input (after trimming) is a no-op: no transcript entry, no
    /// request. Otherwise the user message is echoed into the transcript
    /// before the request is issued, so a failed turn still shows what the
    /// user said.
    pub async fn submit_text(
        &mut self,
        input: &str,
        renderer: &mut dyn Renderer,
    ) -> TurnOutcome {
        let message = input.trim();
        if message.is_empty() {
            return TurnOutcome::Ignored;
        }
        if self.in_flight {
            TURNS_REJECTED.click();
            return TurnOutcome::Rejected;
        }

        let echoed = self.transcript.push_user(message).clone();
        renderer.print_message(&echoed);

        TURNS.click();
        self.in_flight = true;
        let turn = self.api.navigator_turn(message).await;
        self.in_flight = false;

        match turn {
            Ok(NavigatorTurn::Question(question)) => {
                let appended = self
                    .transcript
                    .push_question(question.text, question.options)
                    .clone();
                renderer.print_message(&appended);
                TurnOutcome::Question
            }
            Ok(NavigatorTurn::FinalPlan(plan)) => {
                let appended = self.transcript.push_final_plan(plan.text).clone();
                renderer.print_message(&appended);
                renderer.print_notice(PLAN_NOTICE);
                // Plan completion changes profile state server-side.
                self.reload_profile(renderer).await;
                TurnOutcome::PlanDelivered
            }
            Ok(NavigatorTurn::Plain(plain)) => {
                let appended = self.transcript.push_agent(plain.text).clone();
                renderer.print_message(&appended);
                TurnOutcome::Answered
            }
            Err(_) => {
                TURN_FAILURES.click();
                let appended = self.transcript.push_agent(DISRUPTION_MESSAGE).clone();
                renderer.print_message(&appended);
                TurnOutcome::Failed
            }
        }
    }

    /// Submits a selected answer option.
    ///
    /// Option selection is free-text submission with the option's literal
    /// label as the message.
    pub async fn submit_option(
        &mut self,
        option: &str,
        renderer: &mut dyn Renderer,
    ) -> TurnOutcome {
        self.submit_text(option, renderer).await
    }

    /// Refreshes the profile snapshot from the backend.
    ///
    /// On failure the held profile is left unchanged and the error is
    /// surfaced through the renderer as a recoverable notice.
    pub async fn reload_profile(&mut self, renderer: &mut dyn Renderer) {
        PROFILE_RELOADS.click();
        match self.api.fetch_profile().await {
            Ok(profile) => {
                self.profile = profile;
            }
            Err(err) => {
                PROFILE_RELOAD_FAILURES.click();
                renderer.print_error(&format!("Could not refresh your profile: {err}"));
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn set_in_flight_for_test(&mut self, in_flight: bool) {
        self.in_flight = in_flight;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::types::{ChatMessage, PlainTurn};
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct ScriptedApi {
        turns: Mutex<Vec<Result<NavigatorTurn>>>,
        turn_calls: AtomicUsize,
    }

    impl ScriptedApi {
        fn new(turns: Vec<Result<NavigatorTurn>>) -> Self {
            let mut turns = turns;
            turns.reverse();
            Self {
                turns: Mutex::new(turns),
                turn_calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait::async_trait]
    impl NavigatorApi for ScriptedApi {
        async fn navigator_turn(&self, _message: &str) -> Result<NavigatorTurn> {
            self.turn_calls.fetch_add(1, Ordering::SeqCst);
            self.turns
                .lock()
                .unwrap()
                .pop()
                .unwrap_or_else(|| Err(Error::unknown("script exhausted")))
        }

        async fn fetch_profile(&self) -> Result<UserProfile> {
            Ok(UserProfile::default())
        }
    }

    #[derive(Default)]
    struct NullRenderer;

    impl Renderer for NullRenderer {
        fn print_message(&mut self, _message: &ChatMessage) {}
        fn print_notice(&mut self, _notice: &str) {}
        fn print_error(&mut self, _error: &str) {}
    }

    #[tokio::test]
    async fn in_flight_submission_is_rejected() {
        let api = ScriptedApi::new(vec![Ok(NavigatorTurn::Plain(PlainTurn::new("hi")))]);
        let mut conversation = Conversation::new(api);
        let mut renderer = NullRenderer;

        conversation.set_in_flight_for_test(true);
        let outcome = conversation.submit_text("hello", &mut renderer).await;
        assert_eq!(outcome, TurnOutcome::Rejected);
        assert_eq!(conversation.message_count(), 0);
        assert_eq!(conversation.api.turn_calls.load(Ordering::SeqCst), 0);

        conversation.set_in_flight_for_test(false);
        let outcome = conversation.submit_text("hello", &mut renderer).await;
        assert_eq!(outcome, TurnOutcome::Answered);
        assert_eq!(conversation.message_count(), 2);
    }

    #[tokio::test]
    async fn sequential_turns_both_land() {
        let api = ScriptedApi::new(vec![
            Ok(NavigatorTurn::Plain(PlainTurn::new("first"))),
            Ok(NavigatorTurn::Plain(PlainTurn::new("second"))),
        ]);
        let mut conversation = Conversation::new(api);
        let mut renderer = NullRenderer;

        conversation.submit_text("one", &mut renderer).await;
        conversation.submit_text("two", &mut renderer).await;

        let texts: Vec<&str> = conversation
            .transcript()
            .messages()
            .iter()
            .map(|m| m.text.as_str())
            .collect();
        assert_eq!(texts, vec!["one", "first", "two", "second"]);
    }
}
