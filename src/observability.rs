use biometrics::{Collector, Counter};

pub(crate) static CLIENT_REQUESTS: Counter = Counter::new("cosmos.client.requests");
pub(crate) static CLIENT_REQUEST_ERRORS: Counter = Counter::new("cosmos.client.request_errors");

pub(crate) static TURNS: Counter = Counter::new("cosmos.conversation.turns");
pub(crate) static TURN_FAILURES: Counter = Counter::new("cosmos.conversation.turn_failures");
pub(crate) static TURNS_REJECTED: Counter = Counter::new("cosmos.conversation.turns_rejected");

pub(crate) static PROFILE_RELOADS: Counter = Counter::new("cosmos.profile.reloads");
pub(crate) static PROFILE_RELOAD_FAILURES: Counter =
    Counter::new("cosmos.profile.reload_failures");

/// Register this crate's biometrics with the provided collector.
pub fn register_biometrics(collector: Collector) {
    collector.register_counter(&CLIENT_REQUESTS);
    collector.register_counter(&CLIENT_REQUEST_ERRORS);

    collector.register_counter(&TURNS);
    collector.register_counter(&TURN_FAILURES);
    collector.register_counter(&TURNS_REJECTED);

    collector.register_counter(&PROFILE_RELOADS);
    collector.register_counter(&PROFILE_RELOAD_FAILURES);
}
