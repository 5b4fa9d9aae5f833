use biometrics::{Collector, Counter};

pub(crate) static INITIATE_REQUESTS: Counter = Counter::new("uplink.relay.initiate_requests");
pub(crate) static INITIATE_ERRORS: Counter = Counter::new("uplink.relay.initiate_errors");
pub(crate) static EXCHANGE_REQUESTS: Counter = Counter::new("uplink.relay.exchange_requests");
pub(crate) static EXCHANGE_ERRORS: Counter = Counter::new("uplink.relay.exchange_errors");
pub(crate) static MALFORMED_RESPONSES: Counter = Counter::new("uplink.relay.malformed_responses");

pub(crate) static SESSIONS_ACTIVATED: Counter = Counter::new("uplink.session.activated");
pub(crate) static SESSIONS_FAILED: Counter = Counter::new("uplink.session.failed");
pub(crate) static LOG_APPENDS: Counter = Counter::new("uplink.session.log_appends");

pub(crate) static REVEAL_STARTS: Counter = Counter::new("uplink.reveal.starts");
pub(crate) static REVEAL_TICKS: Counter = Counter::new("uplink.reveal.ticks");

/// Register this crate's biometrics with the provided collector.
pub fn register_biometrics(collector: Collector) {
    collector.register_counter(&INITIATE_REQUESTS);
    collector.register_counter(&INITIATE_ERRORS);
    collector.register_counter(&EXCHANGE_REQUESTS);
    collector.register_counter(&EXCHANGE_ERRORS);
    collector.register_counter(&MALFORMED_RESPONSES);

    collector.register_counter(&SESSIONS_ACTIVATED);
    collector.register_counter(&SESSIONS_FAILED);
    collector.register_counter(&LOG_APPENDS);

    collector.register_counter(&REVEAL_STARTS);
    collector.register_counter(&REVEAL_TICKS);
}
