use lazy_static::lazy_static;
use prometheus::{
    register_histogram, register_histogram_vec, register_int_counter_vec, Histogram,
    HistogramVec, IntCounterVec,
};

lazy_static! {
    /// End-to-end duration of feed assembly requests.
    pub static ref FEED_REQUEST_DURATION_SECONDS: Histogram = register_histogram!(
        "blog_feed_request_duration_seconds",
        "Duration of full feed assembly"
    )
    .expect("failed to register blog_feed_request_duration_seconds");

    /// Feed requests segmented by outcome (ok, data_integrity, dependency_unavailable).
    pub static ref FEED_REQUEST_TOTAL: IntCounterVec = register_int_counter_vec!(
        "blog_feed_request_total",
        "Total feed requests segmented by outcome",
        &["outcome"]
    )
    .expect("failed to register blog_feed_request_total");

    /// Time spent in each pipeline stage.
    pub static ref FEED_STAGE_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "blog_feed_stage_duration_seconds",
        "Feed pipeline stage duration segmented by stage",
        &["stage"]
    )
    .expect("failed to register blog_feed_stage_duration_seconds");

    /// Records dropped because their owner reference did not resolve.
    pub static ref FEED_MISSING_OWNER_SKIPPED: IntCounterVec = register_int_counter_vec!(
        "blog_feed_missing_owner_skipped_total",
        "Records skipped for an unresolved owner, segmented by collection",
        &["collection"]
    )
    .expect("failed to register blog_feed_missing_owner_skipped_total");
}
