use super::APP_NAME;
use once_cell::sync::Lazy;
use opentelemetry::{
    global::{self},
    metrics::{Counter, Histogram},
};

pub static REQUEST_COUNTER: Lazy<Counter<f64>> = Lazy::new(|| {
    global::meter_provider()
        .meter(APP_NAME)
        .f64_counter("http_requests_total")
        .build()
});

pub static HTTP_REQUEST_DURATION_HISTOGRAM: Lazy<Histogram<f64>> = Lazy::new(|| {
    global::meter_provider()
        .meter(APP_NAME)
        .f64_histogram("http_request_duration_milliseconds")
        .build()
});

pub static STORAGE_OPERATION_DURATION_HISTOGRAM: Lazy<Histogram<f64>> = Lazy::new(|| {
    global::meter_provider()
        .meter(APP_NAME)
        .f64_histogram("storage_operation_duration_milliseconds")
        .build()
});

pub static SERVICE_OPERATION_DURATION_HISTOGRAM: Lazy<Histogram<f64>> = Lazy::new(|| {
    global::meter_provider()
        .meter(APP_NAME)
        .f64_histogram("service_operation_duration_milliseconds")
        .build()
});

pub static STARTUP_ATTEMPT_COUNTER: Lazy<Counter<u64>> = Lazy::new(|| {
    global::meter_provider()
        .meter(APP_NAME)
        .u64_counter("storage_startup_attempts_total")
        .build()
});
