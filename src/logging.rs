use std::{borrow::Cow, io::stderr};

use clap::{crate_name, crate_version};
use sentry::{ClientInitGuard, ClientOptions, integrations::tracing::EventFilter};
use tracing::{Level, Metadata};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use crate::prelude::*;

pub fn init(sentry_dsn: Option<&str>) -> Result<(ClientInitGuard, WorkerGuard)> {
    let sentry_guard = sentry::init((
        sentry_dsn,
        ClientOptions {
            attach_stacktrace: true,
            in_app_include: vec![crate_name!()],
            release: Some(Cow::Borrowed(crate_version!())),
            ..Default::default()
        },
    ));
    let sentry_layer = sentry::integrations::tracing::layer()
        .event_filter(event_filter)
        .span_filter(|metadata| metadata.level() >= &Level::DEBUG);

    let (stderr, stderr_guard) = tracing_appender::non_blocking(stderr());
    let format_layer = tracing_subscriber::fmt::layer()
        .with_writer(stderr)
        .without_time()
        .with_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")));

    tracing_subscriber::Registry::default()
        .with(sentry_layer)
        .with(format_layer)
        .try_init()?;

    if !sentry_guard.is_enabled() {
        debug!("Sentry is disabled");
    }
    Ok((sentry_guard, stderr_guard))
}

#[must_use]
fn event_filter(metadata: &Metadata) -> EventFilter {
    match *metadata.level() {
        Level::ERROR | Level::WARN => EventFilter::Exception,
        _ => EventFilter::Breadcrumb,
    }
}
