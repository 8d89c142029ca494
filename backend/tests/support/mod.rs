//! Shared helpers for the integration test suites.

pub mod cluster_skip;

use std::sync::Arc;

use actix_web::dev::ServiceResponse;
use actix_web::{test, web};
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

use jeep_sales::domain::JeepSalesService;
use jeep_sales::inbound::http::health::HealthState;
use jeep_sales::inbound::http::state::HttpState;
use jeep_sales::outbound::memory::SeededJeepRepository;
use jeep_sales::server::build_app;

/// Instant reported by [`FixtureClock`].
pub fn fixture_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 9, 30, 0)
        .single()
        .expect("valid fixture timestamp")
}

struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

/// Handler state over the bundled catalogue with a pinned clock.
pub fn seeded_http_state() -> web::Data<HttpState> {
    let repository = SeededJeepRepository::seeded().expect("bundled catalogue parses");
    web::Data::new(HttpState::new(
        Arc::new(JeepSalesService::new(Arc::new(repository))),
        Arc::new(FixtureClock {
            utc_now: fixture_timestamp(),
        }),
    ))
}

/// Send `req` through the full application over the bundled catalogue.
pub async fn call_seeded_app(
    health: web::Data<HealthState>,
    req: test::TestRequest,
) -> ServiceResponse {
    let app = test::init_service(build_app(health, seeded_http_state())).await;
    test::call_service(&app, req.to_request()).await
}

/// Build `/jeeps?model=…&trim=…`, percent-encoding each present parameter.
pub fn jeeps_uri(model: Option<&str>, trim: Option<&str>) -> String {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    if let Some(model) = model {
        query.append_pair("model", model);
    }
    if let Some(trim) = trim {
        query.append_pair("trim", trim);
    }
    format!("/jeeps?{}", query.finish())
}
