use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use textgrade::MatchMode;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_match_mode(raw: &str) -> Result<MatchMode, String> {
    raw.parse::<MatchMode>().map_err(|err| err.to_string())
}
