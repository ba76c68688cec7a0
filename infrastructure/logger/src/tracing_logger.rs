use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "MediBot -- ", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "MediBot -- ", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "MediBot -- ", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "MediBot -- ", "{}", message);
    }
}
