/*!
 * Monitoring
 * Structured logging setup
 */

mod tracer;

pub use tracer::{init_tracing, try_init_tracing, TraceConfig, DEFAULT_FILTER, TRACE_JSON_ENV};
