mod telemetry;

pub use telemetry::{StateSnapshot, TelemetrySink, UdpTelemetry};
