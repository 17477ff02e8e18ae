use std::net::{SocketAddr, ToSocketAddrs, UdpSocket};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::components::AircraftState;
use crate::systems::Simulation;
use crate::utils::SimError;

/// Byte-oriented transport for broadcasting serialized state.
///
/// Best-effort contract: a failed send is logged and dropped, never
/// retried, and never surfaces to the physics loop.
pub trait TelemetrySink {
    fn send(&mut self, data: &[u8]);
}

/// Flat, serializable view of one state snapshot, taken between ticks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub tick: u64,
    pub elapsed: f64,
    pub u: f64,
    pub v: f64,
    pub w: f64,
    pub p: f64,
    pub q: f64,
    pub r: f64,
    pub phi: f64,
    pub theta: f64,
    pub psi: f64,
    pub u_dot: f64,
    pub v_dot: f64,
    pub w_dot: f64,
    pub p_dot: f64,
    pub q_dot: f64,
    pub r_dot: f64,
    pub alpha: f64,
    pub alpha_dot: f64,
}

impl StateSnapshot {
    pub fn new(state: &AircraftState, tick: u64, elapsed: f64) -> Self {
        Self {
            tick,
            elapsed,
            u: state.velocity.x,
            v: state.velocity.y,
            w: state.velocity.z,
            p: state.rates.x,
            q: state.rates.y,
            r: state.rates.z,
            phi: state.attitude.phi,
            theta: state.attitude.theta,
            psi: state.attitude.psi,
            u_dot: state.acceleration.x,
            v_dot: state.acceleration.y,
            w_dot: state.acceleration.z,
            p_dot: state.angular_acceleration.x,
            q_dot: state.angular_acceleration.y,
            r_dot: state.angular_acceleration.z,
            alpha: state.alpha,
            alpha_dot: state.alpha_dot,
        }
    }

    pub fn capture(sim: &Simulation) -> Self {
        Self::new(sim.state(), sim.tick(), sim.elapsed())
    }

    /// JSON wire encoding, one datagram per snapshot.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SimError> {
        Ok(serde_json::to_vec(self)?)
    }
}

/// UDP datagram sink, fire-and-forget.
#[derive(Debug)]
pub struct UdpTelemetry {
    socket: UdpSocket,
    target: SocketAddr,
}

impl UdpTelemetry {
    pub const DEFAULT_TARGET: &'static str = "127.0.0.1:7777";

    pub fn new(target: impl ToSocketAddrs) -> Result<Self, SimError> {
        let target = target.to_socket_addrs()?.next().ok_or_else(|| {
            SimError::InvalidConfig("telemetry target resolved to no address".to_string())
        })?;
        let socket = UdpSocket::bind("0.0.0.0:0")?;

        Ok(Self { socket, target })
    }

    pub fn target(&self) -> SocketAddr {
        self.target
    }
}

impl TelemetrySink for UdpTelemetry {
    fn send(&mut self, data: &[u8]) {
        if let Err(e) = self.socket.send_to(data, self.target) {
            warn!("telemetry send to {} failed: {}", self.target, e);
        }
    }
}
