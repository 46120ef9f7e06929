//! The device session: confirmed-only state reconciliation

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, warn};

use nad_api::{NadClient, WireCommand};
use nad_codec::{Command, Source, Value, Variable};

use crate::record::{ErrorRecord, Exchange, Reply};

/// Variables read once when a session boots
const BOOTSTRAP_VARIABLES: [Variable; 4] = [
    Variable::Power,
    Variable::Mute,
    Variable::Source,
    Variable::SpeakerA,
];

#[derive(Debug)]
struct Inner {
    state: HashMap<String, Value>,
    error: Option<ErrorRecord>,
    exchange: Option<Exchange>,
}

impl Inner {
    fn with_default_snapshot() -> Self {
        let mut state = HashMap::new();
        state.insert("Power".to_string(), Value::Bool(false));
        state.insert("Mute".to_string(), Value::Bool(false));
        state.insert("SpeakerA".to_string(), Value::Bool(true));
        Self {
            state,
            error: None,
            exchange: None,
        }
    }
}

/// A live control session against one amplifier bridge
///
/// The session holds the last confirmed device state and reconciles every
/// reply into it. State changes only when the bridge answers; a command in
/// flight is invisible until confirmed, and a failed command changes
/// nothing except the error record.
///
/// Clones share the same underlying state, so one session can serve an
/// input loop and a renderer at the same time. Exchanges run outside the
/// state lock: commands issued concurrently race freely, and whichever
/// reply arrives last determines the final state.
#[derive(Debug, Clone)]
pub struct DeviceSession {
    client: NadClient,
    inner: Arc<RwLock<Inner>>,
}

impl DeviceSession {
    /// Create a session for the bridge at `base_url`
    ///
    /// The state starts from the minimal default snapshot (`Power` and
    /// `Mute` off, `SpeakerA` on); call [`bootstrap`](Self::bootstrap) to
    /// replace it with what the device actually reports.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(NadClient::new(base_url))
    }

    /// Create a session over an existing client
    pub fn with_client(client: NadClient) -> Self {
        Self {
            client,
            inner: Arc::new(RwLock::new(Inner::with_default_snapshot())),
        }
    }

    /// Read every bootstrap variable once
    pub fn bootstrap(&self) {
        for variable in BOOTSTRAP_VARIABLES {
            self.fetch_variable(&variable);
        }
    }

    /// Read one variable from the bridge and fold the answer into state
    ///
    /// The reply names the variable it updates; the session trusts that
    /// name rather than the one it asked for. A successful read never
    /// clears the error record. A failed read records the error and leaves
    /// state untouched.
    pub fn fetch_variable(&self, variable: &Variable) {
        match self.client.read_state(variable.as_str()) {
            Ok(wire) => {
                let reply = Reply::from(wire);
                debug!(variable = %reply.variable, value = %reply.value, "state read");
                self.inner.write().state.insert(reply.variable, reply.value);
            }
            Err(err) => {
                warn!(variable = %variable, error = %err, "state read failed");
                self.inner.write().error = Some(ErrorRecord::from(err));
            }
        }
    }

    /// Send a command and reconcile the device's reply
    ///
    /// The value, if any, is encoded to its wire form before transmission.
    /// On success the reply's value is decoded and written under the
    /// reply's variable name, the error record is cleared, and the
    /// exchange record is replaced. On failure the error record is set and
    /// state and exchange stay exactly as they were.
    pub fn send_command(&self, command: Command) {
        let wire = WireCommand {
            variable: command.variable().as_str().to_string(),
            operator: command.operator().as_str().to_string(),
            value: command.value().map(Value::to_wire),
        };
        debug!(command = %command, "sending command");
        match self.client.send(&wire) {
            Ok(wire_reply) => {
                let reply = Reply::from(wire_reply);
                debug!(reply = %reply, "command confirmed");
                let mut inner = self.inner.write();
                inner
                    .state
                    .insert(reply.variable.clone(), reply.value.clone());
                inner.error = None;
                inner.exchange = Some(Exchange {
                    request: command,
                    reply,
                });
            }
            Err(err) => {
                warn!(command = %command, error = %err, "command failed");
                self.inner.write().error = Some(ErrorRecord::from(err));
            }
        }
    }

    /// Toggle main power
    pub fn toggle_power(&self) {
        self.toggle(Variable::Power);
    }

    /// Toggle mute
    pub fn toggle_mute(&self) {
        self.toggle(Variable::Mute);
    }

    /// Toggle the speaker A output
    pub fn toggle_speaker_a(&self) {
        self.toggle(Variable::SpeakerA);
    }

    /// Set the inverse of the last confirmed value
    ///
    /// A variable missing from state counts as off, so the first toggle
    /// turns it on.
    fn toggle(&self, variable: Variable) {
        let current = self
            .value(variable.as_str())
            .and_then(|value| value.as_bool())
            .unwrap_or(false);
        self.send_command(Command::set(variable, !current));
    }

    /// Select an input source
    pub fn set_source(&self, source: Source) {
        self.send_command(Command::set(Variable::Source, source.as_str()));
    }

    /// Step the volume, up for positive directions and down otherwise
    pub fn volume_step(&self, direction: i32) {
        let command = if direction > 0 {
            Command::increment(Variable::Volume)
        } else {
            Command::decrement(Variable::Volume)
        };
        self.send_command(command);
    }

    pub fn volume_up(&self) {
        self.volume_step(1);
    }

    pub fn volume_down(&self) {
        self.volume_step(-1);
    }

    /// Ask the amplifier for its model identifier
    pub fn query_model(&self) {
        self.send_command(Command::query(Variable::Model));
    }

    /// Snapshot of the current device state
    pub fn state(&self) -> HashMap<String, Value> {
        self.inner.read().state.clone()
    }

    /// Last confirmed value of a single variable
    pub fn value(&self, variable: &str) -> Option<Value> {
        self.inner.read().state.get(variable).cloned()
    }

    /// The most recent captured failure, if one is pending
    pub fn last_error(&self) -> Option<ErrorRecord> {
        self.inner.read().error.clone()
    }

    /// The most recent successful request/reply pair
    pub fn last_exchange(&self) -> Option<Exchange> {
        self.inner.read().exchange.clone()
    }
}
