use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Role string used by the simulation recorder for the automated agent
pub const AGENT_ROLE: &str = "assistant";

/// A single recorded conversation turn
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Message {
    /// Author role ("assistant", "user", "tool", ...)
    #[serde(default)]
    pub role: String,

    /// Text content. Tool-call turns often carry `null` here.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,

    /// Present whenever the recorder wrote a `tool_calls` key, even as `null`
    #[serde(default, deserialize_with = "key_present")]
    pub tool_calls: Option<Value>,

    /// Legacy single function-call field, tracked the same way
    #[serde(default, deserialize_with = "key_present")]
    pub function_call: Option<Value>,
}

impl Message {
    /// Whether the automated agent authored this turn
    pub fn is_agent(&self) -> bool {
        self.role == AGENT_ROLE
    }

    /// Whether the turn carries a tool or function call
    pub fn has_tool_call(&self) -> bool {
        self.tool_calls.is_some() || self.function_call.is_some()
    }
}

#[cfg(test)]
impl Message {
    pub fn new(role: &str, content: &str) -> Self {
        Self {
            role: role.to_string(),
            content: content.to_string(),
            ..Default::default()
        }
    }

    pub fn with_tool_calls(mut self, calls: Value) -> Self {
        self.tool_calls = Some(calls);
        self
    }
}

/// Reward block attached to each simulation
#[derive(Debug, Clone, Deserialize)]
pub struct RewardInfo {
    pub reward: f64,
}

/// One recorded agent/user interaction
#[derive(Debug, Clone, Deserialize)]
pub struct Simulation {
    pub reward_info: RewardInfo,

    #[serde(default)]
    pub messages: Vec<Message>,

    /// Missing or `null` reads as "unknown"
    #[serde(
        default = "default_termination_reason",
        deserialize_with = "null_as_unknown"
    )]
    pub termination_reason: String,

    #[serde(default, deserialize_with = "null_as_zero")]
    pub duration: f64,
}

fn default_termination_reason() -> String {
    "unknown".to_string()
}

impl Simulation {
    pub fn reward(&self) -> f64 {
        self.reward_info.reward
    }
}

#[cfg(test)]
impl Simulation {
    pub fn new(reward: f64, messages: Vec<Message>) -> Self {
        Self {
            reward_info: RewardInfo { reward },
            messages,
            termination_reason: default_termination_reason(),
            duration: 0.0,
        }
    }

    pub fn with_termination(mut self, reason: &str) -> Self {
        self.termination_reason = reason.to_string();
        self
    }
}

/// Top-level document written by the simulation recorder
#[derive(Debug, Clone, Deserialize)]
pub struct SimulationFile {
    pub simulations: Vec<Simulation>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_unknown<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_termination_reason))
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

fn key_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
