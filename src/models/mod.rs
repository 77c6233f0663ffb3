//! Wire models for the Taskboard admin API.
//!
//! These match the backend's JSON contract exactly; field names on the Rust
//! side stay semantic, with serde renames covering the transport spelling.

mod collaborator;
mod principal;
mod product;
mod role;

pub use collaborator::*;
pub use principal::*;
pub use product::*;
pub use role::*;

use serde::{Deserialize, Deserializer, Serialize};

/// Envelope carried by mutation responses and error bodies.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServerMessage {
    #[serde(default)]
    pub message: Option<String>,
}

/// Deserialize an id that the backend may send as a string or a number.
pub(crate) fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}
