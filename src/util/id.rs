//! Connection identities.

use std::fmt;

use ulid::Ulid;

/// Opaque per-connection identity, assigned when a socket is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(Ulid);

impl ConnectionId {
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for ConnectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Trailing random part is enough to tell connections apart in logs.
        let s = self.0.to_string();
        f.write_str(&s[s.len() - 10..])
    }
}
