//! Live connections and their outbound queues.

use dashmap::DashMap;
use tokio::sync::mpsc;

use super::dispatch::{Envelope, Recipients};
use crate::protocol::ServerToClient;
use crate::util::id::ConnectionId;

pub type Outbox = mpsc::UnboundedSender<ServerToClient>;

#[derive(Default)]
pub struct Hub {
    conns: DashMap<ConnectionId, Outbox>,
}

impl Hub {
    pub fn register(&self, conn: ConnectionId, tx: Outbox) {
        self.conns.insert(conn, tx);
    }

    pub fn unregister(&self, conn: ConnectionId) {
        self.conns.remove(&conn);
    }

    pub fn len(&self) -> usize {
        self.conns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conns.is_empty()
    }

    /// Queue each envelope for its recipients. A closed queue means the
    /// socket is going away; its reader will report the disconnect.
    pub fn deliver(&self, envelopes: Vec<Envelope>) {
        for Envelope { to, msg } in envelopes {
            match to {
                Recipients::One(conn) => {
                    if let Some(tx) = self.conns.get(&conn) {
                        let _ = tx.send(msg);
                    }
                }
                Recipients::All => {
                    for entry in self.conns.iter() {
                        let _ = entry.value().send(msg.clone());
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivers_to_one_or_all() {
        let hub = Hub::default();
        assert!(hub.is_empty());
        let (a, b) = (ConnectionId::new(), ConnectionId::new());
        let (tx_a, mut rx_a) = mpsc::unbounded_channel();
        let (tx_b, mut rx_b) = mpsc::unbounded_channel();
        hub.register(a, tx_a);
        hub.register(b, tx_b);

        hub.deliver(vec![
            Envelope { to: Recipients::One(b), msg: ServerToClient::OpponentJoined },
            Envelope { to: Recipients::All, msg: ServerToClient::GameOver { winner: None } },
        ]);
        assert_eq!(rx_a.try_recv(), Ok(ServerToClient::GameOver { winner: None }));
        assert!(rx_a.try_recv().is_err());
        assert_eq!(rx_b.try_recv(), Ok(ServerToClient::OpponentJoined));
        assert_eq!(rx_b.try_recv(), Ok(ServerToClient::GameOver { winner: None }));

        hub.unregister(a);
        hub.unregister(b);
        assert!(hub.is_empty());
    }
}
