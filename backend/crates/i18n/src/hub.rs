//! Locale Change Hub
//!
//! Every open event stream of a browser shares that browser's client key
//! (the `locale_client` cookie). A locale switch in one tab is published once
//! and delivered to every listener holding the same key.

use futures::{Stream, StreamExt, stream};
use tokio::sync::broadcast::{self, error::RecvError};

use crate::locale::Locale;

/// Name of the cookie grouping the listeners of one client
pub const CLIENT_COOKIE: &str = "locale_client";

/// Default capacity of the broadcast channel
pub const DEFAULT_CAPACITY: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleChange {
    pub client: String,
    pub locale: Locale,
}

#[derive(Debug, Clone)]
pub struct LocaleHub {
    sender: broadcast::Sender<LocaleChange>,
}

impl LocaleHub {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Publish a change. Returns how many listeners (of any client) were reached.
    pub fn publish(&self, client: impl Into<String>, locale: Locale) -> usize {
        let change = LocaleChange {
            client: client.into(),
            locale,
        };
        // Err only means nobody is listening right now
        self.sender.send(change).unwrap_or(0)
    }

    pub fn listener_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Locale changes for `client`, in publication order.
    ///
    /// A listener that falls behind skips the missed events and keeps going.
    pub fn subscribe<T: Into<String>>(
        &self,
        client: T,
    ) -> impl Stream<Item = Locale> + Send + 'static + use<T> {
        let client = client.into();
        let receiver = self.sender.subscribe();

        stream::unfold(receiver, |mut receiver| async move {
            loop {
                match receiver.recv().await {
                    Ok(change) => return Some((change, receiver)),
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "Locale listener lagged");
                    }
                    Err(RecvError::Closed) => return None,
                }
            }
        })
        .filter_map(move |change| {
            let locale = (change.client == client).then_some(change.locale);
            async move { locale }
        })
    }
}

impl Default for LocaleHub {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

/// Fresh random client key, safe for a cookie value
pub fn new_client_key() -> String {
    platform::crypto::to_base64_url(&platform::crypto::random_bytes(16))
}
