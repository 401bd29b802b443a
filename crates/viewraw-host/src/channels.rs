use std::collections::HashMap;
use std::sync::RwLock;

use viewraw_core::ChannelLookup;
use viewraw_types::ChannelRef;

/// Known channels by id.
#[derive(Default)]
pub struct ChannelDirectory {
    channels: RwLock<HashMap<String, ChannelRef>>,
}

impl ChannelDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, channel: ChannelRef) {
        if let Ok(mut channels) = self.channels.write() {
            channels.insert(channel.id.clone(), channel);
        }
    }
}

impl ChannelLookup for ChannelDirectory {
    fn channel(&self, channel_id: &str) -> Option<ChannelRef> {
        self.channels.read().ok()?.get(channel_id).cloned()
    }
}
