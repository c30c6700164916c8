use crate::event::events::Event;
use flume::Sender;

pub struct AppContext {
    pub event_tx: Sender<Event>,
}
