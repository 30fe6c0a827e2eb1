use crate::gateway::events::EventPublisher;
use crate::gateway::logs::publisher::LogPublisher;

pub fn create_publisher() -> Box<dyn EventPublisher> {
    Box::new(LogPublisher::new())
}
