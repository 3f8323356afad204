use crate::{action::Action, item::Item};

/// Trait for availability change observation
pub trait ActionObserver {
    /// Called after an action changed an item's availability; `item` is the new state
    fn on_availability_change(&self, item: &Item, action: Action);
}

/// Emits every availability change as a structured `tracing` event
#[derive(Debug)]
pub struct TracingObserver;

impl ActionObserver for TracingObserver {
    fn on_availability_change(&self, item: &Item, action: Action) {
        tracing::info!(
            item_id = %item.id(),
            title = item.title(),
            category = %item.category(),
            ?action,
            available = item.is_available(),
            "availability changed"
        );
    }
}
