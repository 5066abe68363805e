//! Channel-backed event bus standing in for the host's notification stream.
//!
//! Producers push `SessionEvent`s into a bounded channel; `pump` drains it
//! and fans each event out to live listeners in registration order, which
//! preserves the host's serialized-delivery guarantee.

use std::cell::RefCell;
use std::rc::Rc;

use crossbeam_channel::{bounded, Receiver, Sender};
use debugbar::{EventListener, EventSource, ListenerHandle, SessionEvent};

type ListenerSlots = Rc<RefCell<Vec<Option<EventListener>>>>;

pub(crate) struct ChannelBus {
    tx: Sender<SessionEvent>,
    rx: Receiver<SessionEvent>,
    listeners: ListenerSlots,
}

impl ChannelBus {
    pub(crate) fn new(capacity: usize) -> Self {
        let (tx, rx) = bounded(capacity);
        Self {
            tx,
            rx,
            listeners: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub(crate) fn sender(&self) -> Sender<SessionEvent> {
        self.tx.clone()
    }

    /// Drain pending events and deliver each to every live listener.
    pub(crate) fn pump(&mut self) {
        while let Ok(event) = self.rx.try_recv() {
            let mut listeners = self.listeners.borrow_mut();
            for slot in listeners.iter_mut() {
                if let Some(listener) = slot.as_mut() {
                    listener(event.clone());
                }
            }
        }
    }
}

pub(crate) struct BusListener {
    slot: usize,
    listeners: ListenerSlots,
}

impl ListenerHandle for BusListener {
    fn dispose(&mut self) {
        if let Some(slot) = self.listeners.borrow_mut().get_mut(self.slot) {
            *slot = None;
        }
    }
}

impl EventSource for ChannelBus {
    type Handle = BusListener;

    fn subscribe(&mut self, listener: EventListener) -> BusListener {
        let mut listeners = self.listeners.borrow_mut();
        listeners.push(Some(listener));
        BusListener {
            slot: listeners.len() - 1,
            listeners: Rc::clone(&self.listeners),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn pump_delivers_in_order_and_disposal_detaches() {
        let mut bus = ChannelBus::new(8);
        let seen = Rc::new(Cell::new(0usize));
        let counter = Rc::clone(&seen);
        let mut handle = bus.subscribe(Box::new(move |_event| {
            counter.set(counter.get() + 1);
        }));

        let tx = bus.sender();
        tx.send(SessionEvent::Terminated).expect("send");
        tx.send(SessionEvent::Terminated).expect("send");
        bus.pump();
        assert_eq!(seen.get(), 2);

        handle.dispose();
        tx.send(SessionEvent::Terminated).expect("send");
        bus.pump();
        assert_eq!(seen.get(), 2);
    }
}
