//! Recording fakes for the widget host so unit tests can assert on the
//! exact show/hide traffic the controller emits.

use std::cell::RefCell;
use std::rc::Rc;

use crate::buttons::{ButtonId, ButtonInit};
use crate::host::{ButtonHandle, WidgetHost};

#[derive(Default)]
struct HostLog {
    created: Vec<ButtonInit>,
    shown: [bool; 7],
    calls: usize,
}

/// Widget host that records every created button and every show/hide call.
#[derive(Clone, Default)]
pub(crate) struct FakeHost {
    log: Rc<RefCell<HostLog>>,
}

pub(crate) struct FakeButton {
    id: ButtonId,
    log: Rc<RefCell<HostLog>>,
}

impl ButtonHandle for FakeButton {
    fn show(&mut self) {
        let mut log = self.log.borrow_mut();
        log.shown[self.id.index()] = true;
        log.calls += 1;
    }

    fn hide(&mut self) {
        let mut log = self.log.borrow_mut();
        log.shown[self.id.index()] = false;
        log.calls += 1;
    }
}

impl WidgetHost for FakeHost {
    type Handle = FakeButton;

    fn create_button(&mut self, init: &ButtonInit) -> FakeButton {
        self.log.borrow_mut().created.push(*init);
        FakeButton {
            id: init.id,
            log: Rc::clone(&self.log),
        }
    }
}

impl FakeHost {
    /// Buttons currently shown, in `ButtonId::ALL` order.
    pub(crate) fn shown(&self) -> Vec<ButtonId> {
        let log = self.log.borrow();
        ButtonId::ALL
            .into_iter()
            .filter(|id| log.shown[id.index()])
            .collect()
    }

    pub(crate) fn created(&self) -> Vec<ButtonInit> {
        self.log.borrow().created.clone()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.log.borrow().calls
    }
}
