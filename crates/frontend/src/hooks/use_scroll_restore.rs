//! Keep the window scroll position across list reloads

use crate::client::config;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Default)]
struct ScrollSlot {
    position: Option<f64>,
    pending: Option<Timeout>,
}

/// Save and restore handles for one list view
#[derive(Clone)]
pub struct ScrollRestore {
    slot: Rc<RefCell<ScrollSlot>>,
}

impl ScrollRestore {
    /// Remember the current scroll offset
    pub fn save(&self) {
        let position = web_sys::window().and_then(|w| w.scroll_y().ok());
        self.slot.borrow_mut().position = position;
    }

    /// Scroll back to the saved offset once the next render has settled.
    ///
    /// A restore that is still pending is superseded.
    pub fn restore(&self) {
        let mut slot = self.slot.borrow_mut();
        let Some(y) = slot.position.take() else {
            return;
        };

        let delay = config().scroll_restore_delay_ms;
        slot.pending = Some(Timeout::new(delay, move || {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, y);
            }
        }));
    }
}

#[hook]
pub fn use_scroll_restore() -> ScrollRestore {
    let slot = use_mut_ref(ScrollSlot::default);

    {
        let slot = slot.clone();
        use_effect_with((), move |_| {
            move || {
                slot.borrow_mut().pending.take();
            }
        });
    }

    ScrollRestore { slot }
}
