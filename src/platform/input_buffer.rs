//=========================================================================
// Input Buffer
//
// Holds converted input between OS event pumping and the next tick's
// dispatch.
//
// - discrete: key/button transitions, in arrival order, consecutive
//   duplicates dropped
// - cursor: only the latest position is kept
//
// `drain()` yields discrete events first, then the cursor.
//=========================================================================

use crate::core::input::event::InputEvent;

//=== InputBuffer =========================================================

pub(crate) struct InputBuffer {
    discrete: Vec<InputEvent>,
    cursor: Option<InputEvent>,
}

impl InputBuffer {
    pub(crate) fn new() -> Self {
        const DISCRETE_BASE: usize = 64;

        Self {
            discrete: Vec::with_capacity(DISCRETE_BASE),
            cursor: None,
        }
    }

    //--- Push -------------------------------------------------------------

    pub(crate) fn push(&mut self, event: InputEvent) {
        match event {
            InputEvent::MouseMoved { .. } => self.cursor = Some(event),
            InputEvent::Unidentified => {}
            _ => {
                if self.discrete.last() != Some(&event) {
                    self.discrete.push(event);
                }
            }
        }
    }

    //--- Drain ------------------------------------------------------------

    pub(crate) fn drain(&mut self) -> Vec<InputEvent> {
        let mut events: Vec<InputEvent> = self.discrete.drain(..).collect();
        events.extend(self.cursor.take());
        events
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.discrete.is_empty() && self.cursor.is_none()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
