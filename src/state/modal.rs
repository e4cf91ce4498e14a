//! Topic modal lifecycle.
//!
//! The dialog moves through `Closed → Opening → Open → Closing → Closed`.
//! `Opening` lasts until the next animation frame, when the shown class is
//! applied; `Closing` lasts for the fixed hide delay while the exit
//! transition plays.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

/// Fallback label when a trigger has neither topic data nor text.
pub const DEFAULT_TOPIC: &str = "Topic";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalPhase {
    #[default]
    Closed,
    /// Backdrop visible, shown class pending the next frame.
    Opening,
    Open,
    /// Shown class removed, backdrop hide pending.
    Closing,
}

impl ModalPhase {
    /// Whether the backdrop element is displayed in this phase.
    #[must_use]
    pub fn backdrop_visible(self) -> bool {
        self != Self::Closed
    }

    /// Whether the backdrop is exposed to assistive technology.
    #[must_use]
    pub fn exposed(self) -> bool {
        matches!(self, Self::Opening | Self::Open)
    }
}

/// What asked the modal to close.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseTrigger {
    /// Escape pressed anywhere in the document.
    Escape,
    /// Click on the backdrop; `on_backdrop` is false when the click landed
    /// inside the dialog body and merely bubbled up.
    Backdrop { on_backdrop: bool },
    /// One of the dialog's close controls.
    Control,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalCore {
    phase: ModalPhase,
    topic: Option<String>,
}

impl ModalCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    /// Label of the topic that last opened the modal.
    #[must_use]
    pub fn topic(&self) -> Option<&str> {
        self.topic.as_deref()
    }

    /// Begin opening for `topic`. Allowed from every phase, including while a
    /// close is still pending.
    pub fn open(&mut self, topic: String) {
        self.topic = Some(topic);
        self.phase = ModalPhase::Opening;
    }

    /// The frame after opening: apply the shown state. Returns `false` if the
    /// modal was closed again before the frame arrived.
    pub fn shown(&mut self) -> bool {
        if self.phase != ModalPhase::Opening {
            return false;
        }
        self.phase = ModalPhase::Open;
        true
    }

    /// Begin closing. Returns `false` when there is nothing to close.
    pub fn close(&mut self) -> bool {
        if !self.phase.exposed() {
            return false;
        }
        self.phase = ModalPhase::Closing;
        true
    }

    /// Route a close request. Clicks that bubble up from the dialog body are
    /// ignored; every other trigger closes.
    pub fn request_close(&mut self, trigger: CloseTrigger) -> bool {
        match trigger {
            CloseTrigger::Backdrop { on_backdrop: false } => false,
            CloseTrigger::Escape | CloseTrigger::Backdrop { on_backdrop: true } | CloseTrigger::Control => {
                self.close()
            }
        }
    }

    /// Hide delay elapsed. Returns `false` if the modal was reopened meanwhile.
    pub fn finish_close(&mut self) -> bool {
        if self.phase != ModalPhase::Closing {
            return false;
        }
        self.phase = ModalPhase::Closed;
        true
    }
}

/// Resolve the label shown for a trigger: its topic data, else its text,
/// else [`DEFAULT_TOPIC`]. Empty values fall through.
#[must_use]
pub fn topic_label(data_topic: Option<&str>, text: Option<&str>) -> String {
    data_topic
        .filter(|t| !t.is_empty())
        .or_else(|| text.filter(|t| !t.is_empty()))
        .unwrap_or(DEFAULT_TOPIC)
        .to_owned()
}
