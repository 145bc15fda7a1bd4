// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Voice input: a push-to-talk wrapper around an optional speech recognizer.
//!
//! A recognizer delivers one final transcript per start, or an error. The
//! transcript is handed back as ordinary input text; nothing downstream knows it
//! was spoken. Platforms without recognition get `available() == false` and every
//! action is a no-op.

use crate::error::VoiceError;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

/// Recognition language requested from the platform.
pub const RECOGNITION_LOCALE: &str = "ar-SA";

/// What a recognizer reports back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceEvent {
    /// The final transcript for this capture.
    Transcript(String),
    /// Recognition failed mid-capture.
    Error(String),
}

/// A platform speech recognizer.
///
/// `start` begins one capture of a single final result (no interim results)
/// and reports through `sink`. `stop` ends a capture early; stopping when idle
/// is harmless.
pub trait SpeechCapability: Send {
    fn start(&mut self, locale: &str, sink: Sender<VoiceEvent>) -> Result<(), VoiceError>;
    fn stop(&mut self);
}

/// Microphone toggle state plus the pending capture, if any.
pub struct VoiceInput {
    capability: Option<Box<dyn SpeechCapability>>,
    events: Option<Receiver<VoiceEvent>>,
}

impl VoiceInput {
    pub fn new(capability: Option<Box<dyn SpeechCapability>>) -> Self {
        VoiceInput { capability, events: None }
    }

    /// No recognizer on this platform.
    pub fn unavailable() -> Self {
        Self::new(None)
    }

    /// Whether the control should be shown at all.
    pub fn available(&self) -> bool {
        self.capability.is_some()
    }

    pub fn is_listening(&self) -> bool {
        self.events.is_some()
    }

    /// Start or stop listening.
    ///
    /// Ignored while a query is in flight (`busy`) and when no recognizer exists.
    /// A recognizer that refuses to start is logged and leaves the input idle.
    pub fn toggle(&mut self, busy: bool) {
        if busy {
            return;
        }
        let Some(capability) = self.capability.as_mut() else {
            return;
        };

        if self.events.take().is_some() {
            capability.stop();
            return;
        }

        let (tx, rx) = mpsc::channel();
        match capability.start(RECOGNITION_LOCALE, tx) {
            Ok(()) => self.events = Some(rx),
            Err(e) => tracing::warn!(error = %e, "speech recognition did not start"),
        }
    }

    /// Collect the finished transcript, if one has arrived.
    ///
    /// Any event ends the capture. Errors and a recognizer that went away
    /// without answering are logged and yield `None`.
    pub fn poll(&mut self) -> Option<String> {
        let rx = self.events.as_ref()?;
        let event = match rx.try_recv() {
            Ok(event) => event,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => {
                self.events = None;
                tracing::debug!("speech capture ended without a transcript");
                return None;
            }
        };

        self.events = None;
        match event {
            VoiceEvent::Transcript(text) => Some(text),
            VoiceEvent::Error(msg) => {
                tracing::warn!(error = %msg, "speech recognition error");
                None
            }
        }
    }
}

impl std::fmt::Debug for VoiceInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VoiceInput")
            .field("available", &self.available())
            .field("listening", &self.is_listening())
            .finish()
    }
}
