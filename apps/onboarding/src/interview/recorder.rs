//! Stand-alone voice recorder.
//!
//! Unlike the scripted simulator, raw audio capture is a device acquisition
//! that can fail: denial surfaces `MediaAccessDenied` and leaves the recorder
//! idle. The capture stream is a scoped resource: it is released on stop, on
//! drop, and on every error path. Capture never feeds the simulator.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use bytes::Bytes;
use tokio::time::Instant;

use crate::errors::AppError;

/// A finished voice sample kept with the form for the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioClip {
    pub duration_secs: u64,
    pub data: Bytes,
}

/// An open capture stream. Dropping it releases the device; `released` lets
/// the owning `Microphone` observe that no stream outlived its scope.
pub struct MicStream {
    samples: Vec<u8>,
    released: Arc<AtomicBool>,
}

impl MicStream {
    pub fn new(released: Arc<AtomicBool>) -> Self {
        released.store(false, Ordering::SeqCst);
        MicStream {
            samples: Vec::new(),
            released,
        }
    }

    fn into_data(mut self) -> Bytes {
        Bytes::from(std::mem::take(&mut self.samples))
    }
}

impl Drop for MicStream {
    fn drop(&mut self) {
        self.released.store(true, Ordering::SeqCst);
    }
}

pub trait Microphone: Send + Sync {
    /// Acquires the capture device, or fails with `MediaAccessDenied`.
    fn acquire(&self) -> Result<MicStream, AppError>;
}

/// Capture stand-in for the terminal build: always grants access and records
/// a silent stream.
#[derive(Default)]
pub struct SystemMicrophone {
    released: Arc<AtomicBool>,
}

impl SystemMicrophone {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stream_released(&self) -> bool {
        self.released.load(Ordering::SeqCst)
    }
}

impl Microphone for SystemMicrophone {
    fn acquire(&self) -> Result<MicStream, AppError> {
        Ok(MicStream::new(Arc::clone(&self.released)))
    }
}

enum RecorderState {
    Idle,
    Recording { stream: MicStream, started: Instant },
}

pub struct VoiceRecorder {
    mic: Box<dyn Microphone>,
    state: RecorderState,
}

impl VoiceRecorder {
    pub fn new(mic: Box<dyn Microphone>) -> Self {
        VoiceRecorder {
            mic,
            state: RecorderState::Idle,
        }
    }

    pub fn is_recording(&self) -> bool {
        matches!(self.state, RecorderState::Recording { .. })
    }

    pub fn elapsed_secs(&self) -> u64 {
        match &self.state {
            RecorderState::Recording { started, .. } => started.elapsed().as_secs(),
            RecorderState::Idle => 0,
        }
    }

    /// Starts capturing. On acquisition failure the recorder stays idle and
    /// the caller surfaces the notification.
    pub fn start(&mut self) -> Result<(), AppError> {
        if self.is_recording() {
            return Ok(());
        }
        let stream = self.mic.acquire()?;
        self.state = RecorderState::Recording {
            stream,
            started: Instant::now(),
        };
        Ok(())
    }

    /// Stops capturing, releasing the stream and yielding the clip.
    /// Returns None when not recording.
    pub fn stop(&mut self) -> Option<AudioClip> {
        match std::mem::replace(&mut self.state, RecorderState::Idle) {
            RecorderState::Recording { stream, started } => Some(AudioClip {
                duration_secs: started.elapsed().as_secs(),
                data: stream.into_data(),
            }),
            RecorderState::Idle => None,
        }
    }
}
