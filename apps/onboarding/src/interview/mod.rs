// Scripted AI interview simulation.
// Implements: fixed interview scripts, the session state machine, the
// timer-driven transcript pacer, and the stand-alone voice recorder.
// All timer tasks are owned by the simulator handle and die with it.

pub mod recorder;
pub mod script;
pub mod session;
pub mod simulator;

pub use recorder::{Microphone, SystemMicrophone, VoiceRecorder};
pub use script::{Script, Speaker};
pub use session::{InterviewSession, Stage};
pub use simulator::SimulatorHandle;
