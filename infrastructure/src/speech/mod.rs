//! Speech synthesis through a system text-to-speech command

mod command_speaker;

pub use command_speaker::{CommandSpeaker, KNOWN_SPEECH_COMMANDS};
