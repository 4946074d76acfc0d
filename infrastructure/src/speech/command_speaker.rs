//! Fire-and-forget speech via `espeak-ng`, `espeak` or `say`.

use interview_application::ports::speech::SpeechNotifier;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, info};

/// Commands tried in order when none is configured
pub const KNOWN_SPEECH_COMMANDS: [&str; 3] = ["espeak-ng", "espeak", "say"];

/// Speaks text by spawning a TTS command. Never waits for it to finish.
#[derive(Debug, Clone)]
pub struct CommandSpeaker {
    program: PathBuf,
    rate: Option<u32>,
}

impl CommandSpeaker {
    /// Locate the configured command, or the first known one on `PATH`.
    pub fn detect(command: Option<&str>, rate: Option<u32>) -> Option<Self> {
        let candidates: Vec<&str> = match command {
            Some(command) => vec![command],
            None => KNOWN_SPEECH_COMMANDS.to_vec(),
        };

        let program = candidates
            .into_iter()
            .find_map(|name| which::which(name).ok())?;
        info!(program = %program.display(), "Speech command found");
        Some(Self { program, rate })
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Rate flag for the detected command (words per minute).
    fn rate_args(&self) -> Vec<String> {
        let Some(rate) = self.rate else {
            return Vec::new();
        };
        let flag = match self.program.file_stem().and_then(|s| s.to_str()) {
            Some("say") => "-r",
            Some("espeak" | "espeak-ng") => "-s",
            _ => return Vec::new(),
        };
        vec![flag.to_string(), rate.to_string()]
    }
}

impl SpeechNotifier for CommandSpeaker {
    fn announce(&self, text: &str) {
        let spawned = Command::new(&self.program)
            .args(self.rate_args())
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match spawned {
            // Reap the child off the interview thread
            Ok(mut child) => {
                std::thread::spawn(move || {
                    let _ = child.wait();
                });
            }
            Err(e) => debug!(error = %e, "Speech command failed to start"),
        }
    }
}
