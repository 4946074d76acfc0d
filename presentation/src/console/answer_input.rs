//! Console answer prompts
//!
//! Implements [`AnswerInput`] over the terminal: the 1/2/3 source menu, the
//! typed-answer prompt, WAV path entry and Enter-to-start/stop recording.

use super::prompter::LinePrompter;
use async_trait::async_trait;
use colored::Colorize;
use interview_application::{AnswerInput, AnswerInputError, AnswerNotice, AnswerSource, clean_path_input};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

/// Map a menu reply to a source. Anything unrecognized means typing.
pub fn parse_source_choice(reply: &str) -> AnswerSource {
    match reply.trim() {
        "2" => AnswerSource::UploadedAudio,
        "3" => AnswerSource::LiveRecording,
        _ => AnswerSource::Typed,
    }
}

fn input_error(e: io::Error) -> AnswerInputError {
    if e.kind() == io::ErrorKind::UnexpectedEof {
        AnswerInputError::Closed
    } else {
        AnswerInputError::from(e)
    }
}

/// Terminal implementation of [`AnswerInput`].
pub struct ConsoleAnswerInput {
    prompter: Arc<LinePrompter>,
}

impl ConsoleAnswerInput {
    pub fn new(prompter: Arc<LinePrompter>) -> Self {
        Self { prompter }
    }
}

#[async_trait]
impl AnswerInput for ConsoleAnswerInput {
    async fn choose_source(&self) -> Result<AnswerSource, AnswerInputError> {
        println!(
            "Answer by (1) Typing, (2) Uploading WAV audio, or (3) Record live with your microphone"
        );
        let reply = self
            .prompter
            .ask_required("Enter 1, 2, or 3:")
            .map_err(input_error)?;
        Ok(parse_source_choice(&reply))
    }

    async fn read_typed_answer(&self) -> Result<String, AnswerInputError> {
        Ok(self
            .prompter
            .ask("Type your answer:")
            .map_err(input_error)?
            .unwrap_or_default())
    }

    async fn read_audio_path(&self) -> Result<PathBuf, AnswerInputError> {
        println!(
            "Please provide your WAV audio file. You can drag and drop the file into the terminal or paste the full path."
        );
        let raw = self
            .prompter
            .ask_required("WAV audio file path:")
            .map_err(input_error)?;
        Ok(clean_path_input(&raw))
    }

    async fn wait_for_recording_start(&self) -> Result<(), AnswerInputError> {
        self.prompter
            .ask_required("Press Enter to start recording...")
            .map_err(input_error)?;
        Ok(())
    }

    async fn wait_for_recording_stop(&self) -> Result<(), AnswerInputError> {
        self.prompter.ask_required("").map_err(input_error)?;
        Ok(())
    }

    fn notify(&self, notice: AnswerNotice<'_>) {
        match notice {
            AnswerNotice::InvalidAudioPath(path) => println!(
                "{} Invalid audio file path ({}). Skipping to text input.",
                "[ERROR]".red().bold(),
                path.display()
            ),
            AnswerNotice::RecordingStarted => {
                println!("{}", "Recording... Press Enter to stop.".yellow().bold())
            }
            AnswerNotice::NoAudioRecorded => println!("{}", "No audio recorded.".yellow()),
            AnswerNotice::Transcribed(text) => println!("{} {}", "[Transcribed]:".cyan(), text),
            AnswerNotice::TranscriptionFailed(sentinel) => println!(
                "{} Could not use the audio; recording the answer as {}",
                "[ERROR]".red().bold(),
                sentinel.dimmed()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn input(script: &'static str) -> ConsoleAnswerInput {
        ConsoleAnswerInput::new(Arc::new(LinePrompter::from_reader(Cursor::new(script))))
    }

    #[test]
    fn test_parse_source_choice() {
        assert_eq!(parse_source_choice("1"), AnswerSource::Typed);
        assert_eq!(parse_source_choice(" 2 "), AnswerSource::UploadedAudio);
        assert_eq!(parse_source_choice("3"), AnswerSource::LiveRecording);
        assert_eq!(parse_source_choice("x"), AnswerSource::Typed);
        assert_eq!(parse_source_choice(""), AnswerSource::Typed);
    }

    #[tokio::test]
    async fn test_menu_then_typed_answer() {
        let input = input("1\nI led the migration.\n");
        assert_eq!(input.choose_source().await.unwrap(), AnswerSource::Typed);
        assert_eq!(input.read_typed_answer().await.unwrap(), "I led the migration.");
    }

    #[tokio::test]
    async fn test_typed_answer_at_eof_is_blank() {
        let input = input("");
        assert_eq!(input.read_typed_answer().await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_menu_at_eof_is_closed() {
        let input = input("");
        assert!(matches!(
            input.choose_source().await,
            Err(AnswerInputError::Closed)
        ));
    }

    #[tokio::test]
    async fn test_audio_path_is_unquoted() {
        let input = input("\"/tmp/my answer.wav\"\n");
        assert_eq!(
            input.read_audio_path().await.unwrap(),
            PathBuf::from("/tmp/my answer.wav")
        );
    }

    #[tokio::test]
    async fn test_recording_waits_for_two_enters() {
        let input = input("\n\n");
        input.wait_for_recording_start().await.unwrap();
        input.wait_for_recording_stop().await.unwrap();
        assert!(matches!(
            input.wait_for_recording_stop().await,
            Err(AnswerInputError::Closed)
        ));
    }
}
