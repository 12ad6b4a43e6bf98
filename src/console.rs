//! Test console: the single-flight analyze-request state machine.
//!
//! The console owns an input line and a small explicit state machine:
//!
//! ```text
//! Idle ──(submit, non-empty)──▶ Submitting ──(ok)──▶ Succeeded ─┐
//!   ▲                              │                            │ next submit
//!   │                              └───(err)──▶ Failed ─────────┤
//!   └──────────────────────────────────────────────────────────┘
//! ```
//!
//! While `Submitting`, input editing and further submissions are ignored;
//! that single guard is what makes a second concurrent request structurally
//! impossible. Submitting whitespace-only text yields a validation message
//! without leaving `Idle` and without touching the network layer.

use crate::api::AnalysisResult;

/// Lifecycle of the one-at-a-time analyze request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// What the console output area is currently showing.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ConsoleOutput {
    /// Nothing submitted yet.
    #[default]
    Empty,
    /// Last submission was rejected for empty input.
    Invalid,
    /// A request is in flight.
    Pending,
    /// Full analysis report for the last successful submission.
    Report {
        message: String,
        result: AnalysisResult,
    },
    /// Raw error text from the last failed submission.
    Error(String),
}

impl ConsoleOutput {
    /// Render the output area as plain text lines.
    ///
    /// `server` is the configured base URL, named in the connectivity hint on
    /// the failure path.
    pub fn lines(&self, server: &str) -> Vec<String> {
        match self {
            ConsoleOutput::Empty => vec![
                "Type a message and press Enter to run it".to_string(),
                "through the detection pipeline.".to_string(),
            ],
            ConsoleOutput::Invalid => vec!["Please enter a message to test".to_string()],
            ConsoleOutput::Pending => vec!["Analyzing message...".to_string()],
            ConsoleOutput::Report { message, result } => report_lines(message, result),
            ConsoleOutput::Error(err) => vec![
                format!("Error: {}", err),
                String::new(),
                "Make sure the API server is running.".to_string(),
                format!("Server: {}", server),
            ],
        }
    }
}

fn report_lines(message: &str, result: &AnalysisResult) -> Vec<String> {
    let mut lines = vec![
        "Analysis Complete".to_string(),
        String::new(),
        format!("Message: \"{}\"", message),
        format!(
            "Conversation ID: {}...",
            truncate_id(&result.conversation_id)
        ),
        format!(
            "Scam Detected: {}",
            if result.scam_detected { "YES" } else { "NO" }
        ),
    ];

    if result.scam_detected {
        if let Some(ref scam_type) = result.scam_type {
            lines.push(format!("Scam Type: {}", scam_type.to_uppercase()));
        }
        if let Some(confidence) = result.confidence {
            lines.push(format!("Confidence: {:.1}%", confidence * 100.0));
        }
    }

    lines.push(format!(
        "Intelligence Extracted ({}):",
        result.intelligence_extracted.len()
    ));
    if result.intelligence_extracted.is_empty() {
        lines.push("  - None detected".to_string());
    } else {
        for intel in &result.intelligence_extracted {
            lines.push(format!("  - {}", intel));
        }
    }

    lines.push(format!("AI Response: \"{}\"", result.ai_response));
    lines.push(format!("Response Time: {:.2}ms", result.response_time));
    lines
}

fn truncate_id(id: &str) -> &str {
    match id.char_indices().nth(8) {
        Some((idx, _)) => &id[..idx],
        None => id,
    }
}

/// Console state: input line, request state, and last output.
#[derive(Debug, Clone, Default)]
pub struct TestConsole {
    input: String,
    state: RequestState,
    output: ConsoleOutput,
}

impl TestConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RequestState {
        self.state
    }

    pub fn output(&self) -> &ConsoleOutput {
        &self.output
    }

    /// Current input text, as typed.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Whether a request is in flight (input and submission disabled).
    pub fn is_submitting(&self) -> bool {
        self.state == RequestState::Submitting
    }

    /// Append a character to the input line. Ignored while submitting.
    pub fn input_char(&mut self, c: char) {
        if !self.is_submitting() {
            self.input.push(c);
        }
    }

    /// Remove the last character from the input line. Ignored while submitting.
    pub fn input_backspace(&mut self) {
        if !self.is_submitting() {
            self.input.pop();
        }
    }

    /// Attempt a submission.
    ///
    /// Returns the trimmed message to dispatch when the submission is
    /// accepted; the console is then `Submitting` until [`resolve`] is
    /// called. Returns `None` while a request is already in flight, or when
    /// the trimmed input is empty (which shows a validation message and stays
    /// `Idle`).
    ///
    /// [`resolve`]: TestConsole::resolve
    pub fn submit(&mut self) -> Option<String> {
        if self.is_submitting() {
            return None;
        }

        let message = self.input.trim().to_string();
        if message.is_empty() {
            self.output = ConsoleOutput::Invalid;
            return None;
        }

        self.state = RequestState::Submitting;
        self.output = ConsoleOutput::Pending;
        Some(message)
    }

    /// Resolve the in-flight request with its outcome.
    ///
    /// Success clears the input line; failure preserves it for correction and
    /// retry. Either way the console accepts the next submission.
    pub fn resolve(&mut self, message: String, outcome: Result<AnalysisResult, String>) {
        if !self.is_submitting() {
            return;
        }

        match outcome {
            Ok(result) => {
                self.state = RequestState::Succeeded;
                self.output = ConsoleOutput::Report { message, result };
                self.input.clear();
            }
            Err(err) => {
                self.state = RequestState::Failed;
                self.output = ConsoleOutput::Error(err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean_result() -> AnalysisResult {
        AnalysisResult {
            conversation_id: "abc123ef-4567-8901".to_string(),
            scam_detected: false,
            scam_type: None,
            confidence: None,
            intelligence_extracted: vec![],
            ai_response: "Hi!".to_string(),
            response_time: 12.34,
        }
    }

    #[test]
    fn test_whitespace_submission_is_rejected_in_idle() {
        let mut console = TestConsole::new();
        for c in "   ".chars() {
            console.input_char(c);
        }

        assert!(console.submit().is_none());
        assert_eq!(console.state(), RequestState::Idle);
        assert_eq!(*console.output(), ConsoleOutput::Invalid);
        // Input is preserved for correction
        assert_eq!(console.input(), "   ");
    }

    #[test]
    fn test_submit_trims_and_enters_submitting() {
        let mut console = TestConsole::new();
        for c in "  send me your UPI id  ".chars() {
            console.input_char(c);
        }

        let message = console.submit().unwrap();
        assert_eq!(message, "send me your UPI id");
        assert_eq!(console.state(), RequestState::Submitting);
        assert_eq!(*console.output(), ConsoleOutput::Pending);
    }

    #[test]
    fn test_second_submission_rejected_while_submitting() {
        let mut console = TestConsole::new();
        console.input_char('x');
        assert!(console.submit().is_some());

        // Input editing is disabled for the duration
        console.input_char('y');
        console.input_backspace();
        assert_eq!(console.input(), "x");

        // And a second dispatch is structurally impossible
        assert!(console.submit().is_none());
        assert_eq!(console.state(), RequestState::Submitting);
    }

    #[test]
    fn test_success_clears_input_and_reenables() {
        let mut console = TestConsole::new();
        console.input_char('x');
        let message = console.submit().unwrap();

        console.resolve(message, Ok(clean_result()));
        assert_eq!(console.state(), RequestState::Succeeded);
        assert_eq!(console.input(), "");

        // Next submission is allowed again
        console.input_char('y');
        assert!(console.submit().is_some());
    }

    #[test]
    fn test_failure_preserves_input() {
        let mut console = TestConsole::new();
        for c in "test".chars() {
            console.input_char(c);
        }
        let message = console.submit().unwrap();

        console.resolve(message, Err("HTTP error: 500".to_string()));
        assert_eq!(console.state(), RequestState::Failed);
        assert_eq!(console.input(), "test");
        assert!(console.submit().is_some());
    }

    #[test]
    fn test_report_lines_clean_message() {
        let output = ConsoleOutput::Report {
            message: "test".to_string(),
            result: clean_result(),
        };
        let lines = output.lines("http://127.0.0.1:8000");
        let text = lines.join("\n");

        assert!(text.contains("Scam Detected: NO"));
        assert!(text.contains("Conversation ID: abc123ef..."));
        assert!(text.contains("None detected"));
        assert!(text.contains("12.34ms"));
        assert!(!text.contains("Scam Type"));
    }

    #[test]
    fn test_report_lines_detected_scam() {
        let result = AnalysisResult {
            scam_detected: true,
            scam_type: Some("banking".to_string()),
            confidence: Some(0.925),
            intelligence_extracted: vec!["Bank Account: 1234".to_string()],
            ..clean_result()
        };
        let output = ConsoleOutput::Report {
            message: "urgent: verify your account".to_string(),
            result,
        };
        let text = output.lines("http://127.0.0.1:8000").join("\n");

        assert!(text.contains("Scam Detected: YES"));
        assert!(text.contains("Scam Type: BANKING"));
        assert!(text.contains("Confidence: 92.5%"));
        assert!(text.contains("Bank Account: 1234"));
    }

    #[test]
    fn test_error_lines_name_the_server() {
        let output = ConsoleOutput::Error("HTTP error: 500".to_string());
        let text = output.lines("http://127.0.0.1:8000").join("\n");

        assert!(text.contains("Error: HTTP error: 500"));
        assert!(text.contains("Server: http://127.0.0.1:8000"));
    }

    #[test]
    fn test_short_conversation_id_not_truncated() {
        assert_eq!(truncate_id("abcd"), "abcd");
        assert_eq!(truncate_id("abc123ef-4567"), "abc123ef");
    }
}
