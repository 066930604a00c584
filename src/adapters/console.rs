//! Line-oriented terminal I/O shared by the shell and the presentation adapters.

use std::io;
use std::pin::Pin;

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::Mutex;

use sl_core::ports::{ConfirmationPort, NotifierPort};
use sl_core::{ConfirmRequest, Notice, NoticeLevel};

type Input = Pin<Box<dyn AsyncBufRead + Send>>;
type Output = Pin<Box<dyn AsyncWrite + Send>>;

pub struct Console {
    input: Mutex<Input>,
    output: Mutex<Output>,
}

impl Console {
    pub fn new(
        input: impl AsyncBufRead + Send + 'static,
        output: impl AsyncWrite + Send + 'static,
    ) -> Self {
        Self {
            input: Mutex::new(Box::pin(input)),
            output: Mutex::new(Box::pin(output)),
        }
    }

    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }

    /// Next input line without its terminator; `None` at end of input.
    pub async fn read_line(&self) -> io::Result<Option<String>> {
        let mut line = String::new();
        let read = self.input.lock().await.read_line(&mut line).await?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub async fn write_line(&self, line: &str) -> io::Result<()> {
        let mut output = self.output.lock().await;
        output.write_all(line.as_bytes()).await?;
        output.write_all(b"\n").await?;
        output.flush().await
    }

    /// Print `label` without a newline and read the answer.
    pub async fn prompt(&self, label: &str) -> io::Result<Option<String>> {
        {
            let mut output = self.output.lock().await;
            output.write_all(label.as_bytes()).await?;
            output.flush().await?;
        }
        self.read_line().await
    }
}

fn level_tag(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Info => "i",
        NoticeLevel::Success => "ok",
        NoticeLevel::Error => "!!",
    }
}

/// Prints notices as `[tag] title: message`.
pub struct ConsoleNotifier {
    console: std::sync::Arc<Console>,
}

impl ConsoleNotifier {
    pub fn new(console: std::sync::Arc<Console>) -> Self {
        Self { console }
    }
}

#[async_trait]
impl NotifierPort for ConsoleNotifier {
    async fn notify(&self, notice: Notice) {
        let line = format!(
            "[{}] {}: {}",
            level_tag(notice.level),
            notice.title,
            notice.message
        );
        if let Err(err) = self.console.write_line(&line).await {
            tracing::warn!(error = %err, "failed to print notice");
        }
    }
}

/// Asks yes/no questions on the console. Anything but an explicit yes declines.
pub struct ConsoleConfirmation {
    console: std::sync::Arc<Console>,
}

impl ConsoleConfirmation {
    pub fn new(console: std::sync::Arc<Console>) -> Self {
        Self { console }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "s" | "sim" | "si"
    )
}

#[async_trait]
impl ConfirmationPort for ConsoleConfirmation {
    async fn confirm(&self, request: ConfirmRequest) -> bool {
        let header = format!("{}\n{}", request.title, request.message);
        let label = format!(
            "{} / {} [y/N] ",
            request.confirm_label, request.cancel_label
        );

        let answer = match self.console.write_line(&header).await {
            Ok(()) => self.console.prompt(&label).await,
            Err(err) => Err(err),
        };

        match answer {
            Ok(Some(answer)) => is_yes(&answer),
            Ok(None) => false,
            Err(err) => {
                tracing::warn!(error = %err, "confirmation prompt failed");
                false
            }
        }
    }
}
