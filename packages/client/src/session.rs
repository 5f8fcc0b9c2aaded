//! WebSocket client session management.

use std::{cell::RefCell, time::Duration};

use futures_util::{Sink, SinkExt, StreamExt};
use hiroba_server::infrastructure::dto::websocket::{ClientEvent, SendMessagePayload, ServerEvent};
use rustyline::{
    Context, Editor, Helper, completion::Completer, error::ReadlineError,
    highlight::Highlighter, hint::Hinter, history::DefaultHistory, validate::Validator,
};
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::protocol::Message};

use crate::{
    error::ClientError, formatter::MessageFormatter, transcript::Transcript, typing::TypingTimer,
    ui::redisplay_prompt, view::ChatView,
};

/// Something the user did at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// The line being edited changed
    Keystroke,
    /// A line was submitted
    Line(String),
}

/// Turns user input into outbound events and owns the typing debounce
#[derive(Debug)]
pub struct InputRelay {
    timer: TypingTimer,
}

impl InputRelay {
    pub fn new(typing_timeout: Duration) -> Self {
        Self {
            timer: TypingTimer::new(typing_timeout),
        }
    }

    pub fn timer(&self) -> &TypingTimer {
        &self.timer
    }

    pub fn on_input(&mut self, input: InputEvent) -> Vec<ClientEvent> {
        match input {
            InputEvent::Keystroke => self.on_keystroke(),
            InputEvent::Line(line) => self.on_line(&line),
        }
    }

    pub fn on_keystroke(&mut self) -> Vec<ClientEvent> {
        self.timer.touch();
        vec![ClientEvent::Typing]
    }

    /// Blank lines send nothing but still end the typing state
    pub fn on_line(&mut self, line: &str) -> Vec<ClientEvent> {
        let was_typing = self.timer.clear();
        let body = line.trim();
        if body.is_empty() {
            return if was_typing {
                vec![ClientEvent::StopTyping]
            } else {
                Vec::new()
            };
        }
        vec![
            ClientEvent::SendMessage(SendMessagePayload {
                message: Some(body.to_string()),
            }),
            ClientEvent::StopTyping,
        ]
    }

    pub fn on_timer_expired(&mut self) -> Vec<ClientEvent> {
        if self.timer.clear() {
            vec![ClientEvent::StopTyping]
        } else {
            Vec::new()
        }
    }
}

/// Readline helper that reports every edit of the current line
pub struct TypingHelper {
    input_tx: mpsc::UnboundedSender<InputEvent>,
    last_line: RefCell<String>,
}

impl TypingHelper {
    pub fn new(input_tx: mpsc::UnboundedSender<InputEvent>) -> Self {
        Self {
            input_tx,
            last_line: RefCell::new(String::new()),
        }
    }

    /// Send a keystroke if `line` differs from the last one seen.
    /// Clearing the line is not a keystroke.
    fn report(&self, line: &str) {
        let mut last_line = self.last_line.borrow_mut();
        if *last_line == line {
            return;
        }
        *last_line = line.to_string();
        if !line.is_empty() {
            let _ = self.input_tx.send(InputEvent::Keystroke);
        }
    }
}

impl Hinter for TypingHelper {
    type Hint = String;

    fn hint(&self, line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        self.report(line);
        None
    }
}

impl Completer for TypingHelper {
    type Candidate = String;
}

impl Highlighter for TypingHelper {}

impl Validator for TypingHelper {}

impl Helper for TypingHelper {}

/// Run the WebSocket client session with terminal input
pub async fn run_client_session(
    url: &str,
    name: &str,
    typing_timeout: Duration,
    transcript: Option<Transcript>,
) -> Result<(), ClientError> {
    let (input_tx, input_rx) = mpsc::unbounded_channel::<InputEvent>();

    let prompt_name = name.to_string();
    // Spawn a blocking thread for rustyline (synchronous readline)
    let _readline_handle = std::thread::spawn(move || read_lines(&prompt_name, input_tx));

    run_session(url, name, typing_timeout, transcript, input_rx).await
}

fn read_lines(name: &str, input_tx: mpsc::UnboundedSender<InputEvent>) {
    let mut rl = match Editor::<TypingHelper, DefaultHistory>::new() {
        Ok(rl) => rl,
        Err(e) => {
            tracing::error!("Failed to initialize readline: {}", e);
            return;
        }
    };
    rl.set_helper(Some(TypingHelper::new(input_tx.clone())));

    let prompt = format!("{}> ", name);

    loop {
        match rl.readline(&prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    rl.add_history_entry(line.as_str()).ok();
                }
                if input_tx.send(InputEvent::Line(line)).is_err() {
                    // Channel closed, exit thread
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C
                tracing::info!("Interrupted");
                break;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D
                tracing::info!("EOF");
                break;
            }
            Err(err) => {
                tracing::error!("Readline error: {}", err);
                break;
            }
        }
    }
}

/// Drive a session from an arbitrary input source.
///
/// Ends normally when the server closes the socket or `input_rx` is closed.
pub async fn run_session(
    url: &str,
    name: &str,
    typing_timeout: Duration,
    mut transcript: Option<Transcript>,
    mut input_rx: mpsc::UnboundedReceiver<InputEvent>,
) -> Result<(), ClientError> {
    let (ws_stream, _response) = connect_async(url).await?;

    tracing::info!("Connected to chat server!");
    println!(
        "\nYou are '{}'. Type messages and press Enter to send. Press Ctrl+C to exit.\n",
        name
    );

    let (mut write, mut read) = ws_stream.split();

    let mut view = ChatView::new();
    view.set_current_user(name);
    emit(&mut write, &ClientEvent::UserJoined(Some(name.to_string()))).await?;

    let mut relay = InputRelay::new(typing_timeout);

    loop {
        let outbound = tokio::select! {
            frame = read.next() => {
                match frame {
                    Some(Ok(Message::Text(text))) => {
                        render_frame(&view, text.as_str(), transcript.as_mut(), name).await;
                    }
                    Some(Ok(Message::Binary(data))) => {
                        print!("{}", MessageFormatter::format_binary_message(data.len()));
                        redisplay_prompt(name);
                    }
                    Some(Ok(Message::Close(_))) | None => {
                        tracing::info!("Server closed the connection");
                        break;
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::warn!("WebSocket read error: {}", e);
                        return Err(e.into());
                    }
                }
                Vec::new()
            }
            input = input_rx.recv() => {
                match input {
                    Some(input) => relay.on_input(input),
                    None => {
                        tracing::info!("Input closed");
                        break;
                    }
                }
            }
            _ = relay.timer().wait() => relay.on_timer_expired(),
        };

        for event in &outbound {
            emit(&mut write, event).await?;
        }
    }

    if relay.timer().is_armed() {
        emit(&mut write, &ClientEvent::StopTyping).await.ok();
    }
    write.close().await.ok();

    Ok(())
}

async fn emit<S>(write: &mut S, event: &ClientEvent) -> Result<(), ClientError>
where
    S: Sink<Message, Error = tokio_tungstenite::tungstenite::Error> + Unpin,
{
    let json = serde_json::to_string(event)?;
    tracing::debug!("Sending {}", event.name());
    write.send(Message::Text(json.into())).await?;
    Ok(())
}

async fn render_frame(
    view: &ChatView,
    text: &str,
    mut transcript: Option<&mut Transcript>,
    name: &str,
) {
    let event = match serde_json::from_str::<ServerEvent>(text) {
        Ok(event) => event,
        Err(e) => {
            tracing::debug!("Undecodable frame: {}", e);
            print!("{}", MessageFormatter::format_raw_message(text));
            redisplay_prompt(name);
            return;
        }
    };

    let mut printed = false;
    for node in view.apply(&event) {
        let formatted = MessageFormatter::format_node(&node);
        if !formatted.is_empty() {
            print!("{}", formatted);
            printed = true;
        }
        if let Some(transcript) = transcript.as_deref_mut()
            && let Err(e) = transcript.record(&node).await
        {
            tracing::warn!("Failed to write transcript: {}", e);
        }
    }
    if printed {
        redisplay_prompt(name);
    }
}
