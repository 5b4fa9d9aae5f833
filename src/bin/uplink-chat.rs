//! Interactive terminal chat against the relay service.
//!
//! This binary provides a REPL that establishes a session against a target
//! URL and exchanges messages with the remote agent, revealing replies
//! character by character.
//!
//! # Usage
//!
//! ```bash
//! # Connect interactively
//! uplink-chat
//!
//! # Point at a non-default relay and connect on startup
//! uplink-chat --base-url http://relay.example.com/ --target http://example.com
//!
//! # Disable colors (useful for piping output)
//! uplink-chat --no-color
//! ```
//!
//! # Commands
//!
//! While chatting, you can use slash commands:
//! - `/connect <url>` - Establish a session against a target URL
//! - `/status` - Show session status and id
//! - `/history` - Replay the conversation log
//! - `/help` - Show available commands
//! - `/quit` - Exit the application

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use arrrg::CommandLine;
use futures::StreamExt;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use uplink::chat::{
    ChatArgs, ChatCommand, ChatConfig, PlainTextRenderer, Renderer, help_text, parse_command,
};
use uplink::{Origin, Relay, SessionController, reveal};

/// Main entry point for the uplink-chat application.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (args, _) = ChatArgs::from_command_line_relaxed("uplink-chat [OPTIONS]");
    let config = ChatConfig::from(args);
    let use_color = config.use_color;
    let interval = config.reveal_interval;

    let client = Relay::with_options(Some(config.base_url.clone()), None)?;
    let mut controller = SessionController::new(client);
    let mut renderer = PlainTextRenderer::with_color(use_color);
    let mut rl = DefaultEditor::new()?;

    // Flag for interrupting a reveal in progress
    let interrupted = Arc::new(AtomicBool::new(false));

    // Set up Ctrl+C handler
    let interrupted_clone = interrupted.clone();
    ctrlc::set_handler(move || {
        interrupted_clone.store(true, Ordering::Relaxed);
    })?;

    println!("uplink-chat (relay: {})", config.base_url);
    println!("Type /connect <url> to begin, /help for commands, /quit to exit\n");

    if let Some(target) = config.target.clone() {
        connect(&mut controller, &mut renderer, &target, interval, &interrupted).await;
    }

    loop {
        // Reset interrupt flag before each input
        interrupted.store(false, Ordering::Relaxed);

        let readline = rl.readline("> ");

        match readline {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line);

                // Check for slash commands
                if let Some(cmd) = parse_command(line) {
                    match cmd {
                        ChatCommand::Quit => {
                            println!("Link severed.");
                            break;
                        }
                        ChatCommand::Connect(target) => {
                            connect(&mut controller, &mut renderer, &target, interval, &interrupted)
                                .await;
                        }
                        ChatCommand::Status => {
                            print_status(&controller);
                        }
                        ChatCommand::History => {
                            print_history(&controller, &mut renderer);
                        }
                        ChatCommand::Help => {
                            for line in help_text().lines() {
                                println!("    {}", line);
                            }
                        }
                        ChatCommand::Invalid(message) => {
                            renderer.print_error(&message);
                        }
                    }
                    continue;
                }

                // Regular message - exchange with the relay
                if !controller.status().is_active() {
                    renderer.print_info("No active session. Use /connect <url> first.");
                    continue;
                }
                match controller.exchange(line).await {
                    Ok(_) => {
                        reveal_last_remote(&controller, &mut renderer, interval, &interrupted)
                            .await;
                    }
                    Err(err) if err.is_validation() => {
                        renderer.print_error(&err.to_string());
                    }
                    Err(_) => {
                        // The controller logged the failure banner; show it
                        // the same way a reply would be shown.
                        reveal_last_remote(&controller, &mut renderer, interval, &interrupted)
                            .await;
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C at prompt - soft interrupt
                println!();
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D - exit
                println!("\nLink severed.");
                break;
            }
            Err(err) => {
                renderer.print_error(&format!("Input error: {}", err));
                break;
            }
        }
    }

    Ok(())
}

/// Initiates a session and reveals the resulting banner.
async fn connect(
    controller: &mut SessionController,
    renderer: &mut PlainTextRenderer,
    target: &str,
    interval: Duration,
    interrupted: &AtomicBool,
) {
    match controller.initiate(target).await {
        Ok(session_id) => {
            renderer.print_info(&format!("Session {} assigned.", session_id));
            reveal_last_remote(controller, renderer, interval, interrupted).await;
        }
        Err(err) if err.is_validation() => {
            renderer.print_error(&err.to_string());
        }
        Err(_) => {
            reveal_last_remote(controller, renderer, interval, interrupted).await;
        }
    }
}

/// Reveals the most recent remote message character by character.
async fn reveal_last_remote(
    controller: &SessionController,
    renderer: &mut PlainTextRenderer,
    interval: Duration,
    interrupted: &AtomicBool,
) {
    let Some(message) = controller.log().last() else {
        return;
    };
    if message.origin != Origin::Remote {
        return;
    }

    renderer.start_message(Origin::Remote);
    let stream = reveal(&message.text, interval);
    futures::pin_mut!(stream);
    let mut shown = 0;
    while let Some(prefix) = stream.next().await {
        if interrupted.load(Ordering::Relaxed) {
            renderer.print_interrupted();
            return;
        }
        renderer.print_text(&prefix[shown..]);
        shown = prefix.len();
    }
    renderer.finish_message();
}

fn print_status(controller: &SessionController) {
    println!("    Session Status:");
    println!("      Status: {}", controller.status());
    match controller.session_id() {
        Some(id) => println!("      Session id: {}", id),
        None => println!("      Session id: (none)"),
    }
    match controller.target() {
        Some(target) => println!("      Target: {}", target),
        None => println!("      Target: (none)"),
    }
    println!("      Messages: {}", controller.log().len());
    println!("      Busy: {}", controller.is_busy());
}

fn print_history(controller: &SessionController, renderer: &mut PlainTextRenderer) {
    let messages = controller.log().snapshot();
    if messages.is_empty() {
        renderer.print_info("No messages yet.");
        return;
    }
    for message in messages {
        renderer.start_message(message.origin);
        renderer.print_text(&message.text);
        renderer.finish_message();
    }
}
