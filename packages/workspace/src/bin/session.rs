//! Line-oriented session host.
//!
//! Reads one JSON [`CommandEnvelope`] per line on stdin and writes every
//! [`EditorEvent`] as one JSON line on stdout. Logs go to stderr.

use screenplay_document::Document;
use screenplay_workspace::{
    CommandEnvelope, EditorCommand, EditorConfig, EditorEvent, Notice, WorkspaceServer,
};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tokio_stream::StreamExt;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    // Parse arguments
    let args: Vec<String> = std::env::args().collect();
    let mut content_path: Option<PathBuf> = None;
    let mut config_path: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--content" | "-c" => {
                let Some(value) = args.get(i + 1) else {
                    eprintln!("--content requires a value");
                    std::process::exit(1);
                };
                content_path = Some(PathBuf::from(value));
                i += 2;
            }
            "--config" => {
                let Some(value) = args.get(i + 1) else {
                    eprintln!("--config requires a value");
                    std::process::exit(1);
                };
                config_path = Some(PathBuf::from(value));
                i += 2;
            }
            "--help" | "-h" => {
                println!("Usage: screenplay-session [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --content <FILE>    Serialized document to start from");
                println!("  --config <FILE>         JSON file with editor settings");
                println!("  -h, --help              Show this help message");
                println!();
                println!("Commands are read from stdin, one JSON object per line:");
                println!(r#"  {{"command": {{"type": "applyFormat", "payload": {{"format": "character"}}}}}}"#);
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                std::process::exit(1);
            }
        }
    }

    let config = match config_path {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => EditorConfig::default(),
    };

    let document = match content_path {
        Some(path) => Document::load(Some(&std::fs::read_to_string(path)?))?,
        None => Document::new(),
    };

    let (server, handle) = WorkspaceServer::new("stdio", document, config);
    // Host-side notices share the writer so lines never interleave
    let (local_tx, local_rx) = mpsc::channel::<EditorEvent>(16);
    let mut events = handle.event_stream().merge(ReceiverStream::new(local_rx));
    let session = server.spawn();

    let writer = tokio::spawn(async move {
        let mut stdout = tokio::io::stdout();
        while let Some(event) = events.next().await {
            let mut line = serde_json::to_string(&event).unwrap_or_default();
            line.push('\n');
            if stdout.write_all(line.as_bytes()).await.is_err() {
                break;
            }
            let _ = stdout.flush().await;
        }
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<CommandEnvelope>(&line) {
            Ok(envelope) => {
                let shutdown = envelope.command == EditorCommand::Shutdown;
                handle.dispatch(envelope).await?;
                if shutdown {
                    break;
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "Ignoring malformed command line");
                let notice = EditorEvent::Notice(Notice::error(format!("Malformed command: {}", err)));
                let _ = local_tx.send(notice).await;
            }
        }
    }

    // stdin closed: stop the session, then let the writer drain
    let _ = handle.send(EditorCommand::Shutdown).await;
    session.await?;
    drop(handle);
    drop(local_tx);
    let _ = writer.await;

    Ok(())
}
