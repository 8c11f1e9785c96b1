//! Modal Lifecycle Example
//!
//! Drives one dialog through a full show/hide cycle against a stage,
//! logging each committed frame. There is no renderer here; the composite
//! tree a host would paint is summarized to the log instead.
//!
//! Run with: cargo run --example lifecycle
//! Logs to: lifecycle.log

use std::fs::File;
use std::time::{Duration, Instant};

use scrim::geometry::{MeasuredGeometry, WindowMetrics};
use scrim::modal::{Dialog, DialogButton, ModalState};
use scrim::node::Node;
use scrim::stage::Stage;
use simplelog::{Config, LevelFilter, WriteLogger};

const FRAME: Duration = Duration::from_millis(16);

fn summarize(node: &Node) -> String {
    match node {
        Node::Empty => "empty".into(),
        Node::Text { content, .. } => format!("text({content:?})"),
        Node::Column { children, .. } => format!("column[{}]", children.len()),
        Node::Row { children, .. } => format!("row[{}]", children.len()),
        Node::Stack { children, .. } => format!("stack[{}]", children.len()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_file = File::create("lifecycle.log")?;
    let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);

    let mut stage = Stage::new();
    stage.mount(Node::text("app content"))?;

    let window = WindowMetrics::new(400.0, 800.0);
    let mut dialog = Dialog::new(
        stage.registry().clone(),
        window,
        "Delete item?",
        DialogButton::new("Cancel", || log::info!("cancel pressed")),
        DialogButton::new("Delete", || log::info!("delete pressed")),
    );
    dialog.set_body(Node::text("This cannot be undone."));
    dialog.set_measured(MeasuredGeometry {
        width: 300.0,
        height: 120.0,
        page_x: 50.0,
        page_y: 340.0,
    });

    let t0 = Instant::now();
    dialog.set_visible(true);

    // Entrance, a pause, then exit; ~45 frames covers all of it.
    let mut hidden_at = None;
    for i in 0..120u32 {
        let now = t0 + FRAME * i;
        if i == 30 {
            dialog.set_visible(false);
        }

        dialog.tick(now);
        let applied = stage.commit();
        if applied > 0 {
            log::info!(
                "frame {i}: state={:?} composite={}",
                dialog.state(),
                summarize(&stage.composite())
            );
        }
        if dialog.state() == ModalState::Hidden && i > 0 {
            hidden_at = Some(i);
            break;
        }
    }

    match hidden_at {
        Some(i) => log::info!("dialog settled hidden after {i} frames"),
        None => log::warn!("dialog never settled"),
    }
    println!("done; see lifecycle.log");
    Ok(())
}
