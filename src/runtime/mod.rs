//! Runtime - executes commands and feeds results back into `update`
//!
//! File reads run on a worker thread and report back over a channel as
//! `Msg::ImportLoaded`; everything else runs inline. The model is only
//! touched from the thread that owns the runtime.

mod share;

pub use share::{RecordingShareTarget, ShareTarget};

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::{AppModel, Notification};
use crate::update::update;

/// Notification shown when no share target is available
pub const LINK_COPIED_MESSAGE: &str = "Link copied to clipboard!";

pub struct Runtime {
    model: AppModel,
    out_dir: PathBuf,
    share_target: Option<Box<dyn ShareTarget>>,
    /// Link placed on the clipboard by the share fallback
    copied_link: Option<String>,
    /// Files written by export, in order
    written: Vec<PathBuf>,
    pending_reads: usize,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
}

impl Runtime {
    pub fn new(model: AppModel, out_dir: impl Into<PathBuf>) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            model,
            out_dir: out_dir.into(),
            share_target: None,
            copied_link: None,
            written: Vec::new(),
            pending_reads: 0,
            msg_tx,
            msg_rx,
        }
    }

    pub fn with_share_target(mut self, target: Box<dyn ShareTarget>) -> Self {
        self.share_target = Some(target);
        self
    }

    pub fn model(&self) -> &AppModel {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut AppModel {
        &mut self.model
    }

    pub fn into_model(self) -> AppModel {
        self.model
    }

    pub fn copied_link(&self) -> Option<&str> {
        self.copied_link.as_deref()
    }

    pub fn written_files(&self) -> &[PathBuf] {
        &self.written
    }

    /// Run a message through `update` and execute the resulting command
    ///
    /// Returns true if the grid should be redrawn.
    pub fn dispatch(&mut self, msg: Msg) -> bool {
        match update(&mut self.model, msg) {
            Some(cmd) => {
                let redraw = cmd.needs_redraw();
                self.process_cmd(cmd);
                redraw
            }
            None => false,
        }
    }

    /// Block until every in-flight file read has been applied
    pub fn wait_idle(&mut self) {
        while self.pending_reads > 0 {
            match self.msg_rx.recv() {
                Ok(msg) => {
                    self.pending_reads -= 1;
                    self.dispatch(msg);
                }
                Err(e) => {
                    tracing::error!("Runtime channel closed: {}", e);
                    self.pending_reads = 0;
                }
            }
        }
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None => {}
            Cmd::Redraw => {}
            Cmd::WriteExport { filename, contents } => self.write_export(&filename, &contents),
            Cmd::ReadImport { path } => {
                let tx = self.msg_tx.clone();
                self.pending_reads += 1;
                std::thread::spawn(move || {
                    let result = std::fs::read_to_string(&path).map_err(|e| e.to_string());
                    let _ = tx.send(Msg::ImportLoaded { path, result });
                });
            }
            Cmd::Share { title, text, url } => self.share(&title, &text, &url),
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
        }
    }

    fn write_export(&mut self, filename: &str, contents: &str) {
        let path = self.out_dir.join(filename);
        let result = std::fs::create_dir_all(&self.out_dir)
            .and_then(|_| std::fs::write(&path, contents));
        match result {
            Ok(()) => {
                tracing::info!("Exported {} bytes to {}", contents.len(), path.display());
                self.written.push(path);
            }
            Err(e) => {
                tracing::error!("Failed to write export {}: {}", path.display(), e);
                self.model
                    .notify(Notification::error(format!("Export failed: {}", e)));
            }
        }
    }

    fn share(&mut self, title: &str, text: &str, url: &str) {
        let shared = match self.share_target.as_mut() {
            Some(target) => target.share(title, text, url),
            None => Err("no share target".to_string()),
        };
        if let Err(e) = shared {
            tracing::debug!(reason = %e, "share unavailable, copying link");
            self.copied_link = Some(url.to_string());
            self.model.notify(Notification::info(LINK_COPIED_MESSAGE));
        }
    }
}
