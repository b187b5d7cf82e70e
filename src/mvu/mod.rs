// SPDX-License-Identifier: MIT

//! Root Model-View-Update kernel wiring session state, messages, and commands.

use std::path::PathBuf;

use time::OffsetDateTime;

use crate::logic::wordlist;
use crate::models::word_list::WordList;

/// Top-level application state.
#[derive(Default)]
pub struct AppModel {
    /// Raw multi-line text in the input area.
    pub input_text: String,
    /// Accumulated unique words for this session.
    pub word_list: WordList,
    /// Formatted output of the most recent export, shown read-only.
    pub export_preview: Option<String>,
    /// Latest status message to display.
    pub status: Option<String>,
    /// Latest error message to display in modal.
    pub error: Option<String>,
}

/// Application messages routed through the update function.
pub enum Msg {
    InputChanged(String),
    AddWords,
    /// Export was triggered; carries the wall-clock time captured at the
    /// click site so the update path stays deterministic under test.
    ExportRequested(OffsetDateTime),
    ExportCompleted(Result<PathBuf, String>),
    DismissError,
}

/// Commands represent side-effects executed between frames.
pub enum Command {
    WriteExport { path: PathBuf, contents: String },
}

/// Update the application model and enqueue commands.
pub fn update(model: &mut AppModel, msg: Msg, cmds: &mut Vec<Command>) {
    match msg {
        Msg::InputChanged(text) => model.input_text = text,
        Msg::DismissError => model.error = None,
        Msg::AddWords => {
            let cleaned = wordlist::clean_input(&model.input_text);
            // The reported count is the normalizer's count for this call,
            // not the number of newly inserted words. Words already in the
            // list are skipped silently but still counted.
            let reported = cleaned.len();
            for word in cleaned {
                model.word_list.insert(word);
            }
            surface_event(model, format!("Added {reported} words."), false);
        }
        Msg::ExportRequested(stamp) => {
            if model.word_list.is_empty() {
                surface_event(model, "No words entered.".to_string(), false);
                return;
            }

            let formatted = wordlist::format_list(&model.word_list.sorted());
            match wordlist::export_filename(stamp) {
                Ok(filename) => {
                    model.export_preview = Some(formatted.clone());
                    cmds.push(Command::WriteExport {
                        // Relative path: exports land in the current working directory.
                        path: PathBuf::from(filename),
                        contents: formatted,
                    });
                }
                Err(err) => surface_event(model, format!("Export failed: {err}"), true),
            }
        }
        Msg::ExportCompleted(result) => match result {
            Ok(path) => surface_event(model, format!("List exported to {}", path.display()), false),
            Err(err) => surface_event(model, format!("Export failed:\n\n{err}"), true),
        },
    }
}

/// Execute a command synchronously and return the resulting message.
pub fn run_command(cmd: Command) -> Msg {
    match cmd {
        Command::WriteExport { path, contents } => {
            let res = wordlist::write_export(&path, &contents).map(|_| path);
            Msg::ExportCompleted(res.map_err(|e| e.to_string()))
        }
    }
}

/// Update status/error fields consistently for user feedback.
fn surface_event(model: &mut AppModel, message: String, is_error: bool) {
    if is_error {
        model.error = Some(message.clone());
    }
    model.status = Some(message);
}
