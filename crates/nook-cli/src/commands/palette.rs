use std::cell::RefCell;
use std::rc::Rc;

use nook_core::palette::{CreateCallbacks, CreateKind, DeferredActions};
use nook_core::CommandPalette;
use serde::Serialize;

use crate::commands::common::{format_palette_lines, palette_view};
use crate::error::CliError;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct DispatchRecord {
    pub effect: String,
    pub target: String,
}

pub fn run_palette(query: &str, select: Option<usize>, as_json: bool) -> Result<String, CliError> {
    let mut palette = CommandPalette::builtin();
    palette.open();
    palette.set_query(query);

    let Some(index) = select else {
        let view = palette_view(query, &palette.layout());
        return if as_json {
            Ok(format!("{}\n", serde_json::to_string_pretty(&view)?))
        } else {
            Ok(render_lines(format_palette_lines(&view)))
        };
    };

    let records = activate(&mut palette, index)?;
    if as_json {
        Ok(format!("{}\n", serde_json::to_string_pretty(&records)?))
    } else {
        Ok(render_lines(
            records
                .iter()
                .map(|record| format!("{} {}", record.effect, record.target))
                .collect(),
        ))
    }
}

/// Activate a row and perform the resulting action through the deferred
/// queue, recording every effect that fired.
pub fn activate(palette: &mut CommandPalette<'_>, index: usize) -> Result<Vec<DispatchRecord>, CliError> {
    let count = palette.layout().len();
    if index >= count {
        return Err(CliError::ItemOutOfRange { index, count });
    }
    palette.select(index);

    let mut deferred = DeferredActions::new();
    if let Some(action) = palette.activate_selected() {
        deferred.schedule(action);
    }

    let records = Rc::new(RefCell::new(Vec::new()));
    let mut callbacks = CreateCallbacks::new();
    for kind in [CreateKind::Source, CreateKind::Notebook, CreateKind::Podcast] {
        let records = Rc::clone(&records);
        callbacks = callbacks.with(kind, move || {
            records.borrow_mut().push(DispatchRecord {
                effect: "create".to_string(),
                target: kind.to_string(),
            });
        });
    }

    let navigated = Rc::clone(&records);
    let mut navigator = move |path: &str| {
        navigated.borrow_mut().push(DispatchRecord {
            effect: "navigate".to_string(),
            target: path.to_string(),
        });
    };
    deferred.run_pending(&mut navigator, &mut callbacks);

    Ok(records.take())
}

fn render_lines(lines: Vec<String>) -> String {
    lines.into_iter().map(|line| line + "\n").collect()
}
