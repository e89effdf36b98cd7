use std::path::PathBuf;

use nook_core::config::{resolve_settings_path, Settings};
use nook_core::palette::{CommandTarget, PaletteItem, PaletteLayout};
use serde::Serialize;

use crate::error::CliError;

#[derive(Debug, Serialize)]
pub struct PaletteView {
    pub query: String,
    pub has_command_match: bool,
    pub empty_message: Option<String>,
    pub sections: Vec<PaletteSectionView>,
}

#[derive(Debug, Serialize)]
pub struct PaletteSectionView {
    pub heading: String,
    pub separated: bool,
    pub items: Vec<PaletteItemView>,
}

#[derive(Debug, Serialize)]
pub struct PaletteItemView {
    pub index: usize,
    pub label: String,
    pub kind: String,
    pub target: String,
}

pub fn load_settings(explicit: Option<PathBuf>) -> Result<Settings, CliError> {
    match resolve_settings_path(explicit) {
        Some(path) => Ok(Settings::load(&path)?),
        None => {
            tracing::warn!("No config directory available, using default settings");
            Ok(Settings::default())
        }
    }
}

pub fn palette_view(query: &str, layout: &PaletteLayout<'_>) -> PaletteView {
    let mut index = 0;
    let sections = layout
        .sections
        .iter()
        .map(|section| PaletteSectionView {
            heading: section.heading.to_string(),
            separated: section.separated,
            items: section
                .items
                .iter()
                .map(|item| {
                    let view = palette_item_view(index, *item, query);
                    index += 1;
                    view
                })
                .collect(),
        })
        .collect();

    PaletteView {
        query: query.to_string(),
        has_command_match: layout.has_command_match,
        empty_message: layout.empty_message.map(str::to_string),
        sections,
    }
}

fn palette_item_view(index: usize, item: PaletteItem<'_>, query: &str) -> PaletteItemView {
    let (kind, target) = match item {
        PaletteItem::Command(entry) => match entry.target {
            CommandTarget::NavigateTo(path) => ("navigate", path.to_string()),
            CommandTarget::Create(kind) => ("create", kind.to_string()),
        },
        PaletteItem::Fallback(mode) => (
            mode.as_str(),
            nook_core::SearchRoute::new(query, mode).path(),
        ),
    };

    PaletteItemView {
        index,
        label: item.label(query),
        kind: kind.to_string(),
        target,
    }
}

pub fn format_palette_lines(view: &PaletteView) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(message) = &view.empty_message {
        lines.push(message.clone());
    }
    for section in &view.sections {
        if section.separated {
            lines.push("---".to_string());
        }
        lines.push(section.heading.clone());
        for item in &section.items {
            lines.push(format!("  [{}] {}  {}", item.index, item.label, item.target));
        }
    }
    lines
}
