//! Rendering registry contents as text lines or JSON.

use serde::Serialize;
use steven_block::{BlockDescriptor, BlockRegistry, CombinedId, StateMap};

use crate::config::OutputFormat;

/// One reported block.
#[derive(Debug, Serialize)]
pub struct Entry<'a> {
    /// `None` for family variants that occupy no slot.
    pub id: Option<u16>,
    pub family: Option<u8>,
    pub offset: Option<u8>,
    pub block: String,
    pub model: String,
    pub variant: String,
    pub cull_against: bool,
    pub states: &'a StateMap,
}

impl<'a> Entry<'a> {
    pub fn new(id: Option<CombinedId>, block: &'a BlockDescriptor) -> Self {
        Self {
            id: id.map(CombinedId::raw),
            family: block.family().map(|f| f.get()),
            offset: id.map(CombinedId::offset),
            block: block.to_string(),
            model: block.model_name(),
            variant: block.model_variant(),
            cull_against: block.cull_against(),
            states: block.states(),
        }
    }
}

/// Every placed id, followed by unplaced variants when asked for.
pub fn table_entries(registry: &BlockRegistry, include_unplaced: bool) -> Vec<Entry<'_>> {
    let mut entries: Vec<Entry<'_>> = registry
        .entries()
        .map(|(id, block)| Entry::new(Some(id), block))
        .collect();
    if include_unplaced {
        for family in registry.families() {
            for variant in family.variants() {
                if registry.combined_id(variant).is_none() {
                    entries.push(Entry::new(None, variant));
                }
            }
        }
    }
    entries
}

/// Resolve each requested id; unknown ids report the missing block.
pub fn lookup_entries<'a>(registry: &'a BlockRegistry, ids: &[u16]) -> Vec<Entry<'a>> {
    ids.iter()
        .map(|&raw| Entry::new(Some(CombinedId(raw)), registry.lookup(raw)))
        .collect()
}

pub fn render(entries: &[Entry<'_>], format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(entries),
        OutputFormat::Text => Ok(entries
            .iter()
            .map(text_line)
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

fn text_line(entry: &Entry<'_>) -> String {
    let id = match (entry.id, entry.offset) {
        (Some(raw), Some(offset)) => format!("{raw:>5} {:>3}:{offset:<2}", raw >> 4),
        _ => format!("{:>5} {:>6}", "-", "-"),
    };
    let states: Vec<String> = entry
        .states
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect();
    format!(
        "{id}  {:<28} {:<32} model={}#{}{}",
        entry.block,
        states.join(","),
        entry.model,
        entry.variant,
        if entry.cull_against { "" } else { " (no cull)" }
    )
}
