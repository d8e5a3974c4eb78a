//! Run-length encoding of a character style map.

use serde::{Deserialize, Serialize};

/// The two style indices Figma uses to mark paragraph and line breaks.
///
/// Both values are checked individually; a map position holding either one is
/// a break marker and is never rendered as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BreakSentinels(pub [u32; 2]);

impl BreakSentinels {
    pub const DEFAULT: BreakSentinels = BreakSentinels([132, 133]);

    pub fn is_break(&self, index: u32) -> bool {
        index == self.0[0] || index == self.0[1]
    }
}

impl Default for BreakSentinels {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "styleIndex", rename_all = "camelCase")]
pub enum RunKind {
    Styled(u32),
    Break,
}

/// A maximal stretch of characters `start..end` sharing one [`RunKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Run {
    #[serde(flatten)]
    pub kind: RunKind,
    pub start: usize,
    pub end: usize,
}

impl Run {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn is_break(&self) -> bool {
        self.kind == RunKind::Break
    }
}

/// Split a style map into maximal runs.
///
/// Equal adjacent style indices share a run. Adjacent sentinels share a break
/// run even when they are the two different sentinel values.
pub fn encode_runs(style_map: &[u32], sentinels: BreakSentinels) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::new();
    for (offset, &index) in style_map.iter().enumerate() {
        let kind = if sentinels.is_break(index) {
            RunKind::Break
        } else {
            RunKind::Styled(index)
        };
        match runs.last_mut() {
            Some(run) if run.kind == kind => run.end = offset + 1,
            _ => runs.push(Run {
                kind,
                start: offset,
                end: offset + 1,
            }),
        }
    }
    runs
}
