//! Replay report output

use std::fmt;
use std::io::Write;

use anyhow::Result;
use serde::Serialize;
use sheetkit::DragMode;

/// Sheet state after one scenario step
#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub index: usize,
    pub step: &'static str,
    pub offset: f32,
    pub presented: bool,
    pub mode: DragMode,
    pub animating: bool,
    pub animation_target: Option<f32>,
    pub content_offset: f32,
    pub frozen_scroll_offset: f32,
}

/// Machine-readable result of a replay
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    pub fps: u32,
    pub frames: u64,
    pub final_offset: f32,
    pub steps: Vec<StepReport>,
}

impl ReplayReport {
    pub fn write_json<W: Write>(&self, writer: &mut W) -> Result<()> {
        let payload = serde_json::to_string_pretty(self)?;
        writer.write_all(payload.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

impl fmt::Display for ReplayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>4}  {:<12} {:>8} {:>9}  {:<18} {:>8} {:>8}",
            "#", "step", "offset", "presented", "mode", "target", "content"
        )?;
        for step in &self.steps {
            let target = step
                .animation_target
                .map(|t| format!("{t:.1}"))
                .unwrap_or_else(|| "-".to_string());
            writeln!(
                f,
                "{:>4}  {:<12} {:>8.1} {:>9}  {:<18} {:>8} {:>8.1}",
                step.index,
                step.step,
                step.offset,
                step.presented,
                format!("{:?}", step.mode),
                target,
                step.content_offset,
            )?;
        }
        write!(
            f,
            "{} frames at {} fps, final offset {:.1}",
            self.frames, self.fps, self.final_offset
        )
    }
}
