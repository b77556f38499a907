//! Output formatting utilities
//!
//! Provides table and JSON output formatting for CLI commands.

use crate::cli::args::OutputFormat;
use crate::domain::{ClockRecord, Rgb};
use crate::services::{Frame, RingFrame};
use serde::Serialize;
use std::io::{self, Write};

/// Format and print output based on the selected format
pub fn print_output<T: Serialize + TableDisplay>(data: &T, format: OutputFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match format {
        OutputFormat::Table => {
            writeln!(handle, "{}", data.to_table())?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string());
            writeln!(handle, "{}", json)?;
        }
        OutputFormat::Compact => {
            writeln!(handle, "{}", data.to_compact())?;
        }
    }

    Ok(())
}

/// Trait for types that can be displayed as a table
pub trait TableDisplay {
    /// Format as a table string
    fn to_table(&self) -> String;

    /// Format as a compact single line
    fn to_compact(&self) -> String {
        self.to_table().replace('\n', " | ")
    }
}

/// Clock entry for display
#[derive(Debug, Clone, Serialize)]
pub struct ClockEntry {
    pub id: u32,
    pub length: u8,
    pub unit: String,
    pub effective_seconds: u32,
}

impl From<&ClockRecord> for ClockEntry {
    fn from(record: &ClockRecord) -> Self {
        Self {
            id: record.id.value(),
            length: record.length.get(),
            unit: record.unit.to_string(),
            effective_seconds: record.effective_duration(),
        }
    }
}

impl TableDisplay for ClockEntry {
    fn to_table(&self) -> String {
        format!(
            "clock {:<3} {:>2} {}  ({}s per cycle)",
            self.id, self.length, self.unit, self.effective_seconds
        )
    }

    fn to_compact(&self) -> String {
        format!("{}:{}{}", self.id, self.length, self.unit)
    }
}

/// Clock list for display
#[derive(Debug, Clone, Serialize)]
pub struct ClockList {
    pub clocks: Vec<ClockEntry>,
    pub capacity: usize,
}

impl TableDisplay for ClockList {
    fn to_table(&self) -> String {
        let mut output = format!("Clocks: {}/{}\n\n", self.clocks.len(), self.capacity);

        for clock in &self.clocks {
            output.push_str(&clock.to_table());
            output.push('\n');
        }

        output
    }

    fn to_compact(&self) -> String {
        self.clocks
            .iter()
            .map(|c| c.to_compact())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// One ring of a frame for display
#[derive(Debug, Clone, Serialize)]
pub struct RingEntry {
    pub id: u32,
    pub index: usize,
    pub radius: f32,
    pub fraction: f32,
    pub degrees: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub fill: Rgb,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl RingEntry {
    /// Build from a computed ring
    pub fn from_ring(ring: &RingFrame, labels: bool, paths: bool) -> Self {
        Self {
            id: ring.id.value(),
            index: ring.index,
            radius: ring.radius,
            fraction: ring.fraction,
            degrees: ring.segment.sweep().to_degrees(),
            label: labels.then(|| ring.label.clone()),
            fill: ring.fill,
            path: paths.then(|| ring.segment.to_svg_path()),
        }
    }
}

/// Frame for display
#[derive(Debug, Clone, Serialize)]
pub struct FrameOutput {
    pub time: f64,
    pub rings: Vec<RingEntry>,
}

impl FrameOutput {
    /// Build from a computed frame
    pub fn from_frame(frame: &Frame, labels: bool, paths: bool) -> Self {
        Self {
            time: frame.time,
            rings: frame
                .rings
                .iter()
                .map(|r| RingEntry::from_ring(r, labels, paths))
                .collect(),
        }
    }
}

impl TableDisplay for FrameOutput {
    fn to_table(&self) -> String {
        let mut output = format!("Frame at {:.3}s\n", self.time);
        if self.rings.is_empty() {
            output.push_str("  (no clocks)\n");
        }

        for ring in &self.rings {
            output.push_str(&format!(
                "  [{}] clock {:<3} r={:<4} {:>6.1}% {:>6.1}°  {}",
                ring.index,
                ring.id,
                ring.radius,
                ring.fraction * 100.0,
                ring.degrees,
                ring.fill
            ));
            if let Some(ref label) = ring.label {
                output.push_str(&format!("  {}", label));
            }
            output.push('\n');
            if let Some(ref path) = ring.path {
                output.push_str(&format!("      d=\"{}\"\n", path));
            }
        }

        output
    }

    fn to_compact(&self) -> String {
        self.rings
            .iter()
            .map(|r| match r.label {
                Some(ref label) => format!("{}:{}", r.id, label),
                None => format!("{}:{:.0}%", r.id, r.fraction * 100.0),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Sampled gradient for display
#[derive(Debug, Clone, Serialize)]
pub struct ScaleOutput {
    pub stops: Vec<Rgb>,
    pub samples: Vec<ScaleSample>,
}

/// One gradient sample
#[derive(Debug, Clone, Serialize)]
pub struct ScaleSample {
    pub t: f32,
    pub color: Rgb,
}

impl TableDisplay for ScaleOutput {
    fn to_table(&self) -> String {
        let stops: Vec<String> = self.stops.iter().map(|c| c.to_string()).collect();
        let mut output = format!("Stops: {}\n", stops.join(" -> "));
        for sample in &self.samples {
            output.push_str(&format!("  {:.3}  {}\n", sample.t, sample.color));
        }
        output
    }

    fn to_compact(&self) -> String {
        self.samples
            .iter()
            .map(|s| s.color.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Simple message output
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub message: String,
    pub success: bool,
}

impl TableDisplay for Message {
    fn to_table(&self) -> String {
        self.message.clone()
    }
}
