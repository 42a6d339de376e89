//! Structured text reports of an evaluated model.
//!
//! Reports are plain text, not JSON, so a failed test prints something a
//! person can read straight from the log.

use std::fmt;

use fenestra_designer::Evaluation;
use fenestra_types::{CadModel, Rect};

use crate::oracle::OracleVerdict;

/// One line per region of the layout.
pub struct RegionEntry {
    pub label: String,
    pub rect: Rect,
    pub detail: String,
}

/// A complete report for one model.
pub struct LayoutReport {
    pub header: String,
    pub regions: Vec<RegionEntry>,
    pub validation: Vec<String>,
    pub quote: String,
    pub oracle_results: Vec<OracleVerdict>,
}

impl LayoutReport {
    /// Build a report from a model and its evaluation.
    pub fn new(model: &CadModel, evaluation: &Evaluation) -> Self {
        let layout = &evaluation.layout;
        let mut regions = Vec::new();

        regions.push(RegionEntry {
            label: "outer frame".to_string(),
            rect: layout.outer_frame.frame.face,
            detail: format!("mitre {}", layout.outer_frame.frame.truncation),
        });
        if let Some(bar) = layout.transom {
            regions.push(RegionEntry {
                label: "transom".to_string(),
                rect: bar,
                detail: String::new(),
            });
        }
        for (i, m) in layout.mullions.iter().enumerate() {
            regions.push(RegionEntry {
                label: format!("mullion {}", i),
                rect: *m,
                detail: String::new(),
            });
        }
        for panel in &layout.panels {
            let label = if panel.is_upper_fixed_band {
                format!("upper {}", panel.config_index)
            } else {
                format!("panel {}", panel.config_index)
            };
            let detail = if panel.has_sash_frame {
                format!(
                    "{:?}, glass {}x{}",
                    panel.opening.kind(),
                    panel.glass_rect.w,
                    panel.glass_rect.h
                )
            } else {
                format!("{:?}", panel.opening.kind())
            };
            regions.push(RegionEntry {
                label,
                rect: panel.rect,
                detail,
            });
        }

        let validation = evaluation
            .validation
            .errors
            .iter()
            .map(|(field, v)| format!("{}: {}", field, v))
            .collect();

        Self {
            header: format!(
                "{} {}x{} mm, {} panels, transom {}",
                model.template_id,
                model.width,
                model.height,
                model.panel_count,
                model.transom_height
            ),
            regions,
            validation,
            quote: format!(
                "{:.2} m2 at {:.2}",
                evaluation.quote.area, evaluation.quote.unit_price
            ),
            oracle_results: Vec::new(),
        }
    }

    /// Attach oracle verdicts to print with the report.
    pub fn with_verdicts(mut self, verdicts: Vec<OracleVerdict>) -> Self {
        self.oracle_results = verdicts;
        self
    }

    /// Format the report as text.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for LayoutReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Layout Report ===")?;
        writeln!(f, "{}", self.header)?;
        writeln!(f)?;

        writeln!(f, "Regions ({}):", self.regions.len())?;
        for r in &self.regions {
            write!(
                f,
                "  {:<12} x={} y={} w={} h={}",
                r.label, r.rect.x, r.rect.y, r.rect.w, r.rect.h
            )?;
            if r.detail.is_empty() {
                writeln!(f)?;
            } else {
                writeln!(f, "  [{}]", r.detail)?;
            }
        }

        if self.validation.is_empty() {
            writeln!(f, "Validation: ok")?;
        } else {
            writeln!(f, "Validation ({} errors):", self.validation.len())?;
            for line in &self.validation {
                writeln!(f, "  {}", line)?;
            }
        }

        writeln!(f, "Quote: {}", self.quote)?;

        if !self.oracle_results.is_empty() {
            let passed = self.oracle_results.iter().filter(|v| v.passed).count();
            writeln!(f, "Oracles ({}/{} passed):", passed, self.oracle_results.len())?;
            for v in &self.oracle_results {
                let mark = if v.passed { "PASS" } else { "FAIL" };
                writeln!(f, "  [{}] {}: {}", mark, v.oracle_name, v.detail)?;
            }
        }
        Ok(())
    }
}
