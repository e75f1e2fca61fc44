//! CSV and HTML report export for a finished estimate.

use std::{
    fmt::Write as _,
    io,
    path::{Path, PathBuf},
    string::FromUtf8Error,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::{SystemTime, UNIX_EPOCH},
};

use thiserror::Error;
use tracing::{info, warn};

use super::store::atomic_write;
use crate::{
    domain::EstimateRecord,
    i18n::{t, Language, Text},
    util::format::{format_inr, today_label},
};

const EXPORT_DIR_NAME: &str = "build-cost-estimator";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no writable export directory")]
    NoDirectory,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Encoding(#[from] FromUtf8Error),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportKind {
    Csv,
    Report,
}

impl ExportKind {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportKind::Csv => "csv",
            ExportKind::Report => "html",
        }
    }

    pub fn failure_message(&self, language: Language) -> &'static str {
        let text = match self {
            ExportKind::Csv => Text::ExportCsvFailed,
            ExportKind::Report => Text::ExportReportFailed,
        };
        t(language, text)
    }
}

/// In-flight flag so a second trigger cannot start a duplicate export.
#[derive(Clone, Debug, Default)]
pub struct ExportGate {
    busy: Arc<AtomicBool>,
}

impl ExportGate {
    pub fn try_begin(&self) -> Option<ExportTicket> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| ExportTicket {
                busy: Arc::clone(&self.busy),
            })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// Held for the duration of one export; dropping it reopens the gate.
#[derive(Debug)]
pub struct ExportTicket {
    busy: Arc<AtomicBool>,
}

impl ExportTicket {
    /// Performs the export this ticket was issued for. The gate reopens when
    /// this returns, whether or not the write succeeded.
    pub fn export(
        self,
        kind: ExportKind,
        record: &EstimateRecord,
        language: Language,
        dir: &Path,
    ) -> Result<PathBuf, ExportError> {
        export_to(kind, record, language, dir)
    }
}

impl Drop for ExportTicket {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}

pub fn render_csv(record: &EstimateRecord, language: Language) -> Result<String, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(["Material", "Quantity", "Unit", "Rate", "Cost"])?;
    for line in &record.line_items {
        let qty = format!("{:.2}", line.qty);
        let rate = format!("{:.2}", line.rate);
        let cost = format!("{:.2}", line.cost);
        writer.write_record([
            language.line_label(line),
            qty.as_str(),
            line.unit.as_str(),
            rate.as_str(),
            cost.as_str(),
        ])?;
    }
    let total = format!("{:.2}", record.total);
    writer.write_record(["Total", "", "", "", total.as_str()])?;
    let bytes = writer
        .into_inner()
        .map_err(|err| ExportError::Io(err.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

pub fn render_report(record: &EstimateRecord, language: Language) -> String {
    let area = record
        .area()
        .map(|area| format!("{area:.2}"))
        .unwrap_or_else(|| "-".to_string());

    let mut rows = String::new();
    for line in &record.line_items {
        let _ = write!(
            rows,
            "<tr><td>{}</td><td class=\"num\">{:.2} {}</td><td class=\"num\">₹{:.2}</td><td class=\"num\">₹{:.2}</td></tr>",
            escape_html(language.line_label(line)),
            line.qty,
            line.unit,
            line.rate,
            line.cost,
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
body {{ font-family: Arial, sans-serif; max-width: 800px; margin: 0 auto; padding: 20px; }}
h1 {{ text-align: center; color: #1a365d; }}
.details {{ background: #f7fafc; padding: 20px; border-radius: 8px; margin-bottom: 20px; }}
table {{ width: 100%; border-collapse: collapse; margin-bottom: 20px; }}
th, td {{ border: 1px solid #e2e8f0; padding: 12px; text-align: left; }}
th {{ background: #edf2f7; }}
.num {{ text-align: right; }}
.total {{ background: #1a365d; color: white; padding: 20px; border-radius: 8px; text-align: center; }}
footer {{ text-align: center; color: #718096; margin-top: 20px; font-size: 12px; }}
</style>
</head>
<body>
<h1>{title}</h1>
<div class="details">
<h2>Project Details</h2>
<p><strong>Dimensions:</strong> {length} × {breadth} × {floors} ft</p>
<p><strong>Total Area:</strong> {area} sq ft</p>
<p><strong>Contingency:</strong> {contingency}%</p>
</div>
<table>
<thead><tr><th>{material}</th><th class="num">{qty}</th><th class="num">{rate}</th><th class="num">{cost}</th></tr></thead>
<tbody>{rows}</tbody>
</table>
<div class="total"><h2>{total_label}: ₹{total}</h2></div>
<footer>Generated on {date}</footer>
</body>
</html>
"#,
        lang = language.code(),
        title = t(language, Text::Title),
        length = escape_html(&record.length),
        breadth = escape_html(&record.breadth),
        floors = escape_html(&record.floors),
        area = area,
        contingency = escape_html(&record.contingency),
        material = t(language, Text::Material),
        qty = t(language, Text::Qty),
        rate = t(language, Text::Rate),
        cost = t(language, Text::Cost),
        rows = rows,
        total_label = t(language, Text::TotalCost),
        total = format_inr(record.total),
        date = today_label(),
    )
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Downloads, then documents, then the local data directory.
pub fn default_export_dir() -> Result<PathBuf, ExportError> {
    dirs::download_dir()
        .or_else(dirs::document_dir)
        .or_else(|| dirs::data_local_dir().map(|dir| dir.join(EXPORT_DIR_NAME)))
        .ok_or(ExportError::NoDirectory)
}

/// Renders `record` and writes it into `dir`. Returns the written file.
pub fn export_to(
    kind: ExportKind,
    record: &EstimateRecord,
    language: Language,
    dir: &Path,
) -> Result<PathBuf, ExportError> {
    let contents = match kind {
        ExportKind::Csv => render_csv(record, language)?,
        ExportKind::Report => render_report(record, language),
    };
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    let path = dir.join(format!(
        "construction_estimate_{millis}.{}",
        kind.extension()
    ));
    atomic_write(&path, contents.as_bytes()).map_err(|err| {
        warn!(path = %path.display(), "export write failed: {err}");
        err
    })?;
    info!(path = %path.display(), ?kind, "estimate exported");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::domain::{calculate, DimensionInputs, RateTable};

    fn sample() -> EstimateRecord {
        let inputs = DimensionInputs {
            length: "40".to_string(),
            breadth: "25".to_string(),
            floors: "1".to_string(),
            contingency: "0".to_string(),
        };
        calculate(&inputs, &RateTable::defaults(), "2026-10-18T09:30:00Z".into()).unwrap()
    }

    fn export_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("build_cost_export_{name}_{}", uuid::Uuid::new_v4()))
    }

    #[test]
    fn csv_has_header_rows_and_total() {
        let record = sample();
        let csv = render_csv(&record, Language::En).unwrap();
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines[0], "Material,Quantity,Unit,Rate,Cost");
        assert_eq!(lines[1], "Cement,400.00,bag,380.00,152000.00");
        assert_eq!(lines[2], "Steel (Saria),4.00,ton,65000.00,260000.00");
        assert_eq!(lines.len(), record.line_items.len() + 2);
        assert_eq!(
            *lines.last().unwrap(),
            format!("Total,,,,{:.2}", record.total)
        );
    }

    #[test]
    fn csv_uses_localized_labels() {
        let csv = render_csv(&sample(), Language::Hi).unwrap();
        assert!(csv.lines().nth(1).unwrap().starts_with("सीमेंट,"));
    }

    #[test]
    fn report_contains_project_details() {
        let mut record = sample();
        record.contingency = "<b>5</b>".to_string();
        let html = render_report(&record, Language::En);
        assert!(html.contains("Construction Cost Estimator"));
        assert!(html.contains("40 × 25 × 1 ft"));
        assert!(html.contains("1000.00 sq ft"));
        assert!(html.contains("&lt;b&gt;5&lt;/b&gt;%"));
        assert!(html.contains(&format!("₹{}", format_inr(record.total))));
    }

    #[test]
    fn report_switches_language() {
        let html = render_report(&sample(), Language::Hi);
        assert!(html.contains("कुल लागत"));
        assert!(html.contains("रेत"));
    }

    #[test]
    fn failure_messages_follow_language() {
        assert_eq!(
            ExportKind::Csv.failure_message(Language::En),
            "Failed to export CSV. Please try again."
        );
        assert_ne!(
            ExportKind::Report.failure_message(Language::Hi),
            ExportKind::Report.failure_message(Language::En)
        );
        let html = render_report(&sample(), Language::Hi);
        assert!(html.contains("<th class=\"num\">दर</th>"));
    }

    #[test]
    fn export_writes_file_with_extension() {
        let dir = export_dir("write");
        let path = export_to(ExportKind::Csv, &sample(), Language::En, &dir).unwrap();
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("csv"));
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("Material,"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn gate_rejects_overlapping_exports() {
        let gate = ExportGate::default();
        let ticket = gate.try_begin().expect("first export starts");
        assert!(gate.is_busy());
        assert!(gate.try_begin().is_none());

        let dir = export_dir("ticket");
        let path = ticket
            .export(ExportKind::Report, &sample(), Language::En, &dir)
            .unwrap();
        assert!(path.exists());
        assert!(!gate.is_busy());
        assert!(gate.try_begin().is_some());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn gate_reopens_after_failed_export() {
        let gate = ExportGate::default();
        let blocker = export_dir("blocked");
        fs::create_dir_all(blocker.parent().unwrap()).unwrap();
        fs::write(&blocker, b"a file, not a directory").unwrap();

        let ticket = gate.try_begin().unwrap();
        let result = ticket.export(ExportKind::Csv, &sample(), Language::En, &blocker);
        assert!(matches!(result, Err(ExportError::Io(_))));
        assert!(!gate.is_busy());
        let _ = fs::remove_file(&blocker);
    }
}
