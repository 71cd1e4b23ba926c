//! A4 PDF rendering of the assessment report
//!
//! Layout, top to bottom: brand band, title and date, the six metric lines,
//! numbered recommendations, call-to-action box, footer band. The whole
//! call-to-action box links to the booking URL.

use printpdf::{
    Actions, BuiltinFont, Color, IndirectFontRef, LinkAnnotation, Mm, PdfDocument,
    PdfLayerReference, Rect, Rgb,
};
use socialflip_application::ports::report_exporter::{ExportError, ReportExporter};
use socialflip_domain::AssessmentReport;
use std::path::{Path, PathBuf};
use tracing::debug;

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 20.0;
const VALUE_COLUMN: f32 = 130.0;

/// #9D5CFF
const BRAND_PURPLE: (u8, u8, u8) = (157, 92, 255);
/// #4B9EFF
const BRAND_BLUE: (u8, u8, u8) = (75, 158, 255);
const WHITE: (u8, u8, u8) = (255, 255, 255);
const INK: (u8, u8, u8) = (33, 33, 33);
const MUTED: (u8, u8, u8) = (110, 110, 110);

#[derive(Debug, Default)]
pub struct PdfReportExporter;

impl PdfReportExporter {
    pub fn new() -> Self {
        Self
    }

    /// Render the report to PDF bytes
    pub fn render(&self, report: &AssessmentReport) -> Result<Vec<u8>, ExportError> {
        let title = report.title.join(" ");
        let (doc, page, layer) =
            PdfDocument::new(&title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Report");
        let layer = doc.get_page(page).get_layer(layer);

        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(render_error)?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(render_error)?;
        let canvas = Canvas {
            layer,
            regular,
            bold,
        };

        // Brand band
        canvas.fill_rect(0.0, PAGE_HEIGHT - 30.0, PAGE_WIDTH, PAGE_HEIGHT, BRAND_PURPLE);
        canvas.text(report.brand, 22.0, MARGIN, PAGE_HEIGHT - 19.0, true, WHITE);

        // Title
        canvas.text(report.title[0], 24.0, MARGIN, 245.0, true, INK);
        canvas.text(report.title[1], 24.0, MARGIN, 235.0, true, INK);
        canvas.text(
            &format!("Generated on: {}", report.generated_on),
            11.0,
            MARGIN,
            225.0,
            false,
            MUTED,
        );

        // Metrics
        canvas.text(report.metrics_heading, 16.0, MARGIN, 205.0, true, BRAND_PURPLE);
        let mut y = 193.0;
        for line in &report.metrics {
            canvas.text(line.label, 12.0, MARGIN + 5.0, y, false, INK);
            canvas.text(&line.value, 12.0, VALUE_COLUMN, y, true, BRAND_PURPLE);
            y -= 10.0;
        }

        // Recommendations
        y -= 8.0;
        canvas.text(report.recommendations_heading, 16.0, MARGIN, y, true, BRAND_PURPLE);
        y -= 12.0;
        for rec in &report.recommendations {
            canvas.text(rec, 11.0, MARGIN + 5.0, y, false, INK);
            y -= 8.0;
        }

        // Call to action
        canvas.fill_rect(MARGIN, 40.0, PAGE_WIDTH - MARGIN, 62.0, BRAND_BLUE);
        canvas.text(report.call_to_action, 16.0, MARGIN + 8.0, 53.0, true, WHITE);
        canvas.text(&report.booking_url, 9.0, MARGIN + 8.0, 45.0, false, WHITE);
        canvas.link(MARGIN, 40.0, PAGE_WIDTH - MARGIN, 62.0, &report.booking_url);

        // Footer band
        canvas.fill_rect(0.0, 0.0, PAGE_WIDTH, 15.0, BRAND_PURPLE);
        canvas.text(report.footer, 9.0, MARGIN, 6.0, false, WHITE);

        doc.save_to_bytes().map_err(render_error)
    }
}

impl ReportExporter for PdfReportExporter {
    fn export(&self, report: &AssessmentReport, path: &Path) -> Result<PathBuf, ExportError> {
        let bytes = self.render(report)?;

        let write_error = |e: std::io::Error| ExportError::Write {
            path: path.display().to_string(),
            message: e.to_string(),
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(write_error)?;
        }
        std::fs::write(path, &bytes).map_err(write_error)?;

        debug!("Wrote {} bytes to {}", bytes.len(), path.display());
        Ok(path.to_path_buf())
    }
}

fn render_error(e: printpdf::Error) -> ExportError {
    ExportError::Render(format!("{:?}", e))
}

fn color((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(Rgb::new(
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
        None,
    ))
}

struct Canvas {
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl Canvas {
    fn fill_rect(&self, x1: f32, y1: f32, x2: f32, y2: f32, fill: (u8, u8, u8)) {
        self.layer.set_fill_color(color(fill));
        self.layer.add_rect(Rect::new(Mm(x1), Mm(y1), Mm(x2), Mm(y2)));
    }

    fn link(&self, x1: f32, y1: f32, x2: f32, y2: f32, uri: &str) {
        self.layer.add_link_annotation(LinkAnnotation::new(
            Rect::new(Mm(x1), Mm(y1), Mm(x2), Mm(y2)),
            None,
            None,
            Actions::uri(uri.to_string()),
            None,
        ));
    }

    fn text(&self, text: &str, size: f32, x: f32, y: f32, bold: bool, fill: (u8, u8, u8)) {
        let font = if bold { &self.bold } else { &self.regular };
        self.layer.set_fill_color(color(fill));
        self.layer.use_text(text, size, Mm(x), Mm(y), font);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use socialflip_domain::SummaryMetrics;
    use socialflip_domain::report::DEFAULT_BOOKING_URL;

    fn report() -> AssessmentReport {
        let summary = SummaryMetrics {
            time_recovered: 40.0,
            productivity_value: 2000.0,
            content_generated: 84.0,
            cost_reduction: 60.0,
            stress_reduction: 80.0,
            revenue_potential: 100000.0,
        };
        AssessmentReport::new(summary, "10/18/2026", DEFAULT_BOOKING_URL)
    }

    #[test]
    fn test_render_produces_pdf() {
        let bytes = PdfReportExporter::new().render(&report()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_call_to_action_links_to_booking_url() {
        let bytes = PdfReportExporter::new().render(&report()).unwrap();

        let contains = |needle: &[u8]| bytes.windows(needle.len()).any(|w| w == needle);
        assert!(contains(b"/Link"));
        assert!(contains(b"/URI"));
        assert!(contains(DEFAULT_BOOKING_URL.as_bytes()));
    }

    #[test]
    fn test_export_writes_file_and_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("report.pdf");

        let written = PdfReportExporter::new().export(&report(), &path).unwrap();

        assert_eq!(written, path);
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_export_to_directory_fails() {
        let dir = tempfile::tempdir().unwrap();

        let err = PdfReportExporter::new()
            .export(&report(), dir.path())
            .unwrap_err();

        assert!(matches!(err, ExportError::Write { .. }));
    }
}
