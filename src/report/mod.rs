//! PDF report of one evaluation.
//!
//! Layout is a single flowing column on US-letter pages using the builtin
//! Helvetica faces, so nothing has to be embedded. Those faces only cover
//! Latin-1; everything else is mapped by [`pdf_safe`] before layout.

mod layout;

use crate::core::rubric::EvaluationResult;
use crate::error::RenderError;
use crate::utils::text::{paragraphs, truncate_with_ellipsis};
use chrono::{DateTime, Local};
use layout::{Style, Writer};
use std::path::{Path, PathBuf};

pub const REPORT_TITLE: &str = "Evaluador de Copywriting - Método ZEN TAO";

const FOOTER_LINES: [&str; 2] = [
    "Generado con Evaluador de Copywriting - Método ZEN TAO",
    "© Estimulante, C.A. - Todos los derechos reservados",
];

/// Everything one report shows.
#[derive(Debug, Clone)]
pub struct ReportInput<'a> {
    pub text: &'a str,
    pub evaluation: &'a EvaluationResult,
    pub feedback: Option<&'a str>,
    pub generated_at: DateTime<Local>,
    pub max_text_chars: usize,
}

/// `Evaluacion_Copy_YYYYmmdd_HHMMSS.pdf` inside `dir`.
pub fn default_report_path(dir: &Path, now: DateTime<Local>) -> PathBuf {
    dir.join(format!("Evaluacion_Copy_{}.pdf", now.format("%Y%m%d_%H%M%S")))
}

pub fn render_report(input: &ReportInput<'_>) -> Result<Vec<u8>, RenderError> {
    let mut writer = Writer::new(REPORT_TITLE)?;

    writer.centered(REPORT_TITLE, Style::Title);
    writer.centered(
        &format!(
            "Generado el: {}",
            input.generated_at.format("%d/%m/%Y %H:%M:%S")
        ),
        Style::Subtitle,
    );
    writer.gap(10.0);

    writer.heading("TEXTO ANALIZADO");
    let shown = truncate_with_ellipsis(input.text.trim(), input.max_text_chars);
    for line in shown.lines() {
        writer.paragraph(line, Style::Body);
    }
    writer.gap(8.0);

    writer.heading("RESULTADOS DEL ANÁLISIS");
    match input.evaluation {
        EvaluationResult::Scored(analysis) => {
            writer.table_header(["PILAR", "PUNTAJE", "COMENTARIO"]);
            for result in &analysis.pillars {
                writer.table_row(
                    result.pillar_name(),
                    &format!("{}/10", result.score),
                    &result.comment,
                    result.severity(),
                );
            }
        }
        EvaluationResult::Vetoed(outcome) => {
            writer.paragraph("El texto no pasó el filtro inicial:", Style::Body);
            for message in &outcome.messages {
                writer.paragraph(&format!("- {message}"), Style::Body);
            }
        }
    }
    writer.gap(8.0);

    if let Some(feedback) = input.feedback.filter(|f| !f.trim().is_empty()) {
        writer.heading("FEEDBACK PROFUNDO");
        writer.paragraph("La opinión NO solicitada del método:", Style::Body);
        for paragraph in paragraphs(feedback) {
            for line in paragraph.lines() {
                writer.paragraph(line, Style::Body);
            }
            writer.gap(4.0);
        }
    }

    writer.gap(10.0);
    for line in FOOTER_LINES {
        writer.paragraph(line, Style::Footer);
    }

    writer.finish()
}

/// Render and write to `path`, creating parent directories as needed.
pub fn write_report(input: &ReportInput<'_>, path: &Path) -> Result<PathBuf, RenderError> {
    let bytes = render_report(input)?;
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    tracing::info!(path = %path.display(), "report written");
    Ok(path.to_path_buf())
}

/// Map text onto what the builtin fonts can draw.
pub fn pdf_safe(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\u{FE0F}' | '\u{200D}' => {}
            '✔' | '✅' => out.push_str("[+]"),
            '🟡' => out.push_str("[~]"),
            '❌' => out.push_str("[x]"),
            '“' | '”' => out.push('"'),
            '‘' | '’' => out.push('\''),
            '–' | '—' => out.push('-'),
            '…' => out.push_str("..."),
            '\t' => out.push(' '),
            c if u32::from(c) <= 0xFF => out.push(c),
            _ => out.push('?'),
        }
    }
    out
}
