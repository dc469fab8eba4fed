use super::pdf_safe;
use crate::core::rubric::Severity;
use crate::error::RenderError;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Rgb,
};

const PAGE_WIDTH: f32 = 215.9;
const PAGE_HEIGHT: f32 = 279.4;
const MARGIN: f32 = 20.0;
const PT_TO_MM: f32 = 0.3528;
// Average Helvetica glyph width as a fraction of the font size.
const AVG_GLYPH_EM: f32 = 0.5;

// Table column offsets and widths, in mm from the left margin.
const COL_SCORE_X: f32 = 62.0;
const COL_COMMENT_X: f32 = 84.0;
const COL_PILLAR_W: f32 = 58.0;
const COL_COMMENT_W: f32 = PAGE_WIDTH - 2.0 * MARGIN - COL_COMMENT_X;

#[derive(Debug, Clone, Copy)]
pub(super) enum Style {
    Title,
    Subtitle,
    Heading,
    Body,
    TableHeader,
    Footer,
}

impl Style {
    fn size(self) -> f32 {
        match self {
            Self::Title => 16.0,
            Self::Subtitle | Self::Heading => 12.0,
            Self::Body | Self::TableHeader => 10.0,
            Self::Footer => 9.0,
        }
    }

    fn bold(self) -> bool {
        matches!(self, Self::Title | Self::Heading | Self::TableHeader)
    }

    fn color(self) -> Rgb {
        match self {
            Self::Title => rgb(0x2c, 0x3e, 0x50),
            Self::Subtitle | Self::Footer => rgb(0x7f, 0x8c, 0x8d),
            Self::Heading => rgb(0x29, 0x80, 0xb9),
            Self::TableHeader => rgb(0x34, 0x98, 0xdb),
            Self::Body => rgb(0x21, 0x21, 0x21),
        }
    }

    fn line_height(self) -> f32 {
        self.size() * PT_TO_MM * 1.4
    }
}

fn severity_color(severity: Severity) -> Rgb {
    match severity {
        Severity::Good => rgb(0x2e, 0x7d, 0x32),
        Severity::Medium => rgb(0xef, 0x6c, 0x00),
        Severity::Bad => rgb(0xc6, 0x28, 0x28),
    }
}

fn rgb(r: u8, g: u8, b: u8) -> Rgb {
    Rgb::new(
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
        None,
    )
}

/// Characters of `style` that fit on a line `width_mm` wide.
fn chars_per_line(width_mm: f32, style: Style) -> usize {
    let glyph_mm = style.size() * PT_TO_MM * AVG_GLYPH_EM;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let fit = (width_mm / glyph_mm).floor() as usize;
    fit.max(1)
}

/// Greedy word wrap; words longer than a line are split.
pub(super) fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let chars: Vec<char> = word.chars().collect();
        for piece in chars.chunks(max_chars) {
            let piece: String = piece.iter().collect();
            let piece_len = piece.chars().count();
            let needed = if current_len == 0 { piece_len } else { current_len + 1 + piece_len };
            if needed > max_chars && current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current.push_str(&piece);
            current_len += piece_len;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Top-down cursor over a growing document.
pub(super) struct Writer {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    y: f32,
}

impl Writer {
    pub(super) fn new(title: &str) -> Result<Self, RenderError> {
        let (doc, page, layer) =
            PdfDocument::new(pdf_safe(title), Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "contenido");
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| RenderError::Pdf(e.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| RenderError::Pdf(e.to_string()))?;
        let layer = doc.get_page(page).get_layer(layer);

        Ok(Self {
            doc,
            layer,
            regular,
            bold,
            y: PAGE_HEIGHT - MARGIN,
        })
    }

    fn ensure_space(&mut self, height: f32) {
        if self.y - height >= MARGIN {
            return;
        }
        let (page, layer) = self
            .doc
            .add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "contenido");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y = PAGE_HEIGHT - MARGIN;
    }

    fn draw(&self, text: &str, x: f32, style: Style, color: Rgb) {
        let font = if style.bold() { &self.bold } else { &self.regular };
        self.layer.set_fill_color(Color::Rgb(color));
        self.layer
            .use_text(pdf_safe(text), style.size(), Mm(x), Mm(self.y), font);
    }

    pub(super) fn gap(&mut self, mm: f32) {
        self.y -= mm;
    }

    pub(super) fn centered(&mut self, text: &str, style: Style) {
        let width = PAGE_WIDTH - 2.0 * MARGIN;
        for line in wrap(text, chars_per_line(width, style)) {
            self.ensure_space(style.line_height());
            self.y -= style.line_height();
            #[allow(clippy::cast_precision_loss)]
            let text_width = line.chars().count() as f32 * style.size() * PT_TO_MM * AVG_GLYPH_EM;
            let x = ((PAGE_WIDTH - text_width) / 2.0).max(MARGIN);
            self.draw(&line, x, style, style.color());
        }
    }

    pub(super) fn heading(&mut self, text: &str) {
        self.gap(2.0);
        self.paragraph(text, Style::Heading);
        self.gap(1.5);
    }

    pub(super) fn paragraph(&mut self, text: &str, style: Style) {
        let width = PAGE_WIDTH - 2.0 * MARGIN;
        for line in wrap(text, chars_per_line(width, style)) {
            self.ensure_space(style.line_height());
            self.y -= style.line_height();
            self.draw(&line, MARGIN, style, style.color());
        }
    }

    pub(super) fn table_header(&mut self, columns: [&str; 3]) {
        let style = Style::TableHeader;
        self.ensure_space(style.line_height() * 2.0);
        self.y -= style.line_height();
        for (label, x) in columns.into_iter().zip([0.0, COL_SCORE_X, COL_COMMENT_X]) {
            self.draw(label, MARGIN + x, style, style.color());
        }
        self.gap(1.5);
    }

    /// One pillar row; the score is coloured by severity.
    pub(super) fn table_row(&mut self, pillar: &str, score: &str, comment: &str, severity: Severity) {
        let style = Style::Body;
        let pillar_lines = wrap(pillar, chars_per_line(COL_PILLAR_W, style));
        let comment_lines = wrap(comment, chars_per_line(COL_COMMENT_W, style));
        let rows = pillar_lines.len().max(comment_lines.len()).max(1);
        #[allow(clippy::cast_precision_loss)]
        let height = rows as f32 * style.line_height();
        self.ensure_space(height);

        let top = self.y;
        for i in 0..rows {
            self.y -= style.line_height();
            if let Some(line) = pillar_lines.get(i) {
                self.draw(line, MARGIN, Style::TableHeader, style.color());
            }
            if i == 0 {
                self.draw(score, MARGIN + COL_SCORE_X, Style::TableHeader, severity_color(severity));
            }
            if let Some(line) = comment_lines.get(i) {
                self.draw(line, MARGIN + COL_COMMENT_X, style, style.color());
            }
        }
        self.y = top - height - 1.5;
    }

    pub(super) fn finish(self) -> Result<Vec<u8>, RenderError> {
        self.doc
            .save_to_bytes()
            .map_err(|e| RenderError::Pdf(e.to_string()))
    }
}
