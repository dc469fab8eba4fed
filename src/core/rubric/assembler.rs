use std::fmt::Write;

use super::types::{Analysis, PillarResult};

/// Wrap six pillar results with their display markup. Scores and comments
/// pass through untouched.
pub fn assemble(pillars: [PillarResult; 6]) -> Analysis {
    let markup = render_markup(&pillars);
    Analysis { pillars, markup }
}

/// One `section` block per pillar, score tagged with its severity class.
pub fn render_markup(pillars: &[PillarResult]) -> String {
    let mut html = String::from(r#"<div style="font-family: Arial; font-size: 12pt;">"#);

    for result in pillars {
        let _ = write!(
            html,
            r#"
<div class="section">
    <div class="title">{}</div>
    <div class="score {}">{}/10</div>
    <div class="comment">{}</div>
</div>"#,
            result.pillar_name(),
            result.severity(),
            result.score,
            result.comment,
        );
    }

    html.push_str("\n</div>");
    html
}
