use rag_client::{Notice, NoticeLevel, ResultRow};

const HEADERS: [&str; 4] = ["Document ID", "Theme", "Extracted Answer", "Citations"];

/// Widest a column may grow; longer cells wrap onto further lines.
const MAX_CELL_WIDTH: usize = 60;

pub fn render_notice(notice: &Notice) -> String {
    let prefix = match notice.level {
        NoticeLevel::Info => "✅",
        NoticeLevel::Warning => "⚠️ ",
        NoticeLevel::Error => "❌",
    };
    format!("{} {}", prefix, notice.text)
}

/// Pipe table of the rows; empty string when there is nothing to show.
pub fn render_table(rows: &[ResultRow]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let cells: Vec<[Vec<String>; 4]> = rows
        .iter()
        .map(|row| {
            [
                wrap(&row.document_id),
                wrap(&row.theme),
                wrap(&row.extracted_answer),
                wrap(&row.citations),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &cells {
        for (width, lines) in widths.iter_mut().zip(row) {
            for line in lines {
                *width = (*width).max(line.chars().count());
            }
        }
    }

    let mut out = String::new();
    out.push_str(&format_line(&HEADERS.map(String::from), &widths));
    out.push_str(&format_line(&widths.map(|w| "-".repeat(w)), &widths));
    for row in &cells {
        let height = row.iter().map(Vec::len).max().unwrap_or(1);
        for i in 0..height {
            let line: [String; 4] =
                std::array::from_fn(|col| row[col].get(i).cloned().unwrap_or_default());
            out.push_str(&format_line(&line, &widths));
        }
    }
    out
}

fn format_line(cells: &[String; 4], widths: &[usize; 4]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(text, width)| {
            let pad = width.saturating_sub(text.chars().count());
            format!("{}{}", text, " ".repeat(pad))
        })
        .collect();
    format!("| {} |\n", padded.join(" | "))
}

/// Splits a cell into lines of at most `MAX_CELL_WIDTH` characters, breaking
/// on whitespace. Words longer than a line are split mid-word.
fn wrap(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let chars: Vec<char> = word.chars().collect();
        for piece in chars.chunks(MAX_CELL_WIDTH) {
            let piece: String = piece.iter().collect();
            let len = current.chars().count();
            if len > 0 && len + 1 + piece.chars().count() > MAX_CELL_WIDTH {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(&piece);
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}
