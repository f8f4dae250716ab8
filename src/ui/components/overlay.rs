//! Description modal and blocking alert.
//!
//! Both are boxes centered in the pane and drawn after the page, so they
//! cover whatever is behind them.

use crate::ui::helpers::{center_offset, position_cursor, wrap_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{AlertInfo, ModalView};

const MODAL_MAX_WIDTH: usize = 72;
const ALERT_MAX_WIDTH: usize = 48;
const MIN_WIDTH: usize = 20;

/// Rows of the modal that are not paragraph text: borders, title, author,
/// two spacers, and the close control.
const MODAL_FIXED_ROWS: usize = 7;

/// Styled line inside a box. Only `text` carries the style; `indent` is
/// plain padding.
struct BoxLine {
    indent: usize,
    style: String,
    text: String,
}

impl BoxLine {
    fn new(style: String, text: impl Into<String>) -> Self {
        Self {
            indent: 0,
            style,
            text: text.into(),
        }
    }

    fn blank() -> Self {
        Self::new(String::new(), "")
    }
}

pub fn render_modal(modal: &ModalView, theme: &Theme, cols: usize, rows: usize) {
    let width = box_width(cols, MODAL_MAX_WIDTH);
    let inner_width = width - 4;
    let max_paragraph = rows.saturating_sub(MODAL_FIXED_ROWS + 2).max(1);

    let mut lines = vec![
        BoxLine::new(
            format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.title_fg)),
            modal.title.as_str(),
        ),
        BoxLine::new(Theme::fg(&theme.colors.author_fg), format!("by {}", modal.author)),
        BoxLine::blank(),
    ];
    let text_style = Theme::fg(&theme.colors.text_normal);
    lines.extend(
        paragraph_lines(&modal.paragraph, inner_width, max_paragraph)
            .into_iter()
            .map(|line| BoxLine::new(text_style.clone(), line)),
    );
    lines.push(BoxLine::blank());
    lines.push(centered_control("[ Close ]", inner_width, theme));

    draw_box(&lines, &theme.colors.modal_border, width, cols, rows);
}

pub fn render_alert(alert: &AlertInfo, theme: &Theme, cols: usize, rows: usize) {
    let width = box_width(cols, ALERT_MAX_WIDTH);
    let inner_width = width - 4;

    let text_style = format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.error_fg));
    let mut lines: Vec<BoxLine> = wrap_text(&alert.message, inner_width)
        .into_iter()
        .map(|line| BoxLine::new(text_style.clone(), line))
        .collect();
    lines.push(BoxLine::blank());
    lines.push(centered_control("[ OK ]", inner_width, theme));

    draw_box(&lines, &theme.colors.error_fg, width, cols, rows);
}

fn box_width(cols: usize, max: usize) -> usize {
    cols.saturating_sub(8).clamp(MIN_WIDTH, max)
}

/// Wraps the paragraph and cuts it to `max_lines`, marking the cut with `...`.
fn paragraph_lines(paragraph: &str, width: usize, max_lines: usize) -> Vec<String> {
    let mut lines = wrap_text(paragraph, width);
    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            let keep = width.saturating_sub(3);
            *last = format!("{}...", last.chars().take(keep).collect::<String>());
        }
    }
    lines
}

fn centered_control(label: &str, inner_width: usize, theme: &Theme) -> BoxLine {
    BoxLine {
        indent: center_offset(label.chars().count(), inner_width),
        style: format!(
            "{}{}{}",
            Theme::bold(),
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        ),
        text: label.to_string(),
    }
}

fn draw_box(lines: &[BoxLine], border: &str, width: usize, cols: usize, rows: usize) {
    let inner_width = width - 4;
    let height = lines.len() + 2;
    let top = center_offset(height, rows) + 1;
    let left = center_offset(width, cols) + 1;
    let border = Theme::fg(border);

    position_cursor(top, left);
    print!("{border}╭{}╮{}", "─".repeat(width - 2), Theme::reset());

    for (offset, line) in lines.iter().enumerate() {
        let indent = line.indent.min(inner_width);
        let text: String = line.text.chars().take(inner_width - indent).collect();
        let trailing = inner_width - indent - text.chars().count();

        position_cursor(top + 1 + offset, left);
        print!("{border}│{} {}", Theme::reset(), " ".repeat(indent));
        print!("{}{text}{}{}", line.style, Theme::reset(), " ".repeat(trailing));
        print!(" {border}│{}", Theme::reset());
    }

    position_cursor(top + height - 1, left);
    print!("{border}╰{}╯{}", "─".repeat(width - 2), Theme::reset());
}
