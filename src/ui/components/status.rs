//! Spinner, banner, and tooltip lines under the search bar.

use crate::ui::helpers::{fit_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{BannerInfo, SpinnerInfo};

const INDENT: &str = "    ";

/// Draws the status line. The spinner wins over the banner; they are never
/// both present in practice, since a search hides the banner when it starts.
pub fn render_status(
    row: usize,
    spinner: Option<&SpinnerInfo>,
    banner: Option<&BannerInfo>,
    theme: &Theme,
    cols: usize,
) -> usize {
    position_cursor(row, 1);

    if let Some(spinner) = spinner {
        let line = format!("{INDENT}{} {}", spinner.frame, spinner.label);
        print!("{}{}{}", Theme::fg(&theme.colors.spinner_fg), fit_width(&line, cols), Theme::reset());
    } else if let Some(banner) = banner {
        let line = format!("{INDENT}{} {}", banner.icon, banner.message);
        print!(
            "{}{}{}{}",
            Theme::bold(),
            Theme::fg(&theme.colors.error_fg),
            fit_width(&line, cols),
            Theme::reset()
        );
    } else {
        print!("{}", " ".repeat(cols));
    }

    row + 1
}

/// Shows the full title of the selected card when its card shows it cut short.
pub fn render_tooltip(row: usize, tooltip: Option<&str>, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    match tooltip {
        Some(title) => {
            let line = format!("{INDENT}{title}");
            print!(
                "{}{}{}{}",
                Theme::italic(),
                Theme::fg(&theme.colors.text_dim),
                fit_width(&line, cols),
                Theme::reset()
            );
        }
        None => print!("{}", " ".repeat(cols)),
    }
    row + 1
}
