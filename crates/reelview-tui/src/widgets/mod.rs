mod backdrop;
mod carousel;
mod loading;
mod status_bar;

pub use backdrop::BackdropWidget;
pub use carousel::CarouselWidget;
pub use loading::LoadingWidget;
pub use status_bar::StatusBarWidget;

use unicode_width::UnicodeWidthChar;

/// Cut `text` to at most `width` display columns, ending in '…' when cut
pub(crate) fn truncate(text: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= width {
        return text.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Dune", 10), "Dune");
        assert_eq!(truncate("Interstellar", 6), "Inter…");
        assert_eq!(truncate("千と千尋の神隠し", 5), "千と…");
        assert_eq!(truncate("abc", 0), "");
    }
}
