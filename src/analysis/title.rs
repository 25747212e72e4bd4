//! Locating the document title.

use super::StyleKey;
use crate::model::Document;

/// Finds the first run drawn in the title style.
pub struct TitleLocator;

impl TitleLocator {
    /// Text of the first run in document order whose style equals
    /// `title_style`, trimmed.
    ///
    /// Document order is page, then line top, then run left to right. Only
    /// the first matching run of each line is considered, so a title split
    /// across runs yields its leading fragment. A line whose first match is
    /// blank is passed over as a whole.
    pub fn locate(doc: &Document, title_style: Option<&StyleKey>) -> Option<String> {
        let style = title_style?;

        doc.pages
            .iter()
            .flat_map(|page| page.lines_top_down())
            .filter_map(|line| line.runs.iter().find(|run| style.matches(run)))
            .find(|run| !run.is_blank())
            .map(|run| run.text.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Page, TextLine, TextRun};

    fn doc_with(pages: Vec<Vec<TextLine>>) -> Document {
        let mut doc = Document::new();
        for (index, lines) in pages.into_iter().enumerate() {
            let mut page = Page::letter(index as u32);
            for line in lines {
                page.add_line(line);
            }
            doc.add_page(page);
        }
        doc
    }

    #[test]
    fn test_undefined_style() {
        let doc = doc_with(vec![vec![TextLine::single(10.0, "Anything", 20.0, "F")]]);
        assert_eq!(TitleLocator::locate(&doc, None), None);
    }

    #[test]
    fn test_no_match() {
        let doc = doc_with(vec![vec![TextLine::single(10.0, "Body", 12.0, "F")]]);
        let style = StyleKey::new(30, "F");
        assert_eq!(TitleLocator::locate(&doc, Some(&style)), None);
    }

    #[test]
    fn test_first_match_by_vertical_order() {
        // Stored bottom line first; the upper one must win.
        let doc = doc_with(vec![vec![
            TextLine::single(400.0, "Lower Big Text", 24.0, "Bold"),
            TextLine::single(80.0, "  Upper Title  ", 24.0, "Bold"),
        ]]);
        let style = StyleKey::new(24, "Bold");
        assert_eq!(
            TitleLocator::locate(&doc, Some(&style)),
            Some("Upper Title".to_string())
        );
    }

    #[test]
    fn test_earlier_page_wins() {
        let doc = doc_with(vec![
            vec![TextLine::single(700.0, "Cover", 24.0, "Bold")],
            vec![TextLine::single(10.0, "Second", 24.0, "Bold")],
        ]);
        let style = StyleKey::new(24, "Bold");
        assert_eq!(
            TitleLocator::locate(&doc, Some(&style)),
            Some("Cover".to_string())
        );
    }

    #[test]
    fn test_multi_run_title_yields_first_fragment() {
        let doc = doc_with(vec![vec![TextLine::new(
            50.0,
            vec![
                TextRun::new("Chapter One: ", 24.0, "Bold"),
                TextRun::new("Introduction", 24.0, "Bold"),
            ],
        )]]);
        let style = StyleKey::new(24, "Bold");
        assert_eq!(
            TitleLocator::locate(&doc, Some(&style)),
            Some("Chapter One:".to_string())
        );
    }

    #[test]
    fn test_blank_run_is_passed_over() {
        let doc = doc_with(vec![vec![
            TextLine::single(10.0, "   ", 24.0, "Bold"),
            TextLine::single(20.0, "Real Title", 24.0, "Bold"),
        ]]);
        let style = StyleKey::new(24, "Bold");
        assert_eq!(
            TitleLocator::locate(&doc, Some(&style)),
            Some("Real Title".to_string())
        );
    }

    #[test]
    fn test_blank_match_skips_rest_of_line() {
        let doc = doc_with(vec![vec![
            TextLine::new(
                10.0,
                vec![
                    TextRun::new(" ", 24.0, "Bold"),
                    TextRun::new("Same Line", 24.0, "Bold"),
                ],
            ),
            TextLine::single(30.0, "Next Line", 24.0, "Bold"),
        ]]);
        let style = StyleKey::new(24, "Bold");
        assert_eq!(
            TitleLocator::locate(&doc, Some(&style)),
            Some("Next Line".to_string())
        );
    }
}
