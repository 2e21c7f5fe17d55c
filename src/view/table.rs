//! Table grid widget.
//!
//! Renders a [`Projection`] as a header row followed by the page rows and
//! reports where each header cell landed, so pointer events can be
//! hit-tested against exactly what was drawn.

use crate::model::ColumnId;
use crate::state::{HeaderCell, HeaderLayout, SortDirection, HANDLE_WIDTH};
use crate::view::styles::TableStyles;
use crate::view_state::{HeaderView, Projection, RowView};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Glyph drawn in the drag handle region; exactly [`HANDLE_WIDTH`] wide.
pub const HANDLE_GLYPH: &str = "≡ ";

/// Blank columns between adjacent cells.
pub const COLUMN_SPACING: u16 = 1;

/// Upper bound on a column's width; longer values are truncated.
pub const MAX_COLUMN_WIDTH: u16 = 32;

/// Suffix appended to the label of the sorted column.
pub fn sort_indicator(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Ascending) => " ▲",
        Some(SortDirection::Descending) => " ▼",
        None => "",
    }
}

/// Width of each column in display order.
///
/// Wide enough for the handle, the label and an indicator, and for the
/// widest cell on the current page, capped at [`MAX_COLUMN_WIDTH`].
pub fn column_widths(projection: &Projection) -> Vec<u16> {
    projection
        .headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            let label = HANDLE_WIDTH as usize + header.label.width() + 2;
            let widest_cell = projection
                .rows
                .iter()
                .filter_map(|row| row.cells.get(i))
                .map(|cell| cell.width())
                .max()
                .unwrap_or(0);
            label.max(widest_cell).min(MAX_COLUMN_WIDTH as usize) as u16
        })
        .collect()
}

/// Pad or truncate `text` to exactly `width` display columns.
///
/// Truncated text ends in `…`.
pub fn fit(text: &str, width: usize) -> String {
    if text.width() <= width {
        let mut out = text.to_string();
        out.extend(std::iter::repeat_n(' ', width - text.width()));
        return out;
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    used += 1;
    out.extend(std::iter::repeat_n(' ', width - used));
    out
}

fn label_style(header: &HeaderView, focused: bool, styles: &TableStyles) -> Style {
    let mut style = styles.header;
    if header.sort.is_some() {
        style = style.patch(styles.sorted);
    }
    if focused {
        style = style.patch(styles.focused);
    }
    if header.drop_target {
        style = style.patch(styles.drop_target);
    }
    if header.dragging {
        style = style.patch(styles.dragging);
    }
    style
}

fn header_line<'a>(
    projection: &'a Projection,
    widths: &[u16],
    focused: Option<&ColumnId>,
    styles: &TableStyles,
) -> Line<'a> {
    let spacer = " ".repeat(COLUMN_SPACING as usize);
    let mut spans = Vec::new();
    for (header, &width) in projection.headers.iter().zip(widths) {
        let is_focused = focused == Some(&header.id);
        let handle_style = if header.dragging {
            styles.dragging
        } else {
            styles.handle
        };
        let label = format!("{}{}", header.label, sort_indicator(header.sort));
        let label_width = width.saturating_sub(HANDLE_WIDTH) as usize;

        spans.push(Span::styled(
            fit(HANDLE_GLYPH, (width as usize).min(HANDLE_WIDTH as usize)),
            handle_style,
        ));
        spans.push(Span::styled(
            fit(&label, label_width),
            label_style(header, is_focused, styles),
        ));
        spans.push(Span::raw(spacer.clone()));
    }
    Line::from(spans)
}

fn row_line<'a>(row: &'a RowView, widths: &[u16]) -> Line<'a> {
    let spacer = " ".repeat(COLUMN_SPACING as usize);
    let spans: Vec<Span> = row
        .cells
        .iter()
        .zip(widths)
        .flat_map(|(cell, &width)| {
            [
                Span::raw(fit(cell, width as usize)),
                Span::raw(spacer.clone()),
            ]
        })
        .collect();
    Line::from(spans)
}

/// Render the table and return the header geometry as drawn.
///
/// Cells that fall outside the bordered area are dropped from the layout
/// and cells cut by the right edge are narrowed, so the layout only claims
/// screen columns that show header text.
pub fn render_table(
    frame: &mut Frame,
    area: Rect,
    projection: &Projection,
    focused: Option<&ColumnId>,
    styles: &TableStyles,
) -> HeaderLayout {
    let block = Block::default().borders(Borders::ALL).title(" Users ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return HeaderLayout::default();
    }

    let widths = column_widths(projection);
    let mut lines = vec![header_line(projection, &widths, focused, styles)];
    lines.extend(projection.rows.iter().map(|row| row_line(row, &widths)));
    frame.render_widget(Paragraph::new(lines), inner);

    let columns: Vec<(ColumnId, u16)> = projection
        .headers
        .iter()
        .map(|h| h.id.clone())
        .zip(widths.iter().copied())
        .collect();
    let right = inner.x.saturating_add(inner.width);
    let cells = HeaderLayout::from_widths(inner.x, inner.y, &columns, COLUMN_SPACING)
        .cells()
        .iter()
        .filter(|cell| cell.x < right)
        .map(|cell| HeaderCell {
            width: cell.width.min(right - cell.x),
            ..cell.clone()
        })
        .collect();
    HeaderLayout::new(inner.y, cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{HeaderRegion, PageAction};
    use crate::view_state::{NavControl, PaginationView};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn header(id: &str, label: &str) -> HeaderView {
        HeaderView {
            id: ColumnId::from(id),
            label: label.to_string(),
            sort: None,
            dragging: false,
            drop_target: false,
        }
    }

    fn projection() -> Projection {
        let controls = [
            PageAction::First,
            PageAction::Previous,
            PageAction::Next,
            PageAction::Last,
        ]
        .map(|action| NavControl {
            action,
            enabled: false,
        });
        Projection {
            headers: vec![header("id", "ID"), header("email", "Email")],
            rows: vec![
                RowView {
                    key: 1,
                    cells: vec!["1".to_string(), "ada@example.com".to_string()],
                },
                RowView {
                    key: 2,
                    cells: vec!["2".to_string(), "bo@example.com".to_string()],
                },
            ],
            pagination: PaginationView {
                page_index: 0,
                page_count: 1,
                page_size: 5,
                record_count: 2,
                controls,
            },
        }
    }

    fn render(projection: &Projection, width: u16) -> (Terminal<TestBackend>, HeaderLayout) {
        let mut terminal = Terminal::new(TestBackend::new(width, 6)).unwrap();
        let mut layout = HeaderLayout::default();
        terminal
            .draw(|frame| {
                layout = render_table(
                    frame,
                    frame.area(),
                    projection,
                    None,
                    &TableStyles::default(),
                );
            })
            .unwrap();
        (terminal, layout)
    }

    fn row_text(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn fit_pads_short_text() {
        assert_eq!(fit("ab", 4), "ab  ");
    }

    #[test]
    fn fit_truncates_with_ellipsis() {
        assert_eq!(fit("abcdef", 4), "abc…");
        assert_eq!(fit("abcdef", 0), "");
    }

    #[test]
    fn widths_cover_label_and_widest_cell() {
        let widths = column_widths(&projection());
        assert_eq!(widths, vec![6, 15]);
    }

    #[test]
    fn header_and_rows_are_drawn() {
        let (terminal, _) = render(&projection(), 40);
        assert!(row_text(&terminal, 1).contains("≡ ID"));
        assert!(row_text(&terminal, 1).contains("≡ Email"));
        assert!(row_text(&terminal, 2).contains("ada@example.com"));
        assert!(row_text(&terminal, 3).contains("bo@example.com"));
    }

    #[test]
    fn sort_indicator_follows_label() {
        let mut p = projection();
        p.headers[1].sort = Some(SortDirection::Descending);
        let (terminal, _) = render(&p, 40);
        assert!(row_text(&terminal, 1).contains("Email ▼"));
    }

    #[test]
    fn layout_matches_drawn_positions() {
        let (_, layout) = render(&projection(), 40);
        // Border at x=0, header row at y=1.
        assert_eq!(layout.y(), 1);
        assert_eq!(layout.hit_test(1, 1), HeaderRegion::Handle(ColumnId::from("id")));
        assert_eq!(layout.hit_test(3, 1), HeaderRegion::Label(ColumnId::from("id")));
        // id spans 1..7, spacer at 7, email handle at 8..10
        assert_eq!(layout.hit_test(7, 1), HeaderRegion::Outside);
        assert_eq!(
            layout.hit_test(8, 1),
            HeaderRegion::Handle(ColumnId::from("email"))
        );
        assert_eq!(
            layout.hit_test(10, 1),
            HeaderRegion::Label(ColumnId::from("email"))
        );
    }

    #[test]
    fn layout_is_clipped_to_the_visible_area() {
        let (_, layout) = render(&projection(), 12);
        // Inner area is x in 1..11; email starts at 8 and is cut at 11.
        let email = &layout.cells()[1];
        assert_eq!(email.x, 8);
        assert_eq!(email.width, 3);
        assert_eq!(layout.hit_test(11, 1), HeaderRegion::Outside);
    }
}
