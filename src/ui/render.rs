use crate::ui::clock::TimerState;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::HELP_TEXT;
use crate::ui::view::ClockView;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget};
use ratatui::Frame;

const BOX_PADDING_X: u16 = 4;
const BOX_PADDING_Y: u16 = 1;

/// Draws the clock centered in the viewport recorded in `state`.
pub fn draw(frame: &mut Frame<'_>, state: &TimerState) {
    let viewport = Rect::new(0, 0, state.viewport.width, state.viewport.height);
    let area = frame.area().intersection(viewport);
    let view = ClockView::from_state(state);
    frame.render_widget(ClockWidget::new(&view), area);
}

/// Title, status box, optional progress bar and help line as one centered block.
pub struct ClockWidget<'a> {
    view: &'a ClockView,
}

impl<'a> ClockWidget<'a> {
    pub fn new(view: &'a ClockView) -> Self {
        Self { view }
    }
}

impl Widget for ClockWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let view = self.view;
        let accent = Style::new().fg(view.accent);
        let bold = accent.add_modifier(Modifier::BOLD);

        let title = Line::styled(view.title, bold);
        let box_lines = vec![
            Line::styled(view.status, accent),
            Line::default(),
            Line::styled(view.time.as_str(), bold),
        ];
        let progress = view
            .progress
            .as_ref()
            .map(|progress| Line::styled(progress.line(), accent));
        let help = Line::styled(view.help, Style::new().fg(HELP_TEXT));

        let box_inner_width = box_lines.iter().map(Line::width).max().unwrap_or(0) as u16;
        let box_width = box_inner_width + 2 * BOX_PADDING_X + 2;
        let box_height = box_lines.len() as u16 + 2 * BOX_PADDING_Y + 2;

        let content_width = [
            title.width() as u16,
            box_width,
            progress.as_ref().map(|line| line.width() as u16).unwrap_or(0),
            help.width() as u16,
        ]
        .into_iter()
        .max()
        .unwrap_or(0);

        let mut constraints = vec![
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(box_height),
            Constraint::Length(1),
        ];
        if progress.is_some() {
            constraints.extend([Constraint::Length(1), Constraint::Length(1)]);
        }
        constraints.push(Constraint::Length(1));
        let content_height = constraints.len() as u16 - 1 + box_height;

        let block_area = centered_rect_by_size(area, content_width, content_height);
        let rows = Layout::vertical(constraints).split(block_area);

        centered(title).render(rows[0], buf);

        let box_area = centered_rect_by_size(rows[2], box_width, box_height);
        Paragraph::new(box_lines)
            .alignment(Alignment::Center)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(accent)
                    .padding(Padding::new(
                        BOX_PADDING_X,
                        BOX_PADDING_X,
                        BOX_PADDING_Y,
                        BOX_PADDING_Y,
                    )),
            )
            .render(box_area, buf);

        if let Some(progress) = progress {
            centered(progress).render(rows[4], buf);
        }
        centered(help).render(rows[rows.len() - 1], buf);
    }
}

fn centered(line: Line<'_>) -> Paragraph<'_> {
    Paragraph::new(line).alignment(Alignment::Center)
}
