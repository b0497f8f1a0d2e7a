use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

pub const CURSOR: &str = "█";

/// Creates an input field block; shows a cursor when focused and the
/// placeholder when empty
pub fn create_input_paragraph<'a>(input_buffer: &'a str, placeholder: &'a str, focused: bool) -> Paragraph<'a> {
    let border_color = if focused { Color::Cyan } else { Color::Gray };
    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(border_color));

    let line = if input_buffer.is_empty() {
        let mut spans = Vec::new();
        if focused {
            spans.push(Span::styled(CURSOR, Style::default().fg(Color::White)));
        }
        spans.push(Span::styled(placeholder, Style::default().fg(Color::DarkGray)));
        Line::from(spans)
    } else {
        let mut spans = vec![Span::styled(input_buffer, Style::default().fg(Color::White))];
        if focused {
            spans.push(Span::styled(CURSOR, Style::default().fg(Color::White)));
        }
        Line::from(spans)
    };

    Paragraph::new(line).block(input_block)
}

/// Creates a bracketed button span, highlighted when focused
pub fn create_button_span(text: String, color: Color, focused: bool) -> Span<'static> {
    let style = if focused {
        Style::default().fg(Color::Black).bg(color).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(color)
    };
    Span::styled(text, style)
}
