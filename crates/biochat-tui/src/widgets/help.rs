//! Help popup: centred floating overlay listing keybindings and commands.
//!
//! Open with `F1`, `?` or `:help`; close with `Escape`.

use crate::theme::Theme;
use crate::widgets::centered_rect;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

const BINDINGS: &[(&str, &str)] = &[
    ("Enter", "Enviar la pregunta"),
    ("Tab", "Alternar entre pregunta y conversación"),
    ("Escape", "Cerrar ventana / salir de la pregunta"),
    ("i  /  /", "Escribir una pregunta"),
    ("↑ k  /  ↓ j", "Desplazar la conversación"),
    ("PageUp / PageDown", "Desplazar una página"),
    ("G  /  End", "Ir al último mensaje"),
    ("F1  /  ?", "Esta ayuda"),
    ("F2", "Información del sistema"),
    ("F3", "Consultas de ejemplo"),
    ("F5", "Recargar datos"),
    ("q  /  Ctrl+c", "Salir"),
];

const COMMANDS: &[(&str, &str)] = &[
    (":clear", "Limpiar la conversación"),
    (":reload", "Recargar datos desde la web"),
    (":theme <nombre>", "default | gruvbox"),
    (":confidence", "Mostrar / ocultar la confianza"),
    (":export <ruta>", "Guardar la conversación (JSON lines)"),
    (":info  :examples", "Ventanas de información"),
    (":q", "Salir"),
];

pub struct HelpPopup<'a> {
    theme: &'a Theme,
}

impl<'a> HelpPopup<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for HelpPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = (BINDINGS.len() + COMMANDS.len() + 5) as u16;
        let popup = centered_rect(72, height, area);
        Clear.render(popup, buf);

        let block = Block::bordered()
            .title(" biochat: atajos (Esc para cerrar) ")
            .border_style(self.theme.border_focused);
        let inner = block.inner(popup);
        block.render(popup, buf);

        let bold = Style::default().add_modifier(Modifier::BOLD);
        let row = |(key, desc): &(&str, &str)| {
            Line::from(vec![
                Span::styled(format!("  {key:<22}"), bold),
                Span::raw(desc.to_string()),
            ])
        };

        let mut lines: Vec<Line> = vec![Line::from(Span::styled("Teclas", self.theme.sender_bot))];
        lines.extend(BINDINGS.iter().map(row));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled("Comandos", self.theme.sender_bot)));
        lines.extend(COMMANDS.iter().map(row));

        Paragraph::new(lines).render(inner, buf);
    }
}
