//! Order message builder
//!
//! Provides a fluent API for assembling the plain-text order message:
//! top-level lines, indented attribute fields and blank separators.

/// Indent used for attribute lines under a numbered item
const FIELD_INDENT: &str = "   ";

/// Plain-text message builder
pub struct MessageBuilder {
    buf: String,
}

impl Default for MessageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageBuilder {
    pub fn new() -> Self {
        Self {
            buf: String::with_capacity(1024),
        }
    }

    /// Write a top-level line
    pub fn line(&mut self, s: &str) -> &mut Self {
        self.buf.push_str(s);
        self.buf.push('\n');
        self
    }

    /// Write an indented "Label: value" line
    pub fn field(&mut self, label: &str, value: &str) -> &mut Self {
        self.buf.push_str(FIELD_INDENT);
        self.buf.push_str(label);
        self.buf.push_str(": ");
        self.buf.push_str(value);
        self.buf.push('\n');
        self
    }

    /// Write an indented field only when the value is present
    pub fn field_opt(&mut self, label: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value {
            self.field(label, value);
        }
        self
    }

    /// Write an indented field joining the values, skipped when empty
    pub fn field_list(&mut self, label: &str, values: &[String]) -> &mut Self {
        if !values.is_empty() {
            self.field(label, &values.join(", "));
        }
        self
    }

    /// Write an empty line
    pub fn blank(&mut self) -> &mut Self {
        self.buf.push('\n');
        self
    }

    /// Finish, dropping a single trailing newline
    pub fn build(self) -> String {
        let mut buf = self.buf;
        if buf.ends_with('\n') {
            buf.pop();
        }
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_layout() {
        let mut b = MessageBuilder::new();
        b.line("1. Bolo de Andar");
        b.field("Preço", "R$450.00");
        b.field_opt("Massa", Some("Chocolate"));
        b.field_opt("Observação", None);
        b.field_list("Recheios", &["Brigadeiro".to_string(), "Nozes".to_string()]);
        b.field_list("Adicionais", &[]);
        b.blank();
        b.line("Total do Pedido: R$450.00");

        let expected = "1. Bolo de Andar\n   Preço: R$450.00\n   Massa: Chocolate\n   Recheios: Brigadeiro, Nozes\n\nTotal do Pedido: R$450.00";
        assert_eq!(b.build(), expected);
    }
}
