use crate::words_output::grammar::GrammarCode;

// An absent value is padded out to the slot width, either blank or as 'X'.
fn is_placeholder(content: &str) -> bool {
    content.is_empty() || content == "X"
}

// Cursor over the fixed-width columns of one analysis line. A slot is always
// consumed at its full width (shorter only when the engine trimmed the line
// end), so absent values keep every later field aligned.
pub(super) struct ColumnScanner<'a> {
    chars: &'a [char],
}

impl<'a> ColumnScanner<'a> {
    pub fn new(chars: &'a [char]) -> Self {
        ColumnScanner { chars }
    }

    fn take_slot(&mut self, width: usize) -> String {
        let end = width.min(self.chars.len());
        let slot = &self.chars[..end];
        self.chars = &self.chars[end..];
        slot.iter().collect()
    }

    pub fn take_slot_trimmed(&mut self, width: usize) -> String {
        self.take_slot(width).trim().to_owned()
    }

    // Surface-form slot: only the padding is removed, the stem marker '.'
    // and everything else stay verbatim.
    pub fn take_slot_end_trimmed(&mut self, width: usize) -> String {
        self.take_slot(width).trim_end().to_owned()
    }

    // One blank column separates consecutive slots; at end of line there is
    // nothing left to separate.
    fn skip_separator(&mut self) -> Option<()> {
        match self.chars.first() {
            None => Some(()),
            Some(' ') => {
                self.chars = &self.chars[1..];
                Some(())
            }
            Some(_) => None,
        }
    }

    pub fn take_field<T: GrammarCode>(&mut self) -> Option<T> {
        self.skip_separator()?;
        let content = self.take_slot_trimmed(T::slot_width());
        T::of_code(&content)
    }

    pub fn take_optional_field<T: GrammarCode>(&mut self) -> Option<Option<T>> {
        self.skip_separator()?;
        let content = self.take_slot_trimmed(T::slot_width());
        if is_placeholder(&content) {
            Some(None)
        } else {
            T::of_code(&content).map(Some)
        }
    }

    // Variety discriminator: one digit, 1 to 9.
    pub fn take_variety(&mut self) -> Option<usize> {
        self.skip_separator()?;
        let content = self.take_slot_trimmed(1);
        match content.parse::<usize>() {
            Ok(variety) if (1..=9).contains(&variety) => Some(variety),
            _ => None,
        }
    }

    pub fn rest_trimmed(&self) -> String {
        self.chars.iter().collect::<String>().trim().to_owned()
    }

    pub fn expect_blank_rest(&self) -> Option<()> {
        if self.rest_trimmed().is_empty() {
            Some(())
        } else {
            None
        }
    }
}
