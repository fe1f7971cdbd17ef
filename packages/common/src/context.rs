use std::cell::RefCell;
use std::rc::Rc;

/// Indentation-aware text buffer shared by all file generators.
///
/// Empty lines written with [`EmitContext::add_line`] still receive the
/// current indentation, which several templates rely on.
pub struct EmitContext {
    buffer: Rc<RefCell<String>>,
    indent_level: Rc<RefCell<usize>>,
}

impl EmitContext {
    pub fn new() -> Self {
        Self {
            buffer: Rc::new(RefCell::new(String::new())),
            indent_level: Rc::new(RefCell::new(0)),
        }
    }

    pub fn add(&self, text: &str) {
        self.buffer.borrow_mut().push_str(text);
    }

    pub fn add_line(&self, text: &str) {
        self.add_indented(text);
        self.add("\n");
    }

    pub fn add_lines(&self, lines: &[&str]) {
        for line in lines {
            self.add_line(line);
        }
    }

    pub fn add_indented(&self, text: &str) {
        let indent = "  ".repeat(*self.indent_level.borrow());
        let mut buffer = self.buffer.borrow_mut();
        buffer.push_str(&indent);
        buffer.push_str(text);
    }

    /// Write `items` one per line, comma-separated, without a trailing comma
    pub fn add_comma_lines<I>(&self, items: I)
    where
        I: IntoIterator<Item = String>,
    {
        let mut items = items.into_iter().peekable();
        while let Some(item) = items.next() {
            if items.peek().is_some() {
                self.add_line(&format!("{},", item));
            } else {
                self.add_line(&item);
            }
        }
    }

    pub fn indent(&self) {
        *self.indent_level.borrow_mut() += 1;
    }

    pub fn dedent(&self) {
        let mut level = self.indent_level.borrow_mut();
        if *level > 0 {
            *level -= 1;
        }
    }

    pub fn get_output(&self) -> String {
        self.buffer.borrow().clone()
    }

    /// Fresh buffer that shares this context's indentation
    pub fn with_new_buffer(&self) -> Self {
        Self {
            buffer: Rc::new(RefCell::new(String::new())),
            indent_level: self.indent_level.clone(),
        }
    }

    pub fn merge_buffer(&self, other: &EmitContext) {
        let other = other.buffer.borrow();
        self.buffer.borrow_mut().push_str(&other);
    }
}

impl Default for EmitContext {
    fn default() -> Self {
        Self::new()
    }
}
