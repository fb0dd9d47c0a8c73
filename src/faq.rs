//! FAQ accordion: at most one answer open at a time.

#[derive(Debug, Clone)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
}

impl Accordion {
    /// An accordion over `len` items, all closed.
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    /// Click on item `index`'s question.
    ///
    /// An open item closes; a closed item opens and every other closes.
    /// Indices past the end are ignored.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn open_item(&self) -> Option<usize> {
        self.open
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_b_closes_a() {
        let mut faq = Accordion::new(3);
        faq.toggle(0);
        faq.toggle(1);
        assert!(!faq.is_open(0));
        assert!(faq.is_open(1));
        assert_eq!(faq.open_item(), Some(1));
    }

    #[test]
    fn clicking_open_item_closes_it() {
        let mut faq = Accordion::new(2);
        faq.toggle(1);
        faq.toggle(1);
        assert_eq!(faq.open_item(), None);
    }

    #[test]
    fn out_of_range_click_changes_nothing() {
        let mut faq = Accordion::new(2);
        faq.toggle(0);
        faq.toggle(5);
        assert_eq!(faq.open_item(), Some(0));
    }
}
