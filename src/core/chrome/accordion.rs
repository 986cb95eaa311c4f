use crate::domain::ports::AccordionView;

/// FAQ list where at most one answer is expanded.
pub struct Accordion<V: AccordionView> {
    len: usize,
    open: Option<usize>,
    view: V,
}

impl<V: AccordionView> Accordion<V> {
    pub fn new(len: usize, view: V) -> Self {
        Self {
            len,
            open: None,
            view,
        }
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

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Trigger click on item `index`. Out-of-range indexes are ignored.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.len {
            return;
        }

        match self.open {
            Some(current) if current == index => {
                self.open = None;
                self.view.set_item_open(index, false);
            }
            previous => {
                if let Some(other) = previous {
                    self.view.set_item_open(other, false);
                }
                self.open = Some(index);
                self.view.set_item_open(index, true);
            }
        }
    }
}
