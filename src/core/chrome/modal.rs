use crate::domain::ports::ModalView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEvent {
    Open,
    CloseButton,
    CancelButton,
    /// Click that landed on the backdrop itself, not on the dialog.
    BackdropClick,
}

/// Overlay dialog that locks page scrolling while shown.
pub struct Modal<V: ModalView> {
    open: bool,
    view: V,
}

impl<V: ModalView> Modal<V> {
    pub fn new(view: V) -> Self {
        Self { open: false, view }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn handle(&mut self, event: ModalEvent) {
        let open = matches!(event, ModalEvent::Open);
        if open == self.open {
            return;
        }
        self.open = open;
        self.view.set_modal_open(open);
        self.view.set_body_scroll_locked(open);
    }

    pub fn close(&mut self) {
        self.handle(ModalEvent::CloseButton);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MockView {
        open: bool,
        locked: bool,
    }

    impl ModalView for MockView {
        fn set_modal_open(&mut self, open: bool) {
            self.open = open;
        }

        fn set_body_scroll_locked(&mut self, locked: bool) {
            self.locked = locked;
        }
    }

    #[test]
    fn test_open_and_close_paths() {
        for close in [
            ModalEvent::CloseButton,
            ModalEvent::CancelButton,
            ModalEvent::BackdropClick,
        ] {
            let mut modal = Modal::new(MockView::default());
            modal.handle(ModalEvent::Open);
            assert!(modal.view().open && modal.view().locked);

            modal.handle(close);
            assert!(!modal.is_open());
            assert!(!modal.view().locked);
        }
    }
}
