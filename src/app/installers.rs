use crate::core::chrome::{Modal, ModalEvent};
use crate::core::form::{FormManager, SubmitOutcome};
use crate::core::listing::ListingController;
use crate::domain::model::Installer;
use crate::domain::ports::{FormView, ListingView, ModalView};

/// Installer directory plus the "request a quote" dialog.
pub struct InstallersPage<V: ListingView + FormView + ModalView> {
    listing: ListingController<Installer, V>,
    modal: Option<Modal<V>>,
    quote: Option<FormManager<V>>,
}

impl<V: ListingView + FormView + ModalView> InstallersPage<V> {
    pub fn new(
        listing: ListingController<Installer, V>,
        modal: Option<Modal<V>>,
        quote: Option<FormManager<V>>,
    ) -> Self {
        Self {
            listing,
            modal,
            quote,
        }
    }

    pub fn listing(&self) -> &ListingController<Installer, V> {
        &self.listing
    }

    pub fn listing_mut(&mut self) -> &mut ListingController<Installer, V> {
        &mut self.listing
    }

    pub fn quote(&self) -> Option<&FormManager<V>> {
        self.quote.as_ref()
    }

    pub fn quote_mut(&mut self) -> Option<&mut FormManager<V>> {
        self.quote.as_mut()
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal.as_ref().map(Modal::is_open).unwrap_or(false)
    }

    pub fn modal_event(&mut self, event: ModalEvent) {
        if let Some(modal) = self.modal.as_mut() {
            modal.handle(event);
        }
    }

    /// Submits the quote form; the dialog closes once the request went through.
    pub async fn submit_quote(&mut self) -> Option<SubmitOutcome> {
        let outcome = self.quote.as_mut()?.submit().await;
        if outcome.is_submitted() {
            if let Some(modal) = self.modal.as_mut() {
                modal.close();
            }
        }
        Some(outcome)
    }

    pub fn tick(&mut self) {
        self.listing.tick();
        if let Some(quote) = self.quote.as_mut() {
            quote.tick();
        }
    }
}
