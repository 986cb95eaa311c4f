use crate::domain::model::{FormPayload, Notice, Placement, SubmissionAck};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Durable per-origin key-value storage (the browser's `localStorage`).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Stand-in for `POST <resource>` against a future HTTP API.
#[async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(&self, resource: &str, payload: &FormPayload) -> Result<SubmissionAck>;
}

/// Card grid plus its empty-state panel.
pub trait ListingView {
    fn render_cards(&mut self, html: &str);
    fn set_grid_visible(&mut self, visible: bool);
    fn set_empty_state_visible(&mut self, visible: bool);
    fn show_notice(&mut self, notice: &Notice);
}

pub trait FormView {
    fn set_value(&mut self, field: &str, value: &str);
    fn show_field_error(&mut self, field: &str, message: &str);
    fn clear_field_error(&mut self, field: &str);
    fn set_file_display(&mut self, field: &str, text: &str);
    fn clear_file_input(&mut self, field: &str);
    fn set_submit_busy(&mut self, label: &str);
    fn restore_submit(&mut self);
    fn show_notice(&mut self, notice: &Notice);
    fn dismiss_notice(&mut self, placement: Placement);
    fn reset_form(&mut self);
    /// Replaces the whole form section with a confirmation view.
    fn show_confirmation(&mut self, html: &str);
    fn redirect(&mut self, location: &str);
}

pub trait PlanView {
    fn render_plans(&mut self, html: &str);
    fn render_services(&mut self, html: &str);
    fn set_summary(&mut self, plan_name: &str, price: &str);
}

pub trait ThemeView {
    fn set_theme_attribute(&mut self, theme: &str);
    fn set_toggle_icon(&mut self, icon: &str);
}

pub trait MenuView {
    fn set_menu_open(&mut self, open: bool);
    fn set_trigger_icon(&mut self, icon: &str);
}

pub trait AccordionView {
    fn set_item_open(&mut self, index: usize, open: bool);
}

pub trait ModalView {
    fn set_modal_open(&mut self, open: bool);
    fn set_body_scroll_locked(&mut self, locked: bool);
}

/// Page-level affordances: header shadow, element classes and text, scrolling.
pub trait PageView {
    fn set_header_scrolled(&mut self, scrolled: bool);
    fn add_class(&mut self, element: &str, class: &str);
    fn set_text(&mut self, element: &str, text: &str);
    fn scroll_to(&mut self, top: f64);
}

/// The page markup. Components ask for their root container and stay
/// unmounted when it is absent.
pub trait Document {
    type View: ListingView
        + FormView
        + PlanView
        + ThemeView
        + MenuView
        + AccordionView
        + ModalView
        + PageView;

    fn has_element(&self, id: &str) -> bool;

    fn view(&self, root: &str) -> Self::View;

    /// Ids of elements carrying `class`, in document order.
    fn elements_with_class(&self, class: &str) -> Vec<String>;

    fn text_of(&self, id: &str) -> Option<String>;

    /// Distance from the document top, for in-page scrolling.
    fn offset_top(&self, id: &str) -> Option<f64>;
}
