//! In-memory page used by the preview binary and the integration tests.
//! Every view handed out writes into one shared [`PageState`].

use crate::domain::model::{Notice, Placement};
use crate::domain::ports::{
    AccordionView, Document, FormView, ListingView, MenuView, ModalView, PageView, PlanView,
    ThemeView,
};
use std::cell::{Ref, RefCell};
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

#[derive(Debug, Clone, Default)]
pub struct Element {
    pub classes: BTreeSet<String>,
    pub text: String,
    pub offset_top: f64,
}

/// Everything the controllers rendered, keyed by the root container id.
#[derive(Debug, Default)]
pub struct PageState {
    pub elements: BTreeMap<String, Element>,
    pub order: Vec<String>,

    pub html: BTreeMap<String, String>,
    pub grid_visible: BTreeMap<String, bool>,
    pub empty_visible: BTreeMap<String, bool>,

    pub values: BTreeMap<(String, String), String>,
    pub field_errors: BTreeMap<(String, String), String>,
    pub file_displays: BTreeMap<String, String>,
    pub cleared_inputs: Vec<String>,
    pub busy: BTreeMap<String, String>,
    pub restored: BTreeMap<String, usize>,
    pub resets: BTreeMap<String, usize>,
    pub confirmations: BTreeMap<String, String>,
    pub redirect: Option<String>,

    /// Notices currently on screen.
    pub notices: Vec<(String, Notice)>,
    /// Every notice ever shown, for inspection.
    pub notice_log: Vec<(String, Notice)>,

    pub services_html: BTreeMap<String, String>,
    pub summary: Option<(String, String)>,

    pub theme: Option<String>,
    pub theme_icon: Option<String>,
    pub menu_open: bool,
    pub menu_icon: Option<String>,
    pub accordion: BTreeMap<(String, usize), bool>,
    pub modal_open: BTreeMap<String, bool>,
    pub body_scroll_locked: bool,
    pub header_scrolled: bool,
    pub scrolled_to: Option<f64>,
}

impl PageState {
    pub fn field_error(&self, root: &str, field: &str) -> Option<&str> {
        self.field_errors
            .get(&(root.to_string(), field.to_string()))
            .map(String::as_str)
    }

    pub fn value(&self, root: &str, field: &str) -> Option<&str> {
        self.values
            .get(&(root.to_string(), field.to_string()))
            .map(String::as_str)
    }

    pub fn notices_for(&self, root: &str) -> Vec<&Notice> {
        self.notices
            .iter()
            .filter(|(r, _)| r == root)
            .map(|(_, n)| n)
            .collect()
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.elements
            .get(id)
            .map(|e| e.classes.contains(class))
            .unwrap_or(false)
    }

    fn element_mut(&mut self, id: &str) -> &mut Element {
        if !self.elements.contains_key(id) {
            self.order.push(id.to_string());
        }
        self.elements.entry(id.to_string()).or_default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct HeadlessDocument {
    state: Rc<RefCell<PageState>>,
}

impl HeadlessDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a container with the given id.
    pub fn with_element(self, id: &str) -> Self {
        self.state.borrow_mut().element_mut(id);
        self
    }

    pub fn with_elements(self, ids: &[&str]) -> Self {
        ids.iter().fold(self, |doc, id| doc.with_element(id))
    }

    pub fn with_classed(self, id: &str, class: &str, text: &str) -> Self {
        {
            let mut state = self.state.borrow_mut();
            let element = state.element_mut(id);
            element.classes.insert(class.to_string());
            element.text = text.to_string();
        }
        self
    }

    pub fn with_offset(self, id: &str, offset_top: f64) -> Self {
        self.state.borrow_mut().element_mut(id).offset_top = offset_top;
        self
    }

    pub fn state(&self) -> Ref<'_, PageState> {
        self.state.borrow()
    }
}

impl Document for HeadlessDocument {
    type View = HeadlessView;

    fn has_element(&self, id: &str) -> bool {
        self.state.borrow().elements.contains_key(id)
    }

    fn view(&self, root: &str) -> HeadlessView {
        HeadlessView {
            root: root.to_string(),
            state: Rc::clone(&self.state),
        }
    }

    fn elements_with_class(&self, class: &str) -> Vec<String> {
        let state = self.state.borrow();
        state
            .order
            .iter()
            .filter(|id| state.has_class(id, class))
            .cloned()
            .collect()
    }

    fn text_of(&self, id: &str) -> Option<String> {
        self.state.borrow().elements.get(id).map(|e| e.text.clone())
    }

    fn offset_top(&self, id: &str) -> Option<f64> {
        self.state.borrow().elements.get(id).map(|e| e.offset_top)
    }
}

/// View bound to one root container.
#[derive(Debug, Clone)]
pub struct HeadlessView {
    root: String,
    state: Rc<RefCell<PageState>>,
}

impl HeadlessView {
    pub fn root(&self) -> &str {
        &self.root
    }

    fn key(&self, field: &str) -> (String, String) {
        (self.root.clone(), field.to_string())
    }

    fn push_notice(&self, notice: &Notice) {
        let mut state = self.state.borrow_mut();
        // 同一位置只保留一則
        let root = self.root.clone();
        if notice.placement != Placement::Alert {
            state
                .notices
                .retain(|(r, n)| !(r == &root && n.placement == notice.placement));
        }
        state.notices.push((root.clone(), notice.clone()));
        state.notice_log.push((root, notice.clone()));
    }
}

impl ListingView for HeadlessView {
    fn render_cards(&mut self, html: &str) {
        self.state
            .borrow_mut()
            .html
            .insert(self.root.clone(), html.to_string());
    }

    fn set_grid_visible(&mut self, visible: bool) {
        self.state
            .borrow_mut()
            .grid_visible
            .insert(self.root.clone(), visible);
    }

    fn set_empty_state_visible(&mut self, visible: bool) {
        self.state
            .borrow_mut()
            .empty_visible
            .insert(self.root.clone(), visible);
    }

    fn show_notice(&mut self, notice: &Notice) {
        self.push_notice(notice);
    }
}

impl FormView for HeadlessView {
    fn set_value(&mut self, field: &str, value: &str) {
        let key = self.key(field);
        self.state.borrow_mut().values.insert(key, value.to_string());
    }

    fn show_field_error(&mut self, field: &str, message: &str) {
        let key = self.key(field);
        self.state
            .borrow_mut()
            .field_errors
            .insert(key, message.to_string());
    }

    fn clear_field_error(&mut self, field: &str) {
        let key = self.key(field);
        self.state.borrow_mut().field_errors.remove(&key);
    }

    fn set_file_display(&mut self, field: &str, text: &str) {
        self.state
            .borrow_mut()
            .file_displays
            .insert(field.to_string(), text.to_string());
    }

    fn clear_file_input(&mut self, field: &str) {
        self.state.borrow_mut().cleared_inputs.push(field.to_string());
    }

    fn set_submit_busy(&mut self, label: &str) {
        self.state
            .borrow_mut()
            .busy
            .insert(self.root.clone(), label.to_string());
    }

    fn restore_submit(&mut self) {
        let mut state = self.state.borrow_mut();
        state.busy.remove(&self.root);
        *state.restored.entry(self.root.clone()).or_default() += 1;
    }

    fn show_notice(&mut self, notice: &Notice) {
        self.push_notice(notice);
    }

    fn dismiss_notice(&mut self, placement: Placement) {
        let root = self.root.clone();
        self.state
            .borrow_mut()
            .notices
            .retain(|(r, n)| !(r == &root && n.placement == placement));
    }

    fn reset_form(&mut self) {
        let mut state = self.state.borrow_mut();
        let root = self.root.clone();
        state.values.retain(|(r, _), _| r != &root);
        *state.resets.entry(root).or_default() += 1;
    }

    fn show_confirmation(&mut self, html: &str) {
        self.state
            .borrow_mut()
            .confirmations
            .insert(self.root.clone(), html.to_string());
    }

    fn redirect(&mut self, location: &str) {
        self.state.borrow_mut().redirect = Some(location.to_string());
    }
}

impl PlanView for HeadlessView {
    fn render_plans(&mut self, html: &str) {
        self.state
            .borrow_mut()
            .html
            .insert(self.root.clone(), html.to_string());
    }

    fn render_services(&mut self, html: &str) {
        self.state
            .borrow_mut()
            .services_html
            .insert(self.root.clone(), html.to_string());
    }

    fn set_summary(&mut self, plan_name: &str, price: &str) {
        self.state.borrow_mut().summary = Some((plan_name.to_string(), price.to_string()));
    }
}

impl ThemeView for HeadlessView {
    fn set_theme_attribute(&mut self, theme: &str) {
        self.state.borrow_mut().theme = Some(theme.to_string());
    }

    fn set_toggle_icon(&mut self, icon: &str) {
        self.state.borrow_mut().theme_icon = Some(icon.to_string());
    }
}

impl MenuView for HeadlessView {
    fn set_menu_open(&mut self, open: bool) {
        self.state.borrow_mut().menu_open = open;
    }

    fn set_trigger_icon(&mut self, icon: &str) {
        self.state.borrow_mut().menu_icon = Some(icon.to_string());
    }
}

impl AccordionView for HeadlessView {
    fn set_item_open(&mut self, index: usize, open: bool) {
        self.state
            .borrow_mut()
            .accordion
            .insert((self.root.clone(), index), open);
    }
}

impl ModalView for HeadlessView {
    fn set_modal_open(&mut self, open: bool) {
        self.state
            .borrow_mut()
            .modal_open
            .insert(self.root.clone(), open);
    }

    fn set_body_scroll_locked(&mut self, locked: bool) {
        self.state.borrow_mut().body_scroll_locked = locked;
    }
}

impl PageView for HeadlessView {
    fn set_header_scrolled(&mut self, scrolled: bool) {
        self.state.borrow_mut().header_scrolled = scrolled;
    }

    fn add_class(&mut self, element: &str, class: &str) {
        self.state
            .borrow_mut()
            .element_mut(element)
            .classes
            .insert(class.to_string());
    }

    fn set_text(&mut self, element: &str, text: &str) {
        self.state.borrow_mut().element_mut(element).text = text.to_string();
    }

    fn scroll_to(&mut self, top: f64) {
        self.state.borrow_mut().scrolled_to = Some(top);
    }
}
