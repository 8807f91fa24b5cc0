//! The event router.
//!
//! One entry point per event kind at the root of the input stream: clicks,
//! hover changes, wheel, key presses (which also carry the task input's
//! `input` and `submit` events) and animation ticks. Clicks are classified
//! through the hit map built by the last draw and dispatched to exactly one
//! widget handler.

use crate::app::action::*;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::widgets::modal::Prompt;
use crate::widgets::notify::Severity;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Position;

pub fn handle_event(state: &mut AppState, event: AppEvent) {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent);
        }
        AppEvent::Tick(elapsed) => state.advance(elapsed),
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) {
    match event {
        CEvent::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, key),
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(_, _) => state.dirty = true,
        _ => {}
    }
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => handle_click(state, mouse.column, mouse.row),
        MouseEventKind::Moved => handle_hover(state, mouse.column, mouse.row),
        MouseEventKind::ScrollUp => handle_wheel(state, mouse.column, mouse.row, -1),
        MouseEventKind::ScrollDown => handle_wheel(state, mouse.column, mouse.row, 1),
        _ => {}
    }
}

fn handle_click(state: &mut AppState, column: u16, row: u16) {
    state.clicks += 1;

    let Some(area) = state.hits.hit_test(column, row).cloned() else {
        return;
    };
    if area.action.is_button() {
        state.ripples.spawn(area.rect, Position::new(column, row));
    }
    dispatch(state, area.action);
}

/// Emit leave/enter when the pointer crosses from one hit area to another.
fn handle_hover(state: &mut AppState, column: u16, row: u16) {
    let target = state
        .hits
        .hit_test(column, row)
        .map(|area| area.action.clone());
    if target == state.hovered {
        return;
    }
    if let Some(old) = state.hovered.take() {
        hover_changed(state, &old, false);
    }
    if let Some(new) = &target {
        hover_changed(state, new, true);
    }
    state.hovered = target;
}

fn hover_changed(state: &mut AppState, action: &Action, entered: bool) {
    match action {
        Action::Gallery(GalleryAction::Open(id)) => state.gallery.set_hovered(*id, entered),
        Action::Cart(CartAction::Product(id)) | Action::Cart(CartAction::Add(id)) => {
            state.cart.set_hovered(*id, entered)
        }
        _ => {}
    }
}

fn handle_wheel(state: &mut AppState, column: u16, row: u16, delta: isize) {
    if state.modal.scroll_locked() || state.prompt.is_some() {
        return;
    }
    if let Some(panel) = state.hits.panel_at(column, row) {
        state.scroll_panel(panel, delta);
    }
}

/// Route an action to the widget that owns it. Order: todo, gallery, cart,
/// modal.
pub fn dispatch(state: &mut AppState, action: Action) {
    tracing::debug!(?action, "dispatch");
    match action {
        Action::Todo(a) => handle_todo(state, a),
        Action::Gallery(a) => handle_gallery(state, a),
        Action::Cart(a) => handle_cart(state, a),
        Action::Modal(a) => handle_modal(state, a),
    }
}

fn handle_todo(state: &mut AppState, action: TodoAction) {
    match action {
        TodoAction::FocusInput => state.focus = Focus::TodoInput,
        TodoAction::Submit => submit_todo(state),
        TodoAction::Toggle(id) => {
            state.todos.toggle(id);
        }
        TodoAction::Edit(id) => {
            if let Some(item) = state.todos.get(id) {
                state.prompt = Some(Prompt::edit_todo(id, &item.text));
            }
        }
        TodoAction::Delete(id) => {
            if let Some(item) = state.todos.get(id) {
                state.prompt = Some(Prompt::confirm_delete(id, &item.text));
            }
        }
    }
}

fn submit_todo(state: &mut AppState) {
    let created = state.timestamp();
    let result = state
        .todos
        .add(&state.input.text, created)
        .map(|item| item.text.clone());
    match result {
        Ok(text) => {
            state.input.clear();
            state.notify(format!("Added \"{}\"", text), Severity::Success);
        }
        Err(e) => state.notify(e.to_string(), Severity::Warning),
    }
}

fn handle_gallery(state: &mut AppState, action: GalleryAction) {
    match action {
        GalleryAction::Load(category) => {
            let images = state.catalog.images(&category);
            let count = state.gallery.load(&category, images);
            state.scroll.gallery = 0;
            state.notify(
                format!("Loading {} {} images", count, category),
                Severity::Info,
            );
        }
        GalleryAction::Clear => {
            state.gallery.clear();
            state.scroll.gallery = 0;
            state.notify("Gallery cleared", Severity::Info);
        }
        GalleryAction::Open(id) => {
            if let Some(card) = state.gallery.card(id).cloned() {
                state.modal.open(card);
            }
        }
    }
}

fn handle_cart(state: &mut AppState, action: CartAction) {
    let result = match action {
        CartAction::Product(_) => return,
        CartAction::Add(id) => state
            .cart
            .add_product(&state.catalog, id)
            .map(|line| format!("{} added to cart", line.product.name)),
        CartAction::Remove(id) => state
            .cart
            .remove_product(id)
            .map(|line| format!("{} removed from cart", line.product.name)),
        CartAction::Step(id, step) => state.cart.update_quantity(id, step).map(|_| String::new()),
    };
    match result {
        Ok(message) if !message.is_empty() => state.notify(message, Severity::Success),
        Ok(_) => {}
        Err(e) => tracing::debug!(error = %e, "cart action ignored"),
    }
}

fn handle_modal(state: &mut AppState, action: ModalAction) {
    match action {
        ModalAction::Close => close_modal(state),
        ModalAction::Backdrop => {
            if state.prompt.is_none() {
                close_modal(state);
            }
        }
        ModalAction::Swallow => {}
        ModalAction::ConfirmYes | ModalAction::PromptSave => answer_prompt(state, true),
        ModalAction::ConfirmNo | ModalAction::PromptCancel => answer_prompt(state, false),
    }
}

fn close_modal(state: &mut AppState) {
    if state.modal.close() {
        state.hovered = None;
    }
}

/// Resolve the open prompt. Declining is silent.
fn answer_prompt(state: &mut AppState, accepted: bool) {
    let Some(prompt) = state.prompt.take() else {
        return;
    };
    state.hovered = None;
    if !accepted {
        return;
    }
    match prompt {
        Prompt::ConfirmDelete { todo, .. } => {
            if let Some(item) = state.todos.delete(todo) {
                state.notify(format!("Deleted \"{}\"", item.text), Severity::Info);
            }
        }
        Prompt::EditTodo { todo, input } => {
            if state.todos.edit(todo, &input.text) {
                state.notify("Task updated", Severity::Success);
            }
        }
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    // Prompts capture all input while visible
    if state.prompt.is_some() {
        handle_prompt_key(state, key);
        return;
    }

    if key.code == KeyCode::Esc {
        if state.modal.is_open() {
            close_modal(state);
        } else if state.focus == Focus::TodoInput {
            state.focus = Focus::Page;
        }
        return;
    }

    // The modal locks the page
    if state.modal.is_open() {
        return;
    }

    if key.code == KeyCode::Tab {
        state.cycle_focus();
        return;
    }

    match state.focus {
        Focus::TodoInput => handle_input_key(state, key),
        Focus::Page => handle_page_key(state, key),
    }
}

fn handle_input_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => submit_todo(state),
        code => edit_input(&mut state.input, code),
    }
}

fn handle_page_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => state.should_quit = true,
        KeyCode::Char('/') | KeyCode::Char('i') => state.focus = Focus::TodoInput,
        _ => {}
    }
}

fn handle_prompt_key(state: &mut AppState, key: KeyEvent) {
    let Some(prompt) = state.prompt.as_mut() else {
        return;
    };
    match prompt {
        Prompt::ConfirmDelete { .. } => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => answer_prompt(state, true),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => answer_prompt(state, false),
            _ => {}
        },
        Prompt::EditTodo { input, .. } => match key.code {
            KeyCode::Enter => answer_prompt(state, true),
            KeyCode::Esc => answer_prompt(state, false),
            code => edit_input(input, code),
        },
    }
}

/// The `input` event: apply an editing key to a text field.
fn edit_input(input: &mut InputState, code: KeyCode) {
    match code {
        KeyCode::Char(c) => input.insert_char(c),
        KeyCode::Backspace => input.delete_back(),
        KeyCode::Delete => input.delete_forward(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::hit::Panel;
    use crate::config::AppConfig;
    use crate::widgets::cart::Step;
    use ratatui::layout::Rect;
    use std::time::Duration;

    fn state() -> AppState {
        AppState::new(AppConfig::default())
    }

    fn click(state: &mut AppState, column: u16, row: u16) {
        handle_event(
            state,
            AppEvent::Terminal(CEvent::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                modifiers: KeyModifiers::NONE,
            })),
        );
    }

    fn mouse(state: &mut AppState, kind: MouseEventKind, column: u16, row: u16) {
        handle_event(
            state,
            AppEvent::Terminal(CEvent::Mouse(MouseEvent {
                kind,
                column,
                row,
                modifiers: KeyModifiers::NONE,
            })),
        );
    }

    fn key(state: &mut AppState, code: KeyCode) {
        handle_event(
            state,
            AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))),
        );
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            key(state, KeyCode::Char(c));
        }
    }

    fn tick(state: &mut AppState, ms: u64) {
        handle_event(state, AppEvent::Tick(Duration::from_millis(ms)));
    }

    #[test]
    fn test_every_click_counts_even_on_nothing() {
        let mut s = state();
        click(&mut s, 5, 5);
        click(&mut s, 70, 20);
        assert_eq!(s.clicks, 2);
        assert_eq!(s.stats().clicks, 2);
        assert!(s.ripples.active().is_empty());
    }

    #[test]
    fn test_button_click_spawns_ripple_at_pointer_offset() {
        let mut s = state();
        s.hits.register(Rect::new(10, 3, 12, 1), Action::Cart(CartAction::Add(2)));
        click(&mut s, 14, 3);
        assert_eq!(s.ripples.active().len(), 1);
        assert_eq!(s.ripples.active()[0].origin, (4, 0));
        assert_eq!(s.cart.line(2).unwrap().quantity, 1);
        assert_eq!(
            s.notifier.current().unwrap().message,
            "Coffee Mug added to cart"
        );
    }

    #[test]
    fn test_non_button_click_has_no_ripple() {
        let mut s = state();
        s.hits.register(Rect::new(0, 0, 30, 3), Action::Cart(CartAction::Product(2)));
        click(&mut s, 1, 1);
        assert!(s.ripples.active().is_empty());
        assert!(s.cart.is_empty());
    }

    #[test]
    fn test_submit_with_enter_adds_and_clears_input() {
        let mut s = state();
        assert_eq!(s.focus, Focus::TodoInput);
        type_text(&mut s, "Buy milk");
        key(&mut s, KeyCode::Enter);
        type_text(&mut s, "Buy milk");
        key(&mut s, KeyCode::Enter);

        let items: Vec<_> = s.todos.items().cloned().collect();
        assert_eq!(items.len(), 2);
        assert_ne!(items[0].id, items[1].id);
        assert!(items.iter().all(|i| i.text == "Buy milk" && !i.completed));
        assert!(s.input.text.is_empty());
        assert_eq!(s.stats().todos, 2);
        assert_eq!(s.notifier.current().unwrap().severity, Severity::Success);
    }

    #[test]
    fn test_invalid_submit_warns_and_keeps_input() {
        let mut s = state();
        key(&mut s, KeyCode::Enter);
        assert_eq!(s.stats().todos, 0);
        let notice = s.notifier.current().unwrap();
        assert_eq!(notice.severity, Severity::Warning);
        assert_eq!(notice.message, "Please enter a task");

        let long = "z".repeat(51);
        type_text(&mut s, &long);
        s.hits.register(Rect::new(40, 2, 5, 1), Action::Todo(TodoAction::Submit));
        click(&mut s, 41, 2);
        assert_eq!(s.stats().todos, 0);
        assert_eq!(s.notifier.current().unwrap().severity, Severity::Warning);
        assert_eq!(s.input.char_count(), 51);
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut s = state();
        let id = s.todos.add("Walk dog", String::new()).unwrap().id;

        dispatch(&mut s, Action::Todo(TodoAction::Delete(id)));
        assert!(matches!(s.prompt, Some(Prompt::ConfirmDelete { .. })));
        // declined: nothing happens, no notification
        key(&mut s, KeyCode::Char('n'));
        assert!(s.prompt.is_none());
        assert_eq!(s.todos.len(), 1);
        assert!(s.notifier.current().is_none());

        dispatch(&mut s, Action::Todo(TodoAction::Delete(id)));
        key(&mut s, KeyCode::Char('y'));
        assert_eq!(s.todos.len(), 0);
        assert_eq!(s.notifier.current().unwrap().severity, Severity::Info);
        // the row detaches after the exit animation
        assert_eq!(s.todos.rows().len(), 1);
        tick(&mut s, 1000);
        assert!(s.todos.rows().is_empty());
        assert_eq!(s.stats().todos, 1);
    }

    #[test]
    fn test_prompt_captures_keys_and_clicks() {
        let mut s = state();
        let id = s.todos.add("Read", String::new()).unwrap().id;
        s.hits.register(Rect::new(0, 0, 10, 1), Action::Todo(TodoAction::Toggle(id)));
        dispatch(&mut s, Action::Todo(TodoAction::Delete(id)));

        // typing while the prompt shows does not reach the task input
        key(&mut s, KeyCode::Char('x'));
        assert!(s.input.text.is_empty());
        assert!(s.prompt.is_some());

        s.hits.register_overlay(Rect::new(0, 0, 80, 24), Action::Modal(ModalAction::Swallow));
        s.hits.register_overlay(Rect::new(30, 12, 5, 1), Action::Modal(ModalAction::ConfirmNo));
        click(&mut s, 1, 0);
        assert!(!s.todos.get(id).unwrap().completed);
        assert!(s.prompt.is_some());
        click(&mut s, 31, 12);
        assert!(s.prompt.is_none());
        assert_eq!(s.todos.len(), 1);
    }

    #[test]
    fn test_edit_through_prompt() {
        let mut s = state();
        let id = s.todos.add("Call mom", String::new()).unwrap().id;
        dispatch(&mut s, Action::Todo(TodoAction::Edit(id)));
        for _ in 0.."mom".len() {
            key(&mut s, KeyCode::Backspace);
        }
        type_text(&mut s, "dad");
        key(&mut s, KeyCode::Enter);
        assert_eq!(s.todos.get(id).unwrap().text, "Call dad");
        assert_eq!(s.notifier.current().unwrap().message, "Task updated");

        // unchanged text is not an update
        s.notifier = crate::widgets::notify::Notifier::new(Duration::from_secs(3));
        dispatch(&mut s, Action::Todo(TodoAction::Edit(id)));
        key(&mut s, KeyCode::Enter);
        assert!(s.notifier.current().is_none());

        // cancel leaves the text alone
        dispatch(&mut s, Action::Todo(TodoAction::Edit(id)));
        type_text(&mut s, "!!!");
        key(&mut s, KeyCode::Esc);
        assert_eq!(s.todos.get(id).unwrap().text, "Call dad");
    }

    #[test]
    fn test_toggle_twice_restores_flag() {
        let mut s = state();
        let id = s.todos.add("Toggle me", String::new()).unwrap().id;
        s.hits.register(Rect::new(2, 8, 3, 1), Action::Todo(TodoAction::Toggle(id)));
        click(&mut s, 3, 8);
        assert!(s.todos.get(id).unwrap().completed);
        click(&mut s, 3, 8);
        assert!(!s.todos.get(id).unwrap().completed);
    }

    #[test]
    fn test_cart_scenario_through_router() {
        let mut s = state();
        dispatch(&mut s, Action::Cart(CartAction::Add(2)));
        dispatch(&mut s, Action::Cart(CartAction::Add(2)));
        dispatch(&mut s, Action::Cart(CartAction::Step(2, Step::Decrease)));
        assert_eq!(s.cart.lines().len(), 1);
        assert_eq!(s.cart.line(2).unwrap().quantity, 1);
        assert_eq!(s.cart.total_label(), "$12.99");
        assert_eq!(s.stats().cart_units, 1);
    }

    #[test]
    fn test_unknown_product_is_silent() {
        let mut s = state();
        dispatch(&mut s, Action::Cart(CartAction::Add(999)));
        dispatch(&mut s, Action::Cart(CartAction::Remove(999)));
        dispatch(&mut s, Action::Cart(CartAction::Step(999, Step::Increase)));
        assert!(s.cart.is_empty());
        assert!(s.notifier.current().is_none());
    }

    #[test]
    fn test_remove_then_update_is_noop() {
        let mut s = state();
        dispatch(&mut s, Action::Cart(CartAction::Add(1)));
        dispatch(&mut s, Action::Cart(CartAction::Remove(1)));
        dispatch(&mut s, Action::Cart(CartAction::Step(1, Step::Increase)));
        assert!(s.cart.is_empty());
    }

    #[test]
    fn test_gallery_load_open_and_close() {
        let mut s = state();
        dispatch(&mut s, Action::Gallery(GalleryAction::Load("nature".into())));
        tick(&mut s, 2000);
        assert_eq!(s.stats().images, 4);

        let card = s.gallery.slots()[0].card.id;
        s.hits.register(Rect::new(20, 5, 16, 4), Action::Gallery(GalleryAction::Open(card)));
        click(&mut s, 25, 6);
        assert!(s.modal.is_open());
        assert!(s.modal.scroll_locked());

        key(&mut s, KeyCode::Esc);
        assert!(!s.modal.is_open());
    }

    #[test]
    fn test_modal_closes_from_backdrop_but_not_panel() {
        let mut s = state();
        dispatch(&mut s, Action::Gallery(GalleryAction::Load("city".into())));
        tick(&mut s, 2000);
        let card = s.gallery.slots()[0].card.id;
        dispatch(&mut s, Action::Gallery(GalleryAction::Open(card)));

        s.hits.register_overlay(Rect::new(0, 0, 80, 24), Action::Modal(ModalAction::Backdrop));
        s.hits.register_overlay(Rect::new(20, 6, 40, 10), Action::Modal(ModalAction::Swallow));
        s.hits.register_overlay(Rect::new(50, 14, 7, 1), Action::Modal(ModalAction::Close));

        click(&mut s, 30, 8);
        assert!(s.modal.is_open());
        click(&mut s, 2, 2);
        assert!(!s.modal.is_open());

        dispatch(&mut s, Action::Gallery(GalleryAction::Open(card)));
        click(&mut s, 52, 14);
        assert!(!s.modal.is_open());
    }

    #[test]
    fn test_gallery_clear_resets_count() {
        let mut s = state();
        dispatch(&mut s, Action::Gallery(GalleryAction::Load("abstract".into())));
        tick(&mut s, 2000);
        dispatch(&mut s, Action::Gallery(GalleryAction::Clear));
        assert_eq!(s.stats().images, 0);
        tick(&mut s, 2000);
        assert!(s.gallery.slots().is_empty());
    }

    #[test]
    fn test_unknown_category_loads_nothing() {
        let mut s = state();
        dispatch(&mut s, Action::Gallery(GalleryAction::Load("sports".into())));
        tick(&mut s, 5000);
        assert!(s.gallery.slots().is_empty());
        assert_eq!(s.stats().images, 0);
    }

    #[test]
    fn test_wheel_is_locked_by_modal() {
        let mut s = state();
        for text in ["a", "b", "c"] {
            s.todos.add(text, String::new()).unwrap();
        }
        s.hits.register_panel(Panel::Todo, Rect::new(0, 0, 30, 20), 3);
        mouse(&mut s, MouseEventKind::ScrollDown, 5, 5);
        assert_eq!(s.scroll.todo, 1);

        dispatch(&mut s, Action::Gallery(GalleryAction::Load("nature".into())));
        tick(&mut s, 2000);
        let card = s.gallery.slots()[0].card.id;
        dispatch(&mut s, Action::Gallery(GalleryAction::Open(card)));
        mouse(&mut s, MouseEventKind::ScrollDown, 5, 5);
        assert_eq!(s.scroll.todo, 1);

        key(&mut s, KeyCode::Esc);
        mouse(&mut s, MouseEventKind::ScrollUp, 5, 5);
        assert_eq!(s.scroll.todo, 0);
    }

    #[test]
    fn test_hover_enter_and_leave() {
        let mut s = state();
        dispatch(&mut s, Action::Gallery(GalleryAction::Load("city".into())));
        tick(&mut s, 2000);
        let card = s.gallery.slots()[0].card.id;
        s.hits.register(Rect::new(0, 0, 10, 4), Action::Gallery(GalleryAction::Open(card)));
        s.hits.register(Rect::new(20, 0, 30, 1), Action::Cart(CartAction::Product(3)));

        mouse(&mut s, MouseEventKind::Moved, 2, 2);
        assert!(s.gallery.slots()[0].hovered);
        mouse(&mut s, MouseEventKind::Moved, 25, 0);
        assert!(!s.gallery.slots()[0].hovered);
        assert_eq!(s.cart.hovered(), Some(3));
        mouse(&mut s, MouseEventKind::Moved, 70, 20);
        assert_eq!(s.cart.hovered(), None);
        assert!(s.hovered.is_none());
    }

    #[test]
    fn test_late_elements_route_without_new_listeners() {
        let mut s = state();
        // nothing registered yet: the click is a no-op
        click(&mut s, 3, 3);
        assert!(s.cart.is_empty());
        // the next draw registers a new control under the same point
        s.hits.register(Rect::new(0, 3, 10, 1), Action::Cart(CartAction::Add(4)));
        click(&mut s, 3, 3);
        assert_eq!(s.cart.line(4).unwrap().quantity, 1);
        assert_eq!(s.clicks, 2);
    }

    #[test]
    fn test_focus_and_quit_keys() {
        let mut s = state();
        key(&mut s, KeyCode::Char('q'));
        assert!(!s.should_quit);
        assert_eq!(s.input.text, "q");

        key(&mut s, KeyCode::Esc);
        assert_eq!(s.focus, Focus::Page);
        key(&mut s, KeyCode::Tab);
        assert_eq!(s.focus, Focus::TodoInput);
        key(&mut s, KeyCode::Tab);
        key(&mut s, KeyCode::Char('q'));
        assert!(s.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_even_with_prompt() {
        let mut s = state();
        let id = s.todos.add("x", String::new()).unwrap().id;
        dispatch(&mut s, Action::Todo(TodoAction::Delete(id)));
        handle_event(
            &mut s,
            AppEvent::Terminal(CEvent::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
            ))),
        );
        assert!(s.should_quit);
    }
}
