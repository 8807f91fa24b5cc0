use super::{put, truncate, Button};
use crate::app::action::{Action, CartAction};
use crate::app::hit::{HitMap, Panel};
use crate::app::state::AppState;
use crate::catalog::Product;
use crate::ui::theme::Theme;
use crate::widgets::cart::{format_price, CartLine, Step};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, hits: &mut HitMap) {
    let block = Block::default()
        .title(" Shopping Cart ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .style(Theme::panel_bg());
    let inner = block.inner(area);
    frame.render_widget(block, area);
    hits.register_panel(Panel::Cart, area, state.cart.lines().len());
    if inner.is_empty() {
        return;
    }

    let products = state.catalog.products();
    let sections = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(products.len() as u16),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .split(inner);

    put(
        frame,
        sections[0].as_position(),
        sections[0],
        Span::styled("Products", Theme::secondary()),
    );
    for (i, product) in products.iter().enumerate() {
        let line = Rect {
            y: sections[1].y + i as u16,
            height: 1,
            ..sections[1]
        }
        .intersection(sections[1]);
        if !line.is_empty() {
            render_product(frame, line, product, state, hits);
        }
    }

    put(
        frame,
        sections[3].as_position(),
        sections[3],
        Span::styled(
            format!("Your cart ({} items)", state.cart.units()),
            Theme::secondary(),
        ),
    );
    render_lines(frame, sections[4], state, hits);

    let total = Span::styled(
        format!("Total: {}", state.cart.total_label()),
        Theme::price().add_modifier(Modifier::BOLD),
    );
    let total_x = sections[5].right().saturating_sub(total.width() as u16);
    put(
        frame,
        Position::new(total_x.max(sections[5].x), sections[5].y),
        sections[5],
        total,
    );
}

/// Catalogue row: the whole row reacts to hover, the button adds.
fn render_product(frame: &mut Frame, line: Rect, product: &Product, state: &AppState, hits: &mut HitMap) {
    let id = product.id;
    if state.cart.hovered() == Some(id) {
        frame.render_widget(
            Block::default().style(Style::default().bg(Theme::BG_SURFACE)),
            line,
        );
    }
    hits.register(line, Action::Cart(CartAction::Product(id)));

    let add = if state.cart.is_confirming(id) {
        Button::new("[✓ Added]", Action::Cart(CartAction::Add(id))).style(Theme::button_done())
    } else {
        Button::new("[Add]", Action::Cart(CartAction::Add(id)))
    };
    let add_x = line.right().saturating_sub(add.width()).max(line.x);

    let price = Span::styled(format_price(product.price), Theme::price());
    let price_x = add_x.saturating_sub(price.width() as u16 + 1).max(line.x);
    let name_width = price_x.saturating_sub(line.x + 1) as usize;
    put(
        frame,
        line.as_position(),
        line,
        Span::styled(truncate(&product.name, name_width), Theme::text()),
    );
    if price_x > line.x {
        put(frame, Position::new(price_x, line.y), line, price);
    }
    add.draw(frame, hits, state, Position::new(add_x, line.y), line);
}

fn render_lines(frame: &mut Frame, area: Rect, state: &AppState, hits: &mut HitMap) {
    if state.cart.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled("Your cart is empty", Theme::muted())),
            area,
        );
        return;
    }
    let visible = state
        .cart
        .lines()
        .iter()
        .skip(state.scroll.cart)
        .take(area.height as usize);
    for (i, item) in visible.enumerate() {
        let line = Rect {
            y: area.y + i as u16,
            height: 1,
            ..area
        };
        render_line(frame, line, item, state, hits);
    }
}

/// `name  $12.99 [-] 2 [+] [x]`
fn render_line(frame: &mut Frame, line: Rect, item: &CartLine, state: &AppState, hits: &mut HitMap) {
    let id = item.product.id;
    let minus = Button::new("[-]", Action::Cart(CartAction::Step(id, Step::Decrease)));
    let plus = Button::new("[+]", Action::Cart(CartAction::Step(id, Step::Increase)));
    let remove =
        Button::new("[x]", Action::Cart(CartAction::Remove(id))).style(Theme::button_danger());
    let price = Span::styled(format!("{} ", format_price(item.product.price)), Theme::price());
    let quantity = Span::styled(format!(" {} ", item.quantity), Theme::text());

    let controls = price.width() as u16
        + minus.width()
        + quantity.width() as u16
        + plus.width()
        + 1
        + remove.width();
    let start = line.right().saturating_sub(controls).max(line.x);
    let name_width = start.saturating_sub(line.x + 1) as usize;
    put(
        frame,
        line.as_position(),
        line,
        Span::styled(truncate(&item.product.name, name_width), Theme::text()),
    );

    let y = line.y;
    let mut x = start;
    x += put(frame, Position::new(x, y), line, price);
    x += minus.draw(frame, hits, state, Position::new(x, y), line);
    x += put(frame, Position::new(x, y), line, quantity);
    x += plus.draw(frame, hits, state, Position::new(x, y), line) + 1;
    remove.draw(frame, hits, state, Position::new(x, y), line);
}
