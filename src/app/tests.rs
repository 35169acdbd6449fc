use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use tempfile::tempdir;

use crate::page::Portfolio;
use crate::scrollspy::{Geometry, SectionId};
use crate::storage::{MemoryStore, PreferenceStore};
use crate::theme::{Presentation, THEME_KEY, Theme, ThemeToggle};

use super::event_loop::ResizeDebouncer;
use super::{App, Message, Model, ToastLevel, update};

fn surface() -> &'static Presentation {
    Box::leak(Box::new(Presentation::new()))
}

fn light_theme() -> ThemeToggle {
    ThemeToggle::init(Box::new(MemoryStore::new()), Theme::Light, surface())
}

fn create_test_model() -> Model {
    Model::new(Portfolio::bundled().unwrap(), (80, 24), light_theme())
}

fn create_small_model() -> Model {
    Model::new(Portfolio::bundled().unwrap(), (60, 12), light_theme())
}

fn section_top(model: &Model, id: SectionId) -> usize {
    model.page.section(id).unwrap().top()
}

/// Feed smooth-scroll ticks until the animation settles.
fn settle(mut model: Model) -> Model {
    for _ in 0..200 {
        if !model.viewport.is_animating() {
            break;
        }
        model = update(model, Message::SmoothScrollTick);
    }
    assert!(!model.viewport.is_animating(), "smooth scroll never settled");
    model
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn handle(model: &Model, event: &Event) -> Option<Message> {
    let mut debouncer = ResizeDebouncer::new(100);
    App::handle_event(event, model, 0, &mut debouncer)
}

#[test]
fn test_new_model_starts_on_home() {
    let model = create_test_model();
    assert_eq!(model.active_section(), SectionId::Home);
    assert_eq!(model.viewport.offset(), 0);
}

#[test]
fn test_every_section_is_rendered() {
    let model = create_test_model();
    for id in SectionId::ALL {
        assert!(model.page.section(id).is_some(), "{id} missing");
    }
}

#[test]
fn test_scroll_down_updates_viewport() {
    let model = create_test_model();
    let model = update(model, Message::ScrollDown(5));
    assert_eq!(model.viewport.offset(), 5);
}

#[test]
fn test_scroll_up_updates_viewport() {
    let mut model = create_test_model();
    model.viewport.scroll_down(10);
    let model = update(model, Message::ScrollUp(3));
    assert_eq!(model.viewport.offset(), 7);
}

#[test]
fn test_manual_scroll_updates_active_section() {
    let model = create_test_model();
    let about = section_top(&model, SectionId::About);
    let half = usize::from(model.viewport.height() / 2);
    let model = update(model, Message::ScrollDown(about - half));
    assert_eq!(model.active_section(), SectionId::About);
}

#[test]
fn test_scroll_just_short_of_boundary_keeps_section() {
    let model = create_test_model();
    let about = section_top(&model, SectionId::About);
    let half = usize::from(model.viewport.height() / 2);
    let model = update(model, Message::ScrollDown(about - half - 1));
    assert_eq!(model.active_section(), SectionId::Home);
}

#[test]
fn test_go_to_bottom_activates_contact() {
    let model = update(create_test_model(), Message::GoToBottom);
    assert_eq!(model.active_section(), SectionId::Contact);
}

#[test]
fn test_navigate_does_not_change_active_until_scroll_ticks() {
    let model = update(create_test_model(), Message::NavigateTo(SectionId::Projects));
    assert_eq!(model.active_section(), SectionId::Home);
    assert_eq!(model.viewport.offset(), 0);
    assert!(model.viewport.is_animating());
}

#[test]
fn test_navigate_then_ticks_activates_target() {
    for id in SectionId::ALL {
        let model = update(create_test_model(), Message::NavigateTo(id));
        let model = settle(model);
        assert_eq!(model.viewport.offset(), section_top(&model, id));
        assert_eq!(model.active_section(), id);
    }
}

#[test]
fn test_navigate_passes_through_intermediate_sections() {
    let mut model = update(create_test_model(), Message::NavigateTo(SectionId::Contact));
    let mut seen = vec![model.active_section()];
    while model.viewport.is_animating() {
        model = update(model, Message::SmoothScrollTick);
        if seen.last() != Some(&model.active_section()) {
            seen.push(model.active_section());
        }
    }
    assert_eq!(seen.first(), Some(&SectionId::Home));
    assert_eq!(seen.last(), Some(&SectionId::Contact));
}

#[test]
fn test_navigate_to_current_section_is_idle() {
    let model = update(create_test_model(), Message::NavigateTo(SectionId::Home));
    assert!(!model.viewport.is_animating());
    assert_eq!(model.active_section(), SectionId::Home);
}

#[test]
fn test_manual_scroll_cancels_smooth_scroll() {
    let model = update(create_test_model(), Message::NavigateTo(SectionId::Skills));
    let model = update(model, Message::SmoothScrollTick);
    let offset = model.viewport.offset();
    let model = update(model, Message::ScrollDown(1));
    assert!(!model.viewport.is_animating());
    assert_eq!(model.viewport.offset(), offset + 1);
}

#[test]
fn test_next_section_walks_forward_while_animating() {
    let model = update(create_test_model(), Message::NextSection);
    // Still animating toward About; the next hop builds on the pending target.
    let model = update(model, Message::NextSection);
    let model = settle(model);
    assert_eq!(model.active_section(), SectionId::Skills);
}

#[test]
fn test_prev_section_at_first_is_noop() {
    let model = update(create_test_model(), Message::PrevSection);
    assert!(!model.viewport.is_animating());
    assert_eq!(model.active_section(), SectionId::Home);
}

#[test]
fn test_next_section_at_last_is_noop() {
    let model = settle(update(create_test_model(), Message::NavigateTo(SectionId::Contact)));
    let offset = model.viewport.offset();
    let model = update(model, Message::NextSection);
    assert!(!model.viewport.is_animating());
    assert_eq!(model.viewport.offset(), offset);
}

#[test]
fn test_toggle_theme_flips_and_persists() {
    let model = create_test_model();
    assert_eq!(model.theme.theme(), Theme::Light);

    let model = update(model, Message::ToggleTheme);
    assert_eq!(model.theme.theme(), Theme::Dark);
    let (message, level) = model.active_toast().unwrap();
    assert_eq!(level, ToastLevel::Info);
    assert!(message.contains("dark"));

    let model = update(model, Message::ToggleTheme);
    assert_eq!(model.theme.theme(), Theme::Light);
}

#[test]
fn test_stored_theme_beats_system_preference() {
    let store = MemoryStore::new().with_entry(THEME_KEY, "dark");
    let theme = ThemeToggle::init(Box::new(store), Theme::Light, surface());
    let model = Model::new(Portfolio::bundled().unwrap(), (80, 24), theme);
    assert_eq!(model.theme.theme(), Theme::Dark);
}

#[test]
fn test_toggle_from_stored_light_applies_dark() {
    let mut store = MemoryStore::new();
    store.set(THEME_KEY, "light").unwrap();
    let presentation = surface();
    let theme = ThemeToggle::init(Box::new(store), Theme::Dark, presentation);
    let model = update(
        Model::new(Portfolio::bundled().unwrap(), (80, 24), theme),
        Message::ToggleTheme,
    );
    assert_eq!(model.theme.theme(), Theme::Dark);
    assert!(presentation.is_dark());
}

#[test]
fn test_toggle_watch_changes_state() {
    let model = create_test_model();
    assert!(!model.watch_enabled);

    let model = update(model, Message::ToggleWatch);
    assert!(model.watch_enabled);

    let model = update(model, Message::ToggleWatch);
    assert!(!model.watch_enabled);
}

#[test]
fn test_toggle_watch_without_content_file_warns() {
    let mut model = update(create_test_model(), Message::ToggleWatch);
    let mut watcher = None;
    App::handle_message_side_effects(&mut model, &mut watcher, &Message::ToggleWatch);
    assert!(watcher.is_none());
    assert!(!model.watch_enabled);
    assert_eq!(model.active_toast().unwrap().1, ToastLevel::Warning);
}

#[test]
fn test_toggle_watch_with_content_file_starts_watcher() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("portfolio.json");
    std::fs::write(&path, include_str!("../../assets/portfolio.json")).unwrap();

    let mut model = create_test_model();
    model.content_path = Some(path);
    let mut model = update(model, Message::ToggleWatch);
    let mut watcher = None;
    App::handle_message_side_effects(&mut model, &mut watcher, &Message::ToggleWatch);
    assert!(watcher.is_some());
    assert!(model.watch_enabled);

    let mut model = update(model, Message::ToggleWatch);
    App::handle_message_side_effects(&mut model, &mut watcher, &Message::ToggleWatch);
    assert!(watcher.is_none());
}

#[test]
fn test_force_reload_picks_up_new_content() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("portfolio.json");
    let mut portfolio = Portfolio::bundled().unwrap();
    std::fs::write(&path, serde_json::to_string(&portfolio).unwrap()).unwrap();

    let mut model = create_test_model();
    model.content_path = Some(path.clone());

    portfolio.hero.name = "Reloaded Name".to_string();
    std::fs::write(&path, serde_json::to_string(&portfolio).unwrap()).unwrap();

    let mut model = update(model, Message::ForceReload);
    App::handle_message_side_effects(&mut model, &mut None, &Message::ForceReload);
    assert_eq!(model.portfolio.hero.name, "Reloaded Name");
    assert_eq!(model.active_toast(), Some(("Reloaded", ToastLevel::Info)));
}

#[test]
fn test_reload_failure_keeps_previous_content() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("portfolio.json");
    std::fs::write(&path, "{ not json").unwrap();

    let mut model = create_test_model();
    let name = model.portfolio.hero.name.clone();
    model.content_path = Some(path);

    let mut model = update(model, Message::ContentChanged);
    App::handle_message_side_effects(&mut model, &mut None, &Message::ContentChanged);
    assert_eq!(model.portfolio.hero.name, name);
    assert_eq!(model.active_toast().unwrap().1, ToastLevel::Error);
}

#[test]
fn test_removed_content_file_keeps_portfolio_and_warns() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("portfolio.json");

    let mut model = create_test_model();
    let name = model.portfolio.hero.name.clone();
    model.content_path = Some(path);
    model.watch_enabled = true;

    let mut model = update(model, Message::ContentRemoved);
    App::handle_message_side_effects(&mut model, &mut None, &Message::ContentRemoved);
    assert_eq!(model.portfolio.hero.name, name);
    assert!(model.watch_enabled);
    assert_eq!(model.active_toast().unwrap().1, ToastLevel::Warning);
}

#[test]
fn test_resize_keeps_reader_in_same_section() {
    let model = settle(update(create_test_model(), Message::NavigateTo(SectionId::Skills)));
    let model = update(model, Message::Resize(50, 30));
    assert_eq!(model.viewport.width(), 50);
    assert_eq!(model.viewport.height(), crate::ui::page_height(30));
    assert_eq!(model.active_section(), SectionId::Skills);
    assert_eq!(model.viewport.offset(), section_top(&model, SectionId::Skills));
}

#[test]
fn test_resize_during_navigation_retargets() {
    let model = update(create_test_model(), Message::NavigateTo(SectionId::Projects));
    let model = update(model, Message::Resize(120, 40));
    let model = settle(model);
    assert_eq!(model.active_section(), SectionId::Projects);
}

#[test]
fn test_help_toggle_and_hide() {
    let model = update(create_test_model(), Message::ToggleHelp);
    assert!(model.help_visible);
    let model = update(model, Message::HideHelp);
    assert!(!model.help_visible);
}

#[test]
fn test_quit_sets_flag() {
    let model = update(create_test_model(), Message::Quit);
    assert!(model.should_quit);
}

#[test]
fn test_toast_expires() {
    let mut model = update(create_test_model(), Message::ToggleTheme);
    assert!(model.active_toast().is_some());
    assert!(!model.expire_toast(Instant::now()));
    assert!(model.expire_toast(Instant::now() + Duration::from_secs(10)));
    assert!(model.active_toast().is_none());
}

#[test]
fn test_key_bindings() {
    let model = create_test_model();
    assert_eq!(handle(&model, &key(KeyCode::Char('j'))), Some(Message::ScrollDown(1)));
    assert_eq!(handle(&model, &key(KeyCode::Char('t'))), Some(Message::ToggleTheme));
    assert_eq!(handle(&model, &key(KeyCode::Tab)), Some(Message::NextSection));
    assert_eq!(handle(&model, &key(KeyCode::BackTab)), Some(Message::PrevSection));
    assert_eq!(handle(&model, &key(KeyCode::Char('q'))), Some(Message::Quit));
    assert_eq!(
        handle(&model, &key(KeyCode::Char('1'))),
        Some(Message::NavigateTo(SectionId::Home))
    );
    assert_eq!(
        handle(&model, &key(KeyCode::Char('5'))),
        Some(Message::NavigateTo(SectionId::Contact))
    );
    assert_eq!(handle(&model, &key(KeyCode::Char('6'))), None);
}

#[test]
fn test_ctrl_c_quits() {
    let model = create_test_model();
    let event = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert_eq!(handle(&model, &event), Some(Message::Quit));
}

#[test]
fn test_ctrl_l_redraws() {
    let model = create_test_model();
    let event = Event::Key(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL));
    assert_eq!(handle(&model, &event), Some(Message::Redraw));
}

#[test]
fn test_any_key_hides_help() {
    let model = update(create_test_model(), Message::ToggleHelp);
    assert_eq!(handle(&model, &key(KeyCode::Char('j'))), Some(Message::HideHelp));
}

#[test]
fn test_mouse_wheel_scrolls() {
    let model = create_test_model();
    let event = Event::Mouse(MouseEvent {
        kind: MouseEventKind::ScrollDown,
        column: 10,
        row: 5,
        modifiers: KeyModifiers::NONE,
    });
    assert_eq!(handle(&model, &event), Some(Message::ScrollDown(3)));
}

#[test]
fn test_click_on_navbar_entry_navigates() {
    let model = create_test_model();
    let area = ratatui::layout::Rect::new(0, 0, 80, 24);
    let navbar = crate::ui::split_screen(area).navbar;
    let (id, rect) = crate::ui::navbar::entry_rects(navbar)[3];
    let event = Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: rect.x + 1,
        row: rect.y,
        modifiers: KeyModifiers::NONE,
    });
    assert_eq!(handle(&model, &event), Some(Message::NavigateTo(id)));
    assert_eq!(id, SectionId::Projects);
}

#[test]
fn test_click_on_page_does_nothing() {
    let model = create_test_model();
    let event = Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 10,
        row: 2,
        modifiers: KeyModifiers::NONE,
    });
    assert_eq!(handle(&model, &event), None);
}

#[test]
fn test_resize_event_is_debounced() {
    let model = create_test_model();
    let mut debouncer = ResizeDebouncer::new(100);
    let msg = App::handle_event(&Event::Resize(100, 30), &model, 0, &mut debouncer);
    assert_eq!(msg, None);
    assert!(debouncer.is_pending());
    assert_eq!(debouncer.take_ready(50), None);
    assert_eq!(debouncer.take_ready(100), Some((100, 30)));
    assert!(!debouncer.is_pending());
}

#[test]
fn test_resize_debouncer_keeps_latest_size() {
    let mut debouncer = ResizeDebouncer::new(100);
    debouncer.queue(80, 24, 0);
    debouncer.queue(90, 30, 60);
    assert_eq!(debouncer.take_ready(100), None);
    assert_eq!(debouncer.take_ready(160), Some((90, 30)));
}

#[test]
fn test_into_model_carries_builder_settings() {
    let app = App::new(Portfolio::bundled().unwrap(), light_theme())
        .with_watch(true)
        .with_content_path(Some("me.json".into()))
        .with_config_paths(Some("global".into()), None);
    let model = app.into_model((80, 24));
    assert!(model.watch_enabled);
    assert_eq!(model.content_path.as_deref(), Some(std::path::Path::new("me.json")));
    assert_eq!(model.config_global_path.as_deref(), Some(std::path::Path::new("global")));
}

#[test]
fn test_small_terminal_still_navigates() {
    let model = settle(update(create_small_model(), Message::NavigateTo(SectionId::Contact)));
    assert_eq!(model.active_section(), SectionId::Contact);
}

#[test]
fn test_render_after_navigation_highlights_target() {
    let model = settle(update(create_test_model(), Message::NavigateTo(SectionId::Skills)));
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|frame| crate::ui::render(&model, frame)).unwrap();
    let buffer = terminal.backend().buffer();
    let status_row: String = (0..80).map(|x| buffer[(x, 23)].symbol().to_string()).collect();
    assert!(status_row.contains("Skills"), "status row: {status_row}");
}
