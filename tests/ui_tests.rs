// Integration tests for key handling and rendering of the terminal widget

use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use std::sync::{Arc, Mutex};
use tokio::runtime::Handle;

use translate_ai::clipboard::{ClipboardError, ClipboardSink};
use translate_ai::model::{ModelClient, ModelError, ModelResponse};
use translate_ai::prompt::Prompt;
use translate_ai::session::Session;
use translate_ai::theme_store::{StoreError, ThemePreference, ThemeStore};
use translate_ai::ui::app::{App, FocusedField};

struct EchoModel;

#[async_trait]
impl ModelClient for EchoModel {
    async fn invoke(&self, prompt: &Prompt) -> Result<ModelResponse, ModelError> {
        Ok(ModelResponse::with_content(format!("[{}]", prompt.user)))
    }
}

struct NullClipboard;

impl ClipboardSink for NullClipboard {
    fn set_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Ok(())
    }
}

#[derive(Clone, Default)]
struct SharedStore(Arc<Mutex<Option<ThemePreference>>>);

impl ThemeStore for SharedStore {
    fn load(&self) -> Result<Option<ThemePreference>, StoreError> {
        Ok(*self.0.lock().unwrap())
    }

    fn save(&mut self, preference: ThemePreference) -> Result<(), StoreError> {
        *self.0.lock().unwrap() = Some(preference);
        Ok(())
    }
}

fn new_app(store: SharedStore) -> App {
    App::new(Session::load(
        Arc::new(EchoModel),
        Box::new(NullClipboard),
        Box::new(store),
        Handle::current(),
    ))
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

fn ctrl(app: &mut App, c: char) {
    app.handle_key_event(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn draw(app: &App) -> Terminal<TestBackend> {
    let backend = TestBackend::new(100, 24);
    let mut terminal = Terminal::new(backend).expect("terminal");
    terminal.draw(|f| app.render(f)).expect("draw");
    terminal
}

fn rows(terminal: &Terminal<TestBackend>) -> Vec<String> {
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect()
}

fn screen_text(app: &App) -> String {
    rows(&draw(app)).join("\n")
}

fn cursor(terminal: &mut Terminal<TestBackend>) -> (u16, u16) {
    let position = terminal.get_cursor_position().expect("cursor");
    (position.x, position.y)
}

#[tokio::test]
async fn test_initial_screen() {
    let app = new_app(SharedStore::default());
    let screen = screen_text(&app);

    assert!(screen.contains("Translate-AI"));
    assert!(screen.contains("From:"));
    assert!(screen.contains("To:"));
    assert!(screen.contains("English"));
    assert!(screen.contains("Italian"));
    assert!(screen.contains("Enter your text here"));
    assert!(screen.contains("Translation will appear here..."));
}

#[tokio::test]
async fn test_typing_and_translating() {
    let mut app = new_app(SharedStore::default());
    assert_eq!(app.focused, FocusedField::Input);

    type_text(&mut app, "Hello");
    assert_eq!(app.session.state().input, "Hello");

    press(&mut app, KeyCode::Enter);
    assert!(app.session.state().is_loading);
    assert!(screen_text(&app).contains("Translating..."));

    app.session.process_next().await;
    assert_eq!(app.session.state().translated_text, "[Hello]");
    assert!(screen_text(&app).contains("[Hello]"));
}

#[tokio::test]
async fn test_empty_translate_shows_blocking_warning() {
    let mut app = new_app(SharedStore::default());

    press(&mut app, KeyCode::Enter);
    assert!(screen_text(&app).contains("Please enter some text to translate."));

    // Any key only dismisses the warning
    press(&mut app, KeyCode::Char('x'));
    assert!(app.session.state().warning.is_none());
    assert_eq!(app.session.state().input, "");
}

// The input box starts at column 0 of row 5; its text row is 6
const INPUT_ROW: usize = 6;

#[tokio::test]
async fn test_cursor_follows_display_width() {
    let mut app = new_app(SharedStore::default());

    type_text(&mut app, "Hello");
    assert_eq!(cursor(&mut draw(&app)), (6, 6));

    ctrl(&mut app, 'u');
    type_text(&mut app, "日本語");
    assert_eq!(cursor(&mut draw(&app)), (7, 6));
}

#[tokio::test]
async fn test_long_wide_input_shows_its_end() {
    let mut app = new_app(SharedStore::default());
    let text = format!("始{}最後", "中".repeat(48));
    type_text(&mut app, &text);

    let mut terminal = draw(&app);
    let row: String = rows(&terminal)[INPUT_ROW]
        .chars()
        .filter(|c| *c != ' ')
        .collect();
    assert!(row.contains("最後"), "end of input hidden: {row}");
    assert!(!row.contains('始'), "start of input still shown: {row}");

    // 81-column box: 78 columns of text, then the cursor
    assert_eq!(cursor(&mut terminal), (79, 6));
}

#[tokio::test]
async fn test_altgr_characters_are_typed() {
    let mut app = new_app(SharedStore::default());
    let altgr = KeyModifiers::CONTROL | KeyModifiers::ALT;

    app.handle_key_event(KeyEvent::new(KeyCode::Char('@'), altgr));
    app.handle_key_event(KeyEvent::new(KeyCode::Char('€'), altgr));
    assert_eq!(app.session.state().input, "@€");

    // Ctrl alone is still a shortcut
    ctrl(&mut app, 'u');
    assert_eq!(app.session.state().input, "");
}

#[tokio::test]
async fn test_selectors_cycle_languages() {
    let mut app = new_app(SharedStore::default());

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focused, FocusedField::From);
    press(&mut app, KeyCode::Down);
    assert_eq!(app.session.state().from_language, "Italian");

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focused, FocusedField::To);
    press(&mut app, KeyCode::Up);
    assert_eq!(app.session.state().to_language, "English");

    // Typing on a selector does not edit the input
    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.session.state().input, "");

    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.focused, FocusedField::From);
}

#[tokio::test]
async fn test_clear_shortcut_clears_output() {
    let mut app = new_app(SharedStore::default());
    type_text(&mut app, "Hi");
    press(&mut app, KeyCode::Enter);
    app.session.process_next().await;
    assert_eq!(app.session.state().translated_text, "[Hi]");

    ctrl(&mut app, 'u');
    assert_eq!(app.session.state().input, "");
    assert_eq!(app.session.state().translated_text, "");
}

#[tokio::test]
async fn test_theme_shortcut_persists() {
    let store = SharedStore::default();
    let mut app = new_app(store.clone());

    ctrl(&mut app, 't');
    assert!(app.session.state().dark_mode);
    assert_eq!(*store.0.lock().unwrap(), Some(ThemePreference::Dark));

    ctrl(&mut app, 't');
    assert!(!app.session.state().dark_mode);
    assert_eq!(*store.0.lock().unwrap(), Some(ThemePreference::Light));
}

#[tokio::test]
async fn test_copy_shortcut_shows_feedback() {
    let mut app = new_app(SharedStore::default());
    type_text(&mut app, "Hi");
    press(&mut app, KeyCode::Enter);
    app.session.process_next().await;

    ctrl(&mut app, 'y');
    assert_eq!(app.session.state().copy_success, "Copied!");
    assert!(screen_text(&app).contains("Copied!"));
}

#[tokio::test]
async fn test_escape_quits() {
    let mut app = new_app(SharedStore::default());
    press(&mut app, KeyCode::Esc);
    assert!(app.should_quit);
}
