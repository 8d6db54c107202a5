use std::sync::Arc;

use shelf_application::{Action, Command, ShelfUseCase};
use shelf_core::pricing::{BomConfig, BomPricer, FootprintPricer};
use shelf_core::{FieldKey, SessionStore};
use shelf_infrastructure::{InMemorySessionStore, JsonSessionStore};
use tempfile::TempDir;

const ANSWERS: [&str; 7] = ["2000", "1000", "400", "100", "500", "5", "нет"];

fn footprint_usecase(store: Arc<dyn SessionStore>) -> ShelfUseCase {
    ShelfUseCase::new(store, Arc::new(FootprintPricer::new(1000.0)))
}

async fn add_complete_section(usecase: &ShelfUseCase, user: &str) {
    usecase.handle_action(user, "add").await.unwrap();
    for answer in ANSWERS {
        usecase.handle_text(user, answer).await.unwrap();
    }
}

#[tokio::test]
async fn test_start_shows_welcome_menu() {
    let usecase = footprint_usecase(Arc::new(InMemorySessionStore::new()));

    let screen = usecase.handle_command("1", Command::Start).await.unwrap();

    assert!(screen.text.starts_with("Калькулятор стеллажей."));
    assert!(screen.button_for(&Action::Add).is_some());
    assert!(screen.button_for(&Action::Apply).is_some());
}

#[tokio::test]
async fn test_full_flow_persists_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("data.json");
    let usecase = footprint_usecase(Arc::new(JsonSessionStore::new(&path)));

    add_complete_section(&usecase, "1001").await;
    let screen = usecase.handle_action("1001", "apply").await.unwrap();
    assert!(screen.text.contains("<b>Итого: 2,000.00 руб</b>"));

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["1001"]["sections"][0]["height_mm"], 2000);
    assert_eq!(raw["1001"]["sections"][0]["extra_section"], false);
    assert!(raw["1001"]["editing"].is_null());
}

#[tokio::test]
async fn test_progress_survives_restart() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("data.json");

    {
        let usecase = footprint_usecase(Arc::new(JsonSessionStore::new(&path)));
        usecase.handle_action("7", "add").await.unwrap();
        usecase.handle_text("7", "1800").await.unwrap();
        usecase.handle_text("7", "700").await.unwrap();
    }

    let usecase = footprint_usecase(Arc::new(JsonSessionStore::new(&path)));
    let screen = usecase.handle_text("7", "300").await.unwrap();
    assert!(screen.text.contains("<b>Нагрузка на полку, кг</b>"));

    let session = JsonSessionStore::new(&path).load("7").await.unwrap().unwrap();
    assert_eq!(session.sections[0].height_mm, 1800);
    assert_eq!(session.sections[0].depth_mm, 300);
    assert_eq!(session.editing.unwrap().field_i, 3);
}

#[tokio::test]
async fn test_users_are_isolated() {
    let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    let usecase = footprint_usecase(Arc::clone(&store));

    add_complete_section(&usecase, "1").await;
    usecase.handle_action("2", "add").await.unwrap();

    let first = store.load("1").await.unwrap().unwrap();
    let second = store.load("2").await.unwrap().unwrap();
    assert!(first.editing.is_none());
    assert_eq!(second.editing.unwrap().idx, 0);

    let screen = usecase.handle_action("2", "apply").await.unwrap();
    assert!(screen.text.contains("<b>Итого: 0.00 руб</b>"));
}

#[tokio::test]
async fn test_reset_command_forgets_user() {
    let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    let usecase = footprint_usecase(Arc::clone(&store));
    add_complete_section(&usecase, "1").await;

    usecase.handle_command("1", Command::Reset).await.unwrap();

    assert!(store.load("1").await.unwrap().is_none());
    let screen = usecase.handle_action("1", "apply").await.unwrap();
    assert_eq!(screen.text, "Секций нет. Добавь хотя бы одну.");
}

#[tokio::test]
async fn test_unknown_token_and_read_only_screens_do_not_write() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("data.json");
    let usecase = footprint_usecase(Arc::new(JsonSessionStore::new(&path)));

    let screen = usecase.handle_action("1", "launch:rocket").await.unwrap();
    assert_eq!(screen.text, "Не понял команду. Выбери действие:");

    usecase.handle_action("1", "menu").await.unwrap();
    usecase.handle_action("1", "list").await.unwrap();
    usecase.handle_text("1", "hello").await.unwrap();

    assert!(!path.exists());
}

#[tokio::test]
async fn test_preset_buttons_drive_the_wizard() {
    let usecase = footprint_usecase(Arc::new(InMemorySessionStore::new()));

    let mut screen = usecase.handle_action("1", "add").await.unwrap();
    for descriptor in shelf_core::FIELDS.iter() {
        let preset = descriptor.presets[0];
        let action = Action::Pick {
            field: descriptor.key,
            value: preset.to_string(),
        };
        assert!(screen.button_for(&action).is_some(), "{} missing", descriptor.key);
        screen = usecase
            .handle_action("1", &action.to_token())
            .await
            .unwrap();
    }

    assert!(screen.text.starts_with("Готово ✅"));
    assert!(screen.text.contains("Высота: 1500 мм"));
    assert!(screen.text.contains("Доп секция: да"));
}

#[tokio::test]
async fn test_stale_button_is_ignored() {
    let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    let usecase = footprint_usecase(Arc::clone(&store));
    usecase.handle_action("1", "add").await.unwrap();
    usecase.handle_text("1", "2000").await.unwrap();

    let stale = Action::Pick {
        field: FieldKey::HeightMm,
        value: "2500".to_string(),
    };
    usecase.handle_action("1", &stale.to_token()).await.unwrap();

    let session = store.load("1").await.unwrap().unwrap();
    assert_eq!(session.sections[0].height_mm, 2000);
    assert_eq!(session.editing.unwrap().field_i, 1);
}

#[tokio::test]
async fn test_bill_of_materials_summary() {
    let usecase = ShelfUseCase::new(
        Arc::new(InMemorySessionStore::new()),
        Arc::new(BomPricer::new(BomConfig::default())),
    );
    add_complete_section(&usecase, "1").await;

    let summary = usecase.summary("1").await.unwrap().unwrap();

    assert!(summary.contains("Стойки: 4 шт (высота 2000 мм)"));
    assert!(summary.contains("Балки: 20 шт"));
    assert!(summary.contains("Полки: 5 шт"));
    assert!(summary.contains("Масса:"));
    assert!(summary.contains("<b>Итого:"));
}

#[tokio::test]
async fn test_summary_without_sections_is_an_error() {
    let usecase = footprint_usecase(Arc::new(InMemorySessionStore::new()));
    assert!(usecase.summary("nobody").await.unwrap().is_err());
}
