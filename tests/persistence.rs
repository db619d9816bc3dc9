use std::fs;

use atividades::app::{Action, App};
use atividades::storage::{FileStore, KeyValueStore};
use atividades::task::TaskStatus;
use atividades::task_store::{TaskStore, TASKS_KEY};
use tempfile::tempdir;

#[test]
fn file_store_roundtrip_across_restarts() {
    let temp = tempdir().expect("tempdir");

    let mut tasks = TaskStore::load(FileStore::open(temp.path()).expect("open store"));
    assert!(tasks.is_empty());

    let milk = tasks.add("buy milk").expect("added");
    let dog = tasks.add("walk dog").expect("added");
    tasks.toggle_status(&dog);
    tasks.update(&milk, "buy oat milk");
    let in_memory = tasks.tasks().to_vec();

    let reopened = TaskStore::load(FileStore::open(temp.path()).expect("reopen store"));
    assert_eq!(reopened.tasks(), in_memory);
    assert_eq!(reopened.get(&dog).unwrap().status, TaskStatus::Inativo);
}

#[test]
fn stored_layout_is_a_plain_json_array() {
    let temp = tempdir().expect("tempdir");
    let mut tasks = TaskStore::load(FileStore::open(temp.path()).expect("open store"));
    let id = tasks.add("regar plantas").expect("added");

    let raw = fs::read_to_string(temp.path().join("tasks.json")).expect("read blob");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
    assert_eq!(
        value,
        serde_json::json!([{ "id": id, "description": "regar plantas", "status": "ativo" }])
    );
}

#[test]
fn corrupt_blob_starts_empty_and_is_overwritten_on_next_mutation() {
    let temp = tempdir().expect("tempdir");
    let mut store = FileStore::open(temp.path()).expect("open store");
    store.set_item(TASKS_KEY, "not json at all").expect("seed");

    let mut tasks = TaskStore::load(store);
    assert!(tasks.is_empty());

    tasks.add("fresh start");
    let reopened = TaskStore::load(FileStore::open(temp.path()).expect("reopen store"));
    assert_eq!(reopened.len(), 1);
}

#[test]
fn last_writer_wins() {
    let temp = tempdir().expect("tempdir");
    let mut first = TaskStore::load(FileStore::open(temp.path()).expect("open store"));
    let mut second = TaskStore::load(FileStore::open(temp.path()).expect("open store"));

    first.add("from first");
    second.add("from second");

    let reopened = TaskStore::load(FileStore::open(temp.path()).expect("reopen store"));
    assert_eq!(reopened.len(), 1);
    assert_eq!(reopened.tasks()[0].description, "from second");
}

#[test]
fn app_session_walkthrough() {
    let temp = tempdir().expect("tempdir");
    let mut app = App::new(TaskStore::load(FileStore::open(temp.path()).expect("open store")));

    for c in "buy milk".chars() {
        app.apply(Action::InputChar(c));
    }
    app.apply(Action::Submit);
    app.apply(Action::FocusNext);
    app.apply(Action::BeginEdit);
    app.apply(Action::ToggleStatus);
    app.apply(Action::SaveEdit);

    let reopened = TaskStore::load(FileStore::open(temp.path()).expect("reopen store"));
    assert_eq!(reopened.tasks()[0].status, TaskStatus::Inativo);

    app.apply(Action::Delete);
    let reopened = TaskStore::load(FileStore::open(temp.path()).expect("reopen store"));
    assert!(reopened.is_empty());
}
