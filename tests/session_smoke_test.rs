use chrono::NaiveDate;
use tempfile::TempDir;

use smoke_timeline_rs::clock::FixedClock;
use smoke_timeline_rs::models::{MeatType, WarningKind};
use smoke_timeline_rs::state::{JsonSettingsStore, PlanSession, SettingsStore};

fn clock() -> FixedClock {
    FixedClock(
        NaiveDate::from_ymd_opt(2024, 11, 27)
            .unwrap()
            .and_hms_opt(20, 0, 0)
            .unwrap(),
    )
}

#[test]
fn test_settings_survive_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("smoke_settings.json");

    let first_plan = {
        let mut session = PlanSession::open(JsonSettingsStore::new(&path), clock());
        assert!(session.outcome().is_none());

        session.select_meat(MeatType::Turkey).unwrap();
        session
            .update(|i| {
                i.serve_time = "2024-11-28T15:00".to_string();
                i.weight = 16.0;
                i.temp = 225;
            })
            .unwrap()
            .cloned()
            .expect("plan")
    };
    assert!(first_plan.has_kind(WarningKind::Safety));

    let session = PlanSession::open(JsonSettingsStore::new(&path), clock());
    assert_eq!(session.inputs().meat_type, MeatType::Turkey);
    assert_eq!(session.inputs().weight, 16.0);
    assert_eq!(session.outcome(), Some(&first_plan));
}

#[test]
fn test_meat_change_resets_defaults_but_keeps_serve_time() {
    let dir = TempDir::new().unwrap();
    let store = JsonSettingsStore::new(dir.path().join("settings.json"));
    let mut session = PlanSession::open(store, clock());

    session
        .update(|i| {
            i.serve_time = "2024-11-28T18:00".to_string();
            i.weight = 20.0;
            i.rest_time = 180.0;
        })
        .unwrap();

    let outcome = session.select_meat(MeatType::Ribs).unwrap().cloned();
    let inputs = session.inputs();
    assert_eq!(inputs.weight, 3.0);
    assert_eq!(inputs.rest_time, 15.0);
    assert_eq!(inputs.serve_time, "2024-11-28T18:00");
    assert!(outcome.is_some());

    let saved = session.store().load().unwrap().unwrap();
    assert_eq!(&saved, inputs);
}

#[test]
fn test_reset_drops_serve_time_and_plan() {
    let dir = TempDir::new().unwrap();
    let store = JsonSettingsStore::new(dir.path().join("settings.json"));
    let mut session = PlanSession::open(store, clock());

    session
        .update(|i| i.serve_time = "2024-11-28T18:00".to_string())
        .unwrap();
    assert!(session.outcome().is_some());

    let outcome = session.reset(MeatType::Chicken).unwrap();
    assert!(outcome.is_none());
    assert_eq!(session.inputs().meat_type, MeatType::Chicken);
    assert!(!session.inputs().has_serve_time());
}
