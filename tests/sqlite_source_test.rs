use chrono::NaiveDate;
use health_trends::models::{ActivityLevel, Gender, MealEntry, PersonalProfile, WeightEntry};
use health_trends::nutrition::MacroGrams;
use health_trends::source::{DataSource, SampleData, SqliteSource};
use tempfile::TempDir;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, day).unwrap()
}

fn open_temp() -> (TempDir, SqliteSource) {
    let dir = tempfile::tempdir().unwrap();
    let source = SqliteSource::open(dir.path().join("health.db")).unwrap();
    (dir, source)
}

#[test]
fn test_empty_database() {
    let (_dir, source) = open_temp();
    assert!(source.weight_entries().unwrap().is_empty());
    assert!(source.meal_entries().unwrap().is_empty());
    assert_eq!(source.profile().unwrap(), None);
}

#[test]
fn test_entries_come_back_in_date_order() {
    let (_dir, source) = open_temp();
    source
        .database()
        .with_conn(|conn| {
            WeightEntry::create(conn, &WeightEntry::new(date(10), 75.0))?;
            WeightEntry::create(conn, &WeightEntry::new(date(3), 75.8).with_note("after holiday"))?;
            MealEntry::create(
                conn,
                &MealEntry::new(date(3), "Breakfast", MacroGrams::new(50.0, 20.0, 10.0), 370),
            )?;
            Ok(())
        })
        .unwrap();

    let weights = source.weight_entries().unwrap();
    assert_eq!(weights.len(), 2);
    assert_eq!(weights[0].date, date(3));
    assert_eq!(weights[0].note.as_deref(), Some("after holiday"));
    assert_eq!(weights[1].weight, 75.0);

    let meals = source.meal_entries().unwrap();
    assert_eq!(meals.len(), 1);
    assert_eq!(meals[0].meal_name, "Breakfast");
    assert_eq!(meals[0].macros(), MacroGrams::new(50.0, 20.0, 10.0));
}

#[test]
fn test_profile_upsert_keeps_one_row() {
    let (_dir, source) = open_temp();
    let mut profile = PersonalProfile {
        age: 35,
        gender: Gender::Female,
        height_cm: 165.0,
        activity_level: ActivityLevel::Active,
        bmr: None,
        tdee: None,
        goal: None,
    };

    source
        .database()
        .with_conn(|conn| PersonalProfile::set(conn, &profile))
        .unwrap();
    profile.age = 36;
    profile.tdee = Some(2200.0);
    source
        .database()
        .with_conn(|conn| PersonalProfile::set(conn, &profile))
        .unwrap();

    let stored = source.profile().unwrap().unwrap();
    assert_eq!(stored.age, 36);
    assert_eq!(stored.gender, Gender::Female);
    assert_eq!(stored.activity_level, ActivityLevel::Active);
    assert_eq!(stored.tdee, Some(2200.0));
}

#[test]
fn test_reopen_sees_seeded_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("health.db");
    let sample = SampleData::health_overview();

    {
        let source = SqliteSource::open(&path).unwrap();
        source
            .database()
            .with_transaction(|tx| {
                for entry in sample.weight_entries().unwrap_or_default() {
                    WeightEntry::create(tx, &entry)?;
                }
                for entry in sample.meal_entries().unwrap_or_default() {
                    MealEntry::create(tx, &entry)?;
                }
                Ok(())
            })
            .unwrap();
    }

    let reopened = SqliteSource::open(&path).unwrap();
    assert_eq!(
        reopened.weight_entries().unwrap(),
        sample.weight_entries().unwrap()
    );
    assert_eq!(
        reopened.meal_entries().unwrap(),
        sample.meal_entries().unwrap()
    );
}
