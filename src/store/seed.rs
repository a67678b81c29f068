//! Startup dataset: four meeting rooms, their static offer lists, and two
//! pre-existing reservations (so the id counter starts at 3).

use chrono::{DateTime, Utc};

use crate::models::{parse_date, parse_time, Reservation, Resource, Slot};

pub(super) fn resources() -> Vec<Resource> {
    vec![
        resource(
            1,
            "Salle Einstein",
            "Grande salle de conférence - 20 personnes",
            20,
            &["Projecteur", "Tableau blanc", "Visioconférence"],
        ),
        resource(
            2,
            "Salle Newton",
            "Salle de réunion moyenne - 10 personnes",
            10,
            &["Écran TV", "Tableau blanc"],
        ),
        resource(
            3,
            "Salle Curie",
            "Petite salle de réunion - 6 personnes",
            6,
            &["Écran TV"],
        ),
        resource(
            4,
            "Salle Darwin",
            "Espace collaboratif - 15 personnes",
            15,
            &["Projecteur", "Paperboard", "Visioconférence"],
        ),
    ]
}

pub(super) fn offers() -> Vec<(i64, Vec<Slot>)> {
    vec![
        (
            1,
            vec![
                slot("2026-01-20", "09:00", "10:00"),
                slot("2026-01-20", "10:00", "11:00"),
                slot("2026-01-20", "14:00", "15:00"),
                slot("2026-01-20", "15:00", "16:00"),
                slot("2026-01-21", "09:00", "10:00"),
                slot("2026-01-21", "11:00", "12:00"),
                slot("2026-01-22", "09:00", "10:00"),
                slot("2026-01-22", "10:00", "11:00"),
            ],
        ),
        (
            2,
            vec![
                slot("2026-01-20", "08:00", "09:00"),
                slot("2026-01-20", "13:00", "14:00"),
                slot("2026-01-21", "10:00", "11:00"),
                slot("2026-01-21", "14:00", "15:00"),
            ],
        ),
        (3, vec![slot("2026-01-22", "16:00", "17:00")]),
        // Salle Darwin offers nothing; the frontend empty state depends on it
        (4, vec![]),
    ]
}

pub(super) fn reservations() -> Vec<Reservation> {
    vec![
        reservation(1, 1, "2026-01-20", "11:00", "12:00", "2026-01-19T10:00:00Z"),
        reservation(2, 2, "2026-01-20", "09:00", "10:00", "2026-01-19T11:00:00Z"),
    ]
}

fn resource(id: i64, name: &str, description: &str, capacity: i32, equipment: &[&str]) -> Resource {
    Resource {
        id,
        name: name.to_string(),
        description: description.to_string(),
        capacity,
        equipment: equipment.iter().map(|e| e.to_string()).collect(),
        active: true,
    }
}

fn slot(date: &str, start: &str, end: &str) -> Slot {
    Slot {
        date: parse_date(date).expect("Invalid seed date"),
        start_time: parse_time(start).expect("Invalid seed time"),
        end_time: parse_time(end).expect("Invalid seed time"),
    }
}

fn reservation(
    id: i64,
    resource_id: i64,
    date: &str,
    start: &str,
    end: &str,
    created_at: &str,
) -> Reservation {
    Reservation {
        id,
        resource_id,
        date: parse_date(date).expect("Invalid seed date"),
        start_time: parse_time(start).expect("Invalid seed time"),
        end_time: parse_time(end).expect("Invalid seed time"),
        created_at: DateTime::parse_from_rfc3339(created_at)
            .expect("Invalid seed timestamp")
            .with_timezone(&Utc),
    }
}
