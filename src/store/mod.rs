//! In-memory reservation store.
//!
//! The store is the source of truth for all application data. State lives
//! behind a single whole-store lock: the conflict check and the insert are
//! not atomic on their own, so every operation takes the guard once and the
//! guard is never held across an await.

mod seed;

use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use chrono::{NaiveDate, NaiveTime, Utc};

use crate::errors::AppError;
use crate::models::{overlaps, NewReservation, Reservation, ReservationDetail, Resource, Slot};

/// Booked intervals of one (resource, date), keyed by start time.
/// Entries never overlap.
type DayIndex = BTreeMap<NaiveTime, NaiveTime>;

struct StoreInner {
    resources: BTreeMap<i64, Resource>,
    /// Static per-resource offer lists that availability is derived from.
    offers: HashMap<i64, Vec<Slot>>,
    reservations: BTreeMap<i64, Reservation>,
    /// Interval index for O(log n) conflict checks.
    calendar: HashMap<(i64, NaiveDate), DayIndex>,
    next_reservation_id: i64,
}

impl StoreInner {
    fn resource(&self, id: i64) -> Result<&Resource, AppError> {
        self.resources
            .get(&id)
            .ok_or_else(|| AppError::NotFound("Resource not found".to_string()))
    }

    /// Conflict probe for `[start, end)` on (resource, date). Entries within
    /// a day never overlap, so the only candidate is the latest interval
    /// starting before `end`.
    fn has_overlap(
        &self,
        resource_id: i64,
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
    ) -> bool {
        self.calendar
            .get(&(resource_id, date))
            .and_then(|day| day.range(..end).next_back())
            .is_some_and(|(&s, &e)| overlaps(start, end, s, e))
    }

    fn index(&mut self, reservation: &Reservation) {
        self.calendar
            .entry((reservation.resource_id, reservation.date))
            .or_default()
            .insert(reservation.start_time, reservation.end_time);
    }

    fn unindex(&mut self, reservation: &Reservation) {
        let key = (reservation.resource_id, reservation.date);
        if let Some(day) = self.calendar.get_mut(&key) {
            day.remove(&reservation.start_time);
            if day.is_empty() {
                self.calendar.remove(&key);
            }
        }
    }

    fn detail(&self, reservation: &Reservation) -> ReservationDetail {
        let name = self
            .resources
            .get(&reservation.resource_id)
            .map(|r| r.name.as_str())
            .unwrap_or("Ressource inconnue");
        ReservationDetail::new(reservation, name)
    }
}

/// Owned in-memory store exposing the reservation operations.
pub struct ReservationStore {
    inner: RwLock<StoreInner>,
}

impl Default for ReservationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ReservationStore {
    /// Create a store pre-loaded with the seed dataset: four rooms, their
    /// offer lists, and two pre-existing reservations (ids 1 and 2).
    pub fn new() -> Self {
        let mut inner = StoreInner {
            resources: seed::resources().into_iter().map(|r| (r.id, r)).collect(),
            offers: seed::offers().into_iter().collect(),
            reservations: BTreeMap::new(),
            calendar: HashMap::new(),
            next_reservation_id: 1,
        };

        for reservation in seed::reservations() {
            inner.index(&reservation);
            inner.next_reservation_id = inner.next_reservation_id.max(reservation.id + 1);
            inner.reservations.insert(reservation.id, reservation);
        }

        Self {
            inner: RwLock::new(inner),
        }
    }

    /// List all resources, ordered by id.
    pub fn list_resources(&self) -> Result<Vec<Resource>, AppError> {
        let inner = self.inner.read()?;
        Ok(inner.resources.values().cloned().collect())
    }

    /// Get a resource by id.
    pub fn get_resource(&self, resource_id: i64) -> Result<Resource, AppError> {
        let inner = self.inner.read()?;
        Ok(inner.resource(resource_id)?.clone())
    }

    /// List the still-available slots of a resource: its static offer list
    /// minus every offer overlapped by a live reservation. A resource
    /// without offers answers an empty list, not an error.
    pub fn list_availability(&self, resource_id: i64) -> Result<Vec<Slot>, AppError> {
        let inner = self.inner.read()?;
        inner.resource(resource_id)?;

        Ok(inner
            .offers
            .get(&resource_id)
            .into_iter()
            .flatten()
            .filter(|slot| {
                !inner.has_overlap(resource_id, slot.date, slot.start_time, slot.end_time)
            })
            .cloned()
            .collect())
    }

    /// List the reservations of one resource, ordered by (date, startTime).
    pub fn list_reservations_for_resource(
        &self,
        resource_id: i64,
    ) -> Result<Vec<Reservation>, AppError> {
        let inner = self.inner.read()?;
        inner.resource(resource_id)?;

        let mut rows: Vec<Reservation> = inner
            .reservations
            .values()
            .filter(|r| r.resource_id == resource_id)
            .cloned()
            .collect();
        rows.sort_by_key(|r| (r.date, r.start_time));
        Ok(rows)
    }

    /// List every live reservation, newest first, enriched with its
    /// resource name.
    pub fn list_reservations(&self) -> Result<Vec<ReservationDetail>, AppError> {
        let inner = self.inner.read()?;
        // Ids are assigned monotonically, so reverse id order is newest first.
        Ok(inner
            .reservations
            .values()
            .rev()
            .map(|r| inner.detail(r))
            .collect())
    }

    /// Get a reservation by id, enriched with its resource name.
    pub fn get_reservation(&self, id: i64) -> Result<ReservationDetail, AppError> {
        let inner = self.inner.read()?;
        let reservation = inner
            .reservations
            .get(&id)
            .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))?;
        Ok(inner.detail(reservation))
    }

    /// Create a reservation from a validated payload: check the resource,
    /// probe the interval index for a conflict, assign the next id, and
    /// store the record — one atomic mutation under the write guard.
    pub fn create_reservation(&self, new: &NewReservation) -> Result<Reservation, AppError> {
        let mut inner = self.inner.write()?;

        // An unknown resource id in the payload maps to InvalidInput, not
        // NotFound; only path lookups answer 404.
        if !inner.resources.contains_key(&new.resource_id) {
            return Err(AppError::InvalidInput(
                "Resource does not exist".to_string(),
            ));
        }

        if inner.has_overlap(new.resource_id, new.date, new.start_time, new.end_time) {
            return Err(AppError::Conflict("Time slot already booked".to_string()));
        }

        let id = inner.next_reservation_id;
        inner.next_reservation_id += 1;

        let reservation = Reservation {
            id,
            resource_id: new.resource_id,
            date: new.date,
            start_time: new.start_time,
            end_time: new.end_time,
            created_at: Utc::now(),
        };
        inner.index(&reservation);
        inner.reservations.insert(id, reservation.clone());
        Ok(reservation)
    }

    /// Delete a reservation and return the removed record. There is no
    /// ownership check; any client may cancel any reservation.
    pub fn delete_reservation(&self, id: i64) -> Result<Reservation, AppError> {
        let mut inner = self.inner.write()?;
        let reservation = inner
            .reservations
            .remove(&id)
            .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))?;

        inner.unindex(&reservation);
        Ok(reservation)
    }

    /// Flip a resource's `active` flag and return the updated resource.
    pub fn toggle_resource_active(&self, resource_id: i64) -> Result<Resource, AppError> {
        let mut inner = self.inner.write()?;
        let resource = inner
            .resources
            .get_mut(&resource_id)
            .ok_or_else(|| AppError::NotFound("Resource not found".to_string()))?;

        resource.active = !resource.active;
        Ok(resource.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{parse_date, parse_time};

    fn new_reservation(resource_id: i64, date: &str, start: &str, end: &str) -> NewReservation {
        NewReservation {
            resource_id,
            date: parse_date(date).unwrap(),
            start_time: parse_time(start).unwrap(),
            end_time: parse_time(end).unwrap(),
        }
    }

    #[test]
    fn test_seeded_state() {
        let store = ReservationStore::new();

        let resources = store.list_resources().unwrap();
        assert_eq!(resources.len(), 4);
        assert_eq!(resources[0].name, "Salle Einstein");
        assert!(resources.iter().all(|r| r.active));

        // Seed reservations 1 and 2 are live
        assert_eq!(store.get_reservation(1).unwrap().resource_name, "Salle Einstein");
        assert_eq!(store.get_reservation(2).unwrap().resource_name, "Salle Newton");
    }

    #[test]
    fn test_create_assigns_strictly_increasing_ids_from_three() {
        let store = ReservationStore::new();

        let a = store
            .create_reservation(&new_reservation(1, "2026-02-02", "09:00", "10:00"))
            .unwrap();
        let b = store
            .create_reservation(&new_reservation(1, "2026-02-02", "10:00", "11:00"))
            .unwrap();
        let c = store
            .create_reservation(&new_reservation(2, "2026-02-02", "09:00", "10:00"))
            .unwrap();

        // The two seed reservations occupy ids 1 and 2
        assert_eq!(a.id, 3);
        assert_eq!(b.id, 4);
        assert_eq!(c.id, 5);
    }

    #[test]
    fn test_create_identical_slot_twice_conflicts() {
        let store = ReservationStore::new();
        let new = new_reservation(3, "2026-01-22", "16:00", "17:00");

        store.create_reservation(&new).unwrap();
        let err = store.create_reservation(&new).unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(err.message(), "Time slot already booked");
    }

    #[test]
    fn test_overlap_cases() {
        let store = ReservationStore::new();
        store
            .create_reservation(&new_reservation(1, "2026-02-03", "09:00", "10:00"))
            .unwrap();

        // Partial overlap from either side conflicts
        for (start, end) in [("09:30", "10:30"), ("08:30", "09:30"), ("08:00", "11:00")] {
            let err = store
                .create_reservation(&new_reservation(1, "2026-02-03", start, end))
                .unwrap_err();
            assert!(matches!(err, AppError::Conflict(_)), "{start}-{end}");
        }

        // Half-open intervals: adjacency is not a conflict
        store
            .create_reservation(&new_reservation(1, "2026-02-03", "10:00", "11:00"))
            .unwrap();
        store
            .create_reservation(&new_reservation(1, "2026-02-03", "08:00", "09:00"))
            .unwrap();

        // Same time elsewhere is free
        store
            .create_reservation(&new_reservation(2, "2026-02-03", "09:00", "10:00"))
            .unwrap();
        store
            .create_reservation(&new_reservation(1, "2026-02-04", "09:00", "10:00"))
            .unwrap();
    }

    #[test]
    fn test_create_unknown_resource_is_invalid_input() {
        let store = ReservationStore::new();
        let err = store
            .create_reservation(&new_reservation(9999, "2026-02-02", "09:00", "10:00"))
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
        assert_eq!(err.message(), "Resource does not exist");
    }

    #[test]
    fn test_delete_unknown_then_twice() {
        let store = ReservationStore::new();

        let err = store.delete_reservation(9999).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let created = store
            .create_reservation(&new_reservation(1, "2026-02-05", "09:00", "10:00"))
            .unwrap();
        store.delete_reservation(created.id).unwrap();
        let err = store.delete_reservation(created.id).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_delete_frees_the_slot() {
        let store = ReservationStore::new();
        let new = new_reservation(2, "2026-02-06", "09:00", "10:00");

        let created = store.create_reservation(&new).unwrap();
        assert!(matches!(
            store.create_reservation(&new),
            Err(AppError::Conflict(_))
        ));

        store.delete_reservation(created.id).unwrap();
        store.create_reservation(&new).unwrap();
    }

    #[test]
    fn test_availability_empty_offers_is_ok() {
        let store = ReservationStore::new();
        // Salle Darwin has no offered slots
        assert_eq!(store.list_availability(4).unwrap(), vec![]);
    }

    #[test]
    fn test_availability_unknown_resource() {
        let store = ReservationStore::new();
        let err = store.list_availability(9999).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_availability_subtracts_booked_offers() {
        let store = ReservationStore::new();

        let before = store.list_availability(3).unwrap();
        assert_eq!(before.len(), 1);

        let created = store
            .create_reservation(&new_reservation(3, "2026-01-22", "16:00", "17:00"))
            .unwrap();
        assert_eq!(store.list_availability(3).unwrap(), vec![]);

        store.delete_reservation(created.id).unwrap();
        assert_eq!(store.list_availability(3).unwrap(), before);
    }

    #[test]
    fn test_availability_subtracts_on_partial_overlap() {
        let store = ReservationStore::new();

        // 09:30-10:30 straddles the 09:00-10:00 and 10:00-11:00 offers of
        // 2026-01-20; both disappear, the afternoon offers stay.
        store
            .create_reservation(&new_reservation(1, "2026-01-20", "09:30", "10:30"))
            .unwrap();

        let available = store.list_availability(1).unwrap();
        assert!(available
            .iter()
            .all(|s| s.date.to_string() != "2026-01-20" || s.start_time >= parse_time("14:00").unwrap()));
        assert_eq!(available.len(), 6);
    }

    #[test]
    fn test_list_reservations_for_resource_sorted() {
        let store = ReservationStore::new();

        store
            .create_reservation(&new_reservation(1, "2026-02-10", "14:00", "15:00"))
            .unwrap();
        store
            .create_reservation(&new_reservation(1, "2026-02-09", "09:00", "10:00"))
            .unwrap();
        store
            .create_reservation(&new_reservation(1, "2026-02-10", "08:00", "09:00"))
            .unwrap();

        let rows = store.list_reservations_for_resource(1).unwrap();
        let keys: Vec<(String, String)> = rows
            .iter()
            .map(|r| (r.date.to_string(), r.start_time.format("%H:%M").to_string()))
            .collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);

        assert!(matches!(
            store.list_reservations_for_resource(9999),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_list_reservations_newest_first() {
        let store = ReservationStore::new();

        let created = store
            .create_reservation(&new_reservation(2, "2026-02-11", "09:00", "10:00"))
            .unwrap();

        let all = store.list_reservations().unwrap();
        assert_eq!(all.first().map(|r| r.id), Some(created.id));
        assert_eq!(all.last().map(|r| r.id), Some(1));
    }

    #[test]
    fn test_toggle_resource_active() {
        let store = ReservationStore::new();

        let toggled = store.toggle_resource_active(1).unwrap();
        assert!(!toggled.active);
        let toggled = store.toggle_resource_active(1).unwrap();
        assert!(toggled.active);

        assert!(matches!(
            store.toggle_resource_active(9999),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_inactive_resource_still_accepts_reservations() {
        let store = ReservationStore::new();

        let toggled = store.toggle_resource_active(2).unwrap();
        assert!(!toggled.active);

        // The flag is reported to clients, not enforced by the store
        store
            .create_reservation(&new_reservation(2, "2026-02-12", "09:00", "10:00"))
            .unwrap();
        assert!(!store.list_availability(2).unwrap().is_empty());
    }
}
