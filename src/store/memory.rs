//! In-memory store.

use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{ClockEvent, ClockUpdate, EmployeeProfile};

use super::{ProfileProvider, RecordStore};

type EventKey = (String, NaiveDate);

/// A process-local [`RecordStore`] and [`ProfileProvider`].
///
/// Upserts run under a single write lock, so concurrent clock actions for the
/// same `(employee, day)` never create duplicate events.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{ClockKind, ClockUpdate};
/// use attendance_engine::store::{InMemoryStore, RecordStore};
/// use chrono::{NaiveDate, TimeZone, Utc};
///
/// # #[tokio::main]
/// # async fn main() {
/// let store = InMemoryStore::new();
/// let day = NaiveDate::from_ymd_opt(2026, 10, 14).unwrap();
/// let at = Utc.with_ymd_and_hms(2026, 10, 14, 1, 30, 0).unwrap();
///
/// let event = store
///     .upsert_event("emp_001", day, ClockUpdate { kind: ClockKind::In, at })
///     .await
///     .unwrap();
/// assert_eq!(event.clock_in_at, Some(at));
/// # }
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    events: RwLock<HashMap<EventKey, ClockEvent>>,
    profiles: RwLock<BTreeMap<String, EmployeeProfile>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with the given profiles.
    pub fn with_profiles(profiles: impl IntoIterator<Item = EmployeeProfile>) -> Self {
        let profiles = profiles
            .into_iter()
            .map(|profile| (profile.id.clone(), profile))
            .collect();
        Self {
            events: RwLock::default(),
            profiles: RwLock::new(profiles),
        }
    }

    /// Inserts or replaces a profile.
    pub fn insert_profile(&self, profile: EmployeeProfile) -> EngineResult<()> {
        let mut profiles = self
            .profiles
            .write()
            .map_err(|_| poisoned("insert_profile"))?;
        profiles.insert(profile.id.clone(), profile);
        Ok(())
    }

    /// Inserts or replaces a whole event, bypassing the partial-update rules.
    pub fn insert_event(&self, event: ClockEvent) -> EngineResult<()> {
        let mut events = self.events.write().map_err(|_| poisoned("insert_event"))?;
        events.insert((event.employee_id.clone(), event.schedule_date), event);
        Ok(())
    }

    /// Returns the number of stored events.
    pub fn event_count(&self) -> EngineResult<usize> {
        let events = self.events.read().map_err(|_| poisoned("event_count"))?;
        Ok(events.len())
    }
}

fn poisoned(operation: &str) -> EngineError {
    EngineError::StoreFailure {
        operation: operation.to_string(),
        message: "store lock poisoned".to_string(),
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn find_events_in_range(
        &self,
        employee_id: &str,
        start_inclusive: NaiveDate,
        end_exclusive: NaiveDate,
    ) -> EngineResult<Vec<ClockEvent>> {
        let events = self
            .events
            .read()
            .map_err(|_| poisoned("find_events_in_range"))?;

        let mut found: Vec<ClockEvent> = events
            .values()
            .filter(|e| {
                e.employee_id == employee_id
                    && e.schedule_date >= start_inclusive
                    && e.schedule_date < end_exclusive
            })
            .cloned()
            .collect();
        found.sort_by_key(|e| e.schedule_date);
        Ok(found)
    }

    async fn upsert_event(
        &self,
        employee_id: &str,
        date: NaiveDate,
        update: ClockUpdate,
    ) -> EngineResult<ClockEvent> {
        let mut events = self.events.write().map_err(|_| poisoned("upsert_event"))?;

        let event = events
            .entry((employee_id.to_string(), date))
            .or_insert_with(|| {
                debug!(employee_id, date = %date, "Creating clock event");
                ClockEvent::new(employee_id, date)
            });
        event.apply(update);
        Ok(event.clone())
    }
}

#[async_trait]
impl ProfileProvider for InMemoryStore {
    async fn get_profile(&self, employee_id: &str) -> EngineResult<Option<EmployeeProfile>> {
        let profiles = self.profiles.read().map_err(|_| poisoned("get_profile"))?;
        Ok(profiles.get(employee_id).cloned())
    }

    async fn list_profiles(&self) -> EngineResult<Vec<EmployeeProfile>> {
        let profiles = self.profiles.read().map_err(|_| poisoned("list_profiles"))?;
        Ok(profiles.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ClockKind;
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;
    use std::sync::Arc;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn clock(kind: ClockKind, hour: u32) -> ClockUpdate {
        ClockUpdate {
            kind,
            at: Utc.with_ymd_and_hms(2026, 10, 14, hour, 0, 0).unwrap(),
        }
    }

    fn profile(id: &str) -> EmployeeProfile {
        EmployeeProfile {
            id: id.to_string(),
            email: format!("{}@example.com", id),
            name: String::new(),
            department: String::new(),
            position: String::new(),
            base_salary: Decimal::new(3_000_000, 0),
            is_admin: false,
            is_active: true,
        }
    }

    #[tokio::test]
    async fn test_upsert_creates_with_only_named_field() {
        let store = InMemoryStore::new();
        let event = store
            .upsert_event("emp_001", make_date("2026-10-14"), clock(ClockKind::Out, 10))
            .await
            .unwrap();

        assert!(event.clock_in_at.is_none());
        assert!(event.clock_out_at.is_some());
        assert_eq!(store.event_count().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_second_clock_in_overwrites_and_keeps_clock_out() {
        let store = InMemoryStore::new();
        let day = make_date("2026-10-14");

        store
            .upsert_event("emp_001", day, clock(ClockKind::In, 1))
            .await
            .unwrap();
        store
            .upsert_event("emp_001", day, clock(ClockKind::Out, 10))
            .await
            .unwrap();
        let event = store
            .upsert_event("emp_001", day, clock(ClockKind::In, 2))
            .await
            .unwrap();

        assert_eq!(event.clock_in_at, Some(clock(ClockKind::In, 2).at));
        assert_eq!(event.clock_out_at, Some(clock(ClockKind::Out, 10).at));
        assert_eq!(store.event_count().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_find_uses_half_open_range() {
        let store = InMemoryStore::new();
        for date in ["2026-09-30", "2026-10-01", "2026-10-31", "2026-11-01"] {
            store
                .insert_event(ClockEvent::new("emp_001", make_date(date)))
                .unwrap();
        }
        store
            .insert_event(ClockEvent::new("emp_002", make_date("2026-10-15")))
            .unwrap();

        let found = store
            .find_events_in_range("emp_001", make_date("2026-10-01"), make_date("2026-11-01"))
            .await
            .unwrap();

        let dates: Vec<NaiveDate> = found.iter().map(|e| e.schedule_date).collect();
        assert_eq!(dates, vec![make_date("2026-10-01"), make_date("2026-10-31")]);
    }

    #[tokio::test]
    async fn test_concurrent_clock_ins_create_one_event() {
        let store = Arc::new(InMemoryStore::new());
        let day = make_date("2026-10-14");

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move {
                    store
                        .upsert_event("emp_001", day, clock(ClockKind::In, i % 24))
                        .await
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(store.event_count().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_profiles_listed_in_id_order() {
        let store = InMemoryStore::with_profiles(vec![profile("emp_002"), profile("emp_001")]);
        store.insert_profile(profile("emp_003")).unwrap();

        let ids: Vec<String> = store
            .list_profiles()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["emp_001", "emp_002", "emp_003"]);

        assert!(store.get_profile("emp_404").await.unwrap().is_none());
    }
}
