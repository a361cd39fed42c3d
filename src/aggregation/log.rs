//! Chronological session log.

use chrono::NaiveDateTime;

use crate::models::Store;


/// One flattened (project, session) entry for the list view.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub project: String,
    pub start: NaiveDateTime,
    pub end: Option<NaiveDateTime>,
    pub duration: i64,
    pub comment: Option<String>,
}


/// Flatten all sessions, most recent start first. Filtering by project and
/// capping to `limit` both happen after sorting, in that order.
pub fn session_log(
    store: &Store,
    filter: Option<&str>,
    limit: Option<usize>,
    now: NaiveDateTime,
) -> Vec<LogEntry> {
    let mut entries: Vec<LogEntry> = store
        .projects
        .iter()
        .flat_map(|project| {
            project.sessions.iter().map(move |session| LogEntry {
                project: project.name.clone(),
                start: session.start,
                end: session.end,
                duration: session.duration(now),
                comment: session.comment.clone(),
            })
        })
        .collect();

    entries.sort_by(|a, b| b.start.cmp(&a.start));

    if let Some(name) = filter {
        entries.retain(|entry| entry.project == name);
    }
    if let Some(limit) = limit {
        entries.truncate(limit);
    }

    entries
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Session;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn closed_session(start: &str, end: &str) -> Session {
        let mut session = Session::new(dt(start));
        session.end = Some(dt(end));
        session
    }

    fn sample_store() -> Store {
        let mut rng = StdRng::seed_from_u64(7);
        let mut store = Store::default();
        store.add_project("a", None, &mut rng);
        store.add_project("b", None, &mut rng);

        let a = store.get_project_mut("a").unwrap();
        a.add_session(closed_session("2024-01-08 09:00:00", "2024-01-08 10:00:00"));
        a.add_session(closed_session("2024-01-10 09:00:00", "2024-01-10 09:30:00"));

        let b = store.get_project_mut("b").unwrap();
        b.add_session(closed_session("2024-01-09 14:00:00", "2024-01-09 15:00:00"));
        store
    }

    #[test]
    fn test_sorted_most_recent_first() {
        let entries = session_log(&sample_store(), None, None, dt("2024-01-10 18:00:00"));
        let starts: Vec<_> = entries.iter().map(|e| e.start).collect();
        assert_eq!(
            starts,
            vec![
                dt("2024-01-10 09:00:00"),
                dt("2024-01-09 14:00:00"),
                dt("2024-01-08 09:00:00"),
            ]
        );
    }

    #[test]
    fn test_filter_applies_after_sorting() {
        let entries = session_log(&sample_store(), Some("a"), None, dt("2024-01-10 18:00:00"));
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.project == "a"));
        assert!(entries[0].start > entries[1].start);
    }

    #[test]
    fn test_limit_applies_after_filter() {
        // With the filter first, the cap still yields a's most recent session
        // even though b's session is more recent than a's oldest.
        let entries = session_log(&sample_store(), Some("a"), Some(1), dt("2024-01-10 18:00:00"));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].start, dt("2024-01-10 09:00:00"));
    }

    #[test]
    fn test_open_session_duration_uses_now() {
        let mut store = sample_store();
        store.start_session("a", dt("2024-01-10 17:00:00")).unwrap();

        let entries = session_log(&store, None, Some(1), dt("2024-01-10 18:00:00"));
        assert!(entries[0].end.is_none());
        assert_eq!(entries[0].duration, 3600);
    }
}
