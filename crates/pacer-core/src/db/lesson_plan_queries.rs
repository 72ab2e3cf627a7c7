//! Lesson plan persistence scoped by class, section, subject and academic
//! year.

use jiff::Timestamp;
use rusqlite::{Transaction, TransactionBehavior, params, types::Type};

use crate::{
    error::{DatabaseResultExt, Result},
    models::{LessonPlanRecord, Scope},
    sources::LessonPlanStore,
};

use super::{date_column, parsed_column};

const SCOPE_FILTER: &str = "school_id = ?1 AND class_id = ?2 AND section_id = ?3
     AND subject_id = ?4 AND academic_year_id = ?5";

const INSERT_LESSON_PLAN_SQL: &str = "INSERT INTO lesson_plans
     (school_id, class_id, section_id, subject_id, academic_year_id, teacher_id,
      lesson_date, period_label, sequence, kind, unit_title, chapter_title, topic_title,
      status, created_at)
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)";

const LESSON_PLAN_COLUMNS: &str = "id, teacher_id, lesson_date, period_label, sequence, kind,
     unit_title, chapter_title, topic_title, status, created_at";

fn scope_params(scope: &Scope) -> [i64; 5] {
    [
        scope.school_id as i64,
        scope.class_id as i64,
        scope.section_id as i64,
        scope.subject_id as i64,
        scope.academic_year_id as i64,
    ]
}

fn delete_scope_in(tx: &Transaction<'_>, scope: &Scope) -> Result<usize> {
    tx.execute(
        &format!("DELETE FROM lesson_plans WHERE {SCOPE_FILTER}"),
        scope_params(scope),
    )
    .db_context("Failed to delete lesson plans")
}

impl LessonPlanStore for super::Database {
    fn replace_scope(&mut self, scope: &Scope, records: &[LessonPlanRecord]) -> Result<usize> {
        // IMMEDIATE takes the write lock up front so concurrent commits
        // serialize rather than interleave
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let removed = delete_scope_in(&tx, scope)?;
        log::debug!("Removed {removed} lesson plans for {scope}");

        {
            let mut stmt = tx
                .prepare(INSERT_LESSON_PLAN_SQL)
                .db_context("Failed to prepare lesson plan insert")?;

            for record in records {
                stmt.execute(params![
                    record.scope.school_id as i64,
                    record.scope.class_id as i64,
                    record.scope.section_id as i64,
                    record.scope.subject_id as i64,
                    record.scope.academic_year_id as i64,
                    record.teacher_id as i64,
                    record.date.to_string(),
                    record.period_label,
                    record.sequence as i64,
                    record.kind.as_str(),
                    record.unit_title,
                    record.chapter_title,
                    record.topic_title,
                    record.status.as_str(),
                    record.created_at.to_string()
                ])
                .db_context("Failed to insert lesson plan")?;
            }
        }

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(records.len())
    }

    fn find_by_scope(&self, scope: &Scope) -> Result<Vec<LessonPlanRecord>> {
        let query = format!(
            "SELECT {LESSON_PLAN_COLUMNS} FROM lesson_plans WHERE {SCOPE_FILTER}
             ORDER BY lesson_date, sequence"
        );
        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare lesson plan query")?;

        let records = stmt
            .query_map(scope_params(scope), |row| {
                Ok(LessonPlanRecord {
                    id: Some(row.get::<_, i64>(0)? as u64),
                    scope: *scope,
                    teacher_id: row.get::<_, i64>(1)? as u64,
                    date: date_column(row, 2)?,
                    period_label: row.get(3)?,
                    sequence: row.get::<_, i64>(4)? as u32,
                    kind: parsed_column(row, 5)?,
                    unit_title: row.get(6)?,
                    chapter_title: row.get(7)?,
                    topic_title: row.get(8)?,
                    status: parsed_column(row, 9)?,
                    created_at: row.get::<_, String>(10)?.parse::<Timestamp>().map_err(|e| {
                        rusqlite::Error::FromSqlConversionFailure(10, Type::Text, Box::new(e))
                    })?,
                })
            })
            .db_context("Failed to query lesson plans")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read lesson plan")?;

        Ok(records)
    }

    fn delete_by_scope(&mut self, scope: &Scope) -> Result<usize> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let removed = delete_scope_in(&tx, scope)?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::{
        db::Database,
        error::PacerError,
        models::{LessonStatus, TaskKind, Teacher},
    };

    const SCOPE: Scope = Scope {
        school_id: 1,
        class_id: 7,
        section_id: 2,
        subject_id: 11,
        academic_year_id: 2024,
    };

    fn database_with_teacher() -> Database {
        let mut db = Database::in_memory().unwrap();
        db.upsert_teacher(&Teacher {
            id: 5,
            school_id: 1,
            name: "Asha Rao".into(),
        })
        .unwrap();
        db
    }

    fn record(sequence: u32, day: i8, kind: TaskKind, chapter: Option<&str>) -> LessonPlanRecord {
        LessonPlanRecord {
            id: None,
            scope: SCOPE,
            teacher_id: 5,
            date: date(2024, 9, day),
            period_label: "P1".into(),
            sequence,
            kind,
            unit_title: "Algebra".into(),
            chapter_title: chapter.map(String::from),
            topic_title: format!("Topic {sequence}"),
            status: LessonStatus::Planned,
            created_at: Timestamp::from_second(1_725_000_000).unwrap(),
        }
    }

    #[test]
    fn replace_scope_round_trips_records_in_order() {
        let mut db = database_with_teacher();
        let records = vec![
            record(1, 3, TaskKind::Topic, Some("Equations")),
            record(0, 2, TaskKind::Topic, Some("Equations")),
            record(2, 4, TaskKind::Revision, None),
        ];

        assert_eq!(db.replace_scope(&SCOPE, &records).unwrap(), 3);

        let stored = db.find_by_scope(&SCOPE).unwrap();
        let sequences: Vec<u32> = stored.iter().map(|r| r.sequence).collect();
        assert_eq!(sequences, vec![0, 1, 2]);
        assert!(stored.iter().all(|r| r.id.is_some()));
        assert_eq!(stored[2].kind, TaskKind::Revision);
        assert_eq!(stored[2].chapter_title, None);
        assert_eq!(stored[0].created_at, records[0].created_at);
    }

    #[test]
    fn replace_scope_discards_previous_records() {
        let mut db = database_with_teacher();
        let first = [
            record(0, 2, TaskKind::Topic, Some("A")),
            record(1, 3, TaskKind::Topic, Some("A")),
        ];
        db.replace_scope(&SCOPE, &first).unwrap();
        db.replace_scope(&SCOPE, &[record(0, 9, TaskKind::Topic, Some("B"))])
            .unwrap();

        let stored = db.find_by_scope(&SCOPE).unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].chapter_title.as_deref(), Some("B"));
    }

    #[test]
    fn scopes_are_isolated() {
        let mut db = database_with_teacher();
        let other = Scope {
            section_id: 3,
            ..SCOPE
        };
        db.replace_scope(&SCOPE, &[record(0, 2, TaskKind::Topic, Some("A"))])
            .unwrap();

        assert!(db.find_by_scope(&other).unwrap().is_empty());
        assert_eq!(db.delete_by_scope(&other).unwrap(), 0);
        assert_eq!(db.delete_by_scope(&SCOPE).unwrap(), 1);
        assert!(db.find_by_scope(&SCOPE).unwrap().is_empty());
    }

    #[test]
    fn records_require_a_registered_teacher() {
        let mut db = database_with_teacher();
        db.replace_scope(&SCOPE, &[record(0, 2, TaskKind::Topic, Some("A"))])
            .unwrap();

        let orphan = LessonPlanRecord {
            teacher_id: 9,
            ..record(0, 3, TaskKind::Topic, Some("B"))
        };
        let err = db.replace_scope(&SCOPE, &[orphan]).unwrap_err();
        assert!(matches!(err, PacerError::Database { .. }));

        // The failed replacement rolled back, keeping the earlier plan
        let stored = db.find_by_scope(&SCOPE).unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].chapter_title.as_deref(), Some("A"));
    }
}
