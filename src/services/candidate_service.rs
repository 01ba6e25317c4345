use crate::error::{Error, Result};
use crate::models::candidate::{Candidate, NewCandidate};
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct CandidateService {
    pool: SqlitePool,
}

impl CandidateService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create_candidate(&self, candidate: NewCandidate) -> Result<Candidate> {
        let created = sqlx::query_as::<_, Candidate>(
            r#"
            INSERT INTO candidates (name, nationality, major, experience_years, gender, city, cv_link)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING id, name, nationality, major, experience_years, gender, city, cv_link, created_at
            "#,
        )
        .bind(candidate.name)
        .bind(candidate.nationality)
        .bind(candidate.major)
        .bind(candidate.experience_years)
        .bind(candidate.gender)
        .bind(candidate.city)
        .bind(candidate.cv_link)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    pub async fn list_candidates(&self) -> Result<Vec<Candidate>> {
        let candidates = sqlx::query_as::<_, Candidate>(
            r#"
            SELECT id, name, nationality, major, experience_years, gender, city, cv_link, created_at
            FROM candidates
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(candidates)
    }

    /// Runs model-generated SQL as-is. The statement executes inside a
    /// transaction that is always rolled back, so only its result rows
    /// survive; any write it performs is discarded.
    pub async fn run_generated_query(&self, sql: &str) -> Result<Vec<Candidate>> {
        if !is_single_statement(sql) {
            return Err(Error::BadRequest(
                "Generated SQL must be a single statement".to_string(),
            ));
        }

        let mut tx = self.pool.begin().await?;
        let rows = sqlx::query_as::<_, Candidate>(sql)
            .fetch_all(&mut *tx)
            .await;
        tx.rollback().await?;
        Ok(rows?)
    }
}

/// True when `sql` holds at most one statement. A trailing `;` followed only
/// by whitespace or comments is allowed. Semicolons inside string literals,
/// quoted identifiers and comments are ignored.
fn is_single_statement(sql: &str) -> bool {
    let mut chars = sql.chars().peekable();
    let mut terminated = false;

    while let Some(c) = chars.next() {
        match c {
            '-' if chars.peek() == Some(&'-') => {
                for next in chars.by_ref() {
                    if next == '\n' {
                        break;
                    }
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = '\0';
                for next in chars.by_ref() {
                    if prev == '*' && next == '/' {
                        break;
                    }
                    prev = next;
                }
            }
            c if c.is_whitespace() => {}
            _ if terminated => return false,
            ';' => terminated = true,
            '\'' | '"' | '`' => {
                // a doubled quote inside a literal closes and reopens it, which
                // leaves the scan in the same state
                for next in chars.by_ref() {
                    if next == c {
                        break;
                    }
                }
            }
            '[' => {
                for next in chars.by_ref() {
                    if next == ']' {
                        break;
                    }
                }
            }
            _ => {}
        }
    }
    true
}
