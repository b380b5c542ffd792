//! Shared test utilities for nq-db unit tests.

#[cfg(test)]
pub(crate) mod helpers {
    use nq_core::entities::StudyRef;
    use tempfile::TempDir;

    use crate::NqDb;

    /// Open an empty corpus database in a temp dir.
    ///
    /// A file is used instead of `:memory:` because every connection to an
    /// in-memory database sees a different database.
    pub async fn temp_db() -> (TempDir, NqDb) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("corpus.db");
        let db = NqDb::open_local(path.to_str().unwrap()).await.unwrap();
        (dir, db)
    }

    /// Corpus fixture:
    ///
    /// | study | terms                      | coordinates        |
    /// |-------|----------------------------|--------------------|
    /// | s1    | pain (2 contrasts), fear   | 0,0,0 · 10,10,10   |
    /// | s2    | pain, reward               | 0,0,0              |
    /// | s3    | pain                       | -42,18,6           |
    /// | s4    | reward                     | 10,10,10           |
    /// | s5    | fear                       | 0,0,0 (twice)      |
    /// | s6    | working memory             | -42,18,6 · 0,0,0   |
    pub async fn seeded_db() -> (TempDir, NqDb) {
        let (dir, db) = temp_db().await;
        db.connect()
            .unwrap()
            .execute_batch(
                "INSERT INTO metadata (study_id, title, authors, journal, year) VALUES
                    ('s1', 'Pain anticipation', 'A. Author', 'NeuroImage', 2010),
                    ('s2', 'Pain and reward', 'B. Author', 'J Neurosci', 2011),
                    ('s3', 'Thermal pain', 'C. Author', 'Pain', 2012),
                    ('s4', 'Reward learning', 'D. Author', 'Neuron', 2013),
                    ('s5', 'Fear conditioning', 'E. Author', 'Neuron', 2014),
                    ('s6', 'Working memory load', 'F. Author', 'Cortex', 2015);
                 INSERT INTO annotations_terms (study_id, contrast_id, term, weight) VALUES
                    ('s1', 'c1', 'terms_abstract_tfidf__pain', 0.12),
                    ('s1', 'c2', 'terms_abstract_tfidf__pain', 0.08),
                    ('s1', 'c1', 'terms_abstract_tfidf__fear', 0.02),
                    ('s2', 'c1', 'terms_abstract_tfidf__pain', 0.05),
                    ('s2', 'c1', 'terms_abstract_tfidf__reward', 0.09),
                    ('s3', NULL, 'terms_abstract_tfidf__pain', 0.20),
                    ('s4', 'c1', 'terms_abstract_tfidf__reward', 0.15),
                    ('s5', 'c1', 'terms_abstract_tfidf__fear', 0.11),
                    ('s6', 'c1', 'terms_abstract_tfidf__working memory', 0.07);
                 INSERT INTO coordinates (study_id, x, y, z) VALUES
                    ('s1', 0, 0, 0),
                    ('s1', 10, 10, 10),
                    ('s2', 0, 0, 0),
                    ('s3', -42, 18, 6),
                    ('s4', 10, 10, 10),
                    ('s5', 0, 0, 0),
                    ('s5', 0, 0, 0),
                    ('s6', -42, 18, 6),
                    ('s6', 0, 0, 0);",
            )
            .await
            .unwrap();
        (dir, db)
    }

    /// Stored form of a bare term.
    pub fn stored(term: &str) -> String {
        nq_core::term::normalize(term)
    }

    /// Study IDs in result order.
    pub fn ids(studies: &[StudyRef]) -> Vec<&str> {
        studies.iter().map(|s| s.study_id.as_str()).collect()
    }
}
