#[cfg(test)]
mod store_tests {
    use crate::{GroupField, RecordStore, StorageError, StudyStore, ingest_csv, ingest_csv_file};
    use geocat_core::NewStudy;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn create_test_store() -> (StudyStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");
        let store = StudyStore::open(&db_path).unwrap();
        (store, temp_dir)
    }

    fn test_study(accession: &str, organism: &str, data_type: &str) -> NewStudy {
        NewStudy {
            geo_accession: accession.to_string(),
            title: format!("Study {accession}"),
            organism: organism.to_string(),
            data_type: data_type.to_string(),
            extracted_molecule: "total RNA".to_string(),
            superseries: "no".to_string(),
            summary: "A test study".to_string(),
            publication_date: "2021-06-01".to_string(),
        }
    }

    #[test]
    fn open_creates_empty_store() {
        let (store, _temp_dir) = create_test_store();
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn insert_assigns_unique_increasing_ids() {
        let (store, _temp_dir) = create_test_store();
        let a = store.insert(&test_study("GSE1", "human", "rna-seq")).unwrap();
        let b = store.insert(&test_study("GSE2", "mouse", "wgs")).unwrap();
        assert!(b > a);

        let record = store.get(a).unwrap();
        assert_eq!(record.id, a);
        assert_eq!(record.geo_accession, "GSE1");
        assert_eq!(record.organism, "human");
    }

    #[test]
    fn get_missing_id_is_not_found() {
        let (store, _temp_dir) = create_test_store();
        let err = store.get(999).unwrap_err();
        assert!(err.is_not_found(), "expected NotFound, got {err:?}");
    }

    #[test]
    fn scan_applies_predicate_in_rowid_order() {
        let (store, _temp_dir) = create_test_store();
        store.insert(&test_study("GSE1", "human", "rna-seq")).unwrap();
        store.insert(&test_study("GSE2", "mouse", "rna-seq")).unwrap();
        store.insert(&test_study("GSE3", "human", "wgs")).unwrap();

        let all = store.scan(&|_| true).unwrap();
        assert_eq!(all.len(), 3);
        let ids: Vec<i64> = all.iter().map(|s| s.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);

        let humans = store.scan(&|s: &geocat_core::StudyRecord| s.organism == "human").unwrap();
        assert_eq!(humans.len(), 2);
        assert!(humans.iter().all(|s| s.organism == "human"));
    }

    #[test]
    fn count_grouped_counts_each_distinct_value() {
        let (store, _temp_dir) = create_test_store();
        store.insert(&test_study("GSE1", "human", "rna-seq")).unwrap();
        store.insert(&test_study("GSE2", "human", "wgs")).unwrap();
        store.insert(&test_study("GSE3", "mouse", "rna-seq")).unwrap();

        let groups = store.count_grouped(GroupField::Organism).unwrap();
        let by_value: HashMap<String, i64> =
            groups.into_iter().map(|g| (g.value, g.count)).collect();
        assert_eq!(by_value.len(), 2);
        assert_eq!(by_value["human"], 2);
        assert_eq!(by_value["mouse"], 1);
    }

    #[test]
    fn count_grouped_keeps_empty_value_as_distinct_group() {
        let (store, _temp_dir) = create_test_store();
        store.insert(&test_study("GSE1", "human", "rna-seq")).unwrap();
        store.insert(&test_study("GSE2", "", "rna-seq")).unwrap();

        let groups = store.count_grouped(GroupField::Organism).unwrap();
        let by_value: HashMap<String, i64> =
            groups.into_iter().map(|g| (g.value, g.count)).collect();
        assert_eq!(by_value[""], 1);
        assert_eq!(by_value["human"], 1);
    }

    #[test]
    fn grouping_is_exact_case_sensitive() {
        let (store, _temp_dir) = create_test_store();
        store.insert(&test_study("GSE1", "Homo sapiens", "rna-seq")).unwrap();
        store.insert(&test_study("GSE2", "homo sapiens", "rna-seq")).unwrap();

        let groups = store.count_grouped(GroupField::Organism).unwrap();
        assert_eq!(groups.len(), 2, "case variants form distinct groups");
    }

    #[test]
    fn ingest_csv_is_additive_and_counts_rows() {
        let (store, _temp_dir) = create_test_store();
        store.insert(&test_study("GSE0", "human", "rna-seq")).unwrap();

        let csv_input = "\
geo_accession,title,organism,data_type,extracted_molecule,superseries,summary,publication_date
GSE100,Placenta atlas,Homo sapiens,Expression profiling by array,total RNA,no,First study,2019-03-01
GSE101,Trophoblast series,Mus musculus,Expression profiling by high throughput sequencing,polyA RNA,yes,Second study,2020-11-15
";
        let inserted = ingest_csv(&store, csv_input.as_bytes()).unwrap();
        assert_eq!(inserted, 2);
        assert_eq!(store.count().unwrap(), 3);
    }

    #[test]
    fn ingest_csv_defaults_missing_columns_to_empty_string() {
        let (store, _temp_dir) = create_test_store();
        let csv_input = "\
geo_accession,title
GSE200,Minimal row
";
        ingest_csv(&store, csv_input.as_bytes()).unwrap();

        let all = store.scan(&|_| true).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].geo_accession, "GSE200");
        assert_eq!(all[0].organism, "");
        assert_eq!(all[0].superseries, "");
    }

    #[test]
    fn ingest_csv_rejects_malformed_input_without_partial_load() {
        let (store, _temp_dir) = create_test_store();
        // Second record has a dangling quote; the whole load must roll back.
        let csv_input = "\
geo_accession,title,organism
GSE300,Good row,human
GSE301,\"Broken row,mouse
";
        let result = ingest_csv(&store, csv_input.as_bytes());
        assert!(result.is_err());
        assert_eq!(store.count().unwrap(), 0, "no partial ingest");
    }

    #[test]
    fn ingest_csv_file_surfaces_missing_file_as_io_error() {
        let (store, temp_dir) = create_test_store();
        let err = ingest_csv_file(&store, &temp_dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, StorageError::Io(_)), "expected Io, got {err:?}");
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn migration_failure_surfaces_as_migration_error() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");
        // A pre-existing studies table without the expected columns makes
        // the v1 index creation fail mid-ladder.
        {
            let conn = rusqlite::Connection::open(&db_path).unwrap();
            conn.execute_batch("CREATE TABLE studies (id INTEGER PRIMARY KEY)").unwrap();
        }
        let err = StudyStore::open(&db_path).unwrap_err();
        assert!(matches!(err, StorageError::Migration(_)), "expected Migration, got {err:?}");
    }

    #[test]
    fn reopening_the_store_preserves_data() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");
        {
            let store = StudyStore::open(&db_path).unwrap();
            store.insert(&test_study("GSE1", "human", "rna-seq")).unwrap();
        }
        let store = StudyStore::open(&db_path).unwrap();
        assert_eq!(store.count().unwrap(), 1);
    }
}
