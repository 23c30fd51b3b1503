//! Document command handlers

use anyhow::{Context, Result};
use serde_json::Value;

use quill_core::Driver;

use crate::output::Output;

/// Store a JSON document given on the command line
pub fn put(
    db: &Driver,
    collection: &str,
    resource: &str,
    json: &str,
    output: &Output,
) -> Result<()> {
    let doc: Value = serde_json::from_str(json).context("Document is not valid JSON")?;

    db.write(collection, resource, &doc)
        .with_context(|| format!("Failed to write {}/{}", collection, resource))?;

    output.success(&format!("Wrote {}/{}", collection, resource));
    Ok(())
}

/// Print a single document
pub fn get(db: &Driver, collection: &str, resource: &str, output: &Output) -> Result<()> {
    let doc: Value = db
        .read(collection, resource)
        .with_context(|| format!("Failed to read {}/{}", collection, resource))?;

    output.print_document(collection, resource, &doc);
    Ok(())
}

/// Print every document in a collection
pub fn list(db: &Driver, collection: &str, output: &Output) -> Result<()> {
    let records = db
        .read_all(collection)
        .with_context(|| format!("Failed to read collection '{}'", collection))?;

    let docs = decode_all(&records)?;
    output.print_documents(collection, &docs);
    Ok(())
}

/// Delete a document, or the whole collection when no resource is given
pub fn remove(
    db: &Driver,
    collection: &str,
    resource: Option<&str>,
    output: &Output,
) -> Result<()> {
    let resource = resource.unwrap_or("");

    db.delete(collection, resource).with_context(|| {
        if resource.is_empty() {
            format!("Failed to delete collection '{}'", collection)
        } else {
            format!("Failed to delete {}/{}", collection, resource)
        }
    })?;

    if resource.is_empty() {
        output.success(&format!("Deleted collection '{}'", collection));
    } else {
        output.success(&format!("Deleted {}/{}", collection, resource));
    }
    Ok(())
}

/// Decode raw collection records into JSON values
pub fn decode_all(records: &[Vec<u8>]) -> Result<Vec<Value>> {
    records
        .iter()
        .map(|bytes| {
            serde_json::from_slice::<Value>(bytes).context("Stored document is not valid JSON")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use quill_core::{NoopLogger, Options};
    use std::sync::Arc;
    use tempfile::TempDir;

    fn test_driver(temp_dir: &TempDir) -> Driver {
        let options = Options::default().with_logger(Arc::new(NoopLogger));
        Driver::open(temp_dir.path(), options).unwrap()
    }

    fn quiet() -> Output {
        Output::new(OutputFormat::Quiet)
    }

    #[test]
    fn test_put_then_get() {
        let temp_dir = TempDir::new().unwrap();
        let db = test_driver(&temp_dir);

        put(&db, "fish", "redfish", r#"{"type": "red"}"#, &quiet()).unwrap();

        let doc: Value = db.read("fish", "redfish").unwrap();
        assert_eq!(doc, serde_json::json!({"type": "red"}));
        get(&db, "fish", "redfish", &quiet()).unwrap();
    }

    #[test]
    fn test_put_rejects_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let db = test_driver(&temp_dir);

        assert!(put(&db, "fish", "redfish", "{not json", &quiet()).is_err());
        assert!(!db.collection_path("fish").exists());
    }

    #[test]
    fn test_list_and_remove() {
        let temp_dir = TempDir::new().unwrap();
        let db = test_driver(&temp_dir);
        put(&db, "fish", "red", r#"{"type": "red"}"#, &quiet()).unwrap();
        put(&db, "fish", "blue", r#"{"type": "blue"}"#, &quiet()).unwrap();

        list(&db, "fish", &quiet()).unwrap();

        remove(&db, "fish", Some("red"), &quiet()).unwrap();
        assert_eq!(db.read_all("fish").unwrap().len(), 1);

        remove(&db, "fish", None, &quiet()).unwrap();
        assert!(list(&db, "fish", &quiet()).is_err());
    }

    #[test]
    fn test_remove_missing_fails() {
        let temp_dir = TempDir::new().unwrap();
        let db = test_driver(&temp_dir);

        let err = remove(&db, "fish", Some("ghost"), &quiet()).unwrap_err();
        assert!(err.to_string().contains("fish/ghost"));
    }

    #[test]
    fn test_decode_all_rejects_garbage() {
        let records = vec![b"{\"a\": 1}\n".to_vec(), b"garbage".to_vec()];
        assert!(decode_all(&records).is_err());
        assert_eq!(decode_all(&records[..1]).unwrap().len(), 1);
    }
}
