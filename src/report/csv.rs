use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tracing::{info, instrument};

use crate::constants::{NO_CATEGORY, UNKNOWN_TYPE};
use crate::error::Result;
use crate::schema::descriptor::Descriptor;

#[derive(Serialize)]
pub struct CsvRow<'a> {
    #[serde(rename = "Name")]
    pub name: &'a str,
    #[serde(rename = "UUID")]
    pub id: &'a str,
    #[serde(rename = "Type")]
    pub kind: &'a str,
    #[serde(rename = "Category")]
    pub category: &'a str,
}

impl<'a> From<&'a Descriptor> for CsvRow<'a> {
    fn from(d: &'a Descriptor) -> Self {
        Self {
            name: &d.name,
            id: &d.id,
            kind: d.type_tag().unwrap_or(UNKNOWN_TYPE),
            category: d.category().unwrap_or(NO_CATEGORY),
        }
    }
}

/// Write one row per descriptor, in the given order, after the header.
/// Rows end in CRLF.
pub fn write_csv<W: Write>(writer: W, descriptors: &[Descriptor]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);
    if descriptors.is_empty() {
        // serialize() only emits the header alongside the first record
        writer.write_record(["Name", "UUID", "Type", "Category"])?;
    }
    for d in descriptors {
        writer.serialize(CsvRow::from(d))?;
    }
    writer.flush()?;
    Ok(())
}

#[instrument(skip_all, fields(path = %path.display()))]
pub fn export_csv(path: &Path, descriptors: &[Descriptor]) -> Result<usize> {
    let file = std::fs::File::create(path)?;
    write_csv(file, descriptors)?;

    info!(count = descriptors.len(), "wrote csv export");
    Ok(descriptors.len())
}
