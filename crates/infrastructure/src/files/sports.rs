use super::{column_indices, csv_reader, field, open_reference};
use crate::error::{LoadError, LoadResult};
use crate::reference::ReferenceData;
use athlete_insights_domain::sports::SportsList;
use std::io::{Read, Write};
use std::path::Path;
use tracing::{info, instrument};

/// The single header of a sports file
pub const SPORTS_COLUMN: &str = "Name";

/// Load the allowed sports list from `path`
#[instrument]
pub fn load_sports(path: &Path) -> LoadResult<ReferenceData<SportsList>> {
    match open_reference(path, "Sports list")? {
        ReferenceData::Loaded(file) => read_sports(file).map(ReferenceData::Loaded),
        ReferenceData::Unavailable { reason } => Ok(ReferenceData::Unavailable { reason }),
    }
}

/// Parse a sports list as stored; blank names are dropped
pub fn read_sports<R: Read>(reader: R) -> LoadResult<SportsList> {
    let mut reader = csv_reader(reader);
    let headers = reader.headers()?.clone();
    let [name] = column_indices(&headers, &[SPORTS_COLUMN], "sports list")?;

    let mut names = Vec::new();
    for record in reader.records() {
        names.push(field(&record?, name).to_string());
    }
    let sports = SportsList::new(names);
    info!(sports = sports.len(), "Loaded sports list");
    Ok(sports)
}

/// Write a sports list under the `Name` header
pub fn write_sports(path: &Path, sports: &SportsList) -> LoadResult<()> {
    let file = std::fs::File::create(path).map_err(|err| LoadError::io(path, err))?;
    write_sports_to(file, sports)
}

pub fn write_sports_to<W: Write>(writer: W, sports: &SportsList) -> LoadResult<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record([SPORTS_COLUMN])?;
    for name in sports.names() {
        writer.write_record([name])?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}
