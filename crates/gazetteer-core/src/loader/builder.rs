// crates/gazetteer-core/src/loader/builder.rs
#![cfg(feature = "builder")]

//! Dataset builder: joins a local-language and a foreign-language export of
//! the provider's location list into the bilingual dataset file.

use super::common_io;
use super::dataset::DATASET_HEADER;
use crate::error::{GazetteerError, Result};
use crate::model::SourceRow;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::{Read, Write};
use std::path::Path;

/// One city in a single-language location list export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LocationRecord {
    pub country_name: String,
    pub country_code: String,
    pub state_name: String,
    pub state_code: String,
    pub city_name: String,
    pub city_code: String,
}

impl LocationRecord {
    fn join_key(&self) -> (&str, &str, &str) {
        (&self.country_code, &self.state_code, &self.city_code)
    }
}

/// Reads a location list export (CSV with a `CountryName,CountryCode,...`
/// header; `.gz` handled like the dataset).
pub fn read_location_list(path: &Path) -> Result<Vec<LocationRecord>> {
    let reader = common_io::open_stream(path)?;
    read_location_records(reader)
}

pub fn read_location_records<R: Read>(reader: R) -> Result<Vec<LocationRecord>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut out = Vec::new();
    for result in rdr.deserialize() {
        let record: LocationRecord = result?;
        out.push(record);
    }
    Ok(out)
}

/// Pairs every local record with the foreign records that share its
/// (country code, state code, city code). Output follows the local list.
pub fn merge_location_lists(
    local: &[LocationRecord],
    foreign: &[LocationRecord],
) -> Vec<SourceRow> {
    let mut by_code: HashMap<(&str, &str, &str), Vec<&LocationRecord>> = HashMap::new();
    for rec in foreign {
        by_code.entry(rec.join_key()).or_default().push(rec);
    }

    let mut rows = Vec::new();
    for l in local {
        let Some(matches) = by_code.get(&l.join_key()) else {
            tracing::debug!(city = %l.city_name, code = %l.city_code, "no foreign match");
            continue;
        };
        for f in matches {
            rows.push(SourceRow::new([
                &l.city_name,
                &f.city_name,
                &l.state_name,
                &f.state_name,
                &l.country_name,
                &f.country_name,
            ]));
        }
    }
    rows
}

/// Writes rows in the persisted dataset format, header first.
///
/// The format has no escaping, so a field containing a comma or a line
/// break is rejected before anything is written.
pub fn write_dataset(path: &Path, rows: &[SourceRow]) -> Result<()> {
    for (i, row) in rows.iter().enumerate() {
        if let Some(bad) = row
            .fields()
            .into_iter()
            .find(|f| f.contains([',', '\n', '\r']))
        {
            return Err(GazetteerError::InvalidData(format!(
                "row {}: field {bad:?} cannot be stored without escaping",
                i + 1
            )));
        }
    }

    let stream = common_io::create_stream(path)?;
    write_rows(stream, rows)?;
    tracing::info!(path = %path.display(), rows = rows.len(), "dataset written");
    Ok(())
}

fn write_rows<W: Write>(writer: W, rows: &[SourceRow]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(writer);
    wtr.write_record(DATASET_HEADER)?;
    for row in rows {
        wtr.write_record(row.fields())?;
    }
    wtr.flush()?;
    Ok(())
}

/// Reads two exports, merges them and writes the dataset. Returns the number
/// of rows written.
pub fn build_dataset(local_path: &Path, foreign_path: &Path, out_path: &Path) -> Result<usize> {
    let local = read_location_list(local_path)?;
    let foreign = read_location_list(foreign_path)?;
    let rows = merge_location_lists(&local, &foreign);
    tracing::info!(
        local = local.len(),
        foreign = foreign.len(),
        merged = rows.len(),
        "location lists merged"
    );
    write_dataset(out_path, &rows)?;
    Ok(rows.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Gazetteer;

    fn rec(country: (&str, &str), state: (&str, &str), city: (&str, &str)) -> LocationRecord {
        LocationRecord {
            country_name: country.0.into(),
            country_code: country.1.into(),
            state_name: state.0.into(),
            state_code: state.1.into(),
            city_name: city.0.into(),
            city_code: city.1.into(),
        }
    }

    fn sample_lists() -> (Vec<LocationRecord>, Vec<LocationRecord>) {
        let local = vec![
            rec(("中国", "1"), ("河北", "13"), ("石家庄", "1301")),
            rec(("英国", "826"), ("英格兰", "ENG"), ("伦敦", "LND")),
            rec(("中国", "1"), ("河北", "13"), ("无名", "9999")),
        ];
        let foreign = vec![
            rec(("United Kingdom", "826"), ("England", "ENG"), ("London", "LND")),
            rec(("China", "1"), ("Hebei", "13"), ("Shijiazhuang", "1301")),
        ];
        (local, foreign)
    }

    #[test]
    fn merge_joins_on_all_three_codes_in_local_order() {
        let (local, foreign) = sample_lists();
        let rows = merge_location_lists(&local, &foreign);
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0].fields(),
            ["石家庄", "Shijiazhuang", "河北", "Hebei", "中国", "China"]
        );
        assert_eq!(rows[1].foreign_name, "London");
    }

    #[test]
    fn reads_pascal_case_exports() {
        let csv = "CountryName,CountryCode,StateName,StateCode,CityName,CityCode\n\
                   China,1,Hebei,13,Shijiazhuang,1301\n";
        let recs = read_location_records(csv.as_bytes()).unwrap();
        assert_eq!(recs[0].city_code, "1301");
        assert_eq!(recs[0].state_name, "Hebei");
    }

    #[test]
    fn written_dataset_loads_back() {
        let (local, foreign) = sample_lists();
        let rows = merge_location_lists(&local, &foreign);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("all_city.csv");
        write_dataset(&path, &rows).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with(
            "ChineseName,EnglishName,StateName,StateNameEn,CountryName,CountryNameEn\n"
        ));

        let db = Gazetteer::try_load(&path).unwrap();
        assert_eq!(db.stats().cities, 2);
        assert_eq!(db.stats().regions, 2);
    }

    #[test]
    fn comma_in_field_is_rejected() {
        let rows = vec![SourceRow::new([
            "华盛顿", "Washington, D.C.", "", "", "美国", "United States",
        ])];
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        let err = write_dataset(&path, &rows).unwrap_err();
        assert!(matches!(err, GazetteerError::InvalidData(_)));
        assert!(!path.exists());
    }
}
