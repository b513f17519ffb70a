use std::{collections::BTreeMap, fs::File, path::Path};

use anyhow::{Context, Result};
use log::{info, warn};
use polars::{
    frame::DataFrame,
    io::{SerReader, SerWriter},
    prelude::{CsvReadOptions, CsvWriter, NamedFrom, StringChunked},
    series::Series,
};

use crate::boundary::{normalize_label, DistrictInfo, Year};

/// Per-district election attributes keyed by (year, normalized label),
/// iterated in (year, label) order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultsTable {
    rows: BTreeMap<(Year, String), DistrictInfo>,
}

impl ResultsTable {
    #[inline] pub fn len(&self) -> usize { self.rows.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Attributes for the district `label` in `year`.
    #[inline]
    pub fn get(&self, year: Year, label: &str) -> Option<&DistrictInfo> {
        self.rows.get(&(year, label.to_string()))
    }

    /// Iterate rows sorted by (year, label).
    pub fn iter(&self) -> impl Iterator<Item = (Year, &str, &DistrictInfo)> {
        self.rows.iter().map(|((year, label), info)| (*year, label.as_str(), info))
    }

    /// Aggregate a per-candidate results CSV into one row per district and year.
    pub fn from_candidates_csv(path: &Path, min_year: Year) -> Result<Self> {
        let df = read_string_csv(path)?;
        Self::from_candidates(&df, min_year)
            .with_context(|| format!("[store::results] Failed to aggregate results from {}", path.display()))
    }

    /// Aggregate per-candidate rows (`year, constituency, constituency_type,
    /// candidates, party, vote_count, vote_percentage`) from years at or after
    /// `min_year`.
    ///
    /// Seats are counted from the `|`-separated candidate list. A walkover is
    /// recorded as `"na"` votes and counts as 100% for the unopposed party.
    pub fn from_candidates(df: &DataFrame, min_year: Year) -> Result<Self> {
        let years = str_column(df, "year")?;
        let constituencies = str_column(df, "constituency")?;
        let types = str_column(df, "constituency_type")?;
        let candidates = str_column(df, "candidates")?;
        let parties = str_column(df, "party")?;
        let votes = str_column(df, "vote_count")?;
        let percentages = str_column(df, "vote_percentage")?;

        let mut rows: BTreeMap<(Year, String), DistrictInfo> = BTreeMap::new();
        for i in 0..df.height() {
            let year: Year = years.get(i).unwrap_or_default().parse()?;
            if year < min_year { continue }

            let label = normalize_label(constituencies.get(i).unwrap_or_default());
            let pax_number = candidates.get(i).unwrap_or_default().split('|').count() as u32;
            let entry = party_result(
                parties.get(i).unwrap_or_default(),
                votes.get(i).unwrap_or_default(),
                percentages.get(i).unwrap_or_default(),
            ).with_context(|| format!("[store::results] Bad vote percentage for {label} in {year}"))?;

            match rows.get_mut(&(year, label.clone())) {
                Some(info) => {
                    let constituency_type = types.get(i).unwrap_or_default().trim();
                    if info.constituency_type != constituency_type {
                        warn!("[store::results] {label} in {year} is listed as both {} and {constituency_type}",
                            info.constituency_type);
                    }
                    if info.pax_number != pax_number {
                        warn!("[store::results] {label} in {year} lists slates of {} and {pax_number} candidates",
                            info.pax_number);
                    }
                    info.result.push_str("; ");
                    info.result.push_str(&entry);
                }
                None => {
                    rows.insert((year, label), DistrictInfo {
                        constituency_type: types.get(i).unwrap_or_default().trim().to_string(),
                        pax_number,
                        result: entry,
                    });
                }
            }
        }

        info!("[store::results] aggregated {} candidate rows into {} districts", df.height(), rows.len());
        Ok(Self { rows })
    }

    /// Read a table previously written by [`ResultsTable::write_csv`].
    pub fn read_csv(path: &Path) -> Result<Self> {
        let df = read_string_csv(path)?;
        let years = str_column(&df, "year")?;
        let labels = str_column(&df, "ED_DESC")?;
        let types = str_column(&df, "constituency_type")?;
        let paxes = str_column(&df, "pax_number")?;
        let results = str_column(&df, "result")?;

        let mut rows = BTreeMap::new();
        for i in 0..df.height() {
            let year: Year = years.get(i).unwrap_or_default().parse()?;
            let pax = paxes.get(i).unwrap_or_default();
            let pax_number = pax.trim().parse::<u32>()
                .with_context(|| format!("[store::results] Invalid pax_number {pax:?} on row {i}"))?;
            rows.insert((year, normalize_label(labels.get(i).unwrap_or_default())), DistrictInfo {
                constituency_type: types.get(i).unwrap_or_default().to_string(),
                pax_number,
                result: results.get(i).unwrap_or_default().to_string(),
            });
        }
        Ok(Self { rows })
    }

    /// Write the table as `year,ED_DESC,constituency_type,pax_number,result`.
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        let mut df = self.to_dataframe()?;
        let file = File::create(path)
            .with_context(|| format!("[store::results] Failed to create CSV file: {}", path.display()))?;
        CsvWriter::new(file)
            .finish(&mut df)
            .with_context(|| format!("[store::results] Failed to write CSV to {:?}", path))
    }

    fn to_dataframe(&self) -> Result<DataFrame> {
        let years = self.iter().map(|(year, _, _)| year.0 as u32).collect::<Vec<_>>();
        let labels = self.iter().map(|(_, label, _)| label.to_string()).collect::<Vec<_>>();
        let types = self.iter().map(|(_, _, info)| info.constituency_type.clone()).collect::<Vec<_>>();
        let paxes = self.iter().map(|(_, _, info)| info.pax_number).collect::<Vec<_>>();
        let results = self.iter().map(|(_, _, info)| info.result.clone()).collect::<Vec<_>>();

        Ok(DataFrame::new(vec![
            Series::new("year".into(), years).into(),
            Series::new("ED_DESC".into(), labels).into(),
            Series::new("constituency_type".into(), types).into(),
            Series::new("pax_number".into(), paxes).into(),
            Series::new("result".into(), results).into(),
        ])?)
    }
}

/// Format one party's line: `"PARTY: VOTES (PCT%)"`.
fn party_result(party: &str, votes: &str, percentage: &str) -> Result<String> {
    let walkover = percentage.trim().eq_ignore_ascii_case("na");
    let share = if walkover { 1.0 } else { percentage.trim().parse::<f64>()? };
    let votes = if votes.trim().eq_ignore_ascii_case("na") { "Win by Walkover" } else { votes.trim() };
    Ok(format!("{}: {} ({:.1}%)", party.trim(), votes, share * 100.0))
}

/// Reads a CSV with every column kept as a string.
fn read_string_csv(path: &Path) -> Result<DataFrame> {
    let file = File::open(path)
        .with_context(|| format!("[store::results] Failed to open CSV file: {}", path.display()))?;
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(file)
        .finish()
        .with_context(|| format!("[store::results] Failed to read CSV from {:?}", path))
}

fn str_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a StringChunked> {
    df.column(name)
        .with_context(|| format!("[store::results] Missing column {name:?}"))?
        .str()
        .with_context(|| format!("[store::results] Column {name:?} is not text"))
}
