//! Offline build step turning the affiliate mapping sheet into the JSON
//! dataset the service loads at startup.

use std::collections::BTreeMap;
use std::io::{Read, Write};
use std::path::Path;

use super::directory::PartnerDataset;
use super::domain::{BrandColors, PartnerCode, PartnerRecord};

const PALETTE: &[(&str, &str)] = &[
    ("#22baed", "#eb5a41"),
    ("#3B82F6", "#EF4444"),
    ("#10B981", "#F59E0B"),
    ("#8B5CF6", "#EC4899"),
    ("#F97316", "#06B6D4"),
    ("#84CC16", "#DC2626"),
    ("#6366F1", "#F59E0B"),
    ("#14B8A6", "#EF4444"),
    ("#A855F7", "#F97316"),
    ("#059669", "#DC2626"),
    ("#2563EB", "#F59E0B"),
    ("#7C3AED", "#EF4444"),
];

#[derive(Debug, thiserror::Error)]
pub enum PartnerGeneratorError {
    #[error("failed to access partner mapping: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid partner mapping CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to encode partner dataset: {0}")]
    Json(#[from] serde_json::Error),
}

/// Colours assigned to the partner at `row_index`, cycling through the palette.
pub fn palette_for(row_index: usize) -> BrandColors {
    let (primary, secondary) = PALETTE[row_index % PALETTE.len()];
    BrandColors::new(primary, secondary)
}

/// Reads `cp_afid,affiliate_name` rows (header required) into a dataset.
pub fn generate_dataset<R: Read>(reader: R) -> Result<PartnerDataset, PartnerGeneratorError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut partners = BTreeMap::new();
    let header_line = csv_reader
        .headers()?
        .position()
        .map(|position| position.line())
        .unwrap_or(1);

    for (ordinal, row) in csv_reader.records().enumerate() {
        let row = row?;
        // Blank lines count as data rows for palette assignment.
        let index = row
            .position()
            .map(|position| position.line().saturating_sub(header_line + 1) as usize)
            .unwrap_or(ordinal);
        let code = clean(row.get(0));
        let name = clean(row.get(1));
        if code.is_empty() || name.is_empty() {
            tracing::debug!(row = index + 1, "skipping incomplete partner row");
            continue;
        }

        let record = PartnerRecord {
            code: PartnerCode::new(code.clone()),
            logo_url: format!("/logos/{code}.png"),
            logo_alt_text: format!("{name} - Powered by Compare Power"),
            name,
            active_status: true,
            created_date: None,
            brand_colors: Some(palette_for(index)),
        };
        partners.insert(code, record);
    }

    Ok(PartnerDataset { partners })
}

pub fn write_dataset<W: Write>(
    dataset: &PartnerDataset,
    mut writer: W,
) -> Result<(), PartnerGeneratorError> {
    serde_json::to_writer_pretty(&mut writer, dataset)?;
    writer.write_all(b"\n")?;
    Ok(())
}

/// Generates the dataset from `csv_path` and writes it to `out_path`.
pub fn generate_file<P, Q>(csv_path: P, out_path: Q) -> Result<PartnerDataset, PartnerGeneratorError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let source = std::fs::File::open(csv_path)?;
    let dataset = generate_dataset(source)?;

    if let Some(parent) = out_path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let output = std::fs::File::create(out_path.as_ref())?;
    write_dataset(&dataset, std::io::BufWriter::new(output))?;

    tracing::info!(
        partners = dataset.partners.len(),
        path = %out_path.as_ref().display(),
        "partner dataset written"
    );
    Ok(dataset)
}

fn clean(value: Option<&str>) -> String {
    value.unwrap_or_default().replace('\r', "").trim().to_string()
}
