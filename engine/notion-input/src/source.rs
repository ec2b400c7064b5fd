use std::fmt;
use std::str::FromStr;

/// Data sources the pipeline can fetch from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// Dated entries from the journal database
    DatabaseEntries,
    /// Recently created documents found via workspace search
    RecentDocuments,
}

impl DataSource {
    /// All data sources, in documentation order
    pub const ALL: [DataSource; 2] = [DataSource::DatabaseEntries, DataSource::RecentDocuments];

    /// The CLI token for this source
    pub fn as_str(&self) -> &'static str {
        match self {
            DataSource::DatabaseEntries => "database_entries",
            DataSource::RecentDocuments => "recent_documents",
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "database_entries" => Ok(DataSource::DatabaseEntries),
            "recent_documents" => Ok(DataSource::RecentDocuments),
            _ => Err(format!(
                "Unknown data source: '{}'. Valid sources: {}",
                s,
                Self::ALL
                    .iter()
                    .map(|v| v.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        }
    }
}
