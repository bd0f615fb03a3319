//! HBase tables backing the time-series store.
//!
//! One-time provisioning; the console only renders the shell script.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Compression {
    None,
    Lzo,
    Gz,
    Snappy,
}

impl Compression {
    pub fn as_str(&self) -> &'static str {
        match self {
            Compression::None => "NONE",
            Compression::Lzo => "LZO",
            Compression::Gz => "GZ",
            Compression::Snappy => "SNAPPY",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BloomFilter {
    None,
    Row,
    RowCol,
}

impl BloomFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            BloomFilter::None => "NONE",
            BloomFilter::Row => "ROW",
            BloomFilter::RowCol => "ROWCOL",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnFamily {
    pub name: &'static str,
    pub versions: Option<u32>,
    pub compression: Compression,
    pub bloom_filter: BloomFilter,
}

impl ColumnFamily {
    fn new(name: &'static str, versions: Option<u32>) -> Self {
        Self {
            name,
            versions,
            compression: Compression::None,
            bloom_filter: BloomFilter::Row,
        }
    }

    fn to_shell(&self) -> String {
        let mut parts = vec![format!("NAME => '{}'", self.name)];
        if let Some(versions) = self.versions {
            parts.push(format!("VERSIONS => {}", versions));
        }
        parts.push(format!("COMPRESSION => '{}'", self.compression.as_str()));
        parts.push(format!("BLOOMFILTER => '{}'", self.bloom_filter.as_str()));
        format!("{{{}}}", parts.join(", "))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSpec {
    pub name: &'static str,
    pub families: Vec<ColumnFamily>,
}

impl TableSpec {
    fn to_shell(&self) -> String {
        let mut lines = vec![format!("create '{}'", self.name)];
        lines.extend(self.families.iter().map(ColumnFamily::to_shell));
        lines.join(", \\\n  ")
    }
}

pub fn tsdb_tables() -> Vec<TableSpec> {
    vec![
        TableSpec {
            name: "tsdb-uid",
            families: vec![ColumnFamily::new("id", None), ColumnFamily::new("name", None)],
        },
        TableSpec {
            name: "tsdb",
            families: vec![ColumnFamily::new("t", Some(1))],
        },
        TableSpec {
            name: "tsdb-tree",
            families: vec![ColumnFamily::new("t", Some(1))],
        },
        TableSpec {
            name: "tsdb-meta",
            families: vec![ColumnFamily::new("name", None)],
        },
    ]
}

/// Render `create` statements for the HBase shell
pub fn render_hbase_script(tables: &[TableSpec]) -> String {
    let mut script = tables
        .iter()
        .map(TableSpec::to_shell)
        .collect::<Vec<_>>()
        .join("\n\n");
    script.push('\n');
    script
}
