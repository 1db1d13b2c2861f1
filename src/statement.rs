use crate::record::{Field, PostcodeRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Outcode,
    Column(Field),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quoting {
    Quoted,
    // numeric columns
    Raw,
}

pub struct Column {
    pub key: &'static str,
    pub source: Source,
    pub quoting: Quoting,
}

// statement order
pub const COLUMNS: [Column; 6] = [
    Column {
        key: "postcode",
        source: Source::Outcode,
        quoting: Quoting::Quoted,
    },
    Column {
        key: "easting",
        source: Source::Column(Field::Easting),
        quoting: Quoting::Raw,
    },
    Column {
        key: "northing",
        source: Source::Column(Field::Northing),
        quoting: Quoting::Raw,
    },
    Column {
        key: "location",
        source: Source::Column(Field::LocalAuthority),
        quoting: Quoting::Quoted,
    },
    Column {
        key: "longitude",
        source: Source::Column(Field::Longitude),
        quoting: Quoting::Raw,
    },
    Column {
        key: "latitude",
        source: Source::Column(Field::Latitude),
        quoting: Quoting::Raw,
    },
];

pub fn format_statement(table: &str, outcode: &str, record: &PostcodeRecord) -> String {
    let values: Vec<String> = COLUMNS
        .iter()
        .map(|column| {
            let value = match column.source {
                Source::Outcode => outcode,
                Source::Column(field) => record.get(field),
            };
            match column.quoting {
                Quoting::Quoted => format!("'{}' => '{}'", column.key, value),
                Quoting::Raw => format!("'{}' => {}", column.key, value),
            }
        })
        .collect();

    format!(
        "$this->connection->insert('{}',[{}]);",
        table,
        values.join(", ")
    )
}
