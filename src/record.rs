use csv::StringRecord;
use serde::Deserialize;

use crate::error::RowShape;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Postcode1,
    Postcode2,
    Postcode3,
    Easting,
    Northing,
    PositionalQuality,
    LocalAuthority,
    Longitude,
    Latitude,
    SpatialAccuracy,
    LastUpload,
    Location,
    SocrataId,
}

impl Field {
    pub const COUNT: usize = 13;

    pub fn index(self) -> usize {
        self as usize
    }
}

// Deserialized positionally: field order is column order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PostcodeRecord {
    postcode_1: String,
    postcode_2: String,
    postcode_3: String,
    easting: String,
    northing: String,
    positional_quality: String,
    local_authority: String,
    longitude: String,
    latitude: String,
    spatial_accuracy: String,
    last_upload: String,
    location: String,
    socrata_id: String,
}

impl PostcodeRecord {
    // trailing extra fields are ignored
    pub fn from_fields(fields: Vec<String>) -> Result<Self, RowShape> {
        let found = fields.len();
        let shape = RowShape {
            expected: Field::COUNT,
            found,
        };
        if found < Field::COUNT {
            return Err(shape);
        }
        StringRecord::from(fields)
            .deserialize(None)
            .map_err(|_| shape)
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Postcode1 => &self.postcode_1,
            Field::Postcode2 => &self.postcode_2,
            Field::Postcode3 => &self.postcode_3,
            Field::Easting => &self.easting,
            Field::Northing => &self.northing,
            Field::PositionalQuality => &self.positional_quality,
            Field::LocalAuthority => &self.local_authority,
            Field::Longitude => &self.longitude,
            Field::Latitude => &self.latitude,
            Field::SpatialAccuracy => &self.spatial_accuracy,
            Field::LastUpload => &self.last_upload,
            Field::Location => &self.location,
            Field::SocrataId => &self.socrata_id,
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_fields(postcode: &str) -> Vec<String> {
    vec![
        "NW1".to_string(),
        "NW1 4".to_string(),
        postcode.to_string(),
        "529041".to_string(),
        "182790".to_string(),
        "1".to_string(),
        "Camden".to_string(),
        "-0.139838".to_string(),
        "51.526421".to_string(),
        "Postcode Level".to_string(),
        "19/02/2014".to_string(),
        "(51.526421, -0.139838)".to_string(),
        "57".to_string(),
    ]
}
