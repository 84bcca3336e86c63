mod geo_extent;
mod keyword;
mod record;

pub use self::geo_extent::{GeoExtent, GeoExtentBuilder};
pub use self::keyword::{KeywordGroup, KeywordTerm, Role, UnknownRole};
pub use self::record::DatasetRecord;
