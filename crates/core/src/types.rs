/// Every entity identifier is an opaque string, unique within its collection.
pub type EntityId = String;
