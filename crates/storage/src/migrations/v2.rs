//! Migration v2: lookup indexes for natural-key deduplication

pub(super) const SQL: &str = "
CREATE INDEX IF NOT EXISTS idx_addresses_city ON addresses(city);
CREATE INDEX IF NOT EXISTS idx_organizations_name ON organizations(name);
";
