//! Migration v1: Initial schema

pub(super) const SQL: &str = "
CREATE TABLE IF NOT EXISTS winners (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    firstname TEXT,
    surname TEXT,
    born TEXT,
    died TEXT,
    gender TEXT,
    year INTEGER,
    category TEXT,
    motivation TEXT,
    overall_motivation TEXT,
    organization_id INTEGER REFERENCES organizations(id)
);

CREATE TABLE IF NOT EXISTS organizations (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    category TEXT,
    address_id INTEGER REFERENCES addresses(id)
);

CREATE TABLE IF NOT EXISTS addresses (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    street TEXT,
    zip TEXT,
    city TEXT,
    country TEXT,
    lon REAL NOT NULL DEFAULT 0,
    lat REAL NOT NULL DEFAULT 0,
    role TEXT NOT NULL CHECK (role IN ('birth', 'death', 'organization')),
    winner_id INTEGER REFERENCES winners(id),
    organization_id INTEGER REFERENCES organizations(id),
    CHECK (
        (role = 'organization' AND organization_id IS NOT NULL AND winner_id IS NULL)
        OR (role IN ('birth', 'death') AND winner_id IS NOT NULL AND organization_id IS NULL)
    )
);

CREATE INDEX IF NOT EXISTS idx_winners_organization ON winners(organization_id);
";
