use chrono::{DateTime, TimeZone, Utc};
use warrant_press::{
    ArrestEntry, CriminalRecord, WarrantKind, WarrantRecord, WarrantStatus,
};

pub fn at(month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, month, day, 14, 30, 0).unwrap()
}

/// A pending warrant of `kind` with a short narrative
pub fn warrant(kind: WarrantKind) -> WarrantRecord {
    WarrantRecord::new(
        "7c1e9b04-52aa-4f0e-b1d3-94e0a6c2f118",
        kind,
        at(10, 1),
        "Lt. Ramos#2210",
        "Franklin Clinton",
    )
    .with_narrative(
        "Receiving stolen vehicles.",
        "An informant reports that vehicles stolen in Vinewood are resprayed at a garage on Strawberry Avenue.",
    )
}

pub fn search_warrant(location: &str) -> WarrantRecord {
    warrant(WarrantKind::Search).with_location(location)
}

pub fn approved(record: WarrantRecord, judge: &str) -> WarrantRecord {
    record
        .with_status(WarrantStatus::Approved, at(10, 3))
        .with_judge(judge)
}

pub fn rejected(record: WarrantRecord, judge: &str, reason: &str) -> WarrantRecord {
    record
        .with_status(WarrantStatus::Rejected, at(10, 3))
        .with_judge(judge)
        .with_rejection_reason(reason)
}

pub fn cancelled(record: WarrantRecord, judge: &str) -> WarrantRecord {
    record
        .with_status(WarrantStatus::Cancelled, at(10, 3))
        .with_judge(judge)
}

/// Entries dated `R000`, `R001`, ... whose charges wrap to two ledger lines
pub fn two_line_entries(count: usize) -> Vec<ArrestEntry> {
    (0..count)
        .map(|i| ArrestEntry::new(format!("R{:03}", i), "xxxxxxxxx ".repeat(12)))
        .collect()
}

/// Short single-line entries with distinct charges
pub fn short_entries(count: usize) -> Vec<ArrestEntry> {
    (0..count)
        .map(|i| ArrestEntry::new(format!("R{:03}", i), format!("Charge number {}", i)))
        .collect()
}

pub fn criminal_record(entries: Vec<ArrestEntry>) -> CriminalRecord {
    CriminalRecord::new("Franklin Clinton", "LS-20931").with_entries(entries)
}

/// A record as the registry stores it on disk
pub fn stored_record_json() -> &'static str {
    r#"{
        "id": "a41f0c2d-9b7e-4e11-8c55-3d2e1f0a9b88",
        "type": "perquisition",
        "status": "approved",
        "createdAt": "2026-09-28T08:15:00.000Z",
        "updatedAt": "2026-09-29T17:45:00.000Z",
        "officerName": "Sgt. Vega#4821",
        "targetName": "Trevor Philips",
        "location": "Sandy Shores trailer park",
        "reason": "Illegal weapons cache",
        "details": "Aerial surveillance identified crates being unloaded at night.",
        "judgeName": "Judge Hale#0007",
        "criminalRecord": {
            "name": "Trevor Philips",
            "reference": "BC-11408",
            "arrests": [
                { "date": "2025-03-02", "charges": "Assault with a deadly weapon" },
                { "date": "2025-07-19", "charges": "Arson" }
            ]
        }
    }"#
}
