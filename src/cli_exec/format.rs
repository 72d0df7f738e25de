use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

pub(super) fn unix_secs(secs: i64) -> String {
    if secs <= 0 {
        return "-".to_string();
    }
    OffsetDateTime::from_unix_timestamp(secs)
        .ok()
        .and_then(|t| t.format(&Rfc3339).ok())
        .unwrap_or_else(|| secs.to_string())
}

pub(super) fn unix_nanos(nanos: i64) -> String {
    if nanos <= 0 {
        return "-".to_string();
    }
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(nanos))
        .ok()
        .and_then(|t| t.format(&Rfc3339).ok())
        .unwrap_or_else(|| nanos.to_string())
}
