//! iOS `location-history.json` records.
//!
//! ```json
//! [{"activity": {"start": "geo:40.7128,-74.0060", "end": "geo:40.7589,-73.9851"}}]
//! ```

use serde_json::Value;

use super::{present, RecordScan};
use crate::coord::parse_geo_value;

/// Endpoint fields of an activity, in emission order.
const ACTIVITY_ENDPOINTS: [&str; 2] = ["start", "end"];

pub(super) fn scan_record(record: &Value, scan: &mut RecordScan<'_>) {
    let Some(activity) = record
        .as_object()
        .and_then(|r| r.get("activity"))
        .and_then(Value::as_object)
    else {
        return;
    };

    for key in ACTIVITY_ENDPOINTS {
        if let Some(value) = present(activity.get(key)) {
            scan.accept(key, parse_geo_value(value));
        }
    }
}
