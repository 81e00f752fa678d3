//! Field names with gateway-side behavior.
//!
//! Records are schemaless; these are the few keys the gateway itself reads
//! or writes. Everything else passes through untouched.

/// Task priority, a number. Sort key for task listings.
pub const PRIORITY: &str = "priority";

/// Task start, an ISO-8601 local date-time on the wire. Rewritten for display.
pub const START_TIME: &str = "startTime";

/// Task end, an ISO-8601 local date-time on the wire. Rewritten for display.
pub const END_TIME: &str = "endTime";

/// Resource type name. Search key for resource listings.
pub const TYPE_NAME: &str = "typeName";

/// Units a resource type holds, a number. Sort key for resource listings.
pub const TOTAL_UNITS: &str = "totalUnits";

/// Instant a resource unit frees up, an ISO-8601 local date-time on the
/// wire. Rewritten for display.
pub const AVAILABLE_FROM: &str = "availableFrom";

/// Nested task record inside a schedule entry.
pub const TASK: &str = "task";

/// Nested resource list inside a schedule entry.
pub const ASSIGNED_RESOURCES: &str = "assignedResources";

/// Sole key of an error payload.
pub const ERROR: &str = "error";

/// Sole key of a plain confirmation payload.
pub const MESSAGE: &str = "message";
